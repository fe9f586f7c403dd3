use std::{fmt, sync::Arc};

use serde_json::Value;

use crate::errors::{ApiError, TransportError};

pub type TransportResult<T> = Result<T, TransportError>;

/// A GraphQL request as it goes over the wire.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphqlRequest {
    pub query: String,
    #[serde(default)]
    pub variables: Value,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub operation_name: Option<String>,
}

impl GraphqlRequest {
    pub(crate) fn from_operation<ResponseData, Variables>(
        operation: &'static str,
        built: &cynic::Operation<ResponseData, Variables>,
    ) -> Result<Self, ApiError>
    where
        Variables: serde::Serialize,
    {
        serde_json::to_value(built)
            .and_then(serde_json::from_value)
            .map_err(|source| ApiError::EncodeOperation { operation, source })
    }

    /// Looks up a single variable by name.
    pub fn variable(&self, name: &str) -> Option<&Value> {
        self.variables.get(name)
    }

    /// The name of the first root field selected by the document, e.g. `rootCollectionsOfTeam`.
    pub fn root_field(&self) -> Option<&str> {
        let selection = &self.query[self.query.find('{')? + 1..];
        let selection = selection.trim_start();
        let end = selection
            .find(|c: char| !(c.is_ascii_alphanumeric() || c == '_'))
            .unwrap_or(selection.len());

        Some(&selection[..end]).filter(|name| !name.is_empty())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OperationKind {
    Query,
    Mutation,
}

impl fmt::Display for OperationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OperationKind::Query => f.write_str("query"),
            OperationKind::Mutation => f.write_str("mutation"),
        }
    }
}

/// The boundary between the API facade and whatever actually talks to the server.
///
/// Implementations return the raw GraphQL response envelope (`data` and `errors`); decoding
/// happens in the facade so that test doubles only need to produce JSON.
#[async_trait::async_trait]
pub trait GraphqlClient: Send + Sync {
    async fn query(&self, request: GraphqlRequest) -> TransportResult<Value>;

    async fn mutate(&self, request: GraphqlRequest) -> TransportResult<Value>;
}

#[async_trait::async_trait]
impl<T: GraphqlClient + ?Sized> GraphqlClient for Arc<T> {
    async fn query(&self, request: GraphqlRequest) -> TransportResult<Value> {
        self.as_ref().query(request).await
    }

    async fn mutate(&self, request: GraphqlRequest) -> TransportResult<Value> {
        self.as_ref().mutate(request).await
    }
}

/// A cheaply cloneable handle to a [`GraphqlClient`].
#[derive(Clone)]
pub struct SharedClient {
    inner: Arc<dyn GraphqlClient>,
}

impl SharedClient {
    pub fn new(client: impl GraphqlClient + 'static) -> SharedClient {
        SharedClient {
            inner: Arc::new(client),
        }
    }

    pub(crate) async fn send(&self, kind: OperationKind, request: GraphqlRequest) -> TransportResult<Value> {
        match kind {
            OperationKind::Query => self.inner.query(request).await,
            OperationKind::Mutation => self.inner.mutate(request).await,
        }
    }
}

impl fmt::Debug for SharedClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SharedClient").finish_non_exhaustive()
    }
}
