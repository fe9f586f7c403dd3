mod collections;
mod requests;
mod teams;

pub use collections::RootCollections;
pub use requests::{CollectionRequests, REQUESTS_PAGE_SIZE};
pub use teams::{LeaveTeamHandle, MyTeams};

use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::Value;

use crate::{
    client::{GraphqlClient, GraphqlRequest, OperationKind, SharedClient},
    config::ClientConfig,
    errors::{ApiError, ConfigError},
    http::HttpClient,
    retry::RetryPolicy,
};

/// Entry point for every team, collection and request operation.
///
/// Cloning is cheap: clones share the underlying client.
#[derive(Clone, Debug)]
pub struct TeamsApi {
    client: SharedClient,
    retry: RetryPolicy,
}

impl TeamsApi {
    pub fn new(client: impl GraphqlClient + 'static) -> Self {
        Self {
            client: SharedClient::new(client),
            retry: RetryPolicy::default(),
        }
    }

    /// Talks to the configured endpoint over HTTP.
    pub fn from_config(config: &ClientConfig) -> Result<Self, ConfigError> {
        Ok(Self::new(HttpClient::new(config)?).with_retry_policy(config.retry))
    }

    #[must_use]
    pub fn with_retry_policy(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    pub fn retry_policy(&self) -> RetryPolicy {
        self.retry
    }

    async fn query<ResponseData, Variables>(
        &self,
        operation: &'static str,
        built: &cynic::Operation<ResponseData, Variables>,
    ) -> Result<ResponseData, ApiError>
    where
        ResponseData: DeserializeOwned,
        Variables: Serialize,
    {
        let request = GraphqlRequest::from_operation(operation, built)?;
        self.send(OperationKind::Query, operation, request).await
    }

    async fn mutate<ResponseData, Variables>(
        &self,
        operation: &'static str,
        built: &cynic::Operation<ResponseData, Variables>,
    ) -> Result<ResponseData, ApiError>
    where
        ResponseData: DeserializeOwned,
        Variables: Serialize,
    {
        let request = GraphqlRequest::from_operation(operation, built)?;
        self.send(OperationKind::Mutation, operation, request).await
    }

    /// Sends a mutation under the retry policy. Only empty responses and transient transport
    /// failures are retried.
    async fn mutate_with_retries<ResponseData, Variables>(
        &self,
        operation: &'static str,
        built: &cynic::Operation<ResponseData, Variables>,
    ) -> Result<ResponseData, ApiError>
    where
        ResponseData: DeserializeOwned,
        Variables: Serialize,
    {
        let request = GraphqlRequest::from_operation(operation, built)?;

        self.retry
            .run(operation, move || {
                self.send(OperationKind::Mutation, operation, request.clone())
            })
            .await
    }

    async fn send<ResponseData>(
        &self,
        kind: OperationKind,
        operation: &'static str,
        request: GraphqlRequest,
    ) -> Result<ResponseData, ApiError>
    where
        ResponseData: DeserializeOwned,
    {
        tracing::debug!(operation, %kind, "sending operation");

        let response = self.client.send(kind, request).await?;

        decode(operation, response)
    }
}

/// A response body where both `data` and `errors` may be missing or null.
#[derive(Deserialize)]
struct Envelope<ResponseData> {
    data: Option<ResponseData>,
    errors: Option<Vec<cynic::GraphQlError>>,
}

fn decode<ResponseData>(operation: &'static str, response: Value) -> Result<ResponseData, ApiError>
where
    ResponseData: DeserializeOwned,
{
    let Envelope { data, errors } = serde_json::from_value::<Envelope<ResponseData>>(response)
        .map_err(|source| ApiError::DecodeResponse { operation, source })?;

    let messages: Vec<String> = errors
        .unwrap_or_default()
        .into_iter()
        .map(|error| error.message)
        .collect();

    match data {
        Some(data) => {
            if !messages.is_empty() {
                tracing::warn!(operation, "partial response: {}", messages.join("; "));
            }

            Ok(data)
        }
        None if messages.is_empty() => Err(ApiError::EmptyResponse(operation)),
        None => Err(ApiError::GraphQl { operation, messages }),
    }
}
