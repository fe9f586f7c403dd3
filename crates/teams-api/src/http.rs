use reqwest::header::{self, HeaderValue};
use secrecy::{ExposeSecret, SecretString};
use serde_json::Value;
use url::Url;

use crate::{
    client::{GraphqlClient, GraphqlRequest, OperationKind, TransportResult},
    config::ClientConfig,
    errors::{ConfigError, TransportError},
};

/// Sends operations to the API over HTTP.
pub struct HttpClient {
    client: reqwest::Client,
    endpoint: Url,
    access_token: Option<SecretString>,
}

impl HttpClient {
    pub fn new(config: &ClientConfig) -> Result<Self, ConfigError> {
        let mut builder = reqwest::Client::builder().user_agent(config.user_agent.as_str());

        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }

        let client = builder
            .build()
            .map_err(|error| ConfigError::BuildClient(error.to_string()))?;

        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
            access_token: config.access_token.clone(),
        })
    }

    async fn post(&self, kind: OperationKind, request: GraphqlRequest) -> TransportResult<Value> {
        let mut request_builder = self
            .client
            .post(self.endpoint.clone())
            .header(header::ACCEPT, "application/json")
            .json(&request);

        if kind == OperationKind::Query {
            request_builder = request_builder.header(header::CACHE_CONTROL, HeaderValue::from_static("no-cache"));
        }

        if let Some(token) = &self.access_token {
            request_builder = request_builder.bearer_auth(token.expose_secret());
        }

        tracing::trace!(%kind, endpoint = %self.endpoint, "posting operation");

        let response = request_builder.send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(TransportError::Status {
                status: status.as_u16(),
                body,
            });
        }

        response.json().await.map_err(TransportError::from)
    }
}

#[async_trait::async_trait]
impl GraphqlClient for HttpClient {
    async fn query(&self, request: GraphqlRequest) -> TransportResult<Value> {
        self.post(OperationKind::Query, request).await
    }

    async fn mutate(&self, request: GraphqlRequest) -> TransportResult<Value> {
        self.post(OperationKind::Mutation, request).await
    }
}
