use std::{io, path::PathBuf};
use thiserror::Error;

/// Failures of the underlying GraphQL client, before any response body is interpreted.
#[derive(Error, Debug)]
pub enum TransportError {
    /// returned if the server could not be reached
    #[error("could not connect to the server\nCaused by: {0}")]
    Connection(String),

    /// returned if the request did not complete within the configured timeout
    #[error("the request timed out")]
    Timeout,

    /// returned if the server answered with a non-success status code
    #[error("the server responded with status {status}: {body}")]
    Status { status: u16, body: String },

    /// returned if the request could not be sent for any other reason
    #[error("could not complete a request: {0}")]
    Request(String),

    /// returned if the response body is not valid JSON
    #[error("the server returned an invalid body\nCaused by: {0}")]
    InvalidBody(String),
}

impl TransportError {
    /// Whether sending the same request again may succeed.
    pub fn is_transient(&self) -> bool {
        match self {
            TransportError::Connection(_) | TransportError::Timeout => true,
            TransportError::Status { status, .. } => *status == 429 || (500..600).contains(status),
            TransportError::Request(_) | TransportError::InvalidBody(_) => false,
        }
    }
}

impl From<reqwest::Error> for TransportError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_timeout() {
            TransportError::Timeout
        } else if error.is_connect() {
            TransportError::Connection(error.to_string())
        } else if error.is_decode() {
            TransportError::InvalidBody(error.to_string())
        } else {
            TransportError::Request(error.to_string())
        }
    }
}

#[derive(Error, Debug)]
pub enum ApiError {
    /// wraps a [`TransportError`]
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// returned if the variables of an operation could not be encoded
    #[error("could not encode the `{operation}` operation\nCaused by: {source}")]
    EncodeOperation {
        operation: &'static str,
        source: serde_json::Error,
    },

    /// returned if a response does not match the shape of the operation
    #[error("could not decode the response to `{operation}`\nCaused by: {source}")]
    DecodeResponse {
        operation: &'static str,
        source: serde_json::Error,
    },

    /// returned if a response carries neither data nor errors
    #[error("the server returned an empty response to `{0}`")]
    EmptyResponse(&'static str),

    /// returned if the server rejected an operation
    #[error("the server rejected `{operation}`: {}", messages.join("; "))]
    GraphQl {
        operation: &'static str,
        messages: Vec<String>,
    },

    /// returned if a team lookup came back empty
    #[error("could not find the team {0}")]
    TeamNotFound(String),

    /// returned if a collection lookup came back empty
    #[error("could not find the collection {0}")]
    CollectionNotFound(String),

    /// returned if a request payload could not be serialized
    #[error("could not serialize the request payload\nCaused by: {0}")]
    SerializePayload(serde_json::Error),

    /// returned if a spawned operation panicked or was cancelled
    #[error("the background `{operation}` task did not complete\nCaused by: {reason}")]
    BackgroundTask { operation: &'static str, reason: String },
}

impl ApiError {
    /// Whether the retry policy may send the operation again.
    pub fn is_retriable(&self) -> bool {
        match self {
            ApiError::EmptyResponse(_) => true,
            ApiError::Transport(error) => error.is_transient(),
            _ => false,
        }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    /// returned if the configuration file could not be read
    #[error("could not read '{}'\nCaused by: {source}", path.display())]
    ReadFile { path: PathBuf, source: io::Error },

    /// returned if the configuration file is not valid
    #[error("could not parse the configuration\nCaused by: {0}")]
    Parse(#[from] toml::de::Error),

    /// returned if an endpoint override is not a valid URL
    #[error("invalid endpoint '{value}'\nCaused by: {source}")]
    InvalidEndpoint { value: String, source: url::ParseError },

    /// returned if the HTTP client could not be built from the configuration
    #[error("could not build the HTTP client\nCaused by: {0}")]
    BuildClient(String),
}
