use std::{path::Path, time::Duration};

use secrecy::SecretString;
use url::Url;

use crate::{errors::ConfigError, retry::RetryPolicy};

pub const ENDPOINT_ENV_VAR: &str = "TEAMS_API_ENDPOINT";
pub const TOKEN_ENV_VAR: &str = "TEAMS_API_TOKEN";

const DEFAULT_ENDPOINT: &str = "http://localhost:3170/graphql";
const DEFAULT_USER_AGENT: &str = concat!("teams-api/", env!("CARGO_PKG_VERSION"));

/// Settings for talking to the team and collection API.
///
/// ```toml
/// endpoint = "https://api.example.com/graphql"
/// access_token = "..."
/// timeout = "30s"
///
/// [retry]
/// max_attempts = 5
/// initial_backoff = "100ms"
/// max_backoff = "2s"
/// ```
#[derive(Clone, Debug, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ClientConfig {
    /// The GraphQL endpoint.
    pub endpoint: Url,
    /// Sent as a bearer token when present.
    pub access_token: Option<SecretString>,
    /// Timeout for a single request. No timeout when unset.
    #[serde(deserialize_with = "duration_str::deserialize_option_duration")]
    pub timeout: Option<Duration>,
    pub user_agent: String,
    /// Retry settings for the mutations that are sent again on transient failures.
    pub retry: RetryPolicy,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoint: Self::default_endpoint(),
            access_token: None,
            timeout: None,
            user_agent: DEFAULT_USER_AGENT.to_owned(),
            retry: RetryPolicy::default(),
        }
    }
}

impl ClientConfig {
    fn default_endpoint() -> Url {
        Url::parse(DEFAULT_ENDPOINT).expect("must be correct")
    }

    /// Reads the configuration from a TOML file, then applies environment overrides.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();

        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadFile {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_toml(&contents)?.with_env_overrides()
    }

    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(contents)?)
    }

    /// Applies `TEAMS_API_ENDPOINT` and `TEAMS_API_TOKEN` on top of the current values.
    pub fn with_env_overrides(mut self) -> Result<Self, ConfigError> {
        if let Ok(value) = std::env::var(ENDPOINT_ENV_VAR) {
            self.endpoint = Url::parse(&value).map_err(|source| ConfigError::InvalidEndpoint { value, source })?;
        }

        if let Ok(token) = std::env::var(TOKEN_ENV_VAR) {
            self.access_token = Some(SecretString::new(token));
        }

        Ok(self)
    }
}
