use std::{io, path::PathBuf};

use teams_api::errors::{ApiError, ConfigError, TransportError};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    /// wraps an error originating in the teams-api configuration
    #[error(transparent)]
    ConfigError(ConfigError),
    /// wraps an error returned by an API operation
    #[error(transparent)]
    ApiError(ApiError),
    /// returned if the file holding a request payload could not be read
    #[error("could not read the request payload from '{}'\nCaused by: {source}", path.display())]
    ReadPayload { path: PathBuf, source: io::Error },
    /// returned if a request payload is not valid JSON
    #[error("the request payload is not valid JSON\nCaused by: {0}")]
    InvalidPayload(serde_json::Error),
    /// returned if the result of a command could not be printed
    #[error("could not serialize the command output\nCaused by: {0}")]
    SerializeOutput(serde_json::Error),
}

impl CliError {
    /// returns the appropriate hint for a [`CliError`]
    pub fn to_hint(&self) -> Option<String> {
        match self {
            Self::ConfigError(ConfigError::ReadFile { .. }) => {
                Some("pass the path of an existing TOML file to '--config'".to_owned())
            }
            Self::ConfigError(ConfigError::InvalidEndpoint { .. }) => {
                Some("the endpoint must be an absolute URL, for example 'https://api.example.com/graphql'".to_owned())
            }
            Self::ApiError(ApiError::Transport(TransportError::Connection(_) | TransportError::Timeout)) => Some(
                "check that the API is reachable at the configured endpoint, or point '--endpoint' elsewhere".to_owned(),
            ),
            Self::ApiError(ApiError::Transport(TransportError::Status { status: 401 | 403, .. })) => {
                Some("check the access token in the configuration file or in 'TEAMS_API_TOKEN'".to_owned())
            }
            Self::ApiError(ApiError::EmptyResponse(_)) => {
                Some("the server may be temporarily unavailable, try again in a moment".to_owned())
            }
            Self::ApiError(ApiError::TeamNotFound(_)) => Some("list your teams with 'teams team list'".to_owned()),
            Self::ApiError(ApiError::CollectionNotFound(_)) => {
                Some("list the root collections of a team with 'teams collection roots <TEAM_ID>'".to_owned())
            }
            Self::InvalidPayload(_) => Some("pass the request as a JSON document, for example '{}'".to_owned()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use teams_api::errors::{ApiError, TransportError};

    use super::CliError;

    #[test]
    fn rejected_tokens_point_at_the_configuration() {
        let error = CliError::ApiError(ApiError::Transport(TransportError::Status {
            status: 401,
            body: String::new(),
        }));

        insta::assert_snapshot!(error.to_hint().unwrap(), @"check the access token in the configuration file or in 'TEAMS_API_TOKEN'");
    }

    #[test]
    fn server_rejections_have_no_hint() {
        let error = CliError::ApiError(ApiError::GraphQl {
            operation: "renameTeam",
            messages: vec!["team/name_invalid".into()],
        });

        assert_eq!(None, error.to_hint());
        assert_eq!("the server rejected `renameTeam`: team/name_invalid", error.to_string());
    }
}
