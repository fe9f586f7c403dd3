//! Typed client for the team and collection GraphQL API.
//!
//! ```ignore
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! use teams_api::{ClientConfig, TeamsApi};
//!
//! let api = TeamsApi::from_config(&ClientConfig::load("teams.toml")?)?;
//!
//! for collection in api.root_collections_of_team("team-id").await? {
//!     println!("{}: {}", collection.id, collection.title);
//! }
//! # Ok(())
//! # }
//! ```

#![cfg_attr(test, allow(unused_crate_dependencies))]

mod api;
mod client;
mod config;
mod graphql;
mod http;
mod pagination;
mod retry;

pub mod errors;
pub mod types;

pub use api::{CollectionRequests, LeaveTeamHandle, MyTeams, RootCollections, TeamsApi, REQUESTS_PAGE_SIZE};
pub use client::{GraphqlClient, GraphqlRequest, OperationKind, TransportResult};
pub use config::{ClientConfig, ENDPOINT_ENV_VAR, TOKEN_ENV_VAR};
pub use graphql::TeamMemberRole;
pub use http::HttpClient;
pub use pagination::{Cursor, PageSource, Paginator, Termination};
pub use retry::RetryPolicy;
