//! Test doubles implementing [`teams_api::GraphqlClient`].
//!
//! [`ScriptedClient`] replays a queue of canned responses, for exercising error handling and
//! retries. [`FakeTeamsServer`] keeps teams, collections and requests in memory and answers
//! operations the way the real API does.

#![cfg_attr(test, allow(unused_crate_dependencies))]

mod fake_server;
mod scripted;

pub use fake_server::{FakeTeamsServer, PAGE_SIZE};
pub use scripted::{RecordedOperation, ScriptedClient};
