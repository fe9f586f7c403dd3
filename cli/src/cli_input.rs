pub(crate) mod collection;
pub(crate) mod request;
mod sub_command;
pub(crate) mod team;

pub(crate) use collection::{CollectionCommand, CollectionSubCommand};
pub(crate) use request::{RequestCommand, RequestSaveCommand, RequestSubCommand};
pub(crate) use sub_command::SubCommand;
pub(crate) use team::{TeamCommand, TeamSubCommand};

use std::path::PathBuf;

use clap::Parser;
use teams_api::ENDPOINT_ENV_VAR;
use url::Url;

use crate::log::{LogLevel, LogStyle};

/// Manage teams, their collections and saved requests
#[derive(Debug, Parser)]
#[command(name = "teams", version)]
pub struct Args {
    #[command(subcommand)]
    pub command: SubCommand,
    /// The path of the TOML configuration file
    #[arg(short('c'), long("config"), global = true)]
    pub config_path: Option<PathBuf>,
    /// The GraphQL endpoint, takes precedence over the configuration file
    #[arg(long, env = ENDPOINT_ENV_VAR, global = true)]
    pub endpoint: Option<Url>,
    /// Set the logging level, overridden by RUST_LOG when set
    #[arg(long, value_enum, default_value_t = LogLevel::default(), global = true)]
    pub log_level: LogLevel,
    /// Set the style of log output
    #[arg(long, value_enum, default_value_t = LogStyle::default(), global = true)]
    pub log_style: LogStyle,
}
