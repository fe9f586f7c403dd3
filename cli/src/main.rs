#![cfg_attr(test, allow(unused_crate_dependencies))]
#![forbid(unsafe_code)]

mod cli_input;
mod collection;
mod errors;
mod log;
mod output;
mod request;
mod team;

use std::process;

use clap::Parser;
use teams_api::{ClientConfig, TeamsApi};

use crate::{
    cli_input::{Args, SubCommand},
    errors::CliError,
    output::report,
};

fn main() {
    let args = Args::parse();

    let exit_code = match try_main(args) {
        Ok(()) => 0,
        Err(error) => {
            report::error(&error);
            1
        }
    };

    process::exit(exit_code);
}

fn try_main(args: Args) -> Result<(), CliError> {
    log::init(args.log_level, args.log_style);

    tracing::trace!("subcommand: {}", args.command);

    let api = api(&args)?;

    match args.command {
        SubCommand::Team(cmd) => team::team(api, cmd.command),
        SubCommand::Collection(cmd) => collection::collection(api, cmd.command),
        SubCommand::Request(cmd) => request::request(api, cmd.command),
    }
}

/// The configuration file when given, the environment, then `--endpoint`, in increasing order of
/// precedence.
fn api(args: &Args) -> Result<TeamsApi, CliError> {
    let mut config = match &args.config_path {
        Some(path) => ClientConfig::load(path),
        None => ClientConfig::default().with_env_overrides(),
    }
    .map_err(CliError::ConfigError)?;

    if let Some(endpoint) = &args.endpoint {
        config.endpoint = endpoint.clone();
    }

    tracing::debug!(endpoint = %config.endpoint, "using endpoint");

    TeamsApi::from_config(&config).map_err(CliError::ConfigError)
}
