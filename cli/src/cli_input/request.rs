use std::path::PathBuf;

use clap::Parser;

#[derive(Debug, Parser)]
pub struct RequestCommand {
    #[command(subcommand)]
    pub command: RequestSubCommand,
}

#[derive(Debug, Parser, strum::AsRefStr, strum::Display)]
#[strum(serialize_all = "kebab-case")]
pub enum RequestSubCommand {
    /// Save a request into a collection of a team
    Save(RequestSaveCommand),
    /// Delete a saved request
    Delete(RequestDeleteCommand),
}

#[derive(Debug, Parser)]
pub struct RequestSaveCommand {
    pub team_id: String,
    pub collection_id: String,
    pub title: String,
    /// The request as a JSON document
    #[arg(long, required_unless_present = "file", conflicts_with = "file")]
    pub payload: Option<String>,
    /// A file holding the request as a JSON document
    #[arg(short, long)]
    pub file: Option<PathBuf>,
}

#[derive(Debug, Parser)]
pub struct RequestDeleteCommand {
    pub request_id: String,
}
