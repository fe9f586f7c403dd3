use clap::Parser;

use super::{CollectionCommand, RequestCommand, TeamCommand};

#[derive(Debug, Parser, strum::AsRefStr, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum SubCommand {
    /// Create, rename and delete teams, and manage their members
    Team(TeamCommand),
    /// Browse and organize the collections of a team
    Collection(CollectionCommand),
    /// Save requests into collections, or delete them
    Request(RequestCommand),
}
