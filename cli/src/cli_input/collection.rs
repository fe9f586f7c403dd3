use clap::Parser;

#[derive(Debug, Parser)]
pub struct CollectionCommand {
    #[command(subcommand)]
    pub command: CollectionSubCommand,
}

#[derive(Debug, Parser, strum::AsRefStr, strum::Display)]
#[strum(serialize_all = "kebab-case")]
pub enum CollectionSubCommand {
    /// List the root collections of a team
    Roots(CollectionTeamCommand),
    /// List the direct children of a collection
    Children(CollectionIdCommand),
    /// List the requests saved in a collection
    Requests(CollectionIdCommand),
    /// Create a root collection in a team
    Create(CollectionCreateCommand),
    /// Create a collection inside another one
    AddChild(CollectionAddChildCommand),
    /// Rename a collection
    Rename(CollectionRenameCommand),
    /// Delete a collection with everything it contains
    Delete(CollectionIdCommand),
}

#[derive(Debug, Parser)]
pub struct CollectionTeamCommand {
    pub team_id: String,
}

#[derive(Debug, Parser)]
pub struct CollectionIdCommand {
    pub collection_id: String,
}

#[derive(Debug, Parser)]
pub struct CollectionCreateCommand {
    pub team_id: String,
    pub title: String,
}

#[derive(Debug, Parser)]
pub struct CollectionAddChildCommand {
    /// The parent collection
    pub collection_id: String,
    pub title: String,
}

#[derive(Debug, Parser)]
pub struct CollectionRenameCommand {
    pub collection_id: String,
    pub new_title: String,
}
