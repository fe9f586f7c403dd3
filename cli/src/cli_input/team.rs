use clap::Parser;
use teams_api::TeamMemberRole;

#[derive(Debug, Parser)]
pub struct TeamCommand {
    #[command(subcommand)]
    pub command: TeamSubCommand,
}

#[derive(Debug, Parser, strum::AsRefStr, strum::Display)]
#[strum(serialize_all = "kebab-case")]
pub enum TeamSubCommand {
    /// Create a team owned by the current user
    Create(TeamCreateCommand),
    /// Rename a team
    Rename(TeamRenameCommand),
    /// Delete a team with all its collections
    Delete(TeamIdCommand),
    /// Leave a team
    Leave(TeamIdCommand),
    /// Invite a user into a team by email
    AddMember(TeamAddMemberCommand),
    /// Remove a member from a team
    RemoveMember(TeamMemberCommand),
    /// Change the role of a team member
    SetRole(TeamSetRoleCommand),
    /// Show a team and its members
    Show(TeamIdCommand),
    /// List the teams of the current user
    List,
}

#[derive(Debug, Parser)]
pub struct TeamCreateCommand {
    /// The name of the new team
    pub name: String,
}

#[derive(Debug, Parser)]
pub struct TeamRenameCommand {
    pub team_id: String,
    /// The new name of the team
    pub new_name: String,
}

#[derive(Debug, Parser)]
pub struct TeamIdCommand {
    pub team_id: String,
}

#[derive(Debug, Parser)]
pub struct TeamAddMemberCommand {
    pub team_id: String,
    /// The email address the user signed up with
    pub email: String,
    /// The role granted to the new member: owner, editor or viewer
    #[arg(short, long, default_value_t = TeamMemberRole::Viewer)]
    pub role: TeamMemberRole,
}

#[derive(Debug, Parser)]
pub struct TeamMemberCommand {
    pub team_id: String,
    /// The uid of the member
    pub user_uid: String,
}

#[derive(Debug, Parser)]
pub struct TeamSetRoleCommand {
    pub team_id: String,
    /// The uid of the member
    pub user_uid: String,
    /// The new role: owner, editor or viewer
    pub role: TeamMemberRole,
}
