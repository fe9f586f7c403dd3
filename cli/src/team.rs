use serde_json::{json, Value};
use teams_api::TeamsApi;

use crate::{cli_input::TeamSubCommand, errors::CliError, output::report};

#[tokio::main]
pub async fn team(api: TeamsApi, command: TeamSubCommand) -> Result<(), CliError> {
    let output = run(&api, command).await?;
    report::output(&output)
}

pub(crate) async fn run(api: &TeamsApi, command: TeamSubCommand) -> Result<Value, CliError> {
    let output = match command {
        TeamSubCommand::Create(command) => {
            let name = api.create_team(&command.name).await.map_err(CliError::ApiError)?;
            json!({ "name": name })
        }
        TeamSubCommand::Rename(command) => {
            let id = api
                .rename_team(&command.new_name, &command.team_id)
                .await
                .map_err(CliError::ApiError)?;
            json!({ "id": id })
        }
        TeamSubCommand::Delete(command) => {
            let deleted = api.delete_team(&command.team_id).await.map_err(CliError::ApiError)?;
            json!({ "deleted": deleted })
        }
        TeamSubCommand::Leave(command) => {
            // the runtime ends with this command
            let left = api
                .exit_team(&command.team_id)
                .outcome()
                .await
                .map_err(CliError::ApiError)?;
            json!({ "left": left })
        }
        TeamSubCommand::AddMember(command) => {
            let role = api
                .add_team_member_by_email(command.role, &command.email, &command.team_id)
                .await
                .map_err(CliError::ApiError)?;
            json!({ "email": command.email, "role": role })
        }
        TeamSubCommand::RemoveMember(command) => {
            let removed = api
                .remove_team_member(&command.user_uid, &command.team_id)
                .await
                .map_err(CliError::ApiError)?;
            json!({ "removed": removed })
        }
        TeamSubCommand::SetRole(command) => {
            let role = api
                .update_team_member_role(&command.user_uid, command.role, &command.team_id)
                .await
                .map_err(CliError::ApiError)?;
            json!({ "userUid": command.user_uid, "role": role })
        }
        TeamSubCommand::Show(command) => {
            let team = api.team(&command.team_id).await.map_err(CliError::ApiError)?;
            serde_json::to_value(team).map_err(CliError::SerializeOutput)?
        }
        TeamSubCommand::List => {
            let teams = api.my_teams().await.map_err(CliError::ApiError)?;
            serde_json::to_value(teams).map_err(CliError::SerializeOutput)?
        }
    };

    Ok(output)
}
