use serde_json::{json, Value};
use teams_api::TeamsApi;

use crate::{cli_input::CollectionSubCommand, errors::CliError, output::report};

#[tokio::main]
pub async fn collection(api: TeamsApi, command: CollectionSubCommand) -> Result<(), CliError> {
    let output = run(&api, command).await?;
    report::output(&output)
}

pub(crate) async fn run(api: &TeamsApi, command: CollectionSubCommand) -> Result<Value, CliError> {
    let output = match command {
        CollectionSubCommand::Roots(command) => {
            let collections = api
                .root_collections_of_team(&command.team_id)
                .await
                .map_err(CliError::ApiError)?;
            serde_json::to_value(collections).map_err(CliError::SerializeOutput)?
        }
        CollectionSubCommand::Children(command) => {
            let children = api
                .get_collection_children(&command.collection_id)
                .await
                .map_err(CliError::ApiError)?;
            serde_json::to_value(children).map_err(CliError::SerializeOutput)?
        }
        CollectionSubCommand::Requests(command) => {
            let requests = api
                .get_collection_requests(&command.collection_id)
                .await
                .map_err(CliError::ApiError)?;
            serde_json::to_value(requests).map_err(CliError::SerializeOutput)?
        }
        CollectionSubCommand::Create(command) => {
            let id = api
                .create_new_root_collection(&command.title, &command.team_id)
                .await
                .map_err(CliError::ApiError)?;
            json!({ "id": id })
        }
        CollectionSubCommand::AddChild(command) => {
            let id = api
                .add_child_collection(&command.title, &command.collection_id)
                .await
                .map_err(CliError::ApiError)?;
            json!({ "id": id })
        }
        CollectionSubCommand::Rename(command) => {
            let id = api
                .rename_collection(&command.new_title, &command.collection_id)
                .await
                .map_err(CliError::ApiError)?;
            json!({ "id": id })
        }
        CollectionSubCommand::Delete(command) => {
            let deleted = api
                .delete_collection(&command.collection_id)
                .await
                .map_err(CliError::ApiError)?;
            json!({ "deleted": deleted })
        }
    };

    Ok(output)
}
