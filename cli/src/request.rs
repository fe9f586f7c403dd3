use std::path::Path;

use serde_json::{json, Value};
use teams_api::TeamsApi;

use crate::{
    cli_input::{RequestSaveCommand, RequestSubCommand},
    errors::CliError,
    output::report,
};

#[tokio::main]
pub async fn request(api: TeamsApi, command: RequestSubCommand) -> Result<(), CliError> {
    let output = run(&api, command).await?;
    report::output(&output)
}

pub(crate) async fn run(api: &TeamsApi, command: RequestSubCommand) -> Result<Value, CliError> {
    let output = match command {
        RequestSubCommand::Save(command) => {
            let payload = payload(&command)?;

            api.save_request_as_teams(&payload, &command.title, &command.team_id, &command.collection_id)
                .await
                .map_err(CliError::ApiError)?;

            json!({ "saved": true, "title": command.title })
        }
        RequestSubCommand::Delete(command) => {
            let deleted = api.delete_request(&command.request_id).await.map_err(CliError::ApiError)?;
            json!({ "deleted": deleted })
        }
    };

    Ok(output)
}

fn payload(command: &RequestSaveCommand) -> Result<Value, CliError> {
    let contents = match (&command.payload, &command.file) {
        (Some(payload), _) => payload.clone(),
        (None, Some(path)) => read_payload(path)?,
        (None, None) => return Ok(Value::Object(Default::default())),
    };

    serde_json::from_str(&contents).map_err(CliError::InvalidPayload)
}

fn read_payload(path: &Path) -> Result<String, CliError> {
    std::fs::read_to_string(path).map_err(|source| CliError::ReadPayload {
        path: path.to_path_buf(),
        source,
    })
}
