use cynic::{MutationBuilder, QueryBuilder};
use tokio::task::JoinHandle;
use tracing::Instrument;

use super::TeamsApi;
use crate::{
    errors::ApiError,
    graphql::{mutations, queries, TeamMemberRole},
    pagination::{PageSource, Paginator, Termination},
    types::{Team, TeamSummary},
};

impl TeamsApi {
    /// Creates a team owned by the current user and returns its name as stored by the server.
    #[tracing::instrument(skip(self))]
    pub async fn create_team(&self, name: &str) -> Result<String, ApiError> {
        let operation = mutations::CreateTeam::build(mutations::CreateTeamArguments { name });
        let data = self.mutate("createTeam", &operation).await?;

        Ok(data.create_team.name)
    }

    /// Invites a user into the team and returns the role they were granted.
    #[tracing::instrument(skip(self, user_email))]
    pub async fn add_team_member_by_email(
        &self,
        user_role: TeamMemberRole,
        user_email: &str,
        team_id: &str,
    ) -> Result<TeamMemberRole, ApiError> {
        let operation = mutations::AddTeamMemberByEmail::build(mutations::AddTeamMemberByEmailArguments {
            user_role,
            user_email,
            team_id,
        });
        let data = self.mutate("addTeamMemberByEmail", &operation).await?;

        Ok(data.add_team_member_by_email.role)
    }

    /// Returns the id of the renamed team.
    #[tracing::instrument(skip(self))]
    pub async fn rename_team(&self, new_name: &str, team_id: &str) -> Result<String, ApiError> {
        let operation = mutations::RenameTeam::build(mutations::RenameTeamArguments { new_name, team_id });
        let data = self.mutate("renameTeam", &operation).await?;

        Ok(data.rename_team.id.into_inner())
    }

    /// Deletes a team, retrying empty responses and transient failures.
    #[tracing::instrument(skip(self))]
    pub async fn delete_team(&self, team_id: &str) -> Result<bool, ApiError> {
        let operation = mutations::DeleteTeam::build(mutations::TeamIdArguments { team_id });
        let data = self.mutate_with_retries("deleteTeam", &operation).await?;

        Ok(data.delete_team)
    }

    /// Leaves a team in the background.
    ///
    /// Returns immediately. A failure is logged by the task itself, and can also be observed
    /// through the returned handle. Dropping the handle does not cancel the request.
    pub fn exit_team(&self, team_id: &str) -> LeaveTeamHandle {
        let api = self.clone();
        let team_id = team_id.to_owned();
        let span = tracing::debug_span!("exit_team", %team_id);

        let handle = tokio::spawn(
            async move {
                let operation = mutations::LeaveTeam::build(mutations::TeamIdArguments { team_id: &team_id });
                let result = api.mutate("leaveTeam", &operation).await.map(|data| data.leave_team);

                match &result {
                    Ok(true) => tracing::debug!("left the team"),
                    Ok(false) => tracing::warn!("the server did not let the user leave the team"),
                    Err(error) => tracing::warn!("could not leave the team: {error}"),
                }

                result
            }
            .instrument(span),
        );

        LeaveTeamHandle { handle }
    }

    /// Fetches a team with its members.
    pub async fn team(&self, team_id: &str) -> Result<Team, ApiError> {
        let operation = queries::TeamQuery::build(queries::TeamArguments { team_id });
        let data = self.query("team", &operation).await?;

        data.team
            .map(Team::from)
            .ok_or_else(|| ApiError::TeamNotFound(team_id.to_owned()))
    }

    /// Every team the current user belongs to.
    pub async fn my_teams(&self) -> Result<Vec<TeamSummary>, ApiError> {
        self.my_teams_pages().collect_all().await
    }

    pub fn my_teams_pages(&self) -> Paginator<MyTeams> {
        Paginator::new(MyTeams { api: self.clone() }, Termination::EmptyPage)
    }

    #[tracing::instrument(skip(self))]
    pub async fn remove_team_member(&self, user_uid: &str, team_id: &str) -> Result<bool, ApiError> {
        let operation = mutations::RemoveTeamMember::build(mutations::RemoveTeamMemberArguments { user_uid, team_id });
        let data = self.mutate("removeTeamMember", &operation).await?;

        Ok(data.remove_team_member)
    }

    /// Returns the role the member holds after the update.
    #[tracing::instrument(skip(self))]
    pub async fn update_team_member_role(
        &self,
        user_uid: &str,
        new_role: TeamMemberRole,
        team_id: &str,
    ) -> Result<TeamMemberRole, ApiError> {
        let operation = mutations::UpdateTeamMemberRole::build(mutations::UpdateTeamMemberRoleArguments {
            user_uid,
            new_role,
            team_id,
        });
        let data = self.mutate("updateTeamMemberRole", &operation).await?;

        Ok(data.update_team_member_role.role)
    }
}

/// Handle to a leave request running in the background.
#[derive(Debug)]
pub struct LeaveTeamHandle {
    handle: JoinHandle<Result<bool, ApiError>>,
}

impl LeaveTeamHandle {
    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    /// Waits for the request to complete.
    pub async fn outcome(self) -> Result<bool, ApiError> {
        self.handle.await.map_err(|error| ApiError::BackgroundTask {
            operation: "leaveTeam",
            reason: error.to_string(),
        })?
    }
}

/// Pages of [`TeamSummary`], ending with an empty page.
#[derive(Debug, Clone)]
pub struct MyTeams {
    api: TeamsApi,
}

#[async_trait::async_trait]
impl PageSource for MyTeams {
    type Item = TeamSummary;

    async fn fetch_page(&self, cursor: &str) -> Result<Vec<TeamSummary>, ApiError> {
        let cursor = Some(cursor).filter(|cursor| !cursor.is_empty());
        let operation = queries::MyTeams::build(queries::MyTeamsArguments { cursor });
        let data = self.api.query("myTeams", &operation).await?;

        Ok(data.my_teams.into_iter().map(TeamSummary::from).collect())
    }
}
