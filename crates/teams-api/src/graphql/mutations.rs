use super::{schema, TeamMemberRole};

#[derive(cynic::QueryVariables, Debug)]
pub struct CreateTeamArguments<'a> {
    pub name: &'a str,
}

#[derive(cynic::QueryFragment, Debug)]
#[cynic(graphql_type = "Mutation", variables = "CreateTeamArguments")]
pub struct CreateTeam {
    #[arguments(name: $name)]
    pub create_team: TeamName,
}

#[derive(cynic::QueryFragment, Debug)]
#[cynic(graphql_type = "Team")]
pub struct TeamName {
    pub name: String,
}

#[derive(cynic::QueryVariables, Debug)]
pub struct AddTeamMemberByEmailArguments<'a> {
    pub user_role: TeamMemberRole,
    pub user_email: &'a str,
    #[cynic(rename = "teamID")]
    pub team_id: &'a str,
}

#[derive(cynic::QueryFragment, Debug)]
#[cynic(graphql_type = "Mutation", variables = "AddTeamMemberByEmailArguments")]
pub struct AddTeamMemberByEmail {
    #[arguments(userRole: $user_role, userEmail: $user_email, teamID: $team_id)]
    pub add_team_member_by_email: MemberRole,
}

#[derive(cynic::QueryFragment, Debug)]
#[cynic(graphql_type = "TeamMember")]
pub struct MemberRole {
    pub role: TeamMemberRole,
}

#[derive(cynic::QueryVariables, Debug)]
pub struct RenameTeamArguments<'a> {
    pub new_name: &'a str,
    #[cynic(rename = "teamID")]
    pub team_id: &'a str,
}

#[derive(cynic::QueryFragment, Debug)]
#[cynic(graphql_type = "Mutation", variables = "RenameTeamArguments")]
pub struct RenameTeam {
    #[arguments(newName: $new_name, teamID: $team_id)]
    pub rename_team: TeamId,
}

#[derive(cynic::QueryFragment, Debug)]
#[cynic(graphql_type = "Team")]
pub struct TeamId {
    pub id: cynic::Id,
}

#[derive(cynic::QueryVariables, Debug)]
pub struct TeamIdArguments<'a> {
    #[cynic(rename = "teamID")]
    pub team_id: &'a str,
}

#[derive(cynic::QueryFragment, Debug)]
#[cynic(graphql_type = "Mutation", variables = "TeamIdArguments")]
pub struct DeleteTeam {
    #[arguments(teamID: $team_id)]
    pub delete_team: bool,
}

#[derive(cynic::QueryFragment, Debug)]
#[cynic(graphql_type = "Mutation", variables = "TeamIdArguments")]
pub struct LeaveTeam {
    #[arguments(teamID: $team_id)]
    pub leave_team: bool,
}

#[derive(cynic::QueryVariables, Debug)]
pub struct RemoveTeamMemberArguments<'a> {
    pub user_uid: &'a str,
    #[cynic(rename = "teamID")]
    pub team_id: &'a str,
}

#[derive(cynic::QueryFragment, Debug)]
#[cynic(graphql_type = "Mutation", variables = "RemoveTeamMemberArguments")]
pub struct RemoveTeamMember {
    #[arguments(userUid: $user_uid, teamID: $team_id)]
    pub remove_team_member: bool,
}

#[derive(cynic::QueryVariables, Debug)]
pub struct UpdateTeamMemberRoleArguments<'a> {
    pub user_uid: &'a str,
    pub new_role: TeamMemberRole,
    #[cynic(rename = "teamID")]
    pub team_id: &'a str,
}

#[derive(cynic::QueryFragment, Debug)]
#[cynic(graphql_type = "Mutation", variables = "UpdateTeamMemberRoleArguments")]
pub struct UpdateTeamMemberRole {
    #[arguments(userUid: $user_uid, newRole: $new_role, teamID: $team_id)]
    pub update_team_member_role: MemberRole,
}

#[derive(cynic::QueryVariables, Debug)]
pub struct CreateRootCollectionArguments<'a> {
    pub title: &'a str,
    #[cynic(rename = "teamID")]
    pub team_id: &'a str,
}

#[derive(cynic::QueryFragment, Debug)]
#[cynic(graphql_type = "Mutation", variables = "CreateRootCollectionArguments")]
pub struct CreateRootCollection {
    #[arguments(title: $title, teamID: $team_id)]
    pub create_root_collection: CollectionId,
}

#[derive(cynic::QueryFragment, Debug)]
#[cynic(graphql_type = "TeamCollection")]
pub struct CollectionId {
    pub id: cynic::Id,
}

#[derive(cynic::QueryVariables, Debug)]
pub struct CreateChildCollectionArguments<'a> {
    pub child_title: &'a str,
    #[cynic(rename = "collectionID")]
    pub collection_id: &'a str,
}

#[derive(cynic::QueryFragment, Debug)]
#[cynic(graphql_type = "Mutation", variables = "CreateChildCollectionArguments")]
pub struct CreateChildCollection {
    #[arguments(childTitle: $child_title, collectionID: $collection_id)]
    pub create_child_collection: CollectionId,
}

#[derive(cynic::QueryVariables, Debug)]
pub struct RenameCollectionArguments<'a> {
    pub new_title: &'a str,
    #[cynic(rename = "collectionID")]
    pub collection_id: &'a str,
}

#[derive(cynic::QueryFragment, Debug)]
#[cynic(graphql_type = "Mutation", variables = "RenameCollectionArguments")]
pub struct RenameCollection {
    #[arguments(newTitle: $new_title, collectionID: $collection_id)]
    pub rename_collection: CollectionId,
}

#[derive(cynic::QueryVariables, Debug)]
pub struct CollectionIdArguments<'a> {
    #[cynic(rename = "collectionID")]
    pub collection_id: &'a str,
}

#[derive(cynic::QueryFragment, Debug)]
#[cynic(graphql_type = "Mutation", variables = "CollectionIdArguments")]
pub struct DeleteCollection {
    #[arguments(collectionID: $collection_id)]
    pub delete_collection: bool,
}

#[derive(cynic::InputObject, Debug)]
pub struct CreateTeamRequestInput<'a> {
    #[cynic(rename = "teamID")]
    pub team_id: &'a str,
    pub title: &'a str,
    pub request: &'a str,
}

#[derive(cynic::QueryVariables, Debug)]
pub struct CreateRequestInCollectionArguments<'a> {
    pub data: CreateTeamRequestInput<'a>,
    #[cynic(rename = "collectionID")]
    pub collection_id: &'a str,
}

#[derive(cynic::QueryFragment, Debug)]
#[cynic(graphql_type = "Mutation", variables = "CreateRequestInCollectionArguments")]
pub struct CreateRequestInCollection {
    #[arguments(data: $data, collectionID: $collection_id)]
    pub create_request_in_collection: SavedRequest,
}

#[derive(cynic::QueryFragment, Debug)]
#[cynic(graphql_type = "TeamRequest")]
pub struct SavedRequest {
    pub collection: SavedRequestCollection,
}

#[derive(cynic::QueryFragment, Debug)]
#[cynic(graphql_type = "TeamCollection")]
pub struct SavedRequestCollection {
    pub id: cynic::Id,
    pub team: OwningTeam,
}

#[derive(cynic::QueryFragment, Debug)]
#[cynic(graphql_type = "Team")]
pub struct OwningTeam {
    pub id: cynic::Id,
    pub name: String,
}

#[derive(cynic::QueryVariables, Debug)]
pub struct DeleteRequestArguments<'a> {
    #[cynic(rename = "requestID")]
    pub request_id: &'a str,
}

#[derive(cynic::QueryFragment, Debug)]
#[cynic(graphql_type = "Mutation", variables = "DeleteRequestArguments")]
pub struct DeleteRequest {
    #[arguments(requestID: $request_id)]
    pub delete_request: bool,
}
