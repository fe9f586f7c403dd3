use super::{schema, TeamMemberRole};

#[derive(cynic::QueryVariables, Debug)]
pub struct TeamArguments<'a> {
    #[cynic(rename = "teamID")]
    pub team_id: &'a str,
}

#[derive(cynic::QueryFragment, Debug)]
#[cynic(graphql_type = "Query", variables = "TeamArguments")]
pub struct TeamQuery {
    #[arguments(teamID: $team_id)]
    pub team: Option<Team>,
}

#[derive(cynic::QueryFragment, Debug)]
pub struct Team {
    pub id: cynic::Id,
    pub name: String,
    pub my_role: TeamMemberRole,
    pub members: Vec<TeamMember>,
}

#[derive(cynic::QueryFragment, Debug)]
pub struct TeamMember {
    pub user: User,
    pub role: TeamMemberRole,
}

#[derive(cynic::QueryFragment, Debug)]
pub struct User {
    pub uid: cynic::Id,
    pub display_name: Option<String>,
    pub email: Option<String>,
}

#[derive(cynic::QueryVariables, Debug)]
pub struct MyTeamsArguments<'a> {
    pub cursor: Option<&'a str>,
}

#[derive(cynic::QueryFragment, Debug)]
#[cynic(graphql_type = "Query", variables = "MyTeamsArguments")]
pub struct MyTeams {
    #[arguments(cursor: $cursor)]
    pub my_teams: Vec<TeamSummary>,
}

#[derive(cynic::QueryFragment, Debug)]
#[cynic(graphql_type = "Team")]
pub struct TeamSummary {
    pub id: cynic::Id,
    pub name: String,
    pub my_role: TeamMemberRole,
}

#[derive(cynic::QueryVariables, Debug)]
pub struct RootCollectionsOfTeamArguments<'a> {
    #[cynic(rename = "teamID")]
    pub team_id: &'a str,
    pub cursor: &'a str,
}

#[derive(cynic::QueryFragment, Debug)]
#[cynic(graphql_type = "Query", variables = "RootCollectionsOfTeamArguments")]
pub struct RootCollectionsOfTeam {
    #[arguments(teamID: $team_id, cursor: $cursor)]
    pub root_collections_of_team: Vec<TeamCollection>,
}

#[derive(cynic::QueryFragment, Debug)]
pub struct TeamCollection {
    pub id: cynic::Id,
    pub title: String,
}

#[derive(cynic::QueryVariables, Debug)]
pub struct CollectionChildrenArguments<'a> {
    #[cynic(rename = "collectionID")]
    pub collection_id: &'a str,
}

#[derive(cynic::QueryFragment, Debug)]
#[cynic(graphql_type = "Query", variables = "CollectionChildrenArguments")]
pub struct CollectionChildren {
    #[arguments(collectionID: $collection_id)]
    pub collection: Option<CollectionWithChildren>,
}

#[derive(cynic::QueryFragment, Debug)]
#[cynic(graphql_type = "TeamCollection")]
pub struct CollectionWithChildren {
    pub children: Vec<TeamCollection>,
}

#[derive(cynic::QueryVariables, Debug)]
pub struct RequestsInCollectionArguments<'a> {
    #[cynic(rename = "collectionID")]
    pub collection_id: &'a str,
    pub cursor: Option<&'a str>,
}

#[derive(cynic::QueryFragment, Debug)]
#[cynic(graphql_type = "Query", variables = "RequestsInCollectionArguments")]
pub struct RequestsInCollection {
    #[arguments(collectionID: $collection_id, cursor: $cursor)]
    pub requests_in_collection: Vec<TeamRequest>,
}

#[derive(cynic::QueryFragment, Debug)]
pub struct TeamRequest {
    pub id: cynic::Id,
    pub title: String,
    pub request: String,
}
