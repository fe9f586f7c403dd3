use std::sync::{Arc, Mutex};

use serde_json::{json, Value};
use teams_api::{GraphqlClient, GraphqlRequest, OperationKind, TeamMemberRole, TransportResult};

use crate::RecordedOperation;

/// Number of items the fake returns per page, for every paginated field.
pub const PAGE_SIZE: usize = 10;

const CURRENT_USER: &str = "current-user";

/// An in-memory rendition of the team and collection API.
///
/// The current user owns every team they create. Other users have to be registered with
/// [`FakeTeamsServer::with_user`] before they can be invited.
#[derive(Clone, Default)]
pub struct FakeTeamsServer {
    state: Arc<Mutex<State>>,
}

#[derive(Default)]
struct State {
    next_id: u64,
    users: Vec<User>,
    teams: Vec<Team>,
    collections: Vec<Collection>,
    requests: Vec<Request>,
    empty_responses: usize,
    operations: Vec<RecordedOperation>,
}

struct User {
    uid: String,
    email: String,
    display_name: String,
}

struct Team {
    id: String,
    name: String,
    members: Vec<(String, TeamMemberRole)>,
}

struct Collection {
    id: String,
    title: String,
    team_id: String,
    parent_id: Option<String>,
}

struct Request {
    id: String,
    title: String,
    request: String,
    team_id: String,
    collection_id: String,
}

type Outcome = Result<Value, String>;

impl FakeTeamsServer {
    /// Registers a user that can be invited by email.
    #[must_use]
    pub fn with_user(self, uid: &str, email: &str, display_name: &str) -> Self {
        self.state.lock().unwrap().users.push(User {
            uid: uid.to_owned(),
            email: email.to_owned(),
            display_name: display_name.to_owned(),
        });
        self
    }

    /// The next `count` operations get a response without data, and change nothing.
    #[must_use]
    pub fn with_empty_responses(self, count: usize) -> Self {
        self.state.lock().unwrap().empty_responses = count;
        self
    }

    pub fn current_user(&self) -> &'static str {
        CURRENT_USER
    }

    /// Creates a team owned by the current user, bypassing the API, and returns its id.
    pub fn seed_team(&self, name: &str) -> String {
        self.state.lock().unwrap().create_team(name)
    }

    /// Creates a collection, bypassing the API, and returns its id.
    pub fn seed_collection(&self, team_id: &str, parent_id: Option<&str>, title: &str) -> String {
        let mut state = self.state.lock().unwrap();
        let id = state.fresh_id("collection");

        state.collections.push(Collection {
            id: id.clone(),
            title: title.to_owned(),
            team_id: team_id.to_owned(),
            parent_id: parent_id.map(str::to_owned),
        });

        id
    }

    /// Stores `count` requests titled `request 1`, `request 2`, ... in a collection.
    pub fn seed_requests(&self, collection_id: &str, count: usize) -> Vec<String> {
        let mut state = self.state.lock().unwrap();

        let Some(team_id) = state.collection(collection_id).map(|collection| collection.team_id.clone()) else {
            return Vec::new();
        };

        (1..=count)
            .map(|n| state.create_request(&team_id, collection_id, &format!("request {n}"), "{}"))
            .collect()
    }

    pub fn operations(&self) -> Vec<RecordedOperation> {
        self.state.lock().unwrap().operations.clone()
    }

    /// Operations selecting `root_field`, oldest first.
    pub fn operations_on(&self, root_field: &str) -> Vec<RecordedOperation> {
        self.operations()
            .into_iter()
            .filter(|operation| operation.root_field() == Some(root_field))
            .collect()
    }

    pub fn team_names(&self) -> Vec<String> {
        let state = self.state.lock().unwrap();
        state.teams.iter().map(|team| team.name.clone()).collect()
    }

    pub fn collection_title(&self, collection_id: &str) -> Option<String> {
        let state = self.state.lock().unwrap();
        state.collection(collection_id).map(|collection| collection.title.clone())
    }

    fn answer(&self, kind: OperationKind, request: GraphqlRequest) -> TransportResult<Value> {
        let mut state = self.state.lock().unwrap();

        state.operations.push(RecordedOperation {
            kind,
            request: request.clone(),
        });

        if state.empty_responses > 0 {
            state.empty_responses -= 1;
            return Ok(json!({ "data": null }));
        }

        let root_field = request.root_field().unwrap_or_default().to_owned();
        let variables = Variables(&request);

        let outcome = match (kind, root_field.as_str()) {
            (OperationKind::Query, "team") => state.team_query(&variables),
            (OperationKind::Query, "myTeams") => state.my_teams(&variables),
            (OperationKind::Query, "rootCollectionsOfTeam") => state.root_collections(&variables),
            (OperationKind::Query, "collection") => state.collection_children(&variables),
            (OperationKind::Query, "requestsInCollection") => state.requests_in_collection(&variables),
            (OperationKind::Mutation, "createTeam") => state.create_team_mutation(&variables),
            (OperationKind::Mutation, "renameTeam") => state.rename_team(&variables),
            (OperationKind::Mutation, "deleteTeam") => state.delete_team(&variables),
            (OperationKind::Mutation, "leaveTeam") => state.leave_team(&variables),
            (OperationKind::Mutation, "addTeamMemberByEmail") => state.add_member(&variables),
            (OperationKind::Mutation, "removeTeamMember") => state.remove_member(&variables),
            (OperationKind::Mutation, "updateTeamMemberRole") => state.update_member_role(&variables),
            (OperationKind::Mutation, "createRootCollection") => state.create_root_collection(&variables),
            (OperationKind::Mutation, "createChildCollection") => state.create_child_collection(&variables),
            (OperationKind::Mutation, "renameCollection") => state.rename_collection(&variables),
            (OperationKind::Mutation, "deleteCollection") => state.delete_collection(&variables),
            (OperationKind::Mutation, "createRequestInCollection") => state.create_request_in_collection(&variables),
            (OperationKind::Mutation, "deleteRequest") => state.delete_request(&variables),
            (kind, field) => Err(format!("unsupported {kind} field `{field}`")),
        };

        Ok(match outcome {
            Ok(value) => json!({ "data": Value::Object([(root_field, value)].into_iter().collect()) }),
            Err(message) => json!({ "data": null, "errors": [{ "message": message }] }),
        })
    }
}

#[async_trait::async_trait]
impl GraphqlClient for FakeTeamsServer {
    async fn query(&self, request: GraphqlRequest) -> TransportResult<Value> {
        self.answer(OperationKind::Query, request)
    }

    async fn mutate(&self, request: GraphqlRequest) -> TransportResult<Value> {
        self.answer(OperationKind::Mutation, request)
    }
}

struct Variables<'a>(&'a GraphqlRequest);

impl Variables<'_> {
    fn string(&self, name: &str) -> Result<&str, String> {
        self.0
            .variable(name)
            .and_then(Value::as_str)
            .ok_or_else(|| format!("missing variable `{name}`"))
    }

    /// A missing or null cursor starts from the beginning.
    fn cursor(&self) -> &str {
        self.0.variable("cursor").and_then(Value::as_str).unwrap_or_default()
    }

    fn role(&self, name: &str) -> Result<TeamMemberRole, String> {
        self.string(name)?.parse()
    }

    fn value(&self, name: &str) -> Result<&Value, String> {
        self.0.variable(name).ok_or_else(|| format!("missing variable `{name}`"))
    }
}

/// The items following the one whose id is `cursor`, at most [`PAGE_SIZE`] of them.
fn page<'a, T>(items: impl IntoIterator<Item = &'a T>, cursor: &str, id: impl Fn(&T) -> &str) -> Vec<&'a T>
where
    T: 'a,
{
    let mut items = items.into_iter();

    if !cursor.is_empty() {
        for item in items.by_ref() {
            if id(item) == cursor {
                break;
            }
        }
    }

    items.take(PAGE_SIZE).collect()
}

impl State {
    fn fresh_id(&mut self, prefix: &str) -> String {
        self.next_id += 1;
        format!("{prefix}-{}", self.next_id)
    }

    fn create_team(&mut self, name: &str) -> String {
        let id = self.fresh_id("team");

        self.teams.push(Team {
            id: id.clone(),
            name: name.to_owned(),
            members: vec![(CURRENT_USER.to_owned(), TeamMemberRole::Owner)],
        });

        id
    }

    fn create_request(&mut self, team_id: &str, collection_id: &str, title: &str, request: &str) -> String {
        let id = self.fresh_id("request");

        self.requests.push(Request {
            id: id.clone(),
            title: title.to_owned(),
            request: request.to_owned(),
            team_id: team_id.to_owned(),
            collection_id: collection_id.to_owned(),
        });

        id
    }

    fn team(&self, team_id: &str) -> Result<&Team, String> {
        self.teams
            .iter()
            .find(|team| team.id == team_id)
            .ok_or_else(|| "team/invalid_id".to_owned())
    }

    fn team_mut(&mut self, team_id: &str) -> Result<&mut Team, String> {
        self.teams
            .iter_mut()
            .find(|team| team.id == team_id)
            .ok_or_else(|| "team/invalid_id".to_owned())
    }

    fn collection(&self, collection_id: &str) -> Option<&Collection> {
        self.collections.iter().find(|collection| collection.id == collection_id)
    }

    fn existing_collection(&self, collection_id: &str) -> Result<&Collection, String> {
        self.collection(collection_id)
            .ok_or_else(|| "team_coll/invalid_coll_id".to_owned())
    }

    fn user_json(&self, uid: &str) -> Value {
        let user = self.users.iter().find(|user| user.uid == uid);

        json!({
            "uid": uid,
            "displayName": user.map(|user| user.display_name.as_str()),
            "email": user.map(|user| user.email.as_str()),
        })
    }

    fn role_of_current_user(team: &Team) -> Option<TeamMemberRole> {
        team.members
            .iter()
            .find(|(uid, _)| uid == CURRENT_USER)
            .map(|(_, role)| *role)
    }

    fn team_query(&self, variables: &Variables<'_>) -> Outcome {
        let team_id = variables.string("teamID")?;

        let Ok(team) = self.team(team_id) else {
            return Ok(Value::Null);
        };

        let my_role = Self::role_of_current_user(team).ok_or_else(|| "team/member_not_found".to_owned())?;

        let members: Vec<Value> = team
            .members
            .iter()
            .map(|(uid, role)| json!({ "user": self.user_json(uid), "role": role.as_str() }))
            .collect();

        Ok(json!({
            "id": team.id,
            "name": team.name,
            "myRole": my_role.as_str(),
            "members": members,
        }))
    }

    fn my_teams(&self, variables: &Variables<'_>) -> Outcome {
        let mine: Vec<(&Team, TeamMemberRole)> = self
            .teams
            .iter()
            .filter_map(|team| Some((team, Self::role_of_current_user(team)?)))
            .collect();

        let teams: Vec<Value> = page(&mine, variables.cursor(), |(team, _)| team.id.as_str())
            .into_iter()
            .map(|(team, role)| {
                json!({
                    "id": team.id,
                    "name": team.name,
                    "myRole": role.as_str(),
                })
            })
            .collect();

        Ok(Value::Array(teams))
    }

    fn root_collections(&self, variables: &Variables<'_>) -> Outcome {
        let team_id = variables.string("teamID")?;
        self.team(team_id)?;

        let roots = self
            .collections
            .iter()
            .filter(|collection| collection.team_id == team_id && collection.parent_id.is_none());

        Ok(collections_json(page(roots, variables.cursor(), |collection| collection.id.as_str())))
    }

    fn collection_children(&self, variables: &Variables<'_>) -> Outcome {
        let collection_id = variables.string("collectionID")?;

        if self.collection(collection_id).is_none() {
            return Ok(Value::Null);
        }

        let children = self
            .collections
            .iter()
            .filter(|collection| collection.parent_id.as_deref() == Some(collection_id))
            .collect();

        Ok(json!({ "children": collections_json(children) }))
    }

    fn requests_in_collection(&self, variables: &Variables<'_>) -> Outcome {
        let collection_id = variables.string("collectionID")?;
        self.existing_collection(collection_id)?;

        let requests = self
            .requests
            .iter()
            .filter(|request| request.collection_id == collection_id);

        let requests: Vec<Value> = page(requests, variables.cursor(), |request| request.id.as_str())
            .into_iter()
            .map(|request| json!({ "id": request.id, "title": request.title, "request": request.request }))
            .collect();

        Ok(Value::Array(requests))
    }

    fn create_team_mutation(&mut self, variables: &Variables<'_>) -> Outcome {
        let name = variables.string("name")?;

        if name.trim().is_empty() {
            return Err("team/name_invalid".into());
        }

        let id = self.create_team(name);

        Ok(json!({ "id": id, "name": name }))
    }

    fn rename_team(&mut self, variables: &Variables<'_>) -> Outcome {
        let new_name = variables.string("newName")?;

        if new_name.trim().is_empty() {
            return Err("team/name_invalid".into());
        }

        let team = self.team_mut(variables.string("teamID")?)?;
        team.name = new_name.to_owned();

        Ok(json!({ "id": team.id, "name": team.name }))
    }

    fn delete_team(&mut self, variables: &Variables<'_>) -> Outcome {
        let team_id = variables.string("teamID")?;
        self.team(team_id)?;

        self.teams.retain(|team| team.id != team_id);
        self.collections.retain(|collection| collection.team_id != team_id);
        self.requests.retain(|request| request.team_id != team_id);

        Ok(Value::Bool(true))
    }

    fn leave_team(&mut self, variables: &Variables<'_>) -> Outcome {
        let team = self.team_mut(variables.string("teamID")?)?;

        let owners = team
            .members
            .iter()
            .filter(|(_, role)| *role == TeamMemberRole::Owner)
            .count();

        match Self::role_of_current_user(team) {
            None => Err("team/member_not_found".into()),
            Some(TeamMemberRole::Owner) if owners == 1 => Err("team/only_one_owner".into()),
            Some(_) => {
                team.members.retain(|(uid, _)| uid != CURRENT_USER);
                Ok(Value::Bool(true))
            }
        }
    }

    fn add_member(&mut self, variables: &Variables<'_>) -> Outcome {
        let role = variables.role("userRole")?;
        let email = variables.string("userEmail")?;
        let team_id = variables.string("teamID")?;

        let uid = self
            .users
            .iter()
            .find(|user| user.email == email)
            .map(|user| user.uid.clone())
            .ok_or_else(|| "user/not_found".to_owned())?;

        let team = self.team_mut(team_id)?;

        if team.members.iter().any(|(member, _)| *member == uid) {
            return Err("team/user_already_member".into());
        }

        team.members.push((uid, role));

        Ok(json!({ "role": role.as_str() }))
    }

    fn remove_member(&mut self, variables: &Variables<'_>) -> Outcome {
        let user_uid = variables.string("userUid")?;
        let team = self.team_mut(variables.string("teamID")?)?;

        let before = team.members.len();
        team.members.retain(|(uid, _)| uid != user_uid);

        if team.members.len() == before {
            return Err("team/member_not_found".into());
        }

        Ok(Value::Bool(true))
    }

    fn update_member_role(&mut self, variables: &Variables<'_>) -> Outcome {
        let user_uid = variables.string("userUid")?;
        let new_role = variables.role("newRole")?;
        let team = self.team_mut(variables.string("teamID")?)?;

        let (_, role) = team
            .members
            .iter_mut()
            .find(|(uid, _)| uid == user_uid)
            .ok_or_else(|| "team/member_not_found".to_owned())?;
        *role = new_role;

        Ok(json!({ "role": new_role.as_str() }))
    }

    fn create_root_collection(&mut self, variables: &Variables<'_>) -> Outcome {
        let title = variables.string("title")?;
        let team_id = variables.string("teamID")?;
        self.team(team_id)?;

        let id = self.fresh_id("collection");
        self.collections.push(Collection {
            id: id.clone(),
            title: title.to_owned(),
            team_id: team_id.to_owned(),
            parent_id: None,
        });

        Ok(json!({ "id": id, "title": title }))
    }

    fn create_child_collection(&mut self, variables: &Variables<'_>) -> Outcome {
        let child_title = variables.string("childTitle")?;
        let parent_id = variables.string("collectionID")?;
        let team_id = self.existing_collection(parent_id)?.team_id.clone();

        let id = self.fresh_id("collection");
        self.collections.push(Collection {
            id: id.clone(),
            title: child_title.to_owned(),
            team_id,
            parent_id: Some(parent_id.to_owned()),
        });

        Ok(json!({ "id": id, "title": child_title }))
    }

    fn rename_collection(&mut self, variables: &Variables<'_>) -> Outcome {
        let new_title = variables.string("newTitle")?;
        let collection_id = variables.string("collectionID")?;

        let collection = self
            .collections
            .iter_mut()
            .find(|collection| collection.id == collection_id)
            .ok_or_else(|| "team_coll/invalid_coll_id".to_owned())?;
        collection.title = new_title.to_owned();

        Ok(json!({ "id": collection.id, "title": collection.title }))
    }

    fn delete_collection(&mut self, variables: &Variables<'_>) -> Outcome {
        let collection_id = variables.string("collectionID")?;
        self.existing_collection(collection_id)?;

        let mut doomed = vec![collection_id.to_owned()];
        let mut index = 0;

        while let Some(parent) = doomed.get(index).cloned() {
            doomed.extend(
                self.collections
                    .iter()
                    .filter(|collection| collection.parent_id.as_deref() == Some(parent.as_str()))
                    .map(|collection| collection.id.clone()),
            );
            index += 1;
        }

        self.collections.retain(|collection| !doomed.contains(&collection.id));
        self.requests.retain(|request| !doomed.contains(&request.collection_id));

        Ok(Value::Bool(true))
    }

    fn create_request_in_collection(&mut self, variables: &Variables<'_>) -> Outcome {
        let data = variables.value("data")?;
        let collection_id = variables.string("collectionID")?.to_owned();

        let field = |name: &str| {
            data.get(name)
                .and_then(Value::as_str)
                .ok_or_else(|| format!("missing input field `{name}`"))
        };
        let team_id = field("teamID")?;
        let title = field("title")?;
        let request = field("request")?;

        let collection = self.existing_collection(&collection_id)?;
        if collection.team_id != team_id {
            return Err("team_req/invalid_team_id".into());
        }

        let team_name = self.team(team_id)?.name.clone();
        let id = self.create_request(team_id, &collection_id, title, request);

        Ok(json!({
            "id": id,
            "collection": {
                "id": collection_id,
                "team": { "id": team_id, "name": team_name },
            },
        }))
    }

    fn delete_request(&mut self, variables: &Variables<'_>) -> Outcome {
        let request_id = variables.string("requestID")?;

        let before = self.requests.len();
        self.requests.retain(|request| request.id != request_id);

        if self.requests.len() == before {
            return Err("team_req/not_found".into());
        }

        Ok(Value::Bool(true))
    }
}

fn collections_json(collections: Vec<&Collection>) -> Value {
    collections
        .into_iter()
        .map(|collection| json!({ "id": collection.id, "title": collection.title }))
        .collect()
}
