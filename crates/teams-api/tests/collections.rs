#![allow(unused_crate_dependencies)]

use std::time::Duration;

use futures::TryStreamExt;
use serde_json::json;
use teams_api::{
    errors::{ApiError, TransportError},
    types::CollectionSummary,
    RetryPolicy, TeamsApi,
};
use teams_mocks::{FakeTeamsServer, ScriptedClient};

fn titles(collections: &[CollectionSummary]) -> Vec<&str> {
    collections.iter().map(|collection| collection.title.as_str()).collect()
}

#[tokio::test]
async fn root_collections_stop_at_the_first_empty_page() {
    let client = ScriptedClient::default()
        .with_data(json!({
            "rootCollectionsOfTeam": [
                { "id": "c1", "title": "Users" },
                { "id": "c2", "title": "Billing" },
            ]
        }))
        .with_data(json!({ "rootCollectionsOfTeam": [] }));
    let api = TeamsApi::new(client.clone());

    let collections = api.root_collections_of_team("t1").await.unwrap();

    assert_eq!(vec!["Users", "Billing"], titles(&collections));

    let operations = client.operations();
    assert_eq!(2, operations.len());
    assert_eq!(json!({ "teamID": "t1", "cursor": "" }), operations[0].request.variables);
    assert_eq!(json!({ "teamID": "t1", "cursor": "c2" }), operations[1].request.variables);
}

#[tokio::test]
async fn root_collections_of_an_empty_team() {
    let client = ScriptedClient::default().with_data(json!({ "rootCollectionsOfTeam": [] }));
    let api = TeamsApi::new(client.clone());

    let collections = api.root_collections_of_team("t1").await.unwrap();

    assert!(collections.is_empty());
    assert_eq!(1, client.operation_count());
}

#[tokio::test]
async fn root_collections_across_full_pages() {
    let server = FakeTeamsServer::default();
    let team_id = server.seed_team("Platform");
    for n in 0..25 {
        server.seed_collection(&team_id, None, &format!("collection {n}"));
    }
    let api = TeamsApi::new(server.clone());

    let collections = api.root_collections_of_team(&team_id).await.unwrap();

    assert_eq!(25, collections.len());
    assert_eq!("collection 24", collections[24].title);
    assert_eq!(4, server.operations_on("rootCollectionsOfTeam").len());
}

#[tokio::test]
async fn root_collection_pages_can_be_streamed() {
    let server = FakeTeamsServer::default();
    let team_id = server.seed_team("Platform");
    for n in 0..12 {
        server.seed_collection(&team_id, None, &format!("collection {n}"));
    }
    let api = TeamsApi::new(server);

    let pages: Vec<Vec<CollectionSummary>> = api
        .root_collections_pages(&team_id)
        .into_stream()
        .try_collect()
        .await
        .unwrap();

    assert_eq!(vec![10, 2], pages.iter().map(Vec::len).collect::<Vec<_>>());
}

#[tokio::test]
async fn pagination_failures_surface_to_the_caller() {
    let client = ScriptedClient::default()
        .with_data(json!({ "rootCollectionsOfTeam": [{ "id": "c1", "title": "Users" }] }))
        .with_errors(["team/invalid_id"]);
    let api = TeamsApi::new(client);

    let error = api.root_collections_of_team("t1").await.unwrap_err();

    assert!(matches!(error, ApiError::GraphQl { operation: "rootCollectionsOfTeam", .. }));
}

#[tokio::test]
async fn renamed_collection_keeps_its_id() {
    let server = FakeTeamsServer::default();
    let team_id = server.seed_team("Platform");
    let api = TeamsApi::new(server.clone());

    let collection_id = api.create_new_root_collection("Users", &team_id).await.unwrap();
    let renamed = api.rename_collection("Accounts", &collection_id).await.unwrap();
    let collections = api.root_collections_of_team(&team_id).await.unwrap();

    assert_eq!(collection_id, renamed);
    assert_eq!(
        vec![CollectionSummary {
            id: collection_id,
            title: "Accounts".into(),
        }],
        collections
    );
}

#[tokio::test]
async fn children_are_listed_in_creation_order() {
    let server = FakeTeamsServer::default();
    let team_id = server.seed_team("Platform");
    let api = TeamsApi::new(server);

    let parent = api.create_new_root_collection("Users", &team_id).await.unwrap();
    let first = api.add_child_collection("Create", &parent).await.unwrap();
    let second = api.add_child_collection("Delete", &parent).await.unwrap();

    let children = api.get_collection_children(&parent).await.unwrap();

    assert_eq!(vec![first, second], children.iter().map(|child| child.id.clone()).collect::<Vec<_>>());
    assert_eq!(vec!["Create", "Delete"], titles(&children));
}

#[tokio::test]
async fn listing_children_twice_gives_the_same_result() {
    let server = FakeTeamsServer::default();
    let team_id = server.seed_team("Platform");
    let parent = server.seed_collection(&team_id, None, "Users");
    server.seed_collection(&team_id, Some(&parent), "Create");
    let api = TeamsApi::new(server.clone());

    let first = api.get_collection_children(&parent).await.unwrap();
    let second = api.get_collection_children(&parent).await.unwrap();

    assert_eq!(first, second);
    assert_eq!(2, server.operations_on("collection").len());
}

#[tokio::test]
async fn children_of_an_unknown_collection() {
    let api = TeamsApi::new(FakeTeamsServer::default());

    let error = api.get_collection_children("missing").await.unwrap_err();

    assert!(matches!(error, ApiError::CollectionNotFound(id) if id == "missing"));
}

#[tokio::test]
async fn deleting_a_collection_removes_its_subtree() {
    let server = FakeTeamsServer::default();
    let team_id = server.seed_team("Platform");
    let parent = server.seed_collection(&team_id, None, "Users");
    let child = server.seed_collection(&team_id, Some(&parent), "Create");
    let grandchild = server.seed_collection(&team_id, Some(&child), "Drafts");
    let api = TeamsApi::new(server.clone());

    assert!(api.delete_collection(&parent).await.unwrap());

    assert_eq!(None, server.collection_title(&child));
    assert_eq!(None, server.collection_title(&grandchild));
    assert!(api.root_collections_of_team(&team_id).await.unwrap().is_empty());
}

#[tokio::test]
async fn collection_mutations_retry_empty_responses() {
    let server = FakeTeamsServer::default();
    let team_id = server.seed_team("Platform");
    let server = server.with_empty_responses(2);
    let api = TeamsApi::new(server.clone()).with_retry_policy(RetryPolicy::immediate(3));

    let collection_id = api.create_new_root_collection("Users", &team_id).await.unwrap();

    assert_eq!(Some("Users".to_owned()), server.collection_title(&collection_id));
    assert_eq!(3, server.operations_on("createRootCollection").len());
}

#[tokio::test]
async fn collection_mutations_recover_from_connection_failures() {
    let client = ScriptedClient::default()
        .with_failure(TransportError::Connection("connection reset by peer".into()))
        .with_data(json!({ "deleteCollection": true }))
        .with_data(json!({ "deleteCollection": true }));
    let api = TeamsApi::new(client.clone()).with_retry_policy(RetryPolicy::immediate(3));

    assert!(api.delete_collection("c1").await.unwrap());

    assert_eq!(2, client.operation_count());
    assert_eq!(1, client.remaining_responses());
}

#[tokio::test]
async fn rejected_requests_are_not_retried_after_a_connection_failure() {
    let client = ScriptedClient::default()
        .with_failure(TransportError::Connection("connection refused".into()))
        .with_errors(["team_coll/invalid_coll_id"])
        .with_data(json!({ "deleteCollection": true }));
    let api = TeamsApi::new(client.clone()).with_retry_policy(RetryPolicy::immediate(5));

    let error = api.delete_collection("c1").await.unwrap_err();

    assert!(matches!(error, ApiError::GraphQl { operation: "deleteCollection", .. }));
    assert_eq!(2, client.operation_count());
    assert_eq!(1, client.remaining_responses());
}

#[tokio::test(start_paused = true)]
async fn retries_back_off_between_attempts() {
    let client = ScriptedClient::default()
        .with_empty_response()
        .with_empty_response()
        .with_data(json!({ "renameCollection": { "id": "c1" } }));
    let policy = RetryPolicy {
        max_attempts: 3,
        initial_backoff: Duration::from_millis(100),
        max_backoff: Duration::from_secs(1),
    };
    let api = TeamsApi::new(client).with_retry_policy(policy);

    let started = tokio::time::Instant::now();
    let id = api.rename_collection("Accounts", "c1").await.unwrap();

    assert_eq!("c1", id);
    assert!(started.elapsed() >= Duration::from_millis(300));
    assert!(started.elapsed() < Duration::from_millis(400));
}
