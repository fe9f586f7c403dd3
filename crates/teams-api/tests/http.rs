#![allow(unused_crate_dependencies)]

use std::time::Duration;

use indoc::formatdoc;
use serde_json::json;
use teams_api::{
    errors::{ApiError, TransportError},
    ClientConfig, RetryPolicy, TeamsApi,
};
use wiremock::{
    matchers::{body_partial_json, header, method, path},
    Mock, MockServer, ResponseTemplate,
};

fn config(server: &MockServer) -> ClientConfig {
    let input = formatdoc! {r#"
        endpoint = "{uri}/graphql"
        access_token = "s3cr3t"
        timeout = "5s"
        user_agent = "teams-api-tests"

        [retry]
        max_attempts = 2
        initial_backoff = "0s"
        max_backoff = "0s"
    "#, uri = server.uri()};

    ClientConfig::from_toml(&input).unwrap()
}

fn api(server: &MockServer) -> TeamsApi {
    TeamsApi::from_config(&config(server)).unwrap()
}

#[tokio::test]
async fn queries_bypass_caches_and_carry_the_token() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/graphql"))
        .and(header("cache-control", "no-cache"))
        .and(header("authorization", "Bearer s3cr3t"))
        .and(header("user-agent", "teams-api-tests"))
        .and(body_partial_json(json!({ "variables": { "collectionID": "c1" } })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": { "collection": { "children": [{ "id": "c2", "title": "Create" }] } }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let children = api(&server).get_collection_children("c1").await.unwrap();

    assert_eq!(1, children.len());
    assert_eq!("Create", children[0].title);
}

#[tokio::test]
async fn mutations_are_sent_without_cache_control() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/graphql"))
        .and(body_partial_json(json!({ "variables": { "newTitle": "Accounts", "collectionID": "c1" } })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": { "renameCollection": { "id": "c1" } }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let id = api(&server).rename_collection("Accounts", "c1").await.unwrap();
    assert_eq!("c1", id);

    let received = server.received_requests().await.unwrap();
    assert_eq!(1, received.len());
    assert!(received[0].headers.get("cache-control").is_none());
}

#[tokio::test]
async fn root_collections_are_paged_over_http() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(body_partial_json(json!({ "variables": { "teamID": "t1", "cursor": "" } })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": { "rootCollectionsOfTeam": [{ "id": "c1", "title": "Users" }] }
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(body_partial_json(json!({ "variables": { "teamID": "t1", "cursor": "c1" } })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": { "rootCollectionsOfTeam": [] }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let collections = api(&server).root_collections_of_team("t1").await.unwrap();

    assert_eq!(1, collections.len());
    assert_eq!("c1", collections[0].id);
}

#[tokio::test]
async fn server_errors_are_retried_for_retriable_mutations() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(503).set_body_string("maintenance"))
        .expect(2)
        .mount(&server)
        .await;

    let error = api(&server).delete_team("t1").await.unwrap_err();

    let ApiError::Transport(TransportError::Status { status, body }) = error else {
        unreachable!("expected a status error, got {error:?}");
    };
    assert_eq!(503, status);
    assert_eq!("maintenance", body);
}

#[tokio::test]
async fn client_errors_are_not_retried() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(401).set_body_string("invalid token"))
        .expect(1)
        .mount(&server)
        .await;

    let error = api(&server).delete_collection("c1").await.unwrap_err();

    assert!(!error.is_retriable());
    insta::assert_snapshot!(error, @"the server responded with status 401: invalid token");
}

#[tokio::test]
async fn invalid_bodies_are_reported() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let error = api(&server).team("t1").await.unwrap_err();

    assert!(matches!(error, ApiError::Transport(TransportError::InvalidBody(_))));
}

#[tokio::test]
async fn slow_servers_time_out() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "data": { "deleteRequest": true } }))
                .set_delay(Duration::from_millis(500)),
        )
        .mount(&server)
        .await;

    let mut config = config(&server);
    config.timeout = Some(Duration::from_millis(50));
    config.retry = RetryPolicy::never();

    let error = TeamsApi::from_config(&config)
        .unwrap()
        .delete_request("r1")
        .await
        .unwrap_err();

    assert!(matches!(error, ApiError::Transport(TransportError::Timeout)));
}

#[tokio::test]
async fn stalled_bodies_time_out() {
    use tokio::io::{AsyncReadExt, AsyncWriteExt};

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let address = listener.local_addr().unwrap();

    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut buffer = [0; 4096];
        let _ = socket.read(&mut buffer).await;

        let head = "HTTP/1.1 200 OK\r\ncontent-type: application/json\r\ncontent-length: 64\r\n\r\n";
        socket.write_all(head.as_bytes()).await.unwrap();
        socket.write_all(br#"{ "data": "#).await.unwrap();
        socket.flush().await.unwrap();

        tokio::time::sleep(Duration::from_secs(5)).await;
    });

    let mut config = ClientConfig::default();
    config.endpoint = format!("http://{address}/graphql").parse().unwrap();
    config.timeout = Some(Duration::from_millis(200));
    config.retry = RetryPolicy::never();

    let error = TeamsApi::from_config(&config)
        .unwrap()
        .delete_request("r1")
        .await
        .unwrap_err();

    assert!(matches!(error, ApiError::Transport(TransportError::Timeout)), "{error:?}");
    assert!(error.is_retriable());
}
