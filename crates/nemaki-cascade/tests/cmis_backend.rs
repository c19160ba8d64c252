//! The CMIS client as a cascade backend.

use std::sync::Arc;

use mockito::Matcher;
use nemaki_auth::{Session, SessionContext, SessionStore};
use nemaki_cascade::backend::relationship_query;
use nemaki_cascade::{CascadeBackend, CascadeResolver, Stage};
use nemaki_client::CmisClient;
use nemaki_config::{AuthScheme, CascadeConfig};
use nemaki_core::PARENT_CHILD_RELATIONSHIP;
use pretty_assertions::assert_eq;
use serde_json::json;

fn client(server: &mockito::ServerGuard) -> CmisClient {
    let session = Arc::new(SessionContext::new(SessionStore::ephemeral(), AuthScheme::Bearer));
    session
        .establish(Session {
            username: "admin".into(),
            token: "tok".into(),
            repository_id: "bedroom".into(),
            is_admin: true,
        })
        .unwrap();
    CmisClient::with_http(reqwest::Client::new(), &server.url(), "bedroom", session)
}

fn relationship_row(source: &str, target: &str) -> serde_json::Value {
    json!({
        "succinctProperties": {
            "cmis:objectId": format!("rel-{target}"),
            "cmis:objectTypeId": PARENT_CHILD_RELATIONSHIP,
            "cmis:sourceId": source,
            "cmis:targetId": target
        }
    })
}

#[tokio::test]
async fn relationship_lookup_follows_pages() {
    let mut server = mockito::Server::new_async().await;
    let statement = relationship_query("A", PARENT_CHILD_RELATIONSHIP);
    let first = server
        .mock("GET", "/core/browser/bedroom/root")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("cmisselector".into(), "query".into()),
            Matcher::UrlEncoded("q".into(), statement.clone()),
            Matcher::UrlEncoded("skipCount".into(), "0".into()),
        ]))
        .with_status(200)
        .with_body(
            json!({"results": [relationship_row("A", "B")], "hasMoreItems": true}).to_string(),
        )
        .create_async()
        .await;
    let second = server
        .mock("GET", "/core/browser/bedroom/root")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("q".into(), statement),
            Matcher::UrlEncoded("skipCount".into(), "1".into()),
        ]))
        .with_status(200)
        .with_body(
            json!({"results": [relationship_row("A", "C")], "hasMoreItems": false}).to_string(),
        )
        .create_async()
        .await;

    let client = client(&server);
    let edges = client
        .find_relationships("A", PARENT_CHILD_RELATIONSHIP)
        .await
        .unwrap();

    let targets: Vec<&str> = edges.iter().map(|e| e.target_id.as_str()).collect();
    assert_eq!(targets, vec!["B", "C"]);
    first.assert_async().await;
    second.assert_async().await;
}

#[tokio::test]
async fn missing_root_is_treated_as_deleted() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/core/browser/bedroom/root")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(json!({"results": [], "hasMoreItems": false}).to_string())
        .create_async()
        .await;
    let delete = server
        .mock("POST", "/core/browser/bedroom")
        .match_body(Matcher::UrlEncoded("objectId".into(), "gone".into()))
        .with_status(404)
        .with_body(r#"{"exception":"objectNotFound","message":"gone"}"#)
        .create_async()
        .await;

    let resolver = CascadeResolver::new(client(&server), CascadeConfig::default());
    let outcome = resolver.delete_one("gone").await;

    assert_eq!(outcome.status, Stage::Success);
    assert!(outcome.root_deleted);
    delete.assert_async().await;
}

#[tokio::test]
async fn server_error_on_root_fails_root() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/core/browser/bedroom/root")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(json!({"results": [], "hasMoreItems": false}).to_string())
        .create_async()
        .await;
    server
        .mock("POST", "/core/browser/bedroom")
        .with_status(409)
        .with_body(r#"{"exception":"constraint","message":"folder is not empty"}"#)
        .create_async()
        .await;

    let resolver = CascadeResolver::new(client(&server), CascadeConfig::default());
    let bulk = resolver.delete_bulk(&["f-1".to_string()]).await;

    assert_eq!(bulk.failed_count, 1);
    assert!(bulk.results[0].error.as_deref().unwrap().contains("folder is not empty"));
}
