use httpmock::prelude::*;
use serde_json::json;

use cps_client::{HubSpotSchemaClient, SchemaService};
use cps_schema::{PROPERTY_GROUP_LABEL, PROPERTY_GROUP_NAME};

fn client(server: &MockServer) -> HubSpotSchemaClient {
    HubSpotSchemaClient::new_with_base_url("test-token".to_string(), server.base_url())
}

#[tokio::test]
async fn ensure_group_returns_true_without_creating_when_group_listed() {
    let server = MockServer::start_async().await;

    let list = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/contacts/groups")
                .header("authorization", "Bearer test-token");
            then.status(200)
                .json_body(json!({"results": [{"name": PROPERTY_GROUP_NAME, "label": PROPERTY_GROUP_LABEL}]}));
        })
        .await;
    let create = server
        .mock_async(|when, then| {
            when.method(POST).path("/contacts/groups");
            then.status(201);
        })
        .await;

    let c = client(&server);
    assert!(
        c.ensure_group("contacts", PROPERTY_GROUP_NAME, PROPERTY_GROUP_LABEL)
            .await
    );

    list.assert_async().await;
    assert_eq!(create.hits_async().await, 0);
}

#[tokio::test]
async fn ensure_group_creates_when_missing() {
    let server = MockServer::start_async().await;

    server
        .mock_async(|when, then| {
            when.method(GET).path("/contacts/groups");
            then.status(200).json_body(json!({"results": []}));
        })
        .await;
    let create = server
        .mock_async(|when, then| {
            when.method(POST).path("/contacts/groups").json_body(json!({
                "name": PROPERTY_GROUP_NAME,
                "label": PROPERTY_GROUP_LABEL,
                "displayOrder": 1,
            }));
            then.status(201).json_body(json!({"name": PROPERTY_GROUP_NAME}));
        })
        .await;

    let c = client(&server);
    assert!(
        c.ensure_group("contacts", PROPERTY_GROUP_NAME, PROPERTY_GROUP_LABEL)
            .await
    );
    create.assert_async().await;
}

#[tokio::test]
async fn ensure_group_returns_false_when_listing_fails() {
    let server = MockServer::start_async().await;

    server
        .mock_async(|when, then| {
            when.method(GET).path("/deals/groups");
            then.status(500).body("internal error");
        })
        .await;

    let c = client(&server);
    assert!(
        !c.ensure_group("deals", PROPERTY_GROUP_NAME, PROPERTY_GROUP_LABEL)
            .await
    );
}

#[tokio::test]
async fn ensure_group_returns_false_when_creation_rejected() {
    let server = MockServer::start_async().await;

    server
        .mock_async(|when, then| {
            when.method(GET).path("/companies/groups");
            then.status(200).json_body(json!({"results": []}));
        })
        .await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/companies/groups");
            then.status(403).body("missing scope");
        })
        .await;

    let c = client(&server);
    assert!(
        !c.ensure_group("companies", PROPERTY_GROUP_NAME, PROPERTY_GROUP_LABEL)
            .await
    );
}

#[tokio::test]
async fn ensure_group_returns_false_on_transport_failure() {
    // Nothing listens here; the connection is refused.
    let c = HubSpotSchemaClient::new_with_base_url(
        "test-token".to_string(),
        "http://127.0.0.1:1".to_string(),
    );
    assert!(
        !c.ensure_group("contacts", PROPERTY_GROUP_NAME, PROPERTY_GROUP_LABEL)
            .await
    );
}
