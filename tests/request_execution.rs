//! Request construction and response handling through the gateway.

use propgate::{GatewayBuilder, OperationDescriptor, SessionToken};
use serde::Deserialize;
use serde_json::json;
use std::time::Duration;
use tokio_test::assert_ok;

#[tokio::test]
async fn bearer_and_content_type_headers_are_attached() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/properties")
        .match_header("authorization", "Bearer test-token")
        .match_header("content-type", "application/json")
        .with_status(200)
        .with_body(r#"{"data": []}"#)
        .create_async()
        .await;

    let token = SessionToken::new();
    let gateway = GatewayBuilder::new()
        .base_url(server.url())
        .session_token(token.clone())
        .build()
        .unwrap();

    // The token was set after the gateway was built; the shared handle
    // makes it visible per-request.
    token.set("test-token");
    gateway
        .execute(&OperationDescriptor::get("/properties"))
        .await
        .unwrap();

    mock.assert_async().await;
}

#[tokio::test]
async fn no_token_means_no_authorization_header() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/public/listings")
        .match_header("authorization", mockito::Matcher::Missing)
        .with_status(200)
        .with_body(r#"{"data": []}"#)
        .create_async()
        .await;

    let gateway = GatewayBuilder::new().base_url(server.url()).build().unwrap();
    gateway
        .execute(&OperationDescriptor::get("/public/listings"))
        .await
        .unwrap();

    mock.assert_async().await;
}

#[tokio::test]
async fn caller_headers_take_precedence_on_conflict() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/export")
        .match_header("content-type", "text/csv")
        .with_status(200)
        .with_body("[]")
        .create_async()
        .await;

    let gateway = GatewayBuilder::new().base_url(server.url()).build().unwrap();
    gateway
        .execute(&OperationDescriptor::get("/export").with_header("content-type", "text/csv"))
        .await
        .unwrap();

    mock.assert_async().await;
}

#[tokio::test]
async fn every_envelope_shape_yields_the_same_payload() {
    let mut server = mockito::Server::new_async().await;
    let payload = json!({"id": 7, "name": "Elm Street"});
    for (path, body) in [
        ("/shape/enveloped", r#"{"success": true, "data": {"id": 7, "name": "Elm Street"}, "message": "ok"}"#),
        ("/shape/wrapped", r#"{"data": {"id": 7, "name": "Elm Street"}}"#),
        ("/shape/double", r#"{"data": {"data": {"id": 7, "name": "Elm Street"}}}"#),
        ("/shape/bare", r#"{"id": 7, "name": "Elm Street"}"#),
    ] {
        server
            .mock("GET", path)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(body)
            .create_async()
            .await;
    }

    let gateway = GatewayBuilder::new().base_url(server.url()).build().unwrap();
    for path in ["/shape/enveloped", "/shape/wrapped", "/shape/double", "/shape/bare"] {
        let result = gateway.execute(&OperationDescriptor::get(path)).await.unwrap();
        assert_eq!(result, payload, "shape at {path}");
    }
}

#[tokio::test]
async fn execute_as_deserializes_the_normalized_payload() {
    #[derive(Debug, Deserialize, PartialEq)]
    struct Property {
        id: u64,
        name: String,
    }

    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/properties/7")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"success": true, "data": {"id": 7, "name": "Elm Street"}}"#)
        .create_async()
        .await;

    let gateway = GatewayBuilder::new().base_url(server.url()).build().unwrap();
    let property: Property = gateway
        .execute_as(&OperationDescriptor::get("/properties/7"))
        .await
        .unwrap();

    assert_eq!(
        property,
        Property {
            id: 7,
            name: "Elm Street".into()
        }
    );
}

#[tokio::test]
async fn empty_success_body_decodes_to_null() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("DELETE", "/properties/7")
        .with_status(204)
        .create_async()
        .await;

    let gateway = GatewayBuilder::new().base_url(server.url()).build().unwrap();
    let result = assert_ok!(
        gateway
            .execute(&OperationDescriptor::delete("/properties/7"))
            .await
    );

    assert_eq!(result, serde_json::Value::Null);
}

#[tokio::test]
async fn failed_refresh_fails_even_when_an_expired_entry_exists() {
    let mut server = mockito::Server::new_async().await;
    let ok_mock = server
        .mock("GET", "/properties?page=1&pageSize=10")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"data": [{"id": 1}]}"#)
        .expect(1)
        .create_async()
        .await;

    let gateway = GatewayBuilder::new().base_url(server.url()).build().unwrap();
    let descriptor = OperationDescriptor::get("/properties?page=1&pageSize=10")
        .with_cache_ttl(Duration::from_millis(50));

    gateway.execute(&descriptor).await.unwrap();
    ok_mock.assert_async().await;
    tokio::time::sleep(Duration::from_millis(80)).await;

    // Backend now failing; the stale entry must not paper over it.
    ok_mock.remove_async().await;
    server
        .mock("GET", "/properties?page=1&pageSize=10")
        .with_status(503)
        .with_body(r#"{"message": "Service unavailable"}"#)
        .create_async()
        .await;

    let err = gateway.execute(&descriptor).await.unwrap_err();
    assert_eq!(err.http_status_code(), Some(503));
}
