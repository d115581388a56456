//! Integration tests for the doclens HTTP endpoint
//!
//! Tests a complete MCP conversation: initialize, acknowledge, then
//! call each tool with the minted session id.

use crate::common::{create_test_services, DocServer};
use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use doclens::core::types::HealthResponse;
use doclens::http::{self, SESSION_HEADER};
use serde_json::{json, Value};
use tower::ServiceExt as TowerServiceExt;

async fn create_test_app() -> Router {
    http::router(create_test_services(DocServer::with_samples()).await)
}

fn post(session: Option<&str>, body: String) -> Request<Body> {
    let mut builder = Request::builder()
        .method("POST")
        .uri("/mcp")
        .header("content-type", "application/json");
    if let Some(session) = session {
        builder = builder.header("mcp-session-id", session);
    }
    builder.body(Body::from(body)).unwrap()
}

async fn json_body(response: axum::response::Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 100_000)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap()
}

#[tokio::test]
async fn test_health_endpoint() {
    let app = create_test_app().await;

    let response = app
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = axum::body::to_bytes(response.into_body(), 10_000)
        .await
        .unwrap();
    let health: HealthResponse = serde_json::from_slice(&body).unwrap();

    assert_eq!(health.status, "ok");
    assert!(!health.version.is_empty());
}

#[tokio::test]
async fn test_end_to_end_conversation() {
    let app = create_test_app().await;

    // Step 1: initialize and pick up the session id
    let init = json!({
        "jsonrpc": "2.0",
        "id": 1,
        "method": "initialize",
        "params": {"protocolVersion": "2025-03-26", "capabilities": {}}
    });
    let response = app
        .clone()
        .oneshot(post(None, init.to_string()))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let session = response
        .headers()
        .get(&SESSION_HEADER)
        .unwrap()
        .to_str()
        .unwrap()
        .to_string();

    // Step 2: the initialized notification is accepted without a body
    let notification = json!({"jsonrpc": "2.0", "method": "notifications/initialized"});
    let response = app
        .clone()
        .oneshot(post(Some(&session), notification.to_string()))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::ACCEPTED);
    assert_eq!(response.headers().get(&SESSION_HEADER).unwrap(), session.as_str());

    // Step 3: search
    let search = json!({
        "jsonrpc": "2.0",
        "id": 2,
        "method": "tools/call",
        "params": {"name": "search_in_docs", "arguments": {"query": "mcp"}}
    });
    let response = app
        .clone()
        .oneshot(post(Some(&session), search.to_string()))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["id"], 2);
    assert_eq!(body["result"]["structuredContent"]["totalMatches"], 2);

    // Step 4: extract
    let extract = json!({
        "jsonrpc": "2.0",
        "id": 3,
        "method": "tools/call",
        "params": {"name": "extract_code_examples", "arguments": {"filename": "resources"}}
    });
    let response = app
        .oneshot(post(Some(&session), extract.to_string()))
        .await
        .unwrap();
    let body = json_body(response).await;
    assert_eq!(body["result"]["structuredContent"]["totalBlocks"], 2);
    assert_eq!(
        body["result"]["structuredContent"]["codeBlocks"][1]["language"],
        "json"
    );
}

#[tokio::test]
async fn test_parse_error_is_bad_request() {
    let app = create_test_app().await;

    let response = app
        .oneshot(post(Some("abc"), "{not json".to_string()))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = json_body(response).await;
    assert_eq!(body["error"]["code"], -32700);
    assert_eq!(body["id"], Value::Null);
}

#[tokio::test]
async fn test_tool_errors_are_successful_rpc_responses() {
    let app = create_test_app().await;

    let call = json!({
        "jsonrpc": "2.0",
        "id": 4,
        "method": "tools/call",
        "params": {"name": "extract_code_examples", "arguments": {"filename": ""}}
    });
    let response = app
        .oneshot(post(Some("abc"), call.to_string()))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["result"]["isError"], true);
    assert_eq!(body["result"]["content"][0]["text"], "Filename is required");
}
