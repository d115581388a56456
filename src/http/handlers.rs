//! HTTP request handlers for the doclens service
//!
//! Implements the health check and the JSON-RPC endpoint.

use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use super::state::AppState;
use crate::core::types::HealthResponse;
use crate::mcp::Reply;

/// Health check handler
///
/// Returns server status and version information.
pub async fn health_handler() -> impl IntoResponse {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// MCP JSON-RPC handler
///
/// Responses are returned as JSON. Notifications are acknowledged with
/// `202 Accepted` and no body. An unparseable body is a `400` carrying a
/// JSON-RPC parse error.
pub async fn mcp_handler(State(state): State<AppState>, body: Bytes) -> Response {
    match state.mcp.handle_message(&body).await {
        Reply::Response(response) => Json(response).into_response(),
        Reply::Rejected(response) => (StatusCode::BAD_REQUEST, Json(response)).into_response(),
        Reply::Accepted => StatusCode::ACCEPTED.into_response(),
    }
}
