//! Middleware for the doclens HTTP adapter
//!
//! Provides request logging with duration tracking and the session
//! gate in front of the MCP endpoint.

use axum::{
    body::{self, Body},
    extract::State,
    http::{header::CONTENT_TYPE, HeaderValue, Request},
    middleware::Next,
    response::{IntoResponse, Response},
};
use std::time::Instant;
use tracing::{debug, error, info, warn};

use super::session::{admit, peek_method, Admission, SESSION_HEADER};
use super::state::AppState;
use crate::core::error::DocsError;

/// Request logging middleware
///
/// Logs all incoming requests with method, URI, status code, and
/// duration. Successful requests are logged at INFO level, failed
/// requests at ERROR level.
pub async fn log_request(request: Request<Body>, next: Next) -> Response {
    let method = request.method().clone();
    let uri = request.uri().clone();
    let start = Instant::now();

    let response = next.run(request).await;

    let duration_ms = start.elapsed().as_millis();
    let status = response.status();

    if status.is_success() {
        info!(
            method = %method,
            uri = %uri,
            status = %status.as_u16(),
            duration_ms = %duration_ms,
            "Request completed"
        );
    } else {
        error!(
            method = %method,
            uri = %uri,
            status = %status.as_u16(),
            duration_ms = %duration_ms,
            "Request failed"
        );
    }

    response
}

/// Session gate for the MCP endpoint
///
/// Buffers the body to read the JSON-RPC `method`, admits or rejects the
/// request, then forwards the unchanged bytes and stamps the session id
/// on the response.
pub async fn session_gate(
    State(state): State<AppState>,
    request: Request<Body>,
    next: Next,
) -> Response {
    let (parts, body) = request.into_parts();

    let bytes = match body::to_bytes(body, state.max_body_bytes()).await {
        Ok(bytes) => bytes,
        Err(e) => {
            warn!(error = %e, "Rejected unreadable request body");
            return DocsError::InvalidRequest(format!("Failed to read request body: {e}"))
                .into_response();
        }
    };

    let content_type = parts
        .headers
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok());
    let session_id = parts
        .headers
        .get(&SESSION_HEADER)
        .and_then(|value| value.to_str().ok());
    let method = peek_method(&bytes);

    let admission = match admit(content_type, method.as_deref(), session_id) {
        Ok(admission) => admission,
        Err(e) => {
            warn!(
                content_type = ?content_type,
                method = ?method,
                error = %e,
                "Rejected MCP request"
            );
            return e.into_response();
        }
    };

    if let Admission::Minted(id) = &admission {
        debug!(session_id = %id, "Minted session id");
    }

    let mut response = next
        .run(Request::from_parts(parts, Body::from(bytes)))
        .await;

    match HeaderValue::from_str(admission.session_id()) {
        Ok(value) => {
            response.headers_mut().insert(SESSION_HEADER.clone(), value);
        }
        Err(e) => error!(error = %e, "Session id is not a valid header value"),
    }

    response
}
