//! HTTP adapter
//!
//! Serves the MCP endpoint over streamable HTTP via the Axum web
//! framework, plus a health check.

pub mod error;
pub mod handlers;
pub mod middleware;
pub mod session;
pub mod state;

use std::sync::Arc;

use axum::{
    middleware as axum_middleware,
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;

use crate::core::services::Services;

pub use handlers::*;
pub use session::{Admission, SESSION_HEADER};
pub use state::AppState;

/// Build the application router
///
/// `POST /mcp` sits behind the session gate; `GET /health` does not.
pub fn router(services: Arc<Services>) -> Router {
    let state = AppState::new(services);

    let mcp = Router::new()
        .route("/mcp", post(handlers::mcp_handler))
        .route_layer(axum_middleware::from_fn_with_state(
            state.clone(),
            middleware::session_gate,
        ));

    Router::new()
        .route("/health", get(handlers::health_handler))
        .merge(mcp)
        .layer(axum_middleware::from_fn(middleware::log_request))
        .layer(CorsLayer::permissive())
        .with_state(state)
}
