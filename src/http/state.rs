//! Application state for the HTTP adapter

use std::sync::Arc;

use crate::core::services::Services;
use crate::mcp::McpServer;

/// Shared application state for Axum handlers
#[derive(Clone)]
pub struct AppState {
    /// Core services (config, fetcher, search, extraction)
    pub services: Arc<Services>,

    /// JSON-RPC dispatcher behind `POST /mcp`
    pub mcp: McpServer,
}

impl AppState {
    pub fn new(services: Arc<Services>) -> Self {
        let mcp = McpServer::new(Arc::clone(&services));
        Self { services, mcp }
    }

    /// Upper bound on buffered request bodies
    pub fn max_body_bytes(&self) -> usize {
        self.services.config.server.max_body_bytes
    }
}
