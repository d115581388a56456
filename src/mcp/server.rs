//! MCP server implementation
//!
//! Transport-agnostic JSON-RPC dispatch. The HTTP adapter feeds request
//! bodies in and writes the returned responses back out.

use crate::core::services::Services;
use crate::mcp::error::McpError;
use crate::mcp::handlers::ProtocolHandlers;
use crate::mcp::protocol::*;
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, error};

/// Outcome of handling one raw message
#[derive(Debug)]
pub enum Reply {
    /// A JSON-RPC response, success or error
    Response(JsonRpcResponse),
    /// The message could not be parsed at all
    Rejected(JsonRpcResponse),
    /// A notification; nothing to send back
    Accepted,
}

#[derive(Clone)]
pub struct McpServer {
    handlers: Arc<ProtocolHandlers>,
}

impl McpServer {
    pub fn new(services: Arc<Services>) -> Self {
        Self {
            handlers: Arc::new(ProtocolHandlers::new(services)),
        }
    }

    fn parse_request(body: &[u8]) -> Result<JsonRpcRequest, McpError> {
        serde_json::from_slice(body).map_err(|e| McpError::ParseError(e.to_string()))
    }

    /// Parse and dispatch a raw message
    ///
    /// Malformed input yields a rejected parse error response with a null id.
    pub async fn handle_message(&self, body: &[u8]) -> Reply {
        let request = match Self::parse_request(body) {
            Ok(request) => request,
            Err(e) => {
                return Reply::Rejected(self.create_error_response(None, e.code(), e.to_string()))
            }
        };

        match self.dispatch(request).await {
            Some(response) => Reply::Response(response),
            None => Reply::Accepted,
        }
    }

    /// Route a request to its handler
    ///
    /// Returns `None` for notifications, which never get a response.
    pub async fn dispatch(&self, request: JsonRpcRequest) -> Option<JsonRpcResponse> {
        debug!(method = %request.method, id = ?request.id, "Dispatching");

        if request.is_notification() {
            self.dispatch_notification(request).await;
            return None;
        }

        let id = request.id.clone();
        let outcome = match request.method.as_str() {
            "initialize" => self.handlers.handle_initialize(request).await,
            "ping" => self.handlers.handle_ping(request).await,
            "tools/list" => self.handlers.handle_tools_list(request).await,
            "tools/call" => self.handlers.handle_tools_call(request).await,
            "resources/list" => self.handlers.handle_resources_list(request).await,
            "resources/templates/list" => {
                self.handlers.handle_resource_templates_list(request).await
            }
            "resources/read" => self.handlers.handle_resources_read(request).await,
            "completion/complete" => self.handlers.handle_completion_complete(request).await,
            _ => Err(McpError::MethodNotFound(request.method)),
        };

        Some(match outcome {
            Ok(response) => response,
            Err(e) => {
                if matches!(e, McpError::InternalError(_) | McpError::Io(_) | McpError::Json(_)) {
                    error!("Error processing message: {}", e);
                }
                self.create_error_response(id, e.code(), e.to_string())
            }
        })
    }

    async fn dispatch_notification(&self, request: JsonRpcRequest) {
        match request.method.as_str() {
            "notifications/initialized" | "initialized" => {
                self.handlers.handle_initialized(request).await
            }
            other => debug!(method = %other, "Ignoring notification"),
        }
    }

    fn create_error_response(
        &self,
        id: Option<Value>,
        code: i32,
        message: String,
    ) -> JsonRpcResponse {
        JsonRpcResponse::error(id, code, message)
    }
}
