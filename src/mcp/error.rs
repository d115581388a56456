//! MCP-specific error types

use crate::mcp::protocol::{
    INTERNAL_ERROR, INVALID_PARAMS, METHOD_NOT_FOUND, PARSE_ERROR,
    RESOURCE_NOT_FOUND, UPSTREAM_ERROR,
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum McpError {
    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Invalid params: {0}")]
    InvalidParams(String),

    #[error("Unknown method: {0}")]
    MethodNotFound(String),

    #[error("Resource not found: {0}")]
    ResourceNotFound(String),

    #[error("Upstream error: {0}")]
    Upstream(String),

    #[error("Internal error: {0}")]
    InternalError(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl McpError {
    /// JSON-RPC error code for this error
    pub fn code(&self) -> i32 {
        match self {
            McpError::ParseError(_) => PARSE_ERROR,
            McpError::InvalidParams(_) => INVALID_PARAMS,
            McpError::MethodNotFound(_) => METHOD_NOT_FOUND,
            McpError::ResourceNotFound(_) => RESOURCE_NOT_FOUND,
            McpError::Upstream(_) => UPSTREAM_ERROR,
            McpError::InternalError(_) | McpError::Io(_) | McpError::Json(_) => INTERNAL_ERROR,
        }
    }
}

impl From<crate::core::error::DocsError> for McpError {
    fn from(err: crate::core::error::DocsError) -> Self {
        use crate::core::error::DocsError;
        match err {
            DocsError::InvalidRequest(s) => McpError::InvalidParams(s),
            e @ DocsError::DocumentNotFound(_) => McpError::ResourceNotFound(e.to_string()),
            e @ DocsError::Transport { .. } => McpError::Upstream(e.to_string()),
            DocsError::ConfigError(s) => {
                McpError::InternalError(format!("Configuration error: {s}"))
            }
            DocsError::IoError(e) => McpError::InternalError(format!("I/O error: {e}")),
            DocsError::TomlError(e) => {
                McpError::InternalError(format!("Configuration parse error: {e}"))
            }
        }
    }
}
