//! Error types and error handling for the doclens service.
//!
//! This module defines the error types used throughout the
//! application. Protocol-specific error handling (HTTP status codes,
//! MCP error codes) is handled in the respective adapter modules.

use thiserror::Error;

/// Result type alias for doclens operations
pub type Result<T> = std::result::Result<T, DocsError>;

/// Main error type for the doclens service
#[derive(Error, Debug)]
pub enum DocsError {
    /// Client-side precondition failure (blank argument, malformed
    /// envelope, missing session header). The message is shown verbatim.
    #[error("{0}")]
    InvalidRequest(String),

    #[error("Markdown file '{0}.md' not found")]
    DocumentNotFound(String),

    #[error("Error fetching markdown file '{name}': {reason}")]
    Transport { name: String, reason: String },

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),
}

impl DocsError {
    /// Build a transport error for the named document
    pub fn transport(name: &str, reason: impl ToString) -> Self {
        DocsError::Transport {
            name: name.to_string(),
            reason: reason.to_string(),
        }
    }

    /// Get user-friendly error message
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// Check if this is a "not found" type error
    pub fn is_not_found(&self) -> bool {
        matches!(self, DocsError::DocumentNotFound(_))
    }

    /// Check if this is a bad request error (invalid input)
    pub fn is_bad_request(&self) -> bool {
        matches!(
            self,
            DocsError::InvalidRequest(_) | DocsError::ConfigError(_)
        )
    }

    /// Check if the remote document store could not be reached
    pub fn is_transport(&self) -> bool {
        matches!(self, DocsError::Transport { .. })
    }
}
