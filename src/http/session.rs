//! Session admission for the MCP endpoint
//!
//! Checks the content envelope and decides which `MCP-Session-Id` the
//! response carries. Session ids are opaque: they are minted on
//! `initialize` and echoed back on every other request, never stored.

use axum::http::HeaderName;
use uuid::Uuid;

use crate::core::error::{DocsError, Result};

/// Header carrying the conversation's session id
pub static SESSION_HEADER: HeaderName = HeaderName::from_static("mcp-session-id");

/// Media types accepted on the MCP endpoint
pub const ALLOWED_CONTENT_TYPES: &[&str] = &["application/json", "text/event-stream"];

/// JSON-RPC method that opens a new session
pub const INITIALIZE_METHOD: &str = "initialize";

pub const INVALID_CONTENT_TYPE: &str =
    "Content-Type header must be application/json or text/event-stream";
pub const MISSING_SESSION_ID: &str = "MCP-Session-Id header is required";

/// Outcome of a successful admission
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Admission {
    /// A fresh id was minted for an `initialize` request
    Minted(String),
    /// The inbound id is echoed unchanged
    Echoed(String),
}

impl Admission {
    pub fn session_id(&self) -> &str {
        match self {
            Admission::Minted(id) | Admission::Echoed(id) => id,
        }
    }
}

/// Media type of a Content-Type value, lowercased and without parameters
fn media_type(content_type: &str) -> String {
    content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase()
}

pub fn is_allowed_content_type(content_type: Option<&str>) -> bool {
    content_type
        .map(media_type)
        .is_some_and(|media| ALLOWED_CONTENT_TYPES.contains(&media.as_str()))
}

/// Admit a request or reject it as malformed
///
/// The content type is checked first, so a rejected request never
/// allocates an id.
pub fn admit(
    content_type: Option<&str>,
    method: Option<&str>,
    session_id: Option<&str>,
) -> Result<Admission> {
    if !is_allowed_content_type(content_type) {
        return Err(DocsError::InvalidRequest(INVALID_CONTENT_TYPE.to_string()));
    }

    if method == Some(INITIALIZE_METHOD) {
        return Ok(Admission::Minted(Uuid::new_v4().to_string()));
    }

    match session_id {
        Some(id) if !id.trim().is_empty() => Ok(Admission::Echoed(id.to_string())),
        _ => Err(DocsError::InvalidRequest(MISSING_SESSION_ID.to_string())),
    }
}

/// Peek at the JSON-RPC `method` of a buffered body
///
/// Anything that is not an object with a string `method` yields `None`.
pub fn peek_method(body: &[u8]) -> Option<String> {
    let value: serde_json::Value = serde_json::from_slice(body).ok()?;
    value.get("method")?.as_str().map(str::to_string)
}
