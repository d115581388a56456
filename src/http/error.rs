//! HTTP mapping for core errors

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::core::error::DocsError;

/// HTTP status for a core error
pub fn status_code(err: &DocsError) -> StatusCode {
    match err {
        DocsError::InvalidRequest(_) | DocsError::ConfigError(_) => StatusCode::BAD_REQUEST,
        DocsError::DocumentNotFound(_) => StatusCode::NOT_FOUND,
        DocsError::Transport { .. } => StatusCode::BAD_GATEWAY,
        DocsError::IoError(_) | DocsError::TomlError(_) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

/// Implement IntoResponse for automatic error conversion in Axum
impl IntoResponse for DocsError {
    fn into_response(self) -> Response {
        let status = status_code(&self);

        let body = Json(json!({
            "error": self.message(),
            "status": status.as_u16(),
        }));

        (status, body).into_response()
    }
}
