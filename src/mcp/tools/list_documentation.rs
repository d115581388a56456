//! List documentation tool handler

use super::handler::McpToolHandler;
use crate::core::catalog;
use crate::core::types::DocumentListing;
use crate::mcp::error::McpError;
use crate::mcp::protocol::{ToolAnnotations, ToolResult, ToolSchema};
use async_trait::async_trait;
use serde_json::{json, Value};

pub struct ListDocumentationHandler;

impl Default for ListDocumentationHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl ListDocumentationHandler {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl McpToolHandler for ListDocumentationHandler {
    fn name(&self) -> &str {
        "list_documentation"
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "list_documentation".to_string(),
            title: "List Documentation Files".to_string(),
            description: "Lists all available documentation markdown files with their names and descriptions"
                .to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {},
                "required": []
            }),
            annotations: ToolAnnotations {
                read_only_hint: true,
                idempotent_hint: true,
                open_world_hint: false,
            },
        }
    }

    async fn execute(&self, _args: Value) -> Result<ToolResult, McpError> {
        let files = catalog::list().to_vec();
        let listing = DocumentListing {
            total: files.len(),
            files,
        };

        Ok(ToolResult::structured(&listing)?)
    }
}
