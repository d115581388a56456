//! Extract code examples tool handler

use super::handler::{parse_args, McpToolHandler};
use crate::core::error::DocsError;
use crate::core::services::Services;
use crate::core::types::CodeBlockReport;
use crate::mcp::error::McpError;
use crate::mcp::protocol::{ToolAnnotations, ToolResult, ToolSchema};
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;
use tracing::warn;

pub struct ExtractCodeExamplesHandler {
    services: Arc<Services>,
}

#[derive(Deserialize)]
struct ExtractArgs {
    filename: Option<String>,
}

impl ExtractCodeExamplesHandler {
    pub fn new(services: Arc<Services>) -> Self {
        Self { services }
    }
}

#[async_trait]
impl McpToolHandler for ExtractCodeExamplesHandler {
    fn name(&self) -> &str {
        "extract_code_examples"
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "extract_code_examples".to_string(),
            title: "Extract Code Examples".to_string(),
            description: "Extracts all code blocks from a documentation file with their language and line numbers"
                .to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "filename": {
                        "type": "string",
                        "description": "Name of the documentation file (without .md extension, e.g., \"resources\", \"tools\")"
                    }
                },
                "required": ["filename"]
            }),
            annotations: ToolAnnotations {
                read_only_hint: true,
                idempotent_hint: true,
                open_world_hint: true,
            },
        }
    }

    async fn execute(&self, args: Value) -> Result<ToolResult, McpError> {
        let args: ExtractArgs = parse_args(args)?;
        let filename = args.filename.unwrap_or_default().trim().to_string();

        let blocks = match self.services.extract.extract(&filename).await {
            Ok(blocks) => blocks,
            Err(e @ DocsError::InvalidRequest(_)) => return Ok(ToolResult::error(e.message())),
            Err(e) => {
                warn!(document = %filename, error = %e, "Code example extraction failed");
                return Ok(ToolResult::error(format!(
                    "Failed to extract code examples: {e}"
                )));
            }
        };

        if blocks.is_empty() {
            return Ok(ToolResult::text(format!(
                "No code blocks found in '{filename}'"
            )));
        }

        let report = CodeBlockReport::new(filename, blocks);
        Ok(ToolResult::structured(&report)?)
    }
}
