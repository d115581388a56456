//! Search in docs tool handler

use super::handler::{parse_args, McpToolHandler};
use crate::core::error::DocsError;
use crate::core::services::Services;
use crate::core::types::SearchReport;
use crate::mcp::error::McpError;
use crate::mcp::protocol::{ToolAnnotations, ToolResult, ToolSchema};
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;

pub struct SearchInDocsHandler {
    services: Arc<Services>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct SearchArgs {
    query: Option<String>,
    #[serde(default)]
    case_sensitive: Option<bool>,
}

impl SearchInDocsHandler {
    pub fn new(services: Arc<Services>) -> Self {
        Self { services }
    }
}

#[async_trait]
impl McpToolHandler for SearchInDocsHandler {
    fn name(&self) -> &str {
        "search_in_docs"
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "search_in_docs".to_string(),
            title: "Search in Documentation".to_string(),
            description: "Search for a keyword or phrase across all documentation files and return matching sections. \
                         Matching is plain substring search per line; each match comes with up to 2 lines of context \
                         before and after."
                .to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "query": {
                        "type": "string",
                        "description": "The search query (keyword or phrase to find in documentation)"
                    },
                    "caseSensitive": {
                        "type": "boolean",
                        "description": "Whether the search should be case-sensitive (default: false)",
                        "default": false
                    }
                },
                "required": ["query"]
            }),
            annotations: ToolAnnotations {
                read_only_hint: true,
                idempotent_hint: true,
                open_world_hint: true,
            },
        }
    }

    async fn execute(&self, args: Value) -> Result<ToolResult, McpError> {
        let args: SearchArgs = parse_args(args)?;
        let query = args.query.unwrap_or_default();
        let case_sensitive = args.case_sensitive.unwrap_or(false);

        let results = match self.services.search.search(&query, case_sensitive).await {
            Ok(results) => results,
            Err(e @ DocsError::InvalidRequest(_)) => return Ok(ToolResult::error(e.message())),
            Err(e) => return Ok(ToolResult::error(format!("Search failed: {e}"))),
        };

        if results.is_empty() {
            return Ok(ToolResult::text(format!(
                "No results found for query: \"{query}\""
            )));
        }

        let report = SearchReport::new(query, case_sensitive, results);
        Ok(ToolResult::structured(&report)?)
    }
}
