//! Tool handler trait

use crate::mcp::error::McpError;
use crate::mcp::protocol::{ToolResult, ToolSchema};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Trait for MCP tool implementations
///
/// Each tool (search_in_docs, extract_code_examples, etc.) implements
/// this trait to provide schema and execution logic.
///
/// `execute` returns `Err` only for protocol faults such as arguments
/// of the wrong shape. Failures the user should see are reported as
/// `Ok(ToolResult::error(..))`.
#[async_trait]
pub trait McpToolHandler: Send + Sync {
    /// Tool name (e.g., "search_in_docs")
    fn name(&self) -> &str;

    /// Tool schema for tools/list
    fn schema(&self) -> ToolSchema;

    /// Execute tool with arguments
    async fn execute(&self, args: Value) -> Result<ToolResult, McpError>;
}

/// Deserialize tool arguments, treating absent arguments as `{}`
pub fn parse_args<T: DeserializeOwned>(args: Value) -> Result<T, McpError> {
    let args = if args.is_null() {
        Value::Object(Default::default())
    } else {
        args
    };
    serde_json::from_value(args).map_err(|e| McpError::InvalidParams(e.to_string()))
}
