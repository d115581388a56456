//! MCP tool implementations
//!
//! This module contains all MCP tool handlers that expose the
//! documentation catalog, search and code extraction.

pub mod extract_code_examples;
pub mod handler;
pub mod list_documentation;
pub mod registry;
pub mod search_in_docs;

pub use extract_code_examples::ExtractCodeExamplesHandler;
pub use handler::{parse_args, McpToolHandler};
pub use list_documentation::ListDocumentationHandler;
pub use registry::ToolRegistry;
pub use search_in_docs::SearchInDocsHandler;
