//! MCP (Model Context Protocol) server module
//!
//! This module implements a JSON-RPC 2.0 compliant MCP server that
//! exposes the documentation catalog as MCP tools and resources.

pub mod error;
pub mod handlers;
pub mod protocol;
pub mod server;
pub mod tools;

// Re-export main types
pub use error::McpError;
pub use server::{McpServer, Reply};
pub use tools::{McpToolHandler, ToolRegistry};
