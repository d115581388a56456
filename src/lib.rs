//! doclens - MCP server for remote markdown documentation
//!
//! Exposes a fixed catalog of markdown files, fetched on demand from a
//! static file host, through three MCP tools: listing the catalog,
//! substring search with context, and fenced code block extraction.
//!
//! # Architecture
//!
//! - **core**: Domain logic (protocol-agnostic)
//!   - config, error, types, xdg
//!   - catalog (fixed document set, name completion)
//!   - fetcher (remote document store)
//!   - search, extract
//!   - services (unified service container)
//!
//! - **mcp**: MCP adapter (depends on core)
//!   - server, handlers, tools, protocol
//!
//! - **http**: Streamable HTTP transport (depends on core and mcp)
//!   - router, session gate, middleware
//!
//! - **cli**: command-line flags for the server binary

// Core domain logic (protocol-agnostic)
pub mod core;

// MCP (Model Context Protocol) adapter
pub mod mcp;

// HTTP transport
pub mod http;

// Command-line interface
pub mod cli;

// Re-export commonly used types for convenience
pub use core::config::Config;
pub use core::error::{DocsError, Result};
pub use core::services::Services;
pub use core::types::*;
