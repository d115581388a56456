//! Core domain logic (protocol-agnostic)
//!
//! This module contains all business logic that is independent
//! of transport protocols (HTTP, MCP, etc).
//!
//! # Architecture
//!
//! - **config**: Configuration loading (TOML + environment)
//! - **error**: Error types and Result alias
//! - **types**: Domain data structures
//! - **xdg**: XDG directory handling
//! - **catalog**: Fixed document catalog and name completion
//! - **fetcher**: Remote document retrieval
//! - **search**: Catalog-wide line search
//! - **extract**: Fenced code block extraction
//! - **services**: Unified service container

pub mod catalog;
pub mod config;
pub mod error;
pub mod extract;
pub mod fetcher;
pub mod search;
pub mod services;
pub mod types;
pub mod xdg;


// Re-export key types for convenience
pub use config::Config;
pub use error::{DocsError, Result};
pub use services::Services;
