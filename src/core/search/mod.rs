//! Search module for line-oriented documentation search.
//!
//! This module provides substring search across every document in
//! the catalog, returning matching lines with surrounding context.

mod scanner;
mod service;

pub use scanner::scan_document;
pub use service::SearchService;
