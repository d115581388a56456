//! Core data types for the doclens service.
//!
//! This module defines the data structures produced by the search
//! and extraction engines, and the payloads returned to clients.

use serde::{Deserialize, Serialize};

/// One row of the document catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DocumentEntry {
    /// Document name, without extension
    pub name: &'static str,

    /// Short human-readable summary
    pub description: &'static str,
}

/// A single line matching a search query
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchMatch {
    /// 1-based line number within the document
    pub line_number: usize,

    /// The matching line, trimmed
    pub line: String,

    /// Surrounding lines (before, then after), each trimmed
    pub context: Vec<String>,
}

/// All matches found in one document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    /// Document name
    pub file: String,

    pub matches: Vec<SearchMatch>,
}

/// A fenced code block found in a document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CodeBlock {
    /// Language tag from the opening fence, "text" when absent
    pub language: String,

    /// Lines between the fences, joined with '\n'
    pub code: String,

    /// 1-based line number of the opening fence
    pub line_number: usize,
}

/// Payload of the list_documentation tool
#[derive(Debug, Clone, Serialize)]
pub struct DocumentListing {
    pub total: usize,
    pub files: Vec<DocumentEntry>,
}

/// Payload of the search_in_docs tool
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchReport {
    /// Query as supplied by the caller
    pub query: String,

    pub case_sensitive: bool,

    /// Number of documents with at least one match
    pub total_files: usize,

    pub total_matches: usize,

    pub results: Vec<SearchResult>,
}

impl SearchReport {
    pub fn new(query: String, case_sensitive: bool, results: Vec<SearchResult>) -> Self {
        let total_matches = results.iter().map(|r| r.matches.len()).sum();
        Self {
            query,
            case_sensitive,
            total_files: results.len(),
            total_matches,
            results,
        }
    }
}

/// Payload of the extract_code_examples tool
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CodeBlockReport {
    pub filename: String,
    pub total_blocks: usize,
    pub code_blocks: Vec<CodeBlock>,
}

impl CodeBlockReport {
    pub fn new(filename: String, code_blocks: Vec<CodeBlock>) -> Self {
        Self {
            filename,
            total_blocks: code_blocks.len(),
            code_blocks,
        }
    }
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Service status
    pub status: String,

    /// Service version
    pub version: String,
}
