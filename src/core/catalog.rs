//! Fixed catalog of known documentation files
//!
//! The catalog is a static table; order is significant and is the
//! order used for listing, completion and search results.

use crate::core::types::DocumentEntry;

/// Every document served by doclens, in catalog order
pub const DOCUMENTS: &[DocumentEntry] = &[
    DocumentEntry {
        name: "inspector",
        description: "Documentation about the MCP Inspector tool for debugging and testing",
    },
    DocumentEntry {
        name: "installation",
        description: "Installation guide for setting up adonis-mcp in your project",
    },
    DocumentEntry {
        name: "introduction",
        description: "Introduction to the Model Context Protocol (MCP) and adonis-mcp",
    },
    DocumentEntry {
        name: "prompts",
        description: "Guide on creating and using prompts in your MCP server",
    },
    DocumentEntry {
        name: "resources",
        description: "Documentation about MCP resources and how to create them",
    },
    DocumentEntry {
        name: "sessions",
        description: "Information about session management in MCP",
    },
    DocumentEntry {
        name: "tools",
        description: "Guide on creating and implementing tools in your MCP server",
    },
    DocumentEntry {
        name: "unit-tests",
        description: "Documentation on writing unit tests for your MCP components",
    },
];

/// All catalog entries in catalog order
pub fn list() -> &'static [DocumentEntry] {
    DOCUMENTS
}

/// Document names in catalog order
pub fn names() -> impl Iterator<Item = &'static str> {
    DOCUMENTS.iter().map(|entry| entry.name)
}

/// Look up a catalog entry by exact name
pub fn get(name: &str) -> Option<&'static DocumentEntry> {
    DOCUMENTS.iter().find(|entry| entry.name == name)
}

pub fn contains(name: &str) -> bool {
    get(name).is_some()
}

/// Complete a document name from a prefix
///
/// Matching is case-insensitive on the trimmed prefix. A missing or
/// blank prefix yields every name.
pub fn complete(prefix: Option<&str>) -> Vec<&'static str> {
    let prefix = prefix.map(str::trim).unwrap_or_default().to_lowercase();

    names()
        .filter(|name| name.to_lowercase().starts_with(&prefix))
        .collect()
}
