//! Fenced code block extraction.
//!
//! Scanning is line oriented. An opening fence is a line of exactly
//! three backticks optionally followed by a word token; the block runs
//! until a line of exactly three backticks. Blocks never nest, and a
//! block still open at end of document is dropped.

use crate::core::catalog;
use crate::core::error::{DocsError, Result};
use crate::core::fetcher::DocumentSource;
use crate::core::types::CodeBlock;
use once_cell::sync::Lazy;
use regex::Regex;
use std::sync::Arc;
use tracing::debug;

static OPENING_FENCE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^```([A-Za-z0-9_]+)?$").unwrap());

const CLOSING_FENCE: &str = "```";

const DEFAULT_LANGUAGE: &str = "text";

/// Fence detection ignores a trailing carriage return; block content
/// keeps it.
fn fence_text(line: &str) -> &str {
    line.strip_suffix('\r').unwrap_or(line)
}

/// Extract every terminated code block from markdown text
pub fn extract_code_blocks(content: &str) -> Vec<CodeBlock> {
    let lines: Vec<&str> = content.split('\n').collect();
    let mut blocks = Vec::new();
    let mut i = 0;

    while i < lines.len() {
        let Some(opening) = OPENING_FENCE.captures(fence_text(lines[i])) else {
            i += 1;
            continue;
        };

        let language = opening
            .get(1)
            .map_or(DEFAULT_LANGUAGE, |m| m.as_str())
            .to_string();

        let body_start = i + 1;
        let closing = lines[body_start..]
            .iter()
            .position(|line| fence_text(line) == CLOSING_FENCE);

        match closing {
            Some(offset) => {
                let body_end = body_start + offset;
                blocks.push(CodeBlock {
                    language,
                    code: lines[body_start..body_end].join("\n"),
                    line_number: i + 1,
                });
                i = body_end + 1;
            }
            // Unterminated: nothing after this fence can close a block
            None => break,
        }
    }

    blocks
}

/// Fetches a single document and extracts its code blocks
pub struct ExtractService {
    source: Arc<dyn DocumentSource>,
}

impl ExtractService {
    pub fn new(source: Arc<dyn DocumentSource>) -> Self {
        Self { source }
    }

    /// Extract code blocks from a catalog document
    ///
    /// Unlike search, fetch failures are returned to the caller.
    pub async fn extract(&self, filename: &str) -> Result<Vec<CodeBlock>> {
        let name = filename.trim();
        if name.is_empty() {
            return Err(DocsError::InvalidRequest(
                "Filename is required".to_string(),
            ));
        }

        if !catalog::contains(name) {
            return Err(DocsError::DocumentNotFound(name.to_string()));
        }

        let content = self.source.fetch(name).await?;
        let blocks = extract_code_blocks(&content);

        debug!(document = name, blocks = blocks.len(), "Extracted code blocks");
        Ok(blocks)
    }
}
