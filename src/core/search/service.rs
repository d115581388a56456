//! Catalog-wide search service.

use super::scanner::scan_document;
use crate::core::catalog;
use crate::core::error::{DocsError, Result};
use crate::core::fetcher::{fetch_best_effort, DocumentSource};
use crate::core::types::SearchResult;
use futures::future::join_all;
use std::sync::Arc;
use std::time::Instant;
use tracing::debug;

/// Searches every catalog document for a query
pub struct SearchService {
    source: Arc<dyn DocumentSource>,
    context_lines: usize,
}

impl SearchService {
    /// Create a new search service
    pub fn new(source: Arc<dyn DocumentSource>, context_lines: usize) -> Self {
        Self {
            source,
            context_lines,
        }
    }

    /// Search all documents
    ///
    /// Documents are fetched concurrently; any that fail to fetch are
    /// skipped. Results come back in catalog order and omit documents
    /// without matches.
    pub async fn search(&self, query: &str, case_sensitive: bool) -> Result<Vec<SearchResult>> {
        if query.trim().is_empty() {
            return Err(DocsError::InvalidRequest(
                "Search query is required".to_string(),
            ));
        }

        let start = Instant::now();

        let scans = catalog::names().map(|name| async move {
            let content = fetch_best_effort(self.source.as_ref(), name).await?;
            scan_document(name, &content, query, case_sensitive, self.context_lines)
        });

        let results: Vec<SearchResult> = join_all(scans).await.into_iter().flatten().collect();

        debug!(
            query = query,
            case_sensitive = case_sensitive,
            files = results.len(),
            duration_ms = start.elapsed().as_millis() as u64,
            "Search completed"
        );

        Ok(results)
    }
}
