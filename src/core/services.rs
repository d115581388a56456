//! Unified service container for doclens
//!
//! Provides shared access to all core services.

use crate::core::config::Config;
use crate::core::error::Result;
use crate::core::extract::ExtractService;
use crate::core::fetcher::{DocumentSource, HttpDocumentSource};
use crate::core::search::SearchService;
use std::sync::Arc;

/// Unified services container
///
/// All adapters use this same struct for service access.
#[derive(Clone)]
pub struct Services {
    /// Remote document store
    pub source: Arc<dyn DocumentSource>,

    /// Catalog-wide search
    pub search: Arc<SearchService>,

    /// Single-document code block extraction
    pub extract: Arc<ExtractService>,

    /// Application configuration
    pub config: Arc<Config>,
}

impl Services {
    /// Create services backed by the configured HTTP document store
    pub fn new(config: Config) -> Result<Self> {
        let source = Arc::new(HttpDocumentSource::new(&config.docs)?);
        Ok(Self::with_source(config, source))
    }

    /// Create services over an arbitrary document source
    pub fn with_source(config: Config, source: Arc<dyn DocumentSource>) -> Self {
        let search = Arc::new(SearchService::new(
            Arc::clone(&source),
            config.search.context_lines,
        ));
        let extract = Arc::new(ExtractService::new(Arc::clone(&source)));

        Self {
            source,
            search,
            extract,
            config: Arc::new(config),
        }
    }
}
