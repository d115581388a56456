//! Remote document retrieval
//!
//! [`DocumentSource`] is the strict primitive: every fetch failure is
//! propagated. [`fetch_best_effort`] layers the skip-on-failure policy
//! used by multi-document scans on top of it. Metadata probes
//! (`exists`, `size`) never fail; errors collapse to `false` / `None`.

use crate::core::config::DocsConfig;
use crate::core::error::{DocsError, Result};
use async_trait::async_trait;
use reqwest::header::CONTENT_LENGTH;
use reqwest::{Client, StatusCode};
use std::time::Duration;
use tracing::{debug, warn};

/// A place documents can be fetched from
#[async_trait]
pub trait DocumentSource: Send + Sync {
    /// Fetch the full text of a document
    async fn fetch(&self, name: &str) -> Result<String>;

    /// Whether the document is reachable
    async fn exists(&self, name: &str) -> bool;

    /// Size in bytes as reported by the store, if known
    async fn size(&self, name: &str) -> Option<u64>;
}

/// Fetch a document, logging and swallowing any failure
pub async fn fetch_best_effort(source: &dyn DocumentSource, name: &str) -> Option<String> {
    match source.fetch(name).await {
        Ok(content) => Some(content),
        Err(e) => {
            warn!(document = name, error = %e, "Skipping document");
            None
        }
    }
}

/// Document store reached over plain HTTP(S)
pub struct HttpDocumentSource {
    client: Client,
    base_url: String,
    extension: String,
}

impl HttpDocumentSource {
    pub fn new(config: &DocsConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_sec))
            .user_agent(config.user_agent.as_str())
            .build()
            .map_err(|e| DocsError::ConfigError(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            extension: config.extension.clone(),
        })
    }

    /// Address of a document: `<base>/<name><extension>`
    pub fn url_for(&self, name: &str) -> String {
        format!("{}/{}{}", self.base_url, name, self.extension)
    }
}

#[async_trait]
impl DocumentSource for HttpDocumentSource {
    async fn fetch(&self, name: &str) -> Result<String> {
        let url = self.url_for(name);
        debug!(document = name, url = %url, "Fetching document");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| DocsError::transport(name, e))?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(DocsError::DocumentNotFound(name.to_string()));
        }
        if !status.is_success() {
            return Err(DocsError::transport(name, format!("HTTP {status}")));
        }

        response
            .text()
            .await
            .map_err(|e| DocsError::transport(name, e))
    }

    async fn exists(&self, name: &str) -> bool {
        match self.client.head(self.url_for(name)).send().await {
            Ok(response) => response.status().is_success(),
            Err(e) => {
                debug!(document = name, error = %e, "Existence probe failed");
                false
            }
        }
    }

    async fn size(&self, name: &str) -> Option<u64> {
        let response = self.client.head(self.url_for(name)).send().await.ok()?;
        if !response.status().is_success() {
            return None;
        }

        // content_length() reports the (empty) body of a HEAD response,
        // so read the header itself.
        response
            .headers()
            .get(CONTENT_LENGTH)?
            .to_str()
            .ok()?
            .trim()
            .parse()
            .ok()
    }
}
