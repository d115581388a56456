//! Configuration management for the doclens service.
//!
//! This module handles loading configuration from TOML files and
//! environment variables, with sensible defaults for all settings.

use crate::core::error::{DocsError, Result};
use crate::core::xdg::XdgDirs;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::Path;

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub docs: DocsConfig,
    #[serde(default)]
    pub search: SearchConfig,
}

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Largest request body the session gate will buffer
    #[serde(default = "default_max_body_bytes")]
    pub max_body_bytes: usize,
}

/// Remote document store configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DocsConfig {
    /// Base URL documents are resolved against
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Suffix appended to document names
    #[serde(default = "default_extension")]
    pub extension: String,

    /// Per-request timeout in seconds
    #[serde(default = "default_request_timeout")]
    pub request_timeout_sec: u64,

    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

/// Largest accepted `search.context_lines`
pub const MAX_CONTEXT_LINES: usize = 100;

/// Search configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SearchConfig {
    /// Lines of context captured on each side of a match
    #[serde(default = "default_context_lines")]
    pub context_lines: usize,
}

// Default value functions
fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3333
}

fn default_max_body_bytes() -> usize {
    1024 * 1024
}

fn default_base_url() -> String {
    "https://raw.githubusercontent.com/batosai/adonis-mcp/main/docs".to_string()
}

fn default_extension() -> String {
    ".md".to_string()
}

fn default_request_timeout() -> u64 {
    30
}

fn default_user_agent() -> String {
    format!("doclens/{}", env!("CARGO_PKG_VERSION"))
}

fn default_context_lines() -> usize {
    2
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            max_body_bytes: default_max_body_bytes(),
        }
    }
}

impl Default for DocsConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            extension: default_extension(),
            request_timeout_sec: default_request_timeout(),
            user_agent: default_user_agent(),
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            context_lines: default_context_lines(),
        }
    }
}

impl Config {
    /// Load configuration from TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .map_err(|e| DocsError::ConfigError(format!("Failed to read config file: {e}")))?;

        let config: Config = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Load config with priority: env vars > TOML > defaults
    pub fn load() -> Result<Self> {
        let xdg = XdgDirs::new();
        Self::load_with_xdg(&xdg)
    }

    /// Load config with explicit XDG directories
    ///
    /// Priority order:
    /// 1. DOCLENS_CONFIG env var
    /// 2. XDG config file (~/.config/doclens/config.toml)
    /// 3. Defaults
    pub fn load_with_xdg(xdg: &XdgDirs) -> Result<Self> {
        let mut config = if let Ok(config_path) = env::var("DOCLENS_CONFIG") {
            Self::from_file(config_path)?
        } else {
            let xdg_config = xdg.config_file();
            if xdg_config.exists() {
                Self::from_file(xdg_config)?
            } else {
                Self::default()
            }
        };

        config.merge_env();
        config.validate()?;

        Ok(config)
    }

    /// Merge configuration with environment variables
    pub fn merge_env(&mut self) {
        // Server configuration
        if let Ok(host) = env::var("DOCLENS_HOST") {
            self.server.host = host;
        }
        if let Ok(port) = env::var("DOCLENS_PORT") {
            if let Ok(p) = port.parse() {
                self.server.port = p;
            }
        }
        if let Ok(max_body) = env::var("DOCLENS_MAX_BODY_BYTES") {
            if let Ok(bytes) = max_body.parse() {
                self.server.max_body_bytes = bytes;
            }
        }

        // Document store configuration
        if let Ok(base_url) = env::var("DOCLENS_BASE_URL") {
            self.docs.base_url = base_url;
        }
        if let Ok(timeout) = env::var("DOCLENS_REQUEST_TIMEOUT_SEC") {
            if let Ok(t) = timeout.parse() {
                self.docs.request_timeout_sec = t;
            }
        }

        // Search configuration
        if let Ok(context) = env::var("DOCLENS_CONTEXT_LINES") {
            if let Ok(n) = context.parse() {
                self.search.context_lines = n;
            }
        }
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.server.port == 0 {
            return Err(DocsError::ConfigError("Port must be non-zero".to_string()));
        }

        if self.server.max_body_bytes == 0 {
            return Err(DocsError::ConfigError(
                "Max body size must be non-zero".to_string(),
            ));
        }

        let base_url = self.docs.base_url.trim();
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(DocsError::ConfigError(format!(
                "Base URL must be an http(s) URL, got '{base_url}'"
            )));
        }

        if self.docs.request_timeout_sec == 0 {
            return Err(DocsError::ConfigError(
                "Request timeout must be non-zero".to_string(),
            ));
        }

        if self.search.context_lines > MAX_CONTEXT_LINES {
            return Err(DocsError::ConfigError(format!(
                "Context lines must be at most {MAX_CONTEXT_LINES}, got {}",
                self.search.context_lines
            )));
        }

        Ok(())
    }

    /// Log configuration
    pub fn log_config(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen: {}:{}", self.server.host, self.server.port);
        tracing::info!("  Max body: {} bytes", self.server.max_body_bytes);
        tracing::info!("  Docs base URL: {}", self.docs.base_url);
        tracing::info!("  Docs extension: {}", self.docs.extension);
        tracing::info!("  Request timeout: {}s", self.docs.request_timeout_sec);
        tracing::info!("  Context lines: {}", self.search.context_lines);
    }
}
