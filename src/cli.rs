//! Command-line interface for the doclens server

use std::path::PathBuf;

use clap::Parser;

use crate::core::config::Config;
use crate::core::error::Result;

/// doclens - MCP server for remote markdown documentation
///
/// Lists, searches and extracts code examples from a fixed catalog of
/// documentation files fetched on demand.
#[derive(Parser, Debug)]
#[command(name = "doclens")]
#[command(version)]
#[command(about = "MCP documentation server", long_about = None)]
pub struct Cli {
    /// Path to a TOML config file (overrides the XDG location)
    #[arg(long, env = "DOCLENS_CONFIG")]
    pub config: Option<PathBuf>,

    /// Address to bind
    #[arg(long)]
    pub host: Option<String>,

    /// Port to listen on
    #[arg(long)]
    pub port: Option<u16>,

    /// Log output format
    #[arg(long, default_value = "human")]
    pub log_format: LogFormat,
}

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum LogFormat {
    /// Human-readable lines (default)
    #[default]
    Human,
    /// One JSON object per event
    Json,
}

impl Cli {
    /// Resolve the effective configuration
    ///
    /// Flags win over environment variables, which win over the file.
    pub fn load_config(&self) -> Result<Config> {
        let mut config = match &self.config {
            Some(path) => {
                let mut config = Config::from_file(path)?;
                config.merge_env();
                config
            }
            None => Config::load()?,
        };

        if let Some(host) = &self.host {
            config.server.host = host.clone();
        }
        if let Some(port) = self.port {
            config.server.port = port;
        }

        config.validate()?;
        Ok(config)
    }
}
