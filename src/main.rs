//! doclens server entry point
//!
//! Starts the MCP endpoint over HTTP.

use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use doclens::cli::{Cli, LogFormat};
use doclens::core::services::Services;
use doclens::core::xdg::XdgDirs;
use doclens::http;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "doclens=info,tower_http=info".into());
    let registry = tracing_subscriber::registry().with(filter);
    match cli.log_format {
        LogFormat::Human => registry.with(tracing_subscriber::fmt::layer()).init(),
        LogFormat::Json => registry
            .with(tracing_subscriber::fmt::layer().json())
            .init(),
    }

    tracing::info!("Starting doclens MCP server");
    tracing::info!("Version: {}", env!("CARGO_PKG_VERSION"));

    XdgDirs::new().log_paths();

    // Load configuration
    let config = cli.load_config()?;
    config.log_config();

    // Create shared services
    let services = Arc::new(Services::new(config.clone())?);
    let app = http::router(services);

    // Bind to address and start server
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Listening on {}", addr);
    tracing::info!("MCP endpoint at http://{}/mcp", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("doclens shutting down");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
}
