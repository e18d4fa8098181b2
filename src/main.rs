//! MUNI MCP Server - Main entry point
//!
//! Serves the SF MUNI transit tools over the Model Context Protocol on stdio.

use anyhow::Result;
use muni_mcp_server::{AsyncMuniClient, Config, MuniClient, MuniMcpServer, TransitClient};
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging (stderr only to avoid polluting stdout/MCP communication)
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = match Config::from_env() {
        Ok(cfg) => {
            info!("Configuration loaded successfully");
            cfg
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    info!(
        "Starting MUNI MCP Server with API URL: {}",
        config.api_base_url
    );
    info!(
        "Cache TTL: {:?} (enabled: {})",
        config.cache_ttl, !config.cache_disabled
    );

    let client = Arc::new(AsyncMuniClient::new(MuniClient::from_config(&config)));
    let metrics = client.metrics().clone();
    let server = MuniMcpServer::new(client as Arc<dyn TransitClient>);

    info!("Starting MCP server with stdio transport");
    muni_mcp_server::server::run_server(server).await?;

    let summary = metrics.summary();
    info!(
        "HTTP requests: {} ({} errors, avg {:.1} ms), cache hits: {}, misses: {}",
        summary.http_requests_total,
        summary.http_errors_total,
        summary.http_duration_avg_ms,
        summary.cache_hits_total,
        summary.cache_misses_total
    );
    info!("MUNI MCP Server shutdown complete");
    Ok(())
}
