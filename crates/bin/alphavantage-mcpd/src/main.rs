//! Daemon entry point for the Alpha Vantage MCP server.
//!
//! Loads configuration from CLI flags and the environment, validates the tool
//! catalog, and serves the MCP protocol over stdio, streamable HTTP, or both.

mod config;
mod gateway;

use std::error::Error;

use alphavantage_mcp::server::{McpHttpServerConfig, serve_stdio, serve_streamable_http};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::config::GatewayConfig;
use crate::gateway::build_gateway;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error + Send + Sync>> {
    let config = GatewayConfig::from_args()?;
    init_tracing(&config.log_filter)?;
    info!(?config, "starting alphavantage-mcpd");

    let gateway = build_gateway(&config)?;
    let http_config = McpHttpServerConfig::new(config.mcp_http_addr);

    match (config.enable_stdio, config.http_serve) {
        (true, true) => {
            // The stdio peer going away ends the process.
            tokio::select! {
                result = serve_stdio(gateway.clone()) => result?,
                result = serve_streamable_http(gateway, http_config) => result?,
            }
        }
        (true, false) => serve_stdio(gateway).await?,
        (false, _) => serve_streamable_http(gateway, http_config).await?,
    }

    info!("alphavantage-mcpd stopped");
    Ok(())
}

// Logs go to stderr; stdout belongs to the stdio transport.
fn init_tracing(filter: &str) -> Result<(), Box<dyn Error + Send + Sync>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(filter)?)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .try_init()
        .map_err(Into::into)
}
