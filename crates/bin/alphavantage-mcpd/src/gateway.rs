use std::error::Error;
use std::sync::Arc;

use alphavantage_core::upstream::AlphaVantageHttpClient;
use alphavantage_core::{Gateway, ToolRegistry};
use tracing::{debug, info};

use crate::config::GatewayConfig;

/// Validates the built-in catalog and wires it to the HTTP upstream.
pub fn build_gateway(config: &GatewayConfig) -> Result<Arc<Gateway>, Box<dyn Error + Send + Sync>> {
    let registry = ToolRegistry::builtin()?;
    let client = AlphaVantageHttpClient::new(config.http_client_config())?;
    info!(
        tools = registry.len(),
        base_url = client.base_url(),
        "tool catalog loaded"
    );
    for (family, names) in registry.families() {
        debug!(%family, tools = names.len(), "family registered");
    }
    Ok(Arc::new(Gateway::new(Arc::new(registry), Arc::new(client))))
}
