use std::collections::BTreeMap;

use rmcp::{
    ErrorData,
    model::{CallToolResult, Content},
    tool,
    tool_router,
};
use serde::Serialize;

use crate::AlphaVantageMcp;

/// Tool names served by the hand-written router rather than the catalog.
pub const BUILTIN_TOOLS: [&str; 2] = ["health", "help"];

/// Payload of the `help` tool.
#[derive(Debug, Clone, Serialize)]
pub struct HelpCatalog {
    pub tool_count: usize,
    pub families: BTreeMap<&'static str, Vec<&'static str>>,
    pub notes: Vec<&'static str>,
}

impl HelpCatalog {
    #[must_use]
    pub fn from_server(server: &AlphaVantageMcp) -> Self {
        let registry = server.gateway().registry();
        Self {
            tool_count: registry.len(),
            families: registry
                .families()
                .into_iter()
                .map(|(family, names)| (family.as_str(), names))
                .collect(),
            notes: vec![
                "Arguments are validated before any provider call; unknown or inapplicable arguments are rejected.",
                "Moving-average types accept a code 0-8 or an alias such as SMA or EMA.",
                "'month' (YYYY-MM) is only valid together with an intraday interval.",
                "Errors carry data.kind and data.retryable; only rate limits and outages are worth retrying.",
                "Successful calls return the provider JSON unchanged.",
            ],
        }
    }
}

#[tool_router(router = tool_router_context, vis = "pub")]
impl AlphaVantageMcp {
    #[tool(description = "Health check. Returns 'ok'.")]
    async fn health(&self) -> Result<CallToolResult, ErrorData> {
        Ok(CallToolResult::success(vec![Content::text("ok")]))
    }

    #[tool(description = "List the market-data tools grouped by provider family, with usage notes.")]
    async fn help(&self) -> Result<CallToolResult, ErrorData> {
        Ok(CallToolResult::success(vec![Content::json(HelpCatalog::from_server(self))?]))
    }
}
