//! MCP server implementation for the Alpha Vantage tool gateway.
//!
//! Every registry entry is exposed as an MCP tool whose input schema is
//! generated from its parameter contract. Calls are routed into
//! [`alphavantage_core::Gateway`]; `health` and `help` are served by a
//! regular rmcp tool router.

mod helpers;
pub mod server;
pub mod tools;

use std::future::Future;
use std::sync::Arc;

use alphavantage_core::{Gateway, InvocationRequest};
use rmcp::{
    ErrorData,
    RoleServer,
    ServerHandler,
    handler::server::tool::{ToolCallContext, ToolRouter},
    service::RequestContext,
};
use rmcp::model::{
    CallToolRequestParams,
    CallToolResult,
    Content,
    JsonObject,
    ListToolsResult,
    PaginatedRequestParams,
    ServerCapabilities,
    ServerInfo,
    Tool,
};

use crate::tools::context::BUILTIN_TOOLS;

const SERVER_INSTRUCTIONS: &str = r"alphavantage-mcp exposes the Alpha Vantage market-data API as one MCP tool per endpoint.

Families:
- time series and quotes (`get_intraday`, `get_daily`, `get_quote_endpoint`, `get_symbol_search`, ...)
- fundamentals (`get_company_overview`, `get_income_statement_annual`, `get_earnings_quarterly`, ...)
- technical indicators (`get_sma`, `get_macd`, `get_bbands`, `get_rsi`, ...)
- commodities, forex, crypto, US macro indicators, news sentiment and options.

Notes:
- Each tool's input schema lists its parameters, allowed values and defaults. Arguments it does not list are rejected.
- `month` (YYYY-MM) is only accepted together with an intraday `interval`.
- Moving-average type parameters take a code 0-8 or an alias (SMA, EMA, WMA, DEMA, TEMA, TRIMA, T3, KAMA, MAMA).
- Results are the provider's JSON, unchanged.
- Failures carry `data.kind` and `data.retryable`; rate limits and outages are retryable, everything else is not.
- Use `help` for the tool list grouped by family. `health` returns `ok`.";

/// MCP server wrapper around the shared gateway.
#[derive(Clone)]
pub struct AlphaVantageMcp {
    tool_router: ToolRouter<Self>,
    gateway: Arc<Gateway>,
    catalog: Arc<Vec<Tool>>,
}

impl AlphaVantageMcp {
    /// Creates a new server using a gateway by value.
    #[must_use]
    pub fn new(gateway: Gateway) -> Self {
        Self::with_gateway(Arc::new(gateway))
    }

    /// Creates a new server using a shared gateway handle.
    #[must_use]
    pub fn with_gateway(gateway: Arc<Gateway>) -> Self {
        let catalog = gateway
            .registry()
            .iter()
            .map(tools::schema::tool_for)
            .collect();
        Self {
            tool_router: Self::tool_router_context(),
            gateway,
            catalog: Arc::new(catalog),
        }
    }

    #[must_use]
    pub fn gateway(&self) -> &Gateway {
        &self.gateway
    }

    /// Every tool this server lists: the catalog followed by the built-ins.
    #[must_use]
    pub fn tools(&self) -> Vec<Tool> {
        let mut tools = self.catalog.as_ref().clone();
        tools.extend(self.tool_router.list_all());
        tools
    }

    /// Runs one catalog tool through the gateway.
    ///
    /// # Errors
    /// Returns the gateway failure mapped to an MCP error.
    pub async fn call_catalog_tool<C>(
        &self,
        name: &str,
        arguments: Option<JsonObject>,
        cancelled: C,
    ) -> Result<CallToolResult, ErrorData>
    where
        C: Future<Output = ()> + Send,
    {
        let request = InvocationRequest::new(name, arguments.unwrap_or_default());
        let payload = self
            .gateway
            .invoke_until(&request, cancelled)
            .await
            .map_err(|err| helpers::map_gateway_err(&err))?;
        Ok(CallToolResult::success(vec![Content::json(payload.into_body())?]))
    }
}

impl ServerHandler for AlphaVantageMcp {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(SERVER_INSTRUCTIONS.to_string()),
            capabilities: ServerCapabilities::builder()
                .enable_tools()
                .build(),
            ..Default::default()
        }
    }

    async fn list_tools(
        &self,
        _request: Option<PaginatedRequestParams>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListToolsResult, ErrorData> {
        Ok(ListToolsResult::with_all_items(self.tools()))
    }

    async fn call_tool(
        &self,
        request: CallToolRequestParams,
        context: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, ErrorData> {
        if BUILTIN_TOOLS.contains(&request.name.as_ref()) {
            let call = ToolCallContext::new(self, request, context);
            return self.tool_router.call(call).await;
        }
        let cancelled = context.ct.clone();
        self.call_catalog_tool(&request.name, request.arguments, cancelled.cancelled())
            .await
    }
}
