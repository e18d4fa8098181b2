//! MCP tool handlers for the MUNI server.
//!
//! This module registers the transit tools using the rmcp SDK's tool_router pattern.

use crate::client::TransitClient;
use crate::tools::{ToolOutput, TransitTools};
use rmcp::handler::server::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::*;
use rmcp::service::RequestContext;
use rmcp::{tool, tool_handler, tool_router, ErrorData as McpError, RoleServer, ServerHandler};
use schemars::JsonSchema;
use serde::Deserialize;
use std::sync::Arc;

/// The MUNI MCP server exposing route, prediction and cache tools.
#[derive(Clone)]
pub struct MuniMcpServer {
    tools: TransitTools,
    tool_router: ToolRouter<Self>,
}

// Implement ServerHandler using the tool_handler macro
#[tool_handler]
impl ServerHandler for MuniMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities {
                tools: Some(Default::default()),
                ..Default::default()
            },
            server_info: Implementation {
                name: "muni-mcp-server".into(),
                version: env!("CARGO_PKG_VERSION").into(),
                icons: None,
                title: None,
                website_url: None,
            },
            instructions: Some("MCP server for SF MUNI - lists routes, describes route stops and directions, and returns real-time arrival predictions. Route data is cached; predictions are always live.".into()),
        }
    }
}

#[derive(Debug, Deserialize, JsonSchema)]
struct RouteDetailsParams {
    /// ID of the route (e.g., 'N' for N-Judah)
    route_id: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
struct PredictionsParams {
    /// ID of the route (e.g., 'N' for N-Judah)
    route_id: String,
    /// ID of the stop (e.g., '7142')
    stop_id: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
struct ToggleCacheParams {
    /// Set to true to enable caching, false to disable
    enabled: bool,
}

// Tool failures stay inside the result so the caller always gets a response
fn to_call_result(output: ToolOutput) -> CallToolResult {
    match output {
        ToolOutput::Json(text) | ToolOutput::Text(text) => {
            CallToolResult::success(vec![Content::text(text)])
        }
        ToolOutput::Failure(message) => CallToolResult::error(vec![Content::text(message)]),
    }
}

// Tool router implementation
#[tool_router]
impl MuniMcpServer {
    /// Create a new MUNI MCP server around a transit client.
    pub fn new(client: Arc<dyn TransitClient>) -> Self {
        Self {
            tools: TransitTools::new(client),
            tool_router: Self::tool_router(),
        }
    }

    /// Check if the MUNI API server is healthy.
    #[tool(description = "Check if the MUNI API server is healthy")]
    async fn health_check(
        &self,
        context: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, McpError> {
        Ok(to_call_result(self.tools.health_check(&context.ct).await))
    }

    /// Get a list of all MUNI routes.
    #[tool(description = "Get a list of all MUNI routes with detailed information")]
    async fn list_all_routes(
        &self,
        context: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, McpError> {
        Ok(to_call_result(self.tools.list_all_routes(&context.ct).await))
    }

    /// Get stops, directions and geometry for one route.
    #[tool(description = "Get detailed information about a specific MUNI route")]
    async fn get_route_details(
        &self,
        params: Parameters<RouteDetailsParams>,
        context: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;

        tracing::debug!("MCP Handler: get_route_details route_id={}", params.route_id);

        Ok(to_call_result(
            self.tools
                .get_route_details(&context.ct, &params.route_id)
                .await,
        ))
    }

    /// Get real-time predictions for a stop on a route.
    #[tool(
        description = "Get real-time arrival/departure predictions for a specific stop on a route"
    )]
    async fn get_predictions(
        &self,
        params: Parameters<PredictionsParams>,
        context: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;

        tracing::debug!(
            "MCP Handler: get_predictions route_id={}, stop_id={}",
            params.route_id,
            params.stop_id
        );

        Ok(to_call_result(
            self.tools
                .get_predictions(&context.ct, &params.route_id, &params.stop_id)
                .await,
        ))
    }

    /// Enable or disable response caching.
    #[tool(description = "Enable or disable caching of MUNI API responses")]
    async fn toggle_cache(
        &self,
        params: Parameters<ToggleCacheParams>,
    ) -> Result<CallToolResult, McpError> {
        Ok(to_call_result(self.tools.toggle_cache(params.0.enabled)))
    }

    /// Drop all cached responses.
    #[tool(description = "Clear the cached MUNI API responses")]
    async fn clear_cache(&self) -> Result<CallToolResult, McpError> {
        Ok(to_call_result(self.tools.clear_cache()))
    }
}
