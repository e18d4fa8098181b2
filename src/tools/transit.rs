//! Transit tools.
//!
//! Each method backs one MCP tool. Every outcome, including client errors,
//! becomes a [`ToolOutput`]; nothing here returns `Err`.

use crate::client::TransitClient;
use serde::Serialize;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

/// Text returned by a successful health check.
pub const HEALTHY_MESSAGE: &str = "SF MUNI API server is healthy and running!";

/// Result of a tool invocation.
#[derive(Debug, Clone, PartialEq)]
pub enum ToolOutput {
    /// Serialized JSON payload
    Json(String),

    /// Plain-text message
    Text(String),

    /// Tool-level failure reported back to the caller
    Failure(String),
}

impl ToolOutput {
    pub fn is_failure(&self) -> bool {
        matches!(self, ToolOutput::Failure(_))
    }

    /// The text carried by this output, whatever its kind.
    pub fn text(&self) -> &str {
        match self {
            ToolOutput::Json(s) | ToolOutput::Text(s) | ToolOutput::Failure(s) => s,
        }
    }

    fn json<T: Serialize>(value: &T) -> Self {
        match serde_json::to_string_pretty(value) {
            Ok(json) => ToolOutput::Json(json),
            Err(e) => ToolOutput::Failure(format!("Failed to serialize response: {}", e)),
        }
    }
}

/// Tools exposing the transit client to MCP callers.
#[derive(Clone)]
pub struct TransitTools {
    client: Arc<dyn TransitClient>,
}

impl TransitTools {
    pub fn new(client: Arc<dyn TransitClient>) -> Self {
        Self { client }
    }

    /// Probe the upstream API by fetching the route list.
    pub async fn health_check(&self, ct: &CancellationToken) -> ToolOutput {
        match self.client.fetch_all_routes(ct).await {
            Ok(routes) => {
                tracing::debug!("Health check ok, {} routes", routes.len());
                ToolOutput::Text(HEALTHY_MESSAGE.to_string())
            }
            Err(e) => {
                tracing::warn!("Health check failed: {}", e);
                ToolOutput::Failure(format!("MUNI API health check failed: {}", e))
            }
        }
    }

    pub async fn list_all_routes(&self, ct: &CancellationToken) -> ToolOutput {
        match self.client.fetch_all_routes(ct).await {
            Ok(routes) => ToolOutput::json(&routes),
            Err(e) => ToolOutput::Failure(format!("Failed to fetch routes: {}", e)),
        }
    }

    pub async fn get_route_details(&self, ct: &CancellationToken, route_id: &str) -> ToolOutput {
        match self.client.fetch_route_details(ct, route_id).await {
            Ok(details) => ToolOutput::json(&details),
            Err(e) => ToolOutput::Failure(format!("Failed to fetch route details: {}", e)),
        }
    }

    pub async fn get_predictions(
        &self,
        ct: &CancellationToken,
        route_id: &str,
        stop_id: &str,
    ) -> ToolOutput {
        match self.client.fetch_predictions(ct, route_id, stop_id).await {
            Ok(predictions) => ToolOutput::json(&predictions),
            Err(e) => ToolOutput::Failure(format!("Failed to fetch predictions: {}", e)),
        }
    }

    pub fn toggle_cache(&self, enabled: bool) -> ToolOutput {
        if enabled {
            self.client.enable_cache();
            tracing::info!("Response cache enabled");
            ToolOutput::Text("MUNI API caching is now enabled".to_string())
        } else {
            self.client.disable_cache();
            tracing::info!("Response cache disabled");
            ToolOutput::Text("MUNI API caching is now disabled".to_string())
        }
    }

    pub fn clear_cache(&self) -> ToolOutput {
        self.client.clear_cache();
        tracing::info!("Response cache cleared");
        ToolOutput::Text("MUNI API cache has been cleared".to_string())
    }
}
