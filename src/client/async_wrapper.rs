//! Async wrapper around the synchronous MuniClient.
//!
//! HTTP calls run on tokio's blocking pool via `tokio::task::spawn_blocking`
//! so they never stall the async runtime. Every fetch takes a
//! `CancellationToken`; once it fires the caller gets a transport error right
//! away and the abandoned request is left to finish within the agent timeout.

use crate::client::{require_route_id, require_stop_id, MuniClient};
use crate::error::{TransitError, TransitResult};
use crate::metrics::Metrics;
use crate::models::{Prediction, RouteDetail, RouteSummary};
use async_trait::async_trait;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

/// The transit operations the tool layer depends on.
///
/// All methods are safe to call concurrently.
#[async_trait]
pub trait TransitClient: Send + Sync {
    async fn fetch_all_routes(&self, ct: &CancellationToken) -> TransitResult<Vec<RouteSummary>>;

    async fn fetch_route_details(
        &self,
        ct: &CancellationToken,
        route_id: &str,
    ) -> TransitResult<RouteDetail>;

    async fn fetch_predictions(
        &self,
        ct: &CancellationToken,
        route_id: &str,
        stop_id: &str,
    ) -> TransitResult<Vec<Prediction>>;

    fn clear_cache(&self);
    fn enable_cache(&self);
    fn disable_cache(&self);
    fn cache_enabled(&self) -> bool;
}

/// Async wrapper around synchronous MuniClient.
#[derive(Clone)]
pub struct AsyncMuniClient {
    client: Arc<MuniClient>,
}

impl AsyncMuniClient {
    pub fn new(client: MuniClient) -> Self {
        Self {
            client: Arc::new(client),
        }
    }

    /// Metrics of the wrapped client.
    pub fn metrics(&self) -> &Metrics {
        self.client.metrics()
    }

    /// Run a client call on the blocking pool, racing it against `ct`.
    async fn run_blocking<T, F>(&self, ct: &CancellationToken, op: F) -> TransitResult<T>
    where
        T: Send + 'static,
        F: FnOnce(&MuniClient) -> TransitResult<T> + Send + 'static,
    {
        if ct.is_cancelled() {
            return Err(cancelled());
        }

        let client = self.client.clone();
        let task = tokio::task::spawn_blocking(move || op(&client));

        tokio::select! {
            biased;
            _ = ct.cancelled() => {
                tracing::debug!("Request cancelled by caller");
                Err(cancelled())
            }
            joined = task => joined
                .map_err(|e| TransitError::Transport(format!("Task join error: {}", e)))?,
        }
    }
}

fn cancelled() -> TransitError {
    TransitError::Transport("request cancelled".to_string())
}

#[async_trait]
impl TransitClient for AsyncMuniClient {
    async fn fetch_all_routes(&self, ct: &CancellationToken) -> TransitResult<Vec<RouteSummary>> {
        self.run_blocking(ct, |client| client.fetch_all_routes())
            .await
    }

    async fn fetch_route_details(
        &self,
        ct: &CancellationToken,
        route_id: &str,
    ) -> TransitResult<RouteDetail> {
        require_route_id(route_id)?;
        let route_id = route_id.to_string();

        self.run_blocking(ct, move |client| client.fetch_route_details(&route_id))
            .await
    }

    async fn fetch_predictions(
        &self,
        ct: &CancellationToken,
        route_id: &str,
        stop_id: &str,
    ) -> TransitResult<Vec<Prediction>> {
        require_route_id(route_id)?;
        require_stop_id(stop_id)?;
        let route_id = route_id.to_string();
        let stop_id = stop_id.to_string();

        self.run_blocking(ct, move |client| {
            client.fetch_predictions(&route_id, &stop_id)
        })
        .await
    }

    fn clear_cache(&self) {
        self.client.clear_cache();
    }

    fn enable_cache(&self) {
        self.client.enable_cache();
    }

    fn disable_cache(&self) {
        self.client.disable_cache();
    }

    fn cache_enabled(&self) -> bool {
        self.client.cache_enabled()
    }
}
