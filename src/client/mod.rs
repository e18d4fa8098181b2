//! HTTP client for the SF MUNI real-time API.
//!
//! [`MuniClient`] is synchronous (ureq) and owns the response cache. The
//! async [`TransitClient`] trait, implemented by [`AsyncMuniClient`], runs it
//! on the blocking pool and adds cancellation.

mod async_wrapper;
pub use async_wrapper::{AsyncMuniClient, TransitClient};

use crate::cache::response_cache::{route_details_key, ALL_ROUTES_KEY};
use crate::cache::{Cacheable, ResponseCache};
use crate::config::{Config, DEFAULT_CACHE_TTL};
use crate::error::{TransitError, TransitResult};
use crate::metrics::{HttpTimer, Metrics};
use crate::models::{
    flatten_predictions, Prediction, PredictionResponse, RouteDetail, RouteSummary,
};
use serde::de::DeserializeOwned;
use std::sync::Arc;
use std::time::Duration;

/// Timeout applied to every outbound request.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Path prefix shared by all SFMTA endpoints.
const AGENCY_PATH: &str = "/v2.0/riders/agencies/sfmta-cis";

/// Options applied when constructing a [`MuniClient`].
#[derive(Debug, Clone, PartialEq)]
pub struct ClientOptions {
    /// TTL for cached route data (default: 5 minutes)
    pub cache_ttl: Duration,

    /// Start with the cache turned off (default: false)
    pub cache_disabled: bool,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            cache_ttl: DEFAULT_CACHE_TTL,
            cache_disabled: false,
        }
    }
}

/// Fail with `RouteIdRequired` on an empty route ID.
pub(crate) fn require_route_id(route_id: &str) -> TransitResult<()> {
    if route_id.is_empty() {
        return Err(TransitError::RouteIdRequired);
    }
    Ok(())
}

/// Fail with `StopIdRequired` on an empty stop ID.
pub(crate) fn require_stop_id(stop_id: &str) -> TransitResult<()> {
    if stop_id.is_empty() {
        return Err(TransitError::StopIdRequired);
    }
    Ok(())
}

/// HTTP client for the SF MUNI API.
///
/// Route list and route details are cached; predictions never are. Clones
/// share the agent, cache and metrics.
#[derive(Clone)]
pub struct MuniClient {
    /// Base URL for the MUNI API
    base_url: String,

    /// Optional API key, carried but not sent
    api_key: Option<String>,

    /// HTTP client agent
    agent: Arc<ureq::Agent>,

    cache: ResponseCache,

    /// Metrics collector
    metrics: Metrics,
}

impl MuniClient {
    /// Create a new client.
    pub fn new(
        base_url: impl Into<String>,
        api_key: Option<String>,
        options: ClientOptions,
    ) -> Self {
        let agent = ureq::AgentBuilder::new().timeout(REQUEST_TIMEOUT).build();

        let cache = ResponseCache::new(options.cache_ttl);
        if options.cache_disabled {
            cache.disable();
        }

        Self {
            base_url: base_url.into(),
            api_key,
            agent: Arc::new(agent),
            cache,
            metrics: Metrics::new(),
        }
    }

    /// Create a client from configuration.
    pub fn from_config(config: &Config) -> Self {
        Self::new(
            config.api_base_url.clone(),
            config.api_key.clone(),
            config.client_options(),
        )
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref()
    }

    /// Get a reference to the response cache.
    pub fn cache(&self) -> &ResponseCache {
        &self.cache
    }

    /// Get a reference to the metrics collector.
    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    /// Build a full URL from a path.
    fn build_url(&self, path: &str) -> String {
        let base = self.base_url.trim_end_matches('/');
        let path = path.trim_start_matches('/');
        format!("{}/{}", base, path)
    }

    /// Execute a GET request and decode the JSON body.
    ///
    /// Anything but 200 is an `UnexpectedStatus` error.
    fn get_json<T: DeserializeOwned>(&self, path: &str) -> TransitResult<T> {
        let url = self.build_url(path);
        let timer = HttpTimer::new(self.metrics.clone());

        tracing::debug!("GET {}", url);

        let response = match self
            .agent
            .get(&url)
            .set("Accept", "application/json")
            .call()
        {
            Ok(response) => response,
            Err(e) => {
                timer.complete_with_error();
                let err = map_error(e);
                tracing::warn!("GET {} - Error: {}", url, err);
                return Err(err);
            }
        };

        if response.status() != 200 {
            timer.complete_with_error();
            tracing::warn!("GET {} - Unexpected status {}", url, response.status());
            return Err(TransitError::UnexpectedStatus {
                status: response.status(),
            });
        }

        let decoded = serde_json::from_reader(response.into_reader()).map_err(|e| {
            if e.is_io() {
                TransitError::Transport(format!("failed to read response body: {}", e))
            } else {
                TransitError::Decode(e)
            }
        });

        match &decoded {
            Ok(_) => timer.complete(),
            Err(e) => {
                timer.complete_with_error();
                tracing::warn!("GET {} - Error: {}", url, e);
            }
        }

        decoded
    }

    /// Serve `key` from the cache, or fetch `path`, cache and return it.
    fn cached_get<T>(&self, key: &str, path: &str) -> TransitResult<T>
    where
        T: Cacheable + Clone + DeserializeOwned,
    {
        if let Some(hit) = self.cache.get::<T>(key) {
            self.metrics.record_cache_lookup(true);
            tracing::debug!(key = %key, "Cache hit");
            return Ok(hit);
        }
        self.metrics.record_cache_lookup(false);

        let value: T = self.get_json(path)?;
        self.cache.set(key, value.clone());
        Ok(value)
    }

    // ========================= Route Operations =========================

    /// Fetch every MUNI route.
    pub fn fetch_all_routes(&self) -> TransitResult<Vec<RouteSummary>> {
        let path = format!("{}/routes", AGENCY_PATH);
        self.cached_get(ALL_ROUTES_KEY, &path)
    }

    /// Fetch stops, directions and geometry for one route.
    pub fn fetch_route_details(&self, route_id: &str) -> TransitResult<RouteDetail> {
        require_route_id(route_id)?;

        let path = format!("{}/routes/{}", AGENCY_PATH, urlencoding::encode(route_id));
        self.cached_get(&route_details_key(route_id), &path)
    }

    // ========================= Prediction Operations =========================

    /// Fetch real-time predictions for a stop on a route. Never cached.
    pub fn fetch_predictions(
        &self,
        route_id: &str,
        stop_id: &str,
    ) -> TransitResult<Vec<Prediction>> {
        require_route_id(route_id)?;
        require_stop_id(stop_id)?;

        let path = format!(
            "{}/nstops/{}:{}/predictions",
            AGENCY_PATH,
            urlencoding::encode(route_id),
            urlencoding::encode(stop_id)
        );
        let envelopes: Vec<PredictionResponse> = self.get_json(&path)?;
        let predictions = flatten_predictions(envelopes)?;

        self.metrics.record_predictions_fetched(predictions.len());
        Ok(predictions)
    }

    // ========================= Cache Control =========================

    /// Drop every cached response.
    pub fn clear_cache(&self) {
        self.cache.clear();
    }

    pub fn enable_cache(&self) {
        self.cache.enable();
    }

    pub fn disable_cache(&self) {
        self.cache.disable();
    }

    pub fn cache_enabled(&self) -> bool {
        self.cache.is_enabled()
    }
}

impl std::fmt::Debug for MuniClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MuniClient")
            .field("base_url", &self.base_url)
            .field("has_api_key", &self.api_key.is_some())
            .field("cache", &self.cache)
            .finish()
    }
}

/// Map a ureq error to a TransitError.
fn map_error(error: ureq::Error) -> TransitError {
    match error {
        ureq::Error::Status(code, _) => TransitError::UnexpectedStatus { status: code },
        ureq::Error::Transport(transport) => TransitError::Transport(transport.to_string()),
    }
}
