use async_trait::async_trait;
use muni_mcp_server::error::{TransitError, TransitResult};
use muni_mcp_server::models::{Prediction, RouteDetail, RouteSummary};
use muni_mcp_server::TransitClient;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use tokio_util::sync::CancellationToken;

type RoutesFn = Box<dyn Fn() -> TransitResult<Vec<RouteSummary>> + Send + Sync>;
type DetailsFn = Box<dyn Fn(&str) -> TransitResult<RouteDetail> + Send + Sync>;
type PredictionsFn = Box<dyn Fn(&str, &str) -> TransitResult<Vec<Prediction>> + Send + Sync>;

/// Mock transit client for testing the tool layer.
///
/// Each fetch delegates to a replaceable closure, and every call is counted
/// by method name.
#[allow(dead_code)]
#[derive(Clone)]
pub struct MockTransitClient {
    routes_fn: Arc<Mutex<RoutesFn>>,
    details_fn: Arc<Mutex<DetailsFn>>,
    predictions_fn: Arc<Mutex<PredictionsFn>>,
    cache_enabled: Arc<AtomicBool>,
    call_counts: Arc<Mutex<HashMap<String, usize>>>,
}

#[allow(dead_code)]
impl MockTransitClient {
    /// Create a mock returning two routes, a one-stop route and no predictions.
    pub fn new() -> Self {
        Self {
            routes_fn: Arc::new(Mutex::new(Box::new(|| Ok(sample_routes())))),
            details_fn: Arc::new(Mutex::new(Box::new(|route_id| {
                if route_id.is_empty() {
                    return Err(TransitError::RouteIdRequired);
                }
                Ok(RouteDetail {
                    id: route_id.to_string(),
                    title: format!("{} Route", route_id),
                    ..Default::default()
                })
            }))),
            predictions_fn: Arc::new(Mutex::new(Box::new(|route_id, stop_id| {
                if route_id.is_empty() {
                    return Err(TransitError::RouteIdRequired);
                }
                if stop_id.is_empty() {
                    return Err(TransitError::StopIdRequired);
                }
                Ok(Vec::new())
            }))),
            cache_enabled: Arc::new(AtomicBool::new(true)),
            call_counts: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    pub fn set_routes(
        &self,
        f: impl Fn() -> TransitResult<Vec<RouteSummary>> + Send + Sync + 'static,
    ) {
        *self.routes_fn.lock().unwrap() = Box::new(f);
    }

    pub fn set_route_details(
        &self,
        f: impl Fn(&str) -> TransitResult<RouteDetail> + Send + Sync + 'static,
    ) {
        *self.details_fn.lock().unwrap() = Box::new(f);
    }

    pub fn set_predictions(
        &self,
        f: impl Fn(&str, &str) -> TransitResult<Vec<Prediction>> + Send + Sync + 'static,
    ) {
        *self.predictions_fn.lock().unwrap() = Box::new(f);
    }

    /// Get the number of times a method was called.
    pub fn get_call_count(&self, method: &str) -> usize {
        let counts = self.call_counts.lock().unwrap();
        *counts.get(method).unwrap_or(&0)
    }

    fn track_call(&self, method: &str) {
        let mut counts = self.call_counts.lock().unwrap();
        *counts.entry(method.to_string()).or_insert(0) += 1;
    }
}

impl Default for MockTransitClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TransitClient for MockTransitClient {
    async fn fetch_all_routes(&self, _ct: &CancellationToken) -> TransitResult<Vec<RouteSummary>> {
        self.track_call("fetch_all_routes");
        (self.routes_fn.lock().unwrap())()
    }

    async fn fetch_route_details(
        &self,
        _ct: &CancellationToken,
        route_id: &str,
    ) -> TransitResult<RouteDetail> {
        self.track_call("fetch_route_details");
        (self.details_fn.lock().unwrap())(route_id)
    }

    async fn fetch_predictions(
        &self,
        _ct: &CancellationToken,
        route_id: &str,
        stop_id: &str,
    ) -> TransitResult<Vec<Prediction>> {
        self.track_call("fetch_predictions");
        (self.predictions_fn.lock().unwrap())(route_id, stop_id)
    }

    fn clear_cache(&self) {
        self.track_call("clear_cache");
    }

    fn enable_cache(&self) {
        self.track_call("enable_cache");
        self.cache_enabled.store(true, Ordering::SeqCst);
    }

    fn disable_cache(&self) {
        self.track_call("disable_cache");
        self.cache_enabled.store(false, Ordering::SeqCst);
    }

    fn cache_enabled(&self) -> bool {
        self.cache_enabled.load(Ordering::SeqCst)
    }
}

pub fn sample_routes() -> Vec<RouteSummary> {
    vec![
        RouteSummary {
            id: "N".to_string(),
            rev: 1069,
            title: "N Judah".to_string(),
            description: "Weekdays 6am-12 midnight Weekends 8am-12 midnight".to_string(),
            color: "005b95".to_string(),
            text_color: "ffffff".to_string(),
            hidden: false,
            timestamp: "2025-04-26T10:31:08Z".to_string(),
        },
        RouteSummary {
            id: "J".to_string(),
            rev: 1069,
            title: "J Church".to_string(),
            description: "5am-12 midnight daily".to_string(),
            color: "a96614".to_string(),
            text_color: "ffffff".to_string(),
            hidden: false,
            timestamp: "2025-04-26T10:31:08Z".to_string(),
        },
    ]
}
