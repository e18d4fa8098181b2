//! Typed cache for MUNI API responses.
//!
//! One [`TimedCache`] holds every cached response shape as a
//! [`CachedResponse`] variant. Reading a key asks for a concrete type; a stored
//! variant of a different shape is reported as a miss so the caller simply
//! fetches again.

use std::time::Duration;

use crate::cache::TimedCache;
use crate::models::{RouteDetail, RouteSummary};

/// Cache key for the full route list.
pub const ALL_ROUTES_KEY: &str = "all_routes";

/// Cache key for one route's details.
pub fn route_details_key(route_id: &str) -> String {
    format!("route_details:{}", route_id)
}

/// Every response shape the client caches.
#[derive(Debug, Clone, PartialEq)]
pub enum CachedResponse {
    Routes(Vec<RouteSummary>),
    RouteDetail(RouteDetail),
}

/// A response type that can be stored in a [`ResponseCache`].
pub trait Cacheable: Sized {
    /// Wrap the value for storage.
    fn into_cached(self) -> CachedResponse;

    /// Take the value back out, or `None` if the variant doesn't match.
    fn from_cached(cached: CachedResponse) -> Option<Self>;
}

impl Cacheable for Vec<RouteSummary> {
    fn into_cached(self) -> CachedResponse {
        CachedResponse::Routes(self)
    }

    fn from_cached(cached: CachedResponse) -> Option<Self> {
        match cached {
            CachedResponse::Routes(routes) => Some(routes),
            _ => None,
        }
    }
}

impl Cacheable for RouteDetail {
    fn into_cached(self) -> CachedResponse {
        CachedResponse::RouteDetail(self)
    }

    fn from_cached(cached: CachedResponse) -> Option<Self> {
        match cached {
            CachedResponse::RouteDetail(detail) => Some(detail),
            _ => None,
        }
    }
}

/// Cache of MUNI API responses keyed by request.
#[derive(Debug, Clone)]
pub struct ResponseCache {
    inner: TimedCache<String, CachedResponse>,
}

impl ResponseCache {
    /// Create an enabled response cache with the given TTL.
    pub fn new(ttl: Duration) -> Self {
        Self {
            inner: TimedCache::new(ttl),
        }
    }

    /// Get a cached value of type `T`.
    ///
    /// Returns a detached copy. A missing, expired, hidden or differently
    /// shaped entry is a miss.
    pub fn get<T: Cacheable>(&self, key: &str) -> Option<T> {
        let cached = self.inner.get(&key.to_string())?;
        let value = T::from_cached(cached);
        if value.is_none() {
            tracing::debug!(key = %key, "Cached entry has unexpected shape, treating as miss");
        }
        value
    }

    /// Store a value under `key`. No-op while disabled.
    pub fn set<T: Cacheable>(&self, key: &str, value: T) {
        self.inner.insert(key.to_string(), value.into_cached());
    }

    pub fn clear(&self) {
        self.inner.clear();
    }

    pub fn enable(&self) {
        self.inner.enable();
    }

    pub fn disable(&self) {
        self.inner.disable();
    }

    pub fn is_enabled(&self) -> bool {
        self.inner.is_enabled()
    }

    /// Number of stored entries, including expired and hidden ones.
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn ttl(&self) -> Duration {
        self.inner.ttl()
    }
}
