//! Time-based cache with TTL (Time To Live) support and an on/off switch.
//!
//! Entries carry an absolute expiration instant. A disabled cache hides its
//! entries without dropping them, so turning it back on restores whatever has
//! not expired in the meantime.

use std::collections::HashMap;
use std::hash::Hash;
use std::sync::{Arc, RwLock};
use std::time::{Duration, Instant};

/// A cache entry with its expiration instant.
#[derive(Debug, Clone)]
struct CacheEntry<V> {
    value: V,
    /// `None` when `now + ttl` overflows `Instant`; such entries never expire
    expires_at: Option<Instant>,
}

impl<V> CacheEntry<V> {
    fn is_live(&self, now: Instant) -> bool {
        self.expires_at.map_or(true, |expires_at| now < expires_at)
    }
}

#[derive(Debug)]
struct CacheState<K, V> {
    entries: HashMap<K, CacheEntry<V>>,
    enabled: bool,
}

/// A thread-safe cache with time-based expiration.
///
/// Every entry gets the same TTL, fixed when the cache is created. Reads take
/// a shared lock and writes an exclusive one; nothing here blocks on I/O.
/// The cache can be cloned cheaply and clones share state.
///
/// A value returned by [`get`](Self::get) is a clone, so callers can never
/// mutate what is stored.
#[derive(Clone)]
pub struct TimedCache<K, V>
where
    K: Eq + Hash + Clone,
    V: Clone,
{
    state: Arc<RwLock<CacheState<K, V>>>,
    ttl: Duration,
}

impl<K, V> TimedCache<K, V>
where
    K: Eq + Hash + Clone,
    V: Clone,
{
    /// Create a new, enabled TimedCache with the given TTL.
    pub fn new(ttl: Duration) -> Self {
        Self {
            state: Arc::new(RwLock::new(CacheState {
                entries: HashMap::new(),
                enabled: true,
            })),
            ttl,
        }
    }

    /// Create a new TimedCache with the TTL given in seconds.
    pub fn with_ttl_secs(ttl_seconds: u64) -> Self {
        Self::new(Duration::from_secs(ttl_seconds))
    }

    /// Insert a value into the cache, replacing any previous entry.
    ///
    /// Does nothing while the cache is disabled.
    pub fn insert(&self, key: K, value: V) {
        self.insert_at(key, value, Instant::now());
    }

    fn insert_at(&self, key: K, value: V, now: Instant) {
        if let Ok(mut state) = self.state.write() {
            if !state.enabled {
                return;
            }
            let entry = CacheEntry {
                value,
                expires_at: now.checked_add(self.ttl),
            };
            state.entries.insert(key, entry);
        }
    }

    /// Get a value from the cache if it exists and hasn't expired.
    ///
    /// Returns `None` if:
    /// - The cache is disabled
    /// - The key doesn't exist
    /// - The entry's expiration has passed
    pub fn get(&self, key: &K) -> Option<V> {
        self.get_at(key, Instant::now())
    }

    fn get_at(&self, key: &K, now: Instant) -> Option<V> {
        let state = self.state.read().ok()?;
        if !state.enabled {
            return None;
        }

        state
            .entries
            .get(key)
            .filter(|entry| entry.is_live(now))
            .map(|entry| entry.value.clone())
    }

    /// Check if a key is currently visible.
    pub fn contains_key(&self, key: &K) -> bool {
        self.get(key).is_some()
    }

    /// Remove a specific key from the cache.
    pub fn remove(&self, key: &K) {
        if let Ok(mut state) = self.state.write() {
            state.entries.remove(key);
        }
    }

    /// Clear all entries, whether or not the cache is enabled.
    pub fn clear(&self) {
        if let Ok(mut state) = self.state.write() {
            state.entries.clear();
        }
    }

    /// Make stored entries visible again and accept new ones.
    pub fn enable(&self) {
        if let Ok(mut state) = self.state.write() {
            state.enabled = true;
        }
    }

    /// Hide stored entries and ignore inserts until re-enabled.
    pub fn disable(&self) {
        if let Ok(mut state) = self.state.write() {
            state.enabled = false;
        }
    }

    /// Whether the cache is currently enabled.
    pub fn is_enabled(&self) -> bool {
        self.state.read().map(|state| state.enabled).unwrap_or(false)
    }

    /// Remove all expired entries from the cache.
    ///
    /// Not required for correctness, expired entries are never returned.
    pub fn cleanup_expired(&self) {
        let now = Instant::now();

        if let Ok(mut state) = self.state.write() {
            state.entries.retain(|_, entry| entry.is_live(now));
        }
    }

    /// Number of stored entries, including expired and hidden ones.
    pub fn len(&self) -> usize {
        self.state
            .read()
            .map(|state| state.entries.len())
            .unwrap_or(0)
    }

    /// Check if the cache holds no entries.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Get the TTL duration for this cache.
    pub fn ttl(&self) -> Duration {
        self.ttl
    }
}

impl<K, V> std::fmt::Debug for TimedCache<K, V>
where
    K: Eq + Hash + Clone + std::fmt::Debug,
    V: Clone + std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TimedCache")
            .field("ttl", &self.ttl)
            .field("enabled", &self.is_enabled())
            .field("entries", &self.len())
            .finish()
    }
}
