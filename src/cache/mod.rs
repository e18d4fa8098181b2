//! Caching utilities for the MUNI MCP Server.
//!
//! [`TimedCache`] is the generic TTL store with an on/off switch.
//! [`ResponseCache`] layers typed API responses on top of it.

pub mod response_cache;
pub mod timed_cache;

pub use response_cache::{CachedResponse, Cacheable, ResponseCache};
pub use timed_cache::TimedCache;
