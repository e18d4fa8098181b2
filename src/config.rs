//! Configuration management for the MUNI MCP Server.
//!
//! This module loads configuration from environment variables. A `.env` file is
//! read if present, without printing anything to stdout (which MCP uses for
//! communication).

use crate::client::ClientOptions;
use crate::error::{ConfigError, ConfigResult};
use once_cell::sync::Lazy;
use regex::Regex;
use std::env;
use std::time::Duration;

/// Default upstream API base URL.
pub const DEFAULT_API_BASE_URL: &str = "https://api.prd-1.iq.live.umoiq.com";

/// Default cache TTL when none (or an unparseable one) is configured.
pub const DEFAULT_CACHE_TTL: Duration = Duration::from_secs(5 * 60);

static DURATION_SEGMENT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(\d+(?:\.\d*)?|\.\d+)(ns|us|µs|μs|ms|s|m|h)")
        .expect("Failed to compile duration regex")
});

/// Configuration for the MUNI MCP Server.
#[derive(Debug, Clone)]
pub struct Config {
    /// MUNI API base URL
    pub api_base_url: String,

    /// Optional API key, passed through to the client
    pub api_key: Option<String>,

    /// Cache TTL (default: 5 minutes)
    pub cache_ttl: Duration,

    /// Start with the response cache turned off (default: false)
    pub cache_disabled: bool,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// All variables are optional:
    /// - `MUNI_API_BASE_URL`: Base URL for the MUNI API
    /// - `MUNI_API_KEY`: API key
    /// - `MUNI_CACHE_TTL`: Cache TTL as a duration string such as `30s`,
    ///   `+5m` or `1h30m`. Falls back to 5 minutes if it doesn't parse or is
    ///   negative.
    /// - `MUNI_CACHE_DISABLED`: `true` to start with caching off
    pub fn from_env() -> ConfigResult<Self> {
        let _ = dotenvy::dotenv();

        let api_base_url = env::var("MUNI_API_BASE_URL")
            .ok()
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string());

        if !api_base_url.starts_with("http://") && !api_base_url.starts_with("https://") {
            return Err(ConfigError::InvalidValue {
                var: "MUNI_API_BASE_URL".to_string(),
                reason: "Must start with http:// or https://".to_string(),
            });
        }

        let api_key = env::var("MUNI_API_KEY")
            .ok()
            .filter(|key| !key.trim().is_empty());

        let cache_ttl = Self::parse_env_ttl("MUNI_CACHE_TTL");
        let cache_disabled = Self::parse_env_bool("MUNI_CACHE_DISABLED", false)?;

        Ok(Config {
            api_base_url,
            api_key,
            cache_ttl,
            cache_disabled,
        })
    }

    /// Client construction options derived from this configuration.
    pub fn client_options(&self) -> ClientOptions {
        ClientOptions {
            cache_ttl: self.cache_ttl,
            cache_disabled: self.cache_disabled,
        }
    }

    /// Parse a TTL variable, silently falling back to the default.
    fn parse_env_ttl(var_name: &str) -> Duration {
        match env::var(var_name) {
            Ok(val) => parse_duration(&val).unwrap_or_else(|| {
                tracing::debug!("Ignoring unparseable {}={:?}", var_name, val);
                DEFAULT_CACHE_TTL
            }),
            Err(_) => DEFAULT_CACHE_TTL,
        }
    }

    /// Parse an environment variable as bool with a default value.
    fn parse_env_bool(var_name: &str, default: bool) -> ConfigResult<bool> {
        match env::var(var_name) {
            Ok(val) => match val.trim().to_ascii_lowercase().as_str() {
                "1" | "true" | "yes" | "on" => Ok(true),
                "0" | "false" | "no" | "off" | "" => Ok(false),
                _ => Err(ConfigError::InvalidValue {
                    var: var_name.to_string(),
                    reason: format!("Must be true or false, got: {}", val),
                }),
            },
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            api_key: None,
            cache_ttl: DEFAULT_CACHE_TTL,
            cache_disabled: false,
        }
    }
}

/// Parse a duration string such as `300ms`, `1.5h` or `2h45m`.
///
/// Accepts one or more `<number><unit>` segments with units `ns`, `us`
/// (`µs`), `ms`, `s`, `m` and `h`, plus a bare `0`, optionally preceded by
/// `+`. Negative durations return `None` since a TTL can't be negative;
/// `-0` is still zero.
pub fn parse_duration(input: &str) -> Option<Duration> {
    let input = input.trim();
    let (negative, input) = match input.as_bytes().first() {
        Some(b'-') => (true, &input[1..]),
        Some(b'+') => (false, &input[1..]),
        _ => (false, input),
    };
    if input == "0" {
        return Some(Duration::ZERO);
    }
    if input.is_empty() || negative {
        return None;
    }

    let mut rest = input;
    let mut total_nanos: f64 = 0.0;

    while !rest.is_empty() {
        let caps = DURATION_SEGMENT.captures(rest)?;
        let number: f64 = caps[1].parse().ok()?;
        let unit_nanos = match &caps[2] {
            "ns" => 1.0,
            "us" | "µs" | "μs" => 1e3,
            "ms" => 1e6,
            "s" => 1e9,
            "m" => 60e9,
            "h" => 3600e9,
            _ => return None,
        };
        total_nanos += number * unit_nanos;
        rest = &rest[caps[0].len()..];
    }

    if !total_nanos.is_finite() || total_nanos > u64::MAX as f64 {
        return None;
    }
    Some(Duration::from_nanos(total_nanos.round() as u64))
}
