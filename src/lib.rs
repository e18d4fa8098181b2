//! MUNI MCP Server - a Model Context Protocol server for the SF MUNI real-time API.
//!
//! Exposes route listings, route details and live arrival predictions as MCP
//! tools, with a TTL response cache that can be toggled and cleared at runtime.
//!
//! # Architecture
//!
//! - **cache**: TTL cache with an on/off switch, and the typed response cache
//! - **client**: HTTP client for the MUNI API plus its async wrapper
//! - **config**: Configuration from environment variables
//! - **error**: Custom error types
//! - **metrics**: Request and cache counters
//! - **models**: Route and prediction data structures
//! - **tools**: The six MCP tools
//! - **server**: MCP protocol server over stdio

pub mod cache;
pub mod client;
pub mod config;
pub mod error;
pub mod metrics;
pub mod models;
pub mod server;
pub mod tools;

pub use cache::{ResponseCache, TimedCache};
pub use client::{AsyncMuniClient, ClientOptions, MuniClient, TransitClient};
pub use config::Config;
pub use error::{ConfigError, TransitError, TransitResult};
pub use metrics::{HttpTimer, Metrics, MetricsSummary};
pub use models::{Prediction, PredictionResponse, RouteDetail, RouteSummary};
pub use server::MuniMcpServer;
pub use tools::{ToolOutput, TransitTools};
