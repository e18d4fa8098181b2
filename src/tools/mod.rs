//! MCP tools for the SF MUNI API.
//!
//! Route listing, route details, predictions, a health check and cache
//! control, all backed by a [`TransitClient`](crate::client::TransitClient).

pub mod transit;

pub use transit::{ToolOutput, TransitTools, HEALTHY_MESSAGE};
