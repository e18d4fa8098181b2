//! MCP server implementation for SF MUNI.
//!
//! This module provides the MCP protocol server that exposes the transit
//! tools to AI assistants through the Model Context Protocol.

pub mod handlers;

pub use handlers::MuniMcpServer;

use anyhow::Result;
use rmcp::transport::io::stdio;
use rmcp::ServiceExt;

/// Run the MUNI MCP server with stdio transport.
///
/// Communicates via stdin/stdout using the MCP protocol and returns once the
/// client disconnects.
pub async fn run_server(server: MuniMcpServer) -> Result<()> {
    let service = server.serve(stdio()).await?;

    service.waiting().await?;

    Ok(())
}
