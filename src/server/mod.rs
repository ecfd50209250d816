//! MCP server for the contact book.
//!
//! Exposes the contact book operations as MCP tools so any MCP client can act
//! as the presentation layer.

pub mod handlers;

pub use handlers::ContactBookMcpServer;

use anyhow::Result;
use rmcp::transport::io::stdio;
use rmcp::ServiceExt;

/// Run the contact book MCP server with stdio transport.
///
/// This function starts the MCP server and runs it until the client
/// disconnects. It communicates via stdin/stdout using the MCP protocol.
pub async fn run_server(server: ContactBookMcpServer) -> Result<()> {
    let service = server.serve(stdio()).await?;

    service.waiting().await?;

    Ok(())
}
