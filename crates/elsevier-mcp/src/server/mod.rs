//! MCP server implementation.
//!
//! Provides both stdio (for desktop MCP clients) and HTTP transports over a
//! single JSON-RPC dispatcher.

pub mod protocol;
pub mod stdio;
pub mod transport;

use std::net::SocketAddr;
use std::sync::Arc;

use crate::client::ElsevierClient;
use crate::tools::{self, McpTool, ToolContext};

pub use protocol::McpHandler;

/// MCP server for the Elsevier APIs.
pub struct McpServer {
    /// Tools and their execution context.
    handler: Arc<McpHandler>,

    /// Bearer token guarding the HTTP transport.
    auth_token: Option<String>,
}

impl McpServer {
    /// Create a new MCP server. `enable_all_tools` adds the tools that need
    /// institutional access.
    #[must_use]
    pub fn new(client: ElsevierClient, enable_all_tools: bool) -> Self {
        let ctx = ToolContext::new(Arc::new(client));
        let tools = tools::register_tools(enable_all_tools);

        Self { handler: Arc::new(McpHandler::new(tools, ctx)), auth_token: None }
    }

    /// Require `Authorization: Bearer <token>` on the HTTP transport.
    #[must_use]
    pub fn with_auth_token(mut self, token: Option<String>) -> Self {
        self.auth_token = token;
        self
    }

    /// Run the server in stdio mode.
    ///
    /// # Errors
    ///
    /// Returns error on I/O failure.
    pub async fn run_stdio(self) -> anyhow::Result<()> {
        tracing::info!("Starting MCP server in stdio mode");
        tracing::info!("Registered {} tools", self.handler.tools().len());

        stdio::run_stdio(&self.handler).await
    }

    /// Run the server in HTTP mode.
    ///
    /// # Errors
    ///
    /// Returns error on server failure.
    pub async fn run_http(self, port: u16) -> anyhow::Result<()> {
        tracing::info!("Starting MCP server in HTTP mode on port {}", port);
        tracing::info!("Registered {} tools", self.handler.tools().len());

        if self.auth_token.is_none() {
            tracing::warn!("HTTP transport has no bearer token configured, /mcp is open");
        }

        let router = transport::create_router(self.handler, self.auth_token);
        let addr = SocketAddr::from(([0, 0, 0, 0], port));

        tracing::info!("HTTP server listening on http://{}", addr);

        let listener = tokio::net::TcpListener::bind(addr).await?;
        axum::serve(listener, router).with_graceful_shutdown(shutdown_signal()).await?;

        tracing::info!("HTTP server shut down");
        Ok(())
    }

    /// Get tool by name.
    #[must_use]
    pub fn get_tool(&self, name: &str) -> Option<&dyn McpTool> {
        self.handler.get_tool(name)
    }

    /// List all available tools.
    #[must_use]
    pub fn list_tools(&self) -> Vec<(&str, &str)> {
        self.handler.tools().iter().map(|t| (t.name(), t.description())).collect()
    }

    /// Shared dispatcher, for embedding in another transport.
    #[must_use]
    pub fn handler(&self) -> Arc<McpHandler> {
        Arc::clone(&self.handler)
    }
}

impl std::fmt::Debug for McpServer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("McpServer")
            .field("tools", &self.handler.tools().len())
            .field("http_auth", &self.auth_token.is_some())
            .finish()
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to install CTRL+C handler");
        std::future::pending::<()>().await;
    }
    tracing::info!("Received shutdown signal");
}
