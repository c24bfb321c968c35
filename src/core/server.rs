//! MCP Server implementation and lifecycle management.
//!
//! The server owns the immutable [`ToolRegistry`] and the backend
//! [`Dispatcher`] shared by every call. STDIO and TCP go through the rmcp
//! `ToolRouter` built from the registry; HTTP calls the registry directly.
//! Adding a tool only touches `domains/tools/definitions/`.

use rmcp::{ServerHandler, handler::server::tool::ToolRouter, model::*, tool_handler};
use std::sync::Arc;
use tracing::info;

use super::api::Dispatcher;
use super::config::Config;
use crate::domains::tools::{ToolRegistry, build_tool_router};

/// The main MCP server handler.
#[derive(Clone)]
pub struct McpServer {
    /// Server configuration.
    config: Arc<Config>,

    /// Every tool this server exposes.
    registry: Arc<ToolRegistry>,

    /// Backend dispatcher handed to each invocation.
    api: Arc<dyn Dispatcher>,

    /// Tool router for handling tool calls.
    tool_router: ToolRouter<Self>,
}

impl McpServer {
    /// Create a new MCP server with the given configuration and dispatcher.
    pub fn new(config: Config, api: Arc<dyn Dispatcher>) -> super::error::Result<Self> {
        let registry = Arc::new(ToolRegistry::with_all_tools()?);
        info!("Registered {} tools", registry.len());

        Ok(Self {
            tool_router: build_tool_router::<Self>(registry.clone(), api.clone()),
            config: Arc::new(config),
            registry,
            api,
        })
    }

    /// Get the server name.
    pub fn name(&self) -> &str {
        &self.config.server.name
    }

    /// Get the server version.
    pub fn version(&self) -> &str {
        &self.config.server.version
    }

    pub fn registry(&self) -> &Arc<ToolRegistry> {
        &self.registry
    }

    // ========================================================================
    // HTTP Transport Support Methods
    // ========================================================================

    /// List all available tools (for HTTP transport).
    pub fn list_tools(&self) -> Vec<serde_json::Value> {
        self.registry
            .tools()
            .into_iter()
            .map(|t| {
                serde_json::json!({
                    "name": t.name,
                    "description": t.description,
                    "inputSchema": t.input_schema
                })
            })
            .collect()
    }

    /// Call a tool by name (for HTTP transport).
    ///
    /// Only an unknown tool name is an `Err`; tool failures come back as
    /// envelopes with `isError: true`.
    #[cfg(feature = "http")]
    pub async fn call_tool(
        &self,
        name: &str,
        arguments: serde_json::Value,
    ) -> std::result::Result<CallToolResult, crate::domains::tools::ToolError> {
        self.registry
            .call_value(name, &arguments, self.api.clone())
            .await
    }
}

/// ServerHandler implementation with tool_handler macro for automatic tool routing.
#[tool_handler]
impl ServerHandler for McpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            server_info: Implementation {
                name: self.config.server.name.clone(),
                version: self.config.server.version.clone(),
                ..Implementation::from_build_env()
            },
            instructions: Some(
                "Test management tools. Start with get-orgs-list, then drill down into \
                 projects, runs and tests by ID."
                    .to_string(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}
