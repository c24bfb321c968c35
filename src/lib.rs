//! TestOps MCP Server Library
//!
//! Exposes a test-management REST API (organizations, projects, labels,
//! runs and test cases) to AI agents as validated MCP tools.
//!
//! # Architecture
//!
//! - **core**: configuration, error handling, the backend API client, the
//!   server handler and its transports
//! - **domains::tools**: parameter contracts, tool definitions, the registry
//!   and response normalization
//!
//! # Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use testops_mcp_server::core::{ApiClient, Config, McpServer, TransportService};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env();
//!     config.validate()?;
//!     let api = Arc::new(ApiClient::from_config(&config.api)?);
//!     let server = McpServer::new(config.clone(), api)?;
//!     TransportService::new(config.transport).run(server).await?;
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use core::{Config, Error, McpServer, Result};
