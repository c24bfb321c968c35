//! Transport layer for the MCP server.
//!
//! - **STDIO**: standard input/output, the MCP default (feature `stdio`)
//! - **TCP**: line-delimited JSON-RPC over sockets (feature `tcp`)
//! - **HTTP**: JSON-RPC over POST with a health endpoint (feature `http`)
//!
//! Every transport serves the same [`McpServer`](crate::core::McpServer);
//! none of them holds per-client state.

mod config;
mod error;
mod service;

#[cfg(feature = "http")]
pub mod http;

#[cfg(feature = "tcp")]
pub mod tcp;

#[cfg(feature = "stdio")]
pub mod stdio;

pub use config::TransportConfig;
pub use error::{TransportError, TransportResult};
pub use service::TransportService;

#[cfg(feature = "tcp")]
pub use config::TcpConfig;

#[cfg(feature = "http")]
pub use config::HttpConfig;
