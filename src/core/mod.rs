//! Core module containing shared infrastructure components.
//!
//! Configuration, error handling, the backend API client, the server
//! handler and the transports it runs on.

pub mod api;
pub mod config;
pub mod error;
pub mod server;
pub mod transport;

pub use api::{ApiClient, Dispatcher};
pub use config::Config;
pub use error::{Error, Result};
pub use server::McpServer;
pub use transport::{TransportConfig, TransportService};
