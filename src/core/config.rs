//! Configuration management for the MCP server.
//!
//! This module provides a centralized configuration structure that can be
//! populated from environment variables (optionally via a `.env` file) or
//! defaults.

use super::error::{Error, Result};
use super::transport::TransportConfig;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// Main configuration structure for the MCP server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,

    /// Transport configuration.
    pub transport: TransportConfig,

    /// Backend API endpoint and credential.
    pub api: ApiConfig,
}

/// Server identification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The name of the server as reported to clients.
    pub name: String,

    /// The version of the server.
    pub version: String,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,

    /// Whether to include timestamps in log output.
    pub with_timestamps: bool,
}

/// Backend API configuration.
///
/// Read once at startup; the dispatcher never changes identity afterwards.
#[derive(Clone, Default, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the test-management backend (e.g. `https://qa.example.com`).
    pub base_url: Option<String>,

    /// Bearer token attached to every request.
    pub token: Option<String>,
}

/// Custom Debug implementation to redact secrets from logs.
impl std::fmt::Debug for ApiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiConfig")
            .field("base_url", &self.base_url)
            .field("token", &self.token.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                name: "testops-mcp-server".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            logging: LoggingConfig {
                level: "info".to_string(),
                with_timestamps: true,
            },
            transport: TransportConfig::default(),
            api: ApiConfig::default(),
        }
    }
}

impl Config {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from environment variables.
    ///
    /// Environment variables are expected to be prefixed with `MCP_`.
    /// For example: `MCP_SERVER_NAME`, `MCP_LOG_LEVEL`, `MCP_API_BASE_URL`.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let mut config = Self::default();

        if let Ok(name) = std::env::var("MCP_SERVER_NAME") {
            config.server.name = name;
        }

        if let Ok(level) = std::env::var("MCP_LOG_LEVEL") {
            config.logging.level = level;
        }

        if let Ok(flag) = std::env::var("MCP_LOG_TIMESTAMPS") {
            config.logging.with_timestamps = !matches!(flag.to_lowercase().as_str(), "false" | "0");
        }

        // Load transport configuration from environment
        config.transport = TransportConfig::from_env();

        if let Ok(base_url) = std::env::var("MCP_API_BASE_URL") {
            info!("Backend API base URL: {}", base_url);
            config.api.base_url = Some(base_url);
        } else {
            warn!("MCP_API_BASE_URL not set - tools cannot reach the backend");
        }

        if let Ok(token) = std::env::var("MCP_API_TOKEN") {
            config.api.token = Some(token);
            info!("API token loaded from environment");
        } else {
            warn!("MCP_API_TOKEN not set - backend calls will be rejected");
        }

        config
    }

    /// Check that everything needed to serve tools is present.
    pub fn validate(&self) -> Result<()> {
        match self.api.base_url.as_deref().map(str::trim) {
            None | Some("") => return Err(Error::config("MCP_API_BASE_URL is required")),
            Some(url) if !(url.starts_with("http://") || url.starts_with("https://")) => {
                return Err(Error::config(format!(
                    "MCP_API_BASE_URL must be an http(s) URL, got '{url}'"
                )));
            }
            Some(_) => {}
        }

        if self.api.token.as_deref().is_none_or(|t| t.trim().is_empty()) {
            return Err(Error::config("MCP_API_TOKEN is required"));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Mutex to ensure env var tests run serially
    static ENV_TEST_LOCK: Mutex<()> = Mutex::new(());

    fn configured() -> Config {
        let mut config = Config::default();
        config.api.base_url = Some("https://qa.example.com".to_string());
        config.api.token = Some("token-123".to_string());
        config
    }

    #[test]
    fn test_api_config_from_env() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::set_var("MCP_API_BASE_URL", "https://qa.example.com");
            std::env::set_var("MCP_API_TOKEN", "test_token_12345");
        }
        let config = Config::from_env();
        assert_eq!(config.api.base_url.as_deref(), Some("https://qa.example.com"));
        assert_eq!(config.api.token.as_deref(), Some("test_token_12345"));
        unsafe {
            std::env::remove_var("MCP_API_BASE_URL");
            std::env::remove_var("MCP_API_TOKEN");
        }
    }

    #[test]
    fn test_api_config_absent_from_env() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::remove_var("MCP_API_BASE_URL");
            std::env::remove_var("MCP_API_TOKEN");
        }
        let config = Config::from_env();
        assert!(config.api.token.is_none());
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_token_redacted_in_debug() {
        let api = ApiConfig {
            base_url: Some("https://qa.example.com".to_string()),
            token: Some("super_secret_token".to_string()),
        };
        let debug_str = format!("{:?}", api);
        assert!(debug_str.contains("REDACTED"));
        assert!(debug_str.contains("qa.example.com"));
        assert!(!debug_str.contains("super_secret_token"));
    }

    #[test]
    fn test_validate_accepts_complete_config() {
        assert!(configured().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_missing_or_bad_values() {
        let mut config = configured();
        config.api.token = Some("  ".to_string());
        assert!(matches!(config.validate(), Err(Error::Config(_))));

        let mut config = configured();
        config.api.base_url = Some("qa.example.com".to_string());
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("http(s)"));

        let mut config = configured();
        config.api.base_url = None;
        assert!(config.validate().is_err());
    }
}
