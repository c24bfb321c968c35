//! reqwest-backed dispatcher for the test-management API.

use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url, header};
use serde_json::Value;
use tracing::{debug, info, instrument, warn};

use super::{ApiError, ApiReply, ApiRequest, ApiResult, Dispatcher};
use crate::core::config::ApiConfig;
use crate::core::error::{Error, Result};

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Longest slice of a non-JSON error body echoed back to the caller.
const MAX_ERROR_BODY_CHARS: usize = 500;

/// HTTP client bound to one base URL and one bearer credential.
///
/// Both are fixed at construction; there is no per-call identity.
pub struct ApiClient {
    http: Client,
    base_url: Url,
    token: String,
}

impl ApiClient {
    /// Create a client for `base_url`, authenticating every call with `token`.
    pub fn new(base_url: &str, token: impl Into<String>) -> ApiResult<Self> {
        let base_url = parse_base_url(base_url)?;
        let http = Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| ApiError::transport(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self {
            http,
            base_url,
            token: token.into(),
        })
    }

    /// Create a client from the `api` section of the server configuration.
    pub fn from_config(config: &ApiConfig) -> Result<Self> {
        let base_url = config
            .base_url
            .as_deref()
            .ok_or_else(|| Error::config("MCP_API_BASE_URL is not set"))?;
        let token = config
            .token
            .as_deref()
            .ok_or_else(|| Error::config("MCP_API_TOKEN is not set"))?;

        let client = Self::new(base_url, token).map_err(|e| Error::config(e.to_string()))?;
        info!("API client ready for {}", client.base_url);
        Ok(client)
    }

    /// The normalized base URL (always ends with `/`).
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn url_for(&self, request: &ApiRequest) -> ApiResult<Url> {
        let mut url = self
            .base_url
            .join(request.path().trim_start_matches('/'))
            .map_err(|e| ApiError::InvalidUrl(format!("{}: {e}", request.path())))?;
        url.set_query(request.query_string()?.as_deref());
        Ok(url)
    }
}

#[async_trait]
impl Dispatcher for ApiClient {
    #[instrument(skip_all, fields(method = %request.method(), path = %request.path()))]
    async fn dispatch(&self, request: ApiRequest) -> ApiResult<ApiReply> {
        let url = self.url_for(&request)?;

        let mut builder = self
            .http
            .request(request.method().into(), url)
            .bearer_auth(&self.token)
            .header(header::ACCEPT, "application/json");
        if let Some(body) = request.body() {
            builder = builder.json(body);
        }

        let response = builder.send().await.map_err(|e| {
            warn!("Request failed before a response arrived: {}", e);
            ApiError::from(e)
        })?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            debug!("Backend answered {}", status);
            return Ok(ApiReply::NotFound);
        }
        if status == StatusCode::NO_CONTENT {
            debug!("Backend answered {}", status);
            return Ok(ApiReply::NoContent);
        }

        let bytes = response.bytes().await.map_err(ApiError::from)?;
        debug!("Backend answered {} with {} bytes", status, bytes.len());

        if !status.is_success() {
            let message = error_message(&bytes, status);
            warn!("Backend error {}: {}", status, message);
            return Err(ApiError::status(status.as_u16(), message));
        }

        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(ApiReply::NoContent);
        }

        serde_json::from_slice(&bytes)
            .map(ApiReply::Data)
            .map_err(|e| ApiError::Decode(format!("JSON parse error: {e}")))
    }
}

fn parse_base_url(raw: &str) -> ApiResult<Url> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ApiError::InvalidUrl("base URL is empty".to_string()));
    }
    // Url::join drops the last segment unless the base ends with '/'.
    let normalized = format!("{}/", trimmed.trim_end_matches('/'));
    let url = Url::parse(&normalized).map_err(|e| ApiError::InvalidUrl(format!("{raw}: {e}")))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(ApiError::InvalidUrl(format!(
            "{raw}: unsupported scheme '{}'",
            url.scheme()
        )));
    }
    Ok(url)
}

/// Pull a human-readable message out of an error body.
fn error_message(body: &[u8], status: StatusCode) -> String {
    if let Ok(value) = serde_json::from_slice::<Value>(body) {
        for key in ["message", "error"] {
            if let Some(message) = value.get(key).and_then(Value::as_str) {
                return message.to_string();
            }
        }
    }

    let text = String::from_utf8_lossy(body);
    let text = text.trim();
    if !text.is_empty() {
        return text.chars().take(MAX_ERROR_BODY_CHARS).collect();
    }

    status
        .canonical_reason()
        .unwrap_or("Unknown status")
        .to_string()
}
