//! Request dispatch against the test-management backend.
//!
//! Tools never talk HTTP directly. They build an [`ApiRequest`] from their
//! validated arguments and hand it to a [`Dispatcher`], which is injected
//! into every invocation. [`ApiClient`] is the production implementation.

mod client;
mod error;
mod request;

#[cfg(test)]
pub(crate) mod testing;

use async_trait::async_trait;
use serde_json::Value;

pub use client::ApiClient;
pub use error::{ApiError, ApiResult};
pub use request::{ApiMethod, ApiRequest};

/// What a successful backend call answered.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiReply {
    /// A JSON payload, possibly empty (`{}`, `[]`, `null`).
    Data(Value),

    /// 2xx without a body (204 or a blank payload).
    NoContent,

    /// The backend answered 404.
    NotFound,
}

impl ApiReply {
    /// The payload, if the backend sent one.
    pub fn into_data(self) -> Option<Value> {
        match self {
            Self::Data(value) => Some(value),
            Self::NoContent | Self::NotFound => None,
        }
    }
}

/// Issues exactly one backend call per `dispatch`.
///
/// Bodiless and 404 answers are normal outcomes, not failures.
/// Implementations never retry.
#[async_trait]
pub trait Dispatcher: Send + Sync {
    async fn dispatch(&self, request: ApiRequest) -> ApiResult<ApiReply>;
}
