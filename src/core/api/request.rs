//! Backend request description.
//!
//! An [`ApiRequest`] is a pure value built from validated tool arguments.
//! The constructors tie the body to the method: `GET` requests carry query
//! pairs and never a body, every other method carries a JSON body.

use std::fmt;

use serde_json::Value;

use super::{ApiError, ApiResult};

/// HTTP methods used against the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ApiMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl ApiMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }
}

impl fmt::Display for ApiMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<ApiMethod> for reqwest::Method {
    fn from(method: ApiMethod) -> Self {
        match method {
            ApiMethod::Get => reqwest::Method::GET,
            ApiMethod::Post => reqwest::Method::POST,
            ApiMethod::Put => reqwest::Method::PUT,
            ApiMethod::Delete => reqwest::Method::DELETE,
        }
    }
}

/// A single backend call: method, relative path, ordered query, optional body.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    method: ApiMethod,
    path: String,
    query: Vec<(String, String)>,
    body: Option<Value>,
}

impl ApiRequest {
    /// Retrieval request. Query pairs are kept in the given order.
    pub fn get(path: impl Into<String>, query: Vec<(String, String)>) -> Self {
        Self {
            method: ApiMethod::Get,
            path: path.into(),
            query,
            body: None,
        }
    }

    /// Creation or action request.
    pub fn post(path: impl Into<String>, body: Value) -> Self {
        Self::with_body(ApiMethod::Post, path, body)
    }

    /// Mutation of existing state.
    pub fn put(path: impl Into<String>, body: Value) -> Self {
        Self::with_body(ApiMethod::Put, path, body)
    }

    /// Destructive request.
    pub fn delete(path: impl Into<String>, body: Value) -> Self {
        Self::with_body(ApiMethod::Delete, path, body)
    }

    fn with_body(method: ApiMethod, path: impl Into<String>, body: Value) -> Self {
        Self {
            method,
            path: path.into(),
            query: Vec::new(),
            body: Some(body),
        }
    }

    pub fn method(&self) -> ApiMethod {
        self.method
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn query(&self) -> &[(String, String)] {
        &self.query
    }

    pub fn body(&self) -> Option<&Value> {
        self.body.as_ref()
    }

    /// URL-encoded query string, or `None` when there are no pairs.
    pub fn query_string(&self) -> ApiResult<Option<String>> {
        if self.query.is_empty() {
            return Ok(None);
        }
        serde_urlencoded::to_string(&self.query)
            .map(Some)
            .map_err(|e| ApiError::InvalidRequest(e.to_string()))
    }

    /// Canonical `METHOD path[?query]` line.
    ///
    /// Identical arguments always render the same line; logs and tests
    /// compare requests through it.
    pub fn request_line(&self) -> ApiResult<String> {
        let path = self.path.trim_start_matches('/');
        Ok(match self.query_string()? {
            Some(query) => format!("{} {}?{}", self.method, path, query),
            None => format!("{} {}", self.method, path),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn pairs(items: &[(&str, &str)]) -> Vec<(String, String)> {
        items
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_get_has_no_body() {
        let request = ApiRequest::get("api/v1/org/list", Vec::new());
        assert_eq!(request.method(), ApiMethod::Get);
        assert!(request.body().is_none());
        assert_eq!(request.request_line().unwrap(), "GET api/v1/org/list");
    }

    #[test]
    fn test_mutations_carry_body() {
        let body = json!({ "projectId": 3 });
        for request in [
            ApiRequest::post("api/v1/label/create", body.clone()),
            ApiRequest::put("api/v1/project/update", body.clone()),
            ApiRequest::delete("api/v1/project/delete", body.clone()),
        ] {
            assert_ne!(request.method(), ApiMethod::Get);
            assert_eq!(request.body(), Some(&body));
            assert!(request.query().is_empty());
        }
    }

    #[test]
    fn test_query_keeps_declared_order() {
        let request = ApiRequest::get(
            "api/v1/run/list",
            pairs(&[("projectId", "3"), ("status", "open")]),
        );
        assert_eq!(
            request.request_line().unwrap(),
            "GET api/v1/run/list?projectId=3&status=open"
        );

        let reversed = ApiRequest::get(
            "api/v1/run/list",
            pairs(&[("status", "open"), ("projectId", "3")]),
        );
        assert_eq!(
            reversed.request_line().unwrap(),
            "GET api/v1/run/list?status=open&projectId=3"
        );
    }

    #[test]
    fn test_query_values_are_encoded() {
        let request = ApiRequest::get("/api/v1/test/list", pairs(&[("q", "login & signup")]));
        assert_eq!(
            request.request_line().unwrap(),
            "GET api/v1/test/list?q=login+%26+signup"
        );
    }

    #[test]
    fn test_request_line_is_deterministic() {
        let build = || ApiRequest::get("api/v1/org/detail", pairs(&[("orgId", "7")]));
        assert_eq!(build(), build());
        assert_eq!(
            build().request_line().unwrap(),
            build().request_line().unwrap()
        );
    }

    #[test]
    fn test_method_conversion() {
        assert_eq!(reqwest::Method::from(ApiMethod::Put), reqwest::Method::PUT);
        assert_eq!(ApiMethod::Delete.to_string(), "DELETE");
    }
}
