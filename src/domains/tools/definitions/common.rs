//! Common utilities shared across tool definitions.
//!
//! Every handler has the same shape: build a request from its validated
//! arguments, dispatch it, and normalize the payload. The two helpers here
//! cover that shape for single records (and mutations) and for listings.

use rmcp::model::CallToolResult;
use serde::Serialize;
use serde_json::Value;

use crate::core::api::{ApiMethod, ApiReply, ApiRequest};
use crate::domains::tools::ToolError;
use crate::domains::tools::definition::ToolInvocation;
use crate::domains::tools::response::{
    acknowledged, empty_listing, format_not_found_error, handle_api_response, is_empty_data,
};

/// The entity an empty payload reports as missing, and where to look it up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Anchor {
    pub kind: &'static str,
    pub id: u64,
    pub lookup_tool: &'static str,
}

impl Anchor {
    pub const fn new(kind: &'static str, id: u64, lookup_tool: &'static str) -> Self {
        Self {
            kind,
            id,
            lookup_tool,
        }
    }

    fn not_found(&self) -> CallToolResult {
        format_not_found_error(self.kind, self.id, self.lookup_tool)
    }
}

/// Dispatch a single-record or mutation request.
///
/// Any empty payload means the anchor does not exist. A mutation answered
/// without a body succeeded.
pub async fn fetch_record(
    call: &ToolInvocation,
    request: ApiRequest,
    anchor: Anchor,
    action: &str,
) -> Result<CallToolResult, ToolError> {
    let mutating = request.method() != ApiMethod::Get;
    match call.api.dispatch(request).await? {
        ApiReply::Data(data) if !is_empty_data(Some(&data)) => {
            Ok(handle_api_response(&data, action, &call.hints))
        }
        ApiReply::NoContent if mutating => Ok(acknowledged(action, &call.hints)),
        _ => Ok(anchor.not_found()),
    }
}

/// Dispatch a listing request.
///
/// An empty array is a legitimate "no matching records" answer. Any other
/// empty payload means the anchor does not exist; listings without an
/// anchor report zero records instead.
pub async fn fetch_listing(
    call: &ToolInvocation,
    request: ApiRequest,
    anchor: Option<Anchor>,
    action: &str,
    noun: &str,
) -> Result<CallToolResult, ToolError> {
    let data = call.api.dispatch(request).await?.into_data();
    match (data, anchor) {
        (Some(Value::Array(items)), _) if items.is_empty() => {
            Ok(empty_listing(action, noun, &call.hints))
        }
        (Some(data), _) if !is_empty_data(Some(&data)) => {
            Ok(handle_api_response(&data, action, &call.hints))
        }
        (_, Some(anchor)) => Ok(anchor.not_found()),
        (_, None) => Ok(empty_listing(action, noun, &call.hints)),
    }
}

/// JSON body of a mutating request, built from a tool's typed parameters.
pub fn json_body<T: Serialize>(params: &T) -> Result<Value, ToolError> {
    serde_json::to_value(params)
        .map_err(|e| ToolError::internal(format!("Failed to encode request body: {e}")))
}

/// "1 label" / "3 labels".
pub fn plural(count: usize, singular: &str, plural: &str) -> String {
    if count == 1 {
        format!("{count} {singular}")
    } else {
        format!("{count} {plural}")
    }
}
