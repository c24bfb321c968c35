//! Response normalization.
//!
//! Every tool answers with an rmcp [`CallToolResult`]. This module owns the
//! shapes those results take: the success envelope, the not-found envelope
//! produced from empty payloads, and the error envelope used by the shared
//! failure boundary. Error text always follows the same layout:
//!
//! ```text
//! ❌ <one-line cause>
//!
//! 💡 Tip: <remediation>
//! ```

use std::fmt::Display;

use rmcp::model::{CallToolResult, Content};
use serde_json::{Value, json};
use tracing::warn;

use super::contract::UsageHint;
use super::error::{ErrorKind, ToolError};

const FAILURE_GLYPH: &str = "❌";
const SUCCESS_GLYPH: &str = "✅";
const TIP_PREFIX: &str = "💡 Tip:";

/// Fallback cause for failures nobody anticipated.
pub const UNKNOWN_ERROR: &str = "Unknown error";

/// Whether a backend payload means "nothing there".
///
/// Several endpoints answer a missing record with `{}` or `[]` instead of a
/// distinct status, so absent, `null`, empty arrays and empty objects are all
/// treated alike. Scalars (including `0`, `false` and `""`) are data.
pub fn is_empty_data(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => true,
        Some(Value::Array(items)) => items.is_empty(),
        Some(Value::Object(map)) => map.is_empty(),
        Some(_) => false,
    }
}

/// Error text in the shared layout.
pub fn error_text(cause: &str, tip: &str) -> String {
    format!("{FAILURE_GLYPH} {cause}\n\n{TIP_PREFIX} {tip}")
}

/// Soft failure for an entity the backend does not know.
pub fn format_not_found_error(
    entity_kind: &str,
    id: impl Display,
    suggested_tool: &str,
) -> CallToolResult {
    let text = error_text(
        &format!("{entity_kind} with ID {id} not found"),
        &format!(
            "Use `{suggested_tool}` to find valid {} IDs.",
            entity_kind.to_lowercase()
        ),
    );
    warn!("{entity_kind} {id} not found");
    CallToolResult::error(vec![Content::text(text)])
}

/// Default success path: action statement, pretty payload, usage hints.
pub fn handle_api_response(data: &Value, action: &str, hints: &[UsageHint]) -> CallToolResult {
    let pretty = serde_json::to_string_pretty(data).unwrap_or_else(|_| data.to_string());
    let text = format!(
        "{SUCCESS_GLYPH} {action}\n\n{pretty}{}",
        render_hints(hints)
    );

    CallToolResult {
        content: vec![Content::text(text)],
        structured_content: Some(json!({ "data": data })),
        is_error: Some(false),
        meta: None,
    }
}

/// Success envelope for a listing that legitimately matched nothing.
pub fn empty_listing(action: &str, noun: &str, hints: &[UsageHint]) -> CallToolResult {
    let text = format!(
        "{SUCCESS_GLYPH} {action}\n\nNo {noun} found.{}",
        render_hints(hints)
    );

    CallToolResult {
        content: vec![Content::text(text)],
        structured_content: Some(json!({ "data": [] })),
        is_error: Some(false),
        meta: None,
    }
}

/// Success envelope for a mutation the backend confirmed without a body.
pub fn acknowledged(action: &str, hints: &[UsageHint]) -> CallToolResult {
    let text = format!("{SUCCESS_GLYPH} {action}{}", render_hints(hints));

    CallToolResult {
        content: vec![Content::text(text)],
        structured_content: Some(json!({ "data": null })),
        is_error: Some(false),
        meta: None,
    }
}

/// Error envelope for any failure caught at a tool's boundary.
///
/// Backend messages are embedded verbatim; internal failures collapse to
/// [`UNKNOWN_ERROR`].
pub fn format_tool_error(error: &ToolError, action: &str, remediation: &str) -> CallToolResult {
    let cause = match error.kind() {
        ErrorKind::Validation => error.to_string(),
        ErrorKind::Backend => format!("Failed to {action}: {error}"),
        ErrorKind::Internal => format!("Failed to {action}: {UNKNOWN_ERROR}"),
    };
    CallToolResult::error(vec![Content::text(error_text(&cause, remediation))])
}

/// Error envelope for a handler that panicked.
pub fn format_unknown_error(action: &str, remediation: &str) -> CallToolResult {
    let cause = format!("Failed to {action}: {UNKNOWN_ERROR}");
    CallToolResult::error(vec![Content::text(error_text(&cause, remediation))])
}

fn render_hints(hints: &[UsageHint]) -> String {
    if hints.is_empty() {
        return String::new();
    }
    let lines: Vec<String> = hints.iter().map(|h| format!("- {h}")).collect();
    format!("\n\nUsage hints:\n{}", lines.join("\n"))
}
