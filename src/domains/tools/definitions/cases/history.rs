//! Test history tool.

use futures::FutureExt;
use rmcp::model::CallToolResult;
use serde::Deserialize;

use crate::core::api::ApiRequest;
use crate::domains::tools::ToolError;
use crate::domains::tools::contract::{ParamContract, ParamKind};
use crate::domains::tools::definition::{FailureHint, ToolDefinition, ToolInvocation};
use crate::domains::tools::definitions::common::{Anchor, fetch_listing};

use super::GetTestsListTool;

/// Parameters for `GetTestHistoryTool`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetTestHistoryParams {
    /// Test whose history is listed.
    pub test_id: u64,
}

/// Lists the history of a test case.
pub struct GetTestHistoryTool;

impl GetTestHistoryTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "get-test-history";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Show the change and result history of a test case \
         across runs, newest first.";

    const PATH: &'static str = "api/v1/test/history";

    const FAILURE: FailureHint = FailureHint::new(
        "retrieve test history",
        "Use `get-tests-list` to find valid test IDs.",
    );

    pub fn contract() -> ParamContract {
        ParamContract::new().required("testId", ParamKind::ID, "Test ID")
    }

    pub async fn execute(call: ToolInvocation) -> Result<CallToolResult, ToolError> {
        let GetTestHistoryParams { test_id } = call.args.parse()?;
        let request = ApiRequest::get(Self::PATH, call.args.to_query());
        fetch_listing(
            &call,
            request,
            Some(Anchor::new("Test", test_id, GetTestsListTool::NAME)),
            &format!("Retrieved history of test {test_id}"),
            "history entries",
        )
        .await
    }

    pub fn definition() -> ToolDefinition {
        ToolDefinition::new(
            Self::NAME,
            Self::DESCRIPTION,
            Self::contract(),
            Self::FAILURE,
            |call| Self::execute(call).boxed(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::api::testing::RecordingDispatcher;
    use crate::domains::tools::definitions::common::test_support::{call, text_of};
    use serde_json::json;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_history_without_entries() {
        let api = Arc::new(RecordingDispatcher::returning(json!([])));
        let result = call(&GetTestHistoryTool::definition(), json!({ "testId": 101 }), &api).await;

        assert_eq!(result.is_error, Some(false));
        assert!(text_of(&result).contains("No history entries found."));
    }
}
