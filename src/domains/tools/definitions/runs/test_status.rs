//! Test result status tool.

use futures::FutureExt;
use rmcp::model::CallToolResult;
use serde::{Deserialize, Serialize};

use crate::core::api::ApiRequest;
use crate::domains::tools::ToolError;
use crate::domains::tools::contract::{ParamContract, ParamKind};
use crate::domains::tools::definition::{FailureHint, ToolDefinition, ToolInvocation};
use crate::domains::tools::definitions::common::{Anchor, fetch_record, json_body, plural};

use super::{GetRunsListTool, TEST_STATUSES};

/// Parameters for `UpdateTestStatusTool`.
#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTestStatusParams {
    /// Run holding the results.
    pub run_id: u64,

    /// Tests whose status changes.
    pub test_ids: Vec<u64>,

    /// New result status.
    pub status: String,
}

/// Records a result status for some tests of a run.
pub struct UpdateTestStatusTool;

impl UpdateTestStatusTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "update-test-status";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Set the result status (untested, passed, failed, \
         retest, skipped) of one or more tests inside a run.";

    const PATH: &'static str = "api/v1/run/test-status";

    const FAILURE: FailureHint = FailureHint::new(
        "update test status",
        "Use `get-run-detail` to see which test IDs belong to the run.",
    );

    pub fn contract() -> ParamContract {
        ParamContract::new()
            .required("runId", ParamKind::ID, "Run ID")
            .required("testIds", ParamKind::ID_LIST, "Tests whose status changes")
            .required("status", ParamKind::Enum(TEST_STATUSES), "New result status")
    }

    pub async fn execute(call: ToolInvocation) -> Result<CallToolResult, ToolError> {
        let params: UpdateTestStatusParams = call.args.parse()?;
        let run_id = params.run_id;
        let tests = plural(params.test_ids.len(), "test", "tests");
        let action = format!("Marked {tests} as {} in run {run_id}", params.status);
        let request = ApiRequest::put(Self::PATH, json_body(&params)?);
        fetch_record(
            &call,
            request,
            Anchor::new("Run", run_id, GetRunsListTool::NAME),
            &action,
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
    async fn test_marks_tests_failed() {
        let api = Arc::new(RecordingDispatcher::returning(json!({ "updated": 2 })));
        let result = call(
            &UpdateTestStatusTool::definition(),
            json!({ "runId": 8, "testIds": [101, 102], "status": "failed" }),
            &api,
        )
        .await;

        assert_eq!(result.is_error, Some(false));
        assert!(text_of(&result).starts_with("✅ Marked 2 tests as failed in run 8"));
        assert_eq!(api.single_request().path(), "api/v1/run/test-status");
    }

    #[tokio::test]
    async fn test_status_is_required() {
        let api = Arc::new(RecordingDispatcher::returning(json!({ "updated": 2 })));
        let result = call(
            &UpdateTestStatusTool::definition(),
            json!({ "runId": 8, "testIds": [101] }),
            &api,
        )
        .await;

        assert!(text_of(&result).contains("status is required"));
        assert_eq!(api.call_count(), 0);
    }
}
