//! Test comment tool.

use futures::FutureExt;
use rmcp::model::CallToolResult;
use serde::{Deserialize, Serialize};

use crate::core::api::ApiRequest;
use crate::domains::tools::ToolError;
use crate::domains::tools::contract::{ParamContract, ParamKind};
use crate::domains::tools::definition::{FailureHint, ToolDefinition, ToolInvocation};
use crate::domains::tools::definitions::common::{Anchor, fetch_record, json_body};

use super::GetTestsListTool;

/// Parameters for `AddTestCommentTool`.
#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddTestCommentParams {
    /// Test to comment on.
    pub test_id: u64,

    /// Comment text.
    pub comment: String,
}

/// Adds a comment to a test case.
pub struct AddTestCommentTool;

impl AddTestCommentTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "add-test-comment";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Add a comment to a test case, e.g. to document a \
         failure or a flaky environment.";

    const PATH: &'static str = "api/v1/test/comment";

    const FAILURE: FailureHint = FailureHint::new(
        "add test comment",
        "Use `get-tests-list` to find valid test IDs.",
    );

    pub fn contract() -> ParamContract {
        ParamContract::new()
            .required("testId", ParamKind::ID, "Test ID")
            .required("comment", ParamKind::TEXT, "Comment text")
    }

    pub async fn execute(call: ToolInvocation) -> Result<CallToolResult, ToolError> {
        let params: AddTestCommentParams = call.args.parse()?;
        let test_id = params.test_id;
        let request = ApiRequest::post(Self::PATH, json_body(&params)?);
        fetch_record(
            &call,
            request,
            Anchor::new("Test", test_id, GetTestsListTool::NAME),
            &format!("Added comment to test {test_id}"),
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
    async fn test_adds_comment() {
        let api = Arc::new(RecordingDispatcher::returning(json!({ "id": 900 })));
        let result = call(
            &AddTestCommentTool::definition(),
            json!({ "testId": 101, "comment": "Fails on Safari only" }),
            &api,
        )
        .await;

        assert!(text_of(&result).starts_with("✅ Added comment to test 101"));
        assert_eq!(
            api.single_request().body(),
            Some(&json!({ "testId": 101, "comment": "Fails on Safari only" }))
        );
    }
}
