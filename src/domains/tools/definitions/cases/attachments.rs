//! Test attachments tool.

use futures::FutureExt;
use rmcp::model::CallToolResult;
use serde::Deserialize;

use crate::core::api::ApiRequest;
use crate::domains::tools::ToolError;
use crate::domains::tools::contract::{ParamContract, ParamKind};
use crate::domains::tools::definition::{FailureHint, ToolDefinition, ToolInvocation};
use crate::domains::tools::definitions::common::{Anchor, fetch_listing};

use super::GetTestsListTool;

/// Parameters for `GetTestAttachmentsTool`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetTestAttachmentsParams {
    /// Test whose attachments are listed.
    pub test_id: u64,
}

/// Lists the attachments of a test case.
pub struct GetTestAttachmentsTool;

impl GetTestAttachmentsTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "get-test-attachments";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "List the files attached to a test case with their \
         names, sizes and download URLs.";

    const PATH: &'static str = "api/v1/attachment/list";

    const FAILURE: FailureHint = FailureHint::new(
        "list test attachments",
        "Use `get-tests-list` to find valid test IDs.",
    );

    pub fn contract() -> ParamContract {
        ParamContract::new().required("testId", ParamKind::ID, "Test ID")
    }

    pub async fn execute(call: ToolInvocation) -> Result<CallToolResult, ToolError> {
        let GetTestAttachmentsParams { test_id } = call.args.parse()?;
        let request = ApiRequest::get(Self::PATH, call.args.to_query());
        fetch_listing(
            &call,
            request,
            Some(Anchor::new("Test", test_id, GetTestsListTool::NAME)),
            &format!("Retrieved attachments of test {test_id}"),
            "attachments",
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
    async fn test_lists_attachments() {
        let api = Arc::new(RecordingDispatcher::returning(json!([
            { "id": 1, "name": "trace.zip", "size": 20480 }
        ])));
        let result = call(&GetTestAttachmentsTool::definition(), json!({ "testId": 101 }), &api).await;

        assert_eq!(result.is_error, Some(false));
        assert!(text_of(&result).contains("trace.zip"));
        assert_eq!(
            api.single_request().request_line().unwrap(),
            "GET api/v1/attachment/list?testId=101"
        );
    }
}
