//! Bulk test deletion tool.

use futures::FutureExt;
use rmcp::model::CallToolResult;
use serde::{Deserialize, Serialize};

use crate::core::api::ApiRequest;
use crate::domains::tools::ToolError;
use crate::domains::tools::contract::{ParamContract, ParamKind};
use crate::domains::tools::definition::{FailureHint, ToolDefinition, ToolInvocation};
use crate::domains::tools::definitions::common::{Anchor, fetch_record, json_body, plural};
use crate::domains::tools::definitions::projects::GetProjectsListTool;

/// Parameters for `DeleteTestsTool`.
#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteTestsParams {
    /// Project the tests belong to.
    pub project_id: u64,

    /// Tests to delete.
    pub test_ids: Vec<u64>,
}

/// Deletes test cases from a project.
pub struct DeleteTestsTool;

impl DeleteTestsTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "delete-tests";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Delete test cases from a project. Their results are \
         removed from every run.";

    const PATH: &'static str = "api/v1/test/delete";

    const FAILURE: FailureHint = FailureHint::new(
        "delete tests",
        "Use `get-tests-list` to find valid test IDs for the project.",
    );

    pub fn contract() -> ParamContract {
        ParamContract::new()
            .required("projectId", ParamKind::ID, "Project ID")
            .required("testIds", ParamKind::ID_LIST, "Tests to delete")
    }

    pub async fn execute(call: ToolInvocation) -> Result<CallToolResult, ToolError> {
        let params: DeleteTestsParams = call.args.parse()?;
        let project_id = params.project_id;
        let removed = plural(params.test_ids.len(), "test", "tests");
        let request = ApiRequest::delete(Self::PATH, json_body(&params)?);
        fetch_record(
            &call,
            request,
            Anchor::new("Project", project_id, GetProjectsListTool::NAME),
            &format!("Deleted {removed} from project {project_id}"),
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
    use crate::core::api::ApiMethod;
    use crate::core::api::testing::RecordingDispatcher;
    use crate::domains::tools::definitions::common::test_support::{call, text_of};
    use serde_json::json;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_deletes_tests() {
        let api = Arc::new(RecordingDispatcher::returning(json!({ "deleted": 3 })));
        let result = call(
            &DeleteTestsTool::definition(),
            json!({ "projectId": 3, "testIds": [101, 102, 103] }),
            &api,
        )
        .await;

        assert!(text_of(&result).starts_with("✅ Deleted 3 tests from project 3"));
        let request = api.single_request();
        assert_eq!(request.method(), ApiMethod::Delete);
        assert!(request.query().is_empty());
    }

    #[tokio::test]
    async fn test_bodiless_delete_is_success() {
        let api = Arc::new(RecordingDispatcher::no_content());
        let result = call(
            &DeleteTestsTool::definition(),
            json!({ "projectId": 3, "testIds": [101] }),
            &api,
        )
        .await;

        assert_eq!(result.is_error, Some(false));
        assert!(text_of(&result).starts_with("✅ Deleted 1 test from project 3"));
    }

    #[tokio::test]
    async fn test_delete_from_unknown_project() {
        let api = Arc::new(RecordingDispatcher::returning(json!({})));
        let result = call(
            &DeleteTestsTool::definition(),
            json!({ "projectId": 404, "testIds": [101, 102] }),
            &api,
        )
        .await;

        assert_eq!(result.is_error, Some(true));
        assert!(text_of(&result).contains("Project with ID 404 not found"));
        assert_eq!(api.call_count(), 1);
    }
}
