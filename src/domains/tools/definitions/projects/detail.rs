//! Project detail tool.

use futures::FutureExt;
use rmcp::model::CallToolResult;
use serde::Deserialize;

use crate::core::api::ApiRequest;
use crate::domains::tools::ToolError;
use crate::domains::tools::contract::{ParamContract, ParamKind};
use crate::domains::tools::definition::{FailureHint, ToolDefinition, ToolInvocation};
use crate::domains::tools::definitions::common::{Anchor, fetch_record};

use super::GetProjectsListTool;

/// Parameters for `GetProjectDetailTool`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetProjectDetailParams {
    /// Project to fetch.
    pub project_id: u64,
}

/// Fetches a single project.
pub struct GetProjectDetailTool;

impl GetProjectDetailTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "get-project-detail";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Get details of one project: name, description, \
         owning organization and counts of tests and runs.";

    const PATH: &'static str = "api/v1/project/detail";

    const FAILURE: FailureHint = FailureHint::new(
        "retrieve project details",
        "Use `get-projects-list` to find valid project IDs.",
    );

    pub fn contract() -> ParamContract {
        ParamContract::new().required("projectId", ParamKind::ID, "Project ID")
    }

    pub async fn execute(call: ToolInvocation) -> Result<CallToolResult, ToolError> {
        let GetProjectDetailParams { project_id } = call.args.parse()?;
        let request = ApiRequest::get(Self::PATH, call.args.to_query());
        fetch_record(
            &call,
            request,
            Anchor::new("Project", project_id, GetProjectsListTool::NAME),
            &format!("Retrieved details for project {project_id}"),
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
    use crate::core::api::ApiError;
    use crate::core::api::testing::RecordingDispatcher;
    use crate::domains::tools::definitions::common::test_support::{call, text_of};
    use serde_json::json;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_missing_project() {
        let api = Arc::new(RecordingDispatcher::empty());
        let result = call(&GetProjectDetailTool::definition(), json!({ "projectId": 99 }), &api).await;

        assert_eq!(result.is_error, Some(true));
        let text = text_of(&result);
        assert!(text.contains("Project with ID 99 not found"));
        assert!(text.contains("`get-projects-list`"));
    }

    #[tokio::test]
    async fn test_backend_status_is_embedded() {
        let api = Arc::new(RecordingDispatcher::failing(ApiError::status(
            403,
            "Token lacks project scope",
        )));
        let result = call(&GetProjectDetailTool::definition(), json!({ "projectId": 3 }), &api).await;

        assert_eq!(result.is_error, Some(true));
        assert!(text_of(&result).contains("API error (403): Token lacks project scope"));
    }
}
