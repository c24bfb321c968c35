//! Project labels listing tool.

use futures::FutureExt;
use rmcp::model::CallToolResult;
use serde::Deserialize;

use crate::core::api::ApiRequest;
use crate::domains::tools::ToolError;
use crate::domains::tools::contract::{ParamContract, ParamKind};
use crate::domains::tools::definition::{FailureHint, ToolDefinition, ToolInvocation};
use crate::domains::tools::definitions::common::{Anchor, fetch_listing};
use crate::domains::tools::definitions::projects::GetProjectsListTool;

/// Parameters for `GetProjectLabelsTool`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetProjectLabelsParams {
    /// Project whose labels are listed.
    pub project_id: u64,
}

/// Lists the labels of a project.
pub struct GetProjectLabelsTool;

impl GetProjectLabelsTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "get-project-labels";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "List the labels defined in a project, with their IDs. \
         Label IDs are needed to tag tests or delete labels.";

    const PATH: &'static str = "api/v1/label/list";

    const FAILURE: FailureHint = FailureHint::new(
        "list project labels",
        "Use `get-projects-list` to find valid project IDs.",
    );

    pub fn contract() -> ParamContract {
        ParamContract::new().required("projectId", ParamKind::ID, "Project ID")
    }

    pub async fn execute(call: ToolInvocation) -> Result<CallToolResult, ToolError> {
        let GetProjectLabelsParams { project_id } = call.args.parse()?;
        let request = ApiRequest::get(Self::PATH, call.args.to_query());
        fetch_listing(
            &call,
            request,
            Some(Anchor::new("Project", project_id, GetProjectsListTool::NAME)),
            &format!("Retrieved labels of project {project_id}"),
            "labels",
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
    async fn test_project_without_labels() {
        let api = Arc::new(RecordingDispatcher::returning(json!([])));
        let result = call(&GetProjectLabelsTool::definition(), json!({ "projectId": 3 }), &api).await;

        assert_eq!(result.is_error, Some(false));
        assert!(text_of(&result).contains("No labels found."));
        assert_eq!(
            api.single_request().request_line().unwrap(),
            "GET api/v1/label/list?projectId=3"
        );
    }
}
