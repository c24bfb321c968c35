//! Project update tool.

use futures::FutureExt;
use rmcp::model::CallToolResult;
use serde::{Deserialize, Serialize};

use crate::core::api::ApiRequest;
use crate::domains::tools::ToolError;
use crate::domains::tools::contract::{ParamContract, ParamKind};
use crate::domains::tools::definition::{FailureHint, ToolDefinition, ToolInvocation};
use crate::domains::tools::definitions::common::{Anchor, fetch_record, json_body};

use super::GetProjectsListTool;

/// Parameters for `UpdateProjectTool`.
#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProjectParams {
    /// Project to update.
    pub project_id: u64,

    /// New project name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// New project description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Updates a project.
pub struct UpdateProjectTool;

impl UpdateProjectTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "update-project";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Rename a project or change its description. \
         Only the fields provided are changed.";

    const PATH: &'static str = "api/v1/project/update";

    const FAILURE: FailureHint = FailureHint::new(
        "update project",
        "Use `get-projects-list` to find valid project IDs.",
    );

    pub fn contract() -> ParamContract {
        ParamContract::new()
            .required("projectId", ParamKind::ID, "Project ID")
            .optional("name", ParamKind::TEXT, "New project name")
            .optional("description", ParamKind::TEXT, "New project description")
    }

    pub async fn execute(call: ToolInvocation) -> Result<CallToolResult, ToolError> {
        let params: UpdateProjectParams = call.args.parse()?;
        let project_id = params.project_id;
        let request = ApiRequest::put(Self::PATH, json_body(&params)?);
        fetch_record(
            &call,
            request,
            Anchor::new("Project", project_id, GetProjectsListTool::NAME),
            &format!("Updated project {project_id}"),
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
    async fn test_null_optional_is_omitted_from_body() {
        let api = Arc::new(RecordingDispatcher::returning(json!({ "id": 3 })));
        let result = call(
            &UpdateProjectTool::definition(),
            json!({ "projectId": 3, "name": null, "description": "Checkout flows" }),
            &api,
        )
        .await;

        assert_eq!(result.is_error, Some(false));
        assert!(text_of(&result).starts_with("✅ Updated project 3"));
        assert_eq!(
            api.single_request().body(),
            Some(&json!({ "projectId": 3, "description": "Checkout flows" }))
        );
    }
}
