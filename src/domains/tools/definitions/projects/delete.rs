//! Project deletion tool.

use futures::FutureExt;
use rmcp::model::CallToolResult;
use serde::{Deserialize, Serialize};

use crate::core::api::ApiRequest;
use crate::domains::tools::ToolError;
use crate::domains::tools::contract::{ParamContract, ParamKind};
use crate::domains::tools::definition::{FailureHint, ToolDefinition, ToolInvocation};
use crate::domains::tools::definitions::common::{Anchor, fetch_record, json_body};

use super::GetProjectsListTool;

/// Parameters for `DeleteProjectTool`.
#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteProjectParams {
    /// Project to delete.
    pub project_id: u64,
}

/// Deletes a project.
pub struct DeleteProjectTool;

impl DeleteProjectTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "delete-project";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Delete a project together with its runs, tests and labels. \
         This cannot be undone.";

    const PATH: &'static str = "api/v1/project/delete";

    const FAILURE: FailureHint = FailureHint::new(
        "delete project",
        "Use `get-projects-list` to find valid project IDs.",
    );

    pub fn contract() -> ParamContract {
        ParamContract::new().required("projectId", ParamKind::ID, "Project ID")
    }

    pub async fn execute(call: ToolInvocation) -> Result<CallToolResult, ToolError> {
        let params: DeleteProjectParams = call.args.parse()?;
        let project_id = params.project_id;
        let request = ApiRequest::delete(Self::PATH, json_body(&params)?);
        fetch_record(
            &call,
            request,
            Anchor::new("Project", project_id, GetProjectsListTool::NAME),
            &format!("Deleted project {project_id}"),
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
