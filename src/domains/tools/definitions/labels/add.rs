//! Label creation tool.

use futures::FutureExt;
use rmcp::model::CallToolResult;
use serde::{Deserialize, Serialize};

use crate::core::api::ApiRequest;
use crate::domains::tools::ToolError;
use crate::domains::tools::contract::{ParamContract, ParamKind};
use crate::domains::tools::definition::{FailureHint, ToolDefinition, ToolInvocation};
use crate::domains::tools::definitions::common::{Anchor, fetch_record, json_body, plural};
use crate::domains::tools::definitions::projects::GetProjectsListTool;

/// Parameters for `AddLabelsTool`.
#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddLabelsParams {
    /// Project that receives the labels.
    pub project_id: u64,

    /// Label names to create.
    pub labels: Vec<String>,
}

/// Creates labels in a project.
pub struct AddLabelsTool;

impl AddLabelsTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "add-labels";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Create one or more labels in a project. \
         Labels that already exist are left untouched.";

    const PATH: &'static str = "api/v1/label/create";

    const FAILURE: FailureHint = FailureHint::new(
        "add labels",
        "Use `get-projects-list` to find valid project IDs and `get-project-labels` to see existing labels.",
    );

    pub fn contract() -> ParamContract {
        ParamContract::new()
            .required("projectId", ParamKind::ID, "Project ID")
            .required("labels", ParamKind::TEXT_LIST, "Label names to create")
    }

    pub async fn execute(call: ToolInvocation) -> Result<CallToolResult, ToolError> {
        let params: AddLabelsParams = call.args.parse()?;
        let project_id = params.project_id;
        let added = plural(params.labels.len(), "label", "labels");
        let request = ApiRequest::post(Self::PATH, json_body(&params)?);
        fetch_record(
            &call,
            request,
            Anchor::new("Project", project_id, GetProjectsListTool::NAME),
            &format!("Added {added} to project {project_id}"),
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
