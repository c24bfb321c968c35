//! Project creation tool.

use futures::FutureExt;
use rmcp::model::CallToolResult;
use serde::{Deserialize, Serialize};

use crate::core::api::ApiRequest;
use crate::domains::tools::ToolError;
use crate::domains::tools::contract::{ParamContract, ParamKind};
use crate::domains::tools::definition::{FailureHint, ToolDefinition, ToolInvocation};
use crate::domains::tools::definitions::common::{Anchor, fetch_record, json_body};
use crate::domains::tools::definitions::orgs::GetOrgsListTool;

/// Parameters for `CreateProjectTool`.
#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProjectParams {
    /// Organization that will own the project.
    pub org_id: u64,

    /// Project name.
    pub name: String,

    /// Project description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Creates a project in an organization.
pub struct CreateProjectTool;

impl CreateProjectTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "create-project";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Create a project inside an organization. \
         Returns the new project with its ID.";

    const PATH: &'static str = "api/v1/project/create";

    const FAILURE: FailureHint = FailureHint::new(
        "create project",
        "Use `get-orgs-list` to find valid organization IDs. Project names must be unique within an organization.",
    );

    pub fn contract() -> ParamContract {
        ParamContract::new()
            .required("orgId", ParamKind::ID, "Organization that will own the project")
            .required("name", ParamKind::TEXT, "Project name")
            .optional("description", ParamKind::TEXT, "Project description")
    }

    pub async fn execute(call: ToolInvocation) -> Result<CallToolResult, ToolError> {
        let params: CreateProjectParams = call.args.parse()?;
        let org_id = params.org_id;
        let name = &params.name;
        let request = ApiRequest::post(Self::PATH, json_body(&params)?);
        fetch_record(
            &call,
            request,
            Anchor::new("Organization", org_id, GetOrgsListTool::NAME),
            &format!("Created project '{name}' in organization {org_id}"),
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
