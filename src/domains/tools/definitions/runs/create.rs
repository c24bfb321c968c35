//! Run creation tool.

use futures::FutureExt;
use rmcp::model::CallToolResult;
use serde::{Deserialize, Serialize};

use crate::core::api::ApiRequest;
use crate::domains::tools::ToolError;
use crate::domains::tools::contract::{ParamContract, ParamKind};
use crate::domains::tools::definition::{FailureHint, ToolDefinition, ToolInvocation};
use crate::domains::tools::definitions::common::{Anchor, fetch_record, json_body, plural};
use crate::domains::tools::definitions::projects::GetProjectsListTool;

/// Parameters for `CreateRunTool`.
#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateRunParams {
    /// Project that will own the run.
    pub project_id: u64,

    /// Run name.
    pub name: String,

    /// Run description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Tests to include.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub test_ids: Option<Vec<u64>>,
}

/// Creates a test run in a project.
pub struct CreateRunTool;

impl CreateRunTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "create-run";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Create a test run in a project. When testIds is \
         omitted the run starts empty; otherwise the listed tests are added as untested.";

    const PATH: &'static str = "api/v1/run/create";

    const FAILURE: FailureHint = FailureHint::new(
        "create run",
        "Use `get-projects-list` to find valid project IDs and `get-tests-list` for test IDs.",
    );

    pub fn contract() -> ParamContract {
        ParamContract::new()
            .required("projectId", ParamKind::ID, "Project ID")
            .required("name", ParamKind::TEXT, "Run name")
            .optional("description", ParamKind::TEXT, "Run description")
            .optional("testIds", ParamKind::ID_LIST, "Tests to include in the run")
    }

    pub async fn execute(call: ToolInvocation) -> Result<CallToolResult, ToolError> {
        let params: CreateRunParams = call.args.parse()?;
        let project_id = params.project_id;
        let name = &params.name;
        let action = match params.test_ids.as_ref().map_or(0, Vec::len) {
            0 => format!("Created run '{name}' in project {project_id}"),
            n => format!(
                "Created run '{name}' with {} in project {project_id}",
                plural(n, "test", "tests")
            ),
        };
        let request = ApiRequest::post(Self::PATH, json_body(&params)?);
        fetch_record(
            &call,
            request,
            Anchor::new("Project", project_id, GetProjectsListTool::NAME),
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
