//! Test listing tool.

use futures::FutureExt;
use rmcp::model::CallToolResult;
use serde::Deserialize;

use crate::core::api::ApiRequest;
use crate::domains::tools::ToolError;
use crate::domains::tools::contract::{ParamContract, ParamKind};
use crate::domains::tools::definition::{FailureHint, ToolDefinition, ToolInvocation};
use crate::domains::tools::definitions::common::{Anchor, fetch_listing};
use crate::domains::tools::definitions::projects::GetProjectsListTool;

use super::PRIORITIES;

/// Parameters for `GetTestsListTool`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetTestsListParams {
    /// Project whose tests are listed.
    pub project_id: u64,

    /// Only tests with this priority.
    pub priority: Option<String>,
}

/// Lists the tests of a project.
pub struct GetTestsListTool;

impl GetTestsListTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "get-tests-list";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "List the tests of a project, optionally filtered by \
         priority. Returns test IDs, titles, priorities and labels.";

    const PATH: &'static str = "api/v1/test/list";

    const FAILURE: FailureHint = FailureHint::new(
        "list tests",
        "Use `get-projects-list` to find valid project IDs.",
    );

    pub fn contract() -> ParamContract {
        ParamContract::new()
            .required("projectId", ParamKind::ID, "Project ID")
            .optional("priority", ParamKind::Enum(PRIORITIES), "Only tests with this priority")
    }

    pub async fn execute(call: ToolInvocation) -> Result<CallToolResult, ToolError> {
        let GetTestsListParams {
            project_id,
            priority,
        } = call.args.parse()?;
        let action = match priority {
            Some(priority) => format!("Retrieved {priority} priority tests of project {project_id}"),
            None => format!("Retrieved tests of project {project_id}"),
        };
        let request = ApiRequest::get(Self::PATH, call.args.to_query());
        fetch_listing(
            &call,
            request,
            Some(Anchor::new("Project", project_id, GetProjectsListTool::NAME)),
            &action,
            "tests",
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
