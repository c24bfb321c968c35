//! Test creation tool.

use futures::FutureExt;
use rmcp::model::CallToolResult;
use serde::{Deserialize, Serialize};

use crate::core::api::ApiRequest;
use crate::domains::tools::ToolError;
use crate::domains::tools::contract::{ParamContract, ParamKind};
use crate::domains::tools::definition::{FailureHint, ToolDefinition, ToolInvocation};
use crate::domains::tools::definitions::common::{Anchor, fetch_record, json_body};
use crate::domains::tools::definitions::projects::GetProjectsListTool;

use super::PRIORITIES;

/// Parameters for `CreateTestTool`.
#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTestParams {
    /// Project that will own the test.
    pub project_id: u64,

    /// Test title.
    pub title: String,

    /// Steps and expected results.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// One of the test priorities.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<String>,

    /// Labels to attach.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label_ids: Option<Vec<u64>>,
}

/// Creates a test case in a project.
pub struct CreateTestTool;

impl CreateTestTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "create-test";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Create a test case in a project, optionally with a \
         priority and existing label IDs.";

    const PATH: &'static str = "api/v1/test/create";

    const FAILURE: FailureHint = FailureHint::new(
        "create test",
        "Use `get-projects-list` to find valid project IDs and `get-project-labels` for label IDs.",
    );

    pub fn contract() -> ParamContract {
        ParamContract::new()
            .required("projectId", ParamKind::ID, "Project ID")
            .required("title", ParamKind::TEXT, "Test title")
            .optional("description", ParamKind::TEXT, "Steps and expected results")
            .optional("priority", ParamKind::Enum(PRIORITIES), "Test priority")
            .optional("labelIds", ParamKind::ID_LIST, "Labels to attach")
    }

    pub async fn execute(call: ToolInvocation) -> Result<CallToolResult, ToolError> {
        let params: CreateTestParams = call.args.parse()?;
        let project_id = params.project_id;
        let action = format!("Created test '{}' in project {project_id}", params.title);
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
