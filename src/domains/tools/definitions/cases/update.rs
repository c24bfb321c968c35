//! Test update tool.

use futures::FutureExt;
use rmcp::model::CallToolResult;
use serde::{Deserialize, Serialize};

use crate::core::api::ApiRequest;
use crate::domains::tools::ToolError;
use crate::domains::tools::contract::{ParamContract, ParamKind};
use crate::domains::tools::definition::{FailureHint, ToolDefinition, ToolInvocation};
use crate::domains::tools::definitions::common::{Anchor, fetch_record, json_body};

use super::{GetTestsListTool, PRIORITIES};

/// Parameters for `UpdateTestTool`.
#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTestParams {
    /// Test to update.
    pub test_id: u64,

    /// New title.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// New description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// New priority.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<String>,
}

/// Updates a test case.
pub struct UpdateTestTool;

impl UpdateTestTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "update-test";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Change the title, description or priority of a test. \
         Only the fields provided are changed.";

    const PATH: &'static str = "api/v1/test/update";

    const FAILURE: FailureHint = FailureHint::new(
        "update test",
        "Use `get-tests-list` to find valid test IDs.",
    );

    pub fn contract() -> ParamContract {
        ParamContract::new()
            .required("testId", ParamKind::ID, "Test ID")
            .optional("title", ParamKind::TEXT, "New title")
            .optional("description", ParamKind::TEXT, "New description")
            .optional("priority", ParamKind::Enum(PRIORITIES), "New priority")
    }

    pub async fn execute(call: ToolInvocation) -> Result<CallToolResult, ToolError> {
        let params: UpdateTestParams = call.args.parse()?;
        let test_id = params.test_id;
        let request = ApiRequest::put(Self::PATH, json_body(&params)?);
        fetch_record(
            &call,
            request,
            Anchor::new("Test", test_id, GetTestsListTool::NAME),
            &format!("Updated test {test_id}"),
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
