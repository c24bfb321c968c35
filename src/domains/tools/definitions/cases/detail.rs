//! Test detail tool.

use futures::FutureExt;
use rmcp::model::CallToolResult;
use serde::Deserialize;

use crate::core::api::ApiRequest;
use crate::domains::tools::ToolError;
use crate::domains::tools::contract::{ParamContract, ParamKind};
use crate::domains::tools::definition::{FailureHint, ToolDefinition, ToolInvocation};
use crate::domains::tools::definitions::common::{Anchor, fetch_record};

use super::GetTestsListTool;

/// Parameters for `GetTestDetailTool`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetTestDetailParams {
    /// Test to fetch.
    pub test_id: u64,
}

/// Fetches a single test case.
pub struct GetTestDetailTool;

impl GetTestDetailTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "get-test-detail";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Get one test case: title, description, steps, \
         priority and labels.";

    const PATH: &'static str = "api/v1/test/detail";

    const FAILURE: FailureHint = FailureHint::new(
        "retrieve test details",
        "Use `get-tests-list` to find valid test IDs.",
    );

    pub fn contract() -> ParamContract {
        ParamContract::new().required("testId", ParamKind::ID, "Test ID")
    }

    pub async fn execute(call: ToolInvocation) -> Result<CallToolResult, ToolError> {
        let GetTestDetailParams { test_id } = call.args.parse()?;
        let request = ApiRequest::get(Self::PATH, call.args.to_query());
        fetch_record(
            &call,
            request,
            Anchor::new("Test", test_id, GetTestsListTool::NAME),
            &format!("Retrieved details for test {test_id}"),
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
