//! Run deletion tool.

use futures::FutureExt;
use rmcp::model::CallToolResult;
use serde::{Deserialize, Serialize};

use crate::core::api::ApiRequest;
use crate::domains::tools::ToolError;
use crate::domains::tools::contract::{ParamContract, ParamKind};
use crate::domains::tools::definition::{FailureHint, ToolDefinition, ToolInvocation};
use crate::domains::tools::definitions::common::{Anchor, fetch_record, json_body};

use super::GetRunsListTool;

/// Parameters for `DeleteRunTool`.
#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteRunParams {
    /// Run to delete.
    pub run_id: u64,
}

/// Deletes a test run.
pub struct DeleteRunTool;

impl DeleteRunTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "delete-run";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Delete a test run and its recorded results. \
         The tests themselves are kept.";

    const PATH: &'static str = "api/v1/run/delete";

    const FAILURE: FailureHint = FailureHint::new(
        "delete run",
        "Use `get-runs-list` to find valid run IDs.",
    );

    pub fn contract() -> ParamContract {
        ParamContract::new().required("runId", ParamKind::ID, "Run ID")
    }

    pub async fn execute(call: ToolInvocation) -> Result<CallToolResult, ToolError> {
        let params: DeleteRunParams = call.args.parse()?;
        let run_id = params.run_id;
        let request = ApiRequest::delete(Self::PATH, json_body(&params)?);
        fetch_record(
            &call,
            request,
            Anchor::new("Run", run_id, GetRunsListTool::NAME),
            &format!("Deleted run {run_id}"),
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
