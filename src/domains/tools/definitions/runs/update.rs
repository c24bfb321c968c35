//! Run update tool.

use futures::FutureExt;
use rmcp::model::CallToolResult;
use serde::{Deserialize, Serialize};

use crate::core::api::ApiRequest;
use crate::domains::tools::ToolError;
use crate::domains::tools::contract::{ParamContract, ParamKind};
use crate::domains::tools::definition::{FailureHint, ToolDefinition, ToolInvocation};
use crate::domains::tools::definitions::common::{Anchor, fetch_record, json_body};

use super::{GetRunsListTool, RUN_STATES};

/// Parameters for `UpdateRunTool`.
#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRunParams {
    /// Run to update.
    pub run_id: u64,

    /// New run name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// New run description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// New run state.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
}

/// Updates a test run.
pub struct UpdateRunTool;

impl UpdateRunTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "update-run";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Rename a run, change its description or move it to \
         another state (open, in-progress, closed).";

    const PATH: &'static str = "api/v1/run/update";

    const FAILURE: FailureHint = FailureHint::new(
        "update run",
        "Use `get-runs-list` to find valid run IDs.",
    );

    pub fn contract() -> ParamContract {
        ParamContract::new()
            .required("runId", ParamKind::ID, "Run ID")
            .optional("name", ParamKind::TEXT, "New run name")
            .optional("description", ParamKind::TEXT, "New run description")
            .optional("state", ParamKind::Enum(RUN_STATES), "New run state")
    }

    pub async fn execute(call: ToolInvocation) -> Result<CallToolResult, ToolError> {
        let params: UpdateRunParams = call.args.parse()?;
        let run_id = params.run_id;
        let action = match params.state.as_deref() {
            Some(state) => format!("Updated run {run_id} (state: {state})"),
            None => format!("Updated run {run_id}"),
        };
        let request = ApiRequest::put(Self::PATH, json_body(&params)?);
        fetch_record(
            &call,
            request,
            Anchor::new("Run", run_id, GetRunsListTool::NAME),
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
