//! Run detail tool.

use futures::FutureExt;
use rmcp::model::CallToolResult;
use serde::Deserialize;

use crate::core::api::ApiRequest;
use crate::domains::tools::ToolError;
use crate::domains::tools::contract::{ParamContract, ParamKind};
use crate::domains::tools::definition::{FailureHint, ToolDefinition, ToolInvocation};
use crate::domains::tools::definitions::common::{Anchor, fetch_record};

use super::GetRunsListTool;

/// Parameters for `GetRunDetailTool`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetRunDetailParams {
    /// Run to fetch.
    pub run_id: u64,
}

/// Fetches a single test run.
pub struct GetRunDetailTool;

impl GetRunDetailTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "get-run-detail";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Get details of one test run, including the tests it \
         contains and their current statuses.";

    const PATH: &'static str = "api/v1/run/detail";

    const FAILURE: FailureHint = FailureHint::new(
        "retrieve run details",
        "Use `get-runs-list` to find valid run IDs.",
    );

    pub fn contract() -> ParamContract {
        ParamContract::new().required("runId", ParamKind::ID, "Run ID")
    }

    pub async fn execute(call: ToolInvocation) -> Result<CallToolResult, ToolError> {
        let GetRunDetailParams { run_id } = call.args.parse()?;
        let request = ApiRequest::get(Self::PATH, call.args.to_query());
        fetch_record(
            &call,
            request,
            Anchor::new("Run", run_id, GetRunsListTool::NAME),
            &format!("Retrieved details for run {run_id}"),
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::api::ApiReply;
    use crate::core::api::testing::RecordingDispatcher;
    use crate::domains::tools::definitions::common::test_support::{call, text_of};
    use serde_json::json;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_run_detail_round() {
        let api = Arc::new(RecordingDispatcher::scripted(vec![
            Ok(ApiReply::Data(json!({ "id": 8, "state": "open" }))),
            Ok(ApiReply::Data(json!({}))),
        ]));
        let definition = GetRunDetailTool::definition();

        let found = call(&definition, json!({ "runId": 8 }), &api).await;
        assert_eq!(found.is_error, Some(false));
        assert_eq!(
            found.structured_content,
            Some(json!({ "data": { "id": 8, "state": "open" } }))
        );

        let gone = call(&definition, json!({ "runId": 8 }), &api).await;
        assert_eq!(gone.is_error, Some(true));
        assert!(text_of(&gone).contains("Run with ID 8 not found"));
        assert!(text_of(&gone).contains("valid run IDs"));
    }
}
