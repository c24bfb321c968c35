//! Run listing tool.

use futures::FutureExt;
use rmcp::model::CallToolResult;
use serde::Deserialize;

use crate::core::api::ApiRequest;
use crate::domains::tools::ToolError;
use crate::domains::tools::contract::{ParamContract, ParamKind};
use crate::domains::tools::definition::{FailureHint, ToolDefinition, ToolInvocation};
use crate::domains::tools::definitions::common::{Anchor, fetch_listing};
use crate::domains::tools::definitions::projects::GetProjectsListTool;

use super::RUN_STATES;

/// Parameters for `GetRunsListTool`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetRunsListParams {
    /// Project whose runs are listed.
    pub project_id: u64,

    /// Only runs in this state.
    pub status: Option<String>,
}

/// Lists the test runs of a project.
pub struct GetRunsListTool;

impl GetRunsListTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "get-runs-list";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "List the test runs of a project, optionally filtered \
         by run state. Returns run IDs, names, states and progress counters.";

    const PATH: &'static str = "api/v1/run/list";

    const FAILURE: FailureHint = FailureHint::new(
        "list runs",
        "Use `get-projects-list` to find valid project IDs.",
    );

    pub fn contract() -> ParamContract {
        ParamContract::new()
            .required("projectId", ParamKind::ID, "Project ID")
            .optional("status", ParamKind::Enum(RUN_STATES), "Only runs in this state")
    }

    pub async fn execute(call: ToolInvocation) -> Result<CallToolResult, ToolError> {
        let GetRunsListParams { project_id, status } = call.args.parse()?;
        let action = match status {
            Some(state) => format!("Retrieved {state} runs of project {project_id}"),
            None => format!("Retrieved runs of project {project_id}"),
        };
        let request = ApiRequest::get(Self::PATH, call.args.to_query());
        fetch_listing(
            &call,
            request,
            Some(Anchor::new("Project", project_id, GetProjectsListTool::NAME)),
            &action,
            "runs",
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
    use crate::core::api::testing::RecordingDispatcher;
    use crate::domains::tools::definitions::common::test_support::{call, text_of};
    use serde_json::json;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_filters_by_state() {
        let api = Arc::new(RecordingDispatcher::returning(json!([{ "id": 8, "state": "open" }])));
        let result = call(
            &GetRunsListTool::definition(),
            json!({ "projectId": 3, "status": "open" }),
            &api,
        )
        .await;

        assert!(text_of(&result).starts_with("✅ Retrieved open runs of project 3"));
        assert_eq!(
            api.single_request().request_line().unwrap(),
            "GET api/v1/run/list?projectId=3&status=open"
        );
    }

    #[tokio::test]
    async fn test_unknown_state_is_rejected() {
        let api = Arc::new(RecordingDispatcher::returning(json!([])));
        let result = call(
            &GetRunsListTool::definition(),
            json!({ "projectId": 3, "status": "archived" }),
            &api,
        )
        .await;

        assert_eq!(result.is_error, Some(true));
        assert!(text_of(&result).contains(
            "status invalid value 'archived', expected one of: open, in-progress, closed"
        ));
        assert_eq!(api.call_count(), 0);
    }

    #[tokio::test]
    async fn test_missing_project_vs_no_runs() {
        let missing = Arc::new(RecordingDispatcher::returning(serde_json::Value::Null));
        let result = call(&GetRunsListTool::definition(), json!({ "projectId": 3 }), &missing).await;
        assert_eq!(result.is_error, Some(true));
        assert!(text_of(&result).contains("Project with ID 3 not found"));

        let none = Arc::new(RecordingDispatcher::returning(json!([])));
        let result = call(&GetRunsListTool::definition(), json!({ "projectId": 3 }), &none).await;
        assert_eq!(result.is_error, Some(false));
        assert!(text_of(&result).contains("No runs found."));
    }
}
