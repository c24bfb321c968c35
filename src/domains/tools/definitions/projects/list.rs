//! Project listing tool.

use futures::FutureExt;
use rmcp::model::CallToolResult;
use serde::Deserialize;

use crate::core::api::ApiRequest;
use crate::domains::tools::ToolError;
use crate::domains::tools::contract::{ParamContract, ParamKind};
use crate::domains::tools::definition::{FailureHint, ToolDefinition, ToolInvocation};
use crate::domains::tools::definitions::common::{Anchor, fetch_listing};
use crate::domains::tools::definitions::orgs::GetOrgsListTool;

/// Parameters for `GetProjectsListTool`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetProjectsListParams {
    /// Organization whose projects are listed.
    pub org_id: u64,
}

/// Lists the projects of an organization.
pub struct GetProjectsListTool;

impl GetProjectsListTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "get-projects-list";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "List the projects of an organization. \
         Returns project IDs, names and test counts.";

    const PATH: &'static str = "api/v1/project/list";

    const FAILURE: FailureHint = FailureHint::new(
        "list projects",
        "Use `get-orgs-list` to find valid organization IDs.",
    );

    pub fn contract() -> ParamContract {
        ParamContract::new().required("orgId", ParamKind::ID, "Organization ID")
    }

    pub async fn execute(call: ToolInvocation) -> Result<CallToolResult, ToolError> {
        let GetProjectsListParams { org_id } = call.args.parse()?;
        let request = ApiRequest::get(Self::PATH, call.args.to_query());
        fetch_listing(
            &call,
            request,
            Some(Anchor::new("Organization", org_id, GetOrgsListTool::NAME)),
            &format!("Retrieved projects of organization {org_id}"),
            "projects",
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
    async fn test_lists_projects() {
        let api = Arc::new(RecordingDispatcher::returning(json!([{ "id": 3, "name": "Web" }])));
        let result = call(&GetProjectsListTool::definition(), json!({ "orgId": 1 }), &api).await;

        assert_eq!(result.is_error, Some(false));
        assert!(text_of(&result).starts_with("✅ Retrieved projects of organization 1"));
        assert_eq!(
            api.single_request().request_line().unwrap(),
            "GET api/v1/project/list?orgId=1"
        );
    }

    #[tokio::test]
    async fn test_undeclared_arguments_are_not_forwarded() {
        let api = Arc::new(RecordingDispatcher::returning(json!([])));
        call(
            &GetProjectsListTool::definition(),
            json!({ "orgId": 1, "verbose": true }),
            &api,
        )
        .await;

        assert_eq!(
            api.single_request().request_line().unwrap(),
            "GET api/v1/project/list?orgId=1"
        );
    }
}
