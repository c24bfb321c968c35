//! Organization detail tool.

use futures::FutureExt;
use rmcp::model::CallToolResult;
use serde::Deserialize;

use crate::core::api::ApiRequest;
use crate::domains::tools::ToolError;
use crate::domains::tools::contract::{ParamContract, ParamKind};
use crate::domains::tools::definition::{FailureHint, ToolDefinition, ToolInvocation};
use crate::domains::tools::definitions::common::{Anchor, fetch_record};

use super::GetOrgsListTool;

/// Parameters for `GetOrgDetailTool`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetOrgDetailParams {
    /// Organization to fetch.
    pub org_id: u64,
}

/// Fetches a single organization by id.
pub struct GetOrgDetailTool;

impl GetOrgDetailTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "get-org-detail";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Get details of one organization: name, plan, \
         member and project counts. Requires an orgId from get-orgs-list.";

    const PATH: &'static str = "api/v1/org/detail";

    const FAILURE: FailureHint = FailureHint::new(
        "retrieve organization details",
        "Use `get-orgs-list` to find valid organization IDs.",
    );

    pub fn contract() -> ParamContract {
        ParamContract::new().required("orgId", ParamKind::ID, "Organization ID")
    }

    pub async fn execute(call: ToolInvocation) -> Result<CallToolResult, ToolError> {
        let GetOrgDetailParams { org_id } = call.args.parse()?;
        let request = ApiRequest::get(Self::PATH, call.args.to_query());
        fetch_record(
            &call,
            request,
            Anchor::new("Organization", org_id, GetOrgsListTool::NAME),
            &format!("Retrieved details for organization {org_id}"),
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
    use crate::core::api::ApiError;
    use crate::core::api::testing::RecordingDispatcher;
    use crate::domains::tools::definitions::common::test_support::{call, text_of};
    use serde_json::json;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_returns_organization() {
        let api = Arc::new(RecordingDispatcher::returning(json!({ "id": 7, "name": "Acme" })));
        let result = call(&GetOrgDetailTool::definition(), json!({ "orgId": 7 }), &api).await;

        assert_eq!(result.is_error, Some(false));
        let text = text_of(&result);
        assert!(text.starts_with("✅ Retrieved details for organization 7"));
        assert!(text.contains("orgId (positive integer, required)"));
        assert_eq!(
            api.single_request().request_line().unwrap(),
            "GET api/v1/org/detail?orgId=7"
        );
    }

    #[tokio::test]
    async fn test_empty_object_is_not_found() {
        let api = Arc::new(RecordingDispatcher::returning(json!({})));
        let result = call(&GetOrgDetailTool::definition(), json!({ "orgId": 7 }), &api).await;

        assert_eq!(result.is_error, Some(true));
        let text = text_of(&result);
        assert!(text.contains("Organization with ID 7 not found"));
        assert!(text.contains("get-orgs-list"));
        assert!(!text.contains("✅"));
    }

    #[tokio::test]
    async fn test_invalid_id_is_rejected_without_dispatch() {
        let api = Arc::new(RecordingDispatcher::returning(json!({ "id": 1 })));
        for args in [json!({}), json!({ "orgId": 0 }), json!({ "orgId": -3 })] {
            let result = call(&GetOrgDetailTool::definition(), args, &api).await;
            assert_eq!(result.is_error, Some(true));
            assert!(text_of(&result).contains("orgId"));
        }
        assert_eq!(api.call_count(), 0);
    }

    #[tokio::test]
    async fn test_network_error_is_reported_verbatim() {
        let api = Arc::new(RecordingDispatcher::failing(ApiError::transport(
            "Connection failed: tcp connect error",
        )));
        let result = call(&GetOrgDetailTool::definition(), json!({ "orgId": 7 }), &api).await;

        assert_eq!(result.is_error, Some(true));
        let text = text_of(&result);
        assert!(text.starts_with("❌ Failed to retrieve organization details"));
        assert!(text.contains("Connection failed: tcp connect error"));
        assert!(text.contains("\n\n💡 Tip: Use `get-orgs-list`"));
        assert_eq!(api.call_count(), 1);
    }

    #[tokio::test]
    async fn test_repeated_read_is_identical() {
        let api = Arc::new(RecordingDispatcher::returning(json!({ "id": 7, "name": "Acme" })));
        let definition = GetOrgDetailTool::definition();
        let first = call(&definition, json!({ "orgId": 7 }), &api).await;
        let second = call(&definition, json!({ "orgId": 7 }), &api).await;

        assert_eq!(
            serde_json::to_value(&first).unwrap(),
            serde_json::to_value(&second).unwrap()
        );
        let requests = api.requests();
        assert_eq!(
            requests[0].request_line().unwrap(),
            requests[1].request_line().unwrap()
        );
    }

    #[tokio::test]
    async fn test_repeated_miss_is_identical() {
        let api = Arc::new(RecordingDispatcher::returning(json!({})));
        let definition = GetOrgDetailTool::definition();
        let first = call(&definition, json!({ "orgId": 7 }), &api).await;
        let second = call(&definition, json!({ "orgId": 7 }), &api).await;

        assert_eq!(first.is_error, Some(true));
        assert_eq!(
            serde_json::to_value(&first).unwrap(),
            serde_json::to_value(&second).unwrap()
        );
    }
}
