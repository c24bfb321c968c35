//! Organization listing tool.

use futures::FutureExt;
use rmcp::model::CallToolResult;

use crate::core::api::ApiRequest;
use crate::domains::tools::ToolError;
use crate::domains::tools::contract::ParamContract;
use crate::domains::tools::definition::{FailureHint, ToolDefinition, ToolInvocation};
use crate::domains::tools::definitions::common::fetch_listing;

/// Lists the organizations visible to the configured credential.
pub struct GetOrgsListTool;

impl GetOrgsListTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "get-orgs-list";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "List all organizations the API token can access. \
         Returns organization IDs and names; use it to discover valid orgId values for other tools.";

    const PATH: &'static str = "api/v1/org/list";

    const FAILURE: FailureHint = FailureHint::new(
        "list organizations",
        "Check that the API token is valid and belongs to at least one organization.",
    );

    pub fn contract() -> ParamContract {
        ParamContract::new()
    }

    pub async fn execute(call: ToolInvocation) -> Result<CallToolResult, ToolError> {
        let request = ApiRequest::get(Self::PATH, call.args.to_query());
        fetch_listing(&call, request, None, "Retrieved organizations", "organizations").await
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
