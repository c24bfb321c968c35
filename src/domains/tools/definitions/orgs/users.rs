//! Organization members tool.

use futures::FutureExt;
use rmcp::model::CallToolResult;
use serde::Deserialize;

use crate::core::api::ApiRequest;
use crate::domains::tools::ToolError;
use crate::domains::tools::contract::{ParamContract, ParamKind};
use crate::domains::tools::definition::{FailureHint, ToolDefinition, ToolInvocation};
use crate::domains::tools::definitions::common::{Anchor, fetch_listing};

use super::GetOrgsListTool;

/// Parameters for `GetOrgUsersTool`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetOrgUsersParams {
    /// Organization whose users are listed.
    pub org_id: u64,
}

/// Lists the members of an organization.
pub struct GetOrgUsersTool;

impl GetOrgUsersTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "get-org-users";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "List the users of an organization with their roles. \
         Useful to find assignees for runs and tests.";

    const PATH: &'static str = "api/v1/org/users";

    const FAILURE: FailureHint = FailureHint::new(
        "list organization users",
        "Use `get-orgs-list` to find valid organization IDs.",
    );

    pub fn contract() -> ParamContract {
        ParamContract::new().required("orgId", ParamKind::ID, "Organization ID")
    }

    pub async fn execute(call: ToolInvocation) -> Result<CallToolResult, ToolError> {
        let GetOrgUsersParams { org_id } = call.args.parse()?;
        let request = ApiRequest::get(Self::PATH, call.args.to_query());
        fetch_listing(
            &call,
            request,
            Some(Anchor::new("Organization", org_id, GetOrgsListTool::NAME)),
            &format!("Retrieved users of organization {org_id}"),
            "users",
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
