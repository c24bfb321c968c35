//! Label deletion tool.

use futures::FutureExt;
use rmcp::model::CallToolResult;
use serde::{Deserialize, Serialize};

use crate::core::api::ApiRequest;
use crate::domains::tools::ToolError;
use crate::domains::tools::contract::{ParamContract, ParamKind};
use crate::domains::tools::definition::{FailureHint, ToolDefinition, ToolInvocation};
use crate::domains::tools::definitions::common::{Anchor, fetch_record, json_body, plural};
use crate::domains::tools::definitions::projects::GetProjectsListTool;

/// Parameters for `DeleteLabelsTool`.
#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteLabelsParams {
    /// Project the labels belong to.
    pub project_id: u64,

    /// Labels to delete.
    pub label_ids: Vec<u64>,
}

/// Deletes labels from a project.
pub struct DeleteLabelsTool;

impl DeleteLabelsTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "delete-labels";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Delete labels from a project by ID. \
         Tests keep existing but lose the deleted labels.";

    const PATH: &'static str = "api/v1/label/delete";

    const FAILURE: FailureHint = FailureHint::new(
        "delete labels",
        "Use `get-project-labels` to find valid label IDs.",
    );

    pub fn contract() -> ParamContract {
        ParamContract::new()
            .required("projectId", ParamKind::ID, "Project ID")
            .required("labelIds", ParamKind::ID_LIST, "IDs of the labels to delete")
    }

    pub async fn execute(call: ToolInvocation) -> Result<CallToolResult, ToolError> {
        let params: DeleteLabelsParams = call.args.parse()?;
        let project_id = params.project_id;
        let removed = plural(params.label_ids.len(), "label", "labels");
        let request = ApiRequest::delete(Self::PATH, json_body(&params)?);
        fetch_record(
            &call,
            request,
            Anchor::new("Project", project_id, GetProjectsListTool::NAME),
            &format!("Deleted {removed} from project {project_id}"),
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
    async fn test_deletes_single_label() {
        let api = Arc::new(RecordingDispatcher::returning(json!({ "deleted": 1 })));
        let result = call(
            &DeleteLabelsTool::definition(),
            json!({ "projectId": 3, "labelIds": [31] }),
            &api,
        )
        .await;

        assert!(text_of(&result).starts_with("✅ Deleted 1 label from project 3"));
    }

    #[tokio::test]
    async fn test_label_ids_must_be_positive() {
        let api = Arc::new(RecordingDispatcher::returning(json!({ "deleted": 1 })));
        let result = call(
            &DeleteLabelsTool::definition(),
            json!({ "projectId": 3, "labelIds": [31, 0] }),
            &api,
        )
        .await;

        assert_eq!(result.is_error, Some(true));
        assert!(text_of(&result).contains("labelIds[1]"));
        assert_eq!(api.call_count(), 0);
    }
}
