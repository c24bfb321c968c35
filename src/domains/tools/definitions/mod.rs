//! Tool definitions module.
//!
//! One file per tool, grouped by the backend resource they act on. Every
//! tool exposes `NAME`, `contract()`, `execute()` and `definition()`.

pub mod cases;
pub mod common;
pub mod labels;
pub mod orgs;
pub mod projects;
pub mod runs;

pub use cases::{
    AddTestCommentTool, CreateTestTool, DeleteTestsTool, GetTestAttachmentsTool,
    GetTestDetailTool, GetTestHistoryTool, GetTestsListTool, UpdateTestTool,
};
pub use labels::{AddLabelsTool, DeleteLabelsTool, GetProjectLabelsTool};
pub use orgs::{GetOrgDetailTool, GetOrgUsersTool, GetOrgsListTool};
pub use projects::{
    CreateProjectTool, DeleteProjectTool, GetProjectDetailTool, GetProjectsListTool,
    UpdateProjectTool,
};
pub use runs::{
    CreateRunTool, DeleteRunTool, GetRunDetailTool, GetRunsListTool, UpdateRunTool,
    UpdateTestStatusTool,
};

use super::definition::ToolDefinition;

/// Every tool this server offers.
pub fn all_tools() -> Vec<ToolDefinition> {
    vec![
        // Organizations
        GetOrgsListTool::definition(),
        GetOrgDetailTool::definition(),
        GetOrgUsersTool::definition(),
        // Projects
        GetProjectsListTool::definition(),
        GetProjectDetailTool::definition(),
        CreateProjectTool::definition(),
        UpdateProjectTool::definition(),
        DeleteProjectTool::definition(),
        // Labels
        GetProjectLabelsTool::definition(),
        AddLabelsTool::definition(),
        DeleteLabelsTool::definition(),
        // Runs
        GetRunsListTool::definition(),
        GetRunDetailTool::definition(),
        CreateRunTool::definition(),
        UpdateRunTool::definition(),
        DeleteRunTool::definition(),
        UpdateTestStatusTool::definition(),
        // Tests
        GetTestsListTool::definition(),
        GetTestDetailTool::definition(),
        CreateTestTool::definition(),
        UpdateTestTool::definition(),
        DeleteTestsTool::definition(),
        AddTestCommentTool::definition(),
        GetTestHistoryTool::definition(),
        GetTestAttachmentsTool::definition(),
    ]
}
