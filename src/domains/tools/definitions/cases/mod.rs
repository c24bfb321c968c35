//! Test case tools.
//!
//! Tests are the reusable case definitions of a project; runs reference
//! them by ID.

pub mod attachments;
pub mod comment;
pub mod create;
pub mod delete;
pub mod detail;
pub mod history;
pub mod list;
pub mod update;

pub use attachments::GetTestAttachmentsTool;
pub use comment::AddTestCommentTool;
pub use create::CreateTestTool;
pub use delete::DeleteTestsTool;
pub use detail::GetTestDetailTool;
pub use history::GetTestHistoryTool;
pub use list::GetTestsListTool;
pub use update::UpdateTestTool;

/// Test priorities, lowest first.
pub const PRIORITIES: &[&str] = &["low", "medium", "high", "critical"];
