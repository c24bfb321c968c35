//! Test run tools.
//!
//! A run groups tests of one project for an execution cycle and tracks a
//! result status per test.

pub mod create;
pub mod delete;
pub mod detail;
pub mod list;
pub mod test_status;
pub mod update;

pub use create::CreateRunTool;
pub use delete::DeleteRunTool;
pub use detail::GetRunDetailTool;
pub use list::GetRunsListTool;
pub use test_status::UpdateTestStatusTool;
pub use update::UpdateRunTool;

/// Lifecycle states of a run.
pub const RUN_STATES: &[&str] = &["open", "in-progress", "closed"];

/// Result statuses of a test inside a run.
pub const TEST_STATUSES: &[&str] = &["untested", "passed", "failed", "retest", "skipped"];
