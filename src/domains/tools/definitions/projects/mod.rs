//! Project tools.
//!
//! Projects live inside an organization and own labels, runs and tests.

pub mod create;
pub mod delete;
pub mod detail;
pub mod list;
pub mod update;

pub use create::CreateProjectTool;
pub use delete::DeleteProjectTool;
pub use detail::GetProjectDetailTool;
pub use list::GetProjectsListTool;
pub use update::UpdateProjectTool;
