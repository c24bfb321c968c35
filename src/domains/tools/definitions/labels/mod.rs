//! Label tools. Labels are project-scoped tags attached to tests.

pub mod add;
pub mod delete;
pub mod list;

pub use add::AddLabelsTool;
pub use delete::DeleteLabelsTool;
pub use list::GetProjectLabelsTool;
