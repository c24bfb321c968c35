//! Organization tools.
//!
//! Organizations are the top of the hierarchy: every project belongs to one.
//! `get-orgs-list` is the lookup other tools point callers at when an
//! organization id turns out to be wrong.

pub mod detail;
pub mod list;
pub mod users;

pub use detail::GetOrgDetailTool;
pub use list::GetOrgsListTool;
pub use users::GetOrgUsersTool;
