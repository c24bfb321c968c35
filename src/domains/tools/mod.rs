//! Tools domain module.
//!
//! Every tool wraps exactly one backend REST call behind a declared
//! parameter contract.
//!
//! ## Architecture
//!
//! - `contract.rs` - Parameter contracts: validation, input schema, usage hints
//! - `definition.rs` - `ToolDefinition` and the shared failure boundary
//! - `response.rs` - Success, not-found and error envelopes
//! - `definitions/` - Individual tool implementations (one file per tool)
//! - `registry.rs` - Immutable name → definition map, dispatch for every transport
//! - `router.rs` - rmcp `ToolRouter` built from the registry (STDIO/TCP)
//! - `error.rs` - Tool-specific error types
//!
//! ## Adding a New Tool
//!
//! 1. Create a file under the matching `definitions/<resource>/` folder
//! 2. Declare `NAME`, `contract()`, `execute()` and `definition()`
//! 3. Add it to `definitions::all_tools()`
//!
//! The registry, router and HTTP transport pick it up from there.

pub mod contract;
pub mod definition;
pub mod definitions;
mod error;
mod registry;
pub mod response;
pub mod router;

pub use contract::{ParamContract, ParamKind, ToolArgs, UsageHint, ValidationError};
pub use definition::{FailureHint, ToolDefinition, ToolInvocation};
pub use error::{ErrorKind, ToolError};
pub use registry::ToolRegistry;
pub use router::build_tool_router;
