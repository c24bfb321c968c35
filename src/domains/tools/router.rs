//! Tool Router - builds the rmcp ToolRouter from the registry.
//!
//! This module builds the ToolRouter for STDIO/TCP transport. Every route
//! delegates to [`ToolRegistry::call`], so rmcp and the HTTP transport share
//! one dispatch path.

use std::sync::Arc;

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, ToolRouter},
};

use super::error::ToolError;
use super::registry::ToolRegistry;
use crate::core::api::Dispatcher;

/// Build the tool router with all registered tools.
pub fn build_tool_router<S>(registry: Arc<ToolRegistry>, api: Arc<dyn Dispatcher>) -> ToolRouter<S>
where
    S: Send + Sync + 'static,
{
    registry
        .tools()
        .into_iter()
        .fold(ToolRouter::new(), |router, tool| {
            router.with_route(create_route(tool, registry.clone(), api.clone()))
        })
}

fn create_route<S>(
    tool: rmcp::model::Tool,
    registry: Arc<ToolRegistry>,
    api: Arc<dyn Dispatcher>,
) -> ToolRoute<S>
where
    S: Send + Sync + 'static,
{
    let name = tool.name.clone();
    ToolRoute::new_dyn(tool, move |ctx: ToolCallContext<'_, S>| {
        let args = ctx.arguments.clone();
        let registry = registry.clone();
        let api = api.clone();
        let name = name.clone();
        async move {
            registry
                .call(&name, args.as_ref(), api)
                .await
                .map_err(to_mcp_error)
        }
        .boxed()
    })
}

/// Protocol-level failures. Tool failures never get here.
pub(crate) fn to_mcp_error(error: ToolError) -> McpError {
    match error {
        ToolError::NotFound(_) | ToolError::Validation(_) => {
            McpError::invalid_params(error.to_string(), None)
        }
        other => McpError::internal_error(other.to_string(), None),
    }
}
