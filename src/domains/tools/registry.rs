//! Tool Registry - central registration and dispatch for all tools.
//!
//! This module provides:
//! - An immutable name → definition map, built once at startup
//! - Dispatch of tool calls for every transport
//! - Tool metadata for listing

use std::collections::HashMap;
use std::sync::Arc;

use rmcp::model::{CallToolResult, JsonObject, Tool};
use tracing::{debug, warn};

use super::definition::ToolDefinition;
use super::definitions::all_tools;
use super::error::ToolError;
use crate::core::api::Dispatcher;

// ============================================================================
// Tool Registry
// ============================================================================

/// Tool registry - manages all available tools.
///
/// Built by [`ToolRegistry::build`] and never mutated afterwards, so it can be
/// shared behind an `Arc` by every transport.
#[derive(Debug)]
pub struct ToolRegistry {
    tools: HashMap<&'static str, ToolDefinition>,
}

impl ToolRegistry {
    /// Build a registry from definitions. Fails on the first duplicate name.
    pub fn build(definitions: Vec<ToolDefinition>) -> Result<Self, ToolError> {
        let mut tools = HashMap::with_capacity(definitions.len());
        for definition in definitions {
            let name = definition.name();
            if tools.insert(name, definition).is_some() {
                return Err(ToolError::DuplicateName(name.to_string()));
            }
        }
        debug!("Registered {} tools", tools.len());
        Ok(Self { tools })
    }

    /// Registry holding every tool this server offers.
    pub fn with_all_tools() -> Result<Self, ToolError> {
        Self::build(all_tools())
    }

    pub fn get(&self, name: &str) -> Option<&ToolDefinition> {
        self.tools.get(name)
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    /// Get all tool names, sorted.
    pub fn tool_names(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.tools.keys().copied().collect();
        names.sort_unstable();
        names
    }

    /// Get all tools as Tool models (metadata), sorted by name.
    ///
    /// This is the single source of truth for all available tools.
    /// Both HTTP and STDIO/TCP transports use this to get tool metadata.
    pub fn tools(&self) -> Vec<Tool> {
        self.tool_names()
            .into_iter()
            .filter_map(|name| self.get(name))
            .map(ToolDefinition::to_tool)
            .collect()
    }

    /// Look up and invoke a tool.
    ///
    /// Only an unknown name is an error; everything that happens inside the
    /// tool comes back as an envelope.
    pub async fn call(
        &self,
        name: &str,
        arguments: Option<&JsonObject>,
        api: Arc<dyn Dispatcher>,
    ) -> Result<CallToolResult, ToolError> {
        let definition = self.lookup(name)?;
        Ok(definition.invoke(arguments, api).await)
    }

    /// Dispatch an HTTP tool call, where arguments arrive as any JSON value.
    #[cfg(feature = "http")]
    pub async fn call_value(
        &self,
        name: &str,
        arguments: &serde_json::Value,
        api: Arc<dyn Dispatcher>,
    ) -> Result<CallToolResult, ToolError> {
        let definition = self.lookup(name)?;
        Ok(definition.invoke_value(arguments, api).await)
    }

    fn lookup(&self, name: &str) -> Result<&ToolDefinition, ToolError> {
        self.get(name).ok_or_else(|| {
            warn!("Unknown tool requested: {}", name);
            ToolError::not_found(name)
        })
    }
}
