//! Tool definitions and the shared failure boundary.
//!
//! A [`ToolDefinition`] bundles what a client sees (name, description,
//! input schema) with what runs (contract + handler). [`ToolDefinition::invoke`]
//! is the single place where arguments are validated, the handler is run,
//! and every failure, panics included, is turned into an error envelope.

use std::fmt;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;

use futures::FutureExt;
use futures::future::BoxFuture;
use rmcp::model::{CallToolResult, JsonObject, Tool};
use serde_json::Value;
use tracing::{error, info, instrument, warn};

use super::contract::{ParamContract, ToolArgs, UsageHint, ValidationError};
use super::error::ToolError;
use super::response::{format_tool_error, format_unknown_error};
use crate::core::api::Dispatcher;

/// Future returned by a tool handler.
pub type ToolFuture = BoxFuture<'static, Result<CallToolResult, ToolError>>;

/// A tool handler. Receives validated arguments and its dispatcher explicitly.
pub type ToolHandler = fn(ToolInvocation) -> ToolFuture;

/// Everything a handler may use for one call.
pub struct ToolInvocation {
    /// Arguments that passed the tool's contract.
    pub args: ToolArgs,

    /// Backend dispatcher for this server.
    pub api: Arc<dyn Dispatcher>,

    /// Usage hints rendered from the contract.
    pub hints: Arc<[UsageHint]>,
}

/// What a tool was trying to do, and what the caller should try next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FailureHint {
    /// Verb phrase completing "Failed to ...".
    pub action: &'static str,

    /// Tip shown under every error from this tool.
    pub remediation: &'static str,
}

impl FailureHint {
    pub const fn new(action: &'static str, remediation: &'static str) -> Self {
        Self {
            action,
            remediation,
        }
    }
}

/// A registered tool. Immutable once built.
pub struct ToolDefinition {
    name: &'static str,
    description: &'static str,
    contract: ParamContract,
    failure: FailureHint,
    hints: Arc<[UsageHint]>,
    handler: ToolHandler,
}

impl ToolDefinition {
    pub fn new(
        name: &'static str,
        description: &'static str,
        contract: ParamContract,
        failure: FailureHint,
        handler: ToolHandler,
    ) -> Self {
        let hints = contract.usage_hints().into();
        Self {
            name,
            description,
            contract,
            failure,
            hints,
            handler,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn description(&self) -> &'static str {
        self.description
    }

    pub fn contract(&self) -> &ParamContract {
        &self.contract
    }

    /// Create a Tool model for this definition (metadata).
    pub fn to_tool(&self) -> Tool {
        Tool {
            name: self.name.into(),
            description: Some(self.description.into()),
            input_schema: self.contract.input_schema(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }

    /// Run the tool on raw MCP arguments. Always yields an envelope.
    #[instrument(skip_all, fields(tool = self.name))]
    pub async fn invoke(&self, raw: Option<&JsonObject>, api: Arc<dyn Dispatcher>) -> CallToolResult {
        match self.contract.validate(raw) {
            Ok(args) => self.run(args, api).await,
            Err(e) => self.reject(e),
        }
    }

    /// Run the tool on an arbitrary JSON value (HTTP transport).
    #[instrument(skip_all, fields(tool = self.name))]
    pub async fn invoke_value(&self, raw: &Value, api: Arc<dyn Dispatcher>) -> CallToolResult {
        match self.contract.validate_value(raw) {
            Ok(args) => self.run(args, api).await,
            Err(e) => self.reject(e),
        }
    }

    fn reject(&self, e: ValidationError) -> CallToolResult {
        warn!("Rejected arguments for {}: {}", self.name, e);
        format_tool_error(&ToolError::from(e), self.failure.action, self.failure.remediation)
    }

    async fn run(&self, args: ToolArgs, api: Arc<dyn Dispatcher>) -> CallToolResult {
        info!("Calling {}", self.name);
        let call = ToolInvocation {
            args,
            api,
            hints: self.hints.clone(),
        };

        match AssertUnwindSafe((self.handler)(call)).catch_unwind().await {
            Ok(Ok(result)) if result.content.is_empty() => {
                error!("{} produced an envelope without content", self.name);
                format_unknown_error(self.failure.action, self.failure.remediation)
            }
            Ok(Ok(result)) => result,
            Ok(Err(e)) => {
                warn!("{} failed: {}", self.name, e);
                format_tool_error(&e, self.failure.action, self.failure.remediation)
            }
            Err(_) => {
                error!("{} panicked", self.name);
                format_unknown_error(self.failure.action, self.failure.remediation)
            }
        }
    }
}

impl fmt::Debug for ToolDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ToolDefinition")
            .field("name", &self.name)
            .field("contract", &self.contract)
            .field("failure", &self.failure)
            .finish_non_exhaustive()
    }
}
