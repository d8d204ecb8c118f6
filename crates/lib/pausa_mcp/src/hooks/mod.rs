// @zen-component: MCP-HookPipeline
//
//! Hook/middleware pipeline for MCP tool calls.
//!
//! Hooks run before and after every tool call. A before hook may rewrite the
//! call's arguments or reject it; an after hook may rewrite the outcome the
//! client receives. The built-in audit hook logs every call outcome.

pub mod audit;

use std::sync::Arc;

use async_trait::async_trait;

/// Context passed to hooks for each tool call.
#[derive(Debug, Clone)]
pub struct HookContext {
    pub tool_name: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

impl HookContext {
    /// Context for a call starting now.
    pub fn new(tool_name: &str) -> Self {
        Self {
            tool_name: tool_name.to_string(),
            timestamp: chrono::Utc::now(),
        }
    }
}

/// Outcome of a tool call, passed to after_call hooks.
#[derive(Debug, Clone)]
pub enum ToolCallOutcome {
    Success(serde_json::Value),
    Error(String),
}

/// Errors that can occur in hooks.
#[derive(Debug, thiserror::Error)]
pub enum HookError {
    #[error("Rejected: {0}")]
    Rejected(String),
}

/// Hook trait — implement for custom hook logic.
///
/// Hooks form an ordered pipeline. `before_call` runs in order; `after_call`
/// runs in reverse order (onion model).
#[async_trait]
pub trait ToolHook: Send + Sync {
    /// Called before tool execution. Return Err to reject the call.
    async fn before_call(
        &self,
        ctx: &HookContext,
        params: &mut serde_json::Value,
    ) -> Result<(), HookError>;

    /// Called after tool execution. Can inspect or transform the outcome.
    async fn after_call(
        &self,
        ctx: &HookContext,
        outcome: &mut ToolCallOutcome,
    ) -> Result<(), HookError>;
}

/// Ordered pipeline of hooks.
pub struct HookPipeline {
    hooks: Vec<Arc<dyn ToolHook>>,
}

impl HookPipeline {
    /// Create a new pipeline from an ordered list of hooks.
    pub fn new(hooks: Vec<Arc<dyn ToolHook>>) -> Self {
        Self { hooks }
    }

    /// Run all before_call hooks in order. Short-circuits on error.
    pub async fn run_before(
        &self,
        ctx: &HookContext,
        params: &mut serde_json::Value,
    ) -> Result<(), HookError> {
        for hook in &self.hooks {
            hook.before_call(ctx, params).await?;
        }
        Ok(())
    }

    /// Run all after_call hooks in reverse order.
    pub async fn run_after(
        &self,
        ctx: &HookContext,
        outcome: &mut ToolCallOutcome,
    ) -> Result<(), HookError> {
        for hook in self.hooks.iter().rev() {
            hook.after_call(ctx, outcome).await?;
        }
        Ok(())
    }
}

/// Build the default hook pipeline with built-in hooks.
pub fn default_pipeline() -> HookPipeline {
    HookPipeline::new(vec![Arc::new(audit::AuditHook)])
}
