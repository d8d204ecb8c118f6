// @zen-component: MCP-AuditHook
//
//! Audit hook — logs every MCP tool call with its outcome and latency.
//!
//! Always first in the pipeline, so its `after_call` runs last and sees the
//! final outcome.

use async_trait::async_trait;
use tracing::{info, warn};

use super::{HookContext, HookError, ToolCallOutcome, ToolHook};

/// Audit hook: records every tool call in the log.
pub struct AuditHook;

#[async_trait]
impl ToolHook for AuditHook {
    async fn before_call(
        &self,
        ctx: &HookContext,
        params: &mut serde_json::Value,
    ) -> Result<(), HookError> {
        tracing::debug!(tool = %ctx.tool_name, %params, "tool call started");
        Ok(())
    }

    async fn after_call(
        &self,
        ctx: &HookContext,
        outcome: &mut ToolCallOutcome,
    ) -> Result<(), HookError> {
        let elapsed_ms = (chrono::Utc::now() - ctx.timestamp).num_milliseconds();
        match outcome {
            ToolCallOutcome::Success(_) => {
                info!(tool = %ctx.tool_name, elapsed_ms, "tool call succeeded");
            }
            ToolCallOutcome::Error(message) => {
                warn!(tool = %ctx.tool_name, elapsed_ms, "tool call failed: {message}");
            }
        }
        Ok(())
    }
}
