//! Workspace summary API.

use aetherforge_smoke_core::CheckResult;
use async_trait::async_trait;
use serde_json::Value;

use super::{RunContext, Step};
use crate::error::Result;

/// Workspace summary endpoint.
pub const WORKSPACE_PATH: &str = "/api/workspace";

/// User A's workspace summary is served as a JSON object.
#[derive(Debug, Clone, Copy, Default)]
pub struct WorkspaceStep;

#[async_trait]
impl Step for WorkspaceStep {
    fn name(&self) -> &'static str {
        "workspace"
    }

    async fn execute(&self, ctx: &mut RunContext) -> Result<Vec<CheckResult>> {
        let response = ctx.primary.get(WORKSPACE_PATH).await?;
        let payload = response.json()?;

        Ok(vec![
            CheckResult::new("workspace_200", response.is_ok(), response.status.to_string()),
            CheckResult::new(
                "workspace_shape",
                payload.get("workspace").is_some_and(Value::is_object),
                "workspace object",
            ),
        ])
    }
}
