//! The authenticated learn page.

use aetherforge_smoke_core::CheckResult;
use async_trait::async_trait;

use super::{RunContext, Step};
use crate::error::Result;

/// Regions the learn page renders for a signed-in user.
pub const LEARN_SECTIONS: [&str; 3] = [
    "Generate concept graph artifact",
    "Artifacts",
    "Concept explorer",
];

/// User A fetches the protected page and sees every section.
#[derive(Debug, Clone, Copy, Default)]
pub struct LearnPageStep;

#[async_trait]
impl Step for LearnPageStep {
    fn name(&self) -> &'static str {
        "learn_page"
    }

    async fn execute(&self, ctx: &mut RunContext) -> Result<Vec<CheckResult>> {
        let page = ctx.primary.get(&ctx.config.protected_path).await?;

        Ok(vec![
            CheckResult::new("alice_learn_200", page.is_ok(), page.status.to_string()),
            CheckResult::new(
                "learn_sections",
                page.contains_all(&LEARN_SECTIONS),
                "learn sections visible",
            ),
        ])
    }
}
