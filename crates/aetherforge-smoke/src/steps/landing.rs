//! Landing page renders and carries the brand.

use aetherforge_smoke_core::CheckResult;
use async_trait::async_trait;

use super::{RunContext, Step};
use crate::error::Result;

/// `GET /` answers 200 with the brand string in the body.
#[derive(Debug, Clone, Copy, Default)]
pub struct LandingStep;

#[async_trait]
impl Step for LandingStep {
    fn name(&self) -> &'static str {
        "landing"
    }

    async fn execute(&self, ctx: &mut RunContext) -> Result<Vec<CheckResult>> {
        let landing = ctx.anonymous.get("/").await?;
        let brand = &ctx.config.brand;

        Ok(vec![
            CheckResult::new("landing_200", landing.is_ok(), landing.status.to_string()),
            CheckResult::new(
                "landing_brand",
                landing.body.contains(brand.as_str()),
                format!("{brand} in body"),
            ),
        ])
    }
}
