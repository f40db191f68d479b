//! Protected pages bounce anonymous visitors to sign-in.

use aetherforge_smoke_core::CheckResult;
use async_trait::async_trait;
use reqwest::Url;

use super::auth::SIGN_IN_PAGE_PATH;
use super::{RunContext, Step};
use crate::error::Result;

/// Redirect statuses a guard may answer with (see other, temporary, permanent).
pub const GUARD_REDIRECT_CODES: [u16; 4] = [302, 303, 307, 308];

/// An anonymous `GET` of the protected page redirects to
/// `/sign-in?next=<protected path>`.
#[derive(Debug, Clone, Copy, Default)]
pub struct GuardRedirectStep;

#[async_trait]
impl Step for GuardRedirectStep {
    fn name(&self) -> &'static str {
        "guard_redirect"
    }

    async fn execute(&self, ctx: &mut RunContext) -> Result<Vec<CheckResult>> {
        let protected = ctx.config.protected_path.as_str();
        let response = ctx.guard.get(protected).await?;

        if (200..300).contains(&response.status) {
            return Ok(vec![CheckResult::fail("guard_redirect", "expected redirect")]);
        }

        let location = response.location.clone().unwrap_or_default();
        let ok = GUARD_REDIRECT_CODES.contains(&response.status)
            && response
                .redirect_target(&ctx.base)
                .is_some_and(|target| points_to_sign_in(&target, protected));

        Ok(vec![CheckResult::new(
            "guard_redirect",
            ok,
            format!("{} {location}", response.status),
        )])
    }
}

/// Whether `target` is the sign-in page with `next` decoding to `requested`.
fn points_to_sign_in(target: &Url, requested: &str) -> bool {
    target.path() == SIGN_IN_PAGE_PATH
        && target
            .query_pairs()
            .find(|(key, _)| key == "next")
            .is_some_and(|(_, next)| next == requested)
}
