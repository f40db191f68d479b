//! Form sign-in.

use aetherforge_smoke_core::CheckResult;
use async_trait::async_trait;

use super::{RunContext, Step};
use crate::error::Result;
use crate::session::{PageResponse, Session};

/// Sign-in form endpoint.
pub const SIGN_IN_PATH: &str = "/api/auth/sign-in";

/// Page anonymous visitors are sent to.
pub const SIGN_IN_PAGE_PATH: &str = "/sign-in";

/// Submit the sign-in form for `email`, asking to land on `next`.
///
/// The application answers with a 303 to `next` and a session cookie; a
/// following session ends on the `next` page.
///
/// # Errors
///
/// Returns an error on transport failure.
pub async fn sign_in(session: &Session, email: &str, next: &str) -> Result<PageResponse> {
    session
        .post_form(SIGN_IN_PATH, &[("email", email), ("next", next)])
        .await
}

/// User A signs in and lands on the protected page.
#[derive(Debug, Clone, Copy, Default)]
pub struct PrimarySignInStep;

#[async_trait]
impl Step for PrimarySignInStep {
    fn name(&self) -> &'static str {
        "primary_sign_in"
    }

    async fn execute(&self, ctx: &mut RunContext) -> Result<Vec<CheckResult>> {
        let response = sign_in(
            &ctx.primary,
            &ctx.config.primary_email,
            &ctx.config.protected_path,
        )
        .await?;

        Ok(vec![CheckResult::new(
            "alice_signin",
            response.is_ok(),
            response.status.to_string(),
        )])
    }
}
