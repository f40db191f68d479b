//! Tenant isolation between two users.

use aetherforge_smoke_core::CheckResult;
use async_trait::async_trait;
use tracing::warn;

use super::auth::sign_in;
use super::{RunContext, Step};
use crate::error::Result;
use crate::session::PageResponse;

/// Artifact listing for the signed-in user.
pub const ARTIFACT_LIST_PATH: &str = "/api/concepts/artifacts";

/// User B signs in and must not find user A's artifact id anywhere in their
/// artifact listing.
///
/// The check only passes when user B actually signed in and the listing
/// answered 200; an unauthenticated or failing listing proves nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct IsolationStep;

#[async_trait]
impl Step for IsolationStep {
    fn name(&self) -> &'static str {
        "isolation"
    }

    async fn execute(&self, ctx: &mut RunContext) -> Result<Vec<CheckResult>> {
        let artifact_id = ctx.require_artifact(self.name())?;

        let signed_in = sign_in(
            &ctx.secondary,
            &ctx.config.secondary_email,
            &ctx.config.protected_path,
        )
        .await?;
        if !signed_in.is_ok() {
            warn!(status = signed_in.status, "secondary user sign-in did not land on 200");
        }

        let listing = ctx.secondary.get(ARTIFACT_LIST_PATH).await?;
        let leaked = listing.body.contains(artifact_id.as_str());

        let detail = isolation_detail(artifact_id.as_str(), &signed_in, &listing, leaked);
        let ok = signed_in.is_ok() && listing.is_ok() && !leaked;

        Ok(vec![CheckResult::new("isolation", ok, detail)])
    }
}

fn isolation_detail(
    artifact_id: &str,
    signed_in: &PageResponse,
    listing: &PageResponse,
    leaked: bool,
) -> String {
    if leaked {
        format!("alice artifact {artifact_id} visible to bob")
    } else if !signed_in.is_ok() {
        format!("bob sign-in returned {}", signed_in.status)
    } else if !listing.is_ok() {
        format!("bob artifact listing returned {}", listing.status)
    } else {
        "alice artifact hidden from bob".to_string()
    }
}
