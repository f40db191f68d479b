//! Artifact generation and the pages that render it.

use aetherforge_smoke_core::{ArtifactId, CheckResult};
use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;
use tracing::info;

use super::{RunContext, Step};
use crate::error::Result;

/// Generation endpoint.
pub const GENERATE_PATH: &str = "/api/concepts/generate";

/// Regions the artifact detail page renders.
pub const ARTIFACT_SECTIONS: [&str; 4] = [
    "Artifact v",
    "Concept graph",
    "Generated concepts",
    "Source:",
];

#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    topic: &'a str,
    difficulty: &'a str,
}

/// Outcome of reading `artifactId` from a generation response.
fn read_artifact_id(payload: &Value) -> (Option<ArtifactId>, String) {
    match payload.get("artifactId") {
        Some(Value::String(raw)) => match raw.parse::<ArtifactId>() {
            Ok(id) => (Some(id), raw.clone()),
            Err(e) => (None, format!("{raw} ({e})")),
        },
        Some(other) => (None, format!("artifactId is not a string: {other}")),
        None => (None, "missing artifactId".to_string()),
    }
}

/// User A generates a concept-graph artifact.
///
/// Blocking: without a valid artifact id none of the downstream steps mean
/// anything.
#[derive(Debug, Clone, Copy, Default)]
pub struct GenerateArtifactStep;

#[async_trait]
impl Step for GenerateArtifactStep {
    fn name(&self) -> &'static str {
        "generate_artifact"
    }

    fn blocking(&self) -> bool {
        true
    }

    async fn execute(&self, ctx: &mut RunContext) -> Result<Vec<CheckResult>> {
        let request = GenerateRequest {
            topic: &ctx.config.topic,
            difficulty: &ctx.config.difficulty,
        };
        let response = ctx.primary.post_json(GENERATE_PATH, &request).await?;
        let payload = response.json()?;

        let (artifact_id, detail) = read_artifact_id(&payload);
        if let Some(id) = &artifact_id {
            info!(artifact_id = %id, "artifact generated");
        }
        let ok = artifact_id.is_some();
        ctx.artifact_id = artifact_id;

        Ok(vec![CheckResult::new("generate_artifact", ok, detail)])
    }
}

/// The artifact detail page renders, and keeps rendering on reload.
#[derive(Debug, Clone, Copy, Default)]
pub struct ArtifactPageStep;

#[async_trait]
impl Step for ArtifactPageStep {
    fn name(&self) -> &'static str {
        "artifact_page"
    }

    async fn execute(&self, ctx: &mut RunContext) -> Result<Vec<CheckResult>> {
        let artifact_id = ctx.require_artifact(self.name())?;
        let path = format!("/learn/artifacts/{artifact_id}");

        let first = ctx.primary.get(&path).await?;
        let reload = ctx.primary.get(&path).await?;

        Ok(vec![
            CheckResult::new("artifact_200", first.is_ok(), first.status.to_string()),
            CheckResult::new(
                "artifact_reload_200",
                reload.is_ok(),
                reload.status.to_string(),
            ),
            CheckResult::new(
                "artifact_sections",
                first.contains_all(&ARTIFACT_SECTIONS),
                "artifact sections visible",
            ),
        ])
    }
}

/// The artifact JSON API returns the artifact object and its concept list.
///
/// The concept list is kept in the context for the concept page step.
#[derive(Debug, Clone, Copy, Default)]
pub struct ArtifactApiStep;

#[async_trait]
impl Step for ArtifactApiStep {
    fn name(&self) -> &'static str {
        "artifact_api"
    }

    async fn execute(&self, ctx: &mut RunContext) -> Result<Vec<CheckResult>> {
        let artifact_id = ctx.require_artifact(self.name())?;
        let response = ctx
            .primary
            .get(&format!("/api/concepts/artifacts/{artifact_id}"))
            .await?;
        let payload = response.json()?;

        let has_artifact = payload.get("artifact").is_some_and(Value::is_object);
        let concepts = payload.get("concepts").and_then(Value::as_array);
        ctx.concepts = concepts.cloned().unwrap_or_default();

        Ok(vec![CheckResult::new(
            "artifact_api_shape",
            has_artifact && concepts.is_some(),
            "artifact + concepts payload",
        )])
    }
}
