//! Concept detail page for the first generated concept.

use aetherforge_smoke_core::{CheckResult, ConceptId};
use async_trait::async_trait;
use serde_json::Value;

use super::{RunContext, Step};
use crate::error::Result;

/// Section every concept page renders.
pub const CONCEPT_EXAMPLES_MARKER: &str = "Examples and case studies";

const NO_CONCEPT_ID: &str = "no concept id returned";

fn first_concept_id(concepts: &[Value]) -> Option<ConceptId> {
    concepts.first()?.get("id")?.as_str()?.parse().ok()
}

/// User A opens the first concept listed by the artifact API.
///
/// When the API listed no usable concept id, both checks fail without a
/// request being sent.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConceptPageStep;

#[async_trait]
impl Step for ConceptPageStep {
    fn name(&self) -> &'static str {
        "concept_page"
    }

    async fn execute(&self, ctx: &mut RunContext) -> Result<Vec<CheckResult>> {
        let Some(concept_id) = first_concept_id(&ctx.concepts) else {
            return Ok(vec![
                CheckResult::fail("concept_200", NO_CONCEPT_ID),
                CheckResult::fail("concept_examples", NO_CONCEPT_ID),
            ]);
        };

        let page = ctx.primary.get(&format!("/learn/{concept_id}")).await?;

        Ok(vec![
            CheckResult::new("concept_200", page.is_ok(), page.status.to_string()),
            CheckResult::new(
                "concept_examples",
                page.body.contains(CONCEPT_EXAMPLES_MARKER),
                "examples section visible",
            ),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn picks_first_concept() {
        let concepts = vec![json!({"id": "c-1", "title": "Consensus"}), json!({"id": "c-2"})];
        assert_eq!(first_concept_id(&concepts).unwrap().as_str(), "c-1");
    }

    #[test]
    fn no_usable_id() {
        assert!(first_concept_id(&[]).is_none());
        assert!(first_concept_id(&[json!({"title": "Consensus"})]).is_none());
        assert!(first_concept_id(&[json!({"id": 42})]).is_none());
        assert!(first_concept_id(&[json!("c-1")]).is_none());
    }
}
