//! The ordered smoke script.
//!
//! Each [`Step`] performs one user journey against the application and turns
//! what it observed into one or more [`CheckResult`]s. Steps share a
//! [`RunContext`] that owns the sessions and the state one step hands to the
//! next (the generated artifact id, its concepts).
//!
//! A step marked [`Step::blocking`] ends the run when any of its checks
//! fails; everything downstream of it would only report noise.

mod artifact;
mod auth;
mod concept;
mod guard;
mod isolation;
mod landing;
mod learn;
mod workspace;

use std::time::Duration;

use aetherforge_smoke_core::{ArtifactId, CheckResult};
use async_trait::async_trait;

use crate::config::{BaseUrl, SmokeConfig};
use crate::error::{Result, SmokeError};
use crate::session::{RedirectPolicy, Session};

pub use artifact::{
    ArtifactApiStep, ArtifactPageStep, GenerateArtifactStep, ARTIFACT_SECTIONS, GENERATE_PATH,
};
pub use auth::{sign_in, PrimarySignInStep, SIGN_IN_PAGE_PATH, SIGN_IN_PATH};
pub use concept::{ConceptPageStep, CONCEPT_EXAMPLES_MARKER};
pub use guard::{GuardRedirectStep, GUARD_REDIRECT_CODES};
pub use isolation::{IsolationStep, ARTIFACT_LIST_PATH};
pub use landing::LandingStep;
pub use learn::{LearnPageStep, LEARN_SECTIONS};
pub use workspace::{WorkspaceStep, WORKSPACE_PATH};

/// One unit of the smoke script.
#[async_trait]
pub trait Step: Send + Sync {
    /// Short identifier used in logs.
    fn name(&self) -> &'static str;

    /// Whether a failed check in this step ends the run.
    fn blocking(&self) -> bool {
        false
    }

    /// Run the step.
    ///
    /// Assertion failures come back as failed checks. `Err` is reserved for
    /// faults that abort the run: transport errors, unparseable JSON.
    async fn execute(&self, ctx: &mut RunContext) -> Result<Vec<CheckResult>>;
}

/// The script in execution order.
#[must_use]
pub fn default_steps() -> Vec<Box<dyn Step>> {
    vec![
        Box::new(LandingStep),
        Box::new(GuardRedirectStep),
        Box::new(PrimarySignInStep),
        Box::new(LearnPageStep),
        Box::new(GenerateArtifactStep),
        Box::new(ArtifactPageStep),
        Box::new(ArtifactApiStep),
        Box::new(ConceptPageStep),
        Box::new(IsolationStep),
        Box::new(WorkspaceStep),
    ]
}

/// State owned by one run and lent to each step in turn.
#[derive(Debug)]
pub struct RunContext {
    /// Run configuration.
    pub config: SmokeConfig,
    /// Validated application origin.
    pub base: BaseUrl,
    /// Anonymous session that follows redirects like a first-time visitor.
    pub anonymous: Session,
    /// Anonymous session that never follows redirects.
    pub guard: Session,
    /// User A, who generates the artifact.
    pub primary: Session,
    /// User B, who must not see user A's artifact.
    pub secondary: Session,
    /// Artifact generated by user A, once generation succeeded.
    pub artifact_id: Option<ArtifactId>,
    /// Concepts listed for the artifact by the JSON API.
    pub concepts: Vec<serde_json::Value>,
}

impl RunContext {
    /// Validate the configuration and build the independent sessions.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or an HTTP client
    /// cannot be built.
    pub fn new(config: SmokeConfig) -> Result<Self> {
        let base = config.validate()?;
        let timeout = Duration::from_secs(config.timeout_seconds);

        let anonymous = Session::new("anonymous", base.clone(), RedirectPolicy::Follow, timeout)?;
        let guard = Session::new("guard", base.clone(), RedirectPolicy::Never, timeout)?;
        let primary = Session::new("alice", base.clone(), RedirectPolicy::Follow, timeout)?;
        let secondary = Session::new("bob", base.clone(), RedirectPolicy::Follow, timeout)?;

        Ok(Self {
            config,
            base,
            anonymous,
            guard,
            primary,
            secondary,
            artifact_id: None,
            concepts: Vec::new(),
        })
    }

    /// The generated artifact id, or an error naming the step that needed it.
    ///
    /// # Errors
    ///
    /// Returns [`SmokeError::MissingState`] if no artifact was generated yet.
    pub fn require_artifact(&self, step: &'static str) -> Result<ArtifactId> {
        self.artifact_id.clone().ok_or(SmokeError::MissingState {
            step,
            what: "a generated artifact id",
        })
    }
}
