//! Sequential check runner.

use std::io::{self, Write};

use aetherforge_smoke_core::{render_runtime_error, CheckResult, RunReport};
use tracing::{info, instrument, warn};

use crate::config::SmokeConfig;
use crate::error::Result;
use crate::steps::{default_steps, RunContext, Step};

/// Runs an ordered list of steps against one application instance.
pub struct CheckRunner {
    config: SmokeConfig,
    steps: Vec<Box<dyn Step>>,
}

impl CheckRunner {
    /// Create a runner for the default smoke script.
    #[must_use]
    pub fn new(config: SmokeConfig) -> Self {
        Self::with_steps(config, default_steps())
    }

    /// Create a runner for a custom script.
    #[must_use]
    pub fn with_steps(config: SmokeConfig, steps: Vec<Box<dyn Step>>) -> Self {
        Self { config, steps }
    }

    /// Execute every step in order and collect their checks.
    ///
    /// A blocking step with a failed check ends the run early; the checks
    /// gathered so far are still returned.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or any step hits a
    /// runtime fault. No partial report is returned in that case.
    #[instrument(skip(self), fields(base_url = %self.config.base_url))]
    pub async fn run(&self) -> Result<RunReport> {
        let mut ctx = RunContext::new(self.config.clone())?;
        let mut report = RunReport::new();

        for step in &self.steps {
            info!(step = step.name(), "Running step");
            let checks = step.execute(&mut ctx).await?;

            let mut failed = false;
            for check in checks.iter().filter(|c| !c.ok()) {
                failed = true;
                warn!(check = check.name(), detail = check.detail(), "Check failed");
            }
            report.extend(checks);

            if failed && step.blocking() {
                warn!(step = step.name(), "Blocking step failed, skipping remaining steps");
                break;
            }
        }

        let summary = report.summary();
        info!(passed = summary.passed, total = summary.total, "Smoke run finished");
        Ok(report)
    }
}

impl std::fmt::Debug for CheckRunner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let steps: Vec<_> = self.steps.iter().map(|s| s.name()).collect();
        f.debug_struct("CheckRunner")
            .field("config", &self.config)
            .field("steps", &steps)
            .finish()
    }
}

/// Run the default smoke script.
///
/// # Errors
///
/// Returns an error on an invalid configuration or a runtime fault.
pub async fn run(config: SmokeConfig) -> Result<RunReport> {
    CheckRunner::new(config).run().await
}

/// Write the outcome of a run to `out` and return the process exit status.
///
/// A report is rendered in full. A runtime fault prints only the single
/// runtime-error line and always yields `1`.
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn report_outcome<W: Write>(outcome: Result<RunReport>, out: &mut W) -> io::Result<u8> {
    let status = match outcome {
        Ok(report) => {
            report.render(&mut *out)?;
            report.exit_status()
        }
        Err(e) => {
            render_runtime_error(&mut *out, &e)?;
            1
        }
    };
    out.flush()?;
    Ok(status)
}

/// Names of the checks a complete default run records, in order.
#[must_use]
pub fn expected_check_names() -> &'static [&'static str] {
    &[
        "landing_200",
        "landing_brand",
        "guard_redirect",
        "alice_signin",
        "alice_learn_200",
        "learn_sections",
        "generate_artifact",
        "artifact_200",
        "artifact_reload_200",
        "artifact_sections",
        "artifact_api_shape",
        "concept_200",
        "concept_examples",
        "isolation",
        "workspace_200",
        "workspace_shape",
    ]
}

/// Whether `report` has exactly the names of a complete default run.
#[must_use]
pub fn is_complete(report: &RunReport) -> bool {
    report
        .checks()
        .iter()
        .map(CheckResult::name)
        .eq(expected_check_names().iter().copied())
}
