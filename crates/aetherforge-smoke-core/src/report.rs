//! Run reports and console rendering.
//!
//! The rendered format is scraped by CI, so every line written here is part of
//! the external interface:
//!
//! - one `<name>: PASS|FAIL (<detail>)` line per check, in run order
//! - `Passed <k>/<n> checks`
//! - [`SUCCESS_SENTINEL`] when every check passed

use serde::Serialize;
use std::fmt;
use std::io::{self, Write};

use crate::check::CheckResult;

/// Final line printed when every check passed.
pub const SUCCESS_SENTINEL: &str = "PRE_PHASE3_SMOKE_PASS";

/// Pass/fail counts for a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ReportSummary {
    /// Number of passing checks.
    pub passed: usize,
    /// Number of failing checks.
    pub failed: usize,
    /// Total number of checks.
    pub total: usize,
}

impl fmt::Display for ReportSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Passed {}/{} checks", self.passed, self.total)
    }
}

/// Ordered results of one smoke run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RunReport {
    checks: Vec<CheckResult>,
}

impl RunReport {
    /// Create an empty report.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a result, keeping run order.
    pub fn push(&mut self, check: CheckResult) {
        self.checks.push(check);
    }

    /// Append several results, keeping their order.
    pub fn extend(&mut self, checks: impl IntoIterator<Item = CheckResult>) {
        self.checks.extend(checks);
    }

    /// All results in run order.
    #[must_use]
    pub fn checks(&self) -> &[CheckResult] {
        &self.checks
    }

    /// Look up a result by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&CheckResult> {
        self.checks.iter().find(|c| c.name() == name)
    }

    /// Number of recorded checks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.checks.len()
    }

    /// Whether no check was recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.checks.is_empty()
    }

    /// Failed checks in run order.
    pub fn failures(&self) -> impl Iterator<Item = &CheckResult> {
        self.checks.iter().filter(|c| !c.ok())
    }

    /// Pass/fail counts.
    #[must_use]
    pub fn summary(&self) -> ReportSummary {
        let failed = self.failures().count();
        ReportSummary {
            passed: self.checks.len() - failed,
            failed,
            total: self.checks.len(),
        }
    }

    /// Whether the run succeeded. A report without checks verified nothing and
    /// does not count as a success.
    #[must_use]
    pub fn all_ok(&self) -> bool {
        !self.checks.is_empty() && self.checks.iter().all(CheckResult::ok)
    }

    /// Process exit status for this report: `0` on success, `1` otherwise.
    #[must_use]
    pub fn exit_status(&self) -> u8 {
        u8::from(!self.all_ok())
    }

    /// Write the console report.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to `out` fails.
    pub fn render(&self, out: &mut impl Write) -> io::Result<()> {
        for check in &self.checks {
            writeln!(out, "{check}")?;
        }
        writeln!(out, "{}", self.summary())?;
        if self.all_ok() {
            writeln!(out, "{SUCCESS_SENTINEL}")?;
        }
        Ok(())
    }
}

impl FromIterator<CheckResult> for RunReport {
    fn from_iter<I: IntoIterator<Item = CheckResult>>(iter: I) -> Self {
        Self {
            checks: iter.into_iter().collect(),
        }
    }
}

/// Write the single diagnostic line for a run that aborted with a runtime fault.
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn render_runtime_error(out: &mut impl Write, error: &dyn fmt::Display) -> io::Result<()> {
    writeln!(out, "Smoke test failed with runtime error: {error}")
}
