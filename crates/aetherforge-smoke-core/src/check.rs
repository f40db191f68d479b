//! Individual check results.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The outcome of one named assertion.
///
/// A result is built once, at the point the condition is evaluated, and never
/// changes afterwards. The `name` is a stable identifier that CI log parsers
/// key on, so it is unique within a run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckResult {
    name: String,
    ok: bool,
    detail: String,
}

impl CheckResult {
    /// Create a result from an evaluated condition.
    #[must_use]
    pub fn new(name: impl Into<String>, ok: bool, detail: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ok,
            detail: detail.into(),
        }
    }

    /// Create a passing result.
    #[must_use]
    pub fn pass(name: impl Into<String>, detail: impl Into<String>) -> Self {
        Self::new(name, true, detail)
    }

    /// Create a failing result.
    #[must_use]
    pub fn fail(name: impl Into<String>, detail: impl Into<String>) -> Self {
        Self::new(name, false, detail)
    }

    /// Stable identifier of the check.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether the check passed.
    #[must_use]
    pub const fn ok(&self) -> bool {
        self.ok
    }

    /// Free-form diagnostic, e.g. the observed status code.
    #[must_use]
    pub fn detail(&self) -> &str {
        &self.detail
    }

    /// `"PASS"` or `"FAIL"`.
    #[must_use]
    pub const fn status_label(&self) -> &'static str {
        if self.ok {
            "PASS"
        } else {
            "FAIL"
        }
    }
}

impl fmt::Display for CheckResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} ({})", self.name, self.status_label(), self.detail)
    }
}
