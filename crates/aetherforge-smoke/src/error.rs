//! Runtime faults raised by the smoke driver.
//!
//! Assertion failures are not errors: they are recorded as failed
//! [`CheckResult`](aetherforge_smoke_core::CheckResult)s and the run goes on.
//! Anything in this enum aborts the whole run.

/// Result type for smoke driver operations.
pub type Result<T> = std::result::Result<T, SmokeError>;

/// Errors that abort a smoke run.
#[derive(Debug, thiserror::Error)]
pub enum SmokeError {
    /// Transport failure: connection refused, timeout, DNS, TLS.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// A response body that had to be JSON could not be parsed.
    #[error("invalid JSON from {path}: {source}")]
    Json {
        /// Request path that produced the body.
        path: String,
        /// Parse error.
        #[source]
        source: serde_json::Error,
    },

    /// The base URL is not an absolute http(s) origin.
    #[error("invalid base URL {url:?}: {reason}")]
    InvalidBaseUrl {
        /// The rejected value.
        url: String,
        /// Why it was rejected.
        reason: String,
    },

    /// Invalid configuration value.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// A step ran before the step that produces the state it needs.
    #[error("step {step} requires {what} from an earlier step")]
    MissingState {
        /// The step that could not run.
        step: &'static str,
        /// The missing piece of state.
        what: &'static str,
    },
}
