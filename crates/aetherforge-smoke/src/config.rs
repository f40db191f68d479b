//! Smoke run configuration.

use reqwest::Url;

use crate::error::{Result, SmokeError};

/// Default application origin.
pub const DEFAULT_BASE_URL: &str = "http://localhost:3000";

/// Default per-request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 45;

/// Configuration for one smoke run.
///
/// Defaults describe the local development server. A few values can be
/// overridden from the environment; the CLI `--base-url` flag wins over
/// `AETHERFORGE_SMOKE_BASE_URL`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SmokeConfig {
    /// Application origin, e.g. `http://localhost:3000`.
    pub base_url: String,

    /// Timeout applied to every request, in seconds.
    pub timeout_seconds: u64,

    /// Brand string the landing page must contain.
    pub brand: String,

    /// Email of the user who generates the artifact ("user A").
    pub primary_email: String,

    /// Email of the user who must not see user A's data ("user B").
    pub secondary_email: String,

    /// Topic submitted for artifact generation.
    pub topic: String,

    /// Difficulty submitted for artifact generation.
    pub difficulty: String,

    /// Page that requires a session.
    pub protected_path: String,
}

impl Default for SmokeConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.into(),
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
            brand: "AetherForge".into(),
            primary_email: "alice.prephase3@example.com".into(),
            secondary_email: "bob.prephase3@example.com".into(),
            topic: "Distributed Systems".into(),
            difficulty: "intermediate".into(),
            protected_path: "/learn".into(),
        }
    }
}

impl SmokeConfig {
    /// Create a configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from environment variables, falling back to defaults.
    #[must_use]
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            base_url: std::env::var("AETHERFORGE_SMOKE_BASE_URL").unwrap_or(defaults.base_url),
            timeout_seconds: std::env::var("AETHERFORGE_SMOKE_TIMEOUT_SECONDS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.timeout_seconds),
            primary_email: std::env::var("AETHERFORGE_SMOKE_PRIMARY_EMAIL")
                .unwrap_or(defaults.primary_email),
            secondary_email: std::env::var("AETHERFORGE_SMOKE_SECONDARY_EMAIL")
                .unwrap_or(defaults.secondary_email),
            ..defaults
        }
    }

    /// Set the base URL.
    #[must_use]
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the request timeout.
    #[must_use]
    pub fn with_timeout_seconds(mut self, seconds: u64) -> Self {
        self.timeout_seconds = seconds;
        self
    }

    /// Set the two simulated users.
    #[must_use]
    pub fn with_users(mut self, primary: impl Into<String>, secondary: impl Into<String>) -> Self {
        self.primary_email = primary.into();
        self.secondary_email = secondary.into();
        self
    }

    /// Set the generation topic and difficulty.
    #[must_use]
    pub fn with_topic(mut self, topic: impl Into<String>, difficulty: impl Into<String>) -> Self {
        self.topic = topic.into();
        self.difficulty = difficulty.into();
        self
    }

    /// Check the configuration and return the parsed base URL.
    ///
    /// # Errors
    ///
    /// Returns an error if the timeout is zero, the two users share an email,
    /// or the base URL is not an absolute http(s) URL.
    pub fn validate(&self) -> Result<BaseUrl> {
        if self.timeout_seconds == 0 {
            return Err(SmokeError::Configuration(
                "timeout_seconds must be greater than zero".into(),
            ));
        }
        if self.primary_email.eq_ignore_ascii_case(&self.secondary_email) {
            return Err(SmokeError::Configuration(
                "primary and secondary users must differ".into(),
            ));
        }
        if !self.protected_path.starts_with('/') {
            return Err(SmokeError::Configuration(format!(
                "protected path must start with '/': {}",
                self.protected_path
            )));
        }
        BaseUrl::parse(&self.base_url)
    }
}

/// A validated application origin without a trailing slash.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BaseUrl {
    origin: String,
    url: Url,
}

impl BaseUrl {
    /// Parse and normalize a base URL.
    ///
    /// # Errors
    ///
    /// Returns [`SmokeError::InvalidBaseUrl`] for relative URLs, non-http(s)
    /// schemes and URLs carrying a query or fragment.
    pub fn parse(raw: &str) -> Result<Self> {
        let invalid = |reason: &str| SmokeError::InvalidBaseUrl {
            url: raw.to_string(),
            reason: reason.to_string(),
        };

        let origin = raw.trim().trim_end_matches('/');
        let url = Url::parse(origin).map_err(|e| invalid(&e.to_string()))?;

        if !matches!(url.scheme(), "http" | "https") {
            return Err(invalid("scheme must be http or https"));
        }
        if url.host_str().is_none() {
            return Err(invalid("missing host"));
        }
        if url.query().is_some() || url.fragment().is_some() {
            return Err(invalid("must not carry a query or fragment"));
        }

        Ok(Self {
            origin: origin.to_string(),
            url,
        })
    }

    /// The normalized origin string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.origin
    }

    /// Absolute URL for an application path such as `/learn`.
    #[must_use]
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.origin)
    }

    /// Resolve a `Location` header value, absolute or relative, against the origin.
    #[must_use]
    pub fn resolve(&self, location: &str) -> Option<Url> {
        self.url.join(location).ok()
    }
}
