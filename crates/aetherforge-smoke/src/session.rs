//! Cookie-bearing HTTP sessions.
//!
//! A [`Session`] is one simulated browser: its own cookie jar, its own
//! redirect policy. Sessions never share cookies, so signing in on one leaves
//! every other session anonymous.

use std::time::Duration;

use reqwest::{header, redirect, Client, Method, RequestBuilder, Url};
use serde::Serialize;
use tracing::debug;

use crate::config::BaseUrl;
use crate::error::{Result, SmokeError};

/// How a session reacts to 3xx responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RedirectPolicy {
    /// Follow redirects like a browser (up to 10 hops).
    Follow,
    /// Return the redirect response itself.
    Never,
}

/// A fully read HTTP response.
#[derive(Debug, Clone)]
pub struct PageResponse {
    /// Request path, for diagnostics.
    pub path: String,
    /// Final status code.
    pub status: u16,
    /// `Location` header, if any.
    pub location: Option<String>,
    /// Body decoded as UTF-8, invalid sequences replaced.
    pub body: String,
}

impl PageResponse {
    /// Whether the status is exactly 200.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.status == 200
    }

    /// Whether the body contains every marker.
    #[must_use]
    pub fn contains_all(&self, markers: &[&str]) -> bool {
        markers.iter().all(|m| self.body.contains(m))
    }

    /// Parse the body as JSON.
    ///
    /// # Errors
    ///
    /// Returns [`SmokeError::Json`] if the body is not valid JSON.
    pub fn json(&self) -> Result<serde_json::Value> {
        serde_json::from_str(&self.body).map_err(|source| SmokeError::Json {
            path: self.path.clone(),
            source,
        })
    }

    /// Resolve the `Location` header against the application origin.
    #[must_use]
    pub fn redirect_target(&self, base: &BaseUrl) -> Option<Url> {
        self.location.as_deref().and_then(|l| base.resolve(l))
    }
}

/// One simulated user agent.
#[derive(Debug, Clone)]
pub struct Session {
    label: &'static str,
    client: Client,
    base: BaseUrl,
}

impl Session {
    /// Create a session with an empty cookie jar.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(
        label: &'static str,
        base: BaseUrl,
        policy: RedirectPolicy,
        timeout: Duration,
    ) -> Result<Self> {
        let redirect = match policy {
            RedirectPolicy::Follow => redirect::Policy::default(),
            RedirectPolicy::Never => redirect::Policy::none(),
        };

        let client = Client::builder()
            .cookie_store(true)
            .redirect(redirect)
            .timeout(timeout)
            .build()?;

        Ok(Self {
            label,
            client,
            base,
        })
    }

    /// Label used in log output (`guard`, `alice`, `bob`).
    #[must_use]
    pub const fn label(&self) -> &'static str {
        self.label
    }

    /// Issue a `GET` request.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure.
    pub async fn get(&self, path: &str) -> Result<PageResponse> {
        self.send(Method::GET, path, |req| req).await
    }

    /// Submit an `application/x-www-form-urlencoded` body.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure.
    pub async fn post_form(&self, path: &str, fields: &[(&str, &str)]) -> Result<PageResponse> {
        self.send(Method::POST, path, |req| req.form(fields)).await
    }

    /// Submit a JSON body.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure.
    pub async fn post_json<T: Serialize + ?Sized>(
        &self,
        path: &str,
        payload: &T,
    ) -> Result<PageResponse> {
        self.send(Method::POST, path, |req| req.json(payload)).await
    }

    async fn send(
        &self,
        method: Method,
        path: &str,
        build: impl FnOnce(RequestBuilder) -> RequestBuilder,
    ) -> Result<PageResponse> {
        let url = self.base.endpoint(path);
        let request = build(self.client.request(method.clone(), &url));
        let response = request.send().await?;

        let status = response.status().as_u16();
        let location = response
            .headers()
            .get(header::LOCATION)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let bytes = response.bytes().await?;
        let body = String::from_utf8_lossy(&bytes).into_owned();

        debug!(
            session = self.label,
            method = %method,
            path,
            status,
            bytes = bytes.len(),
            "request completed"
        );

        Ok(PageResponse {
            path: path.to_string(),
            status,
            location,
            body,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(body: &str) -> PageResponse {
        PageResponse {
            path: "/api/workspace".into(),
            status: 200,
            location: None,
            body: body.into(),
        }
    }

    #[test]
    fn contains_all_requires_every_marker() {
        let response = page("<h2>Artifacts</h2><h2>Concept explorer</h2>");
        assert!(response.contains_all(&["Artifacts", "Concept explorer"]));
        assert!(!response.contains_all(&["Artifacts", "Generate concept graph artifact"]));
        assert!(response.contains_all(&[]));
    }

    #[test]
    fn json_error_names_the_path() {
        let err = page("<html>").json().unwrap_err();
        assert!(matches!(err, SmokeError::Json { ref path, .. } if path == "/api/workspace"));
        assert!(err.to_string().starts_with("invalid JSON from /api/workspace"));
    }

    #[test]
    fn redirect_target_resolves_relative_location() {
        let base = BaseUrl::parse("http://localhost:3000").unwrap();
        let mut response = page("");
        response.status = 307;
        response.location = Some("/sign-in?next=%2Flearn".into());

        let target = response.redirect_target(&base).unwrap();
        assert_eq!(target.path(), "/sign-in");
        assert!(page("").redirect_target(&base).is_none());
    }

    #[test]
    fn session_builds_for_both_policies() {
        let base = BaseUrl::parse("http://localhost:3000").unwrap();
        for policy in [RedirectPolicy::Follow, RedirectPolicy::Never] {
            let session = Session::new("guard", base.clone(), policy, Duration::from_secs(1));
            assert_eq!(session.unwrap().label(), "guard");
        }
    }
}
