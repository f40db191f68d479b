//! Common test utilities: an in-process fake AetherForge.

#![allow(dead_code)] // Some utilities are used by different test files

use serde_json::{json, Value};
use wiremock::matchers::{body_string_contains, header, header_exists, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use aetherforge_smoke::SmokeConfig;

/// Artifact id the fake application hands out.
pub const ARTIFACT_ID: &str = "9c2d7e4a-1f3b-4e8a-b6d0-5a7c9e1f2b34";

/// Concept id listed for the fake artifact.
pub const CONCEPT_ID: &str = "c0ffee00-0000-4000-8000-000000000001";

const SESSION_COOKIE: &str = "af_session";
const ALICE: &str = "af_session=alice";
const BOB: &str = "af_session=bob";

/// Knobs for the fake application. Defaults describe a healthy instance.
pub struct FakeApp {
    /// Status the sign-in form answers with for alice.
    pub alice_sign_in_status: u16,
    /// Whether `/learn` is served to anonymous visitors.
    pub guard_open: bool,
    /// Generation response for alice.
    pub generate: ResponseTemplate,
    /// `concepts` field of the artifact API.
    pub concepts: Value,
    /// Status the sign-in form answers with for bob.
    pub bob_sign_in_status: u16,
    /// Status of bob's artifact listing.
    pub bob_listing_status: u16,
    /// Whether bob's artifact listing leaks alice's artifact.
    pub leak_to_bob: bool,
    /// Workspace API response for alice.
    pub workspace: ResponseTemplate,
}

impl Default for FakeApp {
    fn default() -> Self {
        Self {
            alice_sign_in_status: 303,
            guard_open: false,
            generate: ResponseTemplate::new(200).set_body_json(json!({
                "artifactId": ARTIFACT_ID,
                "concepts": [{"id": CONCEPT_ID, "title": "Consensus"}]
            })),
            concepts: json!([
                {"id": CONCEPT_ID, "title": "Consensus", "summary": "Agreeing on one value"}
            ]),
            bob_sign_in_status: 303,
            bob_listing_status: 200,
            leak_to_bob: false,
            workspace: ResponseTemplate::new(200).set_body_json(json!({
                "workspace": {
                    "id": "ws-1",
                    "topic": "Distributed Systems",
                    "difficulty": "intermediate",
                    "goals": []
                }
            })),
        }
    }
}

fn html(body: &str) -> ResponseTemplate {
    ResponseTemplate::new(200)
        .insert_header("content-type", "text/html; charset=utf-8")
        .set_body_string(format!("<!doctype html><html><body>{body}</body></html>"))
}

fn sign_in_response(status: u16, user: &str) -> ResponseTemplate {
    let response = ResponseTemplate::new(status);
    if status == 303 {
        response
            .insert_header("location", "/learn")
            .insert_header(
                "set-cookie",
                format!("{SESSION_COOKIE}={user}; Path=/; HttpOnly; SameSite=Lax").as_str(),
            )
    } else {
        response.set_body_json(json!({"error": "sign-in unavailable"}))
    }
}

fn unauthorized() -> ResponseTemplate {
    ResponseTemplate::new(401).set_body_json(json!({"error": "Unauthorized"}))
}

impl FakeApp {
    /// Start the fake application and mount every route.
    pub async fn start(self) -> MockServer {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/"))
            .respond_with(html("<h1>AetherForge</h1><p>Learn anything.</p>"))
            .mount(&server)
            .await;

        Mock::given(method("GET"))
            .and(path("/sign-in"))
            .respond_with(html("<h1>Sign in to AetherForge</h1><form></form>"))
            .mount(&server)
            .await;

        // Protected page: signed-in users see the sections, everyone else is
        // sent to sign-in with an absolute Location like the real middleware.
        Mock::given(method("GET"))
            .and(path("/learn"))
            .and(header_exists("cookie"))
            .respond_with(html(
                "<h2>Generate concept graph artifact</h2><h2>Artifacts</h2><h2>Concept explorer</h2>",
            ))
            .with_priority(1)
            .mount(&server)
            .await;

        let anonymous_learn = if self.guard_open {
            html("<h2>Concept explorer</h2>")
        } else {
            ResponseTemplate::new(307).insert_header(
                "location",
                format!("{}/sign-in?next=%2Flearn", server.uri()).as_str(),
            )
        };
        Mock::given(method("GET"))
            .and(path("/learn"))
            .respond_with(anonymous_learn)
            .mount(&server)
            .await;

        Mock::given(method("POST"))
            .and(path("/api/auth/sign-in"))
            .and(body_string_contains("alice.prephase3"))
            .respond_with(sign_in_response(self.alice_sign_in_status, "alice"))
            .mount(&server)
            .await;

        Mock::given(method("POST"))
            .and(path("/api/auth/sign-in"))
            .and(body_string_contains("bob.prephase3"))
            .respond_with(sign_in_response(self.bob_sign_in_status, "bob"))
            .mount(&server)
            .await;

        Mock::given(method("POST"))
            .and(path("/api/concepts/generate"))
            .and(header("cookie", ALICE))
            .respond_with(self.generate)
            .with_priority(1)
            .mount(&server)
            .await;

        Mock::given(method("POST"))
            .and(path("/api/concepts/generate"))
            .respond_with(unauthorized())
            .mount(&server)
            .await;

        Mock::given(method("GET"))
            .and(path(format!("/learn/artifacts/{ARTIFACT_ID}")))
            .and(header("cookie", ALICE))
            .respond_with(html(
                "<h2>Artifact v1</h2><h3>Concept graph</h3><h3>Generated concepts</h3>\
                 <p>Source: bootstrap/local</p>",
            ))
            .mount(&server)
            .await;

        Mock::given(method("GET"))
            .and(path(format!("/api/concepts/artifacts/{ARTIFACT_ID}")))
            .and(header("cookie", ALICE))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "artifact": {
                    "id": ARTIFACT_ID,
                    "topic": "Distributed Systems",
                    "difficulty": "intermediate",
                    "artifact_version": 1
                },
                "concepts": self.concepts
            })))
            .mount(&server)
            .await;

        Mock::given(method("GET"))
            .and(path(format!("/learn/{CONCEPT_ID}")))
            .and(header("cookie", ALICE))
            .respond_with(html("<h2>Consensus</h2><h3>Examples and case studies</h3>"))
            .mount(&server)
            .await;

        let bob_artifacts = if self.leak_to_bob {
            json!({"artifacts": [{"id": ARTIFACT_ID, "topic": "Distributed Systems"}]})
        } else {
            json!({"artifacts": []})
        };
        let bob_listing = if self.bob_listing_status == 200 {
            ResponseTemplate::new(200).set_body_json(bob_artifacts)
        } else {
            ResponseTemplate::new(self.bob_listing_status)
                .set_body_json(json!({"error": "Failed to list artifacts"}))
        };
        Mock::given(method("GET"))
            .and(path("/api/concepts/artifacts"))
            .and(header("cookie", BOB))
            .respond_with(bob_listing)
            .with_priority(1)
            .mount(&server)
            .await;

        Mock::given(method("GET"))
            .and(path("/api/concepts/artifacts"))
            .respond_with(unauthorized())
            .mount(&server)
            .await;

        Mock::given(method("GET"))
            .and(path("/api/workspace"))
            .and(header("cookie", ALICE))
            .respond_with(self.workspace)
            .with_priority(1)
            .mount(&server)
            .await;

        Mock::given(method("GET"))
            .and(path("/api/workspace"))
            .respond_with(unauthorized())
            .mount(&server)
            .await;

        server
    }
}

/// Configuration pointing at a fake application.
pub fn config_for(server: &MockServer) -> SmokeConfig {
    SmokeConfig::new()
        .with_base_url(server.uri())
        .with_timeout_seconds(5)
}

/// Names of the checks in a report, in order.
pub fn names(report: &aetherforge_smoke::RunReport) -> Vec<&str> {
    report.checks().iter().map(|c| c.name()).collect()
}
