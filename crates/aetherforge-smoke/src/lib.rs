//! AetherForge smoke harness.
//!
//! Drives a running AetherForge instance through its critical user journeys
//! (landing page, sign-in guard, sign-in, concept generation, artifact and
//! concept pages, per-user isolation, workspace API) and reports one named
//! pass/fail check per assertion.
//!
//! # Example
//!
//! ```no_run
//! use aetherforge_smoke::{run, SmokeConfig};
//!
//! # async fn example() -> Result<(), aetherforge_smoke::SmokeError> {
//! let config = SmokeConfig::from_env().with_base_url("http://localhost:3002");
//! let report = run(config).await?;
//! println!("{}", report.summary());
//! # Ok(())
//! # }
//! ```
//!
//! # Failure tiers
//!
//! - Assertion failures are recorded as failed checks and the run continues,
//!   unless the failing step is blocking (artifact generation).
//! - Runtime faults (transport errors, unparseable JSON, bad configuration)
//!   abort the run with a [`SmokeError`].

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod cli;
pub mod config;
pub mod error;
pub mod runner;
pub mod session;
pub mod steps;

pub use aetherforge_smoke_core::{CheckResult, ReportSummary, RunReport};
pub use config::{BaseUrl, SmokeConfig};
pub use error::{Result, SmokeError};
pub use runner::{run, CheckRunner};
pub use session::{PageResponse, RedirectPolicy, Session};
pub use steps::{default_steps, RunContext, Step};
