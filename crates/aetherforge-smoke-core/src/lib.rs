//! Core types for the AetherForge smoke harness.
//!
//! This crate holds the pieces of a smoke run that do not touch the network:
//!
//! - **Checks**: `CheckResult`, one named pass/fail assertion with a diagnostic detail
//! - **Reports**: `RunReport`, the ordered results of one run plus its summary and
//!   console rendering
//! - **Identifiers**: `ArtifactId`, `ConceptId`, opaque ids handed out by the
//!   application under test
//!
//! # Console format
//!
//! ```text
//! landing_200: PASS (200)
//! landing_brand: PASS (AetherForge in body)
//! ...
//! Passed 16/16 checks
//! PRE_PHASE3_SMOKE_PASS
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod check;
pub mod ids;
pub mod report;

pub use check::CheckResult;
pub use ids::{ArtifactId, ConceptId, IdError, MIN_ARTIFACT_ID_LEN};
pub use report::{render_runtime_error, ReportSummary, RunReport, SUCCESS_SENTINEL};
