//! AetherForge smoke harness entry point.
//!
//! Exit status: `0` when every check passed, `1` when a check failed or the
//! run aborted with a runtime fault.

use std::io;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use aetherforge_smoke::cli::Args;
use aetherforge_smoke::runner::report_outcome;
use aetherforge_smoke::CheckRunner;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    // Logs go to stderr; stdout carries only the report.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let config = Args::parse().into_config();
    tracing::info!(base_url = %config.base_url, "Starting smoke run");

    let outcome = CheckRunner::new(config).run().await;

    let stdout = io::stdout();
    let Ok(status) = report_outcome(outcome, &mut stdout.lock()) else {
        return ExitCode::FAILURE;
    };
    ExitCode::from(status)
}
