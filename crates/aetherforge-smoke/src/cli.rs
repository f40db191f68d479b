//! Command-line arguments.

use clap::Parser;

use crate::config::SmokeConfig;

/// End-to-end smoke test for a running AetherForge instance.
#[derive(Debug, Parser)]
#[command(name = "aetherforge-smoke")]
#[command(version)]
#[command(about = "Smoke test AetherForge's critical user journeys", long_about = None)]
pub struct Args {
    /// App base URL [default: http://localhost:3000, or $AETHERFORGE_SMOKE_BASE_URL]
    #[arg(long, value_name = "URL")]
    pub base_url: Option<String>,
}

impl Args {
    /// Build the run configuration: environment first, then flags.
    #[must_use]
    pub fn into_config(self) -> SmokeConfig {
        self.apply(SmokeConfig::from_env())
    }

    fn apply(self, config: SmokeConfig) -> SmokeConfig {
        match self.base_url {
            Some(url) => config.with_base_url(url),
            None => config,
        }
    }
}
