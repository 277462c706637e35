//! # spinbrew — Spinnaker compose brewery
//!
//! Fetches Spinnaker release metadata and brews a local docker-compose.yml
//! from a release's Bill of Materials.

mod commands;
mod report;

use clap::Parser;

use crate::commands::Cli;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
        )
        .init();

    let cli = Cli::parse();
    commands::execute(cli)
}
