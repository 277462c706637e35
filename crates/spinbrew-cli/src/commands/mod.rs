//! CLI command definitions and dispatch.

pub mod bom;
pub mod generate;
pub mod latest;
pub mod releases;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use spinbrew_common::config::BreweryConfig;
use spinbrew_common::constants;
use spinbrew_release::VersionCatalog;

/// spinbrew — brew a local docker-compose file from Spinnaker release BOMs.
#[derive(Parser, Debug)]
#[command(name = constants::APP_NAME, version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Command,

    /// Path to the docker-compose template.
    #[arg(long, global = true, default_value = constants::DEFAULT_TEMPLATE_PATH)]
    pub template: PathBuf,

    /// Path of the generated compose file.
    #[arg(long, global = true, default_value = constants::DEFAULT_OUTPUT_PATH)]
    pub output: PathBuf,

    /// Override the URL of the versions document.
    #[arg(long, global = true, value_name = "URL")]
    pub versions_url: Option<String>,

    /// Override the BOM URL pattern (`__VERSION__` is replaced by the release).
    #[arg(long, global = true, value_name = "URL")]
    pub bom_url: Option<String>,
}

/// Available CLI subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// List all available Spinnaker releases, newest first.
    Releases,
    /// Show metadata for the most recent release only.
    Latest,
    /// Show the BOM (Bill of Materials) for a release.
    Bom(ReleaseArgs),
    /// Generate docker-compose.yml for a release.
    Generate(ReleaseArgs),
}

/// Release selection shared by the `bom` and `generate` subcommands.
#[derive(Args, Debug)]
pub struct ReleaseArgs {
    /// Release to operate on.
    #[arg(long, env = constants::RELEASE_ENV_VAR, value_name = "VERSION")]
    pub release: String,
}

impl Cli {
    /// Builds the invocation config from defaults plus CLI overrides.
    #[must_use]
    pub fn config(&self) -> BreweryConfig {
        let defaults = BreweryConfig::default();
        BreweryConfig {
            versions_url: self.versions_url.clone().unwrap_or(defaults.versions_url),
            bom_url_pattern: self.bom_url.clone().unwrap_or(defaults.bom_url_pattern),
            template_path: self.template.clone(),
            output_path: self.output.clone(),
        }
    }
}

/// Dispatches the parsed CLI command to its handler.
///
/// The version catalog is loaded eagerly: an unreachable versions source
/// aborts every action.
///
/// # Errors
///
/// Returns an error if the command execution fails.
pub fn execute(cli: Cli) -> anyhow::Result<()> {
    let config = cli.config();
    let catalog = VersionCatalog::load(&config)?;
    match cli.command {
        Command::Releases => releases::execute(&catalog),
        Command::Latest => latest::execute(&catalog),
        Command::Bom(args) => bom::execute(&config, &args),
        Command::Generate(args) => generate::execute(&config, &args),
    }
}
