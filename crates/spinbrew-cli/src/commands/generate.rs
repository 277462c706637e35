//! `spinbrew generate` — write the merged docker-compose file.

use spinbrew_common::config::BreweryConfig;
use spinbrew_compose::{ComposeTemplate, writer};
use spinbrew_release::Bom;

use crate::commands::ReleaseArgs;

/// Executes the `generate` command.
///
/// Per-service merge problems are printed as warnings and the file is still
/// written; a missing registry or an unreadable template aborts.
///
/// # Errors
///
/// Returns an error if the template, BOM, merge, or output write fails.
pub fn execute(config: &BreweryConfig, args: &ReleaseArgs) -> anyhow::Result<()> {
    tracing::info!(release = %args.release, "generating docker compose file");

    let template = ComposeTemplate::load(&config.template_path)?;
    let bom = Bom::resolve(config, &args.release)?;
    let merged = spinbrew_compose::merge(&template, &bom)?;

    for warning in merged.warnings() {
        tracing::warn!("{warning}");
    }

    let _backup = writer::write_with_backup(&config.output_path, &merged.to_yaml()?)?;
    println!("Generated {}", config.output_path.display());
    Ok(())
}
