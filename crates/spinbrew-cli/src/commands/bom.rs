//! `spinbrew bom` — print a release's Bill of Materials as YAML.

use spinbrew_common::config::BreweryConfig;
use spinbrew_release::Bom;

use crate::commands::ReleaseArgs;

/// Executes the `bom` command.
///
/// # Errors
///
/// Returns an error if the BOM cannot be fetched, decoded, or re-serialized.
pub fn execute(config: &BreweryConfig, args: &ReleaseArgs) -> anyhow::Result<()> {
    tracing::info!(release = %args.release, "fetching BOM");
    let bom = Bom::resolve(config, &args.release)?;
    println!("BOM for release {}:", args.release);
    println!("{}", bom.to_yaml()?);
    Ok(())
}
