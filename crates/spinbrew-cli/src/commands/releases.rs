//! `spinbrew releases` — list all available releases, newest first.

use spinbrew_release::VersionCatalog;

use crate::report;

/// Executes the `releases` command.
///
/// # Errors
///
/// Infallible today; kept fallible to match the other command handlers.
pub fn execute(catalog: &VersionCatalog) -> anyhow::Result<()> {
    if catalog.versions().is_empty() {
        tracing::warn!("versions document lists no releases");
        return Ok(());
    }

    println!("Available releases:");
    for release in catalog.sorted_descending() {
        report::print_release(release);
    }
    Ok(())
}
