//! `spinbrew latest` — show metadata for the most recent release.

use spinbrew_release::VersionCatalog;

use crate::report;

/// Executes the `latest` command.
///
/// A missing latest release is surfaced as a warning, not a failure.
///
/// # Errors
///
/// Infallible today; kept fallible to match the other command handlers.
pub fn execute(catalog: &VersionCatalog) -> anyhow::Result<()> {
    let Some(latest) = catalog.latest() else {
        tracing::warn!("versions document names no latest release");
        return Ok(());
    };

    match catalog.latest_release() {
        Some(release) => {
            println!("Latest release metadata:");
            report::print_release(release);
        }
        None => tracing::warn!(
            latest,
            "latest release is known but its metadata entry is missing"
        ),
    }
    Ok(())
}
