//! # spinbrew-release
//!
//! Remote release metadata for Spinnaker:
//! - **Fetch**: Blocking HTTP retrieval of metadata documents.
//! - **Catalog**: The "all versions" document, latest-release lookup, and
//!   semantic descending ordering.
//! - **Bom**: Per-release Bill of Materials resolution and accessors.

pub mod bom;
pub mod catalog;
pub mod fetch;

pub use bom::Bom;
pub use catalog::{ReleaseInfo, VersionCatalog};
