//! The release catalog: the "all versions" document and its orderings.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use serde_yaml::Value;
use spinbrew_common::config::BreweryConfig;
use spinbrew_common::error::{BreweryError, Result};

use crate::fetch;

/// Summary metadata for a single release.
///
/// A thin wrapper over the decoded mapping: releases carry arbitrary
/// metadata fields, and reporting preserves the order the document listed
/// them in. Only `version` and `lastUpdate` have meaning to this tool.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReleaseInfo(serde_yaml::Mapping);

impl ReleaseInfo {
    /// Wraps an already-decoded metadata mapping.
    #[must_use]
    pub fn new(fields: serde_yaml::Mapping) -> Self {
        Self(fields)
    }

    /// The release's version string, if present.
    #[must_use]
    pub fn version(&self) -> Option<&str> {
        self.0.get("version").and_then(Value::as_str)
    }

    /// All metadata fields in document order.
    pub fn fields(&self) -> impl Iterator<Item = (&Value, &Value)> {
        self.0.iter()
    }
}

/// The full list of known releases, decoded from the versions document.
///
/// Immutable after load; constructed once per invocation and passed by
/// reference to report and lookup functions.
#[derive(Debug, Clone, Deserialize)]
pub struct VersionCatalog {
    /// Version string of the most recent release (wire key `latestSpinnaker`).
    #[serde(rename = "latestSpinnaker", default)]
    latest: Option<String>,
    /// Per-release metadata entries.
    #[serde(default)]
    versions: Vec<ReleaseInfo>,
}

impl VersionCatalog {
    /// Fetches and decodes the versions document named by `config`.
    ///
    /// # Errors
    ///
    /// Returns [`BreweryError::Unavailable`] if the remote source cannot be
    /// reached and [`BreweryError::Malformed`] if the document does not
    /// decode.
    pub fn load(config: &BreweryConfig) -> Result<Self> {
        let text = fetch::fetch_text(&config.versions_url)?;
        serde_yaml::from_str(&text).map_err(|source| BreweryError::Malformed {
            what: "versions document",
            source,
        })
    }

    /// The version string of the most recent release, if the document named
    /// one.
    #[must_use]
    pub fn latest(&self) -> Option<&str> {
        self.latest.as_deref()
    }

    /// All release entries in document order.
    #[must_use]
    pub fn versions(&self) -> &[ReleaseInfo] {
        &self.versions
    }

    /// The metadata entry for the latest release.
    ///
    /// Returns `None` when the document names no latest release or when no
    /// entry carries that version; callers surface that as a warning, not a
    /// failure.
    #[must_use]
    pub fn latest_release(&self) -> Option<&ReleaseInfo> {
        let latest = self.latest.as_deref()?;
        self.versions.iter().find(|r| r.version() == Some(latest))
    }

    /// Release entries ordered by semantic version, descending.
    ///
    /// Entries whose `version` does not parse as semver are warned about and
    /// placed after all parseable entries.
    #[must_use]
    pub fn sorted_descending(&self) -> Vec<&ReleaseInfo> {
        let mut keyed: Vec<(&ReleaseInfo, Option<semver::Version>)> = self
            .versions
            .iter()
            .map(|release| {
                let parsed = release
                    .version()
                    .and_then(|v| semver::Version::parse(v).ok());
                if parsed.is_none() {
                    tracing::warn!(
                        version = release.version().unwrap_or("<missing>"),
                        "release version is not a semantic version, sorting last"
                    );
                }
                (release, parsed)
            })
            .collect();

        keyed.sort_by(|(_, a), (_, b)| match (a, b) {
            (Some(a), Some(b)) => b.cmp(a),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        });

        keyed.into_iter().map(|(release, _)| release).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog_from(yaml: &str) -> VersionCatalog {
        serde_yaml::from_str(yaml).expect("catalog should decode")
    }

    #[test]
    fn decodes_latest_and_versions() {
        let catalog = catalog_from(
            "{latestSpinnaker: 1.10.0, versions: [{version: 1.9.0}, {version: 1.10.0}]}",
        );
        assert_eq!(catalog.latest(), Some("1.10.0"));
        assert_eq!(catalog.versions().len(), 2);
    }

    #[test]
    fn latest_release_finds_matching_entry() {
        let catalog = catalog_from(
            "{latestSpinnaker: 1.10.0, versions: [{version: 1.9.0, alias: v1.9.0}, {version: 1.10.0, alias: v1.10.0}]}",
        );
        let latest = catalog.latest_release().expect("latest entry");
        assert_eq!(latest.version(), Some("1.10.0"));
    }

    #[test]
    fn latest_release_missing_entry_is_none() {
        let catalog = catalog_from("{latestSpinnaker: 2.0.0, versions: [{version: 1.9.0}]}");
        assert!(catalog.latest_release().is_none());
    }

    #[test]
    fn latest_release_without_latest_key_is_none() {
        let catalog = catalog_from("{versions: [{version: 1.9.0}]}");
        assert!(catalog.latest().is_none());
        assert!(catalog.latest_release().is_none());
    }

    #[test]
    fn sort_is_semantic_not_lexicographic() {
        let catalog = catalog_from(
            "{versions: [{version: 1.2.0}, {version: 1.10.0}, {version: 1.9.0}]}",
        );
        let sorted: Vec<&str> = catalog
            .sorted_descending()
            .iter()
            .filter_map(|r| r.version())
            .collect();
        assert_eq!(sorted, vec!["1.10.0", "1.9.0", "1.2.0"]);
    }

    #[test]
    fn unparseable_versions_sort_last() {
        let catalog = catalog_from("{versions: [{version: nightly}, {version: 1.2.3}]}");
        let sorted: Vec<&str> = catalog
            .sorted_descending()
            .iter()
            .filter_map(|r| r.version())
            .collect();
        assert_eq!(sorted, vec!["1.2.3", "nightly"]);
    }

    #[test]
    fn release_fields_preserve_document_order() {
        let release: ReleaseInfo =
            serde_yaml::from_str("{version: 1.2.3, alias: v1.2.3, lastUpdate: 1533119348000}")
                .expect("release should decode");
        let keys: Vec<&str> = release.fields().filter_map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, vec!["version", "alias", "lastUpdate"]);
    }
}
