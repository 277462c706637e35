//! Compose template loading.

use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_yaml::Value;
use spinbrew_common::error::{BreweryError, Result};

/// A docker-compose skeleton lacking concrete image versions.
///
/// Wraps the full decoded mapping; only the `services` sub-mapping means
/// anything to the merge engine, and every other top-level key passes
/// through to the output verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ComposeTemplate(serde_yaml::Mapping);

impl ComposeTemplate {
    /// Wraps an already-decoded compose mapping.
    #[must_use]
    pub fn new(fields: serde_yaml::Mapping) -> Self {
        Self(fields)
    }

    /// Reads and decodes the template file at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`BreweryError::Io`] if the file cannot be read and
    /// [`BreweryError::Malformed`] if it does not decode as a YAML mapping.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| BreweryError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::from_yaml(&text)
    }

    /// Decodes a template from YAML text.
    ///
    /// # Errors
    ///
    /// Returns [`BreweryError::Malformed`] if the text does not decode as a
    /// YAML mapping.
    pub fn from_yaml(text: &str) -> Result<Self> {
        serde_yaml::from_str(text).map_err(|source| BreweryError::Malformed {
            what: "compose template",
            source,
        })
    }

    /// Service entries as `(name, spec)` pairs, in template order.
    /// Non-string service names are skipped. Empty when the template has no
    /// `services` mapping.
    pub fn services(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.0
            .get("services")
            .and_then(Value::as_mapping)
            .into_iter()
            .flat_map(|services| {
                services
                    .iter()
                    .filter_map(|(k, v)| k.as_str().map(|name| (name, v)))
            })
    }

    /// The full underlying mapping.
    #[must_use]
    pub fn as_mapping(&self) -> &serde_yaml::Mapping {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn services_iterate_in_template_order() {
        let template = ComposeTemplate::from_yaml(
            "{services: {local-deck: {ports: [9000]}, local-gate: {ports: [8084]}}}",
        )
        .expect("template should decode");
        let names: Vec<&str> = template.services().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["local-deck", "local-gate"]);
    }

    #[test]
    fn missing_services_section_yields_no_entries() {
        let template =
            ComposeTemplate::from_yaml("{version: '3'}").expect("template should decode");
        assert_eq!(template.services().count(), 0);
    }

    #[test]
    fn non_mapping_document_is_malformed() {
        assert!(matches!(
            ComposeTemplate::from_yaml("- just\n- a\n- list\n"),
            Err(BreweryError::Malformed { .. })
        ));
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let dir = tempfile::tempdir().expect("failed to create tempdir");
        let path = dir.path().join("nope.yml");
        assert!(matches!(
            ComposeTemplate::load(&path),
            Err(BreweryError::Io { .. })
        ));
    }
}
