//! Per-release Bill of Materials resolution.

use serde::{Deserialize, Serialize};
use serde_yaml::Value;
use spinbrew_common::config::BreweryConfig;
use spinbrew_common::error::{BreweryError, Result};

use crate::fetch;

/// A release's Bill of Materials: the exact mapping from logical service
/// name to concrete build version, plus the registry the images live in.
///
/// Wraps the decoded mapping rather than a fixed struct; BOM documents
/// carry more keys than this tool reads, and `show-bom` prints them all
/// back out verbatim. Read-only once fetched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Bom(serde_yaml::Mapping);

impl Bom {
    /// Wraps an already-decoded BOM mapping.
    #[must_use]
    pub fn new(fields: serde_yaml::Mapping) -> Self {
        Self(fields)
    }

    /// Fetches and decodes the BOM for `release`. No caching; every call
    /// re-fetches.
    ///
    /// # Errors
    ///
    /// Returns [`BreweryError::NotFound`] if no BOM exists for the release,
    /// [`BreweryError::Unavailable`] if the remote source returns no
    /// content, and [`BreweryError::Malformed`] if it does not decode.
    pub fn resolve(config: &BreweryConfig, release: &str) -> Result<Self> {
        let url = config.bom_url(release);
        let text = fetch::fetch_text(&url)?;
        serde_yaml::from_str(&text).map_err(|source| BreweryError::Malformed {
            what: "BOM document",
            source,
        })
    }

    /// The docker registry images are published to
    /// (`artifactSources.dockerRegistry`).
    ///
    /// # Errors
    ///
    /// Returns [`BreweryError::InvalidBom`] when the field is absent; a
    /// merge cannot proceed without a registry.
    pub fn docker_registry(&self) -> Result<&str> {
        self.0
            .get("artifactSources")
            .and_then(Value::as_mapping)
            .and_then(|sources| sources.get("dockerRegistry"))
            .and_then(Value::as_str)
            .ok_or_else(|| BreweryError::InvalidBom {
                message: "missing artifactSources.dockerRegistry".to_owned(),
            })
    }

    /// Service entries as `(key, value)` pairs, in document (insertion)
    /// order. Non-string keys are skipped. Empty when the BOM has no
    /// `services` mapping.
    pub fn services(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.0
            .get("services")
            .and_then(Value::as_mapping)
            .into_iter()
            .flat_map(|services| {
                services
                    .iter()
                    .filter_map(|(k, v)| k.as_str().map(|key| (key, v)))
            })
    }

    /// Serializes the BOM back to YAML text.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml::to_string(&self.0)?)
    }
}
