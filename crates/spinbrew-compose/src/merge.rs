//! The BOM-to-compose merge engine.
//!
//! Rewrites each template service's `image` field from the BOM's registry
//! and per-service version. Matching is by suffix: a template may name a
//! service `local-gate` and still pick up the bare BOM key `gate`. The
//! first BOM key (in BOM document order) that is a suffix of the service
//! name wins.

use std::fmt;

use serde_yaml::{Mapping, Value};
use spinbrew_common::error::Result;
use spinbrew_release::Bom;

use crate::template::ComposeTemplate;

/// Advisory problem confined to a single service entry. The merge still
/// succeeds; the affected service keeps its template definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MergeWarning {
    /// No BOM key is a suffix of the service name.
    NoBomMatch {
        /// Template service name.
        service: String,
    },
    /// A BOM key matched but its entry is not a mapping with a `version`.
    MatchIncomplete {
        /// Template service name.
        service: String,
        /// BOM key that matched.
        bom_key: String,
    },
    /// The template's definition for the service is not a mapping, so no
    /// `image` field can be set on it.
    BrokenTemplateSpec {
        /// Template service name.
        service: String,
    },
}

impl fmt::Display for MergeWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoBomMatch { service } => {
                write!(f, "{service}: no BOM record found, using template definition")
            }
            Self::MatchIncomplete { service, bom_key } => {
                write!(f, "{service}: BOM entry {bom_key} has no release version")
            }
            Self::BrokenTemplateSpec { service } => {
                write!(f, "{service}: template definition is not a mapping")
            }
        }
    }
}

/// Result of a merge: the final compose mapping plus the per-service
/// warnings raised while building it.
#[derive(Debug, Clone, PartialEq)]
pub struct MergedCompose {
    compose: Mapping,
    warnings: Vec<MergeWarning>,
}

impl MergedCompose {
    /// The final compose mapping.
    #[must_use]
    pub fn compose(&self) -> &Mapping {
        &self.compose
    }

    /// Warnings raised during the merge, in service order.
    #[must_use]
    pub fn warnings(&self) -> &[MergeWarning] {
        &self.warnings
    }

    /// Serializes the merged compose mapping to YAML text.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml::to_string(&self.compose)?)
    }
}

/// Combines a compose template with a release BOM.
///
/// For each template service, in template order, the first BOM key that is
/// a suffix of the service name supplies the image as
/// `{registry}/{key}:{version}`. Services without a usable match keep their
/// template definition and raise a [`MergeWarning`]. Top-level keys other
/// than `services` pass through unchanged, and neither input is mutated.
///
/// # Errors
///
/// Returns [`BreweryError::InvalidBom`](spinbrew_common::error::BreweryError::InvalidBom)
/// when the BOM names no docker registry; nothing after that check fails.
pub fn merge(template: &ComposeTemplate, bom: &Bom) -> Result<MergedCompose> {
    let registry = bom.docker_registry()?;

    let mut services = Mapping::new();
    let mut warnings = Vec::new();

    for (name, spec) in template.services() {
        let resolved = match bom.services().find(|(key, _)| name.ends_with(key)) {
            Some((key, entry)) => resolve_service(name, spec, key, entry, registry, &mut warnings),
            None => None,
        };

        let spec = match resolved {
            Some(spec) => spec,
            None => {
                warnings.push(MergeWarning::NoBomMatch {
                    service: name.to_owned(),
                });
                spec.clone()
            }
        };
        let _ = services.insert(Value::String(name.to_owned()), spec);
    }

    let mut compose = template.as_mapping().clone();
    let _ = compose.insert(Value::String("services".to_owned()), Value::Mapping(services));

    Ok(MergedCompose { compose, warnings })
}

/// Builds the service spec for a matched BOM key, or `None` when the match
/// has to be discarded (the caller then falls back to the template
/// definition).
fn resolve_service(
    name: &str,
    spec: &Value,
    key: &str,
    entry: &Value,
    registry: &str,
    warnings: &mut Vec<MergeWarning>,
) -> Option<Value> {
    let Some(version) = entry
        .as_mapping()
        .and_then(|m| m.get("version"))
        .and_then(Value::as_str)
    else {
        warnings.push(MergeWarning::MatchIncomplete {
            service: name.to_owned(),
            bom_key: key.to_owned(),
        });
        return None;
    };

    let Some(spec_map) = spec.as_mapping() else {
        warnings.push(MergeWarning::BrokenTemplateSpec {
            service: name.to_owned(),
        });
        return None;
    };

    tracing::info!(service = name, bom_key = key, version, "found BOM record");
    let mut resolved = spec_map.clone();
    let _ = resolved.insert(
        Value::String("image".to_owned()),
        Value::String(format!("{registry}/{key}:{version}")),
    );
    Some(Value::Mapping(resolved))
}
