//! Global configuration model for a spinbrew invocation.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Root configuration for one spinbrew invocation.
///
/// Constructed once at startup and passed by reference to whichever
/// operation needs it; there is no process-wide singleton.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BreweryConfig {
    /// URL of the "all versions" document.
    pub versions_url: String,
    /// URL pattern for per-release BOM documents; contains
    /// [`crate::constants::RELEASE_PLACEHOLDER`].
    pub bom_url_pattern: String,
    /// Path to the docker-compose template.
    pub template_path: PathBuf,
    /// Path of the generated compose file.
    pub output_path: PathBuf,
}

impl Default for BreweryConfig {
    fn default() -> Self {
        Self {
            versions_url: crate::constants::VERSIONS_URL.to_owned(),
            bom_url_pattern: crate::constants::BOM_URL_PATTERN.to_owned(),
            template_path: PathBuf::from(crate::constants::DEFAULT_TEMPLATE_PATH),
            output_path: PathBuf::from(crate::constants::DEFAULT_OUTPUT_PATH),
        }
    }
}

impl BreweryConfig {
    /// Returns the BOM URL for a concrete release identifier.
    #[must_use]
    pub fn bom_url(&self, release: &str) -> String {
        self.bom_url_pattern
            .replace(crate::constants::RELEASE_PLACEHOLDER, release)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bom_url_substitutes_release() {
        let config = BreweryConfig::default();
        let url = config.bom_url("1.30.1");
        assert!(url.contains("bom%2F1.30.1.yml"));
        assert!(!url.contains(crate::constants::RELEASE_PLACEHOLDER));
    }

    #[test]
    fn default_paths_point_at_working_directory() {
        let config = BreweryConfig::default();
        assert_eq!(
            config.template_path,
            PathBuf::from("templates/docker-compose-template.yml")
        );
        assert_eq!(config.output_path, PathBuf::from("docker-compose.yml"));
    }
}
