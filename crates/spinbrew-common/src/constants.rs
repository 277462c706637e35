//! Default endpoints and file paths.
//!
//! These only seed [`BreweryConfig::default`](crate::config::BreweryConfig);
//! every operation takes its endpoints from an explicit config value so
//! tests can point the tool at alternate sources.

/// URL of the "all versions" document in the halconfig bucket.
pub const VERSIONS_URL: &str =
    "https://storage.googleapis.com/storage/v1/b/halconfig/o/versions.yml?alt=media";

/// URL pattern for a per-release BOM document. The release identifier is
/// substituted for [`RELEASE_PLACEHOLDER`]. `bom%2F` is the URL-encoded
/// `bom/` object prefix in the bucket.
pub const BOM_URL_PATTERN: &str =
    "https://storage.googleapis.com/storage/v1/b/halconfig/o/bom%2F__VERSION__.yml?alt=media";

/// Placeholder replaced by the release identifier in [`BOM_URL_PATTERN`].
pub const RELEASE_PLACEHOLDER: &str = "__VERSION__";

/// Default path of the docker-compose template.
pub const DEFAULT_TEMPLATE_PATH: &str = "templates/docker-compose-template.yml";

/// Default path of the generated compose file.
pub const DEFAULT_OUTPUT_PATH: &str = "docker-compose.yml";

/// Infix inserted into the backup file name when an existing output file is
/// moved aside (`docker-compose-bu-<HHMMSS-YYYYMMDD>.yml`).
pub const BACKUP_INFIX: &str = "-bu-";

/// Environment variable naming the release to operate on.
pub const RELEASE_ENV_VAR: &str = "SPINNAKER_RELEASE";

/// HTTP timeout for metadata fetches, in seconds.
pub const FETCH_TIMEOUT_SECS: u64 = 30;

/// Application name used in CLI output.
pub const APP_NAME: &str = "spinbrew";
