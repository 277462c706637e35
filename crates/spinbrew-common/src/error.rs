//! Unified error types for the spinbrew workspace.
//!
//! Per-service merge problems are deliberately NOT represented here; those
//! are advisory warnings carried as values by the merge engine. Variants in
//! this enum abort the operation that raised them.

use std::path::PathBuf;

use thiserror::Error;

/// Top-level error type shared across the workspace.
#[derive(Debug, Error)]
pub enum BreweryError {
    /// A remote source was unreachable or answered with a non-2xx status.
    #[error("remote source unavailable: {url}: {reason}")]
    Unavailable {
        /// URL that could not be fetched.
        url: String,
        /// Transport or HTTP status description.
        reason: String,
    },

    /// Decoded remote content did not have the expected structure.
    #[error("malformed {what}: {source}")]
    Malformed {
        /// Description of the document being decoded.
        what: &'static str,
        /// Underlying YAML decode error.
        source: serde_yaml::Error,
    },

    /// A BOM is missing a field the merge cannot proceed without.
    #[error("invalid BOM: {message}")]
    InvalidBom {
        /// Description of the missing or invalid field.
        message: String,
    },

    /// A required resource was not found.
    #[error("{kind} not found: {id}")]
    NotFound {
        /// Type of the missing resource.
        kind: &'static str,
        /// Identifier of the missing resource.
        id: String,
    },

    /// An I/O operation failed.
    #[error("I/O error at {path}: {source}")]
    Io {
        /// Path where the I/O error occurred.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// YAML serialization of an output document failed.
    #[error("serialization error: {source}")]
    Serialization {
        /// Underlying YAML error.
        #[from]
        source: serde_yaml::Error,
    },
}

/// Convenience alias used throughout the workspace.
pub type Result<T> = std::result::Result<T, BreweryError>;
