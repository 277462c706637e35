//! # spinbrew-compose
//!
//! Turns a docker-compose template plus a release BOM into a final compose
//! file:
//! - **Template**: Loading and decoding of the compose skeleton.
//! - **Merge**: The BOM-to-compose merge engine (suffix matching,
//!   first-match-wins, warning-degraded fallbacks).
//! - **Writer**: Backup-then-write of the generated compose file.

pub mod merge;
pub mod template;
pub mod writer;

pub use merge::{MergeWarning, MergedCompose, merge};
pub use template::ComposeTemplate;
