//! Backup-then-write of the generated compose file.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};
use spinbrew_common::constants::BACKUP_INFIX;
use spinbrew_common::error::{BreweryError, Result};

/// Writes `contents` to `path`, moving any existing file aside first.
///
/// An existing file is renamed to `<stem>-bu-<HHMMSS-YYYYMMDD>.yml` in the
/// same directory rather than deleted. Returns the backup path when one was
/// made.
///
/// # Errors
///
/// Returns [`BreweryError::Io`] if the rename or the write fails.
pub fn write_with_backup(path: &Path, contents: &str) -> Result<Option<PathBuf>> {
    let backup = if path.is_file() {
        let backup_path = path.with_file_name(backup_file_name(path, Local::now()));
        std::fs::rename(path, &backup_path).map_err(|e| BreweryError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        tracing::info!(
            from = %path.display(),
            to = %backup_path.display(),
            "moved existing compose file to backup"
        );
        Some(backup_path)
    } else {
        None
    };

    std::fs::write(path, contents).map_err(|e| BreweryError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;

    Ok(backup)
}

/// Backup file name for `path` at `timestamp`, e.g.
/// `docker-compose-bu-130509-20260824.yml`.
fn backup_file_name(path: &Path, timestamp: DateTime<Local>) -> String {
    let stem = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("docker-compose");
    format!("{stem}{BACKUP_INFIX}{}.yml", timestamp.format("%H%M%S-%Y%m%d"))
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn backup_name_carries_stem_and_timestamp() {
        let at = Local
            .with_ymd_and_hms(2026, 8, 24, 13, 5, 9)
            .single()
            .expect("valid timestamp");
        assert_eq!(
            backup_file_name(Path::new("docker-compose.yml"), at),
            "docker-compose-bu-130509-20260824.yml"
        );
    }

    #[test]
    fn first_write_makes_no_backup() {
        let dir = tempfile::tempdir().expect("failed to create tempdir");
        let path = dir.path().join("docker-compose.yml");

        let backup = write_with_backup(&path, "services: {}\n").expect("write failed");
        assert!(backup.is_none());
        assert_eq!(
            std::fs::read_to_string(&path).expect("read failed"),
            "services: {}\n"
        );
    }

    #[test]
    fn existing_file_is_moved_to_backup_before_overwrite() {
        let dir = tempfile::tempdir().expect("failed to create tempdir");
        let path = dir.path().join("docker-compose.yml");
        std::fs::write(&path, "old contents\n").expect("seed write failed");

        let backup = write_with_backup(&path, "new contents\n")
            .expect("write failed")
            .expect("backup expected");

        let backup_name = backup
            .file_name()
            .and_then(|n| n.to_str())
            .expect("backup name");
        assert!(backup_name.starts_with("docker-compose-bu-"));
        assert!(backup_name.ends_with(".yml"));
        assert_eq!(
            std::fs::read_to_string(&backup).expect("read backup failed"),
            "old contents\n"
        );
        assert_eq!(
            std::fs::read_to_string(&path).expect("read failed"),
            "new contents\n"
        );
    }
}
