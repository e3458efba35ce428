//! Staged output directories.
//!
//! A backup is written into `<base>/.<label>_<timestamp>` and only renamed to
//! `<base>/<label>_<timestamp>` once the ripping tool succeeded. A leading dot
//! therefore always means "in progress"; a directory without it is complete.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::error::{BackupError, Result};

pub const HIDDEN_MARKER: char = '.';
pub const UNLABELED: &str = "unlabeled";

/// Centiseconds since the Unix epoch.
pub fn staging_timestamp() -> i64 {
    chrono::Utc::now().timestamp_millis() / 10
}

pub fn staging_name(label: Option<&str>, timestamp: i64) -> String {
    format!("{}{}_{}", HIDDEN_MARKER, label.unwrap_or(UNLABELED), timestamp)
}

/// Creates the hidden staging directory. Never reuses an existing path.
pub fn stage(base_dir: &Path, label: Option<&str>, timestamp: i64) -> Result<PathBuf> {
    fs::create_dir_all(base_dir).map_err(|e| BackupError::staging(base_dir, e))?;
    let path = base_dir.join(staging_name(label, timestamp));
    fs::create_dir(&path).map_err(|e| BackupError::staging(&path, e))?;
    info!(path = %path.display(), "created staging directory");
    Ok(path)
}

pub fn final_path(staging: &Path) -> Option<PathBuf> {
    let leaf = staging.file_name()?.to_str()?;
    let visible = leaf.strip_prefix(HIDDEN_MARKER)?;
    if visible.is_empty() {
        return None;
    }
    Some(staging.with_file_name(visible))
}

/// Renames the staging directory to its visible name in the same parent.
pub fn finalize(staging: &Path) -> Result<PathBuf> {
    let target = final_path(staging).ok_or_else(|| {
        BackupError::staging(
            staging,
            io::Error::new(io::ErrorKind::InvalidInput, "not a staging directory name"),
        )
    })?;
    if target.exists() {
        return Err(BackupError::staging(
            &target,
            io::Error::from(io::ErrorKind::AlreadyExists),
        ));
    }
    fs::rename(staging, &target).map_err(|e| BackupError::staging(staging, e))?;
    info!(path = %target.display(), "finalized backup");
    Ok(target)
}

/// Removes a staging directory and everything in it. A directory that is
/// already gone is not an error.
pub fn discard(staging: &Path) -> Result<()> {
    match fs::remove_dir_all(staging) {
        Ok(()) => {
            warn!(path = %staging.display(), "removed partial backup");
            Ok(())
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(BackupError::staging(staging, e)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn stage_creates_hidden_directory() {
        let dir = TempDir::new().expect("tempdir");
        let path = stage(dir.path(), Some("MOVIE1"), 170000000012).expect("stage");
        assert_eq!(path, dir.path().join(".MOVIE1_170000000012"));
        assert!(path.is_dir());
    }

    #[test]
    fn missing_label_uses_filler() {
        assert_eq!(staging_name(None, 5), ".unlabeled_5");
    }

    #[test]
    fn stage_creates_missing_base_dir() {
        let dir = TempDir::new().expect("tempdir");
        let base = dir.path().join("a").join("b");
        let path = stage(&base, Some("X"), 1).expect("stage");
        assert!(path.is_dir());
    }

    #[test]
    fn stage_refuses_existing_path() {
        let dir = TempDir::new().expect("tempdir");
        stage(dir.path(), Some("MOVIE1"), 7).expect("first");
        let err = stage(dir.path(), Some("MOVIE1"), 7).unwrap_err();
        match err {
            BackupError::Staging { source, .. } => {
                assert_eq!(source.kind(), io::ErrorKind::AlreadyExists)
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn finalize_strips_marker_in_place() {
        let dir = TempDir::new().expect("tempdir");
        let staging = stage(dir.path(), Some("MOVIE1"), 9).expect("stage");
        fs::write(staging.join("VIDEO_TS.IFO"), b"data").expect("write");

        let done = finalize(&staging).expect("finalize");
        assert_eq!(done, dir.path().join("MOVIE1_9"));
        assert_eq!(done.parent(), staging.parent());
        assert!(!staging.exists());
        assert!(done.join("VIDEO_TS.IFO").is_file());
    }

    #[test]
    fn finalize_strips_only_one_marker() {
        assert_eq!(
            final_path(Path::new("/srv/..odd_1")),
            Some(PathBuf::from("/srv/.odd_1"))
        );
        assert_eq!(final_path(Path::new("/srv/visible_1")), None);
        assert_eq!(final_path(Path::new("/srv/.")), None);
    }

    #[test]
    fn finalize_rejects_unmarked_directory() {
        let dir = TempDir::new().expect("tempdir");
        let plain = dir.path().join("plain");
        fs::create_dir(&plain).expect("mkdir");
        assert!(finalize(&plain).is_err());
        assert!(plain.is_dir());
    }

    #[test]
    fn discard_removes_tree_and_tolerates_absence() {
        let dir = TempDir::new().expect("tempdir");
        let staging = stage(dir.path(), None, 3).expect("stage");
        fs::create_dir(staging.join("VIDEO_TS")).expect("mkdir");
        fs::write(staging.join("VIDEO_TS").join("VTS_01_1.VOB"), b"x").expect("write");

        discard(&staging).expect("discard");
        assert!(!staging.exists());
        discard(&staging).expect("discard again");
    }
}
