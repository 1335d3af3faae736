//! Result-file selection
//!
//! Resolves a results directory plus an optional simulation-configuration
//! prefix into an ordered list of `.sca` files. The store itself is
//! agnostic to how the list was produced; this is the only place glob
//! patterns exist.

use crate::store::{StoreError, StoreResult};
use glob_match::glob_match;
use std::path::{Path, PathBuf};

/// Glob pattern for a configuration prefix, e.g. `DroneSwarm5km-*.sca`,
/// or `*.sca` when no configuration is given
pub fn sca_pattern(config: Option<&str>) -> String {
    match config {
        Some(name) => format!("{}-*.sca", name),
        None => "*.sca".to_string(),
    }
}

/// Select scalar-result files under `dir`, lexically sorted
///
/// Sorting by file name makes run order deterministic across repeated
/// invocations, which in turn fixes per-node value-sequence order. A
/// missing directory is fatal for the whole batch; an unreadable entry
/// inside it is skipped.
pub fn select_sca_files(dir: &Path, config: Option<&str>) -> StoreResult<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(StoreError::ResultsDirMissing(dir.to_path_buf()));
    }

    let pattern = sca_pattern(config);
    let mut files: Vec<PathBuf> = std::fs::read_dir(dir)?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| {
            path.is_file()
                && path
                    .file_name()
                    .and_then(|n| n.to_str())
                    .is_some_and(|name| glob_match(&pattern, name))
        })
        .collect();

    files.sort();
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn touch(dir: &Path, name: &str) {
        std::fs::write(dir.join(name), "").unwrap();
    }

    #[test]
    fn test_pattern_for_config() {
        assert_eq!(sca_pattern(None), "*.sca");
        assert_eq!(sca_pattern(Some("DroneSwarm5km")), "DroneSwarm5km-*.sca");
    }

    #[test]
    fn test_select_all_sca_files_sorted() {
        let dir = tempdir().unwrap();
        touch(dir.path(), "run-2.sca");
        touch(dir.path(), "run-0.sca");
        touch(dir.path(), "run-1.sca");
        touch(dir.path(), "run-0.vec");
        touch(dir.path(), "notes.txt");

        let files = select_sca_files(dir.path(), None).unwrap();
        let names: Vec<_> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_str().unwrap())
            .collect();

        assert_eq!(names, vec!["run-0.sca", "run-1.sca", "run-2.sca"]);
    }

    #[test]
    fn test_select_filters_by_config_prefix() {
        let dir = tempdir().unwrap();
        touch(dir.path(), "DroneSwarm5km-0.sca");
        touch(dir.path(), "DroneSwarm5km-1.sca");
        touch(dir.path(), "DroneSwarm10km-0.sca");

        let files = select_sca_files(dir.path(), Some("DroneSwarm5km")).unwrap();
        assert_eq!(files.len(), 2);
        assert!(files.iter().all(|p| p
            .file_name()
            .unwrap()
            .to_str()
            .unwrap()
            .starts_with("DroneSwarm5km-")));
    }

    #[test]
    fn test_missing_directory_is_fatal() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("nope");

        let err = select_sca_files(&missing, None).unwrap_err();
        assert!(matches!(err, StoreError::ResultsDirMissing(_)));
    }

    #[test]
    fn test_empty_directory_selects_nothing() {
        let dir = tempdir().unwrap();
        assert!(select_sca_files(dir.path(), None).unwrap().is_empty());
    }
}
