//! Recursive source-tree scanner.

use std::fs;
use std::path::Path;

use tracing::{debug, warn};

use super::config::ScannerConfig;
use super::error::DirectoryError;
use super::types::ScanResult;

/// Recursive scanner that classifies entries under a source tree.
pub struct FsScanner {
    config: ScannerConfig,
}

impl FsScanner {
    /// Creates a scanner with the given configuration.
    pub fn new(config: ScannerConfig) -> Self {
        Self { config }
    }

    /// Creates a scanner with the default extension allow-list.
    pub fn with_defaults() -> Self {
        Self::new(ScannerConfig::default())
    }

    /// Walks `root` and classifies every entry.
    ///
    /// Hidden entries (leading dot) are skipped outright. Unreadable entries
    /// and subdirectories are counted and skipped; the walk itself only fails
    /// when `root` is not a readable directory.
    pub fn scan(&self, root: &Path) -> Result<ScanResult, DirectoryError> {
        validate_readable_dir(root)?;

        debug!(root = %root.display(), "scanning directory");

        let mut result = ScanResult::default();
        self.scan_dir(root, &mut result);

        debug!(
            photos = result.eligible_count(),
            other = result.other_count,
            inaccessible = result.inaccessible_count,
            "scan finished"
        );

        Ok(result)
    }

    fn scan_dir(&self, dir: &Path, result: &mut ScanResult) {
        let entries = match fs::read_dir(dir) {
            Ok(entries) => entries,
            Err(e) => {
                warn!(dir = %dir.display(), error = %e, "cannot list directory");
                result.inaccessible_count += 1;
                return;
            }
        };

        let mut children = Vec::new();
        for entry in entries {
            match entry {
                Ok(entry) => children.push(entry),
                Err(e) => {
                    warn!(dir = %dir.display(), error = %e, "unreadable directory entry");
                    result.inaccessible_count += 1;
                }
            }
        }
        // Name order makes one snapshot always yield the same file sequence.
        children.sort_by_key(|entry| entry.file_name());

        for entry in children {
            let name = entry.file_name();
            let name = name.to_string_lossy();
            if name.starts_with('.') {
                continue;
            }

            let path = entry.path();
            let file_type = match entry.file_type() {
                Ok(file_type) => file_type,
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "cannot stat entry");
                    result.inaccessible_count += 1;
                    continue;
                }
            };

            if file_type.is_dir() {
                self.scan_dir(&path, result);
            } else if file_type.is_file() {
                if self.config.matches_extension(name.as_ref()) {
                    result.files.push(path);
                } else {
                    result.other_count += 1;
                }
            }
        }
    }
}

/// Validates that `path` exists, is a directory, and can be listed.
pub fn validate_readable_dir(path: &Path) -> Result<(), DirectoryError> {
    if !path.exists() {
        return Err(DirectoryError::NotFound {
            path: path.to_path_buf(),
        });
    }
    if !path.is_dir() {
        return Err(DirectoryError::NotADirectory {
            path: path.to_path_buf(),
        });
    }
    fs::read_dir(path).map_err(|source| DirectoryError::NotReadable {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(())
}
