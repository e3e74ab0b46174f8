//! Undo engine: reverse-replays the journal.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use super::config::OrganiserConfig;
use super::error::OrganisationError;
use super::fsops::move_file;
use super::journal::{UndoJournal, UndoRecord};
use super::state::StateStore;

/// Replays the undo journal in reverse, restoring every file it can.
pub struct UndoEngine {
    config: OrganiserConfig,
}

impl UndoEngine {
    /// Creates an undo engine over the same artifacts the mover wrote.
    pub fn new(config: OrganiserConfig) -> Self {
        Self { config }
    }

    /// Undoes the last organisation.
    ///
    /// Returns `false` when there is nothing to undo. A destination file
    /// that no longer exists is skipped with a warning (restore what can be
    /// restored); any other replay failure is fatal, surfacing the
    /// partially-undone state instead of swallowing it.
    pub fn undo(&self) -> Result<bool, OrganisationError> {
        let journal = UndoJournal::new(&self.config.undo_log);
        if journal.is_empty() {
            warn!("no undo journal found, nothing to undo");
            return Ok(false);
        }

        let records = journal
            .read_all()
            .map_err(|source| OrganisationError::JournalRead {
                path: self.config.undo_log.clone(),
                source,
            })?;
        if records.is_empty() {
            warn!("undo journal contains no usable records");
            return Ok(false);
        }

        let scope = cleanup_scope(&records);

        for record in records.iter().rev() {
            replay(record)?;
        }

        // Post-replay cleanup is best-effort; the files are already home.
        if let Some(scope) = scope {
            let staging = scope.join(&self.config.staging_dir);
            match fs::remove_dir(&staging) {
                Ok(()) => debug!(dir = %staging.display(), "removed staging directory"),
                Err(e) => {
                    debug!(dir = %staging.display(), error = %e, "staging directory not removed");
                }
            }
            remove_empty_dirs(&scope);
        }

        let mut state = StateStore::load(&self.config.state_file);
        state.reset();
        if !state.persist().is_durable() {
            warn!("failed to clear processing state after undo");
        }
        if !journal.clear().is_durable() {
            warn!("failed to clear undo journal after undo");
        }

        info!(restored = records.len(), "undo completed");
        Ok(true)
    }
}

fn replay(record: &UndoRecord) -> Result<(), OrganisationError> {
    if !record.destination.exists() {
        warn!(
            destination = %record.destination.display(),
            "destination missing, skipping record"
        );
        return Ok(());
    }

    if let Some(parent) = record.source.parent() {
        fs::create_dir_all(parent).map_err(|e| OrganisationError::RestoreFailed {
            original: record.source.clone(),
            destination: record.destination.clone(),
            source: e,
        })?;
    }

    move_file(&record.destination, &record.source).map_err(|e| {
        OrganisationError::RestoreFailed {
            original: record.source.clone(),
            destination: record.destination.clone(),
            source: e,
        }
    })?;

    debug!(
        destination = %record.destination.display(),
        source = %record.source.display(),
        "restored"
    );
    Ok(())
}

/// Common parent directory of every recorded destination. Cleanup never
/// reaches above it.
fn cleanup_scope(records: &[UndoRecord]) -> Option<PathBuf> {
    let mut scope: Option<&Path> = None;
    for record in records {
        let Some(parent) = record.destination.parent() else {
            continue;
        };
        scope = Some(match scope {
            None => parent,
            Some(current) => common_parent(current, parent)?,
        });
    }
    scope.map(Path::to_path_buf)
}

fn common_parent<'a>(a: &'a Path, b: &Path) -> Option<&'a Path> {
    let mut candidate = a;
    loop {
        if b.starts_with(candidate) {
            return Some(candidate);
        }
        candidate = candidate.parent()?;
    }
}

/// Depth-first removal of now-empty directories, deleting leftover hidden
/// files along the way. Failures are logged at debug level and ignored.
fn remove_empty_dirs(root: &Path) {
    let entries = match fs::read_dir(root) {
        Ok(entries) => entries,
        Err(e) => {
            debug!(dir = %root.display(), error = %e, "cannot list directory for cleanup");
            return;
        }
    };

    for entry in entries.flatten() {
        let path = entry.path();
        let Ok(file_type) = entry.file_type() else {
            continue;
        };
        if file_type.is_dir() {
            remove_empty_dirs(&path);
        } else if file_type.is_file() && entry.file_name().to_string_lossy().starts_with('.') {
            match fs::remove_file(&path) {
                Ok(()) => debug!(file = %path.display(), "removed hidden file"),
                Err(e) => debug!(file = %path.display(), error = %e, "could not remove hidden file"),
            }
        }
    }

    match fs::remove_dir(root) {
        Ok(()) => debug!(dir = %root.display(), "removed empty directory"),
        Err(e) => debug!(dir = %root.display(), error = %e, "directory kept"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_undo_without_journal_is_a_noop() {
        let temp = TempDir::new().unwrap();
        let config = OrganiserConfig::default()
            .with_state_file(temp.path().join("state.json"))
            .with_undo_log(temp.path().join("undo.log"));

        assert!(!UndoEngine::new(config).undo().unwrap());
    }

    #[test]
    fn test_cleanup_scope_is_the_common_parent() {
        let records = vec![
            UndoRecord {
                source: PathBuf::from("/src/a.jpg"),
                destination: PathBuf::from("/dest/2023/01/15/a.jpg"),
            },
            UndoRecord {
                source: PathBuf::from("/src/b.jpg"),
                destination: PathBuf::from("/dest/2024/06/20/b.jpg"),
            },
        ];
        assert_eq!(cleanup_scope(&records), Some(PathBuf::from("/dest")));
    }

    #[test]
    fn test_cleanup_scope_single_record() {
        let records = vec![UndoRecord {
            source: PathBuf::from("/src/a.jpg"),
            destination: PathBuf::from("/dest/2024/01/15/a.jpg"),
        }];
        assert_eq!(cleanup_scope(&records), Some(PathBuf::from("/dest/2024/01/15")));
    }

    #[test]
    fn test_remove_empty_dirs_deletes_hidden_files() {
        let temp = TempDir::new().unwrap();
        let nested = temp.path().join("2024").join("01");
        fs::create_dir_all(&nested).unwrap();
        fs::write(nested.join(".DS_Store"), b"junk").unwrap();

        remove_empty_dirs(temp.path());

        assert!(!temp.path().exists());
    }

    #[test]
    fn test_remove_empty_dirs_keeps_occupied_directories() {
        let temp = TempDir::new().unwrap();
        let nested = temp.path().join("2024");
        fs::create_dir_all(&nested).unwrap();
        fs::write(nested.join("keep.jpg"), b"pixels").unwrap();

        remove_empty_dirs(temp.path());

        assert!(nested.join("keep.jpg").exists());
    }
}
