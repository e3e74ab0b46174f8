//! The transactional mover.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;

use tracing::{debug, error, info, warn};
use uuid::Uuid;

use crate::metadata::MetadataExtractor;
use crate::placement;
use crate::scanner::{validate_readable_dir, DirectoryError, FsScanner};

use super::config::OrganiserConfig;
use super::error::OrganisationError;
use super::fsops::move_file;
use super::journal::UndoJournal;
use super::state::{FileStatus, StateStore};
use super::types::{FailedFile, Summary};

/// A staged file that must go back where it came from.
struct Restore {
    staged: PathBuf,
    original: PathBuf,
}

/// Terminal outcome of one file's per-run protocol.
enum FileOutcome {
    Committed,
    Failed {
        reason: String,
        restore: Option<Restore>,
    },
}

impl FileOutcome {
    fn failed(reason: impl Into<String>) -> Self {
        Self::Failed {
            reason: reason.into(),
            restore: None,
        }
    }
}

/// Transactional mover: organises photos into a dated destination tree.
///
/// Each file goes through a two-phase move: stage into a holding directory
/// under the destination root, then commit into the final target directory.
/// Splitting the move attributes a failure to one phase, and the undo
/// journal is written strictly after the commit rename, so it never records
/// a move that did not happen.
pub struct Organiser {
    extractor: Arc<dyn MetadataExtractor>,
    config: OrganiserConfig,
}

impl Organiser {
    /// Creates a mover backed by the given metadata extractor.
    pub fn new(extractor: Arc<dyn MetadataExtractor>, config: OrganiserConfig) -> Self {
        Self { extractor, config }
    }

    /// Organises photos from `source` into `destination`.
    ///
    /// With `files` unset the source tree is scanned first. A single file's
    /// failure never aborts the run; every outcome lands in the returned
    /// summary. Only directory preconditions fail fatally.
    pub fn organise(
        &self,
        source: &Path,
        destination: &Path,
        files: Option<Vec<PathBuf>>,
    ) -> Result<Summary, OrganisationError> {
        validate_readable_dir(source)?;
        ensure_destination(destination)?;

        let files = match files {
            Some(files) => files,
            None => FsScanner::new(self.config.scanner.clone()).scan(source)?.files,
        };

        let staging = destination.join(&self.config.staging_dir);
        fs::create_dir_all(&staging).map_err(|source| DirectoryError::CreateFailed {
            path: staging.clone(),
            source,
        })?;

        let run_id = Uuid::new_v4().to_string();
        let started = Instant::now();
        info!(
            run_id = %run_id,
            source = %source.display(),
            destination = %destination.display(),
            files = files.len(),
            "starting organisation run"
        );

        let mut state = StateStore::load(&self.config.state_file);
        // Skip decisions read the state as of run start, so a file processed
        // earlier in this run never hides a same-named sibling later in the
        // list.
        let resume_skip = state.processed_names();
        let journal = UndoJournal::new(&self.config.undo_log);

        let mut processed = 0usize;
        let mut failed: Vec<FailedFile> = Vec::new();

        for file in &files {
            let Some(name) = file_name(file) else {
                continue;
            };

            if !file.is_file() || !self.config.scanner.matches_extension(&name) {
                continue;
            }

            if resume_skip.contains(&name) {
                debug!(file = %name, "already processed, skipping");
                continue;
            }

            match self.process_file(file, &name, destination, &staging, &journal) {
                FileOutcome::Committed => {
                    state.mark(name, FileStatus::Processed);
                    state.persist();
                    processed += 1;
                }
                FileOutcome::Failed { reason, restore } => {
                    warn!(file = %name, reason = %reason, "file not organised");
                    state.mark(name.clone(), FileStatus::Failed);
                    state.persist();
                    if let Some(restore) = restore {
                        restore_staged(&restore);
                    }
                    failed.push(FailedFile::new(name, reason));
                }
            }
        }

        let summary = Summary {
            run_id,
            processed,
            failed,
            duration_ms: started.elapsed().as_millis() as u64,
        };

        info!(
            processed = summary.processed,
            failed = summary.failed.len(),
            "organisation run finished"
        );
        for failure in &summary.failed {
            warn!(file = %failure.name, reason = %failure.reason, "failed");
        }

        Ok(summary)
    }

    fn process_file(
        &self,
        file: &Path,
        name: &str,
        destination: &Path,
        staging: &Path,
        journal: &UndoJournal,
    ) -> FileOutcome {
        debug!(file = %file.display(), "processing file");

        let meta = match self.extractor.extract(file) {
            Ok(meta) => meta,
            Err(e) => return FileOutcome::failed(e.to_string()),
        };

        let target_dir = match placement::target_directory(destination, &meta) {
            Ok(dir) => dir,
            Err(e) => return FileOutcome::failed(e.to_string()),
        };

        if let Err(e) = fs::create_dir_all(&target_dir) {
            return FileOutcome::failed(format!(
                "Failed to create {}: {e}",
                target_dir.display()
            ));
        }

        let unique_name = match placement::unique_file_name(&target_dir, name) {
            Ok(unique_name) => unique_name,
            Err(e) => return FileOutcome::failed(format!("Failed to resolve a unique name: {e}")),
        };

        // Stage: take the file off the source tree. On failure the original
        // is still untouched in place.
        let staged = staging.join(&unique_name);
        if let Err(e) = move_file(file, &staged) {
            return FileOutcome::failed(format!("Staging move failed: {e}"));
        }

        // Commit: the rename below is the point of no return; the journal
        // write stays strictly after it.
        let final_path = target_dir.join(&unique_name);
        match move_file(&staged, &final_path) {
            Ok(()) => {
                debug!(file = %name, destination = %final_path.display(), "committed");
                journal.append(file, &final_path);
                FileOutcome::Committed
            }
            Err(e) => FileOutcome::Failed {
                reason: format!("Final move failed: {e}"),
                restore: Some(Restore {
                    staged,
                    original: file.to_path_buf(),
                }),
            },
        }
    }
}

/// Best-effort return of a staged file to its original path. Terminal
/// recovery: failure is logged and never escalated.
fn restore_staged(restore: &Restore) {
    if let Err(e) = move_file(&restore.staged, &restore.original) {
        error!(
            staged = %restore.staged.display(),
            original = %restore.original.display(),
            error = %e,
            "failed to restore staged file"
        );
    }
}

fn file_name(path: &Path) -> Option<String> {
    path.file_name().map(|name| name.to_string_lossy().into_owned())
}

/// The destination must exist or be creatable.
fn ensure_destination(destination: &Path) -> Result<(), DirectoryError> {
    fs::create_dir_all(destination).map_err(|source| DirectoryError::CreateFailed {
        path: destination.to_path_buf(),
        source,
    })
}
