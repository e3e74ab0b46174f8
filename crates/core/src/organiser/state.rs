//! Durable per-file processing state.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fs::{self, File};
use std::path::{Path, PathBuf};

use tracing::{error, warn};

use super::types::Durability;

/// Terminal outcome recorded for a file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FileStatus {
    /// The file reached its final destination.
    Processed,
    /// The file failed; it is retried on the next run.
    Failed,
}

/// Durable mapping from file name to processing outcome.
///
/// Loading never fails: missing or corrupt state resets to empty, so a
/// damaged artifact degrades to a full re-run instead of an abort.
#[derive(Debug)]
pub struct StateStore {
    path: PathBuf,
    entries: BTreeMap<String, FileStatus>,
}

impl StateStore {
    /// Loads state from `path`, falling back to empty.
    pub fn load(path: &Path) -> Self {
        let entries = match fs::read(path) {
            Ok(bytes) => match serde_json::from_slice(&bytes) {
                Ok(entries) => entries,
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "corrupt state file, starting empty");
                    BTreeMap::new()
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
            Err(e) => {
                warn!(path = %path.display(), error = %e, "unreadable state file, starting empty");
                BTreeMap::new()
            }
        };
        Self {
            path: path.to_path_buf(),
            entries,
        }
    }

    /// Current status for a file name, if any.
    pub fn status(&self, name: &str) -> Option<FileStatus> {
        self.entries.get(name).copied()
    }

    /// Whether a file name is marked processed.
    pub fn is_processed(&self, name: &str) -> bool {
        self.status(name) == Some(FileStatus::Processed)
    }

    /// Names marked processed, as a resume snapshot.
    pub fn processed_names(&self) -> BTreeSet<String> {
        self.entries
            .iter()
            .filter(|(_, status)| **status == FileStatus::Processed)
            .map(|(name, _)| name.clone())
            .collect()
    }

    /// Records a terminal outcome for a file name.
    pub fn mark(&mut self, name: impl Into<String>, status: FileStatus) {
        self.entries.insert(name.into(), status);
    }

    /// Drops every recorded outcome.
    pub fn reset(&mut self) {
        self.entries.clear();
    }

    /// Number of recorded outcomes.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no outcomes are recorded.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Writes the state to disk, atomically replacing the previous file.
    pub fn persist(&self) -> Durability {
        match self.write_atomic() {
            Ok(()) => Durability::Durable,
            Err(e) => {
                error!(path = %self.path.display(), error = %e, "failed to persist processing state");
                Durability::Uncertain
            }
        }
    }

    fn write_atomic(&self) -> std::io::Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let tmp = self.path.with_extension("tmp");
        let file = File::create(&tmp)?;
        serde_json::to_writer(&file, &self.entries)?;
        file.sync_all()?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}
