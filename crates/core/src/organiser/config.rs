//! Configuration for the organiser and undo engine.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::scanner::ScannerConfig;

/// Configuration shared by the transactional mover and the undo engine.
///
/// Artifact locations are plain fields so that callers decide where durable
/// state lives; the engine holds no process-wide defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrganiserConfig {
    /// Durable per-file processing state.
    #[serde(default = "default_state_file")]
    pub state_file: PathBuf,

    /// Append-only journal of committed moves.
    #[serde(default = "default_undo_log")]
    pub undo_log: PathBuf,

    /// Name of the staging directory created under the destination root.
    #[serde(default = "default_staging_dir")]
    pub staging_dir: String,

    /// Scanner settings, also used to re-check caller-supplied file lists.
    #[serde(default)]
    pub scanner: ScannerConfig,
}

fn default_state_file() -> PathBuf {
    PathBuf::from(".snapsort/state.json")
}

fn default_undo_log() -> PathBuf {
    PathBuf::from(".snapsort/undo.log")
}

fn default_staging_dir() -> String {
    ".staging".to_string()
}

impl Default for OrganiserConfig {
    fn default() -> Self {
        Self {
            state_file: default_state_file(),
            undo_log: default_undo_log(),
            staging_dir: default_staging_dir(),
            scanner: ScannerConfig::default(),
        }
    }
}

impl OrganiserConfig {
    /// Sets the state file location.
    pub fn with_state_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.state_file = path.into();
        self
    }

    /// Sets the undo journal location.
    pub fn with_undo_log(mut self, path: impl Into<PathBuf>) -> Self {
        self.undo_log = path.into();
        self
    }

    /// Sets the staging directory name.
    pub fn with_staging_dir(mut self, name: impl Into<String>) -> Self {
        self.staging_dir = name.into();
        self
    }

    /// Sets the scanner configuration.
    pub fn with_scanner(mut self, scanner: ScannerConfig) -> Self {
        self.scanner = scanner;
        self
    }
}
