//! Error type for directory validation.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised when a source or destination directory is unusable.
///
/// These are fatal: they surface before any per-file work starts.
#[derive(Debug, Error)]
pub enum DirectoryError {
    /// The directory does not exist.
    #[error("Directory does not exist: {path}")]
    NotFound { path: PathBuf },

    /// The path exists but is not a directory.
    #[error("Not a directory: {path}")]
    NotADirectory { path: PathBuf },

    /// The directory exists but cannot be listed.
    #[error("Directory is not readable: {path}")]
    NotReadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The directory could not be created.
    #[error("Failed to create directory: {path}")]
    CreateFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
