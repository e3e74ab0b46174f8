//! Error types for the organiser module.

use std::path::PathBuf;
use thiserror::Error;

use crate::scanner::DirectoryError;

/// Unrecoverable organiser failures.
///
/// Per-file problems never surface here; they are recorded in the run
/// summary. This type covers directory preconditions, staging-area setup,
/// journal access, and undo replay moves that must not be swallowed.
#[derive(Debug, Error)]
pub enum OrganisationError {
    /// Source or destination directory failed pre-validation.
    #[error(transparent)]
    Directory(#[from] DirectoryError),

    /// The undo journal could not be read.
    #[error("Failed to read undo journal {path}")]
    JournalRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A recorded move could not be replayed during undo.
    #[error("Failed to restore {destination} to {original}")]
    RestoreFailed {
        original: PathBuf,
        destination: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
