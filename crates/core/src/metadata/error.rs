//! Error type for metadata extraction.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by metadata extractors.
///
/// All variants are per-file: the organiser records them as a failed outcome
/// for that file and keeps going.
#[derive(Debug, Error)]
pub enum MetadataError {
    /// The file could not be opened or read.
    #[error("Failed to read {path}")]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file's format is not one the extractor understands.
    #[error("Unsupported file format: {path}")]
    UnsupportedFormat { path: PathBuf },

    /// The file was readable but its metadata made no sense.
    #[error("Corrupt metadata in {path}: {reason}")]
    Corrupt { path: PathBuf, reason: String },
}
