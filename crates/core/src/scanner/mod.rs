//! Directory scanning.
//!
//! Walks a source tree and classifies every entry as an eligible photo, an
//! uninteresting file, or inaccessible. The walk never mutates the
//! filesystem and recovers per entry: an unreadable file or subdirectory is
//! counted and skipped instead of aborting the scan.

mod config;
mod error;
mod fs_scanner;
mod types;

pub use config::ScannerConfig;
pub use error::DirectoryError;
pub use fs_scanner::{validate_readable_dir, FsScanner};
pub use types::ScanResult;
