//! Transactional photo library reorganisation engine.
//!
//! Scans a source tree for photos, plans dated destination paths from
//! externally extracted metadata, moves files through a staged two-phase
//! protocol, and keeps durable state so runs resume after interruption and
//! can be fully undone.

pub mod config;
pub mod metadata;
pub mod organiser;
pub mod placement;
pub mod scanner;
pub mod testing;

pub use config::{load_config, load_config_from_str, validate_config, Config, ConfigError};
pub use metadata::{MetadataError, MetadataExtractor, PhotoMetadata, UNKNOWN_PLACE};
pub use organiser::{
    Durability, FailedFile, FileStatus, Organiser, OrganisationError, OrganiserConfig, StateStore,
    Summary, UndoEngine, UndoJournal, UndoRecord,
};
pub use placement::{target_directory, unique_file_name, PlacementError};
pub use scanner::{DirectoryError, FsScanner, ScanResult, ScannerConfig};
