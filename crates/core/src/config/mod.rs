//! Application configuration.
//!
//! Loads the engine configuration from a TOML file with environment
//! variable overrides. This is the boundary where defaults live; the
//! engine itself only ever receives explicit settings.

mod loader;
mod types;

pub use loader::{load_config, load_config_from_str, validate_config};
pub use types::*;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration file not found: {0}")]
    FileNotFound(String),

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Configuration validation failed: {0}")]
    ValidationError(String),
}
