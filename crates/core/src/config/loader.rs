use figment::{
    providers::{Env, Format, Toml},
    Figment,
};
use std::path::Path;

use super::{types::Config, ConfigError};

/// Load configuration from file with environment variable overrides
pub fn load_config(path: &Path) -> Result<Config, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::FileNotFound(path.display().to_string()));
    }

    let config: Config = Figment::new()
        .merge(Toml::file(path))
        .merge(Env::prefixed("SNAPSORT_").split("_"))
        .extract()
        .map_err(|e| ConfigError::ParseError(e.to_string()))?;

    validate_config(&config)?;
    Ok(config)
}

/// Load configuration from TOML string (useful for testing)
pub fn load_config_from_str(toml_str: &str) -> Result<Config, ConfigError> {
    let config: Config =
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError(e.to_string()))?;
    validate_config(&config)?;
    Ok(config)
}

/// Checks invariants that serde cannot express.
pub fn validate_config(config: &Config) -> Result<(), ConfigError> {
    let organiser = &config.organiser;

    if organiser.staging_dir.is_empty()
        || organiser.staging_dir.contains(std::path::MAIN_SEPARATOR)
    {
        return Err(ConfigError::ValidationError(format!(
            "staging_dir must be a bare directory name, got {:?}",
            organiser.staging_dir
        )));
    }

    if organiser.scanner.extensions.is_empty() {
        return Err(ConfigError::ValidationError(
            "scanner.extensions must not be empty".to_string(),
        ));
    }
    if let Some(ext) = organiser
        .scanner
        .extensions
        .iter()
        .find(|ext| !ext.starts_with('.'))
    {
        return Err(ConfigError::ValidationError(format!(
            "extensions must start with a dot, got {ext:?}"
        )));
    }

    Ok(())
}
