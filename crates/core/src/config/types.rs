use serde::{Deserialize, Serialize};

use crate::organiser::OrganiserConfig;

/// Root configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    /// Engine settings: durable artifact locations, staging, scanner.
    #[serde(default)]
    pub organiser: OrganiserConfig,
}
