//! Configuration for the directory scanner.

use serde::{Deserialize, Serialize};

/// Configuration for the directory scanner.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScannerConfig {
    /// File-extension allow-list, lowercase, with leading dots.
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,
}

fn default_extensions() -> Vec<String> {
    [
        // Common image formats
        ".jpg", ".jpeg", ".tiff", ".png", ".bmp", ".gif", ".heic", ".webp", ".avif",
        // Raw image formats
        ".raw", ".cr2", ".cr3", ".nef", ".arw", ".orf", ".rw2", ".dng",
    ]
    .iter()
    .map(|ext| ext.to_string())
    .collect()
}

impl Default for ScannerConfig {
    fn default() -> Self {
        Self {
            extensions: default_extensions(),
        }
    }
}

impl ScannerConfig {
    /// Replaces the extension allow-list.
    pub fn with_extensions(mut self, extensions: Vec<String>) -> Self {
        self.extensions = extensions;
        self
    }

    /// Whether a file name matches the allow-list (case-insensitive).
    pub fn matches_extension(&self, name: &str) -> bool {
        let lower = name.to_lowercase();
        self.extensions.iter().any(|ext| lower.ends_with(ext.as_str()))
    }
}
