//! Types for the scanner module.

use serde::Serialize;
use std::path::PathBuf;

/// Outcome of scanning a source tree.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ScanResult {
    /// Eligible photo files, in traversal order.
    pub files: Vec<PathBuf>,
    /// Regular files that did not match the extension allow-list.
    pub other_count: usize,
    /// Entries or subdirectories that could not be read.
    pub inaccessible_count: usize,
}

impl ScanResult {
    /// Number of eligible photo files found.
    pub fn eligible_count(&self) -> usize {
        self.files.len()
    }

    /// Total entries accounted for by the scan.
    pub fn total_entries(&self) -> usize {
        self.files.len() + self.other_count + self.inaccessible_count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts() {
        let result = ScanResult {
            files: vec![PathBuf::from("a.jpg"), PathBuf::from("b.jpg")],
            other_count: 3,
            inaccessible_count: 1,
        };
        assert_eq!(result.eligible_count(), 2);
        assert_eq!(result.total_entries(), 6);
    }
}
