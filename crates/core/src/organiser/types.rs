//! Types shared across the organiser module.

use serde::Serialize;

/// A file the run could not organise, with a display-ready reason.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FailedFile {
    /// Base name of the file as scanned.
    pub name: String,
    /// Human-readable failure reason.
    pub reason: String,
}

impl FailedFile {
    pub(crate) fn new(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            reason: reason.into(),
        }
    }
}

/// Outcome of one organisation run.
#[derive(Debug, Clone, Serialize)]
pub struct Summary {
    /// Unique id of this run.
    pub run_id: String,
    /// Files moved to their final destination.
    pub processed: usize,
    /// Files that could not be organised, with reasons.
    pub failed: Vec<FailedFile>,
    /// Wall-clock duration of the run in milliseconds.
    pub duration_ms: u64,
}

impl Summary {
    /// Total files that reached a terminal outcome this run.
    pub fn total(&self) -> usize {
        self.processed + self.failed.len()
    }
}

/// Whether a best-effort durable write actually reached disk.
///
/// Writes to the processing state and the undo journal never abort a run;
/// this distinguishes "written and flushed" from "the write failed and
/// durable state may lag the filesystem".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Durability {
    /// The write was flushed to disk.
    Durable,
    /// The write failed; in-memory and durable state may now differ.
    Uncertain,
}

impl Durability {
    /// True when the write reached disk.
    pub fn is_durable(self) -> bool {
        matches!(self, Self::Durable)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_total() {
        let summary = Summary {
            run_id: "run-1".to_string(),
            processed: 3,
            failed: vec![FailedFile::new("a.jpg", "Missing date metadata")],
            duration_ms: 12,
        };
        assert_eq!(summary.total(), 4);
    }

    #[test]
    fn test_durability() {
        assert!(Durability::Durable.is_durable());
        assert!(!Durability::Uncertain.is_durable());
    }
}
