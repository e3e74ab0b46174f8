//! Append-only journal of committed moves.

use serde::{Deserialize, Serialize};
use std::fs::{self, File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use tracing::{error, warn};

use super::types::Durability;

/// One committed move: where the file came from and where it ended up.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UndoRecord {
    /// Original path under the source tree.
    pub source: PathBuf,
    /// Final path under the destination tree.
    pub destination: PathBuf,
}

/// Durable, append-only record of committed moves, one JSON line each.
///
/// The journal is the single source of truth for undo: a record is appended
/// only once a file is at its true final location, and the journal is
/// truncated only after a successful undo.
#[derive(Debug, Clone)]
pub struct UndoJournal {
    path: PathBuf,
}

impl UndoJournal {
    /// Creates a journal handle at the given location.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Location of the journal file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether the journal is absent or empty.
    pub fn is_empty(&self) -> bool {
        fs::metadata(&self.path).map(|m| m.len() == 0).unwrap_or(true)
    }

    /// Appends one committed move, flushed before returning.
    pub fn append(&self, source: &Path, destination: &Path) -> Durability {
        let record = UndoRecord {
            source: source.to_path_buf(),
            destination: destination.to_path_buf(),
        };
        match self.append_record(&record) {
            Ok(()) => Durability::Durable,
            Err(e) => {
                error!(
                    source = %source.display(),
                    destination = %destination.display(),
                    error = %e,
                    "failed to journal move; undo will not restore this file"
                );
                Durability::Uncertain
            }
        }
    }

    fn append_record(&self, record: &UndoRecord) -> std::io::Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let mut file = OpenOptions::new().create(true).append(true).open(&self.path)?;
        let mut line = serde_json::to_vec(record)?;
        line.push(b'\n');
        file.write_all(&line)?;
        file.sync_all()?;
        Ok(())
    }

    /// Reads every parseable record in append order.
    ///
    /// Malformed lines (a torn write from a crash) are skipped with a
    /// warning so the rest of the journal stays usable.
    pub fn read_all(&self) -> std::io::Result<Vec<UndoRecord>> {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e),
        };

        let mut records = Vec::new();
        for line in BufReader::new(file).lines() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            match serde_json::from_str(&line) {
                Ok(record) => records.push(record),
                Err(e) => {
                    warn!(path = %self.path.display(), error = %e, "skipping malformed journal line");
                }
            }
        }
        Ok(records)
    }

    /// Truncates the journal to empty.
    pub fn clear(&self) -> Durability {
        match File::create(&self.path) {
            Ok(_) => Durability::Durable,
            Err(e) => {
                error!(path = %self.path.display(), error = %e, "failed to clear undo journal");
                Durability::Uncertain
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_journal_is_empty() {
        let temp = TempDir::new().unwrap();
        let journal = UndoJournal::new(temp.path().join("undo.log"));
        assert!(journal.is_empty());
        assert!(journal.read_all().unwrap().is_empty());
    }

    #[test]
    fn test_append_and_read_preserve_order() {
        let temp = TempDir::new().unwrap();
        let journal = UndoJournal::new(temp.path().join("undo.log"));

        assert!(journal
            .append(Path::new("/src/a.jpg"), Path::new("/dest/2024/01/15/a.jpg"))
            .is_durable());
        assert!(journal
            .append(Path::new("/src/b.jpg"), Path::new("/dest/2024/06/20/b.jpg"))
            .is_durable());

        let records = journal.read_all().unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].source, PathBuf::from("/src/a.jpg"));
        assert_eq!(records[1].destination, PathBuf::from("/dest/2024/06/20/b.jpg"));
    }

    #[test]
    fn test_malformed_lines_are_skipped() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("undo.log");
        let journal = UndoJournal::new(&path);

        journal.append(Path::new("/src/a.jpg"), Path::new("/dest/a.jpg"));
        let mut file = OpenOptions::new().append(true).open(&path).unwrap();
        file.write_all(b"{torn line\n").unwrap();
        journal.append(Path::new("/src/b.jpg"), Path::new("/dest/b.jpg"));

        let records = journal.read_all().unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].source, PathBuf::from("/src/b.jpg"));
    }

    #[test]
    fn test_clear_truncates() {
        let temp = TempDir::new().unwrap();
        let journal = UndoJournal::new(temp.path().join("undo.log"));

        journal.append(Path::new("/src/a.jpg"), Path::new("/dest/a.jpg"));
        assert!(!journal.is_empty());

        assert!(journal.clear().is_durable());
        assert!(journal.is_empty());
        assert!(journal.read_all().unwrap().is_empty());
    }

    #[test]
    fn test_append_failure_is_uncertain() {
        let temp = TempDir::new().unwrap();
        let blocker = temp.path().join("blocker");
        fs::write(&blocker, b"file, not a directory").unwrap();

        let journal = UndoJournal::new(blocker.join("undo.log"));
        let durability = journal.append(Path::new("/src/a.jpg"), Path::new("/dest/a.jpg"));
        assert_eq!(durability, Durability::Uncertain);
    }
}
