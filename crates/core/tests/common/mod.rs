//! Common test utilities for engine integration tests.

#![allow(dead_code)]

use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

use chrono::{NaiveDate, NaiveDateTime};
use tempfile::TempDir;

use snapsort_core::testing::MockExtractor;
use snapsort_core::{Organiser, OrganiserConfig, UndoEngine};

/// Fixture wiring a temp source/destination pair to a mock extractor.
pub struct TestFixture {
    /// Holds the temp tree alive for the duration of the test.
    pub temp: TempDir,
    /// Source tree with the photos to organise.
    pub source: PathBuf,
    /// Destination library root.
    pub dest: PathBuf,
    /// Mock extractor - script per-file metadata here.
    pub extractor: Arc<MockExtractor>,
    /// Engine configuration pointing at temp-local artifacts.
    pub config: OrganiserConfig,
}

impl TestFixture {
    /// Creates a fixture with empty source and destination trees.
    pub fn new() -> Self {
        init_logging();

        let temp = TempDir::new().expect("Failed to create temp dir");
        let source = temp.path().join("source");
        let dest = temp.path().join("library");
        fs::create_dir_all(&source).unwrap();
        fs::create_dir_all(&dest).unwrap();

        let config = OrganiserConfig::default()
            .with_state_file(temp.path().join("state.json"))
            .with_undo_log(temp.path().join("undo.log"));

        Self {
            temp,
            source,
            dest,
            extractor: Arc::new(MockExtractor::new()),
            config,
        }
    }

    /// Builds an organiser over this fixture's trees and artifacts.
    pub fn organiser(&self) -> Organiser {
        Organiser::new(self.extractor.clone(), self.config.clone())
    }

    /// Builds an undo engine over the same artifacts.
    pub fn undo_engine(&self) -> UndoEngine {
        UndoEngine::new(self.config.clone())
    }

    /// Creates a file under the source tree, parents included.
    pub fn add_photo(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.source.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, content).unwrap();
        path
    }
}

/// Builds a timestamp at noon on the given day.
pub fn taken_on(year: i32, month: u32, day: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, day)
        .unwrap()
        .and_hms_opt(12, 0, 0)
        .unwrap()
}

fn init_logging() {
    use tracing_subscriber::EnvFilter;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
