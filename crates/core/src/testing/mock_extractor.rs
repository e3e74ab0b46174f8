//! Mock metadata extractor for testing.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::metadata::{MetadataError, MetadataExtractor, PhotoMetadata};

/// Scripted response for one file name.
#[derive(Debug, Clone)]
enum Scripted {
    Metadata(PhotoMetadata),
    Fail(String),
}

/// Mock implementation of [`MetadataExtractor`].
///
/// Responses are scripted per base file name; unscripted files yield empty
/// metadata (no timestamp, no place). Extraction calls are recorded for
/// assertions.
///
/// # Example
///
/// ```rust,ignore
/// use snapsort_core::testing::MockExtractor;
///
/// let extractor = MockExtractor::new();
/// extractor.set_metadata("photo.jpg", PhotoMetadata::taken(taken_at));
/// extractor.set_failure("broken.jpg", "truncated EXIF block");
///
/// let organiser = Organiser::new(Arc::new(extractor), config);
/// ```
#[derive(Debug, Default)]
pub struct MockExtractor {
    responses: Mutex<HashMap<String, Scripted>>,
    calls: Mutex<Vec<PathBuf>>,
}

impl MockExtractor {
    /// Creates a mock with no scripted responses.
    pub fn new() -> Self {
        Self::default()
    }

    /// Scripts metadata for a file name.
    pub fn set_metadata(&self, name: impl Into<String>, meta: PhotoMetadata) {
        self.responses
            .lock()
            .unwrap()
            .insert(name.into(), Scripted::Metadata(meta));
    }

    /// Scripts an extraction failure for a file name.
    pub fn set_failure(&self, name: impl Into<String>, reason: impl Into<String>) {
        self.responses
            .lock()
            .unwrap()
            .insert(name.into(), Scripted::Fail(reason.into()));
    }

    /// Paths extracted so far, in call order.
    pub fn recorded_calls(&self) -> Vec<PathBuf> {
        self.calls.lock().unwrap().clone()
    }

    /// Number of extraction calls performed.
    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

impl MetadataExtractor for MockExtractor {
    fn extract(&self, path: &Path) -> Result<PhotoMetadata, MetadataError> {
        self.calls.lock().unwrap().push(path.to_path_buf());

        let name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();

        match self.responses.lock().unwrap().get(&name) {
            Some(Scripted::Metadata(meta)) => Ok(meta.clone()),
            Some(Scripted::Fail(reason)) => Err(MetadataError::Corrupt {
                path: path.to_path_buf(),
                reason: reason.clone(),
            }),
            None => Ok(PhotoMetadata::empty()),
        }
    }
}
