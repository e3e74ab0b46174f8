//! Trait definition for the metadata extraction seam.

use std::path::Path;
use std::sync::Arc;

use super::error::MetadataError;
use super::types::PhotoMetadata;

/// An external collaborator that extracts classification keys from a photo.
pub trait MetadataExtractor: Send + Sync {
    /// Extracts the (timestamp, place) pair for a single file.
    fn extract(&self, path: &Path) -> Result<PhotoMetadata, MetadataError>;
}

impl<T: MetadataExtractor + ?Sized> MetadataExtractor for Arc<T> {
    fn extract(&self, path: &Path) -> Result<PhotoMetadata, MetadataError> {
        (**self).extract(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedExtractor(PhotoMetadata);

    impl MetadataExtractor for FixedExtractor {
        fn extract(&self, _path: &Path) -> Result<PhotoMetadata, MetadataError> {
            Ok(self.0.clone())
        }
    }

    #[test]
    fn test_arc_delegates() {
        let extractor: Arc<dyn MetadataExtractor> = Arc::new(FixedExtractor(PhotoMetadata::empty()));
        let meta = extractor.extract(Path::new("photo.jpg")).unwrap();
        assert_eq!(meta, PhotoMetadata::empty());
    }
}
