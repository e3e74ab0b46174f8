//! Types describing extracted photo metadata.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Place label reported by extractors whose coordinates resolved to nothing.
pub const UNKNOWN_PLACE: &str = "Unknown Location";

/// Classification keys extracted from a photo.
///
/// Both fields are independently optional: a photo may carry a timestamp
/// without a resolvable place, a place without a timestamp, or neither.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PhotoMetadata {
    /// When the photo was taken, from the content's own metadata.
    pub taken_at: Option<NaiveDateTime>,
    /// Human-readable place label, if one was resolved.
    pub place: Option<String>,
}

impl PhotoMetadata {
    /// Metadata with no usable keys.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Metadata with a timestamp only.
    pub fn taken(taken_at: NaiveDateTime) -> Self {
        Self {
            taken_at: Some(taken_at),
            place: None,
        }
    }

    /// Metadata with a timestamp and a place label.
    pub fn taken_at_place(taken_at: NaiveDateTime, place: impl Into<String>) -> Self {
        Self {
            taken_at: Some(taken_at),
            place: Some(place.into()),
        }
    }

    /// The place label, with the "no place resolved" sentinel normalised away.
    pub fn place_label(&self) -> Option<&str> {
        match self.place.as_deref() {
            Some(UNKNOWN_PLACE) | None => None,
            Some(place) => Some(place),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn noon(year: i32, month: u32, day: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(year, month, day)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_empty_has_no_keys() {
        let meta = PhotoMetadata::empty();
        assert!(meta.taken_at.is_none());
        assert!(meta.place_label().is_none());
    }

    #[test]
    fn test_place_label_passthrough() {
        let meta = PhotoMetadata::taken_at_place(noon(2024, 1, 15), "Lisbon, PT");
        assert_eq!(meta.place_label(), Some("Lisbon, PT"));
    }

    #[test]
    fn test_place_label_normalises_sentinel() {
        let meta = PhotoMetadata::taken_at_place(noon(2024, 1, 15), UNKNOWN_PLACE);
        assert!(meta.place_label().is_none());
    }

    #[test]
    fn test_taken_has_no_place() {
        let meta = PhotoMetadata::taken(noon(2024, 6, 20));
        assert!(meta.taken_at.is_some());
        assert!(meta.place.is_none());
    }
}
