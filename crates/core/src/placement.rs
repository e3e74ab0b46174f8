//! Placement planning.
//!
//! Computes where a photo belongs under the destination root from its
//! classification keys, and resolves name collisions inside the target
//! directory. Paths are derived, never persisted: every run recomputes them.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

use crate::metadata::PhotoMetadata;

/// Errors raised while planning a placement.
#[derive(Debug, Error)]
pub enum PlacementError {
    /// The photo carries no timestamp, so no dated path can be derived.
    #[error("Missing date metadata")]
    MissingTimestamp,
}

/// Computes the target directory for a photo under `destination`.
///
/// Photos are placed at `destination/YYYY/MM/DD`, with a trailing place
/// segment when a usable place label is present. A photo without a
/// timestamp cannot be placed.
pub fn target_directory(
    destination: &Path,
    meta: &PhotoMetadata,
) -> Result<PathBuf, PlacementError> {
    let taken = meta.taken_at.ok_or(PlacementError::MissingTimestamp)?;

    let mut target = destination
        .join(taken.format("%Y").to_string())
        .join(taken.format("%m").to_string())
        .join(taken.format("%d").to_string());

    if let Some(place) = meta.place_label() {
        target.push(place);
    }

    Ok(target)
}

/// Resolves a collision-free file name inside `directory`.
///
/// Returns `name` untouched when it is free, otherwise appends `_1`, `_2`, …
/// to the stem until an unused name is found. Check-then-use is racy under
/// concurrent writers; the engine is the sole writer during a run.
pub fn unique_file_name(directory: &Path, name: &str) -> io::Result<String> {
    if !directory.join(name).try_exists()? {
        return Ok(name.to_string());
    }

    let (stem, extension) = split_name(name);
    let mut counter = 1u32;
    loop {
        let candidate = format!("{stem}_{counter}{extension}");
        if !directory.join(&candidate).try_exists()? {
            debug!(name, candidate = %candidate, "resolved name collision");
            return Ok(candidate);
        }
        counter += 1;
    }
}

fn split_name(name: &str) -> (&str, &str) {
    match name.rfind('.') {
        Some(idx) if idx > 0 => name.split_at(idx),
        _ => (name, ""),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveDateTime};
    use std::fs;
    use tempfile::TempDir;

    fn noon(year: i32, month: u32, day: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(year, month, day)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_dated_path_is_zero_padded() {
        let meta = PhotoMetadata::taken(noon(2024, 3, 5));
        let target = target_directory(Path::new("/library"), &meta).unwrap();
        assert_eq!(target, PathBuf::from("/library/2024/03/05"));
    }

    #[test]
    fn test_place_segment_is_appended() {
        let meta = PhotoMetadata::taken_at_place(noon(2024, 1, 15), "New York, New York, US");
        let target = target_directory(Path::new("/library"), &meta).unwrap();
        assert_eq!(
            target,
            PathBuf::from("/library/2024/01/15/New York, New York, US")
        );
    }

    #[test]
    fn test_sentinel_place_is_omitted() {
        let meta = PhotoMetadata::taken_at_place(noon(2024, 1, 15), crate::metadata::UNKNOWN_PLACE);
        let target = target_directory(Path::new("/library"), &meta).unwrap();
        assert_eq!(target, PathBuf::from("/library/2024/01/15"));
    }

    #[test]
    fn test_missing_timestamp_is_an_error() {
        let err = target_directory(Path::new("/library"), &PhotoMetadata::empty()).unwrap_err();
        assert_eq!(err.to_string(), "Missing date metadata");
    }

    #[test]
    fn test_free_name_is_unchanged() {
        let temp = TempDir::new().unwrap();
        let name = unique_file_name(temp.path(), "photo.jpg").unwrap();
        assert_eq!(name, "photo.jpg");
    }

    #[test]
    fn test_collisions_get_numeric_suffixes() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("photo.jpg"), b"x").unwrap();
        assert_eq!(unique_file_name(temp.path(), "photo.jpg").unwrap(), "photo_1.jpg");

        fs::write(temp.path().join("photo_1.jpg"), b"x").unwrap();
        assert_eq!(unique_file_name(temp.path(), "photo.jpg").unwrap(), "photo_2.jpg");
    }

    #[test]
    fn test_extensionless_names_get_suffixes_too() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("scan"), b"x").unwrap();
        assert_eq!(unique_file_name(temp.path(), "scan").unwrap(), "scan_1");
    }

    #[test]
    fn test_leading_dot_is_not_an_extension() {
        assert_eq!(split_name(".config"), (".config", ""));
        assert_eq!(split_name("photo.jpg"), ("photo", ".jpg"));
    }
}
