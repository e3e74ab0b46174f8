//! Filesystem move primitive shared by the mover and the undo engine.

use std::fs;
use std::io;
use std::path::Path;

/// Moves a file, preferring an atomic rename.
///
/// Cross-filesystem moves fail with EXDEV (18 on Linux); those fall back to
/// copy-then-remove, which the staging strategy allows for.
pub(crate) fn move_file(source: &Path, destination: &Path) -> io::Result<()> {
    match fs::rename(source, destination) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == io::ErrorKind::CrossesDevices || e.raw_os_error() == Some(18) => {
            fs::copy(source, destination)?;
            fs::remove_file(source)?;
            Ok(())
        }
        Err(e) => Err(e),
    }
}
