//! File discovery for the input directory.
//!
//! Lists candidate files in the flat input directory and filters them by
//! extension. Listing order follows the underlying directory listing and is
//! not guaranteed sorted.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{Result, ShiftError};

/// Discover candidate input files in `input_dir`.
///
/// Zero matches is not an error; the caller receives an empty list. Only
/// directory-level problems (missing directory, denied access) abort the
/// batch run.
pub fn discover_input_files(input_dir: &Path, extension: &str) -> Result<Vec<PathBuf>> {
    debug!("Searching for .{} files in: {}", extension, input_dir.display());

    let entries = std::fs::read_dir(input_dir).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => ShiftError::DirectoryNotFound {
            path: input_dir.to_path_buf(),
        },
        std::io::ErrorKind::PermissionDenied => ShiftError::PermissionDenied {
            path: input_dir.to_path_buf(),
        },
        _ => ShiftError::Io(e),
    })?;

    let mut files = Vec::new();
    for entry in entries {
        let entry = entry?;
        let path = entry.path();
        if path.is_file() && has_extension(&path, extension) {
            files.push(path);
        }
    }

    debug!("Found {} candidate files", files.len());
    Ok(files)
}

/// Check whether a path carries the configured extension (case-sensitive).
fn has_extension(path: &Path, extension: &str) -> bool {
    path.extension().is_some_and(|ext| ext == extension)
}
