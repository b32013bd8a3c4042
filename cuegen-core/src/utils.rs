//! Path helpers shared by the library and the CLI.

use std::path::{Path, PathBuf};

use crate::error::{CoreError, CoreResult};

/// Safely extracts filename from a path with consistent error handling.
/// Returns the filename as a String, or an error if the path has no filename component.
pub fn get_filename_safe(path: &Path) -> CoreResult<String> {
    Ok(path
        .file_name()
        .ok_or_else(|| {
            CoreError::PathError(format!("Failed to get filename for {}", path.display()))
        })?
        .to_string_lossy()
        .to_string())
}

/// Makes `path` absolute against the current directory without touching the filesystem.
pub fn absolute_path(path: &Path) -> CoreResult<PathBuf> {
    std::path::absolute(path).map_err(|e| {
        CoreError::PathError(format!(
            "Failed to resolve absolute path for {}: {e}",
            path.display()
        ))
    })
}

/// Ensures `path` is an existing regular file.
pub fn ensure_input_file(path: &Path) -> CoreResult<()> {
    if path.is_file() {
        Ok(())
    } else {
        Err(CoreError::InputNotFound(format!(
            "File `{}` does not exist.",
            path.display()
        )))
    }
}
