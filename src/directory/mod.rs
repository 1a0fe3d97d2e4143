//! Resolves the single shared directory all log files live under.

use std::fs;
use std::path::PathBuf;

/// Fixed subfolder appended below the platform application-data root.
const LOG_FOLDER_NAME: &str = "fanlog";

/// Resolves and creates the base log directory, idempotently.
///
/// `None` when the platform data root cannot be determined or the directory
/// cannot be created (read-only filesystem, permissions). Never panics —
/// writers no-op and readers degrade to empty results on `None`.
#[must_use]
pub fn base_dir() -> Option<PathBuf> {
    let dirs = directories::ProjectDirs::from("", "", LOG_FOLDER_NAME)?;
    let path = dirs
        .state_dir()
        .unwrap_or_else(|| dirs.data_dir())
        .join("logs");

    fs::create_dir_all(&path).ok()?;
    Some(path)
}
