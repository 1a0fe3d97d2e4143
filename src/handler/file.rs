//! File sink that appends one delimited line per record.

use super::LogHandler;
use crate::directory;
use crate::internal;
use crate::record::LogRecord;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::PathBuf;

/// Appends each record as one `;`-delimited line to `<base>/<name>.<ext>`.
///
/// Every `emit` is an independent open/append/close; no handle is kept
/// between calls and no locking is performed. Two handlers targeting the
/// same file name from different threads may interleave their appends —
/// the convention is one writer per file name, and it is not enforced.
#[derive(Debug, Clone)]
pub struct FileHandler {
    file_name: String,
    file_extension: String,
    /// Overrides the resolved base directory; set by tests and deployments
    /// that cannot use the platform data dir.
    base_dir: Option<PathBuf>,
}

impl FileHandler {
    /// Creates a handler writing to `<file_name>.log` under the shared base
    /// directory.
    #[must_use]
    pub fn new(file_name: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
            file_extension: "log".to_string(),
            base_dir: None,
        }
    }

    /// Replaces the default `log` extension, given without the leading dot.
    #[must_use]
    pub fn file_extension(mut self, extension: impl Into<String>) -> Self {
        self.file_extension = extension.into();
        self
    }

    /// Default `directories`-resolved data dir doesn't work for every deployment.
    #[must_use]
    pub fn base_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.base_dir = Some(dir.into());
        self
    }

    fn target_path(&self) -> Option<PathBuf> {
        let dir = match &self.base_dir {
            Some(dir) => {
                if fs::create_dir_all(dir).is_err() {
                    return None;
                }
                dir.clone()
            }
            None => directory::base_dir()?,
        };
        Some(dir.join(format!("{}.{}", self.file_name, self.file_extension)))
    }

    /// Create-with-line when the file is absent, otherwise append `\n` + line.
    /// A fresh file therefore never starts with a blank first line.
    fn append_line(&self, line: &str) {
        let Some(path) = self.target_path() else {
            // Writers silently no-op when the base directory is unavailable.
            return;
        };

        if path.exists() {
            let result = OpenOptions::new()
                .append(true)
                .open(&path)
                .and_then(|mut file| file.write_all(format!("\n{line}").as_bytes()));
            if let Err(e) = result {
                internal::error("FILE", &format!("Failed to append to {}: {e}", path.display()));
            }
        } else if let Err(e) = fs::write(&path, line) {
            internal::error("FILE", &format!("Failed to write {}: {e}", path.display()));
        }
    }
}

impl LogHandler for FileHandler {
    fn emit(&self, record: &LogRecord) {
        self.append_line(&record.encode());
    }
}
