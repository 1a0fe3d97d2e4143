//! The read side of the pipeline: lists, parses, deletes, and sizes the
//! files the write side produced.
//!
//! All read and delete work runs on one dedicated worker thread, so no two
//! store operations ever execute concurrently with each other. The worker is
//! NOT synchronized with writers: a `FileHandler` append racing a read or
//! delete on the same file is possible, and the parser copes by dropping the
//! partially-written trailing line instead of failing.

mod filter;

pub use filter::{FilterSettings, LogSection, group_by_day};

use crate::directory;
use crate::error::Error;
use crate::internal;
use crate::record::{LogFile, LogRecord, RecordSource};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::mpsc;
use std::thread::{self, JoinHandle};

/// Bounds memory on large files: only the last this-many parsed records per
/// file are kept by [`FileStore::read_all`].
pub const DEFAULT_PER_FILE_CAP: usize = 500;

enum Job {
    ReadAll {
        per_file_cap: usize,
        completion: Box<dyn FnOnce(Vec<LogRecord>) + Send>,
    },
    RemoveAll {
        completion: Box<dyn FnOnce() + Send>,
    },
}

/// Reader over the shared log directory.
///
/// Completions are invoked exactly once, on the worker thread. There is no
/// cancellation: callers that stop caring simply discard the result.
pub struct FileStore {
    base_dir: Option<PathBuf>,
    sender: Option<mpsc::Sender<Job>>,
    worker: Option<JoinHandle<()>>,
}

impl FileStore {
    /// Store over the default resolved base directory.
    #[must_use]
    pub fn new() -> Self {
        Self::build(None)
    }

    /// Store over an explicit directory — tests and deployments that cannot
    /// use the platform data dir.
    #[must_use]
    pub fn with_base_dir(dir: impl Into<PathBuf>) -> Self {
        Self::build(Some(dir.into()))
    }

    fn build(base_dir: Option<PathBuf>) -> Self {
        let (sender, receiver) = mpsc::channel::<Job>();
        let worker_dir = base_dir.clone();

        // Channel disconnect (store drop) ends the loop.
        let worker = thread::spawn(move || {
            while let Ok(job) = receiver.recv() {
                match job {
                    Job::ReadAll {
                        per_file_cap,
                        completion,
                    } => completion(read_all_records(worker_dir.as_deref(), per_file_cap)),
                    Job::RemoveAll { completion } => {
                        remove_all_files(worker_dir.as_deref());
                        completion();
                    }
                }
            }
        });

        Self {
            base_dir,
            sender: Some(sender),
            worker: Some(worker),
        }
    }

    /// Enumerates regular files directly under the base directory.
    ///
    /// # Errors
    /// [`Error::NoPath`] when the directory cannot be resolved or read —
    /// the only error condition the reader API surfaces.
    pub fn list_log_files(&self) -> Result<Vec<LogFile>, Error> {
        list_files(self.base_dir.as_deref())
    }

    /// Parses every file into records and delivers the concatenation to
    /// `completion` on the worker thread.
    ///
    /// Per file, only the last `per_file_cap` successfully parsed records
    /// are kept; malformed lines are dropped silently. Cross-file ordering
    /// is not guaranteed.
    pub fn read_all<F>(&self, per_file_cap: usize, completion: F)
    where
        F: FnOnce(Vec<LogRecord>) + Send + 'static,
    {
        if let Some(sender) = &self.sender {
            let _ = sender.send(Job::ReadAll {
                per_file_cap,
                completion: Box::new(completion),
            });
        }
    }

    /// Deletes every file under the base directory. Per-file failures are
    /// logged and skipped; `completion` fires exactly once regardless.
    pub fn remove_all<F>(&self, completion: F)
    where
        F: FnOnce() + Send + 'static,
    {
        if let Some(sender) = &self.sender {
            let _ = sender.send(Job::RemoveAll {
                completion: Box::new(completion),
            });
        }
    }

    /// Sums every file's byte length (unreadable files contribute 0) and
    /// formats the total in megabytes. Synchronous — meant for a lightweight
    /// usage display, not dispatched to the worker.
    #[must_use]
    pub fn total_size(&self) -> String {
        let total: u64 = self
            .list_log_files()
            .unwrap_or_default()
            .iter()
            .map(|file| fs::metadata(&file.path).map_or(0, |meta| meta.len()))
            .sum();

        format_megabytes(total)
    }
}

impl Default for FileStore {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for FileStore {
    fn drop(&mut self) {
        // Closing the channel lets the worker drain queued jobs and exit.
        drop(self.sender.take());
        if let Some(worker) = self.worker.take() {
            let _ = worker.join();
        }
    }
}

/// Fixed single-unit formatting for the usage display.
#[must_use]
pub fn format_megabytes(bytes: u64) -> String {
    #[allow(clippy::cast_precision_loss)]
    let megabytes = bytes as f64 / 1_000_000.0;
    format!("{megabytes:.1} MB")
}

fn resolve_dir(base: Option<&Path>) -> Option<PathBuf> {
    base.map_or_else(directory::base_dir, |dir| {
        fs::create_dir_all(dir).ok()?;
        Some(dir.to_path_buf())
    })
}

fn list_files(base: Option<&Path>) -> Result<Vec<LogFile>, Error> {
    let dir = resolve_dir(base).ok_or(Error::NoPath)?;

    let entries = fs::read_dir(&dir).map_err(|_| Error::NoPath)?;
    let mut files = Vec::new();
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_file() {
            files.push(LogFile::new(path));
        }
    }
    Ok(files)
}

fn read_all_records(base: Option<&Path>, per_file_cap: usize) -> Vec<LogRecord> {
    let files = match list_files(base) {
        Ok(files) => files,
        Err(e) => {
            internal::error("STORE", &format!("Read degraded to empty: {e}"));
            return Vec::new();
        }
    };

    let mut records = Vec::new();
    for file in files {
        // Unreadable files are skipped, not surfaced.
        let Ok(content) = fs::read_to_string(&file.path) else {
            internal::warning("STORE", &format!("Skipping unreadable {}", file.name));
            continue;
        };

        let parsed: Vec<LogRecord> = content
            .lines()
            .enumerate()
            .filter_map(|(index, line)| {
                LogRecord::decode(
                    line,
                    Some(RecordSource {
                        file_name: file.name.clone(),
                        index,
                    }),
                )
            })
            .collect();

        let skip = parsed.len().saturating_sub(per_file_cap);
        records.extend(parsed.into_iter().skip(skip));
    }
    records
}

fn remove_all_files(base: Option<&Path>) {
    let files = match list_files(base) {
        Ok(files) => files,
        Err(e) => {
            internal::error("STORE", &format!("Remove skipped: {e}"));
            return;
        }
    };

    for file in files {
        if let Err(e) = fs::remove_file(&file.path) {
            internal::error("STORE", &format!("Failed to remove {}: {e}", file.name));
        }
    }
}
