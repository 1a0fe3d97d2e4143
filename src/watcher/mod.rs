//! Change notifications for the log directory.
//!
//! No caller in the core pipeline consumes these yet; the watcher is an
//! independent component with no dependents. The backend is a polling
//! fingerprint of the directory — the public start/stop/receiver surface
//! does not expose the mechanism, so an OS-notification backend can replace
//! the poll loop without an API change.

use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread::{self, JoinHandle};
use std::time::{Duration, SystemTime};

/// Emitted once per detected change batch. Carries no payload — consumers
/// re-read the directory to find out what changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirectoryEvent {
    Changed,
}

const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(250);

/// Watches one directory and emits [`DirectoryEvent::Changed`] on its own
/// worker thread.
///
/// State machine: Idle --start()--> Watching --stop()--> Idle, nothing else.
/// `stop` is idempotent; dropping the watcher stops it implicitly.
pub struct DirectoryWatcher {
    dir: PathBuf,
    poll_interval: Duration,
    events: Sender<DirectoryEvent>,
    shutdown: Arc<AtomicBool>,
    thread: Option<JoinHandle<()>>,
}

impl DirectoryWatcher {
    /// Creates an idle watcher and the receiver its events arrive on.
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> (Self, Receiver<DirectoryEvent>) {
        let (events, receiver) = mpsc::channel();
        (
            Self {
                dir: dir.into(),
                poll_interval: DEFAULT_POLL_INTERVAL,
                events,
                shutdown: Arc::new(AtomicBool::new(false)),
                thread: None,
            },
            receiver,
        )
    }

    /// How often the backend compares directory state. Tests shorten this.
    #[must_use]
    pub const fn poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = interval;
        self
    }

    /// Begins watching. No-op when already watching.
    pub fn start(&mut self) {
        if self.thread.is_some() {
            return;
        }

        self.shutdown.store(false, Ordering::Relaxed);
        let dir = self.dir.clone();
        let events = self.events.clone();
        let shutdown = Arc::clone(&self.shutdown);
        let interval = self.poll_interval;

        // Baseline taken before start() returns, so a change made right
        // after starting cannot slip between spawn and first poll.
        let mut previous = snapshot(&dir);

        self.thread = Some(thread::spawn(move || {
            while !shutdown.load(Ordering::Relaxed) {
                thread::sleep(interval);
                if shutdown.load(Ordering::Relaxed) {
                    break;
                }

                let current = snapshot(&dir);
                if current != previous {
                    previous = current;
                    // All changes since the last poll collapse into one event.
                    let _ = events.send(DirectoryEvent::Changed);
                }
            }
        }));
    }

    /// Stops watching and waits for the worker to exit. Calling when idle,
    /// or twice, is a no-op.
    pub fn stop(&mut self) {
        self.shutdown.store(true, Ordering::Relaxed);
        if let Some(thread) = self.thread.take() {
            let _ = thread.join();
        }
    }

    #[must_use]
    pub const fn is_watching(&self) -> bool {
        self.thread.is_some()
    }
}

impl Drop for DirectoryWatcher {
    fn drop(&mut self) {
        self.stop();
    }
}

/// Name, length, and mtime per entry; any difference counts as a change.
/// An unreadable directory snapshots as empty, so appearance or
/// disappearance of the directory itself is also a change.
fn snapshot(dir: &Path) -> Vec<(OsString, u64, Option<SystemTime>)> {
    let Ok(entries) = fs::read_dir(dir) else {
        return Vec::new();
    };

    let mut state: Vec<(OsString, u64, Option<SystemTime>)> = entries
        .flatten()
        .filter_map(|entry| {
            let meta = entry.metadata().ok()?;
            Some((entry.file_name(), meta.len(), meta.modified().ok()))
        })
        .collect();

    state.sort();
    state
}
