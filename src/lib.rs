#![forbid(unsafe_code)]

//! `fanlog` - Leveled logging with delimited file persistence and read-back.
//!
//! Call sites emit through a [`Logger`] that fans records out to pluggable
//! handlers; the [`FileHandler`] persists them as `;`-delimited lines, one
//! file per handler name, and the [`FileStore`] later re-parses, filters,
//! and groups those files on a dedicated worker thread.
//!
//! # Example
//!
//! ```no_run
//! use fanlog::{FileHandler, Level, Logger};
//!
//! let logger = Logger::new(
//!     "svc",
//!     Level::Debug,
//!     vec![Box::new(FileHandler::new("svc"))],
//! );
//!
//! fanlog::debug!(logger, "starting up");
//! fanlog::error!(logger, "request {} failed", 42);
//! ```
//!
//! Logging is fail-safe by construction: the logging API never returns an
//! error, handler failures never reach the call site, and the read side
//! degrades to fewer results instead of failing.

pub mod config;
pub mod directory;
pub mod error;
pub mod handler;
pub mod internal;
pub mod level;
pub mod logger;
pub mod record;
pub mod store;
pub mod watcher;

// Re-exports for convenience
pub use error::Error;
pub use handler::{ConsoleHandler, FileHandler, LogHandler};
pub use level::Level;
pub use logger::{CallSite, Logger};
pub use record::{LogFile, LogRecord, RecordSource};
pub use store::{DEFAULT_PER_FILE_CAP, FileStore, FilterSettings, LogSection, group_by_day};
pub use watcher::{DirectoryEvent, DirectoryWatcher};
