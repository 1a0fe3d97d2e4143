//! Level-gated dispatch: each logger owns a label, a minimum level, and an
//! ordered list of handlers, and fans every accepted record out to all of
//! them in configuration order.

mod macros;

use crate::config;
use crate::handler::LogHandler;
use crate::level::Level;
use crate::record::LogRecord;
use chrono::Local;

/// Call-site location captured by the [`callsite!`](crate::callsite) macro.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CallSite {
    pub file: &'static str,
    pub function: &'static str,
    pub line: u32,
}

impl CallSite {
    /// Persisted-field form, `"path/to/file.rs (42)"`.
    #[must_use]
    pub fn location(&self) -> String {
        format!("{} ({})", self.file, self.line)
    }
}

/// Immutable after construction — guarantees thread-safe concurrent logging
/// without locks. Handler order defines dispatch order.
pub struct Logger {
    label: String,
    min_level: Level,
    handlers: Vec<Box<dyn LogHandler>>,
}

impl Logger {
    /// Handlers receive records in the order given here.
    #[must_use]
    pub fn new(
        label: impl Into<String>,
        min_level: Level,
        handlers: Vec<Box<dyn LogHandler>>,
    ) -> Self {
        Self {
            label: label.into(),
            min_level,
            handlers,
        }
    }

    /// Core dispatch — evaluates the message thunk and fans the record out,
    /// iff logging is globally enabled and `level` clears the minimum.
    ///
    /// The thunk is never evaluated on a suppressed call, so expensive
    /// message construction costs nothing when filtered out. Never returns
    /// an error; handler failures stay inside the handler.
    pub fn log<F>(&self, level: Level, message: F, site: CallSite)
    where
        F: FnOnce() -> String,
    {
        if !config::enabled() || level < self.min_level {
            return;
        }

        let record = LogRecord {
            label: self.label.clone(),
            timestamp: Local::now().naive_local(),
            level,
            file: site.location(),
            function: site.function.to_string(),
            message: message(),
            source: None,
        };

        for handler in &self.handlers {
            handler.emit(&record);
        }
    }

    /// High-volume instrumentation that should vanish in production.
    pub fn trace<F: FnOnce() -> String>(&self, message: F, site: CallSite) {
        self.log(Level::Trace, message, site);
    }

    /// Development-time diagnostics that are too noisy for normal operation.
    pub fn debug<F: FnOnce() -> String>(&self, message: F, site: CallSite) {
        self.log(Level::Debug, message, site);
    }

    /// Non-fatal anomalies — missing optional state, recoverable errors.
    pub fn warning<F: FnOnce() -> String>(&self, message: F, site: CallSite) {
        self.log(Level::Warning, message, site);
    }

    /// Failures that prevent the current operation from completing.
    pub fn error<F: FnOnce() -> String>(&self, message: F, site: CallSite) {
        self.log(Level::Error, message, site);
    }

    /// Failures after which the process cannot meaningfully continue.
    pub fn critical<F: FnOnce() -> String>(&self, message: F, site: CallSite) {
        self.log(Level::Critical, message, site);
    }

    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Tests and diagnostics need to verify which severity threshold is active.
    #[must_use]
    pub const fn min_level(&self) -> Level {
        self.min_level
    }

    /// Tests verify the expected number of sinks was wired up.
    #[must_use]
    pub fn handler_count(&self) -> usize {
        self.handlers.len()
    }
}
