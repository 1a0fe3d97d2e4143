//! Fanlog's own diagnostic logger — absorbed I/O failures (file appends,
//! deletes, directory scans) are reported here instead of propagating to
//! the caller.
//!
//! Uses `OnceLock` so the logger is initialized exactly once even when
//! multiple entry points race to log first. Console-only: routing internal
//! diagnostics through a `FileHandler` would recurse into the write path
//! being reported on.

use crate::handler::ConsoleHandler;
use crate::level::Level;
use crate::logger::Logger;
use std::sync::OnceLock;

static INTERNAL_LOGGER: OnceLock<Logger> = OnceLock::new();

fn logger() -> &'static Logger {
    INTERNAL_LOGGER
        .get_or_init(|| Logger::new("fanlog", Level::Trace, vec![Box::new(ConsoleHandler::new())]))
}

fn log(level: Level, scope: &str, msg: &str) {
    logger().log(level, || format!("{scope}: {msg}"), crate::callsite!());
}

/// High-volume instrumentation, visible in debug builds only (console sink).
pub fn trace(scope: &str, msg: &str) {
    log(Level::Trace, scope, msg);
}

/// Operational details — directory resolved, worker started, etc.
pub fn debug(scope: &str, msg: &str) {
    log(Level::Debug, scope, msg);
}

/// Non-fatal anomalies — a skipped file, a dropped line batch.
pub fn warning(scope: &str, msg: &str) {
    log(Level::Warning, scope, msg);
}

/// I/O failures that were absorbed rather than surfaced to the caller.
pub fn error(scope: &str, msg: &str) {
    log(Level::Error, scope, msg);
}
