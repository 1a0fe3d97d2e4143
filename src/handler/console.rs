//! Best-effort console sink for development builds.

use super::LogHandler;
use crate::config;
use crate::record::LogRecord;

/// Prints one formatted line per record, debug builds only. Holds no state;
/// in release builds `emit` is a no-op.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleHandler;

impl ConsoleHandler {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl LogHandler for ConsoleHandler {
    fn emit(&self, record: &LogRecord) {
        if cfg!(debug_assertions) {
            println!(
                "{} | {} | {} | {} -> {} > {}",
                record.label,
                config::format_timestamp(record.timestamp),
                record.level,
                record.file,
                record.function,
                record.message
            );
        }
    }
}
