//! The two built-in sinks (console, file) can't cover every use case — the
//! `LogHandler` trait lets callers add custom sinks without modifying fanlog.

mod console;
mod file;

pub use console::ConsoleHandler;
pub use file::FileHandler;

use crate::record::LogRecord;

/// A sink that receives every record a logger deems loggable.
///
/// `Send + Sync` bounds enable concurrent logging from multiple threads
/// without locks on the trait object.
pub trait LogHandler: Send + Sync {
    /// Consumes one record. Must swallow all internal failures — a broken
    /// sink never propagates an error back to the logging call site.
    fn emit(&self, record: &LogRecord);
}
