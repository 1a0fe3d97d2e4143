//! Process-wide logging configuration: the enable flag and the shared
//! timestamp format.
//!
//! The writer (handlers) and the reader (file store) must render and parse
//! timestamps with the exact same format string — no fallback formats are
//! attempted on the read side. `OnceLock` freezes the format on first use,
//! so a late `init` cannot introduce drift between lines already written
//! and lines parsed afterwards.

use chrono::NaiveDateTime;
use std::sync::OnceLock;
use std::sync::atomic::{AtomicBool, Ordering};

/// Millisecond precision keeps the newest-first sort stable for bursts of
/// records written within the same second.
pub const DEFAULT_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f";

static ENABLED: AtomicBool = AtomicBool::new(true);
static TIMESTAMP_FORMAT: OnceLock<String> = OnceLock::new();

/// Installs the shared timestamp format. Only the first call (or first
/// implicit use through a log call) takes effect; later calls are no-ops.
pub fn init(timestamp_format: &str) {
    let _ = TIMESTAMP_FORMAT.set(timestamp_format.to_string());
}

/// Master switch for all loggers in the process. Suppressed calls never
/// evaluate their message thunk.
pub fn set_enabled(enabled: bool) {
    ENABLED.store(enabled, Ordering::Relaxed);
}

/// Read on every `Logger::log` call.
#[must_use]
pub fn enabled() -> bool {
    ENABLED.load(Ordering::Relaxed)
}

/// The format both handlers and the file store use. Falls back to
/// [`DEFAULT_TIMESTAMP_FORMAT`] when `init` was never called.
#[must_use]
pub fn timestamp_format() -> &'static str {
    TIMESTAMP_FORMAT.get_or_init(|| DEFAULT_TIMESTAMP_FORMAT.to_string())
}

/// Renders a timestamp the way the on-disk format expects it.
#[must_use]
pub fn format_timestamp(timestamp: NaiveDateTime) -> String {
    timestamp.format(timestamp_format()).to_string()
}

/// Strict single-format parse; `None` drops the record on the read path.
#[must_use]
pub fn parse_timestamp(text: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(text, timestamp_format()).ok()
}
