//! Severity levels that gate which messages reach which handlers.

use std::fmt;
use std::str::FromStr;

/// Derives `Ord` so the logger can compare a message's level against the configured minimum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Level {
    /// High-volume instrumentation that would be too noisy outside of development.
    #[default]
    Trace = 0,
    /// Startup, teardown, and state-change details useful for diagnosing issues.
    Debug = 1,
    /// Non-fatal anomalies that may need attention (deprecated features, retries).
    Warning = 2,
    /// Failures that prevent the current operation from completing.
    Error = 3,
    /// Failures after which the process cannot meaningfully continue.
    Critical = 4,
}

impl Level {
    /// Capitalized because persisted log lines carry these exact spellings.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Trace => "Trace",
            Self::Debug => "Debug",
            Self::Warning => "Warning",
            Self::Error => "Error",
            Self::Critical => "Critical",
        }
    }

    /// Case-exact lookup against the five canonical names.
    ///
    /// Parsing is used as a filter on persisted lines: an unknown or
    /// differently-cased name yields `None` and the line is dropped, so no
    /// lenient spellings are accepted here.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "Trace" => Some(Self::Trace),
            "Debug" => Some(Self::Debug),
            "Warning" => Some(Self::Warning),
            "Error" => Some(Self::Error),
            "Critical" => Some(Self::Critical),
            _ => None,
        }
    }

    /// Convenience for iteration — used by filter settings and tests.
    #[must_use]
    pub const fn all() -> [Self; 5] {
        [
            Self::Trace,
            Self::Debug,
            Self::Warning,
            Self::Error,
            Self::Critical,
        ]
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned by `FromStr` so callers can distinguish "unknown level" from other parse failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseLevelError(String);

impl fmt::Display for ParseLevelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown log level: '{}'", self.0)
    }
}

impl std::error::Error for ParseLevelError {}

impl FromStr for Level {
    type Err = ParseLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| ParseLevelError(s.to_string()))
    }
}
