//! Unified error type for fanlog operations.

/// Error type for fanlog operations.
///
/// Deliberately small: the logging API never surfaces errors at all, and the
/// reader API surfaces only the missing-base-directory condition. Everything
/// else (malformed records, per-file I/O failures) is absorbed and reported
/// through [`internal`](crate::internal).
#[derive(Debug)]
pub enum Error {
    /// I/O error.
    Io(std::io::Error),
    /// The base log directory could not be resolved or created.
    NoPath,
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::NoPath => write!(f, "log directory unavailable"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::NoPath => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
