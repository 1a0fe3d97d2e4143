//! Call-site capture. Rust exposes file and line through `file!()`/`line!()`
//! but has no function-name macro, so `callsite!` recovers the enclosing
//! function from the type name of a local item.

/// Captures the current file, function, and line as a
/// [`CallSite`](crate::logger::CallSite).
#[macro_export]
macro_rules! callsite {
    () => {{
        fn f() {}
        fn type_name_of<T>(_: T) -> &'static str {
            std::any::type_name::<T>()
        }
        let name = type_name_of(f);
        let name = name.strip_suffix("::f").unwrap_or(name);
        $crate::logger::CallSite {
            file: file!(),
            function: name,
            line: line!(),
        }
    }};
}

/// Logs at [`Trace`](crate::Level::Trace) with the call site captured
/// automatically. The format arguments are only evaluated when the record
/// passes the level gate and the global enable flag.
#[macro_export]
macro_rules! trace {
    ($logger:expr, $($arg:tt)+) => {
        $logger.trace(|| format!($($arg)+), $crate::callsite!())
    };
}

/// Logs at [`Debug`](crate::Level::Debug); see [`trace!`](crate::trace).
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)+) => {
        $logger.debug(|| format!($($arg)+), $crate::callsite!())
    };
}

/// Logs at [`Warning`](crate::Level::Warning); see [`trace!`](crate::trace).
#[macro_export]
macro_rules! warning {
    ($logger:expr, $($arg:tt)+) => {
        $logger.warning(|| format!($($arg)+), $crate::callsite!())
    };
}

/// Logs at [`Error`](crate::Level::Error); see [`trace!`](crate::trace).
#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => {
        $logger.error(|| format!($($arg)+), $crate::callsite!())
    };
}

/// Logs at [`Critical`](crate::Level::Critical); see [`trace!`](crate::trace).
#[macro_export]
macro_rules! critical {
    ($logger:expr, $($arg:tt)+) => {
        $logger.critical(|| format!($($arg)+), $crate::callsite!())
    };
}
