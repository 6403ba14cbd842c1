//! Logging macros for ergonomic message formatting.
//!
//! These macros provide a convenient interface for logging with automatic
//! string formatting, similar to `println!` and `format!`. They take a
//! [`Handle`](crate::Handle) as their first argument.
//!
//! # Examples
//!
//! ```
//! use fieldlog::prelude::*;
//! use fieldlog::info;
//!
//! let handle = Logger::builder().sink(ConsoleSink::new()).build_handle();
//!
//! // Basic logging
//! info!(handle, "Server started");
//!
//! // With format arguments
//! let port = 8080;
//! info!(handle, "Server listening on port {}", port);
//! ```

/// Log a formatted message at an arbitrary level.
///
/// Does not terminate the process for `Level::Fatal`; use [`fatal!`] for
/// the terminating contract.
///
/// # Examples
///
/// ```
/// # use fieldlog::prelude::*;
/// # let handle = Logger::builder().sink(ConsoleSink::new()).build_handle();
/// use fieldlog::log;
/// log!(handle, Level::Success, "deployed build {}", 42);
/// ```
#[macro_export]
macro_rules! log {
    ($handle:expr, $level:expr, $($arg:tt)+) => {
        $handle.printf($level, format_args!($($arg)+))
    };
}

/// Log a debug-level message.
#[macro_export]
macro_rules! debug {
    ($handle:expr, $($arg:tt)+) => {
        $handle.debugf(format_args!($($arg)+))
    };
}

/// Log an info-level message.
///
/// # Examples
///
/// ```
/// # use fieldlog::prelude::*;
/// # let handle = Logger::builder().sink(ConsoleSink::new()).build_handle();
/// use fieldlog::info;
/// info!(handle, "Processing {} items", 100);
/// ```
#[macro_export]
macro_rules! info {
    ($handle:expr, $($arg:tt)+) => {
        $handle.infof(format_args!($($arg)+))
    };
}

/// Log a warning-level message.
#[macro_export]
macro_rules! warn {
    ($handle:expr, $($arg:tt)+) => {
        $handle.warnf(format_args!($($arg)+))
    };
}

/// Log an error-level message.
#[macro_export]
macro_rules! error {
    ($handle:expr, $($arg:tt)+) => {
        $handle.errorf(format_args!($($arg)+))
    };
}

/// Log a fatal-level message, then terminate the process with a non-zero
/// status.
#[macro_export]
macro_rules! fatal {
    ($handle:expr, $($arg:tt)+) => {
        $handle.fatalf(format_args!($($arg)+))
    };
}

/// A `caller` field holding this call site's `file:line`.
///
/// The console sink places it positionally at the end of the record.
///
/// # Examples
///
/// ```
/// # use fieldlog::prelude::*;
/// # let handle = Logger::builder().sink(ConsoleSink::new()).build_handle();
/// use fieldlog::caller;
/// handle.infow("reached", &[caller!()]);
/// ```
#[macro_export]
macro_rules! caller {
    () => {
        $crate::Field::new("caller", concat!(file!(), ":", line!()))
    };
}
