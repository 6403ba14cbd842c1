//! Reference sink implementations

pub mod console;
pub mod json;

pub use console::{ConsoleSink, LevelStyle};
pub use json::JsonSink;

/// Well-known field keys the reference sinks treat positionally.
pub const KEY_TIMESTAMP: &str = "ts";
pub const KEY_CALLER: &str = "caller";
pub const KEY_MESSAGE: &str = "msg";
pub const KEY_LEVEL: &str = "level";
