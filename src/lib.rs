//! # Fieldlog
//!
//! A structured, leveled logging core with deferred field resolution,
//! multi-sink fan-out, and allocation-light rendering.
//!
//! ## Features
//!
//! - **Structured Fields**: Ordered key/value annotations, with call-site
//!   fields able to override base fields by position
//! - **Deferred Values**: Fields computed from a per-call execution context
//!   at emission time, exactly once per record
//! - **Multiple Sinks**: Console and line-delimited JSON out of the box,
//!   composable through a fan-out with per-sink failure isolation
//! - **Thread Safe**: Designed for heavy concurrent use; merged field lists
//!   are call-owned and render buffers are pooled
//!
//! ## Quick start
//!
//! ```
//! use fieldlog::prelude::*;
//!
//! let handle = Logger::builder()
//!     .min_level(Level::Info)
//!     .field(Field::new("service", "api"))
//!     .sink(ConsoleSink::new())
//!     .build_handle();
//!
//! handle.infow("started", &[Field::new("port", 8080)]);
//! handle.debugw("not emitted", &[]); // gated off
//! ```

pub mod core;
pub mod global;
pub mod macros;
pub mod sinks;

pub mod prelude {
    pub use crate::core::{
        combine, context_value, timestamp, BufferPool, Context, Fanout, Field, FieldSource,
        FieldValue, Handle, Level, Logger, LoggerBuilder, LoggerError, Result, Sink, Valuer,
    };
    pub use crate::sinks::{ConsoleSink, JsonSink, LevelStyle};
}

pub use crate::core::{
    combine, context_value, timestamp, BufferPool, Context, Fanout, Field, FieldSource,
    FieldValue, Handle, Level, Logger, LoggerBuilder, LoggerError, Result, Sink, Valuer,
};
pub use global::{default_handle, set_base, set_level, set_sink, with};
pub use sinks::{ConsoleSink, JsonSink, LevelStyle};
