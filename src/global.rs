//! Process-wide default logger
//!
//! A lazily-initialized Logger/Handle pair usable without explicit
//! construction: a console sink, no base fields, the `Debug` threshold, and
//! the background context. Configure it (`set_level`, `set_base`,
//! `set_sink`) during startup, before concurrent logging begins; there is no
//! atomicity across setters once logging is underway. Prefer passing a
//! [`Handle`] explicitly — these entry points exist for top-level
//! convenience.

use crate::core::{Context, Field, Handle, Level, Logger, Sink};
use crate::sinks::ConsoleSink;
use once_cell::sync::Lazy;
use std::fmt;
use std::sync::Arc;

static DEFAULT: Lazy<Handle> = Lazy::new(|| {
    let logger = Logger::builder().sink(ConsoleSink::new()).build();
    Handle::new(Context::background(), Arc::new(logger))
});

/// The default handle; clones share the same logger.
#[must_use]
pub fn default_handle() -> Handle {
    DEFAULT.clone()
}

/// A handle on the default logger bound to `ctx`.
#[must_use]
pub fn with(ctx: Context) -> Handle {
    DEFAULT.with(ctx)
}

/// Whether the default logger currently emits at the most verbose
/// severity.
#[must_use]
pub fn enabled() -> bool {
    DEFAULT.enabled(Level::Debug)
}

pub fn set_level(level: Level) {
    DEFAULT.logger().set_level(level);
}

pub fn set_base(fields: Vec<Field>) {
    DEFAULT.logger().set_base(fields);
}

pub fn set_sink<S: Sink + 'static>(sink: S) {
    DEFAULT.logger().set_sink(sink);
}

pub fn debug(msg: impl fmt::Display) {
    DEFAULT.debug(msg);
}

pub fn debugf(args: fmt::Arguments<'_>) {
    DEFAULT.debugf(args);
}

pub fn debugw(msg: &str, fields: &[Field]) {
    DEFAULT.debugw(msg, fields);
}

pub fn info(msg: impl fmt::Display) {
    DEFAULT.info(msg);
}

pub fn infof(args: fmt::Arguments<'_>) {
    DEFAULT.infof(args);
}

pub fn infow(msg: &str, fields: &[Field]) {
    DEFAULT.infow(msg, fields);
}

pub fn warn(msg: impl fmt::Display) {
    DEFAULT.warn(msg);
}

pub fn warnf(args: fmt::Arguments<'_>) {
    DEFAULT.warnf(args);
}

pub fn warnw(msg: &str, fields: &[Field]) {
    DEFAULT.warnw(msg, fields);
}

pub fn error(msg: impl fmt::Display) {
    DEFAULT.error(msg);
}

pub fn errorf(args: fmt::Arguments<'_>) {
    DEFAULT.errorf(args);
}

pub fn errorw(msg: &str, fields: &[Field]) {
    DEFAULT.errorw(msg, fields);
}

pub fn fatal(msg: impl fmt::Display) -> ! {
    DEFAULT.fatal(msg)
}

pub fn fatalf(args: fmt::Arguments<'_>) -> ! {
    DEFAULT.fatalf(args)
}

pub fn fatalw(msg: &str, fields: &[Field]) -> ! {
    DEFAULT.fatalw(msg, fields)
}
