//! Main logger implementation
//!
//! A `Logger` owns a base field list, a minimum level, one [`Sink`], and a
//! default execution context. Every call runs the same pipeline: level gate,
//! base-plus-call-site field merge, deferred-value resolution against the
//! call's context, then one `Sink::log` invocation.

use super::{
    context::Context,
    field::Field,
    level::Level,
    sink::Sink,
};
use parking_lot::RwLock;
use std::fmt;
use std::fmt::Write as _;
use std::sync::Arc;

pub struct Logger {
    /// Minimum level to emit; records above it are dropped at the gate.
    level: RwLock<Level>,
    /// Base fields prepended to every record, in declared order. Snapshotted
    /// behind an `Arc` so a concurrent `set_base` never tears a running merge.
    base: RwLock<Arc<Vec<Field>>>,
    sink: RwLock<Option<Arc<dyn Sink>>>,
    /// Fixed default context used when the caller supplies none.
    ctx: Context,
}

impl Logger {
    /// A logger with the given sink, the background context, no base fields,
    /// and the `Debug` threshold.
    #[must_use]
    pub fn new<S: Sink + 'static>(sink: S) -> Self {
        Logger::builder().sink(sink).build()
    }

    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }

    /// Whether a record at `level` would currently be emitted.
    ///
    /// Exposed so callers can skip expensive argument construction for
    /// records that would be gated off anyway.
    #[must_use]
    pub fn enabled(&self, level: Level) -> bool {
        level.is_enabled(*self.level.read())
    }

    /// Set the minimum level.
    ///
    /// Setters are for single-threaded setup; changing configuration while
    /// other threads are logging is not atomic across setters.
    pub fn set_level(&self, level: Level) {
        *self.level.write() = level;
    }

    /// Replace the base field list included in every record.
    pub fn set_base(&self, fields: Vec<Field>) {
        *self.base.write() = Arc::new(fields);
    }

    /// Replace the sink. A logger without a sink silently drops everything.
    pub fn set_sink<S: Sink + 'static>(&self, sink: S) {
        *self.sink.write() = Some(Arc::new(sink));
    }

    /// Log with the default context.
    pub fn log(&self, level: Level, msg: &str, fields: &[Field]) {
        self.dispatch(&self.ctx, level, msg, fields);
    }

    /// Log a space-joined argument list, no trailing separator.
    pub fn print(&self, ctx: &Context, level: Level, args: &[&dyn fmt::Display]) {
        if !self.enabled(level) {
            return;
        }
        let mut msg = String::new();
        for (i, arg) in args.iter().enumerate() {
            if i > 0 {
                msg.push(' ');
            }
            let _ = write!(msg, "{}", arg);
        }
        self.dispatch(ctx, level, &msg, &[]);
    }

    /// Log a pre-formatted message, built lazily only when the level passes.
    pub fn printf(&self, ctx: &Context, level: Level, args: fmt::Arguments<'_>) {
        if !self.enabled(level) {
            return;
        }
        self.dispatch(ctx, level, &args.to_string(), &[]);
    }

    /// Log a literal message with call-site fields.
    pub fn printw(&self, ctx: &Context, level: Level, msg: &str, fields: &[Field]) {
        self.dispatch(ctx, level, msg, fields);
    }

    /// The gate, merge, resolve, forward pipeline.
    ///
    /// The merged list is freshly allocated per call and exclusively owned
    /// by it; base fields are read through a snapshot and never written
    /// back, so concurrent calls cannot observe each other's resolved
    /// values.
    fn dispatch(&self, ctx: &Context, level: Level, msg: &str, fields: &[Field]) {
        if !self.enabled(level) {
            return;
        }
        let sink = match self.sink.read().as_ref() {
            Some(sink) => Arc::clone(sink),
            None => return,
        };
        let base = Arc::clone(&*self.base.read());

        let mut resolved = Vec::with_capacity(base.len() + fields.len());
        for field in base.iter().chain(fields.iter()) {
            resolved.push(field.resolve(ctx));
        }

        sink.log(ctx, level, msg, &resolved);
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("level", &*self.level.read())
            .field("base_fields", &self.base.read().len())
            .field("has_sink", &self.sink.read().is_some())
            .finish()
    }
}

/// Builder for constructing a Logger with a fluent API
///
/// # Example
/// ```
/// use fieldlog::prelude::*;
///
/// let logger = Logger::builder()
///     .min_level(Level::Info)
///     .field(Field::new("service", "api"))
///     .sink(ConsoleSink::new())
///     .build();
/// ```
pub struct LoggerBuilder {
    level: Level,
    base: Vec<Field>,
    ctx: Context,
    sink: Option<Arc<dyn Sink>>,
}

impl LoggerBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self {
            level: Level::Debug,
            base: Vec::new(),
            ctx: Context::background(),
            sink: None,
        }
    }

    /// Set minimum level
    #[must_use = "builder methods return a new value"]
    pub fn min_level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }

    /// Replace the base field list
    #[must_use = "builder methods return a new value"]
    pub fn base(mut self, fields: Vec<Field>) -> Self {
        self.base = fields;
        self
    }

    /// Append one base field
    #[must_use = "builder methods return a new value"]
    pub fn field(mut self, field: Field) -> Self {
        self.base.push(field);
        self
    }

    /// Set the default execution context
    #[must_use = "builder methods return a new value"]
    pub fn context(mut self, ctx: Context) -> Self {
        self.ctx = ctx;
        self
    }

    /// Set the sink
    #[must_use = "builder methods return a new value"]
    pub fn sink<S: Sink + 'static>(mut self, sink: S) -> Self {
        self.sink = Some(Arc::new(sink));
        self
    }

    /// Set an already-shared sink, e.g. a [`super::sink::Fanout`] built
    /// from `Arc`s.
    #[must_use = "builder methods return a new value"]
    pub fn shared_sink(mut self, sink: Arc<dyn Sink>) -> Self {
        self.sink = Some(sink);
        self
    }

    /// Build the Logger and bind a [`super::handle::Handle`] to its default
    /// context.
    #[must_use]
    pub fn build_handle(self) -> super::handle::Handle {
        let ctx = self.ctx.clone();
        super::handle::Handle::new(ctx, Arc::new(self.build()))
    }

    /// Build the Logger
    #[must_use]
    pub fn build(self) -> Logger {
        Logger {
            level: RwLock::new(self.level),
            base: RwLock::new(Arc::new(self.base)),
            sink: RwLock::new(self.sink),
            ctx: self.ctx,
        }
    }
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}
