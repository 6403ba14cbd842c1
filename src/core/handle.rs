//! Context-bound logging facade
//!
//! A `Handle` pairs a shared [`Logger`] with one execution [`Context`] and
//! exposes the per-level surface. Handles are cheap to clone and cheap to
//! re-bind per request with [`Handle::with`]; neither operation touches the
//! underlying logger.

use super::{context::Context, field::Field, level::Level, logger::Logger};
use std::fmt;
use std::process;
use std::sync::Arc;

#[derive(Clone)]
pub struct Handle {
    logger: Arc<Logger>,
    ctx: Context,
}

impl Handle {
    /// Bind `ctx` to `logger`. Mirrors per-request construction: build one
    /// logger at startup, then a handle per call chain.
    #[must_use]
    pub fn new(ctx: Context, logger: Arc<Logger>) -> Self {
        Self { logger, ctx }
    }

    /// A new handle sharing this logger but bound to a different context.
    #[must_use]
    pub fn with(&self, ctx: Context) -> Handle {
        Handle {
            logger: Arc::clone(&self.logger),
            ctx,
        }
    }

    #[must_use]
    pub fn logger(&self) -> &Arc<Logger> {
        &self.logger
    }

    #[must_use]
    pub fn context(&self) -> &Context {
        &self.ctx
    }

    /// Whether a record at `level` would currently be emitted.
    #[must_use]
    pub fn enabled(&self, level: Level) -> bool {
        self.logger.enabled(level)
    }

    /// Space-joined arguments at an arbitrary level, bound context.
    ///
    /// This is also the road to the `Log` and `Success` severities, which
    /// have no dedicated methods.
    pub fn print(&self, level: Level, args: &[&dyn fmt::Display]) {
        self.logger.print(&self.ctx, level, args);
    }

    /// Formatted message at an arbitrary level, bound context.
    pub fn printf(&self, level: Level, args: fmt::Arguments<'_>) {
        self.logger.printf(&self.ctx, level, args);
    }

    /// Literal message plus call-site fields at an arbitrary level, bound
    /// context.
    pub fn printw(&self, level: Level, msg: &str, fields: &[Field]) {
        self.logger.printw(&self.ctx, level, msg, fields);
    }

    // debug

    pub fn debug(&self, msg: impl fmt::Display) {
        self.logger
            .print(&self.ctx, Level::Debug, &[&msg as &dyn fmt::Display]);
    }

    pub fn debugf(&self, args: fmt::Arguments<'_>) {
        self.logger.printf(&self.ctx, Level::Debug, args);
    }

    pub fn debugw(&self, msg: &str, fields: &[Field]) {
        self.logger.printw(&self.ctx, Level::Debug, msg, fields);
    }

    pub fn debug_ctx(&self, ctx: &Context, msg: impl fmt::Display) {
        self.logger
            .print(ctx, Level::Debug, &[&msg as &dyn fmt::Display]);
    }

    pub fn debugf_ctx(&self, ctx: &Context, args: fmt::Arguments<'_>) {
        self.logger.printf(ctx, Level::Debug, args);
    }

    pub fn debugw_ctx(&self, ctx: &Context, msg: &str, fields: &[Field]) {
        self.logger.printw(ctx, Level::Debug, msg, fields);
    }

    // info

    pub fn info(&self, msg: impl fmt::Display) {
        self.logger
            .print(&self.ctx, Level::Info, &[&msg as &dyn fmt::Display]);
    }

    pub fn infof(&self, args: fmt::Arguments<'_>) {
        self.logger.printf(&self.ctx, Level::Info, args);
    }

    pub fn infow(&self, msg: &str, fields: &[Field]) {
        self.logger.printw(&self.ctx, Level::Info, msg, fields);
    }

    pub fn info_ctx(&self, ctx: &Context, msg: impl fmt::Display) {
        self.logger
            .print(ctx, Level::Info, &[&msg as &dyn fmt::Display]);
    }

    pub fn infof_ctx(&self, ctx: &Context, args: fmt::Arguments<'_>) {
        self.logger.printf(ctx, Level::Info, args);
    }

    pub fn infow_ctx(&self, ctx: &Context, msg: &str, fields: &[Field]) {
        self.logger.printw(ctx, Level::Info, msg, fields);
    }

    // warn

    pub fn warn(&self, msg: impl fmt::Display) {
        self.logger
            .print(&self.ctx, Level::Warn, &[&msg as &dyn fmt::Display]);
    }

    pub fn warnf(&self, args: fmt::Arguments<'_>) {
        self.logger.printf(&self.ctx, Level::Warn, args);
    }

    pub fn warnw(&self, msg: &str, fields: &[Field]) {
        self.logger.printw(&self.ctx, Level::Warn, msg, fields);
    }

    pub fn warn_ctx(&self, ctx: &Context, msg: impl fmt::Display) {
        self.logger
            .print(ctx, Level::Warn, &[&msg as &dyn fmt::Display]);
    }

    pub fn warnf_ctx(&self, ctx: &Context, args: fmt::Arguments<'_>) {
        self.logger.printf(ctx, Level::Warn, args);
    }

    pub fn warnw_ctx(&self, ctx: &Context, msg: &str, fields: &[Field]) {
        self.logger.printw(ctx, Level::Warn, msg, fields);
    }

    // error

    pub fn error(&self, msg: impl fmt::Display) {
        self.logger
            .print(&self.ctx, Level::Error, &[&msg as &dyn fmt::Display]);
    }

    pub fn errorf(&self, args: fmt::Arguments<'_>) {
        self.logger.printf(&self.ctx, Level::Error, args);
    }

    pub fn errorw(&self, msg: &str, fields: &[Field]) {
        self.logger.printw(&self.ctx, Level::Error, msg, fields);
    }

    pub fn error_ctx(&self, ctx: &Context, msg: impl fmt::Display) {
        self.logger
            .print(ctx, Level::Error, &[&msg as &dyn fmt::Display]);
    }

    pub fn errorf_ctx(&self, ctx: &Context, args: fmt::Arguments<'_>) {
        self.logger.printf(ctx, Level::Error, args);
    }

    pub fn errorw_ctx(&self, ctx: &Context, msg: &str, fields: &[Field]) {
        self.logger.printw(ctx, Level::Error, msg, fields);
    }

    // fatal — logs, then unconditionally terminates the process with a
    // non-zero status, whether or not the log write succeeded.

    pub fn fatal(&self, msg: impl fmt::Display) -> ! {
        self.logger
            .print(&self.ctx, Level::Fatal, &[&msg as &dyn fmt::Display]);
        process::exit(1);
    }

    pub fn fatalf(&self, args: fmt::Arguments<'_>) -> ! {
        self.logger.printf(&self.ctx, Level::Fatal, args);
        process::exit(1);
    }

    pub fn fatalw(&self, msg: &str, fields: &[Field]) -> ! {
        self.logger.printw(&self.ctx, Level::Fatal, msg, fields);
        process::exit(1);
    }

    pub fn fatal_ctx(&self, ctx: &Context, msg: impl fmt::Display) -> ! {
        self.logger
            .print(ctx, Level::Fatal, &[&msg as &dyn fmt::Display]);
        process::exit(1);
    }

    pub fn fatalf_ctx(&self, ctx: &Context, args: fmt::Arguments<'_>) -> ! {
        self.logger.printf(ctx, Level::Fatal, args);
        process::exit(1);
    }

    pub fn fatalw_ctx(&self, ctx: &Context, msg: &str, fields: &[Field]) -> ! {
        self.logger.printw(ctx, Level::Fatal, msg, fields);
        process::exit(1);
    }
}

impl fmt::Debug for Handle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Handle")
            .field("logger", &self.logger)
            .finish_non_exhaustive()
    }
}
