//! Error types for the logging pipeline
//!
//! Nothing here ever reaches an instrumented caller: sinks contain render
//! and write failures internally and report them best-effort to stderr. The
//! type exists so sink internals can propagate with `?` up to the one place
//! that swallows.

pub type Result<T> = std::result::Result<T, LoggerError>;

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// IO error on the underlying stream
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Render error with the sink that produced it
    #[error("render error in {sink} sink: {message}")]
    Render { sink: String, message: String },
}

impl LoggerError {
    /// Create a render error
    pub fn render(sink: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::Render {
            sink: sink.into(),
            message: message.into(),
        }
    }
}
