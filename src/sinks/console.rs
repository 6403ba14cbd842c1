//! Console sink implementation
//!
//! Renders `[ts][LVL] message key=value, key2=value2 caller` lines, routing
//! error-class severities to stderr and everything else to stdout. One
//! record is rendered into a pooled buffer and written under a single mutex
//! covering both streams, so output from concurrent calls never interleaves.

use crate::core::{BufferPool, Context, Field, Level, LoggerError, Result, Sink};
use crate::sinks::{KEY_CALLER, KEY_TIMESTAMP};
use colored::Colorize;
use parking_lot::Mutex;
use std::io::Write;

/// How the level tag is rendered inside the brackets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LevelStyle {
    /// Full lowercase name: `[error]`
    Full,
    /// Three-letter tag: `[ERR]`
    #[default]
    Abbr,
    /// Single character: `[E]`
    Short,
}

struct Streams {
    stdout: Box<dyn Write + Send>,
    stderr: Box<dyn Write + Send>,
}

pub struct ConsoleSink {
    streams: Mutex<Streams>,
    pool: BufferPool,
    use_colors: bool,
    level_style: LevelStyle,
    filter_empty: bool,
}

impl ConsoleSink {
    /// A sink on the process's stdout/stderr with colors enabled.
    #[must_use]
    pub fn new() -> Self {
        Self {
            streams: Mutex::new(Streams {
                stdout: Box::new(std::io::stdout()),
                stderr: Box::new(std::io::stderr()),
            }),
            pool: BufferPool::new(),
            use_colors: true,
            level_style: LevelStyle::default(),
            filter_empty: false,
        }
    }

    /// A sink on arbitrary writers, e.g. capture buffers in tests.
    ///
    /// Colors start disabled here; custom writers are rarely terminals.
    pub fn with_writers<O, E>(stdout: O, stderr: E) -> Self
    where
        O: Write + Send + 'static,
        E: Write + Send + 'static,
    {
        Self {
            streams: Mutex::new(Streams {
                stdout: Box::new(stdout),
                stderr: Box::new(stderr),
            }),
            pool: BufferPool::new(),
            use_colors: false,
            level_style: LevelStyle::default(),
            filter_empty: false,
        }
    }

    #[must_use]
    pub fn with_colors(mut self, use_colors: bool) -> Self {
        self.use_colors = use_colors;
        self
    }

    #[must_use]
    pub fn with_level_style(mut self, style: LevelStyle) -> Self {
        self.level_style = style;
        self
    }

    /// Skip fields whose rendered value is the empty string.
    #[must_use]
    pub fn with_filter_empty(mut self, filter_empty: bool) -> Self {
        self.filter_empty = filter_empty;
        self
    }

    /// Escape line breaks so one record stays one line.
    fn sanitize_message(message: &str) -> String {
        message
            .replace('\n', "\\n")
            .replace('\r', "\\r")
            .replace('\t', "\\t")
    }

    fn level_tag(&self, level: Level) -> &'static str {
        match self.level_style {
            LevelStyle::Full => level.as_str(),
            LevelStyle::Abbr => level.abbr(),
            LevelStyle::Short => level.short(),
        }
    }

    fn render(&self, buf: &mut Vec<u8>, level: Level, msg: &str, fields: &[Field]) -> Result<()> {
        let mut ts = None;
        let mut caller = None;
        for field in fields {
            match field.key() {
                KEY_TIMESTAMP => ts = Some(field.value().to_string()),
                KEY_CALLER => caller = Some(field.value().to_string()),
                _ => {}
            }
        }

        if let Some(ts) = ts {
            if self.use_colors {
                write!(buf, "[{}]", ts.dimmed())?;
            } else {
                write!(buf, "[{}]", ts)?;
            }
        }

        let tag = format!("[{}]", self.level_tag(level));
        if self.use_colors {
            write!(buf, "{} ", tag.color(level.color_code()))?;
        } else {
            write!(buf, "{} ", tag)?;
        }

        buf.extend_from_slice(Self::sanitize_message(msg).as_bytes());

        let mut written = 0;
        for field in fields {
            if field.key() == KEY_TIMESTAMP || field.key() == KEY_CALLER {
                continue;
            }
            let value = field.value().to_string();
            if self.filter_empty && value.is_empty() {
                continue;
            }
            if written > 0 {
                buf.extend_from_slice(b", ");
            } else {
                buf.extend_from_slice(b" ");
            }
            if self.use_colors {
                write!(buf, "{}={}", field.key().dimmed(), value)?;
            } else {
                write!(buf, "{}={}", field.key(), value)?;
            }
            written += 1;
        }

        if let Some(caller) = caller {
            if self.use_colors {
                write!(buf, " {}", caller.dimmed())?;
            } else {
                write!(buf, " {}", caller)?;
            }
        }

        buf.push(b'\n');
        Ok(())
    }

    fn write_record(&self, level: Level, rendered: &[u8]) -> Result<()> {
        let mut streams = self.streams.lock();
        let writer = if matches!(level, Level::Fatal | Level::Error) {
            &mut streams.stderr
        } else {
            &mut streams.stdout
        };
        writer.write_all(rendered)?;
        writer.flush()?;
        Ok(())
    }
}

impl Default for ConsoleSink {
    fn default() -> Self {
        Self::new()
    }
}

impl Sink for ConsoleSink {
    fn log(&self, _ctx: &Context, level: Level, msg: &str, fields: &[Field]) {
        let mut buf = self.pool.get();
        if let Err(e) = self.render(&mut buf, level, msg, fields) {
            let e = LoggerError::render("console", e.to_string());
            eprintln!("[FIELDLOG] {}", e);
            return;
        }
        if let Err(e) = self.write_record(level, &buf) {
            eprintln!("[FIELDLOG] console write failed: {}", e);
        }
    }

    fn name(&self) -> &str {
        "console"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex as PlMutex;
    use std::sync::Arc;

    /// Cloneable writer collecting everything written to it.
    #[derive(Clone, Default)]
    struct SharedBuf {
        inner: Arc<PlMutex<Vec<u8>>>,
    }

    impl SharedBuf {
        fn contents(&self) -> String {
            String::from_utf8(self.inner.lock().clone()).expect("utf8 output")
        }
    }

    impl Write for SharedBuf {
        fn write(&mut self, data: &[u8]) -> std::io::Result<usize> {
            self.inner.lock().extend_from_slice(data);
            Ok(data.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    fn capture_sink() -> (ConsoleSink, SharedBuf, SharedBuf) {
        let out = SharedBuf::default();
        let err = SharedBuf::default();
        let sink = ConsoleSink::with_writers(out.clone(), err.clone());
        (sink, out, err)
    }

    #[test]
    fn test_basic_line_shape() {
        let (sink, out, _err) = capture_sink();
        sink.log(
            &Context::background(),
            Level::Info,
            "started",
            &[Field::new("service", "x"), Field::new("port", 8080)],
        );
        assert_eq!(out.contents(), "[INF] started service=x, port=8080\n");
    }

    #[test]
    fn test_error_class_routes_to_stderr() {
        let (sink, out, err) = capture_sink();
        sink.log(&Context::background(), Level::Error, "bad", &[]);
        sink.log(&Context::background(), Level::Fatal, "worse", &[]);
        sink.log(&Context::background(), Level::Warn, "meh", &[]);

        assert_eq!(err.contents(), "[ERR] bad\n[FTL] worse\n");
        assert_eq!(out.contents(), "[WRN] meh\n");
    }

    #[test]
    fn test_timestamp_and_caller_are_positional() {
        let (sink, out, _err) = capture_sink();
        sink.log(
            &Context::background(),
            Level::Info,
            "m",
            &[
                Field::new("ts", "12:00:00"),
                Field::new("k", 1),
                Field::new("caller", "src/main.rs:10"),
            ],
        );
        assert_eq!(out.contents(), "[12:00:00][INF] m k=1 src/main.rs:10\n");
    }

    #[test]
    fn test_level_styles() {
        let (sink, out, _err) = capture_sink();
        let sink = sink.with_level_style(LevelStyle::Full);
        sink.log(&Context::background(), Level::Success, "ok", &[]);

        let (short_sink, short_out, _e) = capture_sink();
        let short_sink = short_sink.with_level_style(LevelStyle::Short);
        short_sink.log(&Context::background(), Level::Success, "ok", &[]);

        assert_eq!(out.contents(), "[success] ok\n");
        assert_eq!(short_out.contents(), "[S] ok\n");
    }

    #[test]
    fn test_filter_empty_fields() {
        let (sink, out, _err) = capture_sink();
        let sink = sink.with_filter_empty(true);
        sink.log(
            &Context::background(),
            Level::Info,
            "m",
            &[Field::new("empty", ""), Field::new("kept", "v")],
        );
        assert_eq!(out.contents(), "[INF] m kept=v\n");
    }

    #[test]
    fn test_message_newlines_are_escaped() {
        let (sink, out, _err) = capture_sink();
        sink.log(
            &Context::background(),
            Level::Info,
            "line1\nERROR fake injected",
            &[],
        );
        let contents = out.contents();
        assert_eq!(contents.lines().count(), 1);
        assert!(contents.contains("line1\\nERROR fake injected"));
    }

    #[test]
    fn test_duplicate_keys_render_in_order() {
        // de-duplication is renderer policy; the console keeps both in order
        let (sink, out, _err) = capture_sink();
        sink.log(
            &Context::background(),
            Level::Info,
            "m",
            &[Field::new("k", "base"), Field::new("k", "call")],
        );
        assert_eq!(out.contents(), "[INF] m k=base, k=call\n");
    }
}
