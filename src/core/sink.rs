//! Sink trait and multi-sink fan-out

use super::{context::Context, field::Field, level::Level};
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::Arc;

/// A rendering/output backend.
///
/// Receives a gated, merged, fully-resolved record and turns it into bytes
/// somewhere. Implementations must contain their own render and write
/// failures; nothing observable may escape toward the logging call site.
pub trait Sink: Send + Sync {
    fn log(&self, ctx: &Context, level: Level, msg: &str, fields: &[Field]);

    fn name(&self) -> &str;
}

/// An ordered list of sinks invoked as one.
///
/// Each sink is called in order for every record. A sink that panics is
/// isolated with `catch_unwind` so the remaining sinks still run; the
/// fan-out introduces no ordering between the sinks' own output streams.
///
/// # Example
///
/// ```no_run
/// use fieldlog::core::{Fanout, Sink};
/// use fieldlog::sinks::{ConsoleSink, JsonSink};
/// use std::sync::Arc;
///
/// let fanout = Fanout::new(vec![
///     Arc::new(ConsoleSink::new()) as Arc<dyn Sink>,
///     Arc::new(JsonSink::file("app.jsonl").unwrap()),
/// ]);
/// ```
pub struct Fanout {
    sinks: Vec<Arc<dyn Sink>>,
}

impl Fanout {
    #[must_use]
    pub fn new(sinks: Vec<Arc<dyn Sink>>) -> Self {
        Self { sinks }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.sinks.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sinks.is_empty()
    }
}

impl Sink for Fanout {
    fn log(&self, ctx: &Context, level: Level, msg: &str, fields: &[Field]) {
        for (idx, sink) in self.sinks.iter().enumerate() {
            let result = catch_unwind(AssertUnwindSafe(|| {
                sink.log(ctx, level, msg, fields);
            }));
            if let Err(panic_info) = result {
                let panic_msg = if let Some(s) = panic_info.downcast_ref::<&str>() {
                    (*s).to_string()
                } else if let Some(s) = panic_info.downcast_ref::<String>() {
                    s.clone()
                } else {
                    "unknown panic".to_string()
                };
                eprintln!(
                    "[FIELDLOG] sink #{} ({}) panicked: {}. Remaining sinks continue.",
                    idx,
                    sink.name(),
                    panic_msg
                );
            }
        }
    }

    fn name(&self) -> &str {
        "fanout"
    }
}

/// Compose sinks into one, in invocation order.
pub fn combine(sinks: Vec<Arc<dyn Sink>>) -> Fanout {
    Fanout::new(sinks)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct CountingSink {
        hits: AtomicUsize,
    }

    impl CountingSink {
        fn new() -> Arc<Self> {
            Arc::new(Self {
                hits: AtomicUsize::new(0),
            })
        }
    }

    impl Sink for CountingSink {
        fn log(&self, _ctx: &Context, _level: Level, _msg: &str, _fields: &[Field]) {
            self.hits.fetch_add(1, Ordering::SeqCst);
        }

        fn name(&self) -> &str {
            "counting"
        }
    }

    struct PanickingSink;

    impl Sink for PanickingSink {
        fn log(&self, _ctx: &Context, _level: Level, _msg: &str, _fields: &[Field]) {
            panic!("sink is broken");
        }

        fn name(&self) -> &str {
            "panicking"
        }
    }

    #[test]
    fn test_fanout_invokes_all_in_order() {
        let a = CountingSink::new();
        let b = CountingSink::new();
        let fanout = Fanout::new(vec![
            Arc::clone(&a) as Arc<dyn Sink>,
            Arc::clone(&b) as Arc<dyn Sink>,
        ]);

        fanout.log(&Context::background(), Level::Info, "hi", &[]);
        fanout.log(&Context::background(), Level::Info, "hi", &[]);

        assert_eq!(a.hits.load(Ordering::SeqCst), 2);
        assert_eq!(b.hits.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_failing_sink_does_not_stop_the_rest() {
        let first = CountingSink::new();
        let last = CountingSink::new();
        let fanout = Fanout::new(vec![
            Arc::clone(&first) as Arc<dyn Sink>,
            Arc::new(PanickingSink) as Arc<dyn Sink>,
            Arc::clone(&last) as Arc<dyn Sink>,
        ]);

        fanout.log(&Context::background(), Level::Error, "boom", &[]);

        assert_eq!(first.hits.load(Ordering::SeqCst), 1);
        assert_eq!(last.hits.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_empty_fanout_is_a_no_op() {
        let fanout = combine(Vec::new());
        assert!(fanout.is_empty());
        fanout.log(&Context::background(), Level::Info, "nothing", &[]);
    }
}
