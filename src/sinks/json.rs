//! Line-delimited JSON sink
//!
//! Serializes each record as one self-describing object per line on a single
//! stream: `level` (lowercase severity name), `msg`, plus one top-level key
//! per resolved field. Duplicate keys collapse last-wins through the map —
//! de-duplication is this renderer's policy, not the core's. Output is
//! JSONL, compatible with log aggregation tools like ELK and Loki.

use crate::core::{BufferPool, Context, Field, Level, Result, Sink};
use crate::sinks::{KEY_LEVEL, KEY_MESSAGE};
use parking_lot::Mutex;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

pub struct JsonSink {
    writer: Mutex<Box<dyn Write + Send>>,
    pool: BufferPool,
}

impl JsonSink {
    /// A sink on an arbitrary writer (a stream, a capture buffer, ...).
    pub fn new<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
            pool: BufferPool::new(),
        }
    }

    /// A sink appending to a file, created if absent.
    pub fn file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self::new(file))
    }

    fn render(&self, buf: &mut Vec<u8>, level: Level, msg: &str, fields: &[Field]) -> Result<()> {
        let mut record = serde_json::Map::with_capacity(fields.len() + 2);
        record.insert(
            KEY_LEVEL.to_string(),
            serde_json::Value::String(level.as_str().to_string()),
        );
        record.insert(
            KEY_MESSAGE.to_string(),
            serde_json::Value::String(msg.to_string()),
        );
        for field in fields {
            record.insert(field.key().to_string(), field.value().to_json_value());
        }

        serde_json::to_writer(&mut *buf, &record)?;
        buf.push(b'\n');
        Ok(())
    }
}

impl Sink for JsonSink {
    fn log(&self, _ctx: &Context, level: Level, msg: &str, fields: &[Field]) {
        let mut buf = self.pool.get();
        if let Err(e) = self.render(&mut buf, level, msg, fields) {
            eprintln!("[FIELDLOG] json render failed: {}", e);
            return;
        }
        let mut writer = self.writer.lock();
        if let Err(e) = writer.write_all(&buf) {
            eprintln!("[FIELDLOG] json write failed: {}", e);
        }
    }

    fn name(&self) -> &str {
        "json"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex as PlMutex;
    use std::sync::Arc;

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

    #[test]
    fn test_record_shape() {
        let out = SharedBuf::default();
        let sink = JsonSink::new(out.clone());
        sink.log(
            &Context::background(),
            Level::Info,
            "started",
            &[Field::new("service", "x"), Field::new("port", 8080)],
        );

        let parsed: serde_json::Value = serde_json::from_str(out.contents().trim()).unwrap();
        assert_eq!(parsed["level"], "info");
        assert_eq!(parsed["msg"], "started");
        assert_eq!(parsed["service"], "x");
        assert_eq!(parsed["port"], 8080);
    }

    #[test]
    fn test_one_line_per_record() {
        let out = SharedBuf::default();
        let sink = JsonSink::new(out.clone());
        for i in 0..5 {
            sink.log(
                &Context::background(),
                Level::Debug,
                "tick",
                &[Field::new("i", i)],
            );
        }

        let contents = out.contents();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), 5);
        for line in lines {
            let parsed: serde_json::Value = serde_json::from_str(line).unwrap();
            assert_eq!(parsed["msg"], "tick");
        }
    }

    #[test]
    fn test_duplicate_keys_last_wins() {
        let out = SharedBuf::default();
        let sink = JsonSink::new(out.clone());
        sink.log(
            &Context::background(),
            Level::Info,
            "m",
            &[Field::new("k", "base"), Field::new("k", "call")],
        );

        let parsed: serde_json::Value = serde_json::from_str(out.contents().trim()).unwrap();
        assert_eq!(parsed["k"], "call");
    }

    #[test]
    fn test_value_types_serialize_natively() {
        let out = SharedBuf::default();
        let sink = JsonSink::new(out.clone());
        sink.log(
            &Context::background(),
            Level::Info,
            "m",
            &[
                Field::new("n", 3),
                Field::new("f", 0.5),
                Field::new("b", true),
                Field::new("s", "v"),
            ],
        );

        let parsed: serde_json::Value = serde_json::from_str(out.contents().trim()).unwrap();
        assert_eq!(parsed["n"], 3);
        assert_eq!(parsed["f"], 0.5);
        assert_eq!(parsed["b"], true);
        assert_eq!(parsed["s"], "v");
    }

    #[test]
    fn test_file_sink_appends() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("test.jsonl");

        {
            let sink = JsonSink::file(&path).unwrap();
            sink.log(&Context::background(), Level::Info, "first", &[]);
        }
        {
            let sink = JsonSink::file(&path).unwrap();
            sink.log(&Context::background(), Level::Info, "second", &[]);
        }

        let content = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("first"));
        assert!(lines[1].contains("second"));
    }
}
