//! Ordered key/value fields with deferred resolution
//!
//! A `Field` pairs a key with either a literal value or a *deferred* value: a
//! function of the execution [`Context`], evaluated exactly once per log call
//! at emission time. Resolution always produces a new field; the original is
//! never rewritten, so base-field lists can be shared across concurrent
//! calls.

use super::context::Context;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// Literal value carried by a field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    String(String),
    Int(i64),
    Float(f64),
    Bool(bool),
    Null,
}

static NULL_VALUE: FieldValue = FieldValue::Null;

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::String(s) => write!(f, "{}", s),
            FieldValue::Int(i) => write!(f, "{}", i),
            FieldValue::Float(fl) => write!(f, "{}", fl),
            FieldValue::Bool(b) => write!(f, "{}", b),
            FieldValue::Null => write!(f, "null"),
        }
    }
}

impl FieldValue {
    /// Convert to `serde_json::Value` for the line-delimited record shape.
    #[must_use]
    pub fn to_json_value(&self) -> serde_json::Value {
        match self {
            FieldValue::String(s) => serde_json::Value::String(s.clone()),
            FieldValue::Int(i) => serde_json::Value::Number((*i).into()),
            FieldValue::Float(f) => serde_json::Number::from_f64(*f)
                .map(serde_json::Value::Number)
                .unwrap_or(serde_json::Value::Null),
            FieldValue::Bool(b) => serde_json::Value::Bool(*b),
            FieldValue::Null => serde_json::Value::Null,
        }
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        FieldValue::String(s)
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::String(s.to_string())
    }
}

impl From<i64> for FieldValue {
    fn from(i: i64) -> Self {
        FieldValue::Int(i)
    }
}

impl From<i32> for FieldValue {
    fn from(i: i32) -> Self {
        FieldValue::Int(i as i64)
    }
}

impl From<u16> for FieldValue {
    fn from(i: u16) -> Self {
        FieldValue::Int(i as i64)
    }
}

impl From<f64> for FieldValue {
    fn from(f: f64) -> Self {
        FieldValue::Float(f)
    }
}

impl From<bool> for FieldValue {
    fn from(b: bool) -> Self {
        FieldValue::Bool(b)
    }
}

/// Deferred value: a pure function from the execution context to a value,
/// run synchronously on the logging call's thread.
pub type Valuer = Arc<dyn Fn(&Context) -> FieldValue + Send + Sync>;

/// Where a field's value comes from: a literal, or a deferred function
/// resolved once at merge time.
#[derive(Clone)]
pub enum FieldSource {
    Literal(FieldValue),
    Deferred(Valuer),
}

impl FieldSource {
    /// The literal value, if already materialized.
    ///
    /// A deferred source that reaches a renderer unresolved reads as null;
    /// the dispatch pipeline resolves every field before it hands the list
    /// to a sink, so sinks only ever observe literals.
    #[must_use]
    pub fn as_literal(&self) -> &FieldValue {
        match self {
            FieldSource::Literal(v) => v,
            FieldSource::Deferred(_) => &NULL_VALUE,
        }
    }
}

impl fmt::Debug for FieldSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldSource::Literal(v) => f.debug_tuple("Literal").field(v).finish(),
            FieldSource::Deferred(_) => f.debug_tuple("Deferred").field(&"<fn>").finish(),
        }
    }
}

/// An ordered key/value annotation attached to a log record.
///
/// # Examples
///
/// ```
/// use fieldlog::core::{Context, Field, FieldValue};
///
/// let literal = Field::new("port", 8080);
/// let deferred = Field::deferred("request_id", |ctx: &Context| {
///     ctx.get("request_id").cloned().unwrap_or(FieldValue::Null)
/// });
///
/// let ctx = Context::background().with_value("request_id", "r-7");
/// let resolved = deferred.resolve(&ctx);
/// assert_eq!(resolved.value(), &FieldValue::String("r-7".to_string()));
/// ```
#[derive(Debug, Clone)]
pub struct Field {
    key: String,
    source: FieldSource,
}

impl Field {
    /// A field with a literal value.
    pub fn new<K, V>(key: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<FieldValue>,
    {
        Self {
            key: key.into(),
            source: FieldSource::Literal(value.into()),
        }
    }

    /// A field whose value is computed from the execution context at
    /// emission time.
    pub fn deferred<K, F>(key: K, f: F) -> Self
    where
        K: Into<String>,
        F: Fn(&Context) -> FieldValue + Send + Sync + 'static,
    {
        Self {
            key: key.into(),
            source: FieldSource::Deferred(Arc::new(f)),
        }
    }

    /// A field backed by a pre-built [`Valuer`], e.g. [`timestamp`] or
    /// [`context_value`].
    pub fn with_valuer<K: Into<String>>(key: K, valuer: Valuer) -> Self {
        Self {
            key: key.into(),
            source: FieldSource::Deferred(valuer),
        }
    }

    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    #[must_use]
    pub fn source(&self) -> &FieldSource {
        &self.source
    }

    /// The materialized value. See [`FieldSource::as_literal`] for the
    /// unresolved-deferred case.
    #[must_use]
    pub fn value(&self) -> &FieldValue {
        self.source.as_literal()
    }

    #[must_use]
    pub fn is_deferred(&self) -> bool {
        matches!(self.source, FieldSource::Deferred(_))
    }

    /// Resolve against `ctx`, producing a new field.
    ///
    /// A deferred value is invoked exactly once; a literal field is copied
    /// unchanged. The receiver is never mutated, which is what keeps shared
    /// base-field lists safe under concurrent calls.
    #[must_use]
    pub fn resolve(&self, ctx: &Context) -> Field {
        match &self.source {
            FieldSource::Literal(v) => Field {
                key: self.key.clone(),
                source: FieldSource::Literal(v.clone()),
            },
            FieldSource::Deferred(f) => Field {
                key: self.key.clone(),
                source: FieldSource::Literal(f(ctx)),
            },
        }
    }
}

/// A valuer producing the current local time formatted with a strftime
/// layout, e.g. `"%H:%M:%S%.3f"`.
pub fn timestamp(layout: &str) -> Valuer {
    let layout = layout.to_string();
    Arc::new(move |_ctx: &Context| {
        FieldValue::String(chrono::Local::now().format(&layout).to_string())
    })
}

/// A valuer reading a key from the execution context, null when absent.
pub fn context_value<K: Into<String>>(key: K) -> Valuer {
    let key = key.into();
    Arc::new(move |ctx: &Context| ctx.get(&key).cloned().unwrap_or(FieldValue::Null))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_literal_field() {
        let field = Field::new("port", 8080);
        assert_eq!(field.key(), "port");
        assert_eq!(field.value(), &FieldValue::Int(8080));
        assert!(!field.is_deferred());
    }

    #[test]
    fn test_resolve_copies_literal_unchanged() {
        let field = Field::new("service", "x");
        let resolved = field.resolve(&Context::background());
        assert_eq!(resolved.value(), &FieldValue::String("x".to_string()));
    }

    #[test]
    fn test_resolve_invokes_deferred_once() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let field = Field::deferred("n", move |_ctx| {
            FieldValue::Int(counter.fetch_add(1, Ordering::SeqCst) as i64)
        });

        let resolved = field.resolve(&Context::background());
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(resolved.value(), &FieldValue::Int(0));

        // the resolved copy is a literal; resolving it again runs nothing
        let again = resolved.resolve(&Context::background());
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(again.value(), &FieldValue::Int(0));
    }

    #[test]
    fn test_resolve_does_not_mutate_original() {
        let field = Field::deferred("rid", |ctx: &Context| {
            ctx.get("rid").cloned().unwrap_or(FieldValue::Null)
        });
        let ctx = Context::background().with_value("rid", "r-1");

        let resolved = field.resolve(&ctx);
        assert_eq!(resolved.value(), &FieldValue::String("r-1".to_string()));
        assert!(field.is_deferred());
    }

    #[test]
    fn test_unresolved_deferred_reads_as_null() {
        let field = Field::deferred("rid", |_ctx| FieldValue::Bool(true));
        assert_eq!(field.value(), &FieldValue::Null);
    }

    #[test]
    fn test_context_value_valuer() {
        let field = Field::with_valuer("trace", context_value("trace"));
        let ctx = Context::background().with_value("trace", "t-9");
        assert_eq!(
            field.resolve(&ctx).value(),
            &FieldValue::String("t-9".to_string())
        );
        assert_eq!(
            field.resolve(&Context::background()).value(),
            &FieldValue::Null
        );
    }

    #[test]
    fn test_timestamp_valuer_uses_layout() {
        let field = Field::with_valuer("ts", timestamp("%Y"));
        let resolved = field.resolve(&Context::background());
        match resolved.value() {
            FieldValue::String(s) => {
                assert_eq!(s.len(), 4);
                assert!(s.chars().all(|c| c.is_ascii_digit()));
            }
            other => panic!("expected string timestamp, got {:?}", other),
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(FieldValue::from("x").to_string(), "x");
        assert_eq!(FieldValue::Int(3).to_string(), "3");
        assert_eq!(FieldValue::Bool(true).to_string(), "true");
        assert_eq!(FieldValue::Null.to_string(), "null");
    }
}
