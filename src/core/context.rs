//! Execution context passed to deferred field values
//!
//! A `Context` is an opaque, read-only carrier of ambient per-call data
//! (request id, trace id, ...). Deferred field values receive it at emission
//! time. The logging core never writes through a context.

use super::field::FieldValue;
use std::collections::HashMap;
use std::sync::Arc;

/// Immutable key-addressable execution context.
///
/// Cloning is cheap: the underlying map is shared behind an `Arc`, and
/// `with_value` derives a new context instead of mutating.
///
/// # Example
///
/// ```
/// use fieldlog::core::Context;
///
/// let ctx = Context::background().with_value("request_id", "abc-123");
/// assert!(ctx.get("request_id").is_some());
/// assert!(ctx.get("missing").is_none());
/// ```
#[derive(Debug, Clone, Default)]
pub struct Context {
    values: Arc<HashMap<String, FieldValue>>,
}

impl Context {
    /// The empty root context.
    #[must_use]
    pub fn background() -> Self {
        Self::default()
    }

    /// Derive a new context carrying one additional value.
    ///
    /// The receiver is unchanged; contexts already cloned from it keep
    /// observing their original values.
    #[must_use]
    pub fn with_value<K, V>(&self, key: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<FieldValue>,
    {
        let mut values: HashMap<String, FieldValue> = (*self.values).clone();
        values.insert(key.into(), value.into());
        Self {
            values: Arc::new(values),
        }
    }

    /// Read-only lookup.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&FieldValue> {
        self.values.get(key)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
