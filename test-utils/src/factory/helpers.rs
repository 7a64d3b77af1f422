//! Shared helper utilities for factory methods.

use serde_json::{json, Value};

/// Counter for generating unique IDs in tests.
static COUNTER: std::sync::atomic::AtomicI64 = std::sync::atomic::AtomicI64::new(1);

/// Gets the next unique id for test data.
pub fn next_id() -> i64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Wraps a list in the reference-preserving envelope some backends emit.
pub fn preserved(values: Vec<Value>) -> Value {
    json!({ "$id": "1", "$values": values })
}
