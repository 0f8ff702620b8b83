//! Payload access
//!
//! GraphQL responses are kept as untyped `serde_json::Value` trees because
//! fields come and go upstream. Every accessor here defaults on absence:
//! a missing key, a `null`, or a value of the wrong shape all read as the
//! zero value for the requested type.

use serde_json::Value;

static NULL: Value = Value::Null;

/// Defaulting accessors over a JSON tree
pub trait PayloadExt {
    /// Walk object keys, yielding `Null` on the first miss
    fn at(&self, path: &[&str]) -> &Value;

    /// String value, or `""`
    fn str_or_empty(&self) -> &str;

    /// Non-negative integer value, or 0
    fn u64_or_zero(&self) -> u64;

    /// Numeric value (integer or float), or 0.0
    fn f64_or_zero(&self) -> f64;

    /// Boolean value, or false
    fn bool_or_false(&self) -> bool;

    /// Items of a connection's `edges` array, or nothing
    fn edges(&self) -> &[Value];

    /// The `node` of an edge
    fn node(&self) -> &Value;
}

impl PayloadExt for Value {
    fn at(&self, path: &[&str]) -> &Value {
        path.iter()
            .try_fold(self, |current, key| current.get(*key))
            .unwrap_or(&NULL)
    }

    fn str_or_empty(&self) -> &str {
        self.as_str().unwrap_or_default()
    }

    fn u64_or_zero(&self) -> u64 {
        self.as_u64()
            .or_else(|| self.as_f64().filter(|n| *n > 0.0).map(|n| n as u64))
            .unwrap_or(0)
    }

    fn f64_or_zero(&self) -> f64 {
        self.as_f64().unwrap_or(0.0)
    }

    fn bool_or_false(&self) -> bool {
        self.as_bool().unwrap_or(false)
    }

    fn edges(&self) -> &[Value] {
        self.get("edges")
            .and_then(Value::as_array)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    fn node(&self) -> &Value {
        self.at(&["node"])
    }
}

/// Optional, non-empty string at `value`
pub(crate) fn non_empty(value: &Value) -> Option<&str> {
    value.as_str().filter(|s| !s.is_empty())
}
