//! Typed accessors over decoded JSON values.
//!
//! Every "field may be absent" case in the parsers goes through these
//! helpers so each optional becomes an explicit default at the extraction
//! site instead of an ad-hoc fallback chain.

use serde_json::{Map, Value};

/// The object under `key`, if the value is an object carrying one.
pub(crate) fn obj<'a>(value: &'a Value, key: &str) -> Option<&'a Map<String, Value>> {
    value.get(key)?.as_object()
}

/// The array under `key`, if present.
pub(crate) fn arr<'a>(value: &'a Value, key: &str) -> Option<&'a Vec<Value>> {
    value.get(key)?.as_array()
}

/// The string under `key`, if present.
pub(crate) fn str_field<'a>(value: &'a Value, key: &str) -> Option<&'a str> {
    value.get(key)?.as_str()
}

/// The string under `key`, owned, with a fixed default.
pub(crate) fn str_or(value: &Value, key: &str, default: &str) -> String {
    str_field(value, key)
        .map(str::to_owned)
        .unwrap_or_else(|| default.to_owned())
}

/// A display string for `key`: strings pass through, numbers and booleans are
/// formatted, anything else yields the default. YAML in particular decodes
/// `version: 1.0` as a number.
pub(crate) fn display_or(value: &Value, key: &str, default: &str) -> String {
    match value.get(key) {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Bool(b)) => b.to_string(),
        _ => default.to_owned(),
    }
}

/// The boolean under `key`, defaulting to `false`.
pub(crate) fn bool_field(value: &Value, key: &str) -> bool {
    value.get(key).and_then(Value::as_bool).unwrap_or(false)
}
