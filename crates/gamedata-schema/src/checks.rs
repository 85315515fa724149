//! # Primitive Checks
//!
//! Atomic predicates over loosely-typed JSON values. Every function here is
//! total: absence or mismatch is reported through the return value.

use serde_json::{Map, Value};

/// True iff `value` is a JSON integer.
///
/// Booleans are a distinct JSON type and are never integers. Numbers with a
/// fractional or exponent form (`3.0`, `1e2`) are rejected as well. Numbers
/// keep their source text, so integers wider than 64 bits are accepted.
pub fn is_integer(value: &Value) -> bool {
    match value {
        Value::Number(n) => is_integer_literal(&n.to_string()),
        _ => false,
    }
}

fn is_integer_literal(text: &str) -> bool {
    !text.contains(|c: char| matches!(c, '.' | 'e' | 'E'))
}

/// Every key of `required` absent from `mapping`, in `required` order.
pub fn missing_keys<'k>(mapping: &Map<String, Value>, required: &[&'k str]) -> Vec<&'k str> {
    required
        .iter()
        .copied()
        .filter(|key| !mapping.contains_key(*key))
        .collect()
}

/// JSON type name of `value`, as used in defect messages.
pub fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(n) if is_integer_literal(&n.to_string()) => "integer",
        Value::Number(_) => "float",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Render a key list as `[a, b]`.
pub(crate) fn format_keys(keys: &[&str]) -> String {
    format!("[{}]", keys.join(", "))
}
