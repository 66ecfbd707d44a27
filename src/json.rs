//! Defensive JSON access helpers.
//!
//! Payloads arrive as heterogeneous `serde_json::Value` trees. These helpers
//! make every "missing field" or "wrong shape" path a typed `DecodeError`
//! instead of a silent optional chain, and normalize the two payload shapes
//! the backend uses (bare array vs. object-wrapped array).

use serde_json::Value;

use crate::error::DecodeError;

/// Human-readable name of a JSON value's type, for error messages.
pub fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Parse raw payload text into a JSON value.
pub fn parse(data: &str) -> Result<Value, DecodeError> {
    serde_json::from_str(data).map_err(|e| DecodeError::InvalidJson(e.to_string()))
}

/// Require the value to be an object.
pub fn as_object(value: &Value) -> Result<&serde_json::Map<String, Value>, DecodeError> {
    value.as_object().ok_or(DecodeError::WrongShape {
        expected: "object",
        found: type_name(value),
    })
}

/// Require a string field on an object value.
pub fn require_str<'a>(value: &'a Value, field: &'static str) -> Result<&'a str, DecodeError> {
    let obj = as_object(value)?;
    match obj.get(field) {
        None => Err(DecodeError::MissingField(field)),
        Some(v) => v.as_str().ok_or(DecodeError::WrongType {
            field,
            expected: "string",
        }),
    }
}

/// Read an optional string field; absent or non-string yields `None`.
pub fn optional_str<'a>(value: &'a Value, field: &str) -> Option<&'a str> {
    value.get(field).and_then(Value::as_str)
}

/// Read an optional bool field; absent or non-bool yields `None`.
pub fn optional_bool(value: &Value, field: &str) -> Option<bool> {
    value.get(field).and_then(Value::as_bool)
}

/// Read an optional f64 field; absent or non-numeric yields `None`.
pub fn optional_f64(value: &Value, field: &str) -> Option<f64> {
    value.get(field).and_then(Value::as_f64)
}

/// Normalize a payload to an array of elements.
///
/// Accepts either a bare array or one level of object wrapping where `key`
/// holds the array. Anything else is a `WrongShape` error.
pub fn normalize_array<'a>(value: &'a Value, key: &'static str) -> Result<&'a [Value], DecodeError> {
    if let Some(items) = value.as_array() {
        return Ok(items);
    }
    if let Some(obj) = value.as_object() {
        if let Some(inner) = obj.get(key) {
            return inner.as_array().map(Vec::as_slice).ok_or(DecodeError::WrongType {
                field: key,
                expected: "array",
            });
        }
        return Err(DecodeError::MissingField(key));
    }
    Err(DecodeError::WrongShape {
        expected: "array or wrapped array",
        found: type_name(value),
    })
}
