// Author: Dustin Pilgrim
// License: MIT

use serde::Serialize;
use serde_json::json;

use crate::ast::Value;
use crate::error::ScryError;
use crate::locate;

/// Largest integer magnitude an f64 stores exactly (2^53).
const INT_SAFE_MAX: f64 = 9_007_199_254_740_992.0;

/// Parse a JSON document into a [`Value`] tree.
///
/// Object key order is preserved. On failure the error carries the
/// character offset of the offending position, derived from the
/// line/column serde_json reports.
///
/// # Errors
/// Returns [`ScryError::ParseError`] when the text is not well-formed JSON.
pub fn parse(text: &str) -> Result<Value, ScryError> {
    match serde_json::from_str::<serde_json::Value>(text) {
        Ok(raw) => Ok(json_to_value(&raw)),
        Err(e) => Err(ScryError::ParseError {
            message: e.to_string(),
            offset: locate::offset_at(text, e.line(), e.column()),
            hint: Some("Check the document around the reported position".into()),
            code: Some(201),
        }),
    }
}

/// Serialize a value without any whitespace.
pub fn to_string(value: &Value) -> String {
    value_to_json(value).to_string()
}

/// Serialize a value with `indent` spaces per nesting level.
///
/// An indent of 0 produces the compact form.
pub fn to_string_pretty(value: &Value, indent: usize) -> String {
    if indent == 0 {
        return to_string(value);
    }

    let raw = value_to_json(value);
    let spaces = vec![b' '; indent];
    let formatter = serde_json::ser::PrettyFormatter::with_indent(&spaces);

    let mut out = Vec::new();
    let mut ser = serde_json::Serializer::with_formatter(&mut out, formatter);
    raw.serialize(&mut ser).unwrap();
    String::from_utf8(out).unwrap()
}

/// Convert a value tree into a `serde_json::Value`.
///
/// Numbers with no fractional part inside the f64-exact integer range
/// come out as JSON integers, so `8080` round-trips as `8080` rather
/// than `8080.0`. Non-finite numbers map to null, per serde_json's own
/// `From<f64>`.
pub fn value_to_json(value: &Value) -> serde_json::Value {
    match value {
        Value::Null => serde_json::Value::Null,
        Value::Bool(b) => json!(b),
        Value::Number(n) => {
            if n.is_finite() && n.fract() == 0.0 && n.abs() <= INT_SAFE_MAX {
                json!(*n as i64)
            } else {
                json!(n)
            }
        }
        Value::String(s) => json!(s),
        Value::Array(elements) => {
            json!(elements.iter().map(value_to_json).collect::<Vec<_>>())
        }
        Value::Object(entries) => {
            let mut map = serde_json::Map::new();
            for (key, val) in entries {
                map.insert(key.clone(), value_to_json(val));
            }
            serde_json::Value::Object(map)
        }
    }
}

/// Convert a `serde_json::Value` into a value tree.
pub fn json_to_value(raw: &serde_json::Value) -> Value {
    match raw {
        serde_json::Value::Null => Value::Null,
        serde_json::Value::Bool(b) => Value::Bool(*b),
        serde_json::Value::Number(n) => Value::Number(n.as_f64().unwrap_or_default()),
        serde_json::Value::String(s) => Value::String(s.clone()),
        serde_json::Value::Array(elements) => {
            Value::Array(elements.iter().map(json_to_value).collect())
        }
        serde_json::Value::Object(entries) => {
            let mut map = indexmap::IndexMap::new();
            for (key, val) in entries {
                map.insert(key.clone(), json_to_value(val));
            }
            Value::Object(map)
        }
    }
}
