//! Attribute values carried by the overlay and emitted in snapshots.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};

/// A single attribute value.
///
/// Snapshots are flat: only strings, integers, and finite floats reach the
/// wire. `Structured` holds values forwarded as decoded JSON by a host
/// binding; it serializes only when it wraps a scalar string or number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttributeValue {
    String(String),
    Integer(i64),
    Float(f64),
    Structured(Value),
}

impl AttributeValue {
    /// Converts the value to its canonical JSON form.
    ///
    /// `key` is only used to describe the failure.
    pub fn to_json(&self, key: &str) -> Result<Value> {
        match self {
            Self::String(s) => Ok(Value::String(s.clone())),
            Self::Integer(i) => Ok(Value::Number((*i).into())),
            Self::Float(f) => finite_number(key, *f),
            Self::Structured(value) => match value {
                Value::String(_) | Value::Number(_) => Ok(value.clone()),
                other => Err(Error::Serialization {
                    key: key.to_string(),
                    reason: format!("unsupported value type: {}", json_kind(other)),
                }),
            },
        }
    }

    /// Returns the string payload, if this is a string value.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            Self::Structured(Value::String(s)) => Some(s),
            _ => None,
        }
    }

    /// Returns the numeric payload as `f64`, if this is a number.
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Integer(i) => Some(*i as f64),
            Self::Float(f) => Some(*f),
            Self::Structured(Value::Number(n)) => n.as_f64(),
            _ => None,
        }
    }
}

fn finite_number(key: &str, f: f64) -> Result<Value> {
    Number::from_f64(f)
        .map(Value::Number)
        .ok_or_else(|| Error::Serialization {
            key: key.to_string(),
            reason: format!("non-finite number: {f}"),
        })
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

impl From<String> for AttributeValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<&str> for AttributeValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<i64> for AttributeValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<i32> for AttributeValue {
    fn from(value: i32) -> Self {
        Self::Integer(i64::from(value))
    }
}

impl From<f64> for AttributeValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<Value> for AttributeValue {
    fn from(value: Value) -> Self {
        Self::Structured(value)
    }
}

/// A geographic position supplied by the host.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub latitude: f64,
    pub longitude: f64,
}

impl Location {
    #[must_use]
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}
