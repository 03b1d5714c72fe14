//! Variant value type exchanged with resource items
//!
//! `Value` is what the REST layer hands to `ResourceItem::set_variant` and what
//! `ResourceItem::to_variant` hands back. It carries no declared attribute
//! type; items coerce it according to their descriptor.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

// ─────────────────────────────────────────────────────────────────────────────
// Time Format
// ─────────────────────────────────────────────────────────────────────────────

/// Text form of time values (`yyyy-MM-ddTHH:mm:ss`, UTC)
pub const TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Format epoch milliseconds as `yyyy-MM-ddTHH:mm:ss` (UTC)
///
/// Returns `None` when the instant is outside the representable range.
pub fn format_time_millis(millis: i64) -> Option<String> {
    DateTime::<Utc>::from_timestamp_millis(millis).map(|dt| dt.format(TIME_FORMAT).to_string())
}

/// Parse `yyyy-MM-ddTHH:mm:ss` as a UTC instant
pub fn parse_time(s: &str) -> Option<DateTime<Utc>> {
    NaiveDateTime::parse_from_str(s, TIME_FORMAT)
        .ok()
        .map(|naive| naive.and_utc())
}

// ─────────────────────────────────────────────────────────────────────────────
// Variant Value Type
// ─────────────────────────────────────────────────────────────────────────────

/// Tagged value flowing in and out of resource items
///
/// `Null` means "empty/unset": an item that was never written reads back as
/// `Null`, and writing `Null` marks an item as having no known value.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value")]
pub enum Value {
    /// Empty / unset
    #[default]
    Null,
    /// Boolean value
    Bool(bool),
    /// 64-bit integer
    Int(i64),
    /// 64-bit floating point
    Float(f64),
    /// UTF-8 string
    String(String),
    /// Structured point in time
    DateTime(DateTime<Utc>),
}

// ─────────────────────────────────────────────────────────────────────────────
// Strict Accessors
// ─────────────────────────────────────────────────────────────────────────────

impl Value {
    /// Check if value is null
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Get as boolean
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Get as i64 (also converts from float if lossless)
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Int(i) => Some(*i),
            Value::Float(f)
                if f.fract() == 0.0 && *f >= i64::MIN as f64 && *f < i64::MAX as f64 =>
            {
                Some(*f as i64)
            }
            _ => None,
        }
    }

    /// Get as f64 (also converts from int)
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Float(f) => Some(*f),
            Value::Int(i) => Some(*i as f64),
            _ => None,
        }
    }

    /// Get as string reference
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Get as date-time
    pub fn as_datetime(&self) -> Option<DateTime<Utc>> {
        match self {
            Value::DateTime(dt) => Some(*dt),
            _ => None,
        }
    }

    fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::String(_) => "string",
            Value::DateTime(_) => "datetime",
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Lenient Coercions
// ─────────────────────────────────────────────────────────────────────────────

impl Value {
    /// Coerce to boolean
    ///
    /// Numbers are true when nonzero. Strings are true unless empty, `"0"` or
    /// `"false"` (any case).
    pub fn coerce_bool(&self) -> bool {
        match self {
            Value::Null | Value::DateTime(_) => false,
            Value::Bool(b) => *b,
            Value::Int(i) => *i != 0,
            Value::Float(f) => *f != 0.0,
            Value::String(s) => !(s.is_empty() || s == "0" || s.eq_ignore_ascii_case("false")),
        }
    }

    /// Coerce to text
    pub fn coerce_string(&self) -> String {
        match self {
            Value::Null => String::new(),
            Value::Bool(b) => b.to_string(),
            Value::Int(i) => i.to_string(),
            Value::Float(f) => f.to_string(),
            Value::String(s) => s.clone(),
            Value::DateTime(dt) => dt.format(TIME_FORMAT).to_string(),
        }
    }

    /// Coerce to a 32-bit integer
    ///
    /// Floats are rounded to the nearest integer. Fails for null and date-time
    /// values, for non-finite floats, for unparseable strings and for anything
    /// outside the `i32` range.
    pub fn coerce_i32(&self) -> Option<i32> {
        match self {
            Value::Null | Value::DateTime(_) => None,
            Value::Bool(b) => Some(i32::from(*b)),
            Value::Int(i) => i32::try_from(*i).ok(),
            Value::Float(f) => {
                let rounded = f.round();
                (rounded >= f64::from(i32::MIN) && rounded <= f64::from(i32::MAX))
                    .then_some(rounded as i32)
            }
            Value::String(s) => s.trim().parse().ok(),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// From Implementations
// ─────────────────────────────────────────────────────────────────────────────

impl From<()> for Value {
    fn from(_: ()) -> Self {
        Value::Null
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Int(i64::from(v))
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Int(v)
    }
}

impl From<u32> for Value {
    fn from(v: u32) -> Self {
        Value::Int(i64::from(v))
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::String(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::String(v.to_string())
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(v: DateTime<Utc>) -> Self {
        Value::DateTime(v)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        match v {
            Some(val) => val.into(),
            None => Value::Null,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// serde_json::Value Interop
// ─────────────────────────────────────────────────────────────────────────────

/// Arrays and objects have no resource item representation and map to `Null`.
impl From<serde_json::Value> for Value {
    fn from(v: serde_json::Value) -> Self {
        match v {
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Value::Int(i)
                } else if let Some(f) = n.as_f64() {
                    Value::Float(f)
                } else {
                    Value::Null
                }
            }
            serde_json::Value::String(s) => Value::String(s),
            serde_json::Value::Null
            | serde_json::Value::Array(_)
            | serde_json::Value::Object(_) => Value::Null,
        }
    }
}

impl From<Value> for serde_json::Value {
    fn from(v: Value) -> Self {
        match v {
            Value::Null => serde_json::Value::Null,
            Value::Bool(b) => serde_json::Value::Bool(b),
            Value::Int(i) => serde_json::Value::Number(i.into()),
            Value::Float(f) => serde_json::Number::from_f64(f)
                .map(serde_json::Value::Number)
                .unwrap_or(serde_json::Value::Null),
            Value::String(s) => serde_json::Value::String(s),
            Value::DateTime(dt) => serde_json::Value::String(dt.format(TIME_FORMAT).to_string()),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// TryFrom Implementations
// ─────────────────────────────────────────────────────────────────────────────

/// Error when converting from Value
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValueConversionError {
    #[error("Expected {expected}, got {actual}")]
    TypeMismatch {
        expected: &'static str,
        actual: &'static str,
    },
    #[error("Integer overflow")]
    IntegerOverflow,
}

impl TryFrom<Value> for bool {
    type Error = ValueConversionError;
    fn try_from(v: Value) -> Result<Self, Self::Error> {
        v.as_bool().ok_or(ValueConversionError::TypeMismatch {
            expected: "bool",
            actual: v.type_name(),
        })
    }
}

impl TryFrom<Value> for i64 {
    type Error = ValueConversionError;
    fn try_from(v: Value) -> Result<Self, Self::Error> {
        v.as_i64().ok_or(ValueConversionError::TypeMismatch {
            expected: "int",
            actual: v.type_name(),
        })
    }
}

impl TryFrom<Value> for i32 {
    type Error = ValueConversionError;
    fn try_from(v: Value) -> Result<Self, Self::Error> {
        let i = i64::try_from(v)?;
        i32::try_from(i).map_err(|_| ValueConversionError::IntegerOverflow)
    }
}

impl TryFrom<Value> for f64 {
    type Error = ValueConversionError;
    fn try_from(v: Value) -> Result<Self, Self::Error> {
        v.as_f64().ok_or(ValueConversionError::TypeMismatch {
            expected: "float",
            actual: v.type_name(),
        })
    }
}

impl TryFrom<Value> for String {
    type Error = ValueConversionError;
    fn try_from(v: Value) -> Result<Self, Self::Error> {
        match v {
            Value::String(s) => Ok(s),
            _ => Err(ValueConversionError::TypeMismatch {
                expected: "string",
                actual: v.type_name(),
            }),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
