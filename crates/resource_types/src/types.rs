// Resource Types - Attribute data types
//
// Every attribute in the catalog declares one of these types. The type decides
// how a resource item stores its value and how variant writes are coerced.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

// ─────────────────────────────────────────────────────────────────────────────
// Errors
// ─────────────────────────────────────────────────────────────────────────────

/// Errors raised while parsing resource type names
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TypesError {
    #[error("Unknown data type: {0}")]
    UnknownDataType(String),
}

// ─────────────────────────────────────────────────────────────────────────────
// Data Types
// ─────────────────────────────────────────────────────────────────────────────

/// Declared data type of a resource attribute
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApiDataType {
    /// Boolean, stored as 0 / 1
    Bool,
    /// Unsigned 8-bit integer
    UInt8,
    /// Unsigned 16-bit integer
    UInt16,
    /// Unsigned 32-bit integer
    UInt32,
    /// Unsigned 64-bit integer
    UInt64,
    /// Signed 8-bit integer
    Int8,
    /// Signed 16-bit integer
    Int16,
    /// Signed 32-bit integer
    Int32,
    /// UTF-8 string
    String,
    /// Point in time, stored as milliseconds since the UNIX epoch
    Time,
    /// Recurring time pattern, stored as its textual form
    TimePattern,
}

impl ApiDataType {
    /// All data types, in declaration order
    pub const ALL: [ApiDataType; 11] = [
        ApiDataType::Bool,
        ApiDataType::UInt8,
        ApiDataType::UInt16,
        ApiDataType::UInt32,
        ApiDataType::UInt64,
        ApiDataType::Int8,
        ApiDataType::Int16,
        ApiDataType::Int32,
        ApiDataType::String,
        ApiDataType::Time,
        ApiDataType::TimePattern,
    ];

    /// Lowercase name used in configuration files and diagnostics
    pub const fn name(self) -> &'static str {
        match self {
            ApiDataType::Bool => "bool",
            ApiDataType::UInt8 => "uint8",
            ApiDataType::UInt16 => "uint16",
            ApiDataType::UInt32 => "uint32",
            ApiDataType::UInt64 => "uint64",
            ApiDataType::Int8 => "int8",
            ApiDataType::Int16 => "int16",
            ApiDataType::Int32 => "int32",
            ApiDataType::String => "string",
            ApiDataType::Time => "time",
            ApiDataType::TimePattern => "timepattern",
        }
    }

    /// Whether values of this type are kept as text
    ///
    /// `Time` is not textual: it is stored as epoch milliseconds and only
    /// formatted on read.
    pub const fn is_textual(self) -> bool {
        matches!(self, ApiDataType::String | ApiDataType::TimePattern)
    }

    /// Whether items of this type keep a text buffer
    ///
    /// `Time` keeps one alongside its epoch milliseconds so raw text writes
    /// are accepted.
    pub const fn has_text_buffer(self) -> bool {
        matches!(
            self,
            ApiDataType::String | ApiDataType::Time | ApiDataType::TimePattern
        )
    }

    /// Whether values of this type are plain integers (`Bool` excluded)
    pub const fn is_integer(self) -> bool {
        matches!(
            self,
            ApiDataType::UInt8
                | ApiDataType::UInt16
                | ApiDataType::UInt32
                | ApiDataType::UInt64
                | ApiDataType::Int8
                | ApiDataType::Int16
                | ApiDataType::Int32
        )
    }
}

impl fmt::Display for ApiDataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ApiDataType {
    type Err = TypesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "bool" | "boolean" => Ok(Self::Bool),
            "uint8" | "u8" => Ok(Self::UInt8),
            "uint16" | "u16" => Ok(Self::UInt16),
            "uint32" | "u32" => Ok(Self::UInt32),
            "uint64" | "u64" => Ok(Self::UInt64),
            "int8" | "i8" => Ok(Self::Int8),
            "int16" | "i16" => Ok(Self::Int16),
            "int32" | "i32" => Ok(Self::Int32),
            "string" | "str" => Ok(Self::String),
            "time" => Ok(Self::Time),
            "timepattern" => Ok(Self::TimePattern),
            _ => Err(TypesError::UnknownDataType(s.to_string())),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_names() {
        for ty in ApiDataType::ALL {
            assert_eq!(ty.name().parse::<ApiDataType>(), Ok(ty));
        }
        assert_eq!("Boolean".parse::<ApiDataType>(), Ok(ApiDataType::Bool));
        assert_eq!("I16".parse::<ApiDataType>(), Ok(ApiDataType::Int16));
    }

    #[test]
    fn test_parse_unknown() {
        let err = "float".parse::<ApiDataType>().unwrap_err();
        assert_eq!(err, TypesError::UnknownDataType("float".to_string()));
    }

    #[test]
    fn test_storage_classes() {
        assert!(ApiDataType::String.is_textual());
        assert!(ApiDataType::TimePattern.is_textual());
        assert!(!ApiDataType::Time.is_textual());
        assert!(ApiDataType::Time.has_text_buffer());
        assert!(!ApiDataType::UInt8.has_text_buffer());
        assert!(!ApiDataType::Bool.is_integer());
        assert!(ApiDataType::UInt64.is_integer());
    }

    #[test]
    fn test_serde_lowercase() {
        let json = serde_json::to_string(&ApiDataType::TimePattern).unwrap();
        assert_eq!(json, "\"timepattern\"");
        let back: ApiDataType = serde_json::from_str("\"uint16\"").unwrap();
        assert_eq!(back, ApiDataType::UInt16);
    }
}
