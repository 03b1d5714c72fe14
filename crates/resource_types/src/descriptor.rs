//! Attribute descriptors
//!
//! A descriptor is the immutable metadata of one attribute: its suffix (the
//! stable wire name, e.g. `state/bri`), its data type and its legal range.

use std::borrow::Cow;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::ApiDataType;

/// Immutable metadata for one resource attribute
///
/// A range of `[0, 0]` means "no range check". A legitimate `[0, 0]` range
/// therefore cannot be expressed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AttributeDescriptor {
    /// Stable attribute name, unique within a catalog
    pub suffix: Cow<'static, str>,
    /// Declared data type
    #[serde(rename = "type")]
    pub data_type: ApiDataType,
    /// Inclusive lower bound
    #[serde(default)]
    pub valid_min: i64,
    /// Inclusive upper bound
    #[serde(default)]
    pub valid_max: i64,
}

impl AttributeDescriptor {
    /// Create a descriptor without range check
    pub const fn new(data_type: ApiDataType, suffix: &'static str) -> Self {
        Self::with_range(data_type, suffix, 0, 0)
    }

    /// Create a descriptor with an inclusive valid range
    pub const fn with_range(
        data_type: ApiDataType,
        suffix: &'static str,
        valid_min: i64,
        valid_max: i64,
    ) -> Self {
        Self {
            suffix: Cow::Borrowed(suffix),
            data_type,
            valid_min,
            valid_max,
        }
    }

    /// Create a descriptor for a suffix only known at runtime
    pub fn owned(
        data_type: ApiDataType,
        suffix: impl Into<String>,
        valid_min: i64,
        valid_max: i64,
    ) -> Self {
        Self {
            suffix: Cow::Owned(suffix.into()),
            data_type,
            valid_min,
            valid_max,
        }
    }

    /// The attribute suffix
    pub fn suffix(&self) -> &str {
        &self.suffix
    }

    /// Whether writes are range checked
    pub fn has_range(&self) -> bool {
        self.valid_min != 0 || self.valid_max != 0
    }

    /// Whether `value` passes the range check
    pub fn accepts(&self, value: i64) -> bool {
        !self.has_range() || (self.valid_min..=self.valid_max).contains(&value)
    }

    /// Whether `key` ends with this descriptor's suffix
    pub fn matches_key(&self, key: &str) -> bool {
        key.ends_with(self.suffix())
    }
}

impl fmt::Display for AttributeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.data_type, self.suffix)?;
        if self.has_range() {
            write!(f, " [{}, {}]", self.valid_min, self.valid_max)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_range_accepts_everything() {
        let d = AttributeDescriptor::new(ApiDataType::Int32, "state/buttonevent");
        assert!(!d.has_range());
        assert!(d.accepts(i64::MIN));
        assert!(d.accepts(i64::MAX));
    }

    #[test]
    fn test_range_is_inclusive() {
        let d = AttributeDescriptor::with_range(ApiDataType::UInt8, "config/battery", 0, 100);
        assert!(d.has_range());
        assert!(d.accepts(0));
        assert!(d.accepts(100));
        assert!(!d.accepts(101));
        assert!(!d.accepts(-1));
    }

    #[test]
    fn test_matches_key_by_suffix() {
        let d = AttributeDescriptor::new(ApiDataType::UInt8, "state/bri");
        assert!(d.matches_key("state/bri"));
        assert!(d.matches_key("lights/abc/state/bri"));
        assert!(!d.matches_key("state/bri/x"));
    }

    #[test]
    fn test_display() {
        let d = AttributeDescriptor::with_range(ApiDataType::Int8, "config/sunsetoffset", -120, 120);
        assert_eq!(d.to_string(), "int8:config/sunsetoffset [-120, 120]");
        let d = AttributeDescriptor::owned(ApiDataType::String, "attr/name", 0, 0);
        assert_eq!(d.to_string(), "string:attr/name");
    }
}
