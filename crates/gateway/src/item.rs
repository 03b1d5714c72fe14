//! Resource items
//!
//! A [`ResourceItem`] is one typed, independently validated and change-tracked
//! attribute of a device. Writes are all-or-nothing: a rejected write returns
//! `false` and leaves value and timestamps untouched.

use std::borrow::Cow;

use chrono::{DateTime, Utc};
use resource_types::{ApiDataType, AttributeDescriptor, Value, format_time_millis, parse_time};

use crate::catalog::INVALID_STRING;

// ─────────────────────────────────────────────────────────────────────────────
// Storage
// ─────────────────────────────────────────────────────────────────────────────

/// Value cell
///
/// Every item has a numeric pair. `String`, `TimePattern` and `Time` items
/// additionally own a text buffer; `Time` keeps its value as epoch
/// milliseconds in the numeric pair. Numeric items never allocate.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Cell {
    current: i64,
    previous: i64,
    text: Option<String>,
}

impl Cell {
    fn for_type(data_type: ApiDataType) -> Self {
        Self {
            current: 0,
            previous: 0,
            text: data_type.has_text_buffer().then(String::new),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Resource Item
// ─────────────────────────────────────────────────────────────────────────────

/// One attribute value of a resource
///
/// `last_set` moves on every accepted write, `last_changed` only when the
/// stored value actually differs. Both are unset until the first write.
#[derive(Debug, Clone)]
pub struct ResourceItem {
    descriptor: AttributeDescriptor,
    cell: Cell,
    last_set: Option<DateTime<Utc>>,
    last_changed: Option<DateTime<Utc>>,
    is_public: bool,
    rules_involved: Vec<i32>,
}

impl ResourceItem {
    /// Create an unset item bound to `descriptor`
    pub fn new(descriptor: AttributeDescriptor) -> Self {
        Self {
            cell: Cell::for_type(descriptor.data_type),
            descriptor,
            last_set: None,
            last_changed: None,
            is_public: true,
            rules_involved: Vec::new(),
        }
    }

    /// The descriptor this item was created from
    pub fn descriptor(&self) -> &AttributeDescriptor {
        &self.descriptor
    }

    /// Shorthand for `descriptor().suffix()`
    pub fn suffix(&self) -> &str {
        self.descriptor.suffix()
    }

    /// Declared data type
    pub fn data_type(&self) -> ApiDataType {
        self.descriptor.data_type
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Reads
    // ─────────────────────────────────────────────────────────────────────────

    /// Numeric value is nonzero
    pub fn to_bool(&self) -> bool {
        self.to_number() != 0
    }

    /// Current numeric value
    pub fn to_number(&self) -> i64 {
        self.cell.current
    }

    /// Numeric value before the last accepted numeric write
    pub fn to_number_previous(&self) -> i64 {
        self.cell.previous
    }

    /// Text form of the value
    ///
    /// `String` and `TimePattern` items borrow their stored text. `Time` items
    /// are formatted as `yyyy-MM-ddTHH:mm:ss` (UTC) on every call. Every other
    /// type yields the shared empty [`INVALID_STRING`].
    pub fn to_str(&self) -> Cow<'_, str> {
        match (self.cell.text.as_deref(), self.data_type()) {
            (Some(_), ApiDataType::Time) => format_time_millis(self.cell.current)
                .map(Cow::Owned)
                .unwrap_or(Cow::Borrowed(INVALID_STRING)),
            (Some(text), _) => Cow::Borrowed(text),
            (None, _) => Cow::Borrowed(INVALID_STRING),
        }
    }

    /// Value as a variant
    ///
    /// `Null` if the item was never set (or was cleared). Integer types other
    /// than `Bool` come back as `Float`, which is lossy above 2^53.
    pub fn to_variant(&self) -> Value {
        if self.last_set.is_none() {
            return Value::Null;
        }

        match self.data_type() {
            ApiDataType::String | ApiDataType::TimePattern | ApiDataType::Time => {
                Value::String(self.to_str().into_owned())
            }
            ApiDataType::Bool => Value::Bool(self.to_bool()),
            _ => Value::Float(self.to_number() as f64),
        }
    }

    /// Whether the item currently holds a known value
    pub fn has_value(&self) -> bool {
        self.last_set.is_some()
    }

    /// Time of the last accepted write
    pub fn last_set(&self) -> Option<DateTime<Utc>> {
        self.last_set
    }

    /// Time of the last write that changed the value
    pub fn last_changed(&self) -> Option<DateTime<Utc>> {
        self.last_changed
    }

    /// Overwrite both timestamps, e.g. when restoring persisted state
    pub fn set_time_stamps(&mut self, t: DateTime<Utc>) {
        self.last_set = Some(t);
        self.last_changed = Some(t);
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Writes
    // ─────────────────────────────────────────────────────────────────────────

    /// Set a text value
    ///
    /// Accepted by every item with a text buffer (`String`, `TimePattern` and
    /// `Time`) and rejected by all others. The text is stored as is; a `Time`
    /// item's numeric value is only updated through [`Self::set_variant`].
    pub fn set_str(&mut self, value: &str) -> bool {
        self.set_str_at(value, Utc::now())
    }

    /// Set a numeric value, subject to the descriptor's range check
    pub fn set_number(&mut self, value: i64) -> bool {
        self.set_number_at(value, Utc::now())
    }

    /// Set a value of any kind, coerced according to the declared type
    ///
    /// `Null` clears both timestamps and always succeeds.
    pub fn set_variant(&mut self, value: &Value) -> bool {
        self.set_variant_at(value, Utc::now())
    }

    fn set_str_at(&mut self, value: &str, now: DateTime<Utc>) -> bool {
        self.store_text(value, now)
    }

    fn set_number_at(&mut self, value: i64, now: DateTime<Utc>) -> bool {
        if !self.descriptor.accepts(value) {
            return false;
        }
        self.store_number(value, now)
    }

    fn set_variant_at(&mut self, value: &Value, now: DateTime<Utc>) -> bool {
        if value.is_null() {
            self.last_set = None;
            self.last_changed = None;
            return true;
        }

        match self.data_type() {
            data_type if data_type.is_textual() => self.store_text(&value.coerce_string(), now),
            ApiDataType::Bool => self.store_number(i64::from(value.coerce_bool()), now),
            ApiDataType::Time => match value {
                Value::String(s) => match parse_time(s) {
                    Some(dt) => self.store_number(dt.timestamp_millis(), now),
                    None => false,
                },
                Value::DateTime(dt) => self.store_number(dt.timestamp_millis(), now),
                _ => false,
            },
            _ => match value.coerce_i32() {
                Some(n) => self.set_number_at(i64::from(n), now),
                None => false,
            },
        }
    }

    fn store_text(&mut self, value: &str, now: DateTime<Utc>) -> bool {
        let Some(text) = &mut self.cell.text else {
            return false;
        };

        self.last_set = Some(now);
        if text.as_str() != value {
            value.clone_into(text);
            self.last_changed = Some(now);
        }
        true
    }

    fn store_number(&mut self, value: i64, now: DateTime<Utc>) -> bool {
        let cell = &mut self.cell;

        self.last_set = Some(now);
        cell.previous = cell.current;
        if cell.current != value {
            cell.current = value;
            self.last_changed = Some(now);
        }
        true
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Visibility & Rules
    // ─────────────────────────────────────────────────────────────────────────

    /// Whether the item is exposed in the public API
    pub fn is_public(&self) -> bool {
        self.is_public
    }

    /// Expose or hide the item in the public API
    pub fn set_is_public(&mut self, is_public: bool) {
        self.is_public = is_public;
    }

    /// Record that rule `rule_id` references this item
    pub fn in_rule(&mut self, rule_id: i32) {
        if !self.rules_involved.contains(&rule_id) {
            self.rules_involved.push(rule_id);
        }
    }

    /// Rules referencing this item, in the order they were recorded
    pub fn rules_involved(&self) -> &[i32] {
        &self.rules_involved
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
