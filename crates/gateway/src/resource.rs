//! Resources
//!
//! A [`Resource`] owns the items of one device, group or gateway config entity.
//! Items are looked up by suffix with a linear scan; attribute counts per
//! resource are small.

use std::borrow::Cow;

use resource_types::ApiDataType;
use serde_json::{Map, Value as JsonValue};
use tracing::{error, trace};

use crate::catalog::{self, AttributeCatalog, INVALID_STRING};
use crate::error::{Error, Result};
use crate::item::ResourceItem;

/// Collection of resource items for one entity
///
/// At most one item per suffix. Removal swaps the last item into the freed
/// slot, so iteration order is not stable across [`Resource::remove_item`].
#[derive(Debug, Clone)]
pub struct Resource {
    prefix: &'static str,
    items: Vec<ResourceItem>,
}

impl Resource {
    /// Create an empty resource for an entity type such as `/sensors`
    pub fn new(prefix: &'static str) -> Self {
        Self {
            prefix,
            items: Vec::new(),
        }
    }

    /// Entity type prefix
    pub fn prefix(&self) -> &'static str {
        self.prefix
    }

    /// Add an item from the process-wide catalog
    ///
    /// Returns the existing item if `suffix` is already present, regardless of
    /// `data_type`. See [`Resource::add_item_from`].
    pub fn add_item(&mut self, data_type: ApiDataType, suffix: &str) -> Result<&mut ResourceItem> {
        self.add_item_from(catalog::global(), data_type, suffix)
    }

    /// Add an item described by `catalog`
    ///
    /// The `(data_type, suffix)` pair must be registered exactly. A missing pair
    /// is a mismatch between device code and the catalog: it panics in debug
    /// builds and is logged and returned as [`Error::UnknownAttribute`] in
    /// release builds.
    pub fn add_item_from(
        &mut self,
        catalog: &AttributeCatalog,
        data_type: ApiDataType,
        suffix: &str,
    ) -> Result<&mut ResourceItem> {
        if let Some(idx) = self.position(suffix) {
            return Ok(&mut self.items[idx]);
        }

        let Some(descriptor) = catalog.find(data_type, suffix) else {
            error!("Unknown attribute {}:{} for {}", data_type, suffix, self.prefix);
            if cfg!(debug_assertions) {
                panic!("unknown attribute {data_type}:{suffix}");
            }
            return Err(Error::UnknownAttribute {
                data_type: Some(data_type),
                suffix: suffix.to_string(),
            });
        };

        self.items.push(ResourceItem::new(descriptor.clone()));
        let idx = self.items.len() - 1;
        Ok(&mut self.items[idx])
    }

    /// Remove the item with this suffix, returning it
    pub fn remove_item(&mut self, suffix: &str) -> Option<ResourceItem> {
        self.position(suffix).map(|idx| self.items.swap_remove(idx))
    }

    /// Item with this suffix
    pub fn item(&self, suffix: &str) -> Option<&ResourceItem> {
        self.items.iter().find(|i| i.suffix() == suffix)
    }

    /// Mutable item with this suffix
    pub fn item_mut(&mut self, suffix: &str) -> Option<&mut ResourceItem> {
        self.items.iter_mut().find(|i| i.suffix() == suffix)
    }

    /// Boolean value of an item, `false` if absent
    pub fn to_bool(&self, suffix: &str) -> bool {
        self.item(suffix).is_some_and(ResourceItem::to_bool)
    }

    /// Numeric value of an item, `0` if absent
    pub fn to_number(&self, suffix: &str) -> i64 {
        self.item(suffix).map_or(0, ResourceItem::to_number)
    }

    /// Text value of an item, [`INVALID_STRING`] if absent
    pub fn to_str(&self, suffix: &str) -> Cow<'_, str> {
        self.item(suffix)
            .map_or(Cow::Borrowed(INVALID_STRING), ResourceItem::to_str)
    }

    /// Number of items
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Item at `idx`, `None` when out of range
    pub fn item_for_index(&self, idx: usize) -> Option<&ResourceItem> {
        self.items.get(idx)
    }

    /// Mutable item at `idx`, `None` when out of range
    pub fn item_for_index_mut(&mut self, idx: usize) -> Option<&mut ResourceItem> {
        self.items.get_mut(idx)
    }

    /// Iterate all items
    pub fn items(&self) -> impl Iterator<Item = &ResourceItem> {
        self.items.iter()
    }

    /// Public items that hold a value, as a nested JSON object
    ///
    /// `state/bri` becomes `{"state": {"bri": ..}}`; identity attributes
    /// (`attr/*`) are flattened to the top level.
    pub fn to_json(&self) -> Map<String, JsonValue> {
        let mut map = Map::new();

        for item in self.items.iter().filter(|i| i.is_public() && i.has_value()) {
            let value = JsonValue::from(item.to_variant());
            match item.suffix().split_once('/') {
                Some(("attr", key)) => {
                    map.insert(key.to_string(), value);
                }
                Some((group, key)) => {
                    let entry = map
                        .entry(group.to_string())
                        .or_insert_with(|| JsonValue::Object(Map::new()));
                    if let JsonValue::Object(inner) = entry {
                        inner.insert(key.to_string(), value);
                    }
                }
                None => {
                    map.insert(item.suffix().to_string(), value);
                }
            }
        }

        map
    }

    fn position(&self, suffix: &str) -> Option<usize> {
        self.items.iter().position(|i| i.suffix() == suffix)
    }
}

impl Drop for Resource {
    fn drop(&mut self) {
        trace!("Dropping resource {} ({} items)", self.prefix, self.items.len());
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::suffix::*;
    use resource_types::Value;

    #[test]
    fn test_add_item_is_idempotent() {
        let mut r = Resource::new(LIGHTS);
        r.add_item(ApiDataType::Bool, STATE_ON).unwrap().set_number(1);
        assert_eq!(r.item_count(), 1);

        let again = r.add_item(ApiDataType::Bool, STATE_ON).unwrap();
        assert!(again.to_bool());
        assert_eq!(r.item_count(), 1);
    }

    #[test]
    fn test_add_item_ignores_type_for_existing_suffix() {
        let mut r = Resource::new(LIGHTS);
        r.add_item(ApiDataType::UInt8, STATE_BRI).unwrap();

        let existing = r.add_item(ApiDataType::String, STATE_BRI).unwrap();
        assert_eq!(existing.data_type(), ApiDataType::UInt8);
        assert_eq!(r.item_count(), 1);
    }

    #[test]
    #[cfg_attr(debug_assertions, should_panic(expected = "unknown attribute"))]
    fn test_add_item_unknown_pair() {
        let mut r = Resource::new(SENSORS);
        let result = r.add_item(ApiDataType::String, STATE_ON);
        assert!(matches!(result, Err(Error::UnknownAttribute { .. })));
        assert_eq!(r.item_count(), 0);
    }

    #[test]
    fn test_remove_item() {
        let mut r = Resource::new(SENSORS);
        r.add_item(ApiDataType::String, ATTR_NAME).unwrap();
        r.add_item(ApiDataType::Bool, STATE_PRESENCE).unwrap();
        r.add_item(ApiDataType::UInt8, CONFIG_BATTERY).unwrap();

        let removed = r.remove_item(ATTR_NAME).unwrap();
        assert_eq!(removed.suffix(), ATTR_NAME);
        assert!(r.item(ATTR_NAME).is_none());
        assert_eq!(r.item_count(), 2);
        // swap-remove moved the last item into slot 0
        assert_eq!(r.item_for_index(0).unwrap().suffix(), CONFIG_BATTERY);

        assert!(r.remove_item(ATTR_NAME).is_none());
    }

    #[test]
    fn test_accessors_default_when_absent() {
        let mut r = Resource::new(SENSORS);
        assert!(!r.to_bool(STATE_PRESENCE));
        assert_eq!(r.to_number(CONFIG_BATTERY), 0);
        assert_eq!(r.to_str(ATTR_NAME), INVALID_STRING);

        r.add_item(ApiDataType::UInt8, CONFIG_BATTERY).unwrap().set_number(87);
        r.add_item(ApiDataType::String, ATTR_NAME).unwrap().set_str("Porch");
        assert_eq!(r.to_number(CONFIG_BATTERY), 87);
        assert_eq!(r.to_str(ATTR_NAME), "Porch");
    }

    #[test]
    fn test_item_for_index_bounds() {
        let mut r = Resource::new(GROUPS);
        r.add_item(ApiDataType::Bool, STATE_ALL_ON).unwrap();
        r.add_item(ApiDataType::Bool, STATE_ANY_ON).unwrap();

        assert!(r.item_for_index(0).is_some());
        assert!(r.item_for_index(1).is_some());
        assert!(r.item_for_index(2).is_none());
        assert!(r.item_for_index_mut(usize::MAX).is_none());
    }

    #[test]
    fn test_add_item_from_custom_catalog() {
        let catalog = AttributeCatalog::builtin_with(vec![
            resource_types::AttributeDescriptor::owned(ApiDataType::UInt16, "state/co2", 0, 5000),
        ])
        .unwrap();

        let mut r = Resource::new(SENSORS);
        let co2 = r.add_item_from(&catalog, ApiDataType::UInt16, "state/co2").unwrap();
        assert!(co2.set_number(800));
        assert!(!co2.set_number(6000));
    }

    #[test]
    fn test_clone_copies_items() {
        let mut r = Resource::new(LIGHTS);
        r.add_item(ApiDataType::String, ATTR_NAME).unwrap().set_str("Desk");

        let mut copy = r.clone();
        copy.item_mut(ATTR_NAME).unwrap().set_str("Shelf");

        assert_eq!(r.to_str(ATTR_NAME), "Desk");
        assert_eq!(copy.prefix(), LIGHTS);
    }

    #[test]
    fn test_to_json_nests_by_namespace() {
        let mut r = Resource::new(LIGHTS);
        r.add_item(ApiDataType::String, ATTR_NAME).unwrap().set_str("Desk");
        r.add_item(ApiDataType::Bool, STATE_ON).unwrap().set_variant(&Value::Bool(true));
        r.add_item(ApiDataType::UInt8, STATE_BRI).unwrap().set_number(127);
        r.add_item(ApiDataType::UInt16, STATE_CT).unwrap();
        let hidden = r.add_item(ApiDataType::Bool, CONFIG_ON).unwrap();
        hidden.set_number(1);
        hidden.set_is_public(false);

        let json = JsonValue::Object(r.to_json());
        assert_eq!(
            json,
            serde_json::json!({
                "name": "Desk",
                "state": { "on": true, "bri": 127.0 }
            })
        );
    }
}
