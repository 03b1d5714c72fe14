//! Attribute catalog
//!
//! The catalog is the single source of truth for legal resource attributes.
//! It is built once, frozen into a process-wide static and only read
//! afterwards, so it can be shared by reference without locking.

use std::collections::HashSet;
use std::sync::OnceLock;

use resource_types::{ApiDataType, AttributeDescriptor};
use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::suffix::*;

/// Text returned for attributes that have no text form
pub const INVALID_STRING: &str = "";

static CATALOG: OnceLock<AttributeCatalog> = OnceLock::new();

// ─────────────────────────────────────────────────────────────────────────────
// Catalog
// ─────────────────────────────────────────────────────────────────────────────

/// Ordered registry of attribute descriptors
///
/// Registration order matters for [`AttributeCatalog::lookup`]: the first
/// descriptor whose suffix ends the key wins.
#[derive(Debug, Clone, Default)]
pub struct AttributeCatalog {
    descriptors: Vec<AttributeDescriptor>,
}

impl AttributeCatalog {
    /// Catalog containing the built-in attribute table
    pub fn builtin() -> Self {
        Self {
            descriptors: builtin_descriptors(),
        }
    }

    /// Built-in table followed by `extra`
    ///
    /// Fails if any suffix appears twice.
    pub fn builtin_with(extra: Vec<AttributeDescriptor>) -> Result<Self> {
        let mut descriptors = builtin_descriptors();
        descriptors.extend(extra);
        Self::from_descriptors(descriptors)
    }

    /// Catalog from an explicit descriptor list, in registration order
    pub fn from_descriptors(descriptors: Vec<AttributeDescriptor>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(descriptors.len());
        for d in &descriptors {
            if !seen.insert(d.suffix()) {
                return Err(Error::DuplicateSuffix(d.suffix().to_string()));
            }
        }
        Ok(Self { descriptors })
    }

    /// Classify a key by suffix match
    ///
    /// Returns the first descriptor whose suffix `key` ends with, so
    /// `"lights/abc/state/bri"` resolves to `state/bri`. Linear in catalog size.
    pub fn lookup(&self, key: &str) -> Option<&AttributeDescriptor> {
        self.descriptors.iter().find(|d| d.matches_key(key))
    }

    /// Descriptor with exactly this suffix
    pub fn get(&self, suffix: &str) -> Option<&AttributeDescriptor> {
        self.descriptors.iter().find(|d| d.suffix() == suffix)
    }

    /// Descriptor with exactly this type and suffix
    pub fn find(&self, data_type: ApiDataType, suffix: &str) -> Option<&AttributeDescriptor> {
        self.descriptors
            .iter()
            .find(|d| d.data_type == data_type && d.suffix() == suffix)
    }

    /// Iterate descriptors in registration order
    pub fn iter(&self) -> impl Iterator<Item = &AttributeDescriptor> {
        self.descriptors.iter()
    }

    /// Number of registered descriptors
    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    /// Check if the catalog is empty
    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }

    /// Pairs `(shorter, longer)` where `longer` ends with `shorter`
    ///
    /// For such pairs, a key ending with `longer` may be classified as
    /// `shorter` depending on registration order.
    pub fn ambiguous_suffixes(&self) -> Vec<(&str, &str)> {
        let mut pairs = Vec::new();
        for a in &self.descriptors {
            for b in &self.descriptors {
                if a.suffix().len() < b.suffix().len() && b.suffix().ends_with(a.suffix()) {
                    pairs.push((a.suffix(), b.suffix()));
                }
            }
        }
        pairs
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Process-wide Catalog
// ─────────────────────────────────────────────────────────────────────────────

/// The process-wide catalog, initialized with the built-in table on first use
pub fn global() -> &'static AttributeCatalog {
    CATALOG.get_or_init(|| freeze(AttributeCatalog::builtin()))
}

/// Initialize the process-wide catalog with the built-in table plus `extra`
///
/// Must run before anything calls [`global`]; the catalog cannot be replaced
/// once items may reference it.
pub fn init_with(extra: Vec<AttributeDescriptor>) -> Result<&'static AttributeCatalog> {
    let catalog = AttributeCatalog::builtin_with(extra)?;
    let mut installed = false;
    let frozen = CATALOG.get_or_init(|| {
        installed = true;
        freeze(catalog)
    });

    if !installed {
        return Err(Error::CatalogInitialized);
    }
    Ok(frozen)
}

fn freeze(catalog: AttributeCatalog) -> AttributeCatalog {
    for (shorter, longer) in catalog.ambiguous_suffixes() {
        warn!("Ambiguous attribute suffix: {} also matches keys of {}", shorter, longer);
    }
    debug!("Attribute catalog frozen with {} descriptors", catalog.len());
    catalog
}

// ─────────────────────────────────────────────────────────────────────────────
// Built-in Table
// ─────────────────────────────────────────────────────────────────────────────

fn builtin_descriptors() -> Vec<AttributeDescriptor> {
    use ApiDataType as T;
    let d = AttributeDescriptor::new;
    let r = AttributeDescriptor::with_range;

    vec![
        d(T::String, ATTR_NAME),
        d(T::String, ATTR_MANUFACTURER_NAME),
        d(T::String, ATTR_MODEL_ID),
        d(T::String, ATTR_TYPE),
        d(T::String, ATTR_CLASS),
        d(T::String, ATTR_UNIQUE_ID),
        d(T::String, ATTR_SW_VERSION),
        //
        d(T::Bool, STATE_ALARM),
        d(T::String, STATE_ALERT),
        d(T::Bool, STATE_ALL_ON),
        d(T::Bool, STATE_ANY_ON),
        d(T::UInt8, STATE_BRI),
        d(T::Int32, STATE_BUTTON_EVENT),
        d(T::Bool, STATE_CARBON_MONOXIDE),
        d(T::String, STATE_COLOR_MODE),
        d(T::UInt64, STATE_CONSUMPTION),
        d(T::UInt16, STATE_CURRENT),
        d(T::UInt16, STATE_CT),
        d(T::Bool, STATE_DARK),
        d(T::Bool, STATE_DAYLIGHT),
        d(T::String, STATE_EFFECT),
        d(T::Bool, STATE_FIRE),
        d(T::Bool, STATE_FLAG),
        d(T::UInt16, STATE_HUE),
        r(T::UInt16, STATE_HUMIDITY, 0, 10000),
        d(T::Time, STATE_LAST_UPDATED),
        r(T::UInt16, STATE_LIGHT_LEVEL, 0, 0xfffe),
        d(T::Bool, STATE_LOW_BATTERY),
        d(T::UInt32, STATE_LUX),
        d(T::Bool, STATE_ON),
        d(T::Bool, STATE_OPEN),
        d(T::Int16, STATE_ORIENTATION_X),
        d(T::Int16, STATE_ORIENTATION_Y),
        d(T::Int16, STATE_ORIENTATION_Z),
        d(T::Bool, STATE_PRESENCE),
        r(T::Int16, STATE_PRESSURE, 0, 32767),
        d(T::Int16, STATE_POWER),
        d(T::Bool, STATE_REACHABLE),
        d(T::UInt8, STATE_SAT),
        d(T::String, ACTION_SCENE),
        r(T::UInt8, STATE_SPEED, 0, 6),
        d(T::Int32, STATE_STATUS),
        d(T::Bool, STATE_TAMPERED),
        r(T::Int16, STATE_TEMPERATURE, -27315, 32767),
        d(T::UInt16, STATE_TILT_ANGLE),
        d(T::UInt8, STATE_VALVE),
        d(T::Bool, STATE_VIBRATION),
        d(T::UInt16, STATE_VIBRATION_STRENGTH),
        d(T::UInt16, STATE_VOLTAGE),
        d(T::Bool, STATE_WATER),
        d(T::UInt16, STATE_X),
        d(T::UInt16, STATE_Y),
        //
        d(T::String, CONFIG_ALERT),
        r(T::UInt8, CONFIG_BATTERY, 0, 100),
        d(T::UInt16, CONFIG_COLOR_CAPABILITIES),
        d(T::UInt16, CONFIG_CT_MIN),
        d(T::UInt16, CONFIG_CT_MAX),
        d(T::Bool, CONFIG_CONFIGURED),
        d(T::UInt16, CONFIG_DELAY),
        d(T::Bool, CONFIG_DISPLAY_FLIPPED),
        d(T::UInt16, CONFIG_DURATION),
        d(T::String, CONFIG_GROUP),
        r(T::Int16, CONFIG_HEAT_SETPOINT, 500, 3000),
        d(T::UInt32, CONFIG_HOST_FLAGS),
        d(T::UInt32, CONFIG_ID),
        d(T::String, CONFIG_LAT),
        d(T::Bool, CONFIG_LED_INDICATION),
        d(T::Time, CONFIG_LOCAL_TIME),
        d(T::Bool, CONFIG_LOCKED),
        d(T::String, CONFIG_LONG),
        d(T::UInt8, CONFIG_LEVEL_MIN),
        d(T::String, CONFIG_MODE),
        r(T::Int16, CONFIG_OFFSET, -500, 500),
        d(T::Bool, CONFIG_ON),
        d(T::UInt8, CONFIG_PENDING),
        d(T::UInt32, CONFIG_POWERUP),
        d(T::UInt8, CONFIG_POWER_ON_LEVEL),
        d(T::UInt16, CONFIG_POWER_ON_CT),
        d(T::Bool, CONFIG_REACHABLE),
        d(T::String, CONFIG_SCHEDULER),
        d(T::Bool, CONFIG_SCHEDULER_ON),
        d(T::UInt8, CONFIG_SENSITIVITY),
        d(T::UInt8, CONFIG_SENSITIVITY_MAX),
        r(T::Int8, CONFIG_SUNRISE_OFFSET, -120, 120),
        r(T::Int8, CONFIG_SUNSET_OFFSET, -120, 120),
        r(T::Int16, CONFIG_TEMPERATURE, -27315, 32767),
        r(T::UInt16, CONFIG_THOLD_DARK, 0, 0xfffe),
        r(T::UInt16, CONFIG_THOLD_OFFSET, 1, 0xfffe),
        d(T::String, CONFIG_URL),
        d(T::Bool, CONFIG_USERTEST),
        d(T::UInt8, CONFIG_WINDOW_COVERING_TYPE),
        d(T::UInt8, CONFIG_UBISYS_J1_MODE),
        d(T::UInt8, CONFIG_UBISYS_J1_WINDOW_COVERING_TYPE),
        d(T::UInt8, CONFIG_UBISYS_J1_CONFIGURATION_AND_STATUS),
        d(T::UInt16, CONFIG_UBISYS_J1_INSTALLED_OPEN_LIMIT_LIFT),
        d(T::UInt16, CONFIG_UBISYS_J1_INSTALLED_CLOSED_LIMIT_LIFT),
        d(T::UInt16, CONFIG_UBISYS_J1_INSTALLED_OPEN_LIMIT_TILT),
        d(T::UInt16, CONFIG_UBISYS_J1_INSTALLED_CLOSED_LIMIT_TILT),
        d(T::UInt8, CONFIG_UBISYS_J1_TURNAROUND_GUARD_TIME),
        d(T::UInt16, CONFIG_UBISYS_J1_LIFT_TO_TILT_TRANSITION_STEPS),
        d(T::UInt16, CONFIG_UBISYS_J1_TOTAL_STEPS),
        d(T::UInt16, CONFIG_UBISYS_J1_LIFT_TO_TILT_TRANSITION_STEPS2),
        d(T::UInt16, CONFIG_UBISYS_J1_TOTAL_STEPS2),
        d(T::UInt8, CONFIG_UBISYS_J1_ADDITIONAL_STEPS),
        d(T::UInt16, CONFIG_UBISYS_J1_INACTIVE_POWER_THRESHOLD),
        d(T::UInt16, CONFIG_UBISYS_J1_STARTUP_STEPS),
    ]
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
