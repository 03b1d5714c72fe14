//! Gateway configuration
//!
//! A TOML file declares extra attribute descriptors and seed resources:
//!
//! ```toml
//! [[attributes]]
//! suffix = "state/co2"
//! type = "uint16"
//! min = 0
//! max = 5000
//!
//! [[resources]]
//! prefix = "/sensors"
//!
//! [resources.items]
//! "attr/name" = "Kitchen"
//! "state/co2" = 412
//! ```
//!
//! Values can be overridden from `GATEWAY_`-prefixed environment variables,
//! with `__` separating nested keys.

use std::collections::BTreeMap;
use std::path::Path;

use figment::Figment;
use figment::providers::{Env, Format, Toml};
use resource_types::{ApiDataType, AttributeDescriptor, Value};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::catalog::AttributeCatalog;
use crate::error::{Error, Result};
use crate::resource::Resource;
use crate::suffix::prefix_from_str;

/// Root configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GatewayConfig {
    /// Descriptors appended to the built-in catalog
    #[serde(default)]
    pub attributes: Vec<AttributeConfig>,

    /// Resources created at startup
    #[serde(default)]
    pub resources: Vec<ResourceConfig>,
}

/// One extra attribute descriptor
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttributeConfig {
    pub suffix: String,
    /// Data type name, e.g. `uint8` or `string`
    #[serde(rename = "type")]
    pub data_type: String,
    #[serde(default)]
    pub min: Option<i64>,
    #[serde(default)]
    pub max: Option<i64>,
}

/// One seed resource
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResourceConfig {
    /// Entity type prefix, e.g. `/lights`
    pub prefix: String,

    /// Initial values keyed by attribute suffix
    #[serde(default)]
    pub items: BTreeMap<String, serde_json::Value>,
}

impl GatewayConfig {
    /// Load from a TOML file, with environment overrides
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let config: Self = Figment::new()
            .merge(Toml::file(path))
            .merge(Env::prefixed("GATEWAY_").split("__"))
            .extract()?;

        info!(
            "Loaded {} attribute(s) and {} resource(s) from {}",
            config.attributes.len(),
            config.resources.len(),
            path.display()
        );
        Ok(config)
    }

    /// Parse from a TOML string
    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::Config(e.to_string()))
    }

    /// Convert the `[[attributes]]` section into descriptors
    pub fn descriptors(&self) -> Result<Vec<AttributeDescriptor>> {
        self.attributes
            .iter()
            .map(AttributeConfig::to_descriptor)
            .collect()
    }

    /// Build all seed resources against `catalog`
    pub fn build_resources(&self, catalog: &AttributeCatalog) -> Result<Vec<Resource>> {
        self.resources.iter().map(|r| r.build(catalog)).collect()
    }
}

impl AttributeConfig {
    pub fn to_descriptor(&self) -> Result<AttributeDescriptor> {
        let data_type: ApiDataType = self.data_type.parse()?;
        let min = self.min.unwrap_or(0);
        let max = self.max.unwrap_or(0);
        if min > max {
            return Err(Error::Config(format!(
                "{}: min {} is greater than max {}",
                self.suffix, min, max
            )));
        }
        Ok(AttributeDescriptor::owned(
            data_type,
            self.suffix.clone(),
            min,
            max,
        ))
    }
}

impl ResourceConfig {
    /// Create the resource and apply its initial values
    ///
    /// Suffixes must be registered in `catalog`; the item takes the
    /// registered type.
    pub fn build(&self, catalog: &AttributeCatalog) -> Result<Resource> {
        let prefix =
            prefix_from_str(&self.prefix).ok_or_else(|| Error::UnknownPrefix(self.prefix.clone()))?;
        let mut resource = Resource::new(prefix);

        for (suffix, raw) in &self.items {
            let Some(descriptor) = catalog.get(suffix) else {
                return Err(Error::UnknownAttribute {
                    data_type: None,
                    suffix: suffix.clone(),
                });
            };
            let data_type = descriptor.data_type;

            let item = resource.add_item_from(catalog, data_type, suffix)?;
            if !item.set_variant(&Value::from(raw.clone())) {
                return Err(Error::InvalidValue {
                    suffix: suffix.clone(),
                    value: raw.to_string(),
                });
            }
        }

        debug!(
            "Built {} resource with {} item(s)",
            resource.prefix(),
            resource.item_count()
        );
        Ok(resource)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::suffix::*;
    use std::io::Write;

    const SAMPLE: &str = r#"
[[attributes]]
suffix = "state/co2"
type = "uint16"
min = 0
max = 5000

[[resources]]
prefix = "/sensors"

[resources.items]
"attr/name" = "Kitchen"
"attr/uniqueid" = "00:11:22:33:44:55:66:77-01"
"state/co2" = 412
"config/on" = true
"#;

    fn catalog_for(config: &GatewayConfig) -> AttributeCatalog {
        AttributeCatalog::builtin_with(config.descriptors().unwrap()).unwrap()
    }

    #[test]
    fn test_parse_sample() {
        let config = GatewayConfig::from_toml(SAMPLE).unwrap();
        assert_eq!(config.attributes.len(), 1);
        assert_eq!(config.resources.len(), 1);
        assert_eq!(config.resources[0].items.len(), 4);
    }

    #[test]
    fn test_descriptors() {
        let config = GatewayConfig::from_toml(SAMPLE).unwrap();
        let descriptors = config.descriptors().unwrap();
        assert_eq!(descriptors[0].suffix(), "state/co2");
        assert_eq!(descriptors[0].data_type, ApiDataType::UInt16);
        assert_eq!(descriptors[0].valid_max, 5000);
    }

    #[test]
    fn test_descriptor_rejects_bad_type_and_range() {
        let config = GatewayConfig::from_toml(
            r#"
[[attributes]]
suffix = "state/foo"
type = "quaternion"
"#,
        )
        .unwrap();
        assert!(matches!(config.descriptors(), Err(Error::Types(_))));

        let config = GatewayConfig::from_toml(
            r#"
[[attributes]]
suffix = "state/foo"
type = "int8"
min = 10
max = -10
"#,
        )
        .unwrap();
        assert!(matches!(config.descriptors(), Err(Error::Config(_))));
    }

    #[test]
    fn test_build_resource() {
        let config = GatewayConfig::from_toml(SAMPLE).unwrap();
        let catalog = catalog_for(&config);
        let resources = config.build_resources(&catalog).unwrap();

        let r = &resources[0];
        assert_eq!(r.prefix(), SENSORS);
        assert_eq!(r.to_str(ATTR_NAME), "Kitchen");
        assert_eq!(r.to_number("state/co2"), 412);
        assert!(r.to_bool(CONFIG_ON));
    }

    #[test]
    fn test_build_rejects_unknown_prefix() {
        let config = GatewayConfig::from_toml("[[resources]]\nprefix = \"/devices\"\n").unwrap();
        let result = config.build_resources(&AttributeCatalog::builtin());
        assert!(matches!(result, Err(Error::UnknownPrefix(p)) if p == "/devices"));
    }

    #[test]
    fn test_build_rejects_unregistered_suffix() {
        let config = GatewayConfig::from_toml(
            "[[resources]]\nprefix = \"/lights\"\n[resources.items]\n\"state/nope\" = 1\n",
        )
        .unwrap();
        let result = config.build_resources(&AttributeCatalog::builtin());
        assert!(matches!(
            result,
            Err(Error::UnknownAttribute { data_type: None, suffix }) if suffix == "state/nope"
        ));
    }

    #[test]
    fn test_build_rejects_out_of_range_value() {
        let config = GatewayConfig::from_toml(
            "[[resources]]\nprefix = \"/sensors\"\n[resources.items]\n\"config/sunsetoffset\" = 500\n",
        )
        .unwrap();
        let result = config.build_resources(&AttributeCatalog::builtin());
        assert!(matches!(
            result,
            Err(Error::InvalidValue { suffix, .. }) if suffix == CONFIG_SUNSET_OFFSET
        ));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();

        let config = GatewayConfig::load(file.path()).unwrap();
        assert_eq!(config.attributes[0].suffix, "state/co2");
        assert_eq!(config.resources[0].prefix, "/sensors");
    }

    #[test]
    fn test_empty_config() {
        let config = GatewayConfig::from_toml("").unwrap();
        assert!(config.descriptors().unwrap().is_empty());
        assert!(config.build_resources(&AttributeCatalog::builtin()).unwrap().is_empty());
    }
}
