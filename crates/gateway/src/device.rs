//! Device aggregation
//!
//! A physical device shows up as several resources (e.g. one light and two
//! sensors) sharing a unique id prefix. [`DeviceSummary`] merges them into one
//! view with the device's identity and one entry per sub resource.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value as JsonValue};

use crate::resource::Resource;
use crate::suffix::{ATTR_MANUFACTURER_NAME, ATTR_MODEL_ID, ATTR_SW_VERSION, ATTR_UNIQUE_ID};

/// Merged view of all resources belonging to one device
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeviceSummary {
    /// Unique id (or id prefix) the summary was collected for
    pub uniqueid: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manufacturername: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modelid: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub swversion: Option<String>,
    /// One serialized entry per matching resource
    #[serde(default)]
    pub sub: Vec<Map<String, JsonValue>>,
}

impl DeviceSummary {
    /// Collect every resource whose `attr/uniqueid` starts with `uniqueid`
    ///
    /// Identity fields are taken from the first matching resource that has a
    /// non-empty value for them.
    pub fn collect<'a>(uniqueid: &str, resources: impl IntoIterator<Item = &'a Resource>) -> Self {
        let mut summary = Self {
            uniqueid: uniqueid.to_string(),
            manufacturername: None,
            modelid: None,
            swversion: None,
            sub: Vec::new(),
        };

        for resource in resources {
            if !resource.to_str(ATTR_UNIQUE_ID).starts_with(uniqueid) {
                continue;
            }

            fill(&mut summary.manufacturername, resource, ATTR_MANUFACTURER_NAME);
            fill(&mut summary.modelid, resource, ATTR_MODEL_ID);
            fill(&mut summary.swversion, resource, ATTR_SW_VERSION);
            summary.sub.push(resource.to_json());
        }

        summary
    }
}

fn fill(slot: &mut Option<String>, resource: &Resource, suffix: &str) {
    if slot.is_some() {
        return;
    }
    let value = resource.to_str(suffix);
    if !value.is_empty() {
        *slot = Some(value.into_owned());
    }
}
