//! Canonical serialized form of a device profile.

use crate::facts::StaticFacts;
use crate::provider::Connectivity;
use liquid_types::{keys, AttributeValue, PLATFORM};
use serde::Serialize;
use serde_json::Value;
use std::collections::{BTreeMap, HashMap};

/// Overwrites every reserved key in `attributes` with the profile's facts.
///
/// This is the second phase of the snapshot merge; the first is copying the
/// overlay into `attributes`. Whatever the map held under a reserved name is
/// replaced.
pub fn merge_reserved(
    attributes: &mut HashMap<String, AttributeValue>,
    facts: &StaticFacts,
    connectivity: Connectivity,
) {
    let reserved: [(&str, AttributeValue); 15] = [
        (keys::VENDOR, facts.vendor.as_str().into()),
        (keys::PLATFORM, PLATFORM.into()),
        (keys::MODEL, facts.model.as_str().into()),
        (keys::SYSTEM_VERSION, facts.system_version.into()),
        (keys::SCREEN_SIZE, facts.screen_size.as_str().into()),
        (keys::CARRIER, facts.carrier.as_str().into()),
        (keys::INTERNET_CONNECTIVITY, connectivity.as_str().into()),
        (keys::UNIQUE_ID, facts.unique_id.as_str().into()),
        (keys::APP_BUNDLE, facts.app_bundle.as_str().into()),
        (keys::APP_NAME, facts.app_name.as_str().into()),
        (keys::APP_VERSION, facts.app_version.as_str().into()),
        (keys::RELEASE_VERSION, facts.release_version.into()),
        (keys::LIQUID_VERSION, facts.sdk_version.as_str().into()),
        (keys::LOCALE, facts.locale.as_str().into()),
        (keys::SYSTEM_LANGUAGE, facts.system_language.as_str().into()),
    ];
    for (key, value) in reserved {
        attributes.insert(key.to_string(), value);
    }
}

/// A flat, key-sorted attribute object.
///
/// Keys are ordered, so the serialized form of equal snapshots is
/// byte-identical.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Snapshot {
    attributes: BTreeMap<String, Value>,
}

impl Snapshot {
    /// Serializes every attribute, failing on the first unsupported value.
    pub fn from_attributes(
        attributes: HashMap<String, AttributeValue>,
    ) -> liquid_types::Result<Self> {
        let attributes = attributes
            .into_iter()
            .map(|(key, value)| {
                let json = value.to_json(&key)?;
                Ok((key, json))
            })
            .collect::<liquid_types::Result<BTreeMap<_, _>>>()?;
        Ok(Self { attributes })
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.attributes.get(key)
    }

    /// Convenience accessor for string-valued keys.
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(Value::as_str)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.attributes.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.attributes.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }

    /// Compact JSON text, as sent over the wire.
    pub fn to_json_string(&self) -> String {
        Value::Object(self.attributes.clone().into_iter().collect()).to_string()
    }

    /// Converts into a `serde_json::Value::Object`.
    pub fn into_value(self) -> Value {
        Value::Object(self.attributes.into_iter().collect())
    }
}
