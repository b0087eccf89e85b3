//! Caller-controlled attributes layered beneath the static facts.

use crate::error::DeviceResult;
use liquid_types::{is_reserved, keys, AttributeValue, Error, Location};
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Mutable attribute map owned by a [`DeviceProfile`](crate::DeviceProfile).
///
/// A single mutex guards every read and write, so `latitude` and
/// `longitude` are always observed together. Reserved keys are refused at
/// set time; the snapshot merge overwrites them regardless.
#[derive(Debug, Default)]
pub struct AttributeOverlay {
    attributes: Mutex<HashMap<String, AttributeValue>>,
}

impl AttributeOverlay {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<String, AttributeValue>> {
        self.attributes.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Stores both coordinates, or removes both when `location` is `None`.
    pub fn set_location(&self, location: Option<Location>) {
        let mut attributes = self.lock();
        match location {
            Some(loc) => {
                attributes.insert(keys::LATITUDE.into(), loc.latitude.into());
                attributes.insert(keys::LONGITUDE.into(), loc.longitude.into());
            }
            None => {
                attributes.remove(keys::LATITUDE);
                attributes.remove(keys::LONGITUDE);
            }
        }
    }

    /// Stores the push token. `None` and the empty string both remove it.
    pub fn set_push_token(&self, token: Option<&str>) {
        let mut attributes = self.lock();
        match token.filter(|t| !t.is_empty()) {
            Some(token) => {
                attributes.insert(keys::PUSH_TOKEN.into(), token.into());
            }
            None => {
                attributes.remove(keys::PUSH_TOKEN);
            }
        }
    }

    /// Sets a custom attribute.
    ///
    /// Fails with [`Error::ReservedKey`] for profile-owned keys and with
    /// [`Error::ManagedKey`] for keys that have a dedicated setter.
    pub fn set_attribute(
        &self,
        key: impl Into<String>,
        value: impl Into<AttributeValue>,
    ) -> DeviceResult<()> {
        let key = key.into();
        if is_reserved(&key) {
            return Err(Error::ReservedKey(key).into());
        }
        if is_managed(&key) {
            return Err(Error::ManagedKey(key).into());
        }
        self.lock().insert(key, value.into());
        Ok(())
    }

    /// Removes a custom attribute, returning its previous value.
    ///
    /// Keys with a dedicated setter are left untouched.
    pub fn remove_attribute(&self, key: &str) -> Option<AttributeValue> {
        if is_managed(key) {
            return None;
        }
        self.lock().remove(key)
    }

    /// Returns a copy of the current contents for merging.
    pub fn get(&self) -> HashMap<String, AttributeValue> {
        self.lock().clone()
    }

    /// Returns the stored location, if both coordinates are set.
    pub fn location(&self) -> Option<Location> {
        let attributes = self.lock();
        let latitude = attributes.get(keys::LATITUDE)?.as_f64()?;
        let longitude = attributes.get(keys::LONGITUDE)?.as_f64()?;
        Some(Location::new(latitude, longitude))
    }

    pub fn push_token(&self) -> Option<String> {
        self.lock()
            .get(keys::PUSH_TOKEN)
            .and_then(AttributeValue::as_str)
            .map(str::to_string)
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }
}

fn is_managed(key: &str) -> bool {
    matches!(key, keys::LATITUDE | keys::LONGITUDE | keys::PUSH_TOKEN)
}
