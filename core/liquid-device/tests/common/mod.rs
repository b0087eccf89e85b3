//! Shared test helpers for device profile tests.

#![allow(dead_code)]

use liquid_device::{Connectivity, DeviceProfile, OsFactsProvider, ProfileConfig, ScreenSize};
use liquid_storage::{IdentifierStore, MemoryStore};
use std::sync::{Arc, Mutex};

/// Scriptable OS-facts provider. Connectivity can be changed after the
/// profile is built.
#[derive(Default)]
pub struct FakeFacts {
    pub vendor: Option<String>,
    pub model: Option<String>,
    pub system_version: Option<i64>,
    pub screen_size: Option<ScreenSize>,
    pub carrier: Option<String>,
    pub app_bundle: Option<String>,
    pub app_name: Option<String>,
    pub app_version: Option<String>,
    pub release_version: Option<i64>,
    pub locale: Option<String>,
    pub system_language: Option<String>,
    pub connectivity: Mutex<Option<Connectivity>>,
}

impl FakeFacts {
    /// The device from the end-to-end example.
    pub fn acme() -> Self {
        Self {
            vendor: Some("Acme".into()),
            model: Some("X1".into()),
            system_version: Some(34),
            screen_size: Some(ScreenSize::new(1080, 2400)),
            carrier: Some("AcmeTel".into()),
            app_bundle: Some("com.acme.app".into()),
            app_name: Some("Acme".into()),
            app_version: Some("2.3".into()),
            release_version: Some(7),
            locale: Some("pt_PT".into()),
            system_language: Some("pt".into()),
            connectivity: Mutex::new(Some(Connectivity::WiFi)),
        }
    }

    pub fn set_connectivity(&self, connectivity: Connectivity) {
        *self.connectivity.lock().unwrap() = Some(connectivity);
    }
}

impl OsFactsProvider for FakeFacts {
    fn vendor(&self) -> Option<String> {
        self.vendor.clone()
    }
    fn model(&self) -> Option<String> {
        self.model.clone()
    }
    fn system_version(&self) -> Option<i64> {
        self.system_version
    }
    fn screen_size(&self) -> Option<ScreenSize> {
        self.screen_size
    }
    fn carrier(&self) -> Option<String> {
        self.carrier.clone()
    }
    fn connectivity(&self) -> Connectivity {
        self.connectivity
            .lock()
            .unwrap()
            .unwrap_or(Connectivity::NoConnectivity)
    }
    fn app_bundle(&self) -> Option<String> {
        self.app_bundle.clone()
    }
    fn app_name(&self) -> Option<String> {
        self.app_name.clone()
    }
    fn app_version(&self) -> Option<String> {
        self.app_version.clone()
    }
    fn release_version(&self) -> Option<i64> {
        self.release_version
    }
    fn locale(&self) -> Option<String> {
        self.locale.clone()
    }
    fn system_language(&self) -> Option<String> {
        self.system_language.clone()
    }
}

/// Builds a profile over fresh in-memory storage.
pub fn acme_profile() -> (Arc<FakeFacts>, DeviceProfile) {
    let facts = Arc::new(FakeFacts::acme());
    let ids = IdentifierStore::new(MemoryStore::new());
    let profile = DeviceProfile::new(facts.clone(), &ids, &ProfileConfig::default());
    (facts, profile)
}
