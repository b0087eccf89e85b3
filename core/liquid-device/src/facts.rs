//! Static facts gathered once when the profile is built.

use crate::provider::OsFactsProvider;
use liquid_types::DeviceId;
use serde::Serialize;
use tracing::debug;

/// Values used when the provider cannot supply a fact.
pub mod fallback {
    pub const VENDOR: &str = "unknown";
    pub const MODEL: &str = "unknown";
    pub const SYSTEM_VERSION: i64 = 0;
    pub const SCREEN_SIZE: &str = "0x0";
    pub const CARRIER: &str = "";
    pub const APP_BUNDLE: &str = "";
    pub const APP_NAME: &str = "(unknown)";
    pub const APP_VERSION: &str = "";
    pub const RELEASE_VERSION: i64 = 0;
    pub const LOCALE: &str = "en_US";
    pub const SYSTEM_LANGUAGE: &str = "en";
}

/// Facts that never change for the lifetime of a profile.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StaticFacts {
    pub vendor: String,
    pub model: String,
    pub system_version: i64,
    pub screen_size: String,
    pub carrier: String,
    pub app_bundle: String,
    pub app_name: String,
    pub app_version: String,
    pub release_version: i64,
    pub sdk_version: String,
    pub locale: String,
    pub system_language: String,
    pub unique_id: DeviceId,
}

impl StaticFacts {
    /// Queries every static fact from `provider`, substituting fallbacks.
    pub fn collect(provider: &dyn OsFactsProvider, unique_id: DeviceId, sdk_version: &str) -> Self {
        Self {
            vendor: or_fallback("vendor", provider.vendor(), fallback::VENDOR.into()),
            model: or_fallback("model", provider.model(), fallback::MODEL.into()),
            system_version: or_fallback(
                "system_version",
                provider.system_version(),
                fallback::SYSTEM_VERSION,
            ),
            screen_size: or_fallback(
                "screen_size",
                provider.screen_size().map(|s| s.to_string()),
                fallback::SCREEN_SIZE.into(),
            ),
            carrier: or_fallback("carrier", provider.carrier(), fallback::CARRIER.into()),
            app_bundle: or_fallback("app_bundle", provider.app_bundle(), fallback::APP_BUNDLE.into()),
            app_name: or_fallback("app_name", provider.app_name(), fallback::APP_NAME.into()),
            app_version: or_fallback(
                "app_version",
                provider.app_version(),
                fallback::APP_VERSION.into(),
            ),
            release_version: or_fallback(
                "release_version",
                provider.release_version(),
                fallback::RELEASE_VERSION,
            ),
            sdk_version: sdk_version.to_string(),
            locale: or_fallback("locale", provider.locale(), fallback::LOCALE.into()),
            system_language: or_fallback(
                "system_language",
                provider.system_language(),
                fallback::SYSTEM_LANGUAGE.into(),
            ),
            unique_id,
        }
    }
}

fn or_fallback<T: std::fmt::Debug>(fact: &str, value: Option<T>, fallback: T) -> T {
    value.unwrap_or_else(|| {
        debug!(fact, ?fallback, "OS fact unavailable, using fallback");
        fallback
    })
}
