//! Attribute names owned by the device profile.
//!
//! These keys are always sourced from static or volatile facts and can never
//! be assigned through the overlay.

/// Canonical key names used in the serialized snapshot.
pub mod keys {
    pub const VENDOR: &str = "vendor";
    pub const PLATFORM: &str = "platform";
    pub const MODEL: &str = "model";
    pub const SYSTEM_VERSION: &str = "system_version";
    pub const SCREEN_SIZE: &str = "screen_size";
    pub const CARRIER: &str = "carrier";
    pub const INTERNET_CONNECTIVITY: &str = "internet_connectivity";
    pub const UNIQUE_ID: &str = "unique_id";
    pub const APP_BUNDLE: &str = "app_bundle";
    pub const APP_NAME: &str = "app_name";
    pub const APP_VERSION: &str = "app_version";
    pub const RELEASE_VERSION: &str = "release_version";
    pub const LIQUID_VERSION: &str = "liquid_version";
    pub const LOCALE: &str = "locale";
    pub const SYSTEM_LANGUAGE: &str = "system_language";

    // Overlay keys. Not reserved.
    pub const LATITUDE: &str = "latitude";
    pub const LONGITUDE: &str = "longitude";
    pub const PUSH_TOKEN: &str = "push_token";
}

/// Every key the device profile writes on each snapshot.
pub const RESERVED_KEYS: [&str; 15] = [
    keys::VENDOR,
    keys::PLATFORM,
    keys::MODEL,
    keys::SYSTEM_VERSION,
    keys::SCREEN_SIZE,
    keys::CARRIER,
    keys::INTERNET_CONNECTIVITY,
    keys::UNIQUE_ID,
    keys::APP_BUNDLE,
    keys::APP_NAME,
    keys::APP_VERSION,
    keys::RELEASE_VERSION,
    keys::LIQUID_VERSION,
    keys::LOCALE,
    keys::SYSTEM_LANGUAGE,
];

/// Value of the `platform` key, fixed per target OS family at compile time.
pub const PLATFORM: &str = if cfg!(target_os = "android") {
    "Android"
} else if cfg!(target_os = "ios") {
    "iOS"
} else if cfg!(target_os = "macos") {
    "macOS"
} else if cfg!(target_os = "windows") {
    "Windows"
} else if cfg!(target_os = "linux") {
    "Linux"
} else {
    "Unknown"
};

/// Returns true if `key` is owned by the device profile.
#[must_use]
pub fn is_reserved(key: &str) -> bool {
    RESERVED_KEYS.contains(&key)
}
