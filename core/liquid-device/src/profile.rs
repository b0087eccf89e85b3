//! The device profile: static facts, overlay, and snapshot production.

use crate::config::ProfileConfig;
use crate::error::DeviceResult;
use crate::facts::StaticFacts;
use crate::overlay::AttributeOverlay;
use crate::provider::OsFactsProvider;
use crate::snapshot::{merge_reserved, Snapshot};
use liquid_storage::{IdentifierStore, KeyValueStore};
use liquid_types::{AttributeValue, DeviceId, Location};
use std::sync::Arc;
use tracing::{debug, error};

/// Describes the running device and application for telemetry events.
///
/// Built once per process. Static facts are fixed at construction; only the
/// overlay changes afterwards, and connectivity is re-queried per snapshot.
pub struct DeviceProfile {
    provider: Arc<dyn OsFactsProvider>,
    facts: StaticFacts,
    overlay: AttributeOverlay,
}

impl DeviceProfile {
    /// Collects static facts from `provider` and resolves the device
    /// identifier under `config.identifier_namespace`.
    pub fn new<S: KeyValueStore>(
        provider: Arc<dyn OsFactsProvider>,
        identifiers: &IdentifierStore<S>,
        config: &ProfileConfig,
    ) -> Self {
        let unique_id = identifiers.get_or_create(&config.identifier_namespace);
        let facts = StaticFacts::collect(provider.as_ref(), unique_id, &config.sdk_version);
        debug!(unique_id = %facts.unique_id, "Device profile created");
        Self {
            provider,
            facts,
            overlay: AttributeOverlay::new(),
        }
    }

    /// Like [`new`](Self::new), with the overlay seeded from `location`
    /// before the profile is visible to any other thread.
    pub fn with_location<S: KeyValueStore>(
        provider: Arc<dyn OsFactsProvider>,
        identifiers: &IdentifierStore<S>,
        config: &ProfileConfig,
        location: Option<Location>,
    ) -> Self {
        let profile = Self::new(provider, identifiers, config);
        profile.overlay.set_location(location);
        profile
    }

    pub fn unique_id(&self) -> &DeviceId {
        &self.facts.unique_id
    }

    pub fn static_facts(&self) -> &StaticFacts {
        &self.facts
    }

    pub fn overlay(&self) -> &AttributeOverlay {
        &self.overlay
    }

    pub fn set_location(&self, location: Option<Location>) {
        self.overlay.set_location(location);
    }

    pub fn set_push_token(&self, token: Option<&str>) {
        self.overlay.set_push_token(token);
    }

    pub fn set_attribute(
        &self,
        key: impl Into<String>,
        value: impl Into<AttributeValue>,
    ) -> DeviceResult<()> {
        self.overlay.set_attribute(key, value)
    }

    /// Builds the canonical snapshot.
    ///
    /// Connectivity is queried now, the overlay is copied, and every
    /// reserved key is then overwritten from the profile's facts. An overlay
    /// value that cannot be serialized fails the whole snapshot.
    pub fn snapshot(&self) -> DeviceResult<Snapshot> {
        let connectivity = self.provider.connectivity();

        let mut attributes = self.overlay.get();
        merge_reserved(&mut attributes, &self.facts, connectivity);

        match Snapshot::from_attributes(attributes) {
            Ok(snapshot) => {
                debug!(%connectivity, attributes = snapshot.len(), "Built device snapshot");
                Ok(snapshot)
            }
            Err(e) => {
                error!(error = %e, "Failed to serialize device snapshot");
                Err(e.into())
            }
        }
    }
}

impl std::fmt::Debug for DeviceProfile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DeviceProfile")
            .field("facts", &self.facts)
            .field("overlay", &self.overlay)
            .finish_non_exhaustive()
    }
}
