//! Discovery service — one discovery cycle: location, devices, registry.

use hubkit_domain::error::BridgeError;

use crate::ports::{HubClient, HubDiscovery};
use crate::services::registry::{Registry, RegistryBuilder};

/// Runs hub discovery and builds a fresh [`Registry`] from the result.
pub struct DiscoveryService<D, C> {
    discovery: D,
    builder: RegistryBuilder<C>,
}

impl<D, C> DiscoveryService<D, C>
where
    D: HubDiscovery,
    C: HubClient + Clone,
{
    /// Create a new service backed by the given discovery port and client.
    pub fn new(discovery: D, client: C) -> Self {
        Self {
            discovery,
            builder: RegistryBuilder::new(client),
        }
    }

    /// Resolve the location, then list devices, then build the registry.
    ///
    /// Devices are only requested once the location resolved.
    ///
    /// # Errors
    ///
    /// Propagates the first discovery failure.
    #[tracing::instrument(skip(self))]
    pub async fn discover(&self) -> Result<Registry<C>, BridgeError> {
        tracing::info!("fetching hub devices");
        let location = self.discovery.location().await?;
        let records = self.discovery.devices().await?;
        tracing::debug!(records = records.len(), "device records listed");
        Ok(self.builder.build(location, records))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::FakeHub;
    use hubkit_domain::descriptor::DeviceRecord;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Default)]
    struct StubDiscovery {
        fail_location: bool,
        device_calls: AtomicUsize,
    }

    impl HubDiscovery for StubDiscovery {
        async fn location(&self) -> Result<serde_json::Value, BridgeError> {
            if self.fail_location {
                return Err(BridgeError::transport("401 Unauthorized"));
            }
            Ok(serde_json::json!({"name": "Home", "temperatureScale": "F"}))
        }

        async fn devices(&self) -> Result<Vec<DeviceRecord>, BridgeError> {
            self.device_calls.fetch_add(1, Ordering::SeqCst);
            let mut record = DeviceRecord {
                name: "Hall".to_string(),
                ..DeviceRecord::default()
            };
            record
                .commands
                .insert("on".to_string(), "https://hub.test/hall/on".to_string());
            Ok(vec![record])
        }
    }

    #[tokio::test]
    async fn should_build_registry_from_discovered_records() {
        let service = DiscoveryService::new(StubDiscovery::default(), FakeHub::new());

        let registry = service.discover().await.unwrap();

        assert_eq!(registry.len(), 1);
        assert_eq!(registry.location()["temperatureScale"], "F");
        assert_eq!(registry.accessories()[0].category().name(), "switch");
    }

    #[tokio::test]
    async fn should_not_list_devices_when_location_fails() {
        let discovery = StubDiscovery {
            fail_location: true,
            ..StubDiscovery::default()
        };
        let service = DiscoveryService::new(discovery, FakeHub::new());

        let err = service.discover().await.unwrap_err();

        assert!(matches!(err, BridgeError::Transport(_)));
        assert_eq!(service.discovery.device_calls.load(Ordering::SeqCst), 0);
    }
}
