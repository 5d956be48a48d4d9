//! Registry builder — turns raw device records into accessories.

use hubkit_domain::capability::{CapabilityCategory, Classification};
use hubkit_domain::descriptor::{DeviceDescriptor, DeviceRecord};
use hubkit_domain::id::AccessoryId;

use crate::accessory::Accessory;
use crate::ports::HubClient;

/// Every accessory built from one discovery cycle.
#[derive(Debug, Clone)]
pub struct Registry<C> {
    location: serde_json::Value,
    accessories: Vec<Accessory<C>>,
    skipped: usize,
}

impl<C> Registry<C> {
    /// Opaque location token resolved during discovery.
    #[must_use]
    pub fn location(&self) -> &serde_json::Value {
        &self.location
    }

    #[must_use]
    pub fn accessories(&self) -> &[Accessory<C>] {
        &self.accessories
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.accessories.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.accessories.is_empty()
    }

    /// Number of records rejected by descriptor validation.
    #[must_use]
    pub fn skipped(&self) -> usize {
        self.skipped
    }

    pub fn get(&self, id: AccessoryId) -> Option<&Accessory<C>>
    where
        C: HubClient,
    {
        self.accessories.iter().find(|accessory| accessory.id() == id)
    }

    /// Accessories of one category, ignoring light sub-features.
    pub fn by_category(&self, category: CapabilityCategory) -> impl Iterator<Item = &Accessory<C>>
    where
        C: HubClient,
    {
        self.accessories
            .iter()
            .filter(move |accessory| accessory.category().name() == category.name())
    }
}

/// Builds one [`Accessory`] per valid device record, all sharing `client`.
pub struct RegistryBuilder<C> {
    client: C,
}

impl<C: HubClient + Clone> RegistryBuilder<C> {
    pub fn new(client: C) -> Self {
        Self { client }
    }

    /// Validate, classify and bind every record.
    ///
    /// Invalid records are skipped with a warning. Devices matching more
    /// than one category rule are logged for review; the priority order
    /// still decides their category.
    #[tracing::instrument(skip_all, fields(records = records.len()))]
    pub fn build(&self, location: serde_json::Value, records: Vec<DeviceRecord>) -> Registry<C> {
        let mut accessories = Vec::with_capacity(records.len());
        let mut skipped = 0;

        for record in records {
            let name = record.name.clone();
            let descriptor = match DeviceDescriptor::try_from(record) {
                Ok(descriptor) => descriptor,
                Err(err) => {
                    tracing::warn!(device = %name, error = %err, "skipping invalid device record");
                    skipped += 1;
                    continue;
                }
            };

            let classification = Classification::of(&descriptor);
            if classification.is_ambiguous() {
                let shadowed: Vec<&str> = classification
                    .shadowed
                    .iter()
                    .copied()
                    .map(CapabilityCategory::name)
                    .collect();
                tracing::warn!(
                    device = %name,
                    category = %classification.category,
                    ?shadowed,
                    "device matches several categories, review its classification"
                );
            }
            tracing::debug!(device = %name, category = %classification.category, "classified device");

            accessories.push(Accessory::with_category(
                AccessoryId::new(),
                descriptor,
                classification.category,
                self.client.clone(),
            ));
        }

        tracing::info!(
            accessories = accessories.len(),
            skipped,
            "registry built"
        );

        Registry {
            location,
            accessories,
            skipped,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::accessory::AccessoryKind;
    use crate::testing::FakeHub;
    use std::collections::BTreeMap;
    use std::sync::Arc;

    fn record(name: &str, commands: &[&str], attributes: &[&str]) -> DeviceRecord {
        let url = |key: &str| format!("https://hub.test/{name}/{key}");
        DeviceRecord {
            name: name.to_string(),
            commands: commands.iter().map(|c| ((*c).to_string(), url(*c))).collect(),
            attributes: attributes
                .iter()
                .map(|a| ((*a).to_string(), url(*a)))
                .collect(),
        }
    }

    fn builder() -> RegistryBuilder<Arc<FakeHub>> {
        RegistryBuilder::new(FakeHub::new())
    }

    #[test]
    fn should_build_one_accessory_per_record() {
        let registry = builder().build(
            serde_json::json!({"name": "Home"}),
            vec![
                record("Hall", &["on", "off"], &["switch"]),
                record("Lamp", &["on", "off", "setLevel", "setHue"], &["switch", "level"]),
                record("Garage", &["open", "close"], &["status"]),
                record("Den", &["setHeatingSetpoint"], &["thermostatMode"]),
                record("Porch", &[], &["illuminance"]),
                record("Bridge", &[], &[]),
            ],
        );

        assert_eq!(registry.len(), 6);
        assert_eq!(registry.skipped(), 0);
        assert_eq!(registry.location()["name"], "Home");
        let categories: Vec<&str> = registry
            .accessories()
            .iter()
            .map(|a| a.category().name())
            .collect();
        assert_eq!(
            categories,
            vec![
                "switch",
                "dimmable_light",
                "garage_door",
                "thermostat",
                "light_sensor",
                "unclassified",
            ]
        );
    }

    #[test]
    fn should_skip_invalid_records() {
        let mut relative = record("Broken", &["on"], &[]);
        relative
            .commands
            .insert("off".to_string(), "/relative/off".to_string());
        let registry = builder().build(
            serde_json::Value::Null,
            vec![
                relative,
                DeviceRecord {
                    name: String::new(),
                    commands: BTreeMap::new(),
                    attributes: BTreeMap::new(),
                },
                record("Hall", &["on"], &[]),
            ],
        );

        assert_eq!(registry.len(), 1);
        assert_eq!(registry.skipped(), 2);
        assert_eq!(registry.accessories()[0].name(), "Hall");
    }

    #[test]
    fn should_assign_distinct_ids_to_same_named_devices() {
        let registry = builder().build(
            serde_json::Value::Null,
            vec![record("Lamp", &["on"], &[]), record("Lamp", &["on"], &[])],
        );

        let ids: Vec<AccessoryId> = registry.accessories().iter().map(Accessory::id).collect();
        assert_ne!(ids[0], ids[1]);
        assert_eq!(registry.get(ids[1]).unwrap().name(), "Lamp");
    }

    #[test]
    fn should_classify_ambiguous_device_by_priority() {
        let registry = builder().build(
            serde_json::Value::Null,
            vec![record("Odd", &["on", "setLevel", "open"], &["illuminance"])],
        );

        let accessory = &registry.accessories()[0];
        assert!(matches!(accessory.kind(), AccessoryKind::Light(_)));
    }

    #[test]
    fn should_filter_by_category() {
        let registry = builder().build(
            serde_json::Value::Null,
            vec![
                record("A", &["on", "setLevel"], &[]),
                record("B", &["on", "setLevel", "setSaturation"], &[]),
                record("C", &["on"], &[]),
            ],
        );

        let lights = registry
            .by_category(CapabilityCategory::DimmableLight {
                has_hue: false,
                has_saturation: false,
            })
            .count();
        assert_eq!(lights, 2);
        assert_eq!(registry.by_category(CapabilityCategory::Switch).count(), 1);
    }
}
