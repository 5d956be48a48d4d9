//! Accessory façades — one per capability category.
//!
//! An [`Accessory`] owns a device descriptor and the category derived from
//! it once, at construction. Its [`AccessoryKind`] holds the category's
//! façade, which exposes only the characteristics that category supports.

mod endpoints;
mod garage_door;
mod light;
mod light_sensor;
mod switch;
mod thermostat;

use chrono::{DateTime, Utc};
use serde::Serialize;

use hubkit_domain::capability::CapabilityCategory;
use hubkit_domain::characteristic::{
    CurrentHeatingCoolingState, TargetHeatingCoolingState, TemperatureUnit,
};
use hubkit_domain::descriptor::DeviceDescriptor;
use hubkit_domain::error::BridgeError;
use hubkit_domain::id::AccessoryId;
use hubkit_domain::info::AccessoryInfo;

use crate::ports::HubClient;
use endpoints::DeviceEndpoints;

pub use garage_door::{DoorState, GarageDoorAccessory};
pub use light::{LevelControl, LightAccessory};
pub use light_sensor::LightSensorAccessory;
pub use switch::SwitchAccessory;
pub use thermostat::ThermostatAccessory;

/// Category-specific façade.
#[derive(Debug, Clone)]
pub enum AccessoryKind<C> {
    Switch(SwitchAccessory<C>),
    Light(LightAccessory<C>),
    GarageDoor(GarageDoorAccessory<C>),
    Thermostat(ThermostatAccessory<C>),
    LightSensor(LightSensorAccessory<C>),
    /// Enumerable but inert: only the descriptor, no hub access.
    Unclassified(DeviceDescriptor),
}

/// A classified device bound to a hub client.
#[derive(Debug, Clone)]
pub struct Accessory<C> {
    id: AccessoryId,
    category: CapabilityCategory,
    kind: AccessoryKind<C>,
}

impl<C: HubClient> Accessory<C> {
    /// Classify `descriptor` and build the matching façade.
    pub fn new(id: AccessoryId, descriptor: DeviceDescriptor, client: C) -> Self {
        let category = CapabilityCategory::classify(&descriptor);
        Self::with_category(id, descriptor, category, client)
    }

    /// Build the façade for an already classified descriptor.
    pub fn with_category(
        id: AccessoryId,
        descriptor: DeviceDescriptor,
        category: CapabilityCategory,
        client: C,
    ) -> Self {
        let endpoints = DeviceEndpoints::new(descriptor, client);
        let kind = match category {
            CapabilityCategory::Switch => AccessoryKind::Switch(SwitchAccessory::new(endpoints)),
            CapabilityCategory::DimmableLight {
                has_hue,
                has_saturation,
            } => AccessoryKind::Light(LightAccessory::new(endpoints, has_hue, has_saturation)),
            CapabilityCategory::GarageDoor => {
                AccessoryKind::GarageDoor(GarageDoorAccessory::new(endpoints))
            }
            CapabilityCategory::Thermostat => {
                AccessoryKind::Thermostat(ThermostatAccessory::new(endpoints))
            }
            CapabilityCategory::LightSensor => {
                AccessoryKind::LightSensor(LightSensorAccessory::new(endpoints))
            }
            CapabilityCategory::Unclassified => {
                AccessoryKind::Unclassified(endpoints.into_descriptor())
            }
        };
        Self { id, category, kind }
    }

    #[must_use]
    pub fn id(&self) -> AccessoryId {
        self.id
    }

    #[must_use]
    pub fn category(&self) -> CapabilityCategory {
        self.category
    }

    #[must_use]
    pub fn kind(&self) -> &AccessoryKind<C> {
        &self.kind
    }

    #[must_use]
    pub fn descriptor(&self) -> &DeviceDescriptor {
        match &self.kind {
            AccessoryKind::Switch(switch) => switch.endpoints().descriptor(),
            AccessoryKind::Light(light) => light.endpoints().descriptor(),
            AccessoryKind::GarageDoor(door) => door.endpoints().descriptor(),
            AccessoryKind::Thermostat(thermostat) => thermostat.endpoints().descriptor(),
            AccessoryKind::LightSensor(sensor) => sensor.endpoints().descriptor(),
            AccessoryKind::Unclassified(descriptor) => descriptor,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        self.descriptor().name()
    }

    #[must_use]
    pub fn info(&self) -> AccessoryInfo {
        AccessoryInfo::new(self.name())
    }

    /// Read every readable characteristic of this accessory.
    ///
    /// A thermostat in auto mode reports no target temperature instead of
    /// failing the whole snapshot.
    ///
    /// # Errors
    ///
    /// Returns the first read failure.
    #[tracing::instrument(skip(self), fields(device = %self.name(), category = %self.category))]
    pub async fn snapshot(&self) -> Result<AccessorySnapshot, BridgeError> {
        let values = match &self.kind {
            AccessoryKind::Switch(switch) => CharacteristicValues::Switch {
                on: switch.on().await?,
            },
            AccessoryKind::Light(light) => {
                let hue = match light.hue() {
                    Some(control) => Some(control.get().await?),
                    None => None,
                };
                let saturation = match light.saturation() {
                    Some(control) => Some(control.get().await?),
                    None => None,
                };
                CharacteristicValues::Light {
                    on: light.on().await?,
                    brightness: light.brightness().get().await?,
                    hue,
                    saturation,
                }
            }
            AccessoryKind::GarageDoor(door) => {
                CharacteristicValues::GarageDoor(door.door_state().await?)
            }
            AccessoryKind::Thermostat(thermostat) => {
                let target_temperature = match thermostat.target_temperature().await {
                    Ok(value) => value,
                    Err(err) if err.is_unimplemented() => None,
                    Err(err) => return Err(err),
                };
                CharacteristicValues::Thermostat {
                    current_temperature: thermostat.current_temperature().await?,
                    target_temperature,
                    current_heating_cooling_state: thermostat
                        .current_heating_cooling_state()
                        .await?,
                    target_heating_cooling_state: thermostat.target_heating_cooling_state().await?,
                    temperature_display_units: thermostat.temperature_display_units().await?,
                }
            }
            AccessoryKind::LightSensor(sensor) => CharacteristicValues::LightSensor {
                ambient_light_level: sensor.current_ambient_light_level().await?,
            },
            AccessoryKind::Unclassified(_) => CharacteristicValues::Inert,
        };

        Ok(AccessorySnapshot {
            id: self.id,
            info: self.info(),
            category: self.category,
            taken_at: Utc::now(),
            values,
        })
    }
}

/// Point-in-time view of an accessory's characteristics.
#[derive(Debug, Clone, Serialize)]
pub struct AccessorySnapshot {
    pub id: AccessoryId,
    pub info: AccessoryInfo,
    pub category: CapabilityCategory,
    pub taken_at: DateTime<Utc>,
    pub values: CharacteristicValues,
}

/// Characteristic values by category. Temperatures are Celsius.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum CharacteristicValues {
    Switch {
        on: bool,
    },
    Light {
        on: bool,
        brightness: f64,
        hue: Option<f64>,
        saturation: Option<f64>,
    },
    GarageDoor(DoorState),
    Thermostat {
        current_temperature: f64,
        target_temperature: Option<f64>,
        current_heating_cooling_state: CurrentHeatingCoolingState,
        target_heating_cooling_state: TargetHeatingCoolingState,
        temperature_display_units: TemperatureUnit,
    },
    LightSensor {
        ambient_light_level: f64,
    },
    Inert,
}
