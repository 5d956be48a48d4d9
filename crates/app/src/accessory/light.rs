//! Dimmable light — `on` plus `setLevel`, optionally hue and saturation.

use hubkit_domain::characteristic::power_command;
use hubkit_domain::descriptor::{Attribute, Command};
use hubkit_domain::error::BridgeError;
use hubkit_domain::hub_value::HubValue;

use super::endpoints::DeviceEndpoints;
use super::switch::read_on;
use crate::ports::HubClient;

/// Dimmable (and possibly colour) light.
#[derive(Debug, Clone)]
pub struct LightAccessory<C> {
    endpoints: DeviceEndpoints<C>,
    has_hue: bool,
    has_saturation: bool,
}

/// A numeric characteristic backed by one attribute and one command.
#[derive(Debug)]
pub struct LevelControl<'a, C> {
    endpoints: &'a DeviceEndpoints<C>,
    attribute: Attribute,
    command: Command,
}

impl<C: HubClient> LevelControl<'_, C> {
    /// Read the current level.
    ///
    /// # Errors
    ///
    /// Propagates the read failure, or a malformed response for a
    /// non-numeric value.
    pub async fn get(&self) -> Result<f64, BridgeError> {
        self.endpoints.numeric_value(self.attribute).await
    }

    /// Write a new level.
    ///
    /// # Errors
    ///
    /// Propagates the command failure.
    pub async fn set(&self, value: f64) -> Result<(), BridgeError> {
        self.endpoints
            .command(self.command, Some(HubValue::Number(value)))
            .await
    }
}

impl<C: HubClient> LightAccessory<C> {
    pub(crate) fn new(endpoints: DeviceEndpoints<C>, has_hue: bool, has_saturation: bool) -> Self {
        Self {
            endpoints,
            has_hue,
            has_saturation,
        }
    }

    pub(crate) fn endpoints(&self) -> &DeviceEndpoints<C> {
        &self.endpoints
    }

    /// Read the `switch` attribute.
    ///
    /// # Errors
    ///
    /// Propagates the read failure.
    #[tracing::instrument(skip(self), fields(device = %self.endpoints.descriptor().name()))]
    pub async fn on(&self) -> Result<bool, BridgeError> {
        read_on(&self.endpoints).await
    }

    /// Issue `on` or `off`.
    ///
    /// # Errors
    ///
    /// Propagates the command failure.
    #[tracing::instrument(skip(self), fields(device = %self.endpoints.descriptor().name()))]
    pub async fn set_on(&self, on: bool) -> Result<(), BridgeError> {
        self.endpoints.command(power_command(on), None).await
    }

    /// Brightness: `level` / `setLevel`.
    #[must_use]
    pub fn brightness(&self) -> LevelControl<'_, C> {
        self.level(Attribute::Level, Command::SetLevel)
    }

    /// Hue: `hue` / `setHue`, present only on colour lights.
    #[must_use]
    pub fn hue(&self) -> Option<LevelControl<'_, C>> {
        self.has_hue
            .then(|| self.level(Attribute::Hue, Command::SetHue))
    }

    /// Saturation: `saturation` / `setSaturation`, present only on colour lights.
    #[must_use]
    pub fn saturation(&self) -> Option<LevelControl<'_, C>> {
        self.has_saturation
            .then(|| self.level(Attribute::Saturation, Command::SetSaturation))
    }

    fn level(&self, attribute: Attribute, command: Command) -> LevelControl<'_, C> {
        LevelControl {
            endpoints: &self.endpoints,
            attribute,
            command,
        }
    }
}
