//! Thermostat — heating and/or cooling setpoints plus mode control.
//!
//! Target temperature is a two-phase operation: the thermostat mode is
//! resolved first, and only then is the matching setpoint read or written.
//! A failure in the first phase ends the operation.

use hubkit_domain::characteristic::{
    CurrentHeatingCoolingState, Setpoint, TargetHeatingCoolingState, TemperatureUnit,
};
use hubkit_domain::descriptor::{Attribute, Command};
use hubkit_domain::error::{BridgeError, InvalidTargetError};
use hubkit_domain::hub_value::HubValue;

use super::endpoints::DeviceEndpoints;
use crate::ports::HubClient;

/// Thermostat accessory. Temperatures are always Celsius.
#[derive(Debug, Clone)]
pub struct ThermostatAccessory<C> {
    endpoints: DeviceEndpoints<C>,
}

impl<C: HubClient> ThermostatAccessory<C> {
    pub(crate) fn new(endpoints: DeviceEndpoints<C>) -> Self {
        Self { endpoints }
    }

    pub(crate) fn endpoints(&self) -> &DeviceEndpoints<C> {
        &self.endpoints
    }

    /// Ambient temperature from `temperature`.
    ///
    /// # Errors
    ///
    /// Propagates unit or value read failures.
    #[tracing::instrument(skip(self), fields(device = %self.endpoints.descriptor().name()))]
    pub async fn current_temperature(&self) -> Result<f64, BridgeError> {
        self.endpoints.temperature(Attribute::Temperature).await
    }

    /// Setpoint for the current mode, or `None` when the thermostat is off.
    ///
    /// # Errors
    ///
    /// Returns [`BridgeError::UnsupportedMode`] in auto mode, and propagates
    /// read failures of the mode, unit or setpoint.
    #[tracing::instrument(skip(self), fields(device = %self.endpoints.descriptor().name()))]
    pub async fn target_temperature(&self) -> Result<Option<f64>, BridgeError> {
        let mode = self.target_heating_cooling_state().await?;
        let Some(setpoint) = Setpoint::for_mode(mode)? else {
            tracing::debug!(%mode, "no setpoint while thermostat is off");
            return Ok(None);
        };
        let celsius = self.endpoints.temperature(setpoint.attribute()).await?;
        Ok(Some(celsius))
    }

    /// Write the setpoint for the current mode.
    ///
    /// The value is converted back to the device's unit before sending.
    ///
    /// # Errors
    ///
    /// Returns [`BridgeError::UnsupportedMode`] in auto mode and
    /// [`InvalidTargetError::TargetStateOff`] when the thermostat is off;
    /// neither issues a setpoint command.
    #[tracing::instrument(skip(self), fields(device = %self.endpoints.descriptor().name()))]
    pub async fn set_target_temperature(&self, celsius: f64) -> Result<(), BridgeError> {
        let mode = self.target_heating_cooling_state().await?;
        let setpoint = Setpoint::for_mode(mode)?.ok_or(InvalidTargetError::TargetStateOff)?;
        let unit = self.endpoints.temperature_unit().await?;
        let value = unit.from_celsius(celsius);
        self.endpoints
            .command(setpoint.command(), Some(HubValue::Number(value)))
            .await
    }

    /// What the thermostat is doing, from `thermostatOperatingState`.
    ///
    /// # Errors
    ///
    /// Propagates the read failure.
    #[tracing::instrument(skip(self), fields(device = %self.endpoints.descriptor().name()))]
    pub async fn current_heating_cooling_state(
        &self,
    ) -> Result<CurrentHeatingCoolingState, BridgeError> {
        let state = self
            .endpoints
            .current_value(Attribute::ThermostatOperatingState)
            .await?;
        Ok(CurrentHeatingCoolingState::from_hub(state.as_str()))
    }

    /// The configured mode, from `thermostatMode`.
    ///
    /// # Errors
    ///
    /// Propagates the read failure. A failed read is never mistaken for off.
    #[tracing::instrument(skip(self), fields(device = %self.endpoints.descriptor().name()))]
    pub async fn target_heating_cooling_state(
        &self,
    ) -> Result<TargetHeatingCoolingState, BridgeError> {
        let mode = self
            .endpoints
            .current_value(Attribute::ThermostatMode)
            .await?;
        Ok(TargetHeatingCoolingState::from_hub(mode.as_str()))
    }

    /// Issue `setThermostatMode`.
    ///
    /// # Errors
    ///
    /// Propagates the command failure.
    #[tracing::instrument(skip(self), fields(device = %self.endpoints.descriptor().name()))]
    pub async fn set_target_heating_cooling_state(
        &self,
        mode: TargetHeatingCoolingState,
    ) -> Result<(), BridgeError> {
        self.endpoints
            .command(Command::SetThermostatMode, Some(HubValue::from(mode.to_hub())))
            .await
    }

    /// Display units, from `temperatureUnit`.
    ///
    /// # Errors
    ///
    /// Propagates the read failure.
    #[tracing::instrument(skip(self), fields(device = %self.endpoints.descriptor().name()))]
    pub async fn temperature_display_units(&self) -> Result<TemperatureUnit, BridgeError> {
        self.endpoints.temperature_unit().await
    }
}
