//! Endpoint access shared by every accessory: a descriptor's URL maps bound
//! to a [`HubClient`].

use hubkit_domain::characteristic::TemperatureUnit;
use hubkit_domain::descriptor::{Attribute, Command, DeviceDescriptor};
use hubkit_domain::error::BridgeError;
use hubkit_domain::hub_value::HubValue;

use crate::ports::HubClient;

/// A device's endpoints and the client used to reach them.
#[derive(Debug, Clone)]
pub(crate) struct DeviceEndpoints<C> {
    descriptor: DeviceDescriptor,
    client: C,
}

impl<C: HubClient> DeviceEndpoints<C> {
    pub(crate) fn new(descriptor: DeviceDescriptor, client: C) -> Self {
        Self { descriptor, client }
    }

    pub(crate) fn descriptor(&self) -> &DeviceDescriptor {
        &self.descriptor
    }

    /// Drop the client, keeping only the descriptor.
    pub(crate) fn into_descriptor(self) -> DeviceDescriptor {
        self.descriptor
    }

    /// Read the current value of `attribute`.
    ///
    /// # Errors
    ///
    /// Returns [`BridgeError::MissingEndpoint`] when the device lacks the
    /// attribute, otherwise whatever the client reports.
    pub(crate) async fn current_value(&self, attribute: Attribute) -> Result<HubValue, BridgeError> {
        let url = self.descriptor.attribute_url(attribute)?;
        tracing::debug!(device = %self.descriptor.name(), %attribute, "reading attribute");
        self.client.current_value(url).await.inspect_err(|err| {
            tracing::warn!(
                device = %self.descriptor.name(),
                %url,
                error = %err,
                "error getting attribute"
            );
        })
    }

    /// Read `attribute` as a number.
    ///
    /// # Errors
    ///
    /// Same as [`current_value`](Self::current_value), plus
    /// [`BridgeError::MalformedResponse`] for non-numeric values.
    pub(crate) async fn numeric_value(&self, attribute: Attribute) -> Result<f64, BridgeError> {
        let value = self.current_value(attribute).await?;
        Ok(value.as_f64()?)
    }

    /// Issue `command`, with a value when one is supplied.
    ///
    /// # Errors
    ///
    /// Returns [`BridgeError::MissingEndpoint`] when the device lacks the
    /// command, otherwise whatever the client reports.
    pub(crate) async fn command(
        &self,
        command: Command,
        value: Option<HubValue>,
    ) -> Result<(), BridgeError> {
        let url = self.descriptor.command_url(command)?;
        match &value {
            Some(value) => tracing::debug!(
                device = %self.descriptor.name(),
                %command,
                %value,
                "sending command"
            ),
            None => tracing::debug!(device = %self.descriptor.name(), %command, "sending command"),
        }
        self.client.command(url, value).await.inspect_err(|err| {
            tracing::warn!(
                device = %self.descriptor.name(),
                %url,
                error = %err,
                "error sending command"
            );
        })
    }

    /// Unit the device reports temperatures in.
    ///
    /// A device without a `temperatureUnit` attribute is taken to speak
    /// Celsius, without a round trip.
    ///
    /// # Errors
    ///
    /// Propagates read failures of the unit attribute.
    pub(crate) async fn temperature_unit(&self) -> Result<TemperatureUnit, BridgeError> {
        if !self.descriptor.has_attribute(Attribute::TemperatureUnit) {
            return Ok(TemperatureUnit::Celsius);
        }
        let unit = self.current_value(Attribute::TemperatureUnit).await?;
        Ok(TemperatureUnit::from_hub(unit.as_str()))
    }

    /// Read a temperature attribute, normalised to Celsius.
    ///
    /// The unit is read first; the value is only requested once the unit
    /// is known.
    ///
    /// # Errors
    ///
    /// Fails as a whole if either read fails.
    pub(crate) async fn temperature(&self, attribute: Attribute) -> Result<f64, BridgeError> {
        let unit = self.temperature_unit().await?;
        let raw = self.numeric_value(attribute).await?;
        Ok(unit.to_celsius(raw))
    }
}
