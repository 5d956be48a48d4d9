//! Light sensor — a device exposing only an `illuminance` attribute.

use hubkit_domain::descriptor::Attribute;
use hubkit_domain::error::BridgeError;

use super::endpoints::DeviceEndpoints;
use crate::ports::HubClient;

/// Ambient light sensor.
#[derive(Debug, Clone)]
pub struct LightSensorAccessory<C> {
    endpoints: DeviceEndpoints<C>,
}

impl<C: HubClient> LightSensorAccessory<C> {
    pub(crate) fn new(endpoints: DeviceEndpoints<C>) -> Self {
        Self { endpoints }
    }

    pub(crate) fn endpoints(&self) -> &DeviceEndpoints<C> {
        &self.endpoints
    }

    /// Read `illuminance`, in lux.
    ///
    /// # Errors
    ///
    /// Propagates the read failure, or a malformed response for a
    /// non-numeric value.
    #[tracing::instrument(skip(self), fields(device = %self.endpoints.descriptor().name()))]
    pub async fn current_ambient_light_level(&self) -> Result<f64, BridgeError> {
        self.endpoints.numeric_value(Attribute::Illuminance).await
    }
}
