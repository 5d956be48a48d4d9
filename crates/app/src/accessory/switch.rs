//! Switch — a device with an `on` command and no level control.

use hubkit_domain::characteristic::{power_command, power_from_hub};
use hubkit_domain::descriptor::Attribute;
use hubkit_domain::error::BridgeError;

use super::endpoints::DeviceEndpoints;
use crate::ports::HubClient;

/// On/off accessory.
#[derive(Debug, Clone)]
pub struct SwitchAccessory<C> {
    endpoints: DeviceEndpoints<C>,
}

impl<C: HubClient> SwitchAccessory<C> {
    pub(crate) fn new(endpoints: DeviceEndpoints<C>) -> Self {
        Self { endpoints }
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
}

pub(super) async fn read_on<C: HubClient>(endpoints: &DeviceEndpoints<C>) -> Result<bool, BridgeError> {
    let value = endpoints.current_value(Attribute::Switch).await?;
    Ok(power_from_hub(&value))
}
