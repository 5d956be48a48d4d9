//! Garage door — `open`/`close` commands and a `status` (or `door`) attribute.
//!
//! The target state is never read from the hub: it is derived from the
//! current state, so both views come from the same read.

use serde::Serialize;

use hubkit_domain::characteristic::{CurrentDoorState, TargetDoorState};
use hubkit_domain::descriptor::Attribute;
use hubkit_domain::error::BridgeError;

use super::endpoints::DeviceEndpoints;
use crate::ports::HubClient;

/// Current and target door state computed from one `status` read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DoorState {
    pub current: CurrentDoorState,
    pub target: TargetDoorState,
}

impl From<CurrentDoorState> for DoorState {
    fn from(current: CurrentDoorState) -> Self {
        Self {
            current,
            target: TargetDoorState::from_current(current),
        }
    }
}

/// Garage door opener.
#[derive(Debug, Clone)]
pub struct GarageDoorAccessory<C> {
    endpoints: DeviceEndpoints<C>,
}

impl<C: HubClient> GarageDoorAccessory<C> {
    pub(crate) fn new(endpoints: DeviceEndpoints<C>) -> Self {
        Self { endpoints }
    }

    pub(crate) fn endpoints(&self) -> &DeviceEndpoints<C> {
        &self.endpoints
    }

    /// Attribute carrying the door position: `status`, else `door`.
    fn state_attribute(&self) -> Attribute {
        if self.endpoints.descriptor().has_attribute(Attribute::Status) {
            Attribute::Status
        } else {
            Attribute::Door
        }
    }

    /// Read the door position once and return both views.
    ///
    /// # Errors
    ///
    /// Propagates the read failure, or [`BridgeError::MissingEndpoint`] when
    /// the device has neither `status` nor `door`.
    #[tracing::instrument(skip(self), fields(device = %self.endpoints.descriptor().name()))]
    pub async fn door_state(&self) -> Result<DoorState, BridgeError> {
        let status = self.endpoints.current_value(self.state_attribute()).await?;
        let current = status
            .as_str()
            .map_or(CurrentDoorState::Stopped, CurrentDoorState::from_hub);
        Ok(DoorState::from(current))
    }

    /// Current door state. Unknown statuses read as stopped.
    ///
    /// # Errors
    ///
    /// Propagates the read failure.
    pub async fn current_door_state(&self) -> Result<CurrentDoorState, BridgeError> {
        Ok(self.door_state().await?.current)
    }

    /// Target door state derived from the current one.
    ///
    /// # Errors
    ///
    /// Propagates the read failure.
    pub async fn target_door_state(&self) -> Result<TargetDoorState, BridgeError> {
        Ok(self.door_state().await?.target)
    }

    /// Issue `open` or `close`.
    ///
    /// # Errors
    ///
    /// Propagates the command failure.
    #[tracing::instrument(skip(self), fields(device = %self.endpoints.descriptor().name()))]
    pub async fn set_target_door_state(&self, target: TargetDoorState) -> Result<(), BridgeError> {
        self.endpoints.command(target.command(), None).await
    }
}
