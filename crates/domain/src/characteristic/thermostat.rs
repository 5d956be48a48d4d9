//! Thermostat heating/cooling states and setpoint selection.

use serde::{Deserialize, Serialize};

use crate::descriptor::{Attribute, Command};
use crate::error::{BridgeError, InvalidTargetError};

/// What the thermostat is doing right now.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CurrentHeatingCoolingState {
    Off,
    Heat,
    Cool,
}

impl CurrentHeatingCoolingState {
    /// Map the hub's `thermostatOperatingState` attribute.
    #[must_use]
    pub fn from_hub(state: Option<&str>) -> Self {
        match state {
            Some("cooling") => Self::Cool,
            Some("heating") => Self::Heat,
            _ => Self::Off,
        }
    }

    /// Host-facing code.
    #[must_use]
    pub fn code(self) -> u8 {
        match self {
            Self::Off => 0,
            Self::Heat => 1,
            Self::Cool => 2,
        }
    }
}

/// The mode the thermostat is set to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TargetHeatingCoolingState {
    Off,
    Heat,
    Cool,
    Auto,
}

impl TargetHeatingCoolingState {
    /// Map the hub's `thermostatMode` attribute.
    #[must_use]
    pub fn from_hub(mode: Option<&str>) -> Self {
        match mode {
            Some("cool") => Self::Cool,
            Some("heat") => Self::Heat,
            Some("auto") => Self::Auto,
            _ => Self::Off,
        }
    }

    /// Value sent with `setThermostatMode`. The hub calls auto `"range"`.
    #[must_use]
    pub fn to_hub(self) -> &'static str {
        match self {
            Self::Cool => "cool",
            Self::Heat => "heat",
            Self::Auto => "range",
            Self::Off => "off",
        }
    }

    /// Host-facing code.
    #[must_use]
    pub fn code(self) -> u8 {
        match self {
            Self::Off => 0,
            Self::Heat => 1,
            Self::Cool => 2,
            Self::Auto => 3,
        }
    }
}

impl TryFrom<u8> for TargetHeatingCoolingState {
    type Error = InvalidTargetError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(Self::Off),
            1 => Ok(Self::Heat),
            2 => Ok(Self::Cool),
            3 => Ok(Self::Auto),
            other => Err(InvalidTargetError::UnknownHeatingCoolingState(other)),
        }
    }
}

impl std::fmt::Display for TargetHeatingCoolingState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Off => f.write_str("off"),
            Self::Heat => f.write_str("heat"),
            Self::Cool => f.write_str("cool"),
            Self::Auto => f.write_str("auto"),
        }
    }
}

/// The setpoint a target temperature maps to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Setpoint {
    Cooling,
    Heating,
}

impl Setpoint {
    /// Pick the setpoint for a target mode.
    ///
    /// Returns `Ok(None)` when the thermostat is off.
    ///
    /// # Errors
    ///
    /// Returns [`BridgeError::UnsupportedMode`] for auto: the hub has no
    /// single setpoint for a range.
    pub fn for_mode(mode: TargetHeatingCoolingState) -> Result<Option<Self>, BridgeError> {
        match mode {
            TargetHeatingCoolingState::Cool => Ok(Some(Self::Cooling)),
            TargetHeatingCoolingState::Heat => Ok(Some(Self::Heating)),
            TargetHeatingCoolingState::Auto => Err(BridgeError::UnsupportedMode(mode)),
            TargetHeatingCoolingState::Off => Ok(None),
        }
    }

    /// Attribute holding this setpoint.
    #[must_use]
    pub fn attribute(self) -> Attribute {
        match self {
            Self::Cooling => Attribute::CoolingSetpoint,
            Self::Heating => Attribute::HeatingSetpoint,
        }
    }

    /// Command writing this setpoint.
    #[must_use]
    pub fn command(self) -> Command {
        match self {
            Self::Cooling => Command::SetCoolingSetpoint,
            Self::Heating => Command::SetHeatingSetpoint,
        }
    }
}
