//! Garage door states.

use serde::{Deserialize, Serialize};

use crate::descriptor::Command;
use crate::error::InvalidTargetError;

/// Observed position of a garage door.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CurrentDoorState {
    Open,
    Closed,
    Opening,
    Closing,
    Stopped,
}

impl CurrentDoorState {
    /// Map the hub's `status` attribute. Unknown values read as
    /// [`Stopped`](Self::Stopped).
    #[must_use]
    pub fn from_hub(status: &str) -> Self {
        match status {
            "open" => Self::Open,
            "opening" => Self::Opening,
            "closing" => Self::Closing,
            "closed" => Self::Closed,
            _ => Self::Stopped,
        }
    }

    /// Host-facing code.
    #[must_use]
    pub fn code(self) -> u8 {
        match self {
            Self::Open => 0,
            Self::Closed => 1,
            Self::Opening => 2,
            Self::Closing => 3,
            Self::Stopped => 4,
        }
    }
}

/// Where a garage door is heading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TargetDoorState {
    Open,
    Closed,
}

impl TargetDoorState {
    /// Derive the target from the current state: a door that is open or
    /// opening targets open, everything else targets closed.
    #[must_use]
    pub fn from_current(current: CurrentDoorState) -> Self {
        match current {
            CurrentDoorState::Open | CurrentDoorState::Opening => Self::Open,
            CurrentDoorState::Closed | CurrentDoorState::Closing | CurrentDoorState::Stopped => {
                Self::Closed
            }
        }
    }

    /// Command that moves the door toward this target.
    #[must_use]
    pub fn command(self) -> Command {
        match self {
            Self::Open => Command::Open,
            Self::Closed => Command::Close,
        }
    }

    /// Host-facing code.
    #[must_use]
    pub fn code(self) -> u8 {
        match self {
            Self::Open => 0,
            Self::Closed => 1,
        }
    }
}

impl TryFrom<u8> for TargetDoorState {
    type Error = InvalidTargetError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(Self::Open),
            1 => Ok(Self::Closed),
            other => Err(InvalidTargetError::UnknownDoorState(other)),
        }
    }
}
