//! On/off translation shared by switches and lights.

use crate::descriptor::Command;
use crate::hub_value::HubValue;

/// `"on"` reads as powered; any other value, including numbers, reads as off.
#[must_use]
pub fn power_from_hub(value: &HubValue) -> bool {
    value.as_str() == Some("on")
}

/// Command that drives the device to the requested power state.
#[must_use]
pub fn power_command(on: bool) -> Command {
    if on { Command::On } else { Command::Off }
}
