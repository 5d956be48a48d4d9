//! Characteristic value domains and their translation to and from the
//! hub's vocabulary.
//!
//! Every translator here is pure: the façade does the round trip, these
//! functions only map values. Enums carrying a host-facing code expose it
//! through `code()` and decode it with `TryFrom<u8>`.

mod door;
mod power;
mod temperature;
mod thermostat;

pub use door::{CurrentDoorState, TargetDoorState};
pub use power::{power_command, power_from_hub};
pub use temperature::{TemperatureUnit, celsius_to_fahrenheit, fahrenheit_to_celsius};
pub use thermostat::{CurrentHeatingCoolingState, Setpoint, TargetHeatingCoolingState};
