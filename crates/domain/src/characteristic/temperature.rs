//! Temperature units and conversion. Characteristics always speak Celsius.

use serde::{Deserialize, Serialize};

/// Unit a device reports its temperatures in; also the display-units
/// characteristic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemperatureUnit {
    #[default]
    Celsius,
    Fahrenheit,
}

impl TemperatureUnit {
    /// Map the hub's `temperatureUnit` attribute. Anything other than
    /// `"fahrenheit"` is Celsius.
    #[must_use]
    pub fn from_hub(unit: Option<&str>) -> Self {
        match unit {
            Some("fahrenheit") => Self::Fahrenheit,
            _ => Self::Celsius,
        }
    }

    /// Convert a raw reading in this unit to Celsius.
    #[must_use]
    pub fn to_celsius(self, value: f64) -> f64 {
        match self {
            Self::Celsius => value,
            Self::Fahrenheit => fahrenheit_to_celsius(value),
        }
    }

    /// Convert a Celsius value into this unit.
    #[must_use]
    pub fn from_celsius(self, celsius: f64) -> f64 {
        match self {
            Self::Celsius => celsius,
            Self::Fahrenheit => celsius_to_fahrenheit(celsius),
        }
    }

    /// Host-facing display-units code.
    #[must_use]
    pub fn code(self) -> u8 {
        match self {
            Self::Celsius => 0,
            Self::Fahrenheit => 1,
        }
    }
}

/// `celsius = (fahrenheit - 32) / 1.8`
#[must_use]
pub fn fahrenheit_to_celsius(fahrenheit: f64) -> f64 {
    (fahrenheit - 32.0) / 1.8
}

/// Inverse of [`fahrenheit_to_celsius`].
#[must_use]
pub fn celsius_to_fahrenheit(celsius: f64) -> f64 {
    celsius * 1.8 + 32.0
}
