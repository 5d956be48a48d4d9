//! Capability classification — which single archetype a device exposes.
//!
//! Rules are evaluated in a fixed priority order and the first match wins:
//!
//! | # | Rule | Category |
//! |---|------|----------|
//! | 1 | `on` and `setLevel` commands | [`DimmableLight`](CapabilityCategory::DimmableLight) |
//! | 2 | `on` command | [`Switch`](CapabilityCategory::Switch) |
//! | 3 | `open` command | [`GarageDoor`](CapabilityCategory::GarageDoor) |
//! | 4 | `setHeatingSetpoint` or `setCoolingSetpoint` command | [`Thermostat`](CapabilityCategory::Thermostat) |
//! | 5 | `illuminance` attribute | [`LightSensor`](CapabilityCategory::LightSensor) |
//! | – | nothing matched | [`Unclassified`](CapabilityCategory::Unclassified) |

use serde::Serialize;

use crate::descriptor::{Attribute, Command, DeviceDescriptor};

/// The archetype a device is exposed as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case", tag = "category")]
pub enum CapabilityCategory {
    Switch,
    DimmableLight { has_hue: bool, has_saturation: bool },
    GarageDoor,
    Thermostat,
    LightSensor,
    Unclassified,
}

impl CapabilityCategory {
    /// Classify a descriptor by the priority rules above.
    #[must_use]
    pub fn classify(descriptor: &DeviceDescriptor) -> Self {
        Classification::of(descriptor).category
    }

    /// Short name used in logs and reports.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Switch => "switch",
            Self::DimmableLight { .. } => "dimmable_light",
            Self::GarageDoor => "garage_door",
            Self::Thermostat => "thermostat",
            Self::LightSensor => "light_sensor",
            Self::Unclassified => "unclassified",
        }
    }
}

impl std::fmt::Display for CapabilityCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Outcome of classifying one descriptor.
///
/// `shadowed` lists the lower-priority categories whose rule also matched.
/// A light always satisfies the switch rule, so that pair is not reported.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    pub category: CapabilityCategory,
    pub shadowed: Vec<CapabilityCategory>,
}

impl Classification {
    /// Evaluate every rule against `descriptor`.
    #[must_use]
    pub fn of(descriptor: &DeviceDescriptor) -> Self {
        let has_on = descriptor.has_command(Command::On);
        let light = has_on && descriptor.has_command(Command::SetLevel);

        let mut matches = Vec::new();
        if light {
            matches.push(CapabilityCategory::DimmableLight {
                has_hue: descriptor.has_command(Command::SetHue),
                has_saturation: descriptor.has_command(Command::SetSaturation),
            });
        } else if has_on {
            matches.push(CapabilityCategory::Switch);
        }
        if descriptor.has_command(Command::Open) {
            matches.push(CapabilityCategory::GarageDoor);
        }
        if descriptor.has_command(Command::SetHeatingSetpoint)
            || descriptor.has_command(Command::SetCoolingSetpoint)
        {
            matches.push(CapabilityCategory::Thermostat);
        }
        if descriptor.has_attribute(Attribute::Illuminance) {
            matches.push(CapabilityCategory::LightSensor);
        }

        let mut matches = matches.into_iter();
        let category = matches.next().unwrap_or(CapabilityCategory::Unclassified);
        Self {
            category,
            shadowed: matches.collect(),
        }
    }

    /// Whether more than one rule matched and priority decided.
    #[must_use]
    pub fn is_ambiguous(&self) -> bool {
        !self.shadowed.is_empty()
    }
}
