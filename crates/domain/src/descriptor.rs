//! Device descriptor — the hub's view of one device: a name plus the URL of
//! every command and attribute endpoint it exposes.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{BridgeError, EndpointKind, MissingEndpointError, ValidationError};

macro_rules! define_vocabulary {
    ($(#[doc = $doc:expr])* $name:ident { $($variant:ident => $key:literal),+ $(,)? }) => {
        $(#[doc = $doc])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            /// Key used by the hub for this endpoint.
            #[must_use]
            pub fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $key),+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

define_vocabulary!(
    /// Command (write) endpoints understood by hubkit.
    Command {
        On => "on",
        Off => "off",
        SetLevel => "setLevel",
        SetHue => "setHue",
        SetSaturation => "setSaturation",
        Open => "open",
        Close => "close",
        SetHeatingSetpoint => "setHeatingSetpoint",
        SetCoolingSetpoint => "setCoolingSetpoint",
        SetThermostatMode => "setThermostatMode",
    }
);

define_vocabulary!(
    /// Attribute (read) endpoints understood by hubkit.
    Attribute {
        Switch => "switch",
        Level => "level",
        Hue => "hue",
        Saturation => "saturation",
        Door => "door",
        Status => "status",
        Temperature => "temperature",
        CoolingSetpoint => "coolingSetpoint",
        HeatingSetpoint => "heatingSetpoint",
        ThermostatOperatingState => "thermostatOperatingState",
        ThermostatMode => "thermostatMode",
        TemperatureUnit => "temperatureUnit",
        Illuminance => "illuminance",
    }
);

/// Raw device record as listed by hub discovery.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceRecord {
    pub name: String,
    #[serde(default)]
    pub commands: BTreeMap<String, String>,
    #[serde(default)]
    pub attributes: BTreeMap<String, String>,
}

/// Validated, immutable description of one hub device.
///
/// Both maps may be sparse; a missing key means the device does not
/// support the corresponding operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceDescriptor {
    name: String,
    commands: BTreeMap<String, String>,
    attributes: BTreeMap<String, String>,
}

impl DeviceDescriptor {
    /// Create a builder for constructing a [`DeviceDescriptor`].
    #[must_use]
    pub fn builder() -> DeviceDescriptorBuilder {
        DeviceDescriptorBuilder::default()
    }

    /// Display name (not guaranteed unique).
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether the device exposes `command`.
    #[must_use]
    pub fn has_command(&self, command: Command) -> bool {
        self.commands.contains_key(command.as_str())
    }

    /// Whether the device exposes `attribute`.
    #[must_use]
    pub fn has_attribute(&self, attribute: Attribute) -> bool {
        self.attributes.contains_key(attribute.as_str())
    }

    /// URL bound to `command`.
    ///
    /// # Errors
    ///
    /// Returns [`BridgeError::MissingEndpoint`] when the device has no such command.
    pub fn command_url(&self, command: Command) -> Result<&str, BridgeError> {
        self.commands
            .get(command.as_str())
            .map(String::as_str)
            .ok_or_else(|| self.missing(EndpointKind::Command, command.as_str()))
    }

    /// URL bound to `attribute`.
    ///
    /// # Errors
    ///
    /// Returns [`BridgeError::MissingEndpoint`] when the device has no such attribute.
    pub fn attribute_url(&self, attribute: Attribute) -> Result<&str, BridgeError> {
        self.attributes
            .get(attribute.as_str())
            .map(String::as_str)
            .ok_or_else(|| self.missing(EndpointKind::Attribute, attribute.as_str()))
    }

    fn missing(&self, kind: EndpointKind, name: &'static str) -> BridgeError {
        MissingEndpointError {
            device: self.name.clone(),
            kind,
            name,
        }
        .into()
    }

    /// Check descriptor invariants.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::EmptyName`] for a blank name and
    /// [`ValidationError::RelativeUrl`] for any endpoint that is not an
    /// absolute `http(s)` URL.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::EmptyName);
        }
        let endpoints = self
            .commands
            .iter()
            .map(|(name, url)| (EndpointKind::Command, name, url))
            .chain(
                self.attributes
                    .iter()
                    .map(|(name, url)| (EndpointKind::Attribute, name, url)),
            );
        for (kind, name, url) in endpoints {
            if !is_absolute_http(url) {
                return Err(ValidationError::RelativeUrl {
                    kind,
                    name: name.clone(),
                    url: url.clone(),
                });
            }
        }
        Ok(())
    }
}

fn is_absolute_http(url: &str) -> bool {
    ["http://", "https://"].iter().any(|scheme| {
        url.get(..scheme.len())
            .is_some_and(|prefix| prefix.eq_ignore_ascii_case(scheme))
            && url.len() > scheme.len()
    })
}

impl TryFrom<DeviceRecord> for DeviceDescriptor {
    type Error = ValidationError;

    fn try_from(record: DeviceRecord) -> Result<Self, Self::Error> {
        let descriptor = Self {
            name: record.name,
            commands: record.commands,
            attributes: record.attributes,
        };
        descriptor.validate()?;
        Ok(descriptor)
    }
}

/// Step-by-step builder for [`DeviceDescriptor`].
#[derive(Debug, Default)]
pub struct DeviceDescriptorBuilder {
    record: DeviceRecord,
}

impl DeviceDescriptorBuilder {
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.record.name = name.into();
        self
    }

    #[must_use]
    pub fn command(mut self, command: Command, url: impl Into<String>) -> Self {
        self.record
            .commands
            .insert(command.as_str().to_string(), url.into());
        self
    }

    #[must_use]
    pub fn attribute(mut self, attribute: Attribute, url: impl Into<String>) -> Self {
        self.record
            .attributes
            .insert(attribute.as_str().to_string(), url.into());
        self
    }

    /// Consume the builder, validate, and return a [`DeviceDescriptor`].
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] if the name is empty or a URL is relative.
    pub fn build(self) -> Result<DeviceDescriptor, ValidationError> {
        DeviceDescriptor::try_from(self.record)
    }
}
