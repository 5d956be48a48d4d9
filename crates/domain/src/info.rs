//! Static identification published for every accessory.

use serde::Serialize;

const MANUFACTURER: &str = "SmartThings";
const MODEL: &str = "Rev-1";
const SERIAL_NUMBER: &str = "A1S2NASF88EW";

/// Name, manufacturer, model and serial number of an accessory.
///
/// The hub does not report hardware details, so everything but the
/// name is fixed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AccessoryInfo {
    pub name: String,
    pub manufacturer: &'static str,
    pub model: &'static str,
    pub serial_number: &'static str,
}

impl AccessoryInfo {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            manufacturer: MANUFACTURER,
            model: MODEL,
            serial_number: SERIAL_NUMBER,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_fill_fixed_fields() {
        let info = AccessoryInfo::new("Garage");
        assert_eq!(info.name, "Garage");
        assert_eq!(info.manufacturer, "SmartThings");
        assert_eq!(info.model, "Rev-1");
        assert_eq!(info.serial_number, "A1S2NASF88EW");
    }
}
