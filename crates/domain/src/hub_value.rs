//! Wire values exchanged with the hub's attribute and command endpoints.

use serde::{Deserialize, Serialize};

use crate::error::MalformedResponseError;

/// A `currentValue` read from, or a `value` written to, the hub.
///
/// The hub speaks both strings (`"on"`, `"cool"`, `"fahrenheit"`) and
/// numbers (levels, setpoints); numbers sometimes arrive as strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum HubValue {
    Number(f64),
    Text(String),
}

impl HubValue {
    /// The textual form, if this is a string value.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            Self::Number(_) => None,
        }
    }

    /// Interpret the value as a number, accepting numeric strings.
    ///
    /// # Errors
    ///
    /// Returns [`MalformedResponseError::NotNumeric`] when the value is text
    /// that does not parse as a float.
    pub fn as_f64(&self) -> Result<f64, MalformedResponseError> {
        match self {
            Self::Number(number) => Ok(*number),
            Self::Text(text) => text
                .trim()
                .parse()
                .map_err(|_| MalformedResponseError::NotNumeric(text.clone())),
        }
    }
}

impl From<f64> for HubValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for HubValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl std::fmt::Display for HubValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(number) => number.fmt(f),
            Self::Text(text) => f.write_str(text),
        }
    }
}

/// Body of a successful attribute read: `{ "currentValue": ... }`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentValueBody {
    #[serde(default)]
    pub current_value: Option<HubValue>,
}

impl CurrentValueBody {
    /// Decode a raw response body.
    ///
    /// # Errors
    ///
    /// Returns [`MalformedResponseError::InvalidJson`] for unparsable bodies
    /// and [`MalformedResponseError::MissingCurrentValue`] when the field is
    /// absent or `null`.
    pub fn decode(body: &[u8]) -> Result<HubValue, MalformedResponseError> {
        let parsed: Self = serde_json::from_slice(body)
            .map_err(|err| MalformedResponseError::InvalidJson(err.to_string()))?;
        parsed
            .current_value
            .ok_or(MalformedResponseError::MissingCurrentValue)
    }
}

/// Body of a command write: `{}` or `{ "value": ... }`.
#[derive(Debug, Default, Serialize)]
pub struct CommandBody {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<HubValue>,
}
