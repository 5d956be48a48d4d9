//! Common error types used across the workspace.
//!
//! Every characteristic operation reports failure through [`BridgeError`].
//! The variants are kinds, not messages: callers match on them to tell an
//! outage ([`Transport`](BridgeError::Transport)) apart from a known gap
//! ([`UnsupportedMode`](BridgeError::UnsupportedMode)) or a rejected write
//! ([`InvalidTarget`](BridgeError::InvalidTarget)).

use crate::characteristic::TargetHeatingCoolingState;

/// Boxed error used to carry adapter-specific transport failures.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Top-level error for every hubkit operation.
#[derive(Debug, thiserror::Error)]
pub enum BridgeError {
    /// Network failure, timeout or non-success status on a read or write.
    #[error("transport error")]
    Transport(#[source] BoxError),

    /// The hub answered 200 but the body was not what we expected.
    #[error("malformed hub response")]
    MalformedResponse(#[from] MalformedResponseError),

    /// The thermostat is in a mode with no single setpoint.
    #[error("unimplemented: no setpoint for thermostat mode {0}")]
    UnsupportedMode(TargetHeatingCoolingState),

    /// A write carried a value with no corresponding hub command.
    #[error("invalid target")]
    InvalidTarget(#[from] InvalidTargetError),

    /// The device does not expose the endpoint the operation needs.
    #[error("missing endpoint")]
    MissingEndpoint(#[from] MissingEndpointError),

    /// A device record failed descriptor validation.
    #[error("validation error")]
    Validation(#[from] ValidationError),
}

/// Details about why a 200 response could not be used.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum MalformedResponseError {
    /// The body has no `currentValue` field, or it is `null`.
    #[error("current value not available")]
    MissingCurrentValue,

    /// The body is not valid JSON.
    #[error("response body is not valid JSON: {0}")]
    InvalidJson(String),

    /// A numeric characteristic received a non-numeric value.
    #[error("expected a numeric value, got {0:?}")]
    NotNumeric(String),
}

/// Reasons a write is rejected before reaching the hub.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum InvalidTargetError {
    /// Setting a temperature while the thermostat target mode is off.
    #[error("target state is off")]
    TargetStateOff,

    /// The host supplied a heating/cooling code outside the known set.
    #[error("unknown target heating cooling state {0}")]
    UnknownHeatingCoolingState(u8),

    /// The host supplied a door code outside the known set.
    #[error("unknown target door state {0}")]
    UnknownDoorState(u8),
}

/// Which endpoint map an operation looked up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndpointKind {
    Command,
    Attribute,
}

impl std::fmt::Display for EndpointKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Command => f.write_str("command"),
            Self::Attribute => f.write_str("attribute"),
        }
    }
}

/// The descriptor has no URL bound to the requested name.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("device {device:?} has no {kind} endpoint {name:?}")]
pub struct MissingEndpointError {
    pub device: String,
    pub kind: EndpointKind,
    pub name: &'static str,
}

/// Descriptor invariant violations.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ValidationError {
    /// The device name is empty.
    #[error("name must not be empty")]
    EmptyName,

    /// An endpoint URL is not an absolute `http(s)` URL.
    #[error("{kind} endpoint {name:?} is not an absolute http(s) URL: {url:?}")]
    RelativeUrl {
        kind: EndpointKind,
        name: String,
        url: String,
    },
}

impl BridgeError {
    /// Wrap any transport-level failure.
    pub fn transport(err: impl Into<BoxError>) -> Self {
        Self::Transport(err.into())
    }

    /// Whether this error is the known "unimplemented" thermostat gap.
    #[must_use]
    pub fn is_unimplemented(&self) -> bool {
        matches!(self, Self::UnsupportedMode(_))
    }

    /// This error followed by every source in its chain, joined by `: `.
    ///
    /// The top-level message only names the kind; the chain carries the
    /// URL, status or endpoint that failed.
    #[must_use]
    pub fn report(&self) -> String {
        let mut text = self.to_string();
        let mut source = std::error::Error::source(self);
        while let Some(cause) = source {
            text.push_str(": ");
            text.push_str(&cause.to_string());
            source = std::error::Error::source(cause);
        }
        text
    }
}
