//! HTTP adapter error types.

use hubkit_domain::error::BridgeError;

/// Errors specific to the HTTP adapter.
#[derive(Debug, thiserror::Error)]
pub enum HubHttpError {
    /// The reqwest client could not be constructed.
    #[error("failed to build HTTP client")]
    Build(#[source] reqwest::Error),

    /// Connection failure, timeout, or body read failure.
    #[error("HTTP request failed")]
    Request(#[from] reqwest::Error),

    /// The hub answered with a status we do not accept.
    #[error("unexpected status {status} from {url}")]
    Status { url: String, status: u16 },
}

impl HubHttpError {
    /// Convert into a [`BridgeError::Transport`] for propagation across port
    /// boundaries.
    #[must_use]
    pub fn into_domain(self) -> BridgeError {
        BridgeError::Transport(Box::new(self))
    }
}

impl From<HubHttpError> for BridgeError {
    fn from(err: HubHttpError) -> Self {
        err.into_domain()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_display_status_error() {
        let err = HubHttpError::Status {
            url: "https://hub.test/a".to_string(),
            status: 503,
        };
        assert_eq!(err.to_string(), "unexpected status 503 from https://hub.test/a");
    }

    #[test]
    fn should_convert_status_to_transport_error() {
        let err: BridgeError = HubHttpError::Status {
            url: "https://hub.test/a".to_string(),
            status: 404,
        }
        .into();
        assert!(matches!(err, BridgeError::Transport(_)));
    }
}
