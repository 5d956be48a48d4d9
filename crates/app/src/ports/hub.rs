//! Hub port — single-shot reads of attribute endpoints and writes to
//! command endpoints.

use std::future::Future;
use std::sync::Arc;

use hubkit_domain::error::BridgeError;
use hubkit_domain::hub_value::HubValue;

/// One round trip to a hub-owned endpoint.
///
/// Implementations perform exactly one request per call: no caching, no
/// retry. A bounded timeout is expected; expiry surfaces as
/// [`BridgeError::Transport`].
pub trait HubClient: Send + Sync {
    /// `GET` an attribute endpoint and return its `currentValue`.
    ///
    /// Any status other than 200 is a transport error; a 200 without a
    /// `currentValue` is a malformed response.
    fn current_value(&self, url: &str)
    -> impl Future<Output = Result<HubValue, BridgeError>> + Send;

    /// `PUT` a command endpoint with `{}` or `{ "value": ... }`.
    fn command(
        &self,
        url: &str,
        value: Option<HubValue>,
    ) -> impl Future<Output = Result<(), BridgeError>> + Send;
}

impl<T: HubClient> HubClient for Arc<T> {
    fn current_value(
        &self,
        url: &str,
    ) -> impl Future<Output = Result<HubValue, BridgeError>> + Send {
        (**self).current_value(url)
    }

    fn command(
        &self,
        url: &str,
        value: Option<HubValue>,
    ) -> impl Future<Output = Result<(), BridgeError>> + Send {
        (**self).command(url, value)
    }
}
