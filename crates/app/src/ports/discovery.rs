//! Discovery port — enumerate the devices exposed by a hub installation.

use std::future::Future;

use hubkit_domain::descriptor::DeviceRecord;
use hubkit_domain::error::BridgeError;

/// Lists the raw device records of one hub installation.
///
/// The location token is opaque to hubkit; it is carried alongside the
/// registry for the host's benefit.
pub trait HubDiscovery: Send + Sync {
    /// Resolve the installation's location.
    fn location(&self) -> impl Future<Output = Result<serde_json::Value, BridgeError>> + Send;

    /// List every device record the installation exposes.
    fn devices(&self) -> impl Future<Output = Result<Vec<DeviceRecord>, BridgeError>> + Send;
}
