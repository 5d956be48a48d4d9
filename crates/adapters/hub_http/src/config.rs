//! Hub connection configuration.

use std::time::Duration;

use serde::Deserialize;

/// Configuration for reaching the hub's JSON API.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct HubConfig {
    /// API root, without a trailing slash.
    pub base_url: String,
    /// Installation id of the JSON API app.
    pub app_id: String,
    /// OAuth access token of the installation.
    pub access_token: String,
    /// Upper bound for every HTTP call, in seconds.
    pub timeout_secs: u64,
}

impl Default for HubConfig {
    fn default() -> Self {
        Self {
            base_url: "https://graph.api.smartthings.com".to_string(),
            app_id: String::new(),
            access_token: String::new(),
            timeout_secs: 10,
        }
    }
}

impl HubConfig {
    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// URL of one installation resource, e.g. `location` or `devices`.
    #[must_use]
    pub fn installation_url(&self, resource: &str) -> String {
        format!(
            "{}/api/smartapps/installations/{}/{resource}",
            self.base_url.trim_end_matches('/'),
            self.app_id
        )
    }
}
