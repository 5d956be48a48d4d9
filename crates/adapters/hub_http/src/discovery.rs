//! [`HubDiscovery`] over HTTP.
//!
//! Both calls hit the installation endpoints of the JSON API app and
//! authenticate with the `access_token` query parameter.

use hubkit_app::ports::HubDiscovery;
use hubkit_domain::descriptor::DeviceRecord;
use hubkit_domain::error::{BridgeError, MalformedResponseError};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;

use crate::client::build_http;
use crate::config::HubConfig;
use crate::error::HubHttpError;

/// Device groups listed by the hub, in the order they are read.
/// Groups outside this list are ignored.
pub const DEVICE_GROUPS: [&str; 5] = ["switches", "doors", "hues", "thermostats", "lightSensors"];

/// HTTP implementation of [`HubDiscovery`].
#[derive(Debug, Clone)]
pub struct HttpHubDiscovery {
    http: reqwest::Client,
    config: HubConfig,
}

impl HttpHubDiscovery {
    /// # Errors
    ///
    /// Returns [`HubHttpError::Build`] if the HTTP client cannot be built.
    pub fn new(config: HubConfig) -> Result<Self, HubHttpError> {
        Ok(Self {
            http: build_http(&config)?,
            config,
        })
    }

    async fn fetch<T: DeserializeOwned>(&self, resource: &str) -> Result<T, BridgeError> {
        let url = self.config.installation_url(resource);
        tracing::debug!(%url, "fetching installation resource");
        let response = self
            .http
            .get(&url)
            .query(&[("access_token", self.config.access_token.as_str())])
            .send()
            .await
            .map_err(HubHttpError::from)?;
        let status = response.status();
        if status != StatusCode::OK {
            return Err(HubHttpError::Status {
                url,
                status: status.as_u16(),
            }
            .into());
        }
        let body = response.bytes().await.map_err(HubHttpError::from)?;
        serde_json::from_slice(&body)
            .map_err(|err| MalformedResponseError::InvalidJson(err.to_string()).into())
    }
}

impl HubDiscovery for HttpHubDiscovery {
    #[tracing::instrument(skip(self), fields(app_id = %self.config.app_id))]
    async fn location(&self) -> Result<serde_json::Value, BridgeError> {
        self.fetch("location").await
    }

    #[tracing::instrument(skip(self), fields(app_id = %self.config.app_id))]
    async fn devices(&self) -> Result<Vec<DeviceRecord>, BridgeError> {
        let mut groups: serde_json::Map<String, serde_json::Value> = self.fetch("devices").await?;
        let mut records = Vec::new();
        for group in DEVICE_GROUPS {
            let Some(entries) = groups.remove(group) else {
                continue;
            };
            let entries: Vec<serde_json::Value> = serde_json::from_value(entries)
                .map_err(|err| MalformedResponseError::InvalidJson(format!("{group}: {err}")))?;
            let before = records.len();
            for (index, entry) in entries.into_iter().enumerate() {
                match serde_json::from_value::<DeviceRecord>(entry) {
                    Ok(record) => records.push(record),
                    Err(err) => {
                        tracing::warn!(group, index, error = %err, "skipping undecodable device record");
                    }
                }
            }
            tracing::debug!(group, count = records.len() - before, "device group listed");
        }
        for ignored in groups.keys() {
            tracing::debug!(group = %ignored, "ignoring unknown device group");
        }
        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use axum::extract::{Path, Query};
    use axum::http::StatusCode as AxumStatus;
    use axum::routing::get;
    use axum::{Json, Router};
    use serde_json::{Value, json};

    use super::*;
    use crate::test_server::spawn;

    const TOKEN: &str = "secret";

    fn authorized(query: &HashMap<String, String>) -> bool {
        query.get("access_token").map(String::as_str) == Some(TOKEN)
    }

    async fn location(
        Path(app_id): Path<String>,
        Query(query): Query<HashMap<String, String>>,
    ) -> Result<Json<Value>, AxumStatus> {
        if !authorized(&query) || app_id != "app-1" {
            return Err(AxumStatus::UNAUTHORIZED);
        }
        Ok(Json(json!({"name": "Home", "temperatureScale": "F"})))
    }

    async fn devices(
        Path(app_id): Path<String>,
        Query(query): Query<HashMap<String, String>>,
    ) -> Result<Json<Value>, AxumStatus> {
        if !authorized(&query) || app_id != "app-1" {
            return Err(AxumStatus::UNAUTHORIZED);
        }
        Ok(Json(json!({
            "lightSensors": [{"name": "Porch", "attributes": {"illuminance": "https://hub.test/porch/illuminance"}}],
            "switches": [{"name": "Hall", "commands": {"on": "https://hub.test/hall/on"}}],
            "sirens": [{"name": "Alarm"}],
            "doors": [
                {"name": "Garage", "commands": {"open": "https://hub.test/garage/open"}, "attributes": {}}
            ],
        })))
    }

    async fn discovery(token: &str) -> HttpHubDiscovery {
        let router = Router::new()
            .route("/api/smartapps/installations/{app_id}/location", get(location))
            .route("/api/smartapps/installations/{app_id}/devices", get(devices));
        let base_url = spawn(router).await;
        HttpHubDiscovery::new(HubConfig {
            base_url,
            app_id: "app-1".to_string(),
            access_token: token.to_string(),
            timeout_secs: 5,
        })
        .unwrap()
    }

    #[tokio::test]
    async fn should_fetch_location() {
        let location = discovery(TOKEN).await.location().await.unwrap();
        assert_eq!(location["temperatureScale"], "F");
    }

    #[tokio::test]
    async fn should_list_known_groups_in_order() {
        let records = discovery(TOKEN).await.devices().await.unwrap();

        let names: Vec<_> = records.iter().map(|record| record.name.as_str()).collect();
        assert_eq!(names, vec!["Hall", "Garage", "Porch"]);
        assert_eq!(
            records[0].commands.get("on").map(String::as_str),
            Some("https://hub.test/hall/on")
        );
        assert!(records[2].commands.is_empty());
    }

    #[tokio::test]
    async fn should_fail_with_transport_error_when_unauthorized() {
        let err = discovery("wrong").await.location().await.unwrap_err();
        assert!(matches!(err, BridgeError::Transport(_)));
    }

    #[tokio::test]
    async fn should_skip_undecodable_record_and_keep_siblings() {
        let router = Router::new().route(
            "/api/smartapps/installations/{app_id}/devices",
            get(|| async {
                Json(json!({
                    "switches": [
                        {"commands": {"on": "https://hub.test/nameless/on"}},
                        {"name": "Hall", "commands": {"on": "https://hub.test/hall/on"}},
                        {"name": "Attic", "commands": null},
                    ],
                }))
            }),
        );
        let base_url = spawn(router).await;
        let discovery = HttpHubDiscovery::new(HubConfig {
            base_url,
            app_id: "app-1".to_string(),
            ..HubConfig::default()
        })
        .unwrap();

        let records = discovery.devices().await.unwrap();

        let names: Vec<_> = records.iter().map(|record| record.name.as_str()).collect();
        assert_eq!(names, vec!["Hall"]);
    }

    #[tokio::test]
    async fn should_report_malformed_group() {
        let router = Router::new().route(
            "/api/smartapps/installations/{app_id}/devices",
            get(|| async { Json(json!({"switches": {"name": "not a list"}})) }),
        );
        let base_url = spawn(router).await;
        let discovery = HttpHubDiscovery::new(HubConfig {
            base_url,
            app_id: "app-1".to_string(),
            ..HubConfig::default()
        })
        .unwrap();

        let err = discovery.devices().await.unwrap_err();

        assert!(matches!(
            err,
            BridgeError::MalformedResponse(MalformedResponseError::InvalidJson(_))
        ));
    }
}
