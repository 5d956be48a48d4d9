//! [`HubClient`] over HTTP.
//!
//! Reads are `GET {attribute_url}` answered with `{"currentValue": …}`.
//! Commands are `PUT {command_url}` with a JSON body carrying an optional
//! `value`; whatever the hub echoes back is ignored.

use hubkit_app::ports::HubClient;
use hubkit_domain::error::BridgeError;
use hubkit_domain::hub_value::{CommandBody, CurrentValueBody, HubValue};
use reqwest::StatusCode;

use crate::config::HubConfig;
use crate::error::HubHttpError;

/// Build the `reqwest` client shared by the adapter's ports.
///
/// # Errors
///
/// Returns [`HubHttpError::Build`] if the TLS backend cannot be initialised.
pub(crate) fn build_http(config: &HubConfig) -> Result<reqwest::Client, HubHttpError> {
    reqwest::Client::builder()
        .timeout(config.timeout())
        .build()
        .map_err(HubHttpError::Build)
}

/// HTTP implementation of [`HubClient`].
///
/// Cloning is cheap: the underlying connection pool is shared.
#[derive(Debug, Clone)]
pub struct HttpHubClient {
    http: reqwest::Client,
    access_token: Option<String>,
}

impl HttpHubClient {
    /// Create a client bounded by the configured timeout.
    ///
    /// Requests carry the access token as a bearer header when one is set.
    ///
    /// # Errors
    ///
    /// Returns [`HubHttpError::Build`] if the HTTP client cannot be built.
    pub fn new(config: &HubConfig) -> Result<Self, HubHttpError> {
        Ok(Self {
            http: build_http(config)?,
            access_token: Some(config.access_token.clone()).filter(|token| !token.is_empty()),
        })
    }

    fn authorize(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.access_token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }
}

impl HubClient for HttpHubClient {
    #[tracing::instrument(skip(self))]
    async fn current_value(&self, url: &str) -> Result<HubValue, BridgeError> {
        let response = self
            .authorize(self.http.get(url))
            .send()
            .await
            .map_err(HubHttpError::from)?;
        let status = response.status();
        if status != StatusCode::OK {
            return Err(HubHttpError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            }
            .into());
        }
        let body = response.bytes().await.map_err(HubHttpError::from)?;
        Ok(CurrentValueBody::decode(&body)?)
    }

    #[tracing::instrument(skip(self))]
    async fn command(&self, url: &str, value: Option<HubValue>) -> Result<(), BridgeError> {
        let response = self
            .authorize(self.http.put(url))
            .json(&CommandBody { value })
            .send()
            .await
            .map_err(HubHttpError::from)?;
        let status = response.status();
        if !status.is_success() {
            return Err(HubHttpError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            }
            .into());
        }
        tracing::debug!(status = status.as_u16(), "command accepted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};
    use std::time::Duration;

    use axum::extract::State;
    use axum::http::{HeaderMap, StatusCode as AxumStatus, header};
    use axum::routing::{get, put};
    use axum::{Json, Router};
    use hubkit_domain::error::MalformedResponseError;
    use serde_json::{Value, json};

    use super::*;
    use crate::test_server::spawn;

    #[derive(Clone, Default)]
    struct Recorded {
        bodies: Arc<Mutex<Vec<Value>>>,
        authorization: Arc<Mutex<Option<String>>>,
    }

    async fn record(
        State(recorded): State<Recorded>,
        headers: HeaderMap,
        Json(body): Json<Value>,
    ) -> Json<Value> {
        *recorded.authorization.lock().unwrap() = headers
            .get(header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string);
        recorded.bodies.lock().unwrap().push(body);
        Json(json!({"status": "ok"}))
    }

    async fn fake_hub(recorded: Recorded) -> String {
        let router = Router::new()
            .route(
                "/lamp/attributes/switch",
                get(|| async { Json(json!({"name": "switch", "currentValue": "on"})) }),
            )
            .route(
                "/lamp/attributes/level",
                get(|| async { Json(json!({"currentValue": 0})) }),
            )
            .route(
                "/lamp/attributes/hue",
                get(|| async { Json(json!({"name": "hue"})) }),
            )
            .route(
                "/lamp/attributes/saturation",
                get(|| async { "not json" }),
            )
            .route(
                "/lamp/attributes/broken",
                get(|| async { AxumStatus::INTERNAL_SERVER_ERROR }),
            )
            .route(
                "/lamp/attributes/slow",
                get(|| async {
                    tokio::time::sleep(Duration::from_secs(3)).await;
                    Json(json!({"currentValue": "late"}))
                }),
            )
            .route("/lamp/commands/setLevel", put(record))
            .route("/lamp/commands/on", put(record))
            .route(
                "/lamp/commands/off",
                put(|| async { AxumStatus::SERVICE_UNAVAILABLE }),
            )
            .with_state(recorded);
        spawn(router).await
    }

    fn client(token: &str, timeout_secs: u64) -> HttpHubClient {
        HttpHubClient::new(&HubConfig {
            access_token: token.to_string(),
            timeout_secs,
            ..HubConfig::default()
        })
        .unwrap()
    }

    #[tokio::test]
    async fn should_read_current_value() {
        let base = fake_hub(Recorded::default()).await;

        let value = client("", 5)
            .current_value(&format!("{base}/lamp/attributes/switch"))
            .await
            .unwrap();

        assert_eq!(value, HubValue::from("on"));
    }

    #[tokio::test]
    async fn should_accept_zero_as_current_value() {
        let base = fake_hub(Recorded::default()).await;

        let value = client("", 5)
            .current_value(&format!("{base}/lamp/attributes/level"))
            .await
            .unwrap();

        assert_eq!(value, HubValue::Number(0.0));
    }

    #[tokio::test]
    async fn should_report_missing_current_value_as_malformed() {
        let base = fake_hub(Recorded::default()).await;

        let err = client("", 5)
            .current_value(&format!("{base}/lamp/attributes/hue"))
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            BridgeError::MalformedResponse(MalformedResponseError::MissingCurrentValue)
        ));
    }

    #[tokio::test]
    async fn should_report_invalid_json_as_malformed() {
        let base = fake_hub(Recorded::default()).await;

        let err = client("", 5)
            .current_value(&format!("{base}/lamp/attributes/saturation"))
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            BridgeError::MalformedResponse(MalformedResponseError::InvalidJson(_))
        ));
    }

    #[tokio::test]
    async fn should_report_error_status_as_transport_error() {
        let base = fake_hub(Recorded::default()).await;

        let err = client("", 5)
            .current_value(&format!("{base}/lamp/attributes/broken"))
            .await
            .unwrap_err();

        assert!(matches!(err, BridgeError::Transport(_)));
    }

    #[tokio::test]
    async fn should_time_out_slow_reads() {
        let base = fake_hub(Recorded::default()).await;

        let err = client("", 1)
            .current_value(&format!("{base}/lamp/attributes/slow"))
            .await
            .unwrap_err();

        assert!(matches!(err, BridgeError::Transport(_)));
    }

    #[tokio::test]
    async fn should_put_command_value_with_bearer_token() {
        let recorded = Recorded::default();
        let base = fake_hub(recorded.clone()).await;

        client("secret", 5)
            .command(
                &format!("{base}/lamp/commands/setLevel"),
                Some(HubValue::Number(0.0)),
            )
            .await
            .unwrap();

        assert_eq!(*recorded.bodies.lock().unwrap(), vec![json!({"value": 0.0})]);
        assert_eq!(
            recorded.authorization.lock().unwrap().as_deref(),
            Some("Bearer secret")
        );
    }

    #[tokio::test]
    async fn should_put_empty_body_for_valueless_command() {
        let recorded = Recorded::default();
        let base = fake_hub(recorded.clone()).await;

        client("", 5)
            .command(&format!("{base}/lamp/commands/on"), None)
            .await
            .unwrap();

        assert_eq!(*recorded.bodies.lock().unwrap(), vec![json!({})]);
        assert_eq!(*recorded.authorization.lock().unwrap(), None);
    }

    #[tokio::test]
    async fn should_fail_command_on_error_status() {
        let base = fake_hub(Recorded::default()).await;

        let err = client("", 5)
            .command(&format!("{base}/lamp/commands/off"), None)
            .await
            .unwrap_err();

        assert!(matches!(err, BridgeError::Transport(_)));
    }

    #[tokio::test]
    async fn should_fail_command_when_hub_unreachable() {
        let err = client("", 1)
            .command("http://127.0.0.1:9/lamp/commands/on", None)
            .await
            .unwrap_err();

        assert!(matches!(err, BridgeError::Transport(_)));
    }
}
