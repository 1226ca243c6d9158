//! HTTP client for the backend service.
//!
//! One generic request primitive plus fixed-shape wrappers for each
//! endpoint. No caching, no retry: every call is a single round trip whose
//! outcome maps onto [`ApiError`].

use reqwest::header::CONTENT_TYPE;
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::debug;

use crate::config::ClientConfig;
use crate::error::ApiError;
use crate::weather::WeatherSnapshot;

/// Reply to a conversation message.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct ChatReply {
    pub response: String,
}

/// Health probe response. The body shape is informational only; any
/// successfully decoded answer counts as healthy.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct HealthReply {
    #[serde(default)]
    pub status: String,
}

/// Typed client over the backend's JSON-over-HTTP contract.
pub struct ApiClient {
    http: reqwest::Client,
    config: ClientConfig,
}

impl ApiClient {
    pub fn new(config: ClientConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Generic request primitive every endpoint goes through.
    ///
    /// Builds the call against the configured base URL, attaches the JSON
    /// content type and serializes `body` when present. Transport failures
    /// become [`ApiError::Network`]; a non-success status becomes
    /// [`ApiError::Http`] without reading the body; a success body that is
    /// not valid JSON becomes [`ApiError::Decode`].
    pub async fn request(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
    ) -> Result<Value, ApiError> {
        let url = format!("{}{}", self.config.base_url, path);
        debug!(%method, %url, "api request");

        let mut builder = self
            .http
            .request(method, &url)
            .header(CONTENT_TYPE, "application/json");
        if let Some(body) = &body {
            builder = builder.json(body);
        }

        let response = builder.send().await.map_err(ApiError::Network)?;
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Http(status.as_u16()));
        }

        response.json::<Value>().await.map_err(ApiError::decode)
    }

    async fn post<T: DeserializeOwned>(&self, path: &str, body: Value) -> Result<T, ApiError> {
        let value = self.request(Method::POST, path, Some(body)).await?;
        serde_json::from_value(value).map_err(ApiError::decode)
    }

    /// Send a conversation message and return the assistant's reply.
    pub async fn send_chat_message(&self, message: &str) -> Result<ChatReply, ApiError> {
        self.post(
            "/chat",
            json!({ "message": message, "user_id": self.config.user_id }),
        )
        .await
    }

    /// Look up weather for a coordinate pair.
    pub async fn weather_by_coords(&self, lat: f64, lon: f64) -> Result<WeatherSnapshot, ApiError> {
        self.post("/weather", json!({ "lat": lat, "lon": lon })).await
    }

    /// Look up weather for a location name.
    pub async fn weather_by_city(&self, city: &str) -> Result<WeatherSnapshot, ApiError> {
        self.post("/weather/city", json!({ "city": city })).await
    }

    /// Probe the backend health endpoint.
    pub async fn check_health(&self) -> Result<HealthReply, ApiError> {
        let value = self.request(Method::GET, "/health", None).await?;
        serde_json::from_value(value).map_err(ApiError::decode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chat_reply_decodes() {
        let reply: ChatReply = serde_json::from_value(json!({ "response": "привет" })).unwrap();
        assert_eq!(reply.response, "привет");
    }

    #[test]
    fn test_health_reply_tolerates_missing_status() {
        let reply: HealthReply = serde_json::from_value(json!({})).unwrap();
        assert_eq!(reply.status, "");

        let reply: HealthReply =
            serde_json::from_value(json!({ "status": "healthy" })).unwrap();
        assert_eq!(reply.status, "healthy");
    }

    #[tokio::test]
    async fn test_unreachable_host_is_network_error() {
        // Port 0 is never connectable; the failure must surface as Network,
        // not panic or hang.
        let client = ApiClient::new(ClientConfig::new("http://127.0.0.1:0/api", "u"));
        let err = client.check_health().await.unwrap_err();
        assert!(matches!(err, ApiError::Network(_)));
    }
}
