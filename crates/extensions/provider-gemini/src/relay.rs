//! Client for the DesignForge relay server.

use reqwest::Client;
use serde_json::{json, Value};
use tracing::{debug, warn};

use designforge_core::http::{build_client, decode, read_body, transport_error, DEFAULT_TIMEOUT_SECS};
use designforge_protocols::{ImageData, ProviderError};

pub const DEFAULT_RELAY_URL: &str = "http://localhost:3001/api";

/// Relay client. Every call is preceded by a health check.
#[derive(Debug, Clone)]
pub struct RelayClient {
    client: Client,
    base_url: String,
    timeout_secs: u64,
}

impl RelayClient {
    pub fn new(base_url: impl Into<String>, timeout_secs: u64) -> Self {
        Self {
            client: build_client(timeout_secs),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            timeout_secs,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `GET /health`. Any failure means the relay is unreachable.
    pub async fn health(&self) -> Result<(), ProviderError> {
        let url = format!("{}/health", self.base_url);
        match self.client.get(&url).send().await {
            Ok(response) if response.status().is_success() => Ok(()),
            Ok(response) => {
                warn!(status = response.status().as_u16(), "Relay health check failed");
                Err(ProviderError::BackendUnreachable(format!(
                    "health check returned {}",
                    response.status()
                )))
            }
            Err(e) => {
                warn!("Relay health check failed: {}", e);
                Err(ProviderError::BackendUnreachable(e.to_string()))
            }
        }
    }

    /// `POST /analyze` with the image as a data URL.
    pub async fn analyze(
        &self,
        image: &ImageData,
        model_id: &str,
        api_key: &str,
    ) -> Result<Value, ProviderError> {
        self.health().await?;
        let body = json!({
            "imageData": image.to_data_url(),
            "modelId": model_id,
            "apiKey": api_key,
        });
        self.post("analyze", &body).await
    }

    /// `POST /generate` with the analysis text.
    pub async fn generate(
        &self,
        analysis: &str,
        prompt: &str,
        count: usize,
        model_id: &str,
        api_key: &str,
    ) -> Result<Value, ProviderError> {
        self.health().await?;
        let body = json!({
            "analysisResult": analysis,
            "prompt": prompt,
            "count": count,
            "modelId": model_id,
            "apiKey": api_key,
        });
        self.post("generate", &body).await
    }

    async fn post(&self, route: &str, body: &Value) -> Result<Value, ProviderError> {
        let url = format!("{}/{}", self.base_url, route);
        debug!("Relay request: {}", url);

        let response = self
            .client
            .post(&url)
            .header("Accept", "application/json")
            .json(body)
            .send()
            .await
            .map_err(|e| transport_error(e, self.timeout_secs))?;

        let text = read_body(response, self.timeout_secs).await?;
        decode(&text)
    }
}

impl Default for RelayClient {
    fn default() -> Self {
        Self::new(DEFAULT_RELAY_URL, DEFAULT_TIMEOUT_SECS)
    }
}

#[cfg(test)]
#[path = "relay_tests.rs"]
mod tests;
