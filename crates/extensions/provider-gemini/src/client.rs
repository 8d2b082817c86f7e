//! Gemini API client.

use reqwest::Client;
use serde_json::Value;
use tracing::debug;

use designforge_core::http::{build_client, decode, read_body, transport_error, DEFAULT_TIMEOUT_SECS};
use designforge_protocols::ProviderError;

use crate::types::GenerateContentRequest;

pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Direct client for `models/{model}:generateContent`.
#[derive(Debug, Clone)]
pub struct GeminiClient {
    client: Client,
    base_url: String,
    timeout_secs: u64,
}

impl GeminiClient {
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

    /// Send a request and return the vendor body untouched.
    pub async fn generate_content(
        &self,
        model: &str,
        api_key: &str,
        request: &GenerateContentRequest,
    ) -> Result<Value, ProviderError> {
        let url = format!("{}/models/{}:generateContent", self.base_url, model);

        debug!("Gemini generate_content: model={}", model);

        let response = self
            .client
            .post(&url)
            .query(&[("key", api_key)])
            .json(request)
            .send()
            .await
            .map_err(|e| transport_error(e, self.timeout_secs))?;

        let body = read_body(response, self.timeout_secs).await?;
        decode(&body)
    }
}

impl Default for GeminiClient {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS)
    }
}

#[cfg(test)]
#[path = "client_tests.rs"]
mod tests;
