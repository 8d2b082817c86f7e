//! HTTP plumbing shared by the vendor adapters.

use std::time::Duration;

use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::warn;

use designforge_protocols::ProviderError;

/// Upper bound for a single vendor or relay call.
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Build a client whose requests abort after `timeout_secs`.
pub fn build_client(timeout_secs: u64) -> Client {
    Client::builder()
        .connect_timeout(Duration::from_secs(10))
        .timeout(Duration::from_secs(timeout_secs))
        .build()
        .unwrap_or_else(|e| {
            warn!("Failed to build HTTP client with timeout, using defaults: {}", e);
            Client::new()
        })
}

/// Classify a transport failure.
pub fn transport_error(err: reqwest::Error, timeout_secs: u64) -> ProviderError {
    if err.is_timeout() {
        ProviderError::Timeout(timeout_secs)
    } else {
        ProviderError::Network(err.to_string())
    }
}

/// Pull a message out of an error body.
///
/// Understands `{"error": {"message": ...}}` (vendors) and `{"error": "..."}`
/// (relay); otherwise falls back to the HTTP status.
pub fn error_message(status: u16, body: &str) -> String {
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|v| {
            v["error"]["message"]
                .as_str()
                .or_else(|| v["error"].as_str())
                .map(String::from)
        })
        .unwrap_or_else(|| format!("HTTP error! status: {}", status))
}

/// Read the body of a response, turning non-2xx statuses into vendor errors.
pub async fn read_body(response: Response, timeout_secs: u64) -> Result<String, ProviderError> {
    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| transport_error(e, timeout_secs))?;

    if !status.is_success() {
        let message = error_message(status.as_u16(), &body);
        warn!(status = status.as_u16(), "Vendor error: {}", message);
        return Err(ProviderError::from_api_response(status.as_u16(), message));
    }

    Ok(body)
}

/// Decode a 2xx body; a shape mismatch is a parse failure.
pub fn decode<T: DeserializeOwned>(body: &str) -> Result<T, ProviderError> {
    serde_json::from_str(body)
        .map_err(|e| ProviderError::parse(format!("unexpected response shape: {}", e), body))
}

#[cfg(test)]
#[path = "http_tests.rs"]
mod tests;
