//! Anthropic provider implementation.

use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use designforge_core::designs::{build_analysis, collect_designs};
use designforge_core::http::{build_client, decode, read_body, transport_error, DEFAULT_TIMEOUT_SECS};
use designforge_core::prompts::{generation_prompt, ANALYZE_INSTRUCTION};
use designforge_protocols::{
    AnalysisResult, Design, DesignProvider, ImageData, ModelDescriptor, ProviderError, ProviderId,
};

use crate::api::{ApiContent, ApiMessage, ApiRequest, ApiResponse, ContentBlock, ImageSource};
use crate::models::claude_models;

pub const API_URL: &str = "https://api.anthropic.com/v1/messages";
pub const API_VERSION: &str = "2024-02-01";

const ANALYZE_MAX_TOKENS: u32 = 1000;
const GENERATE_MAX_TOKENS: u32 = 2000;

/// Anthropic design provider.
pub struct AnthropicProvider {
    client: Client,
    api_url: String,
    timeout_secs: u64,
    models: Vec<ModelDescriptor>,
}

impl AnthropicProvider {
    pub fn new() -> Self {
        Self {
            client: build_client(DEFAULT_TIMEOUT_SECS),
            api_url: API_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            models: claude_models(),
        }
    }

    /// Point at a compatible messages endpoint.
    pub fn with_base_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = api_url.into();
        self
    }

    pub fn with_timeout(mut self, timeout_secs: u64) -> Self {
        self.client = build_client(timeout_secs);
        self.timeout_secs = timeout_secs;
        self
    }

    fn analyze_request(&self, image: &ImageData, model_id: &str) -> ApiRequest {
        ApiRequest {
            model: model_id.to_string(),
            messages: vec![ApiMessage::user(ApiContent::Blocks(vec![
                ContentBlock::Text {
                    text: ANALYZE_INSTRUCTION.to_string(),
                },
                ContentBlock::Image {
                    source: ImageSource::base64(image.media_type.clone(), image.to_base64()),
                },
            ]))],
            max_tokens: ANALYZE_MAX_TOKENS,
        }
    }

    fn generate_request(&self, analysis: &str, prompt: &str, model_id: &str) -> ApiRequest {
        ApiRequest {
            model: model_id.to_string(),
            messages: vec![ApiMessage::user(ApiContent::Text(generation_prompt(
                analysis, prompt,
            )))],
            max_tokens: GENERATE_MAX_TOKENS,
        }
    }

    /// Send a request and return the text of the first text block.
    async fn send_request(
        &self,
        api_request: &ApiRequest,
        api_key: &str,
    ) -> Result<String, ProviderError> {
        let response = self
            .client
            .post(&self.api_url)
            .header("x-api-key", api_key)
            .header("anthropic-version", API_VERSION)
            .header("content-type", "application/json")
            .json(api_request)
            .send()
            .await
            .map_err(|e| transport_error(e, self.timeout_secs))?;

        let body = read_body(response, self.timeout_secs).await?;
        let api_response: ApiResponse = decode(&body)?;
        api_response
            .first_text()
            .map(String::from)
            .ok_or_else(|| ProviderError::parse("Anthropic response has no text block", body))
    }
}

impl Default for AnthropicProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DesignProvider for AnthropicProvider {
    fn id(&self) -> ProviderId {
        ProviderId::Anthropic
    }

    fn models(&self) -> &[ModelDescriptor] {
        &self.models
    }

    async fn analyze(
        &self,
        image: &ImageData,
        model_id: &str,
        api_key: &str,
    ) -> Result<AnalysisResult, ProviderError> {
        debug!("Anthropic analyze: model={}", model_id);

        let request = self.analyze_request(image, model_id);
        let text = self.send_request(&request, api_key).await?;
        Ok(build_analysis(ProviderId::Anthropic, text))
    }

    async fn generate(
        &self,
        analysis: &AnalysisResult,
        prompt: &str,
        count: usize,
        model_id: &str,
        api_key: &str,
    ) -> Result<Vec<Design>, ProviderError> {
        debug!("Anthropic generate: model={}, count={}", model_id, count);

        let request = self.generate_request(&analysis.description, prompt, model_id);
        let request = &request;
        collect_designs(count, prompt, move |_| self.send_request(request, api_key)).await
    }
}

#[cfg(test)]
#[path = "provider_tests.rs"]
mod tests;
