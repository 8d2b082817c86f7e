//! OpenAI provider implementation.

use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use designforge_core::designs::{build_analysis, collect_designs};
use designforge_core::http::{build_client, decode, read_body, transport_error, DEFAULT_TIMEOUT_SECS};
use designforge_core::prompts::{generation_prompt, ANALYZE_INSTRUCTION};
use designforge_protocols::{
    AnalysisResult, Design, DesignProvider, ImageData, ModelDescriptor, ProviderError, ProviderId,
};

use crate::api::{ApiMessage, ApiRequest, ApiResponse, ContentPart, ImageUrl, MessageContent};
use crate::models::openai_models;

pub const DEFAULT_API_URL: &str = "https://api.openai.com/v1/chat/completions";

/// OpenAI design provider.
pub struct OpenAIProvider {
    client: Client,
    api_url: String,
    timeout_secs: u64,
    models: Vec<ModelDescriptor>,
}

impl OpenAIProvider {
    pub fn new() -> Self {
        Self {
            client: build_client(DEFAULT_TIMEOUT_SECS),
            api_url: DEFAULT_API_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            models: openai_models(),
        }
    }

    /// Use a custom API URL (for OpenAI-compatible APIs).
    pub fn with_url(mut self, api_url: impl Into<String>) -> Self {
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
            messages: vec![ApiMessage::user(MessageContent::Parts(vec![
                ContentPart::Text {
                    text: ANALYZE_INSTRUCTION.to_string(),
                },
                ContentPart::ImageUrl {
                    image_url: ImageUrl {
                        url: image.to_data_url(),
                    },
                },
            ]))],
        }
    }

    fn generate_request(&self, analysis: &str, prompt: &str, model_id: &str) -> ApiRequest {
        ApiRequest {
            model: model_id.to_string(),
            messages: vec![ApiMessage::user(MessageContent::Text(generation_prompt(
                analysis, prompt,
            )))],
        }
    }

    async fn send_request(
        &self,
        api_request: &ApiRequest,
        api_key: &str,
    ) -> Result<String, ProviderError> {
        let response = self
            .client
            .post(&self.api_url)
            .bearer_auth(api_key)
            .header("Content-Type", "application/json")
            .json(api_request)
            .send()
            .await
            .map_err(|e| transport_error(e, self.timeout_secs))?;

        let body = read_body(response, self.timeout_secs).await?;
        let api_response: ApiResponse = decode(&body)?;
        api_response
            .first_content()
            .map(String::from)
            .ok_or_else(|| ProviderError::parse("OpenAI response has no message content", body))
    }
}

impl Default for OpenAIProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DesignProvider for OpenAIProvider {
    fn id(&self) -> ProviderId {
        ProviderId::OpenAi
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
        debug!("OpenAI analyze: model={}", model_id);

        let request = self.analyze_request(image, model_id);
        let text = self.send_request(&request, api_key).await?;
        Ok(build_analysis(ProviderId::OpenAi, text))
    }

    async fn generate(
        &self,
        analysis: &AnalysisResult,
        prompt: &str,
        count: usize,
        model_id: &str,
        api_key: &str,
    ) -> Result<Vec<Design>, ProviderError> {
        debug!("OpenAI generate: model={}, count={}", model_id, count);

        let request = self.generate_request(&analysis.description, prompt, model_id);
        let request = &request;
        collect_designs(count, prompt, move |_| self.send_request(request, api_key)).await
    }
}

#[cfg(test)]
#[path = "provider_tests.rs"]
mod tests;
