//! Gemini design provider implementation.

use async_trait::async_trait;
use serde_json::Value;
use tracing::debug;

use designforge_core::designs::{build_analysis, collect_designs};
use designforge_core::prompts::{generation_prompt, ANALYZE_INSTRUCTION};
use designforge_protocols::{
    AnalysisResult, Design, DesignProvider, ImageData, ModelDescriptor, ProviderError, ProviderId,
};

use crate::client::GeminiClient;
use crate::models::gemini_models;
use crate::relay::RelayClient;
use crate::types::{extract_text, GenerateContentRequest};

/// How requests reach the vendor.
#[derive(Debug, Clone)]
pub enum GeminiTransport {
    /// Through the relay server, with a health check before each call.
    Relay(RelayClient),
    /// Straight to the vendor endpoint.
    Direct(GeminiClient),
}

/// Gemini design provider.
pub struct GeminiProvider {
    transport: GeminiTransport,
    models: Vec<ModelDescriptor>,
}

impl GeminiProvider {
    pub fn new(transport: GeminiTransport) -> Self {
        Self {
            transport,
            models: gemini_models(),
        }
    }

    pub fn relay(base_url: impl Into<String>, timeout_secs: u64) -> Self {
        Self::new(GeminiTransport::Relay(RelayClient::new(base_url, timeout_secs)))
    }

    pub fn direct(base_url: impl Into<String>, timeout_secs: u64) -> Self {
        Self::new(GeminiTransport::Direct(GeminiClient::new(base_url, timeout_secs)))
    }

    pub fn transport(&self) -> &GeminiTransport {
        &self.transport
    }

    async fn request_analysis(
        &self,
        image: &ImageData,
        model_id: &str,
        api_key: &str,
    ) -> Result<Value, ProviderError> {
        match &self.transport {
            GeminiTransport::Relay(relay) => relay.analyze(image, model_id, api_key).await,
            GeminiTransport::Direct(client) => {
                let request = GenerateContentRequest::multimodal(
                    ANALYZE_INSTRUCTION,
                    image.media_type.clone(),
                    image.to_base64(),
                );
                client.generate_content(model_id, api_key, &request).await
            }
        }
    }

    async fn request_design(
        &self,
        analysis: &str,
        prompt: &str,
        model_id: &str,
        api_key: &str,
    ) -> Result<Value, ProviderError> {
        match &self.transport {
            GeminiTransport::Relay(relay) => {
                relay.generate(analysis, prompt, 1, model_id, api_key).await
            }
            GeminiTransport::Direct(client) => {
                let request = GenerateContentRequest::text(generation_prompt(analysis, prompt));
                client.generate_content(model_id, api_key, &request).await
            }
        }
    }
}

impl Default for GeminiProvider {
    fn default() -> Self {
        Self::new(GeminiTransport::Relay(RelayClient::default()))
    }
}

#[async_trait]
impl DesignProvider for GeminiProvider {
    fn id(&self) -> ProviderId {
        ProviderId::Google
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
        debug!("Gemini analyze: model={}", model_id);

        let body = self.request_analysis(image, model_id, api_key).await?;
        let text = extract_text(&body)?;
        Ok(build_analysis(ProviderId::Google, text))
    }

    async fn generate(
        &self,
        analysis: &AnalysisResult,
        prompt: &str,
        count: usize,
        model_id: &str,
        api_key: &str,
    ) -> Result<Vec<Design>, ProviderError> {
        debug!("Gemini generate: model={}, count={}", model_id, count);

        let description = analysis.description.as_str();
        collect_designs(count, prompt, move |_| async move {
            let body = self
                .request_design(description, prompt, model_id, api_key)
                .await?;
            extract_text(&body)
        })
        .await
    }
}

#[cfg(test)]
#[path = "provider_tests.rs"]
mod tests;
