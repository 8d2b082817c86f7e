//! Design provider trait definition.

use async_trait::async_trait;

use super::{ModelDescriptor, ProviderId};
use crate::error::ProviderError;
use crate::types::{AnalysisResult, Design, ImageData};

/// Uniform contract implemented by each vendor adapter.
///
/// Adapters hold no session state; credentials are injected per call.
#[async_trait]
pub trait DesignProvider: Send + Sync {
    /// Returns the provider this adapter talks to.
    fn id(&self) -> ProviderId;

    /// Returns the static model catalog.
    fn models(&self) -> &[ModelDescriptor];

    /// Describe an uploaded design image.
    async fn analyze(
        &self,
        image: &ImageData,
        model_id: &str,
        api_key: &str,
    ) -> Result<AnalysisResult, ProviderError>;

    /// Produce exactly `count` designs, one vendor call each, in order.
    ///
    /// The first failing call aborts the rest and nothing is returned.
    async fn generate(
        &self,
        analysis: &AnalysisResult,
        prompt: &str,
        count: usize,
        model_id: &str,
        api_key: &str,
    ) -> Result<Vec<Design>, ProviderError>;
}
