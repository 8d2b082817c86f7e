//! Application state.

use designforge_provider_gemini::GeminiClient;

/// State shared across relay handlers.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub gemini: GeminiClient,
}

impl AppState {
    pub fn new(gemini: GeminiClient) -> Self {
        Self { gemini }
    }
}
