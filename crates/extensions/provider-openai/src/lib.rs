//! OpenAI design provider for DesignForge.

mod api;
mod models;
mod provider;

pub use models::openai_models;
pub use provider::{OpenAIProvider, DEFAULT_API_URL};
