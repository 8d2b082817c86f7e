//! Anthropic Claude design provider for DesignForge.

mod api;
mod models;
mod provider;

pub use models::claude_models;
pub use provider::{AnthropicProvider, API_URL, API_VERSION};
