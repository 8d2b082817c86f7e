//! # DesignForge Provider - Gemini
//!
//! Google Gemini design provider. Reaches the vendor either through the
//! DesignForge relay server or directly.

mod client;
mod models;
mod provider;
mod relay;
mod types;

pub use client::{GeminiClient, DEFAULT_BASE_URL};
pub use models::gemini_models;
pub use provider::{GeminiProvider, GeminiTransport};
pub use relay::{RelayClient, DEFAULT_RELAY_URL};
pub use types::*;
