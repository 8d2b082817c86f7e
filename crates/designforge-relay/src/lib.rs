//! # DesignForge Relay
//!
//! A small HTTP server that forwards analyze and generate requests to the
//! Gemini `generateContent` endpoint, so browser-side callers never talk to
//! the vendor directly.
//!
//! ```text
//! GET  /api/health    - liveness, {"status":"ok"}
//! POST /api/analyze   - {imageData, modelId, apiKey}
//! POST /api/generate  - {analysisResult, prompt, count, modelId, apiKey}
//! ```
//!
//! Vendor replies are passed through unchanged. Failures come back as
//! `{"error": "..."}`.

pub mod error;
pub mod handlers;
pub mod routes;
pub mod server;
pub mod state;

pub use error::RelayError;
pub use handlers::{AnalyzeRequest, GenerateRequest};
pub use routes::create_router;
pub use server::{RelayConfig, RelayServer};
pub use state::AppState;
