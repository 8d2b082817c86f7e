//! HTTP route definitions.

use std::sync::Arc;
use std::time::Duration;

use axum::{
    extract::DefaultBodyLimit,
    http::{header, Method},
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;

use crate::handlers::{analyze, generate, health};
use crate::state::AppState;

/// Default request body limit, large enough for uploaded screenshots.
pub const DEFAULT_BODY_LIMIT_MB: usize = 50;

const PREFLIGHT_MAX_AGE: Duration = Duration::from_secs(86_400);

fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT, header::AUTHORIZATION])
        .max_age(PREFLIGHT_MAX_AGE)
}

/// Build the relay router.
///
/// ```text
/// /api
///   GET  /api/health
///   POST /api/analyze
///   POST /api/generate
/// ```
pub fn create_router(state: Arc<AppState>, body_limit_mb: usize) -> Router {
    let api_routes = Router::new()
        .route("/health", get(health))
        .route("/analyze", post(analyze))
        .route("/generate", post(generate))
        .with_state(state);

    Router::new()
        .nest("/api", api_routes)
        // The Json extractor has its own 2 MB cap; the tower layer enforces the real limit.
        .layer(DefaultBodyLimit::disable())
        .layer(RequestBodyLimitLayer::new(body_limit_mb * 1024 * 1024))
        .layer(cors_layer())
        .layer(TraceLayer::new_for_http())
}

#[cfg(test)]
#[path = "routes_tests.rs"]
mod tests;
