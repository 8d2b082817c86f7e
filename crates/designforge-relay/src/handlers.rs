//! Relay handlers.

use std::sync::Arc;

use axum::{extract::State, Json};
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::{error, info};

use designforge_core::prompts::{generation_prompt, ANALYZE_INSTRUCTION};
use designforge_provider_gemini::GenerateContentRequest;

use crate::error::RelayError;
use crate::state::AppState;

const FALLBACK_MEDIA_TYPE: &str = "image/jpeg";

/// Body of `POST /api/analyze`.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeRequest {
    #[serde(default)]
    pub image_data: Option<String>,
    #[serde(default)]
    pub model_id: Option<String>,
    #[serde(default)]
    pub api_key: Option<String>,
}

/// Body of `POST /api/generate`.
///
/// `count` is accepted for compatibility; one vendor call is made per request.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRequest {
    #[serde(default)]
    pub analysis_result: Option<String>,
    #[serde(default)]
    pub prompt: Option<String>,
    #[serde(default)]
    pub count: Option<u32>,
    #[serde(default)]
    pub model_id: Option<String>,
    #[serde(default)]
    pub api_key: Option<String>,
}

/// Treat absent and empty strings alike.
fn required(field: Option<&String>) -> Result<&str, RelayError> {
    field
        .map(String::as_str)
        .filter(|value| !value.is_empty())
        .ok_or(RelayError::MissingParameters)
}

/// Split `data:{media};base64,{payload}` into media type and payload.
pub(crate) fn split_data_url(data_url: &str) -> Result<(&str, &str), RelayError> {
    let (header, payload) = data_url.split_once(',').ok_or(RelayError::InvalidImage)?;
    let media_type = header
        .strip_prefix("data:")
        .and_then(|rest| rest.split(';').next())
        .filter(|media| !media.is_empty())
        .unwrap_or(FALLBACK_MEDIA_TYPE);
    Ok((media_type, payload))
}

/// GET /api/health
pub async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

/// POST /api/analyze
pub async fn analyze(
    State(state): State<Arc<AppState>>,
    Json(req): Json<AnalyzeRequest>,
) -> Result<Json<Value>, RelayError> {
    let (image_data, model_id, api_key) = match (
        required(req.image_data.as_ref()),
        required(req.model_id.as_ref()),
        required(req.api_key.as_ref()),
    ) {
        (Ok(image), Ok(model), Ok(key)) => (image, model, key),
        _ => return Err(RelayError::MissingParameters),
    };

    info!("Analyzing image with model: {}", model_id);

    let (media_type, payload) = split_data_url(image_data)?;
    let request = GenerateContentRequest::multimodal(ANALYZE_INSTRUCTION, media_type, payload);

    let body = state
        .gemini
        .generate_content(model_id, api_key, &request)
        .await
        .inspect_err(|e| error!("Error in /api/analyze: {}", e))?;

    Ok(Json(body))
}

/// POST /api/generate
pub async fn generate(
    State(state): State<Arc<AppState>>,
    Json(req): Json<GenerateRequest>,
) -> Result<Json<Value>, RelayError> {
    let model_id = required(req.model_id.as_ref())?;
    let api_key = required(req.api_key.as_ref())?;

    info!(
        "Generating design with model: {} (count={})",
        model_id,
        req.count.unwrap_or(1)
    );

    let text = generation_prompt(
        req.analysis_result.as_deref().unwrap_or_default(),
        req.prompt.as_deref().unwrap_or_default(),
    );
    let request = GenerateContentRequest::text(text);

    let body = state
        .gemini
        .generate_content(model_id, api_key, &request)
        .await
        .inspect_err(|e| error!("Error in /api/generate: {}", e))?;

    Ok(Json(body))
}
