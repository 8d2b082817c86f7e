//! Relay error types.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use designforge_protocols::ProviderError;

#[derive(Debug, Error)]
pub enum RelayError {
    #[error("Missing required parameters")]
    MissingParameters,

    #[error("Invalid image data: expected a data URL")]
    InvalidImage,

    #[error("{0}")]
    Upstream(#[from] ProviderError),
}

impl RelayError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::MissingParameters | Self::InvalidImage => StatusCode::BAD_REQUEST,
            Self::Upstream(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message placed in the `error` field. Vendor failures carry the
    /// vendor's own message rather than the adapter's wording.
    fn message(&self) -> String {
        match self {
            Self::Upstream(ProviderError::ApiError { message, .. })
            | Self::Upstream(ProviderError::AuthenticationFailed(message))
            | Self::Upstream(ProviderError::RateLimited(message)) => message.clone(),
            other => other.to_string(),
        }
    }
}

impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        (self.status(), Json(json!({ "error": self.message() }))).into_response()
    }
}
