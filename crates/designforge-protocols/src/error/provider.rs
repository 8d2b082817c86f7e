//! Provider and workflow errors.

use thiserror::Error;

use crate::provider::ProviderId;

/// Coarse classification of a [`ProviderError`].
///
/// Every failure surfaced to the session falls into exactly one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Missing credential, unknown model, unmet precondition. No network I/O happened.
    Configuration,
    /// Non-2xx reply from a vendor or the relay.
    Vendor,
    /// Transport-level failure.
    Network,
    /// The fixed time bound was exceeded.
    Timeout,
    /// 2xx reply whose payload could not be extracted.
    Parse,
}

#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("Invalid model selected: {0}")]
    ModelNotFound(String),

    #[error("Please set up your {} API key in settings", .0.as_str().to_uppercase())]
    MissingCredential(ProviderId),

    #[error("Provider {0} not supported yet")]
    NotSupported(ProviderId),

    #[error("{0}")]
    InvalidRequest(String),

    #[error("{0} already in progress")]
    InFlight(String),

    #[error("API error: {status} - {message}")]
    ApiError { status: u16, message: String },

    #[error("Authentication failed: {0}")]
    AuthenticationFailed(String),

    #[error("Rate limited: {0}")]
    RateLimited(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Cannot connect to backend server. Is it running? ({0})")]
    BackendUnreachable(String),

    #[error("Timeout after {0} seconds")]
    Timeout(u64),

    #[error("Failed to parse generated design data: {reason}")]
    Parse { reason: String, raw: String },
}

impl ProviderError {
    /// Map a non-success vendor status and its extracted message.
    pub fn from_api_response(status: u16, message: String) -> Self {
        match status {
            401 | 403 => Self::AuthenticationFailed(message),
            429 => Self::RateLimited(message),
            _ => Self::ApiError { status, message },
        }
    }

    /// Build a parse failure that keeps the offending text for diagnostics.
    pub fn parse(reason: impl Into<String>, raw: impl Into<String>) -> Self {
        Self::Parse {
            reason: reason.into(),
            raw: raw.into(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::ModelNotFound(_)
            | Self::MissingCredential(_)
            | Self::NotSupported(_)
            | Self::InvalidRequest(_)
            | Self::InFlight(_) => ErrorKind::Configuration,
            Self::ApiError { .. } | Self::AuthenticationFailed(_) | Self::RateLimited(_) => {
                ErrorKind::Vendor
            }
            Self::Network(_) | Self::BackendUnreachable(_) => ErrorKind::Network,
            Self::Timeout(_) => ErrorKind::Timeout,
            Self::Parse { .. } => ErrorKind::Parse,
        }
    }

    /// Raw model output retained by a parse failure.
    pub fn raw_output(&self) -> Option<&str> {
        match self {
            Self::Parse { raw, .. } => Some(raw),
            _ => None,
        }
    }
}

#[cfg(test)]
#[path = "provider_tests.rs"]
mod tests;
