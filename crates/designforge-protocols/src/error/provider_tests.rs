use super::*;

#[test]
fn test_model_not_found_display() {
    let err = ProviderError::ModelNotFound("llama-3".to_string());
    assert_eq!(err.to_string(), "Invalid model selected: llama-3");
}

#[test]
fn test_missing_credential_uppercases_provider() {
    let err = ProviderError::MissingCredential(ProviderId::Anthropic);
    assert_eq!(
        err.to_string(),
        "Please set up your ANTHROPIC API key in settings"
    );
}

#[test]
fn test_api_error_display() {
    let err = ProviderError::ApiError {
        status: 500,
        message: "Internal Server Error".to_string(),
    };
    assert!(err.to_string().contains("500"));
    assert!(err.to_string().contains("Internal Server Error"));
}

#[test]
fn test_backend_unreachable_display() {
    let err = ProviderError::BackendUnreachable("connection refused".to_string());
    assert!(err.to_string().starts_with("Cannot connect to backend server"));
}

#[test]
fn test_timeout_display() {
    let err = ProviderError::Timeout(60);
    assert!(err.to_string().contains("60"));
}

#[test]
fn test_from_api_response_auth_failed() {
    let err = ProviderError::from_api_response(401, "Invalid API key".to_string());
    assert!(matches!(err, ProviderError::AuthenticationFailed(_)));

    let err = ProviderError::from_api_response(403, "Forbidden".to_string());
    assert!(matches!(err, ProviderError::AuthenticationFailed(_)));
}

#[test]
fn test_from_api_response_rate_limited() {
    let err = ProviderError::from_api_response(429, "Rate limit exceeded".to_string());
    assert!(matches!(err, ProviderError::RateLimited(_)));
}

#[test]
fn test_from_api_response_generic_error() {
    let err = ProviderError::from_api_response(500, "Internal Server Error".to_string());
    assert!(matches!(err, ProviderError::ApiError { status: 500, .. }));
}

#[test]
fn test_kind_classification() {
    assert_eq!(
        ProviderError::ModelNotFound("x".into()).kind(),
        ErrorKind::Configuration
    );
    assert_eq!(
        ProviderError::MissingCredential(ProviderId::Google).kind(),
        ErrorKind::Configuration
    );
    assert_eq!(
        ProviderError::InFlight("Analysis".into()).kind(),
        ErrorKind::Configuration
    );
    assert_eq!(
        ProviderError::from_api_response(401, "no".into()).kind(),
        ErrorKind::Vendor
    );
    assert_eq!(
        ProviderError::from_api_response(429, "slow down".into()).kind(),
        ErrorKind::Vendor
    );
    assert_eq!(
        ProviderError::Network("refused".into()).kind(),
        ErrorKind::Network
    );
    assert_eq!(
        ProviderError::BackendUnreachable("refused".into()).kind(),
        ErrorKind::Network
    );
    assert_eq!(ProviderError::Timeout(60).kind(), ErrorKind::Timeout);
    assert_eq!(
        ProviderError::parse("no json", "hello").kind(),
        ErrorKind::Parse
    );
}

#[test]
fn test_parse_keeps_raw_output() {
    let err = ProviderError::parse("no JSON object found", "just prose");
    assert_eq!(err.raw_output(), Some("just prose"));
    assert!(ProviderError::Timeout(1).raw_output().is_none());
}
