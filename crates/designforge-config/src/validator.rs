//! Configuration validation.

use crate::error::ConfigError;
use crate::schema::Config;

/// Provider ids the resolver table may name.
const KNOWN_PROVIDERS: [&str; 3] = ["google", "anthropic", "openai"];

/// Validation result.
#[derive(Debug, Default)]
pub struct ValidationResult {
    pub errors: Vec<ValidationError>,
    pub warnings: Vec<ValidationWarning>,
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn add_error(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    pub fn add_warning(&mut self, warning: ValidationWarning) {
        self.warnings.push(warning);
    }

    /// First error as a [`ConfigError`], if any.
    pub fn into_error(self) -> Option<ConfigError> {
        self.errors.into_iter().next().map(|e| ConfigError::InvalidValue {
            field: e.path,
            message: e.message,
        })
    }
}

/// A validation error.
#[derive(Debug)]
pub struct ValidationError {
    pub path: String,
    pub message: String,
}

impl ValidationError {
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

/// A validation warning.
#[derive(Debug)]
pub struct ValidationWarning {
    pub path: String,
    pub message: String,
}

impl ValidationWarning {
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

/// Configuration validator.
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate the configuration.
    pub fn validate(config: &Config) -> ValidationResult {
        let mut result = ValidationResult::default();

        Self::validate_server(config, &mut result);
        Self::validate_providers(config, &mut result);
        Self::validate_gemini(config, &mut result);
        Self::validate_http(config, &mut result);
        Self::validate_session(config, &mut result);
        Self::validate_resolver(config, &mut result);

        result
    }

    fn validate_server(config: &Config, result: &mut ValidationResult) {
        if config.server.port == 0 {
            result.add_error(ValidationError::new("server.port", "Port cannot be 0"));
        }

        if config.server.host.is_empty() {
            result.add_error(ValidationError::new("server.host", "Host cannot be empty"));
        }

        if !is_http_url(&config.server.gemini_base_url) {
            result.add_error(ValidationError::new(
                "server.gemini_base_url",
                "gemini_base_url must start with http:// or https://",
            ));
        }

        if config.server.body_limit_mb == 0 {
            result.add_error(ValidationError::new(
                "server.body_limit_mb",
                "body_limit_mb must be greater than 0",
            ));
        }
    }

    fn validate_providers(config: &Config, result: &mut ValidationResult) {
        for (name, provider) in &config.providers {
            if !KNOWN_PROVIDERS.contains(&name.as_str()) {
                result.add_warning(ValidationWarning::new(
                    format!("providers.{}", name),
                    format!("Unknown provider, valid values: {:?}", KNOWN_PROVIDERS),
                ));
            }

            if provider.api_key.as_deref().is_none_or(str::is_empty) {
                result.add_warning(ValidationWarning::new(
                    format!("providers.{}.api_key", name),
                    "API key is not set, calls to this provider will be rejected",
                ));
            }

            if let Some(ref url) = provider.base_url {
                if !is_http_url(url) {
                    result.add_error(ValidationError::new(
                        format!("providers.{}.base_url", name),
                        "base_url must start with http:// or https://",
                    ));
                }
            }
        }
    }

    fn validate_gemini(config: &Config, result: &mut ValidationResult) {
        if !is_http_url(&config.gemini.relay_url) {
            result.add_error(ValidationError::new(
                "gemini.relay_url",
                "relay_url must start with http:// or https://",
            ));
        }
    }

    fn validate_http(config: &Config, result: &mut ValidationResult) {
        if config.http.timeout_seconds == 0 {
            result.add_error(ValidationError::new(
                "http.timeout_seconds",
                "timeout_seconds must be greater than 0",
            ));
        }

        if config.http.timeout_seconds > 600 {
            result.add_warning(ValidationWarning::new(
                "http.timeout_seconds",
                "timeout_seconds is very high (>600), a stalled vendor call will block the session",
            ));
        }
    }

    fn validate_session(config: &Config, result: &mut ValidationResult) {
        if config.session.design_count == 0 {
            result.add_error(ValidationError::new(
                "session.design_count",
                "design_count must be greater than 0",
            ));
        }

        if config.session.design_count > 10 {
            result.add_warning(ValidationWarning::new(
                "session.design_count",
                "design_count is high (>10), each design is a separate vendor call",
            ));
        }
    }

    fn validate_resolver(config: &Config, result: &mut ValidationResult) {
        for (i, rule) in config.resolver.rules.iter().enumerate() {
            if rule.token.trim().is_empty() {
                result.add_warning(ValidationWarning::new(
                    format!("resolver.rules[{}].token", i),
                    "Empty token never matches and is ignored",
                ));
            }

            if !KNOWN_PROVIDERS.contains(&rule.provider.to_lowercase().as_str()) {
                result.add_error(ValidationError::new(
                    format!("resolver.rules[{}].provider", i),
                    format!(
                        "Unknown provider '{}', valid values: {:?}",
                        rule.provider, KNOWN_PROVIDERS
                    ),
                ));
            }
        }
    }
}

fn is_http_url(url: &str) -> bool {
    url.starts_with("http://") || url.starts_with("https://")
}

#[cfg(test)]
#[path = "validator_tests.rs"]
mod tests;
