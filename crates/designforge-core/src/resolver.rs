//! Model id → provider inference.
//!
//! The vendor is never passed explicitly; it is inferred from the model id
//! chosen in configuration. Resolution is a case-insensitive substring match
//! over an ordered token table, first match wins.

use serde::{Deserialize, Serialize};
use tracing::debug;

use designforge_protocols::{ProviderError, ProviderId};

/// One entry of the resolver token table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolverRule {
    pub token: String,
    pub provider: ProviderId,
}

impl ResolverRule {
    pub fn new(token: impl Into<String>, provider: ProviderId) -> Self {
        Self {
            token: token.into().to_lowercase(),
            provider,
        }
    }
}

/// The built-in table: google, then anthropic, then openai.
///
/// `o1` and `o3` map to anthropic. These are OpenAI reasoning model names;
/// the mapping is kept as shipped and overridable through configuration.
pub fn default_rules() -> Vec<ResolverRule> {
    vec![
        ResolverRule::new("gemini", ProviderId::Google),
        ResolverRule::new("claude", ProviderId::Anthropic),
        ResolverRule::new("o1", ProviderId::Anthropic),
        ResolverRule::new("o3", ProviderId::Anthropic),
        ResolverRule::new("gpt", ProviderId::OpenAi),
    ]
}

/// Ordered token table resolver.
#[derive(Debug, Clone)]
pub struct ProviderResolver {
    rules: Vec<ResolverRule>,
}

impl ProviderResolver {
    /// Build from an explicit table. Empty tokens are ignored.
    pub fn new(rules: Vec<ResolverRule>) -> Self {
        let rules = rules
            .into_iter()
            .filter(|rule| !rule.token.is_empty())
            .map(|rule| ResolverRule::new(rule.token, rule.provider))
            .collect();
        Self { rules }
    }

    pub fn rules(&self) -> &[ResolverRule] {
        &self.rules
    }

    /// Resolve a model id to its provider.
    pub fn resolve(&self, model_id: &str) -> Result<ProviderId, ProviderError> {
        let lower = model_id.to_lowercase();
        let provider = self
            .rules
            .iter()
            .find(|rule| lower.contains(&rule.token))
            .map(|rule| rule.provider)
            .ok_or_else(|| ProviderError::ModelNotFound(model_id.to_string()))?;

        debug!(model = model_id, provider = %provider, "Resolved provider");
        Ok(provider)
    }
}

impl Default for ProviderResolver {
    fn default() -> Self {
        Self::new(default_rules())
    }
}

#[cfg(test)]
#[path = "resolver_tests.rs"]
mod tests;
