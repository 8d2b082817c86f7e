//! Per-provider API keys.

use std::collections::HashMap;

use designforge_protocols::ProviderId;

/// API keys injected from settings. Empty keys count as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    keys: HashMap<ProviderId, String>,
}

impl Credentials {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, provider: ProviderId, key: impl Into<String>) -> Self {
        self.set(provider, key);
        self
    }

    pub fn set(&mut self, provider: ProviderId, key: impl Into<String>) {
        let key = key.into();
        if key.trim().is_empty() {
            self.keys.remove(&provider);
        } else {
            self.keys.insert(provider, key);
        }
    }

    pub fn get(&self, provider: ProviderId) -> Option<&str> {
        self.keys.get(&provider).map(String::as_str)
    }

    pub fn contains(&self, provider: ProviderId) -> bool {
        self.keys.contains_key(&provider)
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_key_is_absent() {
        let creds = Credentials::new()
            .with(ProviderId::Google, "g-key")
            .with(ProviderId::OpenAi, "  ");
        assert_eq!(creds.get(ProviderId::Google), Some("g-key"));
        assert!(!creds.contains(ProviderId::OpenAi));
        assert!(creds.get(ProviderId::Anthropic).is_none());
    }

    #[test]
    fn test_set_empty_removes() {
        let mut creds = Credentials::new().with(ProviderId::Anthropic, "sk-ant");
        creds.set(ProviderId::Anthropic, "");
        assert!(creds.is_empty());
    }
}
