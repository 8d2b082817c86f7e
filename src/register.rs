//! Provider registration and session wiring for DesignForge.

use std::sync::Arc;

use tracing::{error, info};

use designforge_config::{Config, ConfigError, GeminiTransportKind};
use designforge_core::resolver::default_rules;
use designforge_core::{
    Credentials, KeyValueStore, ProviderRegistry, ProviderResolver, ResolverRule, SelectedModels,
    SessionController, Settings,
};
use designforge_protocols::{DesignProvider, ModelDescriptor, ProviderId};
use designforge_provider_anthropic::AnthropicProvider;
use designforge_provider_gemini::{GeminiProvider, DEFAULT_BASE_URL};
use designforge_provider_openai::OpenAIProvider;

fn provider_base_url(config: &Config, id: ProviderId) -> Option<&str> {
    config
        .providers
        .get(id.as_str())
        .and_then(|p| p.base_url.as_deref())
        .filter(|url| !url.is_empty())
}

/// Build the three vendor adapters from configuration.
pub(crate) fn build_providers(config: &Config) -> Vec<Arc<dyn DesignProvider>> {
    let timeout = config.http.timeout_seconds;

    let gemini = match config.gemini.transport {
        GeminiTransportKind::Relay => GeminiProvider::relay(&config.gemini.relay_url, timeout),
        GeminiTransportKind::Direct => GeminiProvider::direct(
            provider_base_url(config, ProviderId::Google).unwrap_or(DEFAULT_BASE_URL),
            timeout,
        ),
    };

    let mut anthropic = AnthropicProvider::new().with_timeout(timeout);
    if let Some(url) = provider_base_url(config, ProviderId::Anthropic) {
        anthropic = anthropic.with_base_url(url);
    }

    let mut openai = OpenAIProvider::new().with_timeout(timeout);
    if let Some(url) = provider_base_url(config, ProviderId::OpenAi) {
        openai = openai.with_url(url);
    }

    vec![Arc::new(gemini), Arc::new(anthropic), Arc::new(openai)]
}

/// Register every adapter, logging any that fail.
pub(crate) fn register_providers(registry: &ProviderRegistry, config: &Config) {
    for provider in build_providers(config) {
        let id = provider.id();
        match registry.register(provider) {
            Ok(()) => info!("Registered provider: {}", id),
            Err(e) => error!("Failed to register provider {}: {}", id, e),
        }
    }
}

/// Every selectable model with its owning provider.
pub(crate) fn all_models(config: &Config) -> Vec<(ProviderId, ModelDescriptor)> {
    let registry = ProviderRegistry::new();
    register_providers(&registry, config);
    registry.list_models()
}

/// Resolver from `[resolver]`, or the built-in table when none is configured.
pub(crate) fn build_resolver(config: &Config) -> Result<ProviderResolver, ConfigError> {
    if config.resolver.rules.is_empty() {
        return Ok(ProviderResolver::new(default_rules()));
    }

    let rules = config
        .resolver
        .rules
        .iter()
        .enumerate()
        .map(|(i, rule)| {
            rule.provider
                .parse::<ProviderId>()
                .map(|provider| ResolverRule::new(&rule.token, provider))
                .map_err(|message| ConfigError::InvalidValue {
                    field: format!("resolver.rules[{}].provider", i),
                    message,
                })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(ProviderResolver::new(rules))
}

/// Stored keys, with configured keys filling the gaps.
pub(crate) fn build_credentials(config: &Config, settings: &Settings) -> Credentials {
    let mut credentials = settings.credentials();
    for id in ProviderId::ALL {
        if credentials.contains(id) {
            continue;
        }
        if let Some(key) = config.providers.get(id.as_str()).and_then(|p| p.api_key.as_deref()) {
            credentials.set(id, key);
        }
    }
    credentials
}

/// Stored default models, with `[session]` models filling the gaps.
pub(crate) fn default_models(config: &Config, settings: &Settings) -> SelectedModels {
    let stored = settings.selected_models();
    SelectedModels {
        analysis: stored.analysis.or_else(|| config.session.analysis_model.clone()),
        generation: stored
            .generation
            .or_else(|| config.session.generation_model.clone()),
    }
}

/// A session ready to run: adapters registered, keys loaded, defaults selected.
pub(crate) fn build_session(
    config: &Config,
    settings: &Settings,
) -> Result<SessionController, ConfigError> {
    let registry = Arc::new(ProviderRegistry::new());
    register_providers(&registry, config);

    let session = SessionController::new(registry)
        .with_resolver(build_resolver(config)?)
        .with_credentials(build_credentials(config, settings))
        .with_design_count(config.session.design_count);
    session.apply_default_models(&default_models(config, settings));

    Ok(session)
}

/// Settings and favorites store at `[storage].path`.
pub(crate) fn open_store(config: &Config) -> Arc<dyn KeyValueStore> {
    Arc::new(designforge_core::FileStore::new(config.storage.resolved_path()))
}
