//! User settings.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::warn;

use designforge_protocols::ProviderId;

use super::store::{KeyValueStore, StorageError};
use crate::session::{Credentials, SelectedModels};

pub const SETTINGS_KEY: &str = "appSettings";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiKeys {
    pub openai: String,
    pub google: String,
    pub anthropic: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Preferences {
    pub save_history: bool,
    pub auto_analyze: bool,
    pub default_analysis_model: String,
    pub default_generation_model: String,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            save_history: true,
            auto_analyze: false,
            default_analysis_model: String::new(),
            default_generation_model: String::new(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DefaultModels {
    pub analysis: String,
    pub generation: String,
}

/// Persisted user settings. Missing fields take their defaults one by one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    pub api_keys: ApiKeys,
    pub preferences: Preferences,
    pub default_models: DefaultModels,
}

impl Settings {
    /// Non-empty API keys.
    pub fn credentials(&self) -> Credentials {
        Credentials::new()
            .with(ProviderId::OpenAi, self.api_keys.openai.clone())
            .with(ProviderId::Google, self.api_keys.google.clone())
            .with(ProviderId::Anthropic, self.api_keys.anthropic.clone())
    }

    pub fn selected_models(&self) -> SelectedModels {
        let non_empty = |s: &str| (!s.is_empty()).then(|| s.to_string());
        SelectedModels {
            analysis: non_empty(&self.default_models.analysis),
            generation: non_empty(&self.default_models.generation),
        }
    }
}

/// Loads and saves [`Settings`] through a key-value store.
#[derive(Clone)]
pub struct SettingsStore {
    store: Arc<dyn KeyValueStore>,
}

impl SettingsStore {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Stored settings merged over defaults. Unreadable data yields defaults.
    pub fn load(&self) -> Settings {
        let value = match self.store.get(SETTINGS_KEY) {
            Ok(Some(value)) => value,
            Ok(None) => return Settings::default(),
            Err(e) => {
                warn!("Failed to read settings: {}", e);
                return Settings::default();
            }
        };

        serde_json::from_value(value).unwrap_or_else(|e| {
            warn!("Ignoring malformed settings: {}", e);
            Settings::default()
        })
    }

    pub fn save(&self, settings: &Settings) -> Result<(), StorageError> {
        self.store.set(SETTINGS_KEY, serde_json::to_value(settings)?)
    }
}
