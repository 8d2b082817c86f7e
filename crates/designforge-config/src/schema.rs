//! Configuration schema definitions.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;

/// Root configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub providers: HashMap<String, ProviderConfig>,

    #[serde(default)]
    pub gemini: GeminiConfig,

    #[serde(default)]
    pub http: HttpConfig,

    #[serde(default)]
    pub session: SessionConfig,

    #[serde(default)]
    pub resolver: ResolverConfig,

    #[serde(default)]
    pub storage: StorageConfig,
}

/// Relay server configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Vendor endpoint the relay forwards to.
    #[serde(default = "default_gemini_base_url")]
    pub gemini_base_url: String,

    #[serde(default = "default_body_limit_mb")]
    pub body_limit_mb: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            gemini_base_url: default_gemini_base_url(),
            body_limit_mb: default_body_limit_mb(),
        }
    }
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3001
}

pub fn default_gemini_base_url() -> String {
    "https://generativelanguage.googleapis.com/v1beta".to_string()
}

fn default_body_limit_mb() -> usize {
    50
}

/// Per-provider credentials and endpoint override, keyed by provider id.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProviderConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
}

/// How the Google adapter reaches the vendor.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GeminiTransportKind {
    /// Through the local relay server.
    #[default]
    Relay,
    /// Straight to the vendor endpoint.
    Direct,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeminiConfig {
    #[serde(default)]
    pub transport: GeminiTransportKind,

    #[serde(default = "default_relay_url")]
    pub relay_url: String,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            transport: GeminiTransportKind::default(),
            relay_url: default_relay_url(),
        }
    }
}

fn default_relay_url() -> String {
    "http://localhost:3001/api".to_string()
}

/// Outbound HTTP settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpConfig {
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout_seconds: default_timeout(),
        }
    }
}

fn default_timeout() -> u64 {
    60
}

/// Workflow settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    #[serde(default = "default_design_count")]
    pub design_count: usize,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub analysis_model: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub generation_model: Option<String>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            design_count: default_design_count(),
            analysis_model: None,
            generation_model: None,
        }
    }
}

fn default_design_count() -> usize {
    3
}

/// Model id → provider token table. Empty means the built-in table.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResolverConfig {
    #[serde(default)]
    pub rules: Vec<ResolverRuleConfig>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolverRuleConfig {
    pub token: String,
    pub provider: String,
}

/// Settings and favorites persistence.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StorageConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

impl StorageConfig {
    /// Configured path with `~` expanded, or `~/.designforge/store.json`.
    pub fn resolved_path(&self) -> PathBuf {
        match &self.path {
            Some(path) => PathBuf::from(shellexpand::tilde(&path.to_string_lossy()).to_string()),
            None => dirs::home_dir()
                .map(|h| h.join(".designforge"))
                .unwrap_or_else(|| PathBuf::from(".designforge"))
                .join("store.json"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        let config = Config::default();
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 3001);
        assert_eq!(config.server.body_limit_mb, 50);
        assert_eq!(config.gemini.transport, GeminiTransportKind::Relay);
        assert_eq!(config.gemini.relay_url, "http://localhost:3001/api");
        assert!(config.resolver.rules.is_empty());
    }

    #[test]
    fn test_storage_default_path() {
        let path = StorageConfig::default().resolved_path();
        assert!(path.ends_with(".designforge/store.json"));
    }

    #[test]
    fn test_storage_path_tilde_expanded() {
        let config = StorageConfig {
            path: Some(PathBuf::from("~/designs.json")),
        };
        assert!(!config.resolved_path().to_string_lossy().starts_with('~'));
    }
}
