//! Configuration loader.

use std::fs;
use std::path::Path;

use regex::Regex;

use crate::error::ConfigError;
use crate::schema::Config;

/// Configuration loader with environment variable substitution.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Config, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::NotFound(path.display().to_string()));
        }
        let content = fs::read_to_string(path)?;
        Self::load_str(&content)
    }

    /// Load configuration from a file, falling back to defaults when it is absent.
    pub fn load_or_default(path: &Path) -> Result<Config, ConfigError> {
        match Self::load(path) {
            Err(ConfigError::NotFound(_)) => Ok(Config::default()),
            other => other,
        }
    }

    /// Load configuration from a string.
    pub fn load_str(content: &str) -> Result<Config, ConfigError> {
        let expanded = Self::expand_env_vars(content)?;
        let config: Config = toml::from_str(&expanded)?;
        Ok(config)
    }

    /// Expand environment variables in the format `${VAR}`.
    fn expand_env_vars(content: &str) -> Result<String, ConfigError> {
        let mut result = content.to_string();
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| ConfigError::InvalidValue {
            field: "env var pattern".to_string(),
            message: e.to_string(),
        })?;

        for cap in re.captures_iter(content) {
            let var_name = &cap[1];
            let var_value = std::env::var(var_name)
                .map_err(|_| ConfigError::EnvVarNotSet(var_name.to_string()))?;
            result = result.replace(&cap[0], &var_value);
        }

        Ok(result)
    }

    /// Expand shell-style paths (e.g., `~/.designforge`).
    pub fn expand_path(path: &str) -> String {
        shellexpand::tilde(path).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::GeminiTransportKind;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_empty_config() {
        let config = ConfigLoader::load_str("").unwrap();
        assert_eq!(config.server.port, 3001);
        assert_eq!(config.http.timeout_seconds, 60);
        assert_eq!(config.session.design_count, 3);
    }

    #[test]
    fn test_load_server_section() {
        let content = r#"
            [server]
            host = "0.0.0.0"
            port = 4000
            body_limit_mb = 10
        "#;
        let config = ConfigLoader::load_str(content).unwrap();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 4000);
        assert_eq!(config.server.body_limit_mb, 10);
    }

    #[test]
    fn test_load_full_config() {
        let content = r#"
            [providers.anthropic]
            api_key = "sk-ant-test"

            [gemini]
            transport = "direct"

            [http]
            timeout_seconds = 30

            [session]
            design_count = 5
            analysis_model = "gemini-2-flash"
            generation_model = "claude-3-7-sonnet"

            [[resolver.rules]]
            token = "gpt"
            provider = "openai"

            [storage]
            path = "/tmp/designforge.json"
        "#;
        let config = ConfigLoader::load_str(content).unwrap();
        assert_eq!(config.providers["anthropic"].api_key.as_deref(), Some("sk-ant-test"));
        assert_eq!(config.gemini.transport, GeminiTransportKind::Direct);
        assert_eq!(config.http.timeout_seconds, 30);
        assert_eq!(config.session.design_count, 5);
        assert_eq!(config.session.generation_model.as_deref(), Some("claude-3-7-sonnet"));
        assert_eq!(config.resolver.rules.len(), 1);
        assert_eq!(config.resolver.rules[0].provider, "openai");
        assert_eq!(
            config.storage.resolved_path(),
            std::path::PathBuf::from("/tmp/designforge.json")
        );
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[server]").unwrap();
        writeln!(file, "port = 5000").unwrap();

        let config = ConfigLoader::load(file.path()).unwrap();
        assert_eq!(config.server.port, 5000);
    }

    #[test]
    fn test_load_nonexistent_file() {
        let result = ConfigLoader::load(Path::new("/nonexistent/path/designforge.toml"));
        assert!(matches!(result, Err(ConfigError::NotFound(_))));
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let config =
            ConfigLoader::load_or_default(Path::new("/nonexistent/path/designforge.toml")).unwrap();
        assert_eq!(config.server.port, 3001);
    }

    #[test]
    fn test_load_invalid_toml() {
        let result = ConfigLoader::load_str("invalid = [unclosed");
        assert!(matches!(result, Err(ConfigError::TomlParse(_))));
    }

    #[test]
    fn test_unknown_transport_rejected() {
        let result = ConfigLoader::load_str("[gemini]\ntransport = \"carrier-pigeon\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_expand_env_vars() {
        // SAFETY: unique test-only variable
        unsafe {
            std::env::set_var("DESIGNFORGE_TEST_GOOGLE_KEY", "g-123");
        }
        let content = "[providers.google]\napi_key = \"${DESIGNFORGE_TEST_GOOGLE_KEY}\"";
        let config = ConfigLoader::load_str(content).unwrap();
        assert_eq!(config.providers["google"].api_key.as_deref(), Some("g-123"));
        unsafe {
            std::env::remove_var("DESIGNFORGE_TEST_GOOGLE_KEY");
        }
    }

    #[test]
    fn test_expand_env_vars_not_set() {
        let content = "value = \"${NONEXISTENT_DESIGNFORGE_VAR_12345}\"";
        let result = ConfigLoader::expand_env_vars(content);
        assert!(matches!(result, Err(ConfigError::EnvVarNotSet(_))));
    }

    #[test]
    fn test_expand_env_vars_no_vars() {
        let content = "value = \"no variables here\"";
        assert_eq!(ConfigLoader::expand_env_vars(content).unwrap(), content);
    }

    #[test]
    fn test_expand_path_with_tilde() {
        let expanded = ConfigLoader::expand_path("~/test");
        assert!(!expanded.starts_with('~'));
        assert!(expanded.ends_with("/test"));
    }

    #[test]
    fn test_expand_path_no_tilde() {
        assert_eq!(ConfigLoader::expand_path("/usr/local/bin"), "/usr/local/bin");
    }
}
