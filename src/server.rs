//! Startup helpers: tracing, configuration and the relay server.

use std::path::{Path, PathBuf};

use tracing::{info, warn};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use designforge_config::{Config, ConfigLoader, ConfigValidator};
use designforge_relay::{RelayConfig, RelayServer};

/// Get the .designforge directory path.
pub(crate) fn designforge_dir() -> PathBuf {
    dirs::home_dir()
        .map(|h| h.join(".designforge"))
        .unwrap_or_else(|| PathBuf::from(".designforge"))
}

/// Initialize tracing with console and file output.
///
/// Log files are written to ~/.designforge/logs/ with daily rotation.
pub(crate) fn init_tracing() -> Result<(), Box<dyn std::error::Error>> {
    let log_dir = designforge_dir().join("logs");
    std::fs::create_dir_all(&log_dir)?;

    let file_appender = RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix("designforge")
        .filename_suffix("log")
        .max_log_files(14)
        .build(&log_dir)?;

    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    // Flushes on drop, so it must outlive main.
    static GUARD: std::sync::OnceLock<tracing_appender::non_blocking::WorkerGuard> =
        std::sync::OnceLock::new();
    let _ = GUARD.set(guard);

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
        .with(fmt::layer().with_writer(non_blocking).with_ansi(false))
        .init();

    Ok(())
}

/// Load and validate configuration. A missing file means defaults.
pub(crate) fn load_config(path: &Path) -> Result<Config, Box<dyn std::error::Error>> {
    let config = ConfigLoader::load_or_default(path)?;
    if path.exists() {
        info!("Loaded configuration from {}", path.display());
    } else {
        info!("No configuration at {}, using defaults", path.display());
    }

    let validation = ConfigValidator::validate(&config);
    for warning in &validation.warnings {
        warn!("Config warning at {}: {}", warning.path, warning.message);
    }
    if let Some(err) = validation.into_error() {
        return Err(err.into());
    }

    Ok(config)
}

pub(crate) fn relay_config(config: &Config, host: Option<String>, port: Option<u16>) -> RelayConfig {
    RelayConfig {
        host: host.unwrap_or_else(|| config.server.host.clone()),
        port: port.unwrap_or(config.server.port),
        gemini_base_url: config.server.gemini_base_url.clone(),
        body_limit_mb: config.server.body_limit_mb,
        timeout_secs: config.http.timeout_seconds,
    }
}

/// Run the relay server in foreground.
pub(crate) async fn run_relay(
    config: &Config,
    host: Option<String>,
    port: Option<u16>,
) -> Result<(), Box<dyn std::error::Error>> {
    info!("Starting DesignForge relay v{}", env!("CARGO_PKG_VERSION"));

    let server = RelayServer::new(relay_config(config, host, port));
    info!("Forwarding to {}", server.config().gemini_base_url);
    server.run().await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relay_config_from_file_values() {
        let config = ConfigLoader::load_str(
            r#"
[server]
host = "0.0.0.0"
port = 4000
body_limit_mb = 10

[http]
timeout_seconds = 30
"#,
        )
        .unwrap();

        let relay = relay_config(&config, None, None);
        assert_eq!(relay.addr(), "0.0.0.0:4000");
        assert_eq!(relay.body_limit_mb, 10);
        assert_eq!(relay.timeout_secs, 30);
    }

    #[test]
    fn test_relay_config_cli_overrides() {
        let relay = relay_config(&Config::default(), Some("localhost".to_string()), Some(9000));
        assert_eq!(relay.addr(), "localhost:9000");
    }

    #[test]
    fn test_load_config_missing_file_is_default() {
        let dir = tempfile::tempdir().unwrap();
        let config = load_config(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(config.server.port, 3001);
    }

    #[test]
    fn test_load_config_rejects_invalid() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        std::fs::write(&path, "[session]\ndesign_count = 0\n").unwrap();
        assert!(load_config(&path).is_err());
    }
}
