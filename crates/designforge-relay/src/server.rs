//! Relay server.

use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;
use tracing::info;

use designforge_core::http::DEFAULT_TIMEOUT_SECS;
use designforge_provider_gemini::{GeminiClient, DEFAULT_BASE_URL};

use crate::routes::{create_router, DEFAULT_BODY_LIMIT_MB};
use crate::state::AppState;

/// Relay server configuration.
#[derive(Debug, Clone)]
pub struct RelayConfig {
    pub host: String,
    pub port: u16,
    pub gemini_base_url: String,
    pub body_limit_mb: usize,
    pub timeout_secs: u64,
}

impl RelayConfig {
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
            ..Self::default()
        }
    }

    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3001,
            gemini_base_url: DEFAULT_BASE_URL.to_string(),
            body_limit_mb: DEFAULT_BODY_LIMIT_MB,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

pub struct RelayServer {
    config: RelayConfig,
    state: Arc<AppState>,
}

impl RelayServer {
    pub fn new(config: RelayConfig) -> Self {
        let gemini = GeminiClient::new(&config.gemini_base_url, config.timeout_secs);
        Self {
            config,
            state: Arc::new(AppState::new(gemini)),
        }
    }

    pub fn config(&self) -> &RelayConfig {
        &self.config
    }

    /// Bind and serve until the process is stopped.
    pub async fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        let app = create_router(self.state.clone(), self.config.body_limit_mb);

        let addr: SocketAddr = self.config.addr().parse()?;
        let listener = TcpListener::bind(addr).await?;

        info!("Relay server running on {}", addr);
        axum::serve(listener, app).await?;

        Ok(())
    }
}
