//! DesignForge
//!
//! Main entry point for the DesignForge CLI and relay server.

mod cli;
mod cmd_session;
mod register;
mod server;

use clap::Parser;

use cli::{Cli, Commands};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    server::init_tracing()?;

    let cli = Cli::parse();
    let config = server::load_config(&cli.config)?;

    match cli.command {
        None => server::run_relay(&config, None, None).await,
        Some(Commands::Relay { host, port }) => server::run_relay(&config, host, port).await,
        Some(Commands::Models) => cmd_session::list_models(&config),
        Some(Commands::Resolve { model }) => cmd_session::resolve_model(&config, &model),
        Some(Commands::Session(args)) => cmd_session::run_session(&config, args).await,
        Some(Commands::Favorites { action }) => cmd_session::handle_favorites(&config, action),
        Some(Commands::Settings { action }) => cmd_session::handle_settings(&config, action),
    }
}
