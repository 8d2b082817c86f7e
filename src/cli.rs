//! CLI definitions for DesignForge.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// DesignForge CLI.
#[derive(Parser)]
#[command(name = "designforge")]
#[command(about = "AI-assisted website design analysis and generation")]
#[command(version)]
pub(crate) struct Cli {
    /// Configuration file path
    #[arg(short, long, default_value = "config/default.toml", global = true)]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Run the relay server in foreground (default)
    Relay {
        /// Server host (overrides [server].host)
        #[arg(long)]
        host: Option<String>,

        /// Server port (overrides [server].port)
        #[arg(long)]
        port: Option<u16>,
    },

    /// List every selectable model
    Models,

    /// Show which provider serves a model id
    Resolve {
        /// Model id, e.g. gemini-2-flash
        model: String,
    },

    /// Analyze an image and generate design variations
    Session(SessionArgs),

    /// Saved favorite designs
    Favorites {
        #[command(subcommand)]
        action: FavoritesAction,
    },

    /// Stored user settings
    Settings {
        #[command(subcommand)]
        action: SettingsAction,
    },
}

#[derive(Args)]
pub(crate) struct SessionArgs {
    /// Design image to analyze
    #[arg(long)]
    pub image: PathBuf,

    /// Modifications to apply to the analyzed design
    #[arg(long)]
    pub prompt: String,

    /// Model used for analysis (overrides stored defaults)
    #[arg(long)]
    pub analysis_model: Option<String>,

    /// Model used for generation (overrides stored defaults)
    #[arg(long)]
    pub generation_model: Option<String>,

    /// Expand the first generated design with these directions
    #[arg(long)]
    pub expand: Option<String>,

    /// Save every generated design to favorites
    #[arg(long)]
    pub favorite: bool,
}

#[derive(Subcommand)]
pub(crate) enum FavoritesAction {
    /// List saved designs
    List {
        /// Output format (table, json)
        #[arg(long, default_value = "table")]
        format: String,
    },

    /// Remove a saved design
    Remove {
        /// Design id
        id: String,
    },
}

#[derive(Subcommand)]
pub(crate) enum SettingsAction {
    /// Print stored settings with API keys masked
    Show,

    /// Store an API key for a provider
    SetKey {
        /// Provider id (google, anthropic, openai)
        provider: String,

        /// API key; an empty value clears it
        key: String,
    },

    /// Store the default model for a phase
    SetModel {
        /// Phase (analysis, generation)
        phase: String,

        /// Model id; an empty value clears it
        model: String,
    },
}
