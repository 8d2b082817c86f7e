//! # DesignForge Core
//!
//! Everything between the caller and the vendor adapters:
//!
//! - [`resolver`] - infers the provider from an opaque model id
//! - [`registry`] - holds one adapter per provider
//! - [`output`] / [`elements`] - lenient parsing of model output
//! - [`session`] - the analyze → generate → expand workflow
//! - [`storage`] - key-value persistence for settings and favorites
//! - [`http`] / [`designs`] / [`prompts`] - shared adapter plumbing

pub mod designs;
pub mod elements;
pub mod http;
pub mod output;
pub mod prompts;
pub mod registry;
pub mod resolver;
pub mod session;
pub mod storage;

pub use elements::extract_elements;
pub use output::parse_design_output;
pub use registry::{ProviderRegistry, RegistryError};
pub use resolver::{ProviderResolver, ResolverRule};
pub use session::{Credentials, Phase, SelectedModels, SessionController, SessionState};
pub use storage::{
    Favorites, FileStore, KeyValueStore, MemoryStore, Settings, SettingsStore, StorageError,
};
