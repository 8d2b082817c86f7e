//! Local key-value persistence for settings and favorites.

mod favorites;
mod settings;
mod store;

pub use favorites::{Favorites, FAVORITES_KEY};
pub use settings::{ApiKeys, DefaultModels, Preferences, Settings, SettingsStore, SETTINGS_KEY};
pub use store::{FileStore, KeyValueStore, MemoryStore, StorageError};
