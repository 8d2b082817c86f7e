//! Saved designs.

use std::sync::Arc;

use tracing::warn;
use uuid::Uuid;

use designforge_protocols::Design;

use super::store::{KeyValueStore, StorageError};

pub const FAVORITES_KEY: &str = "favorites";

/// Favorite designs in insertion order, unique by id.
#[derive(Clone)]
pub struct Favorites {
    store: Arc<dyn KeyValueStore>,
}

impl Favorites {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    pub fn list(&self) -> Vec<Design> {
        self.load().unwrap_or_else(|e| {
            warn!("Failed to read favorites: {}", e);
            Vec::new()
        })
    }

    /// Add a design. Returns `false` if it was already a favorite.
    pub fn add(&self, design: Design) -> Result<bool, StorageError> {
        let mut favorites = self.load()?;
        if favorites.iter().any(|d| d.id == design.id) {
            return Ok(false);
        }
        favorites.push(design);
        self.persist(&favorites)?;
        Ok(true)
    }

    /// Remove a design. Returns `false` if it was not a favorite.
    pub fn remove(&self, id: Uuid) -> Result<bool, StorageError> {
        let mut favorites = self.load()?;
        let before = favorites.len();
        favorites.retain(|d| d.id != id);
        if favorites.len() == before {
            return Ok(false);
        }
        self.persist(&favorites)?;
        Ok(true)
    }

    pub fn is_favorite(&self, id: Uuid) -> bool {
        self.list().iter().any(|d| d.id == id)
    }

    /// Stored favorites. A value that does not decode is an error, never an empty list.
    fn load(&self) -> Result<Vec<Design>, StorageError> {
        match self.store.get(FAVORITES_KEY)? {
            Some(value) => Ok(serde_json::from_value(value)?),
            None => Ok(Vec::new()),
        }
    }

    fn persist(&self, favorites: &[Design]) -> Result<(), StorageError> {
        self.store.set(FAVORITES_KEY, serde_json::to_value(favorites)?)
    }
}
