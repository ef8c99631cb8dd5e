//! Registered application catalogue
//!
//! Apps announce themselves over the REST API and land here. The registry is
//! keyed by the tile's `name`: registering an existing name replaces the
//! earlier entry, and tiles come back in name order so the page is stable
//! across restarts.

use std::collections::BTreeMap;

use portico_catalogue::{CatalogueDocument, Tile};

use crate::config::Settings;

/// Name-keyed set of registered app tiles
#[derive(Debug, Clone, Default)]
pub struct AppRegistry {
    apps: BTreeMap<String, Tile>,
}

impl AppRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry seeded with the `[[apps]]` entries from the settings file.
    /// Entries without a name are skipped.
    pub fn from_settings(settings: &Settings) -> Self {
        let mut registry = Self::new();
        for tile in &settings.apps {
            registry.upsert(tile.clone());
        }
        registry
    }

    /// Insert or replace the app keyed by the tile's `name` field.
    ///
    /// Returns `false` (and changes nothing) when the tile has no name.
    pub fn upsert(&mut self, tile: Tile) -> bool {
        match tile.get_str("name") {
            Some(name) if !name.is_empty() => {
                self.apps.insert(name.to_string(), tile);
                true
            }
            _ => false,
        }
    }

    /// Remove an app by name, returning its tile if it was present.
    pub fn remove(&mut self, name: &str) -> Option<Tile> {
        self.apps.remove(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.apps.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.apps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.apps.is_empty()
    }

    /// All registered tiles in name order.
    pub fn tiles(&self) -> Vec<Tile> {
        self.apps.values().cloned().collect()
    }
}

/// Assemble the document served as `config.json`: page metadata and static
/// links from the settings plus every registered app. Lists are served
/// unpadded; padding is the renderer's job.
pub fn assemble_document(settings: &Settings, registry: &AppRegistry) -> CatalogueDocument {
    let mut doc = settings.base_document();
    doc.apps = Some(registry.tiles());
    doc
}
