//! Configuration for the portico host
//!
//! Reads settings from ~/.config/portico/portico.toml

use std::path::{Path, PathBuf};

use portico_catalogue::{CatalogueDocument, Tile, DEFAULT_GRID_COLUMNS};
use serde::Deserialize;
use serde_json::Value;

/// Contents written to the settings file on first start
const DEFAULT_SETTINGS_TOML: &str = r#"# portico configuration

[server]
bind = "127.0.0.1"
http_port = 8080

[page]
title = "Portico"
tagline = "Your services, one page"
description = ""
columns = 3

# Static links shown below the apps, one [[links]] table per tile:
#
# [[links]]
# name = "Documentation"
# url = "https://docs.example.com"

# Apps known from startup; more can be registered over the REST API:
#
# [[apps]]
# name = "grafana"
# url = "http://grafana.internal:3000"
# description = "Dashboards"
"#;

/// Server configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    pub bind: String,
    pub http_port: u16,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            bind: "127.0.0.1".to_string(),
            http_port: 8080,
        }
    }
}

/// Page configuration: the metadata shown above the tile grids
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PageSettings {
    pub title: String,
    pub tagline: String,
    pub description: String,
    /// Grid width the renderer pads tile lists to.
    pub columns: usize,
}

impl Default for PageSettings {
    fn default() -> Self {
        Self {
            title: "Portico".to_string(),
            tagline: "Your services, one page".to_string(),
            description: String::new(),
            columns: DEFAULT_GRID_COLUMNS,
        }
    }
}

/// Full host settings
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub server: ServerSettings,
    pub page: PageSettings,
    /// Static link tiles, shown in the links grid.
    pub links: Vec<Tile>,
    /// App tiles present from startup; more arrive via the REST API.
    pub apps: Vec<Tile>,
}

impl Settings {
    /// Load settings from the default path, falling back to defaults
    pub fn load() -> Self {
        let path = Self::default_settings_path();
        Self::load_from_path(&path).unwrap_or_default()
    }

    /// Get the default settings path
    pub fn default_settings_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("portico")
            .join("portico.toml")
    }

    /// Load settings from a specific path
    pub fn load_from_path(path: &Path) -> Option<Self> {
        let content = std::fs::read_to_string(path).ok()?;
        match toml::from_str(&content) {
            Ok(settings) => Some(settings),
            Err(e) => {
                eprintln!("  [warn] Failed to parse {}: {e}", path.display());
                None
            }
        }
    }

    /// Create the default settings file if it doesn't exist
    pub fn create_default_if_missing() {
        let path = Self::default_settings_path();
        if !path.exists() {
            if let Some(parent) = path.parent() {
                let _ = std::fs::create_dir_all(parent);
            }
            let _ = std::fs::write(&path, DEFAULT_SETTINGS_TOML);
        }
    }

    /// Document holding the page metadata and static links, before the
    /// registered apps are merged in.
    pub fn base_document(&self) -> CatalogueDocument {
        let mut doc = CatalogueDocument {
            apps: None,
            links: Some(self.links.clone()),
            extra: serde_json::Map::new(),
        };
        doc.extra
            .insert("title".to_string(), Value::String(self.page.title.clone()));
        doc.extra.insert(
            "tagline".to_string(),
            Value::String(self.page.tagline.clone()),
        );
        doc.extra.insert(
            "description".to_string(),
            Value::String(self.page.description.clone()),
        );
        doc
    }
}
