//! Catalogue document model
//!
//! The catalogue travels as a single JSON object. `apps` and `links` are the
//! two tile lists the page lays out as grids; every other top-level key is
//! carried through verbatim and handed to the page template untouched.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::grid;
use crate::Result;

/// A single entry in a tile list.
///
/// Tiles are open-ended records: the stock template reads `name`, `url`,
/// `icon` and `description`, but custom templates may rely on any key, so no
/// field is required or dropped. The empty record is the blank placeholder
/// used to fill out the last grid row.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Tile(Map<String, Value>);

impl Tile {
    /// Blank placeholder tile (`{}`).
    pub fn placeholder() -> Self {
        Self::default()
    }

    /// Whether this tile is a blank placeholder (no fields at all).
    pub fn is_placeholder(&self) -> bool {
        self.0.is_empty()
    }

    /// Field value as a string slice, if present and a JSON string.
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(Value::as_str)
    }

    /// Set a field, returning the previous value if any.
    pub fn insert(&mut self, key: impl Into<String>, value: Value) -> Option<Value> {
        self.0.insert(key.into(), value)
    }
}

/// The catalogue document exchanged between host and renderer.
///
/// `apps` and `links` keep "key missing" distinct from "empty list": only a
/// list that is present and non-empty is padded, and a document without one
/// of the keys serializes without it. A JSON `null` list is read as missing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogueDocument {
    /// Service tiles, in display order.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub apps: Option<Vec<Tile>>,
    /// Static link tiles, in display order.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub links: Option<Vec<Tile>>,
    /// All remaining top-level keys (title, tagline, description, ...).
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl CatalogueDocument {
    /// Parse a document from raw JSON text.
    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Serialize the document back to JSON text.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Pad both tile lists in place to full grid rows of `columns` tiles.
    ///
    /// Lists that are missing or empty are left as they are. Running this
    /// again on an already padded document changes nothing.
    pub fn normalize(&mut self, columns: usize) {
        if let Some(apps) = self.apps.as_mut() {
            grid::pad_to_columns(apps, columns);
        }
        if let Some(links) = self.links.as_mut() {
            grid::pad_to_columns(links, columns);
        }
    }

    /// Convenience accessor for a string field in `extra`.
    pub fn extra_str(&self, key: &str) -> Option<&str> {
        self.extra.get(key).and_then(Value::as_str)
    }
}
