//! portico-catalogue
//!
//! Shared catalogue model for portico: the document served by the host as
//! `config.json`, the grid padding applied before display, and the minijinja
//! page rendering that turns document plus template into markup. Compiles on
//! native targets and on wasm32 so host and browser renderer agree on the
//! semantics.

pub mod document;
pub mod grid;
pub mod render;

pub use document::{CatalogueDocument, Tile};
pub use grid::{pad_to_columns, DEFAULT_GRID_COLUMNS};
pub use render::render_page;

/// Errors shared by the host and the browser renderer
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Malformed catalogue document: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Template error: {0}")]
    Template(#[from] minijinja::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
