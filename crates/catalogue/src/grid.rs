//! Grid padding
//!
//! Tile lists are laid out as fixed-width grid rows. A partly filled last row
//! is padded with blank placeholder tiles until it spans the full width.

use crate::document::Tile;

/// Column count of the stock page grid.
pub const DEFAULT_GRID_COLUMNS: usize = 3;

/// Pad `tiles` with blank placeholders until its length is a multiple of
/// `columns`.
///
/// Existing tiles keep their positions; placeholders only ever go at the end.
/// Empty lists are not padded (an empty section stays empty rather than
/// showing a row of blanks), and a `columns` of zero leaves the list alone.
pub fn pad_to_columns(tiles: &mut Vec<Tile>, columns: usize) {
    if tiles.is_empty() || columns == 0 {
        return;
    }
    while tiles.len() % columns != 0 {
        tiles.push(Tile::placeholder());
    }
}
