//! Virtualized tiles.
//!
//! The grid is cut into blocks of `rows_per_tile x cols_per_tile` cells.
//! Only tiles inside the viewport (plus a buffer ring) own a drawing surface.

mod key;
mod manager;
mod tile;

pub use key::{TileKey, TileRange, TileSpans};
pub use manager::{TileManager, TileUpdate};
pub use tile::{DrawContext, Tile};
