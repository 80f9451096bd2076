//! Tile addressing: which tile covers which cells.

use crate::layout::{GridLayout, Viewport};
use crate::types::CellRegion;

/// Tile coordinates: `(row / rows_per_tile, col / cols_per_tile)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TileKey {
    pub row: u32,
    pub col: u32,
}

impl TileKey {
    pub fn new(row: u32, col: u32) -> Self {
        Self { row, col }
    }
}

/// Inclusive rectangle of tile keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileRange {
    pub first_row: u32,
    pub last_row: u32,
    pub first_col: u32,
    pub last_col: u32,
}

impl TileRange {
    pub fn contains(&self, key: TileKey) -> bool {
        key.row >= self.first_row
            && key.row <= self.last_row
            && key.col >= self.first_col
            && key.col <= self.last_col
    }

    /// Keys in row-major order.
    pub fn keys(&self) -> impl Iterator<Item = TileKey> + '_ {
        (self.first_row..=self.last_row)
            .flat_map(move |row| (self.first_col..=self.last_col).map(move |col| TileKey { row, col }))
    }

    pub fn tile_count(&self) -> u64 {
        (u64::from(self.last_row - self.first_row) + 1) * (u64::from(self.last_col - self.first_col) + 1)
    }
}

/// Fixed index span of every tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileSpans {
    pub rows_per_tile: u32,
    pub cols_per_tile: u32,
    pub total_rows: u32,
    pub total_cols: u32,
}

impl TileSpans {
    pub fn new(rows_per_tile: u32, cols_per_tile: u32, total_rows: u32, total_cols: u32) -> Self {
        Self {
            rows_per_tile: rows_per_tile.max(1),
            cols_per_tile: cols_per_tile.max(1),
            total_rows,
            total_cols,
        }
    }

    /// Number of tile rows and tile columns.
    pub fn tile_counts(&self) -> (u32, u32) {
        (
            self.total_rows.div_ceil(self.rows_per_tile),
            self.total_cols.div_ceil(self.cols_per_tile),
        )
    }

    pub fn key_for_cell(&self, row: u32, col: u32) -> TileKey {
        TileKey {
            row: row / self.rows_per_tile,
            col: col / self.cols_per_tile,
        }
    }

    /// Cells covered by a tile; the last tile on each axis may be short.
    pub fn region_of(&self, key: TileKey) -> CellRegion {
        let start_row = key.row.saturating_mul(self.rows_per_tile);
        let start_col = key.col.saturating_mul(self.cols_per_tile);
        let end_row = start_row
            .saturating_add(self.rows_per_tile - 1)
            .min(self.total_rows.saturating_sub(1));
        let end_col = start_col
            .saturating_add(self.cols_per_tile - 1)
            .min(self.total_cols.saturating_sub(1));
        CellRegion::new(start_row, start_col, end_row, end_col)
    }

    /// Tiles intersecting a cell region.
    pub fn tiles_for_region(&self, region: &CellRegion) -> TileRange {
        let first = self.key_for_cell(region.start_row, region.start_col);
        let last = self.key_for_cell(region.end_row, region.end_col);
        TileRange {
            first_row: first.row,
            last_row: last.row,
            first_col: first.col,
            last_col: last.col,
        }
    }

    /// Tiles intersecting the viewport, grown by `buffer` tiles on every side
    /// and clamped to the tile grid.
    pub fn buffered_range(&self, viewport: &Viewport, layout: &GridLayout, buffer: u32) -> TileRange {
        let (first_row, last_row) = viewport.visible_rows(layout);
        let (first_col, last_col) = viewport.visible_cols(layout);
        let (tile_rows, tile_cols) = self.tile_counts();
        let max_row = tile_rows.saturating_sub(1);
        let max_col = tile_cols.saturating_sub(1);
        TileRange {
            first_row: (first_row / self.rows_per_tile).saturating_sub(buffer),
            last_row: (last_row / self.rows_per_tile).saturating_add(buffer).min(max_row),
            first_col: (first_col / self.cols_per_tile).saturating_sub(buffer),
            last_col: (last_col / self.cols_per_tile).saturating_add(buffer).min(max_col),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GridConfig;

    fn spans() -> TileSpans {
        TileSpans::new(40, 15, 100_000, 1_000)
    }

    #[test]
    fn key_and_region() {
        let spans = spans();
        assert_eq!(spans.key_for_cell(60_000, 0), TileKey::new(1_500, 0));
        assert_eq!(spans.region_of(TileKey::new(1, 1)), CellRegion::new(40, 15, 79, 29));
        // 1000 columns / 15 = 66 full tiles + a 10-column tail
        assert_eq!(spans.tile_counts(), (2_500, 67));
        assert_eq!(spans.region_of(TileKey::new(0, 66)), CellRegion::new(0, 990, 39, 999));
    }

    #[test]
    fn buffered_range_at_origin_is_clamped() {
        let spans = spans();
        let layout = GridLayout::new(&GridConfig::default());
        let viewport = Viewport::new(1_200.0, 800.0);
        let range = spans.buffered_range(&viewport, &layout, 1);
        assert_eq!(
            range,
            TileRange {
                first_row: 0,
                last_row: 1,
                first_col: 0,
                last_col: 1
            }
        );
        assert_eq!(range.tile_count(), 4);
    }

    #[test]
    fn tiles_for_region_spans_boundaries() {
        let spans = spans();
        let range = spans.tiles_for_region(&CellRegion::new(39, 14, 40, 15));
        let keys: Vec<_> = range.keys().collect();
        assert_eq!(
            keys,
            vec![
                TileKey::new(0, 0),
                TileKey::new(0, 1),
                TileKey::new(1, 0),
                TileKey::new(1, 1)
            ]
        );
    }
}
