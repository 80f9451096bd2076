//! Tile virtualization tests driven through the headless grid

#![allow(clippy::unwrap_used, clippy::indexing_slicing, clippy::float_cmp)]

use tilegrid::render::{RecordingFactory, RecordingSurface};
use tilegrid::tiles::TileKey;
use tilegrid::{Grid, GridConfig};

fn grid() -> Grid<RecordingFactory> {
    Grid::new(
        GridConfig::default(),
        RecordingFactory::new(),
        RecordingSurface::new(),
        RecordingSurface::new(),
        1_200.0,
        800.0,
    )
    .unwrap()
}

// ============================================================================
// Materialized set
// ============================================================================

#[test]
fn origin_materializes_buffered_set() {
    let grid = grid();
    assert_eq!(
        grid.tiles().materialized_keys(),
        vec![
            TileKey::new(0, 0),
            TileKey::new(0, 1),
            TileKey::new(1, 0),
            TileKey::new(1, 1)
        ]
    );
}

#[test]
fn deep_scroll_keeps_only_nearby_tiles() {
    let mut grid = grid();
    // Row 60,000 at 28px per row
    assert!(grid.scroll_to(0.0, 1_680_000.0));
    assert_eq!(grid.state().layout.row_at_y(1_680_000.0), 60_000);

    let keys = grid.tiles().materialized_keys();
    assert_eq!(keys.len(), 6);
    assert!(keys.iter().all(|k| (1_499..=1_501).contains(&k.row)));
    assert!(keys.iter().all(|k| k.col <= 1));
    // Nothing for the first 40 rows survives
    assert!(keys.iter().all(|k| k.row != 0));
    assert_eq!(grid.tiles().factory().released().len(), 4);
}

#[test]
fn edits_offscreen_appear_when_scrolled_back() {
    let mut grid = grid();
    grid.scroll_to(0.0, 1_680_000.0);
    assert!(grid.set_cell(0, 0, "X"));
    assert!(grid.tiles().surface(TileKey::new(0, 0)).is_none());

    grid.scroll_to(0.0, 0.0);
    let surface = grid.tiles().surface(TileKey::new(0, 0)).unwrap();
    assert!(surface.texts().contains(&"X"));
}

#[test]
fn edit_survives_tile_release_and_rebuild() {
    let mut grid = grid();
    assert!(grid.set_cell(0, 0, "X"));
    assert!(grid
        .tiles()
        .surface(TileKey::new(0, 0))
        .unwrap()
        .texts()
        .contains(&"X"));

    grid.scroll_to(0.0, 1_680_000.0);
    assert!(grid.tiles().materialized_keys().iter().all(|k| k.row != 0));
    assert!(grid.tiles().surface(TileKey::new(0, 0)).is_none());

    grid.scroll_to(0.0, 0.0);
    let surface = grid.tiles().surface(TileKey::new(0, 0)).unwrap();
    assert!(surface.texts().contains(&"X"));
}

#[test]
fn small_scroll_inside_a_tile_keeps_the_set() {
    let mut grid = grid();
    let created = grid.tiles().factory().created().len();
    grid.scroll_to(0.0, 56.0);
    assert_eq!(grid.tiles().factory().created().len(), created);
    assert_eq!(grid.tiles().tile_count(), 4);
}

// ============================================================================
// Geometry changes
// ============================================================================

#[test]
fn column_resize_repositions_tiles() {
    let mut grid = grid();
    grid.execute(tilegrid::Command::ResizeColumn {
        col: 0,
        old: 100,
        new: 160,
    });
    let right = grid.tiles().surface(TileKey::new(0, 1)).unwrap();
    // 15 columns, the first 60px wider
    assert_eq!(right.x, 1_560.0);
    let left = grid.tiles().surface(TileKey::new(0, 0)).unwrap();
    assert_eq!(left.width, 1_560.0);
}
