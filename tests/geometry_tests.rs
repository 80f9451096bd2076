//! Geometry model tests
//!
//! Cumulative offsets, reverse lookups, resize clamping and viewport
//! visibility on grids up to the default 100k rows.

#![allow(
    clippy::unwrap_used,
    clippy::indexing_slicing,
    clippy::float_cmp,
    clippy::cast_precision_loss
)]

use tilegrid::layout::{Axis, AxisSizes, FenwickTree, GridLayout, Viewport};
use tilegrid::GridConfig;

fn default_layout() -> GridLayout {
    GridLayout::new(&GridConfig::default())
}

/// Deterministic pseudo-random sizes (xorshift) so failures are reproducible.
fn pseudo_sizes(len: usize, seed: u32) -> Vec<u32> {
    let mut x = seed.max(1);
    (0..len)
        .map(|_| {
            x ^= x << 13;
            x ^= x >> 17;
            x ^= x << 5;
            10 + x % 90
        })
        .collect()
}

// ============================================================================
// Offsets
// ============================================================================

#[test]
fn offset_difference_equals_size() {
    let mut layout = default_layout();
    let sizes = pseudo_sizes(2_000, 7);
    for (i, size) in (0u32..).zip(&sizes) {
        layout.set_size(Axis::Row, i * 37, *size);
        layout.set_size(Axis::Column, i % 1_000, *size);
    }
    for axis in [Axis::Row, Axis::Column] {
        let count = layout.axis(axis).len();
        for index in (0..count - 1).step_by(997).chain([0, count - 2]) {
            let diff = layout.cumulative_offset(axis, index + 1) - layout.cumulative_offset(axis, index);
            assert_eq!(diff, u64::from(layout.get_size(axis, index)), "{axis:?} {index}");
        }
    }
}

#[test]
fn offsets_match_naive_prefix_sums() {
    let sizes = pseudo_sizes(500, 42);
    let mut axis = AxisSizes::new(500, 28, 10);
    for (i, size) in (0u32..).zip(&sizes) {
        axis.set_size(i, *size);
    }
    let mut running = 0u64;
    for (i, size) in (0u32..).zip(&sizes) {
        assert_eq!(axis.offset(i), running);
        running += u64::from(*size);
    }
    assert_eq!(axis.total(), running);
}

#[test]
fn fenwick_find_prefix_is_inverse_of_prefix() {
    let values = pseudo_sizes(1_000, 3);
    let tree = FenwickTree::from_values(&values);
    for count in [0usize, 1, 10, 500, 999, 1_000] {
        let prefix = tree.prefix(count);
        assert_eq!(tree.find_prefix(prefix), count);
    }
}

#[test]
fn default_grid_totals() {
    let layout = default_layout();
    assert_eq!(layout.row_count(), 100_000);
    assert_eq!(layout.col_count(), 1_000);
    assert_eq!(layout.total(Axis::Row), 2_800_000);
    assert_eq!(layout.total(Axis::Column), 100_000);
    assert_eq!(layout.cumulative_offset(Axis::Row, 60_000), 1_680_000);
}

// ============================================================================
// Reverse lookup
// ============================================================================

#[test]
fn pixel_to_index_round_trips_through_offsets() {
    let mut layout = default_layout();
    layout.set_size(Axis::Row, 5, 100);
    for index in [0u32, 4, 5, 6, 50_000, 99_999] {
        let start = layout.cumulative_offset(Axis::Row, index) as f64;
        let size = f64::from(layout.get_size(Axis::Row, index));
        assert_eq!(layout.pixel_to_index(Axis::Row, start), index);
        assert_eq!(layout.pixel_to_index(Axis::Row, start + size - 0.5), index);
    }
}

#[test]
fn pixel_to_index_clamps() {
    let layout = default_layout();
    assert_eq!(layout.pixel_to_index(Axis::Column, -100.0), 0);
    assert_eq!(layout.pixel_to_index(Axis::Column, 1e12), 999);
    assert_eq!(layout.pixel_to_index(Axis::Row, f64::NAN), 0);
}

// ============================================================================
// Resize clamping
// ============================================================================

#[test]
fn resize_to_zero_clamps_to_minimum() {
    let mut layout = default_layout();
    assert_eq!(layout.set_size(Axis::Column, 4, 0), 20);
    assert_eq!(layout.get_size(Axis::Column, 4), 20);
    assert_eq!(layout.set_size(Axis::Row, 4, 0), 10);
    assert_eq!(layout.get_size(Axis::Row, 4), 10);
}

#[test]
fn out_of_range_indices_are_clamped() {
    let mut layout = default_layout();
    layout.set_size(Axis::Column, 5_000, 60);
    assert_eq!(layout.get_size(Axis::Column, 999), 60);
    // Reads past the end report the default
    assert_eq!(layout.get_size(Axis::Row, 200_000), 28);
}

#[test]
fn resize_shifts_later_offsets_only() {
    let mut layout = default_layout();
    let before_3 = layout.cumulative_offset(Axis::Column, 3);
    let before_10 = layout.cumulative_offset(Axis::Column, 10);
    layout.set_size(Axis::Column, 4, 40);
    assert_eq!(layout.cumulative_offset(Axis::Column, 3), before_3);
    assert_eq!(layout.cumulative_offset(Axis::Column, 10), before_10 - 60);
}

// ============================================================================
// Viewport
// ============================================================================

#[test]
fn viewport_scroll_is_clamped_to_content() {
    let layout = default_layout();
    let mut viewport = Viewport::new(1_200.0, 800.0);
    assert!(viewport.set_scroll(-50.0, 1e9, &layout));
    assert_eq!(viewport.scroll_x, 0.0);
    assert_eq!(viewport.scroll_y, 2_800_000.0 - 800.0);
    assert!(!viewport.set_scroll(0.0, 1e9, &layout));
}

#[test]
fn visible_ranges_at_row_60000() {
    let layout = default_layout();
    let mut viewport = Viewport::new(1_200.0, 800.0);
    viewport.set_scroll(0.0, 1_680_000.0, &layout);
    assert_eq!(viewport.visible_rows(&layout), (60_000, 60_028));
    assert_eq!(viewport.visible_cols(&layout), (0, 11));
}
