//! Geometry of the whole grid: both axes plus cell rectangles.

use super::axis::{Axis, AxisSizes};
use crate::config::GridConfig;

/// Axis-aligned rectangle in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self { x, y, w, h }
    }

    pub fn right(&self) -> f64 {
        self.x + self.w
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.h
    }

    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }

    pub fn is_empty(&self) -> bool {
        self.w <= 0.0 || self.h <= 0.0
    }
}

/// Variable-size index to pixel mapping for rows and columns.
#[derive(Debug, Clone)]
pub struct GridLayout {
    pub rows: AxisSizes,
    pub cols: AxisSizes,
}

impl GridLayout {
    pub fn new(config: &GridConfig) -> Self {
        Self {
            rows: AxisSizes::new(
                config.total_rows,
                config.default_row_height,
                config.min_row_height,
            ),
            cols: AxisSizes::new(
                config.total_cols,
                config.default_col_width,
                config.min_col_width,
            ),
        }
    }

    pub fn axis(&self, axis: Axis) -> &AxisSizes {
        match axis {
            Axis::Row => &self.rows,
            Axis::Column => &self.cols,
        }
    }

    pub fn axis_mut(&mut self, axis: Axis) -> &mut AxisSizes {
        match axis {
            Axis::Row => &mut self.rows,
            Axis::Column => &mut self.cols,
        }
    }

    pub fn row_count(&self) -> u32 {
        self.rows.len()
    }

    pub fn col_count(&self) -> u32 {
        self.cols.len()
    }

    pub fn get_size(&self, axis: Axis, index: u32) -> u32 {
        self.axis(axis).size(index)
    }

    pub fn set_size(&mut self, axis: Axis, index: u32, size: u32) -> u32 {
        self.axis_mut(axis).set_size(index, size)
    }

    pub fn cumulative_offset(&self, axis: Axis, index: u32) -> u64 {
        self.axis(axis).offset(index)
    }

    pub fn pixel_to_index(&self, axis: Axis, pixel: f64) -> u32 {
        self.axis(axis).index_at(pixel)
    }

    pub fn total(&self, axis: Axis) -> u64 {
        self.axis(axis).total()
    }

    /// Pixel length of the inclusive index range `start..=end` (either order).
    pub fn span_extent(&self, axis: Axis, start: u32, end: u32) -> u64 {
        self.axis(axis).span(start, end)
    }

    /// Row containing content-space `y`, clamped.
    pub fn row_at_y(&self, y: f64) -> u32 {
        self.rows.index_at(y)
    }

    /// Column containing content-space `x`, clamped.
    pub fn col_at_x(&self, x: f64) -> u32 {
        self.cols.index_at(x)
    }

    /// Content-space rectangle of a cell.
    #[allow(clippy::cast_precision_loss)]
    pub fn cell_rect(&self, row: u32, col: u32) -> Rect {
        Rect::new(
            self.cols.offset(col) as f64,
            self.rows.offset(row) as f64,
            f64::from(self.cols.size(col)),
            f64::from(self.rows.size(row)),
        )
    }

    /// Content-space rectangle of an inclusive cell block.
    #[allow(clippy::cast_precision_loss)]
    pub fn block_rect(&self, start_row: u32, start_col: u32, end_row: u32, end_col: u32) -> Rect {
        let (r0, r1) = (start_row.min(end_row), start_row.max(end_row));
        let (c0, c1) = (start_col.min(end_col), start_col.max(end_col));
        Rect::new(
            self.cols.offset(c0) as f64,
            self.rows.offset(r0) as f64,
            self.cols.span(c0, c1) as f64,
            self.rows.span(r0, r1) as f64,
        )
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;

    fn small() -> GridLayout {
        GridLayout::new(&GridConfig {
            total_rows: 20,
            total_cols: 10,
            ..GridConfig::default()
        })
    }

    #[test]
    fn cell_rect_follows_offsets() {
        let mut layout = small();
        layout.set_size(Axis::Column, 1, 150);
        let rect = layout.cell_rect(2, 2);
        assert_eq!(rect, Rect::new(250.0, 56.0, 100.0, 28.0));
    }

    #[test]
    fn offset_difference_is_size() {
        let mut layout = small();
        layout.set_size(Axis::Row, 4, 61);
        layout.set_size(Axis::Column, 7, 33);
        for axis in [Axis::Row, Axis::Column] {
            let len = layout.axis(axis).len();
            for i in 0..len {
                let diff = layout.cumulative_offset(axis, i + 1) - layout.cumulative_offset(axis, i);
                assert_eq!(diff, u64::from(layout.get_size(axis, i)));
            }
        }
    }

    #[test]
    fn block_rect_normalizes_corners() {
        let layout = small();
        assert_eq!(layout.block_rect(3, 2, 1, 0), layout.block_rect(1, 0, 3, 2));
        assert_eq!(layout.block_rect(1, 0, 3, 2), Rect::new(0.0, 28.0, 300.0, 84.0));
    }

    #[test]
    fn span_extent_sums_sizes() {
        let mut layout = small();
        layout.set_size(Axis::Row, 2, 40);
        assert_eq!(layout.span_extent(Axis::Row, 1, 3), 28 + 40 + 28);
        assert_eq!(layout.span_extent(Axis::Row, 3, 1), 96);
        assert_eq!(layout.span_extent(Axis::Column, 4, 4), 100);
    }

    #[test]
    fn rect_contains_is_half_open() {
        let rect = Rect::new(10.0, 10.0, 5.0, 5.0);
        assert!(rect.contains(10.0, 14.9));
        assert!(!rect.contains(15.0, 12.0));
        assert!(Rect::new(0.0, 0.0, 0.0, 4.0).is_empty());
    }
}
