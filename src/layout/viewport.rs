//! Viewport state: the scrolled window onto the grid content.
//!
//! Coordinates here are content coordinates (header bands excluded).

use super::GridLayout;

/// Scroll position and size of the visible content area.
#[derive(Debug, Clone, PartialEq)]
pub struct Viewport {
    /// Horizontal scroll position in content pixels
    pub scroll_x: f64,
    /// Vertical scroll position in content pixels
    pub scroll_y: f64,
    /// Visible content width in pixels
    pub width: f64,
    /// Visible content height in pixels
    pub height: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(800.0, 600.0)
    }
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            scroll_x: 0.0,
            scroll_y: 0.0,
            width: width.max(0.0),
            height: height.max(0.0),
        }
    }

    /// Largest scroll offsets that still show content.
    #[allow(clippy::cast_precision_loss)]
    pub fn max_scroll(&self, layout: &GridLayout) -> (f64, f64) {
        let total_w = layout.cols.total() as f64;
        let total_h = layout.rows.total() as f64;
        ((total_w - self.width).max(0.0), (total_h - self.height).max(0.0))
    }

    /// Keep the scroll position within the content.
    pub fn clamp_scroll(&mut self, layout: &GridLayout) {
        let (max_x, max_y) = self.max_scroll(layout);
        self.scroll_x = finite_or_zero(self.scroll_x).clamp(0.0, max_x);
        self.scroll_y = finite_or_zero(self.scroll_y).clamp(0.0, max_y);
    }

    /// Move to an absolute scroll position. Returns whether it changed.
    pub fn set_scroll(&mut self, x: f64, y: f64, layout: &GridLayout) -> bool {
        let (old_x, old_y) = (self.scroll_x, self.scroll_y);
        self.scroll_x = x;
        self.scroll_y = y;
        self.clamp_scroll(layout);
        (self.scroll_x - old_x).abs() > f64::EPSILON || (self.scroll_y - old_y).abs() > f64::EPSILON
    }

    /// Scroll by a delta. Returns whether the position changed.
    pub fn scroll_by(&mut self, dx: f64, dy: f64, layout: &GridLayout) -> bool {
        self.set_scroll(self.scroll_x + dx, self.scroll_y + dy, layout)
    }

    /// Change the visible size, re-clamping the scroll position.
    pub fn resize(&mut self, width: f64, height: f64, layout: &GridLayout) {
        self.width = finite_or_zero(width).max(0.0);
        self.height = finite_or_zero(height).max(0.0);
        self.clamp_scroll(layout);
    }

    /// Visible row range (inclusive).
    pub fn visible_rows(&self, layout: &GridLayout) -> (u32, u32) {
        let first = layout.row_at_y(self.scroll_y);
        let last = layout.row_at_y(self.scroll_y + (self.height - 1.0).max(0.0));
        (first, last.max(first))
    }

    /// Visible column range (inclusive).
    pub fn visible_cols(&self, layout: &GridLayout) -> (u32, u32) {
        let first = layout.col_at_x(self.scroll_x);
        let last = layout.col_at_x(self.scroll_x + (self.width - 1.0).max(0.0));
        (first, last.max(first))
    }

    /// Convert viewport-local coordinates to content coordinates.
    pub fn to_content(&self, x: f64, y: f64) -> (f64, f64) {
        (x + self.scroll_x, y + self.scroll_y)
    }

    /// Convert content coordinates to viewport-local coordinates.
    pub fn to_screen(&self, x: f64, y: f64) -> (f64, f64) {
        (x - self.scroll_x, y - self.scroll_y)
    }
}

fn finite_or_zero(v: f64) -> f64 {
    if v.is_finite() {
        v
    } else {
        0.0
    }
}
