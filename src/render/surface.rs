//! Drawing surface abstraction.
//!
//! Tiles and headers draw through [`Surface`], so the same drawing code runs
//! against Canvas 2D in the browser and against
//! [`RecordingSurface`](super::RecordingSurface) in tests and the CLI.

use crate::layout::Rect;
use crate::tiles::TileKey;

/// Horizontal text alignment relative to the `x` passed to [`Surface::fill_text`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAlign {
    Left,
    Center,
}

/// Text appearance. Text is always vertically centered on the given `y`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextStyle {
    pub font: &'static str,
    pub color: &'static str,
    pub align: TextAlign,
}

/// A 2D drawing target in logical pixels.
pub trait Surface {
    /// Resize the backing store; contents are discarded.
    fn resize(&mut self, width: f64, height: f64);
    /// Place the surface at content coordinates `(x, y)`.
    fn set_position(&mut self, x: f64, y: f64);
    fn size(&self) -> (f64, f64);
    /// Make a rectangle fully transparent.
    fn clear_rect(&mut self, rect: Rect);
    fn fill_rect(&mut self, rect: Rect, color: &str);
    /// Straight line of the given width.
    fn stroke_line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, width: f64, color: &str);
    /// Single-line text clipped to `clip`.
    fn fill_text(&mut self, text: &str, x: f64, y: f64, clip: Rect, style: TextStyle);
    /// Restrict subsequent drawing to `rect` until [`Surface::pop_clip`].
    fn push_clip(&mut self, rect: Rect);
    fn pop_clip(&mut self);
    /// Detach from the display; the surface is dropped afterwards.
    fn release(&mut self);
}

/// Creates surfaces for tiles on demand.
pub trait SurfaceFactory {
    type Surface: Surface;

    /// A fresh surface for `key`, or `None` if the platform cannot provide one.
    fn create_tile(&mut self, key: TileKey) -> Option<Self::Surface>;
}
