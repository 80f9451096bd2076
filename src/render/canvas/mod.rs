//! Canvas 2D backend.
//!
//! Each tile is its own absolutely positioned `<canvas>` inside the scroll
//! content element, so native scrolling moves tiles without redrawing them.

mod surface;

pub use surface::{CanvasSurface, CanvasTileFactory};
