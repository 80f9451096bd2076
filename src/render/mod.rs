//! Rendering: drawing surfaces, palettes, header painting and selection geometry.
//!
//! This module provides:
//! - The [`Surface`] / [`SurfaceFactory`] seam tiles and headers draw through
//! - Canvas 2D backend (browser)
//! - Recording backend (tests, CLI)

#[cfg(target_arch = "wasm32")]
pub mod canvas;
pub mod colors;
pub mod headers;
pub mod recording;
pub mod selection;
pub mod surface;

#[cfg(target_arch = "wasm32")]
pub use canvas::{CanvasSurface, CanvasTileFactory};
pub use colors::{palette, CssColor};
pub use headers::{render_column_headers, render_row_headers, HeaderContext};
pub use recording::{DrawOp, RecordingFactory, RecordingSurface};
pub use selection::{paint_for_tile, SelectionPaint, SelectionRect};
pub use surface::{Surface, SurfaceFactory, TextAlign, TextStyle};
