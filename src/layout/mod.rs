//! Grid geometry: per-axis sizes, cell rectangles and the scrolled viewport.

pub mod axis;
pub mod fenwick;
mod grid_layout;
mod viewport;

pub use axis::{Axis, AxisSizes};
pub use fenwick::FenwickTree;
pub use grid_layout::{GridLayout, Rect};
pub use viewport::Viewport;
