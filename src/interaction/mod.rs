//! Pointer and keyboard interaction.
//!
//! Pointer input is routed through an ordered list of handlers: the first
//! whose hit test matches on pointer-down owns the gesture until pointer-up.

mod autoscroll;
mod cell_select;
mod header_select;
pub mod keyboard;
mod resize;
mod router;

pub use autoscroll::{auto_scroll_delta, edge_delta};
pub use cell_select::CellSelectHandler;
pub use header_select::{CornerHandler, HeaderSelectHandler};
pub use keyboard::{map_key, KeyAction, KeyInput};
pub use resize::ResizeHandler;
pub use router::{EventRouter, PointerHandler};

use crate::layout::Axis;

/// A pointer position relative to the grid wrapper (header bands included).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PointerEvent {
    pub x: f64,
    pub y: f64,
    pub shift: bool,
    /// Ctrl on most platforms, Cmd on macOS.
    pub ctrl: bool,
}

impl PointerEvent {
    pub fn at(x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            ..Self::default()
        }
    }

    pub fn with_shift(mut self) -> Self {
        self.shift = true;
        self
    }

    pub fn with_ctrl(mut self) -> Self {
        self.ctrl = true;
        self
    }
}

/// In-progress row/column resize, shown as a guide line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResizeGuide {
    pub axis: Axis,
    pub index: u32,
    /// Size the row/column would get if the pointer were released now.
    pub size: u32,
}

/// Directions a drag gesture may auto-scroll in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AutoScrollAxes {
    None,
    Horizontal,
    Vertical,
    Both,
}
