//! tilegrid - virtualized, editable spreadsheet grid for the web
//!
//! Renders very large grids in the browser via WebAssembly and Canvas 2D:
//! - Variable row heights and column widths with O(log n) lookups
//! - Fixed-span canvas tiles, only the visible window (plus a buffer) alive
//! - Cell, range, row, column and multi-row/column selection
//! - In-place editing, copy/paste, undo/redo
//! - Drag-select with edge auto-scroll, drag-resize of rows and columns
//!
//! # Usage (JavaScript)
//!
//! ```javascript
//! import init, { GridView, init_logging } from 'tilegrid';
//! await init();
//! init_logging('info');
//! const grid = new GridView(container, colHeader, rowHeader, devicePixelRatio, {});
//! grid.load_json(text);
//! ```

pub mod cell_ref;
pub mod config;
pub mod damage;
pub mod error;
pub mod grid;
pub mod history;
pub mod interaction;
pub mod layout;
pub mod logging;
pub mod render;
pub mod selection;
pub mod stats;
pub mod store;
pub mod tiles;
pub mod types;
#[cfg(target_arch = "wasm32")]
pub mod viewer;

use wasm_bindgen::prelude::*;

pub use config::GridConfig;
pub use error::{GridError, Result};
pub use grid::{Grid, GridState, KeyResponse};
pub use history::{Command, CommandManager};
pub use layout::{Axis, GridLayout, Viewport};
pub use selection::{Direction, SelectionModel};
pub use stats::SelectionStats;
pub use store::CellStore;
pub use types::*;
#[cfg(target_arch = "wasm32")]
pub use viewer::GridView;

/// Install the console logger at `level` ("error", "warn", "info", "debug",
/// "trace"; anything else means "warn") and route panics to the console.
#[wasm_bindgen]
pub fn init_logging(level: &str) {
    #[cfg(target_arch = "wasm32")]
    console_error_panic_hook::set_once();
    logging::init(logging::parse_level(level));
}

/// Get the library version
#[must_use]
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
