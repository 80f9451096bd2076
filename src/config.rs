//! Grid configuration.
//!
//! Every field has a default, so hosts only pass what they want to change:
//!
//! ```javascript
//! new GridView(container, colHeader, rowHeader, dpr, { totalRows: 5000, rowsPerTile: 20 });
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{GridError, Result};

pub const DEFAULT_TOTAL_ROWS: u32 = 100_000;
pub const DEFAULT_TOTAL_COLS: u32 = 1_000;
pub const DEFAULT_ROW_HEIGHT: u32 = 28;
pub const DEFAULT_COL_WIDTH: u32 = 100;
pub const MIN_ROW_HEIGHT: u32 = 10;
pub const MIN_COL_WIDTH: u32 = 20;
pub const HEADER_HEIGHT: u32 = 28;
pub const HEADER_WIDTH: u32 = 50;
pub const ROWS_PER_TILE: u32 = 40;
pub const COLS_PER_TILE: u32 = 15;

/// Static configuration of a grid instance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GridConfig {
    pub total_rows: u32,
    pub total_cols: u32,
    pub default_row_height: u32,
    pub default_col_width: u32,
    pub min_row_height: u32,
    pub min_col_width: u32,
    /// Height of the column header band.
    pub header_height: u32,
    /// Width of the row header band.
    pub header_width: u32,
    pub rows_per_tile: u32,
    pub cols_per_tile: u32,
    /// Tiles kept alive around the visible window on each side.
    pub tile_buffer: u32,
    pub scroll_debounce_ms: u32,
    pub resize_debounce_ms: u32,
    /// Maximum number of undo steps kept.
    pub history_limit: usize,
    /// Distance from the content edge (px) at which drag auto-scroll starts.
    pub auto_scroll_edge: f64,
    /// Largest scroll step (px) applied per auto-scroll tick.
    pub auto_scroll_max_step: f64,
    /// Half-width (px) of the grab zone around a header boundary.
    pub resize_handle_tolerance: f64,
    /// Columns at or below this width get no text.
    pub min_text_width: u32,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            total_rows: DEFAULT_TOTAL_ROWS,
            total_cols: DEFAULT_TOTAL_COLS,
            default_row_height: DEFAULT_ROW_HEIGHT,
            default_col_width: DEFAULT_COL_WIDTH,
            min_row_height: MIN_ROW_HEIGHT,
            min_col_width: MIN_COL_WIDTH,
            header_height: HEADER_HEIGHT,
            header_width: HEADER_WIDTH,
            rows_per_tile: ROWS_PER_TILE,
            cols_per_tile: COLS_PER_TILE,
            tile_buffer: 1,
            scroll_debounce_ms: 10,
            resize_debounce_ms: 100,
            history_limit: 100,
            auto_scroll_edge: 24.0,
            auto_scroll_max_step: 24.0,
            resize_handle_tolerance: 4.0,
            min_text_width: 10,
        }
    }
}

impl GridConfig {
    /// Parse a (possibly partial) JSON object and validate it.
    pub fn from_json(text: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject configurations the grid cannot render.
    pub fn validate(&self) -> Result<()> {
        if self.total_rows == 0 || self.total_cols == 0 {
            return Err(GridError::Config(format!(
                "grid must have at least one row and column (got {}x{})",
                self.total_rows, self.total_cols
            )));
        }
        if self.rows_per_tile == 0 || self.cols_per_tile == 0 {
            return Err(GridError::Config("tile span must be non-zero".into()));
        }
        if self.min_row_height == 0 || self.min_col_width == 0 {
            return Err(GridError::Config("minimum sizes must be non-zero".into()));
        }
        if self.default_row_height < self.min_row_height {
            return Err(GridError::Config(format!(
                "default row height {} is below the minimum {}",
                self.default_row_height, self.min_row_height
            )));
        }
        if self.default_col_width < self.min_col_width {
            return Err(GridError::Config(format!(
                "default column width {} is below the minimum {}",
                self.default_col_width, self.min_col_width
            )));
        }
        if self.history_limit == 0 {
            return Err(GridError::Config("history limit must be non-zero".into()));
        }
        if !(self.auto_scroll_edge.is_finite() && self.auto_scroll_edge >= 0.0)
            || !(self.auto_scroll_max_step.is_finite() && self.auto_scroll_max_step > 0.0)
            || !(self.resize_handle_tolerance.is_finite() && self.resize_handle_tolerance >= 0.0)
        {
            return Err(GridError::Config(
                "pointer tolerances must be finite and non-negative".into(),
            ));
        }
        Ok(())
    }
}
