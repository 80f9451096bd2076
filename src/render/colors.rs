//! Grid color palette.
//!
//! CSS color strings, usable directly by Canvas 2D.

/// A CSS color string (e.g., "#137E43", "rgba(232, 242, 236, 0.3)")
pub type CssColor = &'static str;

pub mod palette {
    use super::CssColor;

    pub const CELL_BACKGROUND: CssColor = "#ffffff";
    pub const GRID_LINE: CssColor = "#e5e7eb";
    pub const CELL_TEXT: CssColor = "#374151";

    pub const SELECTION_BORDER: CssColor = "#137E43";
    pub const SELECTION_FILL: CssColor = "rgba(232, 242, 236, 0.3)";

    pub const HEADER_BACKGROUND: CssColor = "#f8f8f8";
    pub const HEADER_TEXT: CssColor = "#4b5563";
    pub const HEADER_BORDER: CssColor = "#d1d5db";
    /// Header background when part of the row/column is selected
    pub const HEADER_PARTIAL_BG: CssColor = "#e8f2ec";
    /// Header background when the whole row/column is selected
    pub const HEADER_ACTIVE_BG: CssColor = "#137E43";
    pub const HEADER_ACTIVE_TEXT: CssColor = "#ffffff";

    pub const RESIZE_GUIDE: CssColor = "#137E43";
}

/// Font for cell text.
pub const CELL_FONT: &str = "12px Arial";
/// Font for row and column header labels.
pub const HEADER_FONT: &str = "500 11px Arial";
/// Selection border width in pixels.
pub const SELECTION_BORDER_WIDTH: f64 = 2.0;
/// Horizontal padding before cell text.
pub const CELL_TEXT_PADDING: f64 = 4.0;
