//! Row and column header rendering.
//!
//! - Column headers: A, B, C, ... Z, AA, AB, ...
//! - Row headers: 1, 2, 3, ...
//! - Highlighting for partially and fully selected rows/columns
//! - The live guide line while a resize drag is in progress
//!
//! The column header surface spans the corner plus the content width; the
//! row header surface spans the corner height plus the content height.

use super::colors::{palette, HEADER_FONT};
use super::surface::{Surface, TextAlign, TextStyle};
use crate::cell_ref::col_to_letter;
use crate::interaction::ResizeGuide;
use crate::layout::{Axis, GridLayout, Rect, Viewport};
use crate::types::{HeaderHighlight, Selection};

/// Everything header drawing reads.
pub struct HeaderContext<'a> {
    pub layout: &'a GridLayout,
    pub viewport: &'a Viewport,
    pub selection: &'a Selection,
    pub header_width: f64,
    pub header_height: f64,
    pub guide: Option<ResizeGuide>,
}

fn colors_for(highlight: HeaderHighlight) -> (&'static str, &'static str) {
    match highlight {
        HeaderHighlight::None => (palette::HEADER_BACKGROUND, palette::HEADER_TEXT),
        HeaderHighlight::Partial => (palette::HEADER_PARTIAL_BG, palette::HEADER_TEXT),
        HeaderHighlight::Full => (palette::HEADER_ACTIVE_BG, palette::HEADER_ACTIVE_TEXT),
    }
}

/// Render the corner box and column headers.
#[allow(clippy::cast_precision_loss)]
pub fn render_column_headers<S: Surface>(surface: &mut S, ctx: &HeaderContext<'_>) {
    let (hw, hh) = (ctx.header_width, ctx.header_height);
    let width = hw + ctx.viewport.width;
    surface.resize(width, hh);
    if width <= 0.0 || hh <= 0.0 {
        return;
    }
    surface.fill_rect(Rect::new(0.0, 0.0, width, hh), palette::HEADER_BACKGROUND);

    let total_rows = ctx.layout.row_count();
    let total_cols = ctx.layout.col_count();
    let (first, last) = ctx.viewport.visible_cols(ctx.layout);
    surface.push_clip(Rect::new(hw, 0.0, ctx.viewport.width, hh));
    for col in first..=last {
        let x = hw + ctx.layout.cols.offset(col) as f64 - ctx.viewport.scroll_x;
        let w = f64::from(ctx.layout.cols.size(col));
        let highlight = ctx
            .selection
            .header_highlight(Axis::Column, col, total_rows, total_cols);
        let (bg, fg) = colors_for(highlight);
        let cell = Rect::new(x, 0.0, w, hh);
        if highlight != HeaderHighlight::None {
            surface.fill_rect(cell, bg);
        }
        surface.fill_text(
            &col_to_letter(col),
            x + w / 2.0,
            hh / 2.0,
            cell,
            TextStyle {
                font: HEADER_FONT,
                color: fg,
                align: TextAlign::Center,
            },
        );
        surface.stroke_line(x + w - 0.5, 0.0, x + w - 0.5, hh, 1.0, palette::HEADER_BORDER);
    }
    if let Some(guide) = ctx.guide.filter(|g| g.axis == Axis::Column) {
        let x = hw + ctx.layout.cols.offset(guide.index) as f64 + f64::from(guide.size)
            - ctx.viewport.scroll_x;
        surface.stroke_line(x, 0.0, x, hh, 2.0, palette::RESIZE_GUIDE);
    }
    surface.pop_clip();

    // Corner and bottom edge
    surface.stroke_line(hw - 0.5, 0.0, hw - 0.5, hh, 1.0, palette::HEADER_BORDER);
    surface.stroke_line(0.0, hh - 0.5, width, hh - 0.5, 1.0, palette::HEADER_BORDER);
}

/// Render row headers.
#[allow(clippy::cast_precision_loss)]
pub fn render_row_headers<S: Surface>(surface: &mut S, ctx: &HeaderContext<'_>) {
    let (hw, hh) = (ctx.header_width, ctx.header_height);
    let height = hh + ctx.viewport.height;
    surface.resize(hw, height);
    if hw <= 0.0 || height <= 0.0 {
        return;
    }
    surface.fill_rect(Rect::new(0.0, 0.0, hw, height), palette::HEADER_BACKGROUND);

    let total_rows = ctx.layout.row_count();
    let total_cols = ctx.layout.col_count();
    let (first, last) = ctx.viewport.visible_rows(ctx.layout);
    surface.push_clip(Rect::new(0.0, hh, hw, ctx.viewport.height));
    for row in first..=last {
        let y = hh + ctx.layout.rows.offset(row) as f64 - ctx.viewport.scroll_y;
        let h = f64::from(ctx.layout.rows.size(row));
        let highlight = ctx
            .selection
            .header_highlight(Axis::Row, row, total_rows, total_cols);
        let (bg, fg) = colors_for(highlight);
        let cell = Rect::new(0.0, y, hw, h);
        if highlight != HeaderHighlight::None {
            surface.fill_rect(cell, bg);
        }
        surface.fill_text(
            &(u64::from(row) + 1).to_string(),
            hw / 2.0,
            y + h / 2.0,
            cell,
            TextStyle {
                font: HEADER_FONT,
                color: fg,
                align: TextAlign::Center,
            },
        );
        surface.stroke_line(0.0, y + h - 0.5, hw, y + h - 0.5, 1.0, palette::HEADER_BORDER);
    }
    if let Some(guide) = ctx.guide.filter(|g| g.axis == Axis::Row) {
        let y = hh + ctx.layout.rows.offset(guide.index) as f64 + f64::from(guide.size)
            - ctx.viewport.scroll_y;
        surface.stroke_line(0.0, y, hw, y, 2.0, palette::RESIZE_GUIDE);
    }
    surface.pop_clip();

    surface.stroke_line(hw - 0.5, 0.0, hw - 0.5, height, 1.0, palette::HEADER_BORDER);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GridConfig;
    use crate::render::recording::{DrawOp, RecordingSurface};

    fn fixture() -> (GridLayout, Viewport) {
        let layout = GridLayout::new(&GridConfig {
            total_rows: 1_000,
            total_cols: 60,
            ..GridConfig::default()
        });
        (layout, Viewport::new(350.0, 100.0))
    }

    #[test]
    fn column_labels_follow_scroll() {
        let (layout, mut viewport) = fixture();
        viewport.set_scroll(2_600.0, 0.0, &layout);
        let selection = Selection::default();
        let mut surface = RecordingSurface::new();
        render_column_headers(
            &mut surface,
            &HeaderContext {
                layout: &layout,
                viewport: &viewport,
                selection: &selection,
                header_width: 50.0,
                header_height: 28.0,
                guide: None,
            },
        );
        assert_eq!(surface.texts(), vec!["AA", "AB", "AC", "AD"]);
    }

    #[test]
    fn selected_row_header_is_highlighted() {
        let (layout, viewport) = fixture();
        let selection = Selection::Row { row: 1 };
        let mut surface = RecordingSurface::new();
        render_row_headers(
            &mut surface,
            &HeaderContext {
                layout: &layout,
                viewport: &viewport,
                selection: &selection,
                header_width: 50.0,
                header_height: 28.0,
                guide: None,
            },
        );
        assert_eq!(surface.texts(), vec!["1", "2", "3", "4"]);
        assert_eq!(
            surface.fills_of(palette::HEADER_ACTIVE_BG),
            vec![Rect::new(0.0, 56.0, 50.0, 28.0)]
        );
    }

    #[test]
    fn resize_guide_is_drawn_at_live_size() {
        let (layout, viewport) = fixture();
        let selection = Selection::default();
        let mut surface = RecordingSurface::new();
        render_column_headers(
            &mut surface,
            &HeaderContext {
                layout: &layout,
                viewport: &viewport,
                selection: &selection,
                header_width: 50.0,
                header_height: 28.0,
                guide: Some(ResizeGuide {
                    axis: Axis::Column,
                    index: 1,
                    size: 140,
                }),
            },
        );
        assert!(surface.ops.contains(&DrawOp::Line {
            from: (290.0, 0.0),
            to: (290.0, 28.0),
            width: 2.0,
            color: palette::RESIZE_GUIDE.to_string(),
        }));
    }
}
