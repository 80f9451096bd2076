//! A single tile: one surface covering a fixed block of cells.

use super::key::TileKey;
use crate::layout::{GridLayout, Rect};
use crate::render::colors::{palette, CELL_FONT, CELL_TEXT_PADDING, SELECTION_BORDER_WIDTH};
use crate::render::selection::{outline_segments, paint_for_tile};
use crate::render::surface::{Surface, TextAlign, TextStyle};
use crate::store::CellStore;
use crate::types::{CellRegion, Selection};

const CELL_TEXT_STYLE: TextStyle = TextStyle {
    font: CELL_FONT,
    color: palette::CELL_TEXT,
    align: TextAlign::Left,
};

/// Everything a tile reads while drawing. Tile content is a pure function of this.
pub struct DrawContext<'a> {
    pub layout: &'a GridLayout,
    pub store: &'a CellStore,
    pub selection: &'a Selection,
    /// Cell under edit; its text is left to the input overlay.
    pub editing: Option<(u32, u32)>,
    /// Columns at or below this width get no text.
    pub min_text_width: u32,
}

pub struct Tile<S> {
    pub key: TileKey,
    pub region: CellRegion,
    surface: Option<S>,
    /// Content-space rectangle from the most recent draw.
    bounds: Rect,
}

impl<S: Surface> Tile<S> {
    pub fn new(key: TileKey, region: CellRegion, surface: Option<S>) -> Self {
        Self {
            key,
            region,
            surface,
            bounds: Rect::default(),
        }
    }

    pub fn surface(&self) -> Option<&S> {
        self.surface.as_ref()
    }

    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Full redraw. Pixel dimensions and position are recomputed from the
    /// current geometry every time. Returns `false` when nothing was drawn.
    pub fn draw(&mut self, ctx: &DrawContext<'_>) -> bool {
        let region = self.region;
        let rect = ctx.layout.block_rect(
            region.start_row,
            region.start_col,
            region.end_row,
            region.end_col,
        );
        self.bounds = rect;
        let Some(surface) = self.surface.as_mut() else {
            return false;
        };
        surface.set_position(rect.x, rect.y);
        surface.resize(rect.w, rect.h);
        if rect.is_empty() {
            return false;
        }
        surface.clear_rect(Rect::new(0.0, 0.0, rect.w, rect.h));
        draw_grid_lines(surface, &region, ctx.layout, rect);
        draw_cell_texts(surface, &region, ctx, rect);
        draw_selection(surface, &region, ctx);
        true
    }

    /// Redraw one cell in place: clear its rectangle, then repaint its
    /// borders, text and any selection paint over it.
    #[allow(clippy::cast_precision_loss)]
    pub fn draw_cell(&mut self, row: u32, col: u32, ctx: &DrawContext<'_>) -> bool {
        if !self.region.contains(row, col) {
            return false;
        }
        let region = self.region;
        let Some(surface) = self.surface.as_mut() else {
            return false;
        };
        let origin_x = ctx.layout.cols.offset(region.start_col) as f64;
        let origin_y = ctx.layout.rows.offset(region.start_row) as f64;
        let cell = ctx.layout.cell_rect(row, col);
        let local = Rect::new(cell.x - origin_x, cell.y - origin_y, cell.w, cell.h);
        if local.is_empty() {
            return false;
        }

        surface.clear_rect(local);
        surface.push_clip(local);
        let (right, bottom) = (local.right() - 0.5, local.bottom() - 0.5);
        surface.stroke_line(local.x, bottom, local.right(), bottom, 1.0, palette::GRID_LINE);
        surface.stroke_line(right, local.y, right, local.bottom(), 1.0, palette::GRID_LINE);
        if ctx.editing != Some((row, col)) {
            draw_text(surface, ctx.store.value(row, col), local, ctx.min_text_width);
        }
        draw_selection(surface, &region, ctx);
        surface.pop_clip();
        true
    }

    /// Detach the surface from the display.
    pub fn release(&mut self) {
        if let Some(mut surface) = self.surface.take() {
            surface.release();
        }
    }
}

fn draw_grid_lines<S: Surface>(surface: &mut S, region: &CellRegion, layout: &GridLayout, rect: Rect) {
    let mut y = 0.0;
    for row in region.start_row..=region.end_row {
        y += f64::from(layout.rows.size(row));
        surface.stroke_line(0.0, y - 0.5, rect.w, y - 0.5, 1.0, palette::GRID_LINE);
    }
    let mut x = 0.0;
    for col in region.start_col..=region.end_col {
        x += f64::from(layout.cols.size(col));
        surface.stroke_line(x - 0.5, 0.0, x - 0.5, rect.h, 1.0, palette::GRID_LINE);
    }
}

#[allow(clippy::cast_precision_loss)]
fn draw_cell_texts<S: Surface>(surface: &mut S, region: &CellRegion, ctx: &DrawContext<'_>, rect: Rect) {
    for ((row, col), cell) in ctx.store.cells_in_region(region) {
        if ctx.editing == Some((row, col)) {
            continue;
        }
        let cell_rect = ctx.layout.cell_rect(row, col);
        let local = Rect::new(cell_rect.x - rect.x, cell_rect.y - rect.y, cell_rect.w, cell_rect.h);
        draw_text(surface, &cell.value, local, ctx.min_text_width);
    }
}

/// Left-aligned, vertically centered, clipped to the cell.
fn draw_text<S: Surface>(surface: &mut S, text: &str, cell: Rect, min_width: u32) {
    if text.is_empty() || cell.w <= f64::from(min_width) {
        return;
    }
    let clip = Rect::new(cell.x, cell.y, (cell.w - 1.0).max(0.0), (cell.h - 1.0).max(0.0));
    surface.fill_text(
        text,
        cell.x + CELL_TEXT_PADDING,
        cell.y + cell.h / 2.0,
        clip,
        CELL_TEXT_STYLE,
    );
}

fn draw_selection<S: Surface>(surface: &mut S, region: &CellRegion, ctx: &DrawContext<'_>) {
    let paint = paint_for_tile(ctx.selection, region, ctx.layout);
    for fill in &paint.fills {
        surface.fill_rect(*fill, palette::SELECTION_FILL);
    }
    for outline in &paint.outlines {
        for (x1, y1, x2, y2) in outline_segments(outline, SELECTION_BORDER_WIDTH) {
            surface.stroke_line(x1, y1, x2, y2, SELECTION_BORDER_WIDTH, palette::SELECTION_BORDER);
        }
    }
}
