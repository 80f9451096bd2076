//! Selection paint geometry.
//!
//! Pure functions: given a selection and the block of cells a tile covers,
//! compute the fill rectangles and outline edges to draw in tile-local
//! coordinates. Kept free of any surface so the math is testable directly.

use crate::layout::{GridLayout, Rect};
use crate::types::{CellRegion, Selection};

/// Outline of one selected block clipped to a tile.
///
/// Edges are only drawn where the block's true boundary falls inside the
/// tile, so a selection spanning several tiles shows no seams.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SelectionRect {
    pub rect: Rect,
    pub draw_top: bool,
    pub draw_bottom: bool,
    pub draw_left: bool,
    pub draw_right: bool,
}

/// Everything a tile paints for the current selection.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SelectionPaint {
    pub fills: Vec<Rect>,
    pub outlines: Vec<SelectionRect>,
}

impl SelectionPaint {
    pub fn is_empty(&self) -> bool {
        self.fills.is_empty() && self.outlines.is_empty()
    }
}

/// Paint for `selection` on the tile covering `tile`.
#[allow(clippy::cast_precision_loss)]
pub fn paint_for_tile(
    selection: &Selection,
    tile: &CellRegion,
    layout: &GridLayout,
) -> SelectionPaint {
    let origin_x = layout.cols.offset(tile.start_col) as f64;
    let origin_y = layout.rows.offset(tile.start_row) as f64;
    let local = |region: &CellRegion| {
        let r = layout.block_rect(region.start_row, region.start_col, region.end_row, region.end_col);
        Rect::new(r.x - origin_x, r.y - origin_y, r.w, r.h)
    };

    let mut paint = SelectionPaint::default();
    let regions = selection.regions(layout.row_count(), layout.col_count());
    for region in &regions {
        let Some(visible) = region.intersect(tile) else {
            continue;
        };

        match selection {
            Selection::Cell { .. } => {}
            Selection::Range(range) => {
                let anchor = CellRegion::cell(range.anchor_row, range.anchor_col);
                for piece in subtract(&visible, &anchor) {
                    paint.fills.push(local(&piece));
                }
            }
            _ => paint.fills.push(local(&visible)),
        }

        paint.outlines.push(SelectionRect {
            rect: local(&visible),
            draw_top: region.start_row >= tile.start_row,
            draw_bottom: region.end_row <= tile.end_row,
            draw_left: region.start_col >= tile.start_col,
            draw_right: region.end_col <= tile.end_col,
        });
    }
    paint
}

/// `outer` minus `hole`, as up to four disjoint blocks.
fn subtract(outer: &CellRegion, hole: &CellRegion) -> Vec<CellRegion> {
    let Some(hole) = outer.intersect(hole) else {
        return vec![*outer];
    };
    let mut pieces = Vec::with_capacity(4);
    if hole.start_row > outer.start_row {
        pieces.push(CellRegion::new(outer.start_row, outer.start_col, hole.start_row - 1, outer.end_col));
    }
    if hole.end_row < outer.end_row {
        pieces.push(CellRegion::new(hole.end_row + 1, outer.start_col, outer.end_row, outer.end_col));
    }
    if hole.start_col > outer.start_col {
        pieces.push(CellRegion::new(hole.start_row, outer.start_col, hole.end_row, hole.start_col - 1));
    }
    if hole.end_col < outer.end_col {
        pieces.push(CellRegion::new(hole.start_row, hole.end_col + 1, hole.end_row, outer.end_col));
    }
    pieces
}

/// Edge segments of an outline, inset by half the stroke width so a border
/// on a tile edge is not cut in half. Returns `(x1, y1, x2, y2)` per edge.
pub fn outline_segments(outline: &SelectionRect, width: f64) -> Vec<(f64, f64, f64, f64)> {
    let inset = width / 2.0;
    let Rect { x, y, w, h } = outline.rect;
    let (left, right) = (x + inset, x + w - inset);
    let (top, bottom) = (y + inset, y + h - inset);
    let mut segments = Vec::with_capacity(4);
    if outline.draw_top {
        segments.push((x, top, x + w, top));
    }
    if outline.draw_bottom {
        segments.push((x, bottom, x + w, bottom));
    }
    if outline.draw_left {
        segments.push((left, y, left, y + h));
    }
    if outline.draw_right {
        segments.push((right, y, right, y + h));
    }
    segments
}
