use std::collections::BTreeSet;

use serde::Serialize;

use super::CellRegion;
use crate::layout::Axis;

/// Rectangular selection produced by dragging or shift-extending.
///
/// `start_*` / `end_*` are normalized; `anchor_*` is where the gesture began
/// (drawn without fill) and `active_*` is where it currently ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RangeSelection {
    pub start_row: u32,
    pub start_col: u32,
    pub end_row: u32,
    pub end_col: u32,
    pub anchor_row: u32,
    pub anchor_col: u32,
    pub active_row: u32,
    pub active_col: u32,
}

impl RangeSelection {
    pub fn new(anchor: (u32, u32), active: (u32, u32)) -> Self {
        let region = CellRegion::new(anchor.0, anchor.1, active.0, active.1);
        Self {
            start_row: region.start_row,
            start_col: region.start_col,
            end_row: region.end_row,
            end_col: region.end_col,
            anchor_row: anchor.0,
            anchor_col: anchor.1,
            active_row: active.0,
            active_col: active.1,
        }
    }

    pub fn region(&self) -> CellRegion {
        CellRegion::new(self.start_row, self.start_col, self.end_row, self.end_col)
    }

    pub fn is_anchor(&self, row: u32, col: u32) -> bool {
        row == self.anchor_row && col == self.anchor_col
    }
}

/// How strongly a header cell reflects the current selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderHighlight {
    None,
    /// Some cells of the row/column are selected.
    Partial,
    /// The whole row/column is selected.
    Full,
}

/// The single active selection of a grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Selection {
    Cell { row: u32, col: u32 },
    Row { row: u32 },
    Column { col: u32 },
    Range(RangeSelection),
    MultiRow { rows: BTreeSet<u32> },
    MultiColumn { cols: BTreeSet<u32> },
}

impl Default for Selection {
    fn default() -> Self {
        Selection::Cell { row: 0, col: 0 }
    }
}

impl Selection {
    /// Range from `anchor` to `active`; collapses to a single cell when they coincide.
    pub fn range(anchor: (u32, u32), active: (u32, u32)) -> Self {
        if anchor == active {
            Selection::Cell {
                row: anchor.0,
                col: anchor.1,
            }
        } else {
            Selection::Range(RangeSelection::new(anchor, active))
        }
    }

    /// Multi-row selection; a single member normalizes to [`Selection::Row`].
    pub fn rows(rows: BTreeSet<u32>) -> Self {
        match (rows.len(), rows.first()) {
            (1, Some(&row)) => Selection::Row { row },
            (0, _) => Selection::default(),
            _ => Selection::MultiRow { rows },
        }
    }

    /// Multi-column selection; a single member normalizes to [`Selection::Column`].
    pub fn columns(cols: BTreeSet<u32>) -> Self {
        match (cols.len(), cols.first()) {
            (1, Some(&col)) => Selection::Column { col },
            (0, _) => Selection::default(),
            _ => Selection::MultiColumn { cols },
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Selection::Cell { .. } => "cell",
            Selection::Row { .. } => "row",
            Selection::Column { .. } => "column",
            Selection::Range(_) => "range",
            Selection::MultiRow { .. } => "multiRow",
            Selection::MultiColumn { .. } => "multiColumn",
        }
    }

    pub fn contains(&self, row: u32, col: u32) -> bool {
        match self {
            Selection::Cell { row: r, col: c } => *r == row && *c == col,
            Selection::Row { row: r } => *r == row,
            Selection::Column { col: c } => *c == col,
            Selection::Range(range) => range.region().contains(row, col),
            Selection::MultiRow { rows } => rows.contains(&row),
            Selection::MultiColumn { cols } => cols.contains(&col),
        }
    }

    pub fn is_single_cell(&self) -> bool {
        matches!(self, Selection::Cell { .. })
    }

    /// The cell keyboard navigation and editing start from.
    pub fn focus(&self) -> (u32, u32) {
        match self {
            Selection::Cell { row, col } => (*row, *col),
            Selection::Row { row } => (*row, 0),
            Selection::Column { col } => (0, *col),
            Selection::Range(range) => (range.anchor_row, range.anchor_col),
            Selection::MultiRow { rows } => (rows.first().copied().unwrap_or(0), 0),
            Selection::MultiColumn { cols } => (0, cols.first().copied().unwrap_or(0)),
        }
    }

    /// Cell the selection currently extends to (the focus for non-ranges).
    pub fn active(&self) -> (u32, u32) {
        match self {
            Selection::Range(range) => (range.active_row, range.active_col),
            other => other.focus(),
        }
    }

    /// Disjoint rectangles making up the selection, one per contiguous run.
    pub fn regions(&self, total_rows: u32, total_cols: u32) -> Vec<CellRegion> {
        let last_row = total_rows.saturating_sub(1);
        let last_col = total_cols.saturating_sub(1);
        match self {
            Selection::Cell { row, col } => vec![CellRegion::cell(*row, *col)],
            Selection::Row { row } => vec![CellRegion::new(*row, 0, *row, last_col)],
            Selection::Column { col } => vec![CellRegion::new(0, *col, last_row, *col)],
            Selection::Range(range) => vec![range.region()],
            Selection::MultiRow { rows } => contiguous_runs(rows)
                .into_iter()
                .map(|(a, b)| CellRegion::new(a, 0, b, last_col))
                .collect(),
            Selection::MultiColumn { cols } => contiguous_runs(cols)
                .into_iter()
                .map(|(a, b)| CellRegion::new(0, a, last_row, b))
                .collect(),
        }
    }

    /// Bounding rectangle of the whole selection.
    pub fn bounds(&self, total_rows: u32, total_cols: u32) -> CellRegion {
        self.regions(total_rows, total_cols)
            .into_iter()
            .reduce(|acc, r| acc.union(&r))
            .unwrap_or_else(|| CellRegion::cell(0, 0))
    }

    /// Force every index into `[0, total - 1]`.
    pub fn clamped(&self, total_rows: u32, total_cols: u32) -> Selection {
        let max_row = total_rows.saturating_sub(1);
        let max_col = total_cols.saturating_sub(1);
        let cell = |(r, c): (u32, u32)| (r.min(max_row), c.min(max_col));
        match self {
            Selection::Cell { row, col } => {
                let (row, col) = cell((*row, *col));
                Selection::Cell { row, col }
            }
            Selection::Row { row } => Selection::Row {
                row: (*row).min(max_row),
            },
            Selection::Column { col } => Selection::Column {
                col: (*col).min(max_col),
            },
            Selection::Range(range) => Selection::range(
                cell((range.anchor_row, range.anchor_col)),
                cell((range.active_row, range.active_col)),
            ),
            Selection::MultiRow { rows } => {
                Selection::rows(rows.iter().map(|r| (*r).min(max_row)).collect())
            }
            Selection::MultiColumn { cols } => {
                Selection::columns(cols.iter().map(|c| (*c).min(max_col)).collect())
            }
        }
    }

    /// Highlight state of a row header (`Axis::Row`) or column header (`Axis::Column`).
    pub fn header_highlight(
        &self,
        axis: Axis,
        index: u32,
        total_rows: u32,
        total_cols: u32,
    ) -> HeaderHighlight {
        let last_row = total_rows.saturating_sub(1);
        let last_col = total_cols.saturating_sub(1);
        let mut highlight = HeaderHighlight::None;
        for region in self.regions(total_rows, total_cols) {
            let (covered, full) = match axis {
                Axis::Row => (
                    index >= region.start_row && index <= region.end_row,
                    region.start_col == 0 && region.end_col >= last_col,
                ),
                Axis::Column => (
                    index >= region.start_col && index <= region.end_col,
                    region.start_row == 0 && region.end_row >= last_row,
                ),
            };
            if covered {
                if full {
                    return HeaderHighlight::Full;
                }
                highlight = HeaderHighlight::Partial;
            }
        }
        highlight
    }
}

/// Inclusive `(first, last)` runs of consecutive indices.
fn contiguous_runs(indices: &BTreeSet<u32>) -> Vec<(u32, u32)> {
    let mut runs: Vec<(u32, u32)> = Vec::new();
    for &index in indices {
        match runs.last_mut() {
            Some((_, end)) if end.checked_add(1) == Some(index) => *end = index,
            _ => runs.push((index, index)),
        }
    }
    runs
}
