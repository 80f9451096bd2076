//! Selection state transitions.
//!
//! [`SelectionModel`] owns the single active [`Selection`] and implements the
//! gestures that change it: clicks, drags, header picks, keyboard moves.
//! Painting lives in [`crate::render::selection`].

use std::collections::BTreeSet;

use crate::types::Selection;

/// Keyboard movement direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub fn delta(self) -> (i64, i64) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }

    pub fn reversed(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}

/// The active selection plus the grid bounds it is clamped to.
#[derive(Debug, Clone)]
pub struct SelectionModel {
    selection: Selection,
    total_rows: u32,
    total_cols: u32,
}

impl SelectionModel {
    pub fn new(total_rows: u32, total_cols: u32) -> Self {
        Self {
            selection: Selection::default(),
            total_rows,
            total_cols,
        }
    }

    pub fn current(&self) -> &Selection {
        &self.selection
    }

    fn last_row(&self) -> u32 {
        self.total_rows.saturating_sub(1)
    }

    fn last_col(&self) -> u32 {
        self.total_cols.saturating_sub(1)
    }

    fn clamp_cell(&self, row: u32, col: u32) -> (u32, u32) {
        (row.min(self.last_row()), col.min(self.last_col()))
    }

    /// Replace the selection wholesale (clamped into the grid).
    pub fn replace(&mut self, selection: Selection) {
        self.selection = selection.clamped(self.total_rows, self.total_cols);
    }

    /// Plain click on a cell.
    pub fn select_cell(&mut self, row: u32, col: u32) {
        let (row, col) = self.clamp_cell(row, col);
        self.selection = Selection::Cell { row, col };
    }

    /// Extend from the current anchor to `(row, col)`.
    ///
    /// Used by drag-select and shift-click; returning to the anchor
    /// collapses back to a single cell.
    pub fn extend_to(&mut self, row: u32, col: u32) {
        let anchor = self.selection.focus();
        let active = self.clamp_cell(row, col);
        self.selection = Selection::range(anchor, active);
    }

    /// Click on a row header. With `additive` the row joins the current
    /// row selection instead of replacing it.
    pub fn select_row(&mut self, row: u32, additive: bool) {
        let row = row.min(self.last_row());
        self.selection = match (&self.selection, additive) {
            (Selection::Row { row: existing }, true) => {
                Selection::rows(BTreeSet::from([*existing, row]))
            }
            (Selection::MultiRow { rows }, true) => {
                let mut rows = rows.clone();
                rows.insert(row);
                Selection::rows(rows)
            }
            _ => Selection::Row { row },
        };
    }

    /// Click on a column header; see [`SelectionModel::select_row`].
    pub fn select_column(&mut self, col: u32, additive: bool) {
        let col = col.min(self.last_col());
        self.selection = match (&self.selection, additive) {
            (Selection::Column { col: existing }, true) => {
                Selection::columns(BTreeSet::from([*existing, col]))
            }
            (Selection::MultiColumn { cols }, true) => {
                let mut cols = cols.clone();
                cols.insert(col);
                Selection::columns(cols)
            }
            _ => Selection::Column { col },
        };
    }

    /// Drag across row headers: full-width range from `anchor_row` to `row`.
    pub fn extend_rows(&mut self, anchor_row: u32, row: u32) {
        let anchor_row = anchor_row.min(self.last_row());
        let row = row.min(self.last_row());
        self.selection = if anchor_row == row {
            Selection::Row { row }
        } else {
            Selection::range((anchor_row, 0), (row, self.last_col()))
        };
    }

    /// Drag across column headers: full-height range from `anchor_col` to `col`.
    pub fn extend_columns(&mut self, anchor_col: u32, col: u32) {
        let anchor_col = anchor_col.min(self.last_col());
        let col = col.min(self.last_col());
        self.selection = if anchor_col == col {
            Selection::Column { col }
        } else {
            Selection::range((0, anchor_col), (self.last_row(), col))
        };
    }

    /// Select every cell.
    pub fn select_all(&mut self) {
        self.selection = Selection::range((0, 0), (self.last_row(), self.last_col()));
    }

    fn step(&self, (row, col): (u32, u32), direction: Direction) -> (u32, u32) {
        let (dr, dc) = direction.delta();
        let row = (i64::from(row) + dr).clamp(0, i64::from(self.last_row()));
        let col = (i64::from(col) + dc).clamp(0, i64::from(self.last_col()));
        (
            u32::try_from(row).unwrap_or(0),
            u32::try_from(col).unwrap_or(0),
        )
    }

    /// Move the focus cell one step, collapsing to a single cell.
    pub fn move_focus(&mut self, direction: Direction) {
        let (row, col) = self.step(self.selection.focus(), direction);
        self.selection = Selection::Cell { row, col };
    }

    /// Move the active end one step, keeping the anchor (Shift+Arrow).
    pub fn extend_focus(&mut self, direction: Direction) {
        let anchor = self.selection.focus();
        let active = self.step(self.selection.active(), direction);
        self.selection = Selection::range(anchor, active);
    }

    /// Whether an edit may start: only on a single-cell selection.
    pub fn editable_cell(&self) -> Option<(u32, u32)> {
        match self.selection {
            Selection::Cell { row, col } => Some((row, col)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;
    use crate::types::{CellRegion, RangeSelection};

    fn model() -> SelectionModel {
        SelectionModel::new(100, 20)
    }

    #[test]
    fn drag_produces_normalized_range() {
        let mut m = model();
        m.select_cell(2, 3);
        m.extend_to(5, 4);
        m.extend_to(10, 1);
        assert_eq!(
            *m.current(),
            Selection::Range(RangeSelection {
                start_row: 2,
                start_col: 1,
                end_row: 10,
                end_col: 3,
                anchor_row: 2,
                anchor_col: 3,
                active_row: 10,
                active_col: 1,
            })
        );
        m.extend_to(2, 3);
        assert_eq!(*m.current(), Selection::Cell { row: 2, col: 3 });
    }

    #[test]
    fn extend_clamps_past_the_edge() {
        let mut m = model();
        m.select_cell(98, 18);
        m.extend_to(5_000, 5_000);
        assert_eq!(m.current().bounds(100, 20), CellRegion::new(98, 18, 99, 19));
    }

    #[test]
    fn additive_header_clicks_build_sets() {
        let mut m = model();
        m.select_row(3, false);
        m.select_row(7, true);
        m.select_row(5, true);
        m.select_row(7, true);
        assert_eq!(
            *m.current(),
            Selection::MultiRow {
                rows: BTreeSet::from([3, 5, 7])
            }
        );
        m.select_row(9, false);
        assert_eq!(*m.current(), Selection::Row { row: 9 });
        m.select_column(1, true);
        assert_eq!(*m.current(), Selection::Column { col: 1 });
    }

    #[test]
    fn header_drag_spans_full_grid() {
        let mut m = model();
        m.extend_rows(4, 2);
        assert_eq!(m.current().bounds(100, 20), CellRegion::new(2, 0, 4, 19));
        m.extend_columns(3, 3);
        assert_eq!(*m.current(), Selection::Column { col: 3 });
        m.extend_columns(3, 6);
        assert_eq!(m.current().bounds(100, 20), CellRegion::new(0, 3, 99, 6));
    }

    #[test_case(Direction::Up, (0, 0); "up at top edge stays")]
    #[test_case(Direction::Left, (0, 0); "left at left edge stays")]
    #[test_case(Direction::Down, (1, 0); "down moves one row")]
    #[test_case(Direction::Right, (0, 1); "right moves one column")]
    fn arrow_moves_clamp(direction: Direction, expected: (u32, u32)) {
        let mut m = model();
        m.move_focus(direction);
        assert_eq!(m.current().focus(), expected);
    }

    #[test]
    fn shift_arrow_extends_from_anchor() {
        let mut m = model();
        m.select_cell(5, 5);
        m.extend_focus(Direction::Down);
        m.extend_focus(Direction::Right);
        assert_eq!(m.current().bounds(100, 20), CellRegion::new(5, 5, 6, 6));
        assert_eq!(m.current().focus(), (5, 5));
        m.move_focus(Direction::Up);
        assert_eq!(*m.current(), Selection::Cell { row: 4, col: 5 });
    }

    #[test]
    fn edits_only_on_single_cells() {
        let mut m = model();
        assert_eq!(m.editable_cell(), Some((0, 0)));
        m.select_all();
        assert_eq!(m.editable_cell(), None);
        m.select_column(2, false);
        assert_eq!(m.editable_cell(), None);
    }
}
