//! The explicit grid state handle.
//!
//! Handlers, commands and the renderer all receive this by reference
//! instead of reaching for globals.

use super::editing::EditSession;
use crate::config::GridConfig;
use crate::damage::Damage;
use crate::history::{Command, CommandManager, CommandTarget};
use crate::interaction::ResizeGuide;
use crate::layout::{Axis, GridLayout, Viewport};
use crate::selection::SelectionModel;
use crate::store::CellStore;
use crate::tiles::DrawContext;

/// Region of the wrapper a pointer position falls in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Zone {
    /// Top-left box where the headers meet.
    Corner,
    ColumnHeader,
    RowHeader,
    Cells,
}

pub struct GridState {
    pub config: GridConfig,
    pub layout: GridLayout,
    pub store: CellStore,
    pub viewport: Viewport,
    pub selection: SelectionModel,
    pub history: CommandManager,
    pub edit: Option<EditSession>,
    /// Live line shown while a row/column resize drag is in progress.
    pub resize_guide: Option<ResizeGuide>,
    pub damage: Damage,
}

impl GridState {
    pub fn new(config: GridConfig) -> Self {
        let layout = GridLayout::new(&config);
        Self {
            selection: SelectionModel::new(config.total_rows, config.total_cols),
            history: CommandManager::new(config.history_limit),
            layout,
            store: CellStore::new(),
            viewport: Viewport::default(),
            edit: None,
            resize_guide: None,
            damage: Damage::none(),
            config,
        }
    }

    pub fn header_width(&self) -> f64 {
        f64::from(self.config.header_width)
    }

    pub fn header_height(&self) -> f64 {
        f64::from(self.config.header_height)
    }

    /// Classify a wrapper-relative position.
    pub fn zone_at(&self, x: f64, y: f64) -> Zone {
        match (x < self.header_width(), y < self.header_height()) {
            (true, true) => Zone::Corner,
            (false, true) => Zone::ColumnHeader,
            (true, false) => Zone::RowHeader,
            (false, false) => Zone::Cells,
        }
    }

    /// Wrapper-relative position to content coordinates.
    pub fn content_point(&self, x: f64, y: f64) -> (f64, f64) {
        self.viewport
            .to_content(x - self.header_width(), y - self.header_height())
    }

    /// Cell under a wrapper-relative position. Positions outside the visible
    /// area extrapolate to the cells beyond it, clamped to the grid.
    pub fn cell_at(&self, x: f64, y: f64) -> (u32, u32) {
        let (cx, cy) = self.content_point(x, y);
        (self.layout.row_at_y(cy), self.layout.col_at_x(cx))
    }

    /// Record that something needs repainting.
    pub fn mark(&mut self, damage: Damage) {
        self.damage.merge(damage);
    }

    /// Change the selection; repaints the old and new areas if it changed.
    pub fn update_selection(&mut self, change: impl FnOnce(&mut SelectionModel)) {
        let before = self.selection.current().clone();
        change(&mut self.selection);
        if *self.selection.current() == before {
            return;
        }
        let (rows, cols) = (self.layout.row_count(), self.layout.col_count());
        let mut damage = Damage::none();
        damage.regions.push(before.bounds(rows, cols));
        damage
            .regions
            .push(self.selection.current().bounds(rows, cols));
        damage.headers = true;
        self.mark(damage);
    }

    /// Run a command through the history. Returns `false` for no-ops.
    pub fn execute(&mut self, command: Command) -> bool {
        let mut history = std::mem::take(&mut self.history);
        let damage = history.execute(command, self);
        self.history = history;
        self.finish(damage)
    }

    pub fn undo(&mut self) -> bool {
        let mut history = std::mem::take(&mut self.history);
        let damage = history.undo(self);
        self.history = history;
        self.finish(damage)
    }

    pub fn redo(&mut self) -> bool {
        let mut history = std::mem::take(&mut self.history);
        let damage = history.redo(self);
        self.history = history;
        self.finish(damage)
    }

    fn finish(&mut self, damage: Option<Damage>) -> bool {
        match damage {
            Some(damage) => {
                if damage.layout {
                    self.viewport.clamp_scroll(&self.layout);
                }
                self.mark(damage);
                true
            }
            None => false,
        }
    }

    /// Drawing inputs for tiles.
    pub fn draw_context(&self) -> DrawContext<'_> {
        DrawContext {
            layout: &self.layout,
            store: &self.store,
            selection: self.selection.current(),
            editing: self.edit.as_ref().map(|e| (e.row, e.col)),
            min_text_width: self.config.min_text_width,
        }
    }
}

impl CommandTarget for GridState {
    fn cell_value(&self, row: u32, col: u32) -> String {
        self.store.value(row, col).to_string()
    }

    fn write_cell(&mut self, row: u32, col: u32, value: &str) {
        self.store.set(row, col, value);
    }

    fn size(&self, axis: Axis, index: u32) -> u32 {
        self.layout.get_size(axis, index)
    }

    fn write_size(&mut self, axis: Axis, index: u32, size: u32) -> u32 {
        self.layout.set_size(axis, index, size)
    }

    fn min_size(&self, axis: Axis) -> u32 {
        self.layout.axis(axis).min_size()
    }

    fn clamp_index(&self, axis: Axis, index: u32) -> u32 {
        self.layout.axis(axis).clamp_index(index)
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;

    fn state() -> GridState {
        let mut state = GridState::new(GridConfig {
            total_rows: 500,
            total_cols: 30,
            ..GridConfig::default()
        });
        state.viewport.resize(800.0, 600.0, &state.layout);
        state
    }

    #[test]
    fn zones() {
        let state = state();
        assert_eq!(state.zone_at(10.0, 10.0), Zone::Corner);
        assert_eq!(state.zone_at(60.0, 10.0), Zone::ColumnHeader);
        assert_eq!(state.zone_at(10.0, 60.0), Zone::RowHeader);
        assert_eq!(state.zone_at(60.0, 60.0), Zone::Cells);
    }

    #[test]
    fn cell_at_accounts_for_headers_and_scroll() {
        let mut state = state();
        assert_eq!(state.cell_at(50.0, 28.0), (0, 0));
        assert_eq!(state.cell_at(155.0, 60.0), (1, 1));
        state.viewport.set_scroll(100.0, 280.0, &state.layout);
        assert_eq!(state.cell_at(50.0, 28.0), (10, 1));
        // Beyond the right edge extrapolates, clamped to the grid
        assert_eq!(state.cell_at(1e7, -1e7).1, 29);
        assert_eq!(state.cell_at(1e7, -1e7).0, 0);
    }

    #[test]
    fn selection_change_marks_damage() {
        let mut state = state();
        state.update_selection(|m| m.select_cell(0, 0));
        assert!(state.damage.is_empty());
        state.update_selection(|m| m.select_cell(5, 5));
        assert_eq!(state.damage.regions.len(), 2);
        assert!(state.damage.headers);
    }

    #[test]
    fn commands_route_through_history() {
        let mut state = state();
        let command = Command::edit_cell(&state, 2, 2, "x");
        assert!(state.execute(command));
        assert_eq!(state.store.value(2, 2), "x");
        assert!(state.undo());
        assert_eq!(state.store.value(2, 2), "");
        assert!(state.redo());
        assert!(!state.redo());
        assert_eq!(state.damage.cells, vec![(2, 2), (2, 2), (2, 2)]);
    }
}
