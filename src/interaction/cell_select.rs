use super::{AutoScrollAxes, PointerEvent, PointerHandler};
use crate::grid::{GridState, Zone};

/// Click and drag-select inside the cell area.
#[derive(Debug, Default)]
pub struct CellSelectHandler {
    dragging: bool,
}

impl PointerHandler for CellSelectHandler {
    fn name(&self) -> &'static str {
        "cells"
    }

    fn hit_test(&self, event: &PointerEvent, state: &GridState) -> bool {
        state.zone_at(event.x, event.y) == Zone::Cells
    }

    fn pointer_down(&mut self, event: &PointerEvent, state: &mut GridState) {
        let (row, col) = state.cell_at(event.x, event.y);
        if event.shift {
            state.update_selection(|m| m.extend_to(row, col));
        } else {
            state.update_selection(|m| m.select_cell(row, col));
        }
        self.dragging = true;
    }

    fn pointer_move(&mut self, event: &PointerEvent, state: &mut GridState) {
        if !self.dragging {
            return;
        }
        let (row, col) = state.cell_at(event.x, event.y);
        state.update_selection(|m| m.extend_to(row, col));
    }

    fn pointer_up(&mut self, _event: &PointerEvent, _state: &mut GridState) {
        self.dragging = false;
    }

    fn auto_scroll(&self) -> AutoScrollAxes {
        if self.dragging {
            AutoScrollAxes::Both
        } else {
            AutoScrollAxes::None
        }
    }

    fn cursor(&self) -> &'static str {
        "cell"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GridConfig;
    use crate::types::{RangeSelection, Selection};

    #[test]
    fn drag_then_return_collapses() {
        let mut state = GridState::new(GridConfig {
            total_rows: 100,
            total_cols: 20,
            ..GridConfig::default()
        });
        state.viewport.resize(800.0, 600.0, &state.layout);
        let mut handler = CellSelectHandler::default();
        // (2, 3)
        handler.pointer_down(&PointerEvent::at(360.0, 100.0), &mut state);
        // (10, 1)
        handler.pointer_move(&PointerEvent::at(160.0, 320.0), &mut state);
        assert_eq!(
            *state.selection.current(),
            Selection::Range(RangeSelection::new((2, 3), (10, 1)))
        );
        handler.pointer_move(&PointerEvent::at(360.0, 100.0), &mut state);
        assert_eq!(*state.selection.current(), Selection::Cell { row: 2, col: 3 });
        handler.pointer_up(&PointerEvent::at(360.0, 100.0), &mut state);
        // Moves after release are ignored
        handler.pointer_move(&PointerEvent::at(160.0, 320.0), &mut state);
        assert!(state.selection.current().is_single_cell());
    }
}
