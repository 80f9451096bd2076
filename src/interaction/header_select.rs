use super::{AutoScrollAxes, PointerEvent, PointerHandler};
use crate::grid::{GridState, Zone};
use crate::layout::Axis;
use crate::types::Selection;

/// Click in the corner box selects everything.
#[derive(Debug, Default)]
pub struct CornerHandler;

impl PointerHandler for CornerHandler {
    fn name(&self) -> &'static str {
        "corner"
    }

    fn hit_test(&self, event: &PointerEvent, state: &GridState) -> bool {
        state.zone_at(event.x, event.y) == Zone::Corner
    }

    fn pointer_down(&mut self, _event: &PointerEvent, state: &mut GridState) {
        state.update_selection(|m| m.select_all());
    }

    fn pointer_move(&mut self, _event: &PointerEvent, _state: &mut GridState) {}

    fn pointer_up(&mut self, _event: &PointerEvent, _state: &mut GridState) {}
}

/// Click or drag across row/column headers.
#[derive(Debug)]
pub struct HeaderSelectHandler {
    axis: Axis,
    anchor: Option<u32>,
}

impl HeaderSelectHandler {
    pub fn new(axis: Axis) -> Self {
        Self { axis, anchor: None }
    }

    fn zone(&self) -> Zone {
        match self.axis {
            Axis::Column => Zone::ColumnHeader,
            Axis::Row => Zone::RowHeader,
        }
    }

    fn index_at(&self, event: &PointerEvent, state: &GridState) -> u32 {
        let (row, col) = state.cell_at(event.x, event.y);
        match self.axis {
            Axis::Column => col,
            Axis::Row => row,
        }
    }

    /// Anchor index for shift-click: the current selection's focus along this axis.
    fn focus_index(&self, selection: &Selection) -> u32 {
        let (row, col) = selection.focus();
        match self.axis {
            Axis::Column => col,
            Axis::Row => row,
        }
    }

    fn extend(&self, state: &mut GridState, anchor: u32, index: u32) {
        let axis = self.axis;
        state.update_selection(|m| match axis {
            Axis::Column => m.extend_columns(anchor, index),
            Axis::Row => m.extend_rows(anchor, index),
        });
    }
}

impl PointerHandler for HeaderSelectHandler {
    fn name(&self) -> &'static str {
        match self.axis {
            Axis::Column => "column-header",
            Axis::Row => "row-header",
        }
    }

    fn hit_test(&self, event: &PointerEvent, state: &GridState) -> bool {
        state.zone_at(event.x, event.y) == self.zone()
    }

    fn pointer_down(&mut self, event: &PointerEvent, state: &mut GridState) {
        let index = self.index_at(event, state);
        if event.shift {
            let anchor = self.focus_index(state.selection.current());
            self.anchor = Some(anchor);
            self.extend(state, anchor, index);
            return;
        }
        let axis = self.axis;
        let additive = event.ctrl;
        state.update_selection(|m| match axis {
            Axis::Column => m.select_column(index, additive),
            Axis::Row => m.select_row(index, additive),
        });
        // Ctrl-click toggles membership only; it does not start a drag range.
        self.anchor = if additive { None } else { Some(index) };
    }

    fn pointer_move(&mut self, event: &PointerEvent, state: &mut GridState) {
        let Some(anchor) = self.anchor else {
            return;
        };
        let index = self.index_at(event, state);
        self.extend(state, anchor, index);
    }

    fn pointer_up(&mut self, _event: &PointerEvent, _state: &mut GridState) {
        self.anchor = None;
    }

    fn auto_scroll(&self) -> AutoScrollAxes {
        match (self.anchor, self.axis) {
            (None, _) => AutoScrollAxes::None,
            (Some(_), Axis::Column) => AutoScrollAxes::Horizontal,
            (Some(_), Axis::Row) => AutoScrollAxes::Vertical,
        }
    }
}
