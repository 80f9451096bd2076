use super::{PointerEvent, PointerHandler, ResizeGuide};
use crate::grid::{GridState, Zone};
use crate::damage::Damage;
use crate::history::Command;
use crate::layout::Axis;

/// Drag a column's right edge (or a row's bottom edge) in the header band.
#[derive(Debug)]
pub struct ResizeHandler {
    axis: Axis,
    drag: Option<ResizeDrag>,
}

#[derive(Debug, Clone, Copy)]
struct ResizeDrag {
    index: u32,
    start_pos: f64,
    start_size: u32,
}

impl ResizeHandler {
    pub fn new(axis: Axis) -> Self {
        Self { axis, drag: None }
    }

    fn zone(&self) -> Zone {
        match self.axis {
            Axis::Column => Zone::ColumnHeader,
            Axis::Row => Zone::RowHeader,
        }
    }

    /// Position along this handler's axis, in wrapper coordinates.
    fn along(&self, event: &PointerEvent) -> f64 {
        match self.axis {
            Axis::Column => event.x,
            Axis::Row => event.y,
        }
    }

    /// Index whose trailing edge lies within tolerance of the pointer.
    pub fn boundary_at(&self, event: &PointerEvent, state: &GridState) -> Option<u32> {
        if state.zone_at(event.x, event.y) != self.zone() {
            return None;
        }
        let (cx, cy) = state.content_point(event.x, event.y);
        let pos = match self.axis {
            Axis::Column => cx,
            Axis::Row => cy,
        };
        let sizes = state.layout.axis(self.axis);
        let tolerance = state.config.resize_handle_tolerance;
        let index = sizes.index_at(pos);
        #[allow(clippy::cast_precision_loss)]
        let leading = sizes.offset(index) as f64;
        #[allow(clippy::cast_precision_loss)]
        let trailing = sizes.offset(index.saturating_add(1)) as f64;
        if (trailing - pos).abs() <= tolerance {
            Some(index)
        } else if index > 0 && (pos - leading).abs() <= tolerance {
            Some(index - 1)
        } else {
            None
        }
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn size_for(&self, drag: &ResizeDrag, event: &PointerEvent, min: u32) -> u32 {
        let proposed = f64::from(drag.start_size) + self.along(event) - drag.start_pos;
        let proposed = proposed.round().clamp(0.0, f64::from(u32::MAX));
        (proposed as u32).max(min)
    }
}

impl PointerHandler for ResizeHandler {
    fn name(&self) -> &'static str {
        match self.axis {
            Axis::Column => "column-resize",
            Axis::Row => "row-resize",
        }
    }

    fn hit_test(&self, event: &PointerEvent, state: &GridState) -> bool {
        self.boundary_at(event, state).is_some()
    }

    fn pointer_down(&mut self, event: &PointerEvent, state: &mut GridState) {
        let Some(index) = self.boundary_at(event, state) else {
            return;
        };
        let start_size = state.layout.get_size(self.axis, index);
        self.drag = Some(ResizeDrag {
            index,
            start_pos: self.along(event),
            start_size,
        });
        state.resize_guide = Some(ResizeGuide {
            axis: self.axis,
            index,
            size: start_size,
        });
        state.mark(Damage::headers());
    }

    fn pointer_move(&mut self, event: &PointerEvent, state: &mut GridState) {
        let Some(drag) = self.drag else {
            return;
        };
        let min = state.layout.axis(self.axis).min_size();
        let size = self.size_for(&drag, event, min);
        let guide = ResizeGuide {
            axis: self.axis,
            index: drag.index,
            size,
        };
        if state.resize_guide != Some(guide) {
            state.resize_guide = Some(guide);
            state.mark(Damage::headers());
        }
    }

    fn pointer_up(&mut self, event: &PointerEvent, state: &mut GridState) {
        let Some(drag) = self.drag.take() else {
            return;
        };
        state.resize_guide = None;
        state.mark(Damage::headers());
        let min = state.layout.axis(self.axis).min_size();
        let size = self.size_for(&drag, event, min);
        if size != drag.start_size {
            let command = Command::resize(state, self.axis, drag.index, size);
            state.execute(command);
        }
    }

    fn cursor(&self) -> &'static str {
        match self.axis {
            Axis::Column => "col-resize",
            Axis::Row => "row-resize",
        }
    }
}
