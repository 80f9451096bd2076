use super::{
    AutoScrollAxes, CellSelectHandler, CornerHandler, HeaderSelectHandler, PointerEvent,
    ResizeHandler,
};
use crate::grid::GridState;
use crate::layout::Axis;

/// One interactive behavior of the grid surface.
pub trait PointerHandler {
    fn name(&self) -> &'static str;

    /// Whether a pointer-down at `event` belongs to this handler.
    fn hit_test(&self, event: &PointerEvent, state: &GridState) -> bool;

    fn pointer_down(&mut self, event: &PointerEvent, state: &mut GridState);
    fn pointer_move(&mut self, event: &PointerEvent, state: &mut GridState);
    fn pointer_up(&mut self, event: &PointerEvent, state: &mut GridState);

    /// Directions the current gesture wants auto-scroll in.
    fn auto_scroll(&self) -> AutoScrollAxes {
        AutoScrollAxes::None
    }

    /// CSS cursor while hovering a hit position.
    fn cursor(&self) -> &'static str {
        "default"
    }
}

/// Ordered handler list with at most one active gesture.
pub struct EventRouter {
    handlers: Vec<Box<dyn PointerHandler>>,
    active: Option<usize>,
    last_pointer: Option<PointerEvent>,
}

impl Default for EventRouter {
    fn default() -> Self {
        Self::with_default_handlers()
    }
}

impl EventRouter {
    pub fn new(handlers: Vec<Box<dyn PointerHandler>>) -> Self {
        Self {
            handlers,
            active: None,
            last_pointer: None,
        }
    }

    /// Resize handles first, then the corner, headers, and finally cells.
    pub fn with_default_handlers() -> Self {
        Self::new(vec![
            Box::new(ResizeHandler::new(Axis::Column)),
            Box::new(ResizeHandler::new(Axis::Row)),
            Box::new(CornerHandler),
            Box::new(HeaderSelectHandler::new(Axis::Column)),
            Box::new(HeaderSelectHandler::new(Axis::Row)),
            Box::new(CellSelectHandler::default()),
        ])
    }

    /// Name of the handler owning the current gesture.
    pub fn active_name(&self) -> Option<&'static str> {
        self.active
            .and_then(|i| self.handlers.get(i))
            .map(|h| h.name())
    }

    pub fn is_dragging(&self) -> bool {
        self.active.is_some()
    }

    pub fn last_pointer(&self) -> Option<PointerEvent> {
        self.last_pointer
    }

    pub fn auto_scroll_axes(&self) -> AutoScrollAxes {
        self.active
            .and_then(|i| self.handlers.get(i))
            .map_or(AutoScrollAxes::None, |h| h.auto_scroll())
    }

    /// Start a gesture with the first handler whose hit test matches.
    /// Returns whether any handler took it.
    pub fn pointer_down(&mut self, event: &PointerEvent, state: &mut GridState) -> bool {
        if self.active.is_some() {
            // The previous gesture never saw its pointer-up.
            let last = self.last_pointer.unwrap_or(*event);
            self.pointer_up(&last, state);
        }
        self.last_pointer = Some(*event);
        let Some(index) = self
            .handlers
            .iter()
            .position(|h| h.hit_test(event, state))
        else {
            return false;
        };
        if let Some(handler) = self.handlers.get_mut(index) {
            log::debug!("pointer down -> {}", handler.name());
            handler.pointer_down(event, state);
            self.active = Some(index);
        }
        true
    }

    /// Forward a move to the active handler, if any.
    pub fn pointer_move(&mut self, event: &PointerEvent, state: &mut GridState) -> bool {
        self.last_pointer = Some(*event);
        let Some(handler) = self.active.and_then(|i| self.handlers.get_mut(i)) else {
            return false;
        };
        handler.pointer_move(event, state);
        true
    }

    /// End the active gesture.
    pub fn pointer_up(&mut self, event: &PointerEvent, state: &mut GridState) -> bool {
        self.last_pointer = Some(*event);
        let Some(handler) = self.active.take().and_then(|i| self.handlers.get_mut(i)) else {
            return false;
        };
        handler.pointer_up(event, state);
        true
    }

    /// Re-run the active handler's move with the last pointer position
    /// (after auto-scroll changed what lies under it).
    pub fn replay_move(&mut self, state: &mut GridState) -> bool {
        match self.last_pointer {
            Some(event) => self.pointer_move(&event, state),
            None => false,
        }
    }

    /// Cursor for a hover position when no gesture is active.
    pub fn hover_cursor(&self, event: &PointerEvent, state: &GridState) -> &'static str {
        self.handlers
            .iter()
            .find(|h| h.hit_test(event, state))
            .map_or("default", |h| h.cursor())
    }
}
