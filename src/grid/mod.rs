//! The grid engine: state, input routing, tiles and headers behind one API.
//!
//! [`Grid`] is backend-agnostic. The browser shell drives it with canvas
//! surfaces; tests and the CLI drive it with the recording backend.

mod clipboard;
mod debounce;
mod editing;
mod state;

pub use clipboard::{escape_cell_value, parse_tsv, region_to_tsv, regions_to_tsv};
pub use debounce::Debounce;
pub use editing::EditSession;
pub use state::{GridState, Zone};

use crate::config::GridConfig;
use crate::damage::Damage;
use crate::error::Result;
use crate::history::Command;
use crate::interaction::{
    auto_scroll_delta, map_key, EventRouter, KeyAction, KeyInput, PointerEvent,
};
use crate::render::{render_column_headers, render_row_headers, HeaderContext, SurfaceFactory};
use crate::selection::Direction;
use crate::stats::SelectionStats;
use crate::store::LoadSummary;
use crate::tiles::{TileManager, TileSpans};
use crate::types::Selection;

/// Outcome of a key press, for the shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyResponse {
    /// Not ours; let the browser handle it.
    Ignored,
    Handled,
    /// Put this text on the clipboard.
    Copy(String),
    /// Read the clipboard and call [`Grid::paste_text`].
    Paste,
}

pub struct Grid<F: SurfaceFactory> {
    state: GridState,
    router: EventRouter,
    tiles: TileManager<F>,
    col_header: F::Surface,
    row_header: F::Surface,
    /// Scroll or size changed since the last flush.
    viewport_moved: bool,
}

impl<F: SurfaceFactory> Grid<F> {
    /// Build a grid with a `width` x `height` cell viewport (headers excluded)
    /// and paint the first frame.
    pub fn new(
        config: GridConfig,
        factory: F,
        col_header: F::Surface,
        row_header: F::Surface,
        width: f64,
        height: f64,
    ) -> Result<Self> {
        config.validate()?;
        let spans = TileSpans::new(
            config.rows_per_tile,
            config.cols_per_tile,
            config.total_rows,
            config.total_cols,
        );
        let buffer = config.tile_buffer;
        let mut state = GridState::new(config);
        state.viewport.resize(width, height, &state.layout);
        state.mark(Damage::all());
        log::info!(
            "grid {}x{} with {}x{} tiles",
            state.layout.row_count(),
            state.layout.col_count(),
            spans.rows_per_tile,
            spans.cols_per_tile
        );
        let mut grid = Self {
            state,
            router: EventRouter::with_default_handlers(),
            tiles: TileManager::new(factory, spans, buffer),
            col_header,
            row_header,
            viewport_moved: true,
        };
        grid.flush();
        Ok(grid)
    }

    pub fn state(&self) -> &GridState {
        &self.state
    }

    pub fn tiles(&self) -> &TileManager<F> {
        &self.tiles
    }

    pub fn col_header(&self) -> &F::Surface {
        &self.col_header
    }

    pub fn row_header(&self) -> &F::Surface {
        &self.row_header
    }

    pub fn selection(&self) -> &Selection {
        self.state.selection.current()
    }

    /// Replace the selection (clamped into the grid).
    pub fn select(&mut self, selection: Selection) {
        self.state.update_selection(|m| m.replace(selection));
        self.flush();
    }

    pub fn edit_session(&self) -> Option<&EditSession> {
        self.state.edit.as_ref()
    }

    pub fn is_dragging(&self) -> bool {
        self.router.is_dragging()
    }

    // ---- pointer input ----

    /// Pointer pressed. An open editor is committed first.
    pub fn pointer_down(&mut self, event: &PointerEvent) -> bool {
        self.state.commit_edit(None);
        let handled = self.router.pointer_down(event, &mut self.state);
        self.flush();
        handled
    }

    pub fn pointer_move(&mut self, event: &PointerEvent) -> bool {
        let handled = self.router.pointer_move(event, &mut self.state);
        self.flush();
        handled
    }

    pub fn pointer_up(&mut self, event: &PointerEvent) -> bool {
        let handled = self.router.pointer_up(event, &mut self.state);
        self.flush();
        handled
    }

    pub fn hover_cursor(&self, event: &PointerEvent) -> &'static str {
        self.router.hover_cursor(event, &self.state)
    }

    /// One auto-scroll step for the active drag. Returns `false` once no
    /// drag is active, which ends the shell's animation loop.
    pub fn auto_scroll_tick(&mut self) -> bool {
        if !self.router.is_dragging() {
            return false;
        }
        let Some(pointer) = self.router.last_pointer() else {
            return true;
        };
        let (hw, hh) = (self.state.header_width(), self.state.header_height());
        let (dx, dy) = auto_scroll_delta(
            self.router.auto_scroll_axes(),
            (pointer.x, pointer.y),
            (hw, hh),
            (hw + self.state.viewport.width, hh + self.state.viewport.height),
            self.state.config.auto_scroll_edge,
            self.state.config.auto_scroll_max_step,
        );
        if (dx != 0.0 || dy != 0.0) && self.scroll_by(dx, dy) {
            self.router.replay_move(&mut self.state);
            self.flush();
        }
        true
    }

    // ---- keyboard ----

    pub fn key_down(&mut self, input: &KeyInput) -> KeyResponse {
        let Some(action) = map_key(input, self.state.is_editing()) else {
            return KeyResponse::Ignored;
        };
        log::trace!("key {:?} -> {action:?}", input.key);
        let response = match action {
            KeyAction::Move(direction) => {
                self.state.update_selection(|m| m.move_focus(direction));
                let (row, col) = self.state.selection.current().focus();
                self.scroll_cell_into_view(row, col);
                KeyResponse::Handled
            }
            KeyAction::Extend(direction) => {
                self.state.update_selection(|m| m.extend_focus(direction));
                let (row, col) = self.state.selection.current().active();
                self.scroll_cell_into_view(row, col);
                KeyResponse::Handled
            }
            KeyAction::CommitEdit(advance) => {
                self.state.commit_edit(advance);
                let (row, col) = self.state.selection.current().focus();
                self.scroll_cell_into_view(row, col);
                KeyResponse::Handled
            }
            KeyAction::CancelEdit => {
                self.state.cancel_edit();
                KeyResponse::Handled
            }
            KeyAction::Undo => {
                self.state.undo();
                KeyResponse::Handled
            }
            KeyAction::Redo => {
                self.state.redo();
                KeyResponse::Handled
            }
            KeyAction::SelectAll => {
                self.state.update_selection(|m| m.select_all());
                KeyResponse::Handled
            }
            KeyAction::Copy => KeyResponse::Copy(self.state.copy_selection()),
            KeyAction::Paste => KeyResponse::Paste,
            KeyAction::ClearSelection => {
                self.state.clear_selection();
                KeyResponse::Handled
            }
            KeyAction::BeginEdit { seed } => {
                if self.state.begin_edit(seed).is_some() {
                    KeyResponse::Handled
                } else {
                    KeyResponse::Ignored
                }
            }
        };
        self.flush();
        response
    }

    // ---- viewport ----

    /// Scroll to an absolute content offset (clamped).
    pub fn scroll_to(&mut self, x: f64, y: f64) -> bool {
        let changed = self.state.viewport.set_scroll(x, y, &self.state.layout);
        self.viewport_moved |= changed;
        self.flush();
        changed
    }

    /// Adopt a scroll offset the host already applied (native scrolling)
    /// without repainting. Hit testing uses it at once; tiles and headers
    /// catch up on the next flush.
    pub fn sync_scroll(&mut self, x: f64, y: f64) -> bool {
        let changed = self.state.viewport.set_scroll(x, y, &self.state.layout);
        self.viewport_moved |= changed;
        changed
    }

    fn scroll_by(&mut self, dx: f64, dy: f64) -> bool {
        let changed = self.state.viewport.scroll_by(dx, dy, &self.state.layout);
        self.viewport_moved |= changed;
        changed
    }

    /// Scroll the minimum amount that brings a cell fully into view.
    fn scroll_cell_into_view(&mut self, row: u32, col: u32) {
        let rect = self.state.layout.cell_rect(row, col);
        let vp = &self.state.viewport;
        let mut x = vp.scroll_x;
        let mut y = vp.scroll_y;
        if rect.x < x {
            x = rect.x;
        } else if rect.right() > x + vp.width {
            x = rect.right() - vp.width;
        }
        if rect.y < y {
            y = rect.y;
        } else if rect.bottom() > y + vp.height {
            y = rect.bottom() - vp.height;
        }
        let changed = self.state.viewport.set_scroll(x, y, &self.state.layout);
        self.viewport_moved |= changed;
    }

    /// The cell viewport was resized (headers excluded).
    pub fn resize_viewport(&mut self, width: f64, height: f64) {
        self.state
            .viewport
            .resize(width, height, &self.state.layout);
        self.viewport_moved = true;
        self.flush();
    }

    // ---- editing ----

    pub fn begin_edit(&mut self, seed: Option<String>) -> bool {
        let opened = self.state.begin_edit(seed).is_some();
        self.flush();
        opened
    }

    pub fn set_edit_text(&mut self, text: &str) {
        self.state.set_edit_text(text);
    }

    pub fn commit_edit(&mut self, advance: Option<Direction>) -> bool {
        let recorded = self.state.commit_edit(advance);
        self.flush();
        recorded
    }

    pub fn cancel_edit(&mut self) -> bool {
        let cancelled = self.state.cancel_edit();
        self.flush();
        cancelled
    }

    // ---- commands ----

    pub fn execute(&mut self, command: Command) -> bool {
        let changed = self.state.execute(command);
        self.flush();
        changed
    }

    /// Set one cell through the history.
    pub fn set_cell(&mut self, row: u32, col: u32, value: &str) -> bool {
        let command = Command::edit_cell(&self.state, row, col, value);
        self.execute(command)
    }

    pub fn cell_value(&self, row: u32, col: u32) -> &str {
        self.state.store.value(row, col)
    }

    pub fn undo(&mut self) -> bool {
        let changed = self.state.undo();
        self.flush();
        changed
    }

    pub fn redo(&mut self) -> bool {
        let changed = self.state.redo();
        self.flush();
        changed
    }

    // ---- data ----

    pub fn copy_selection(&self) -> String {
        self.state.copy_selection()
    }

    pub fn paste_text(&mut self, text: &str) -> bool {
        let changed = self.state.paste_text(text);
        self.flush();
        changed
    }

    /// Replace all content with JSON records. History is cleared since
    /// earlier commands no longer describe this data.
    pub fn load_json_rows(&mut self, json: &str) -> Result<LoadSummary> {
        self.state.cancel_edit();
        let (rows, cols) = (self.state.layout.row_count(), self.state.layout.col_count());
        let summary = self.state.store.load_json_rows(json, rows, cols)?;
        self.state.history.clear();
        self.state.mark(Damage::all());
        self.flush();
        Ok(summary)
    }

    pub fn selection_stats(&self) -> SelectionStats {
        SelectionStats::compute(
            self.state.selection.current(),
            &self.state.store,
            self.state.layout.row_count(),
            self.state.layout.col_count(),
        )
    }

    // ---- painting ----

    /// Apply pending viewport changes and damage to tiles and headers.
    pub fn flush(&mut self) {
        let damage = self.state.damage.take();
        let moved = std::mem::take(&mut self.viewport_moved);
        if !moved && damage.is_empty() {
            return;
        }
        let ctx = self.state.draw_context();
        if moved {
            self.tiles.render_visible_tiles(&self.state.viewport, &ctx);
        }
        self.tiles.apply_damage(&damage, &self.state.viewport, &ctx);
        if moved || damage.headers {
            let headers = HeaderContext {
                layout: &self.state.layout,
                viewport: &self.state.viewport,
                selection: self.state.selection.current(),
                header_width: self.state.header_width(),
                header_height: self.state.header_height(),
                guide: self.state.resize_guide,
            };
            render_column_headers(&mut self.col_header, &headers);
            render_row_headers(&mut self.row_header, &headers);
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use super::*;
    use crate::render::{RecordingFactory, RecordingSurface};
    use crate::tiles::TileKey;

    fn grid() -> Grid<RecordingFactory> {
        Grid::new(
            GridConfig {
                total_rows: 1000,
                total_cols: 100,
                ..GridConfig::default()
            },
            RecordingFactory::new(),
            RecordingSurface::new(),
            RecordingSurface::new(),
            800.0,
            600.0,
        )
        .unwrap()
    }

    #[test]
    fn first_frame_is_painted() {
        let grid = grid();
        assert_eq!(
            grid.tiles().materialized_keys(),
            vec![
                TileKey::new(0, 0),
                TileKey::new(0, 1),
                TileKey::new(1, 0),
                TileKey::new(1, 1)
            ]
        );
        assert!(grid.col_header().texts().contains(&"A"));
        assert!(grid.row_header().texts().contains(&"1"));
    }

    #[test]
    fn invalid_config_is_rejected() {
        let result = Grid::new(
            GridConfig {
                total_rows: 0,
                ..GridConfig::default()
            },
            RecordingFactory::new(),
            RecordingSurface::new(),
            RecordingSurface::new(),
            800.0,
            600.0,
        );
        assert!(result.is_err());
    }

    #[test]
    fn arrow_keys_scroll_focus_into_view() {
        let mut grid = grid();
        for _ in 0..30 {
            grid.key_down(&KeyInput::new("ArrowDown"));
        }
        assert_eq!(grid.selection(), &Selection::Cell { row: 30, col: 0 });
        // Row 30 ends at 868; viewport is 600 high
        assert_eq!(grid.state().viewport.scroll_y, 268.0);
    }

    #[test]
    fn typing_edits_and_enter_commits() {
        let mut grid = grid();
        assert_eq!(grid.key_down(&KeyInput::new("4")), KeyResponse::Handled);
        assert_eq!(grid.edit_session().unwrap().draft, "4");
        grid.set_edit_text("42");
        grid.key_down(&KeyInput::new("Enter"));
        assert_eq!(grid.cell_value(0, 0), "42");
        assert_eq!(grid.selection(), &Selection::Cell { row: 1, col: 0 });
        assert_eq!(grid.key_down(&KeyInput::new("z").ctrl()), KeyResponse::Handled);
        assert_eq!(grid.cell_value(0, 0), "");
    }

    #[test]
    fn synced_scroll_drives_hit_testing_before_repaint() {
        let mut grid = grid();
        assert!(grid.sync_scroll(0.0, 2_800.0));
        // Nothing repainted yet
        assert_eq!(grid.tiles().materialized_keys().len(), 4);
        // Row 100 starts at content y 2800, i.e. just below the column header
        grid.pointer_down(&PointerEvent::at(60.0, 30.0));
        grid.pointer_up(&PointerEvent::at(60.0, 30.0));
        assert_eq!(grid.selection(), &Selection::Cell { row: 100, col: 0 });
        assert!(grid
            .tiles()
            .materialized_keys()
            .iter()
            .all(|key| (1..=4).contains(&key.row)));
        // Same offset again is not a change
        assert!(!grid.sync_scroll(0.0, 2_800.0));
    }

    #[test]
    fn copy_returns_tsv() {
        let mut grid = grid();
        grid.set_cell(0, 0, "a");
        grid.set_cell(0, 1, "b");
        grid.key_down(&KeyInput::new("ArrowRight").shift());
        assert_eq!(
            grid.key_down(&KeyInput::new("c").ctrl()),
            KeyResponse::Copy("a\tb".into())
        );
    }
}
