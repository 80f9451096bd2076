//! `GridView` - the browser entry point.
//!
//! Owns a [`Grid`] drawing into canvas tiles and wires DOM events to it:
//! - mousedown on the grid surface, mousemove/mouseup on the document
//! - keydown on the document, dblclick to edit
//! - native scrolling of the container (debounced) and window resize
//!
//! Page layout expected by the viewer: the column header canvas spans the
//! top edge (corner included), the row header canvas the left edge below it,
//! and `container` is the scrollable cell area. Pointer coordinates are taken
//! relative to the column header canvas, which is the grid's top-left corner.

mod clipboard;
mod events;
mod input;
mod scroll;

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use web_sys::{Document, HtmlCanvasElement, HtmlElement, KeyboardEvent, MouseEvent};

use crate::config::GridConfig;
use crate::error::GridError;
use crate::grid::{Debounce, Grid};
use crate::render::{CanvasSurface, CanvasTileFactory};
use input::InputOverlay;

pub(crate) fn now_ms() -> f64 {
    if let Some(window) = web_sys::window() {
        if let Some(perf) = window.performance() {
            return perf.now();
        }
    }
    js_sys::Date::now()
}

/// Everything the DOM callbacks share.
pub(crate) struct SharedState {
    pub(crate) grid: Grid<CanvasTileFactory>,
    pub(crate) document: Document,
    pub(crate) container: HtmlElement,
    /// Sized to the full content; tiles and the input live inside it.
    pub(crate) sizer: HtmlElement,
    pub(crate) col_header_canvas: HtmlCanvasElement,
    pub(crate) input: InputOverlay,
    pub(crate) scroll_debounce: Debounce,
    pub(crate) scroll_timer: Option<i32>,
    pub(crate) scroll_closure: Option<Closure<dyn FnMut()>>,
    pub(crate) resize_debounce: Debounce,
    pub(crate) resize_timer: Option<i32>,
    pub(crate) resize_closure: Option<Closure<dyn FnMut()>>,
    pub(crate) frame_closure: Option<Closure<dyn FnMut()>>,
    pub(crate) frame_pending: bool,
    pub(crate) paste_closure: Option<Closure<dyn FnMut(JsValue)>>,
    /// Scroll offset the container and the grid last agreed on.
    pub(crate) scroll_synced: (f64, f64),
}

impl SharedState {
    /// Hand the container's live scroll offset to the grid before it maps
    /// a pointer or key. Repainting waits for the next flush.
    pub(crate) fn pull_scroll(&mut self) {
        let x = scroll::scroll_left(&self.container);
        let y = scroll::scroll_top(&self.container);
        self.grid.sync_scroll(x, y);
        let viewport = &self.grid.state().viewport;
        self.scroll_synced = (viewport.scroll_x, viewport.scroll_y);
    }

    /// Push grid-side changes back into the DOM: content size, scroll
    /// position (only when the grid moved it, after keyboard moves or
    /// auto-scroll), editor overlay.
    pub(crate) fn sync_dom(&mut self) {
        let layout = &self.grid.state().layout;
        let style = self.sizer.style();
        let _ = style.set_property("width", &format!("{}px", layout.total(crate::layout::Axis::Column)));
        let _ = style.set_property("height", &format!("{}px", layout.total(crate::layout::Axis::Row)));

        let viewport = &self.grid.state().viewport;
        let (x, y) = (viewport.scroll_x, viewport.scroll_y);
        let (synced_x, synced_y) = self.scroll_synced;
        if (x - synced_x).abs() >= 0.5 {
            scroll::set_scroll_left(&self.container, x);
        }
        if (y - synced_y).abs() >= 0.5 {
            scroll::set_scroll_top(&self.container, y);
        }
        self.scroll_synced = (x, y);

        match self.grid.edit_session() {
            Some(session) if self.input.open_at() != Some((session.row, session.col)) => {
                let cell = (session.row, session.col);
                let rect = self.grid.state().layout.cell_rect(session.row, session.col);
                let draft = session.draft.clone();
                self.input
                    .show(cell, rect, &draft, &self.document, &self.sizer);
            }
            Some(_) => {}
            None => {
                if self.input.open_at().is_some() {
                    self.input.hide();
                    let _ = self.container.focus();
                }
            }
        }
    }

    /// Copy the editor's text into the open edit session.
    pub(crate) fn pull_edit_text(&mut self) {
        if self.grid.edit_session().is_some() {
            if let Some(text) = self.input.value() {
                self.grid.set_edit_text(&text);
            }
        }
    }

    /// Cell viewport size of the container.
    pub(crate) fn container_size(&self) -> (f64, f64) {
        (
            f64::from(self.container.client_width()),
            f64::from(self.container.client_height()),
        )
    }
}

/// The grid widget exported to JavaScript
#[wasm_bindgen]
pub struct GridView {
    state: Rc<RefCell<SharedState>>,
    #[allow(dead_code)]
    mouse_closures: Vec<Closure<dyn FnMut(MouseEvent)>>,
    #[allow(dead_code)]
    key_closure: Closure<dyn FnMut(KeyboardEvent)>,
    #[allow(dead_code)]
    dom_closures: Vec<Closure<dyn FnMut(web_sys::Event)>>,
}

#[wasm_bindgen]
impl GridView {
    /// Create a grid inside `container` (the scrollable cell area) drawing
    /// headers into the two given canvases. `config` is a partial
    /// `GridConfig` object (camelCase keys) or `undefined`.
    #[wasm_bindgen(constructor)]
    pub fn new(
        container: HtmlElement,
        col_header_canvas: HtmlCanvasElement,
        row_header_canvas: HtmlCanvasElement,
        dpr: f64,
        config: JsValue,
    ) -> Result<GridView, JsValue> {
        console_error_panic_hook::set_once();

        let config: GridConfig = if config.is_undefined() || config.is_null() {
            GridConfig::default()
        } else {
            serde_wasm_bindgen::from_value(config)
                .map_err(|e| GridError::Config(e.to_string()))?
        };
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| GridError::Render("no document".into()))?;

        let container_style = container.style();
        let _ = container_style.set_property("overflow", "auto");
        let _ = container_style.set_property("position", "relative");
        if container.tab_index() < 0 {
            container.set_tab_index(0);
        }

        let sizer: HtmlElement = document
            .create_element("div")?
            .dyn_into::<HtmlElement>()
            .map_err(|_| GridError::Render("div is not an HtmlElement".into()))?;
        let sizer_style = sizer.style();
        let _ = sizer_style.set_property("position", "relative");
        let _ = sizer_style.set_property("overflow", "hidden");
        container.append_child(&sizer)?;

        let width = f64::from(container.client_width());
        let height = f64::from(container.client_height());
        let factory = CanvasTileFactory::new(document.clone(), sizer.clone(), dpr);
        let grid = Grid::new(
            config.clone(),
            factory,
            CanvasSurface::new(col_header_canvas.clone(), dpr)?,
            CanvasSurface::new(row_header_canvas, dpr)?,
            width,
            height,
        )?;

        let state = Rc::new(RefCell::new(SharedState {
            grid,
            document,
            container,
            sizer,
            col_header_canvas,
            input: InputOverlay::new(),
            scroll_debounce: Debounce::new(config.scroll_debounce_ms),
            scroll_timer: None,
            scroll_closure: None,
            resize_debounce: Debounce::new(config.resize_debounce_ms),
            resize_timer: None,
            resize_closure: None,
            frame_closure: None,
            frame_pending: false,
            paste_closure: None,
            scroll_synced: (0.0, 0.0),
        }));
        state.borrow_mut().sync_dom();

        let mouse_closures = events::register_mouse(&state);
        let key_closure = events::register_keyboard(&state);
        let dom_closures = scroll::register(&state);
        log::info!("GridView ready ({width}x{height})");

        Ok(GridView {
            state,
            mouse_closures,
            key_closure,
            dom_closures,
        })
    }

    /// Replace content with a JSON array of records. Returns
    /// `{ rows, columns, cells }`.
    pub fn load_json(&self, text: &str) -> Result<JsValue, JsValue> {
        let mut s = self.state.borrow_mut();
        let summary = s.grid.load_json_rows(text)?;
        s.sync_dom();
        Ok(serde_wasm_bindgen::to_value(&summary)?)
    }

    pub fn undo(&self) -> bool {
        let mut s = self.state.borrow_mut();
        let changed = s.grid.undo();
        s.sync_dom();
        changed
    }

    pub fn redo(&self) -> bool {
        let mut s = self.state.borrow_mut();
        let changed = s.grid.redo();
        s.sync_dom();
        changed
    }

    /// Set a cell through the undo history.
    pub fn set_cell(&self, row: u32, col: u32, value: &str) -> bool {
        let mut s = self.state.borrow_mut();
        let changed = s.grid.set_cell(row, col, value);
        s.sync_dom();
        changed
    }

    pub fn cell_value(&self, row: u32, col: u32) -> String {
        self.state.borrow().grid.cell_value(row, col).to_string()
    }

    /// `{ count, numericCount, sum, min, max, average }` for the selection.
    pub fn selection_stats(&self) -> Result<JsValue, JsValue> {
        let stats = self.state.borrow().grid.selection_stats();
        Ok(serde_wasm_bindgen::to_value(&stats)?)
    }

    /// The current selection as a tagged object (`{ type: "range", ... }`).
    pub fn get_selection(&self) -> Result<JsValue, JsValue> {
        let s = self.state.borrow();
        Ok(serde_wasm_bindgen::to_value(s.grid.selection())?)
    }

    /// Re-read the container size (call after the page layout changes).
    pub fn resize(&self) {
        let mut s = self.state.borrow_mut();
        let (width, height) = s.container_size();
        s.grid.resize_viewport(width, height);
        s.sync_dom();
    }

    /// Apply any pending scroll and repaint what is dirty.
    pub fn render(&self) {
        let mut s = self.state.borrow_mut();
        s.pull_scroll();
        s.grid.flush();
        s.sync_dom();
    }
}
