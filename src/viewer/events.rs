//! Mouse and keyboard listeners.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, HtmlInputElement, KeyboardEvent, MouseEvent};

use super::{clipboard, scroll, SharedState};
use crate::grid::{KeyResponse, Zone};
use crate::interaction::{KeyInput, PointerEvent};

/// Pointer position relative to the grid's top-left corner.
fn pointer(s: &SharedState, event: &MouseEvent) -> PointerEvent {
    let rect = s.col_header_canvas.get_bounding_client_rect();
    PointerEvent {
        x: f64::from(event.client_x()) - rect.left(),
        y: f64::from(event.client_y()) - rect.top(),
        shift: event.shift_key(),
        ctrl: event.ctrl_key() || event.meta_key(),
    }
}

/// Whether the event started inside the edit overlay.
fn from_input(event: &MouseEvent) -> bool {
    event
        .target()
        .is_some_and(|target| target.dyn_ref::<HtmlInputElement>().is_some())
}

fn mouse_down(state: &Rc<RefCell<SharedState>>, event: &MouseEvent) {
    if event.button() != 0 || from_input(event) {
        return;
    }
    let dragging = {
        let mut s = state.borrow_mut();
        s.pull_scroll();
        s.pull_edit_text();
        let p = pointer(&s, event);
        if s.grid.pointer_down(&p) {
            event.prevent_default();
            let _ = s.container.focus();
        }
        s.sync_dom();
        s.grid.is_dragging()
    };
    if dragging {
        scroll::start_auto_scroll(state);
    }
}

fn mouse_move(state: &Rc<RefCell<SharedState>>, event: &MouseEvent) {
    let mut s = state.borrow_mut();
    s.pull_scroll();
    let p = pointer(&s, event);
    if s.grid.is_dragging() {
        s.grid.pointer_move(&p);
        s.sync_dom();
        return;
    }
    let cursor = s.grid.hover_cursor(&p);
    let row_header = s.grid.row_header().canvas().clone();
    let targets: [&HtmlElement; 3] = [&s.container, &s.col_header_canvas, &row_header];
    for element in targets {
        let _ = element.style().set_property("cursor", cursor);
    }
}

fn mouse_up(state: &Rc<RefCell<SharedState>>, event: &MouseEvent) {
    let mut s = state.borrow_mut();
    if !s.grid.is_dragging() {
        return;
    }
    s.pull_scroll();
    let p = pointer(&s, event);
    s.grid.pointer_up(&p);
    s.sync_dom();
}

fn double_click(state: &Rc<RefCell<SharedState>>, event: &MouseEvent) {
    if from_input(event) {
        return;
    }
    let mut s = state.borrow_mut();
    s.pull_scroll();
    let p = pointer(&s, event);
    if s.grid.state().zone_at(p.x, p.y) == Zone::Cells && s.grid.begin_edit(None) {
        event.prevent_default();
        s.sync_dom();
    }
}

/// Mouse listeners: down/dblclick on the grid surfaces, move/up on the
/// document so drags keep tracking outside the grid.
pub(crate) fn register_mouse(state: &Rc<RefCell<SharedState>>) -> Vec<Closure<dyn FnMut(MouseEvent)>> {
    let mut closures: Vec<Closure<dyn FnMut(MouseEvent)>> = Vec::new();
    let (surfaces, document) = {
        let s = state.borrow();
        let surfaces: Vec<HtmlElement> = vec![
            s.container.clone(),
            s.col_header_canvas.clone().into(),
            s.grid.row_header().canvas().clone().into(),
        ];
        (surfaces, s.document.clone())
    };

    for surface in &surfaces {
        let state = state.clone();
        let closure = Closure::wrap(Box::new(move |event: MouseEvent| {
            mouse_down(&state, &event);
        }) as Box<dyn FnMut(MouseEvent)>);
        surface
            .add_event_listener_with_callback("mousedown", closure.as_ref().unchecked_ref())
            .ok();
        closures.push(closure);
    }

    if let Some(container) = surfaces.first() {
        let state = state.clone();
        let closure = Closure::wrap(Box::new(move |event: MouseEvent| {
            double_click(&state, &event);
        }) as Box<dyn FnMut(MouseEvent)>);
        container
            .add_event_listener_with_callback("dblclick", closure.as_ref().unchecked_ref())
            .ok();
        closures.push(closure);
    }

    {
        let state = state.clone();
        let closure = Closure::wrap(Box::new(move |event: MouseEvent| {
            mouse_move(&state, &event);
        }) as Box<dyn FnMut(MouseEvent)>);
        document
            .add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref())
            .ok();
        closures.push(closure);
    }

    {
        let state = state.clone();
        let closure = Closure::wrap(Box::new(move |event: MouseEvent| {
            mouse_up(&state, &event);
        }) as Box<dyn FnMut(MouseEvent)>);
        document
            .add_event_listener_with_callback("mouseup", closure.as_ref().unchecked_ref())
            .ok();
        closures.push(closure);
    }

    closures
}

fn key_down(state: &Rc<RefCell<SharedState>>, event: &KeyboardEvent) {
    let response = {
        let mut s = state.borrow_mut();
        // Only while focus is inside the grid
        let focused = s.document.active_element();
        if !s.container.contains(focused.as_deref()) {
            return;
        }
        let input = KeyInput {
            key: event.key(),
            shift: event.shift_key(),
            ctrl: event.ctrl_key() || event.meta_key(),
            alt: event.alt_key(),
        };
        s.pull_scroll();
        s.pull_edit_text();
        let response = s.grid.key_down(&input);
        s.sync_dom();
        response
    };
    match response {
        KeyResponse::Ignored => {}
        KeyResponse::Handled => event.prevent_default(),
        KeyResponse::Copy(text) => {
            event.prevent_default();
            clipboard::copy_to_clipboard(&text);
        }
        KeyResponse::Paste => {
            event.prevent_default();
            clipboard::paste_from_clipboard(state);
        }
    }
}

pub(crate) fn register_keyboard(state: &Rc<RefCell<SharedState>>) -> Closure<dyn FnMut(KeyboardEvent)> {
    let document = state.borrow().document.clone();
    let state = state.clone();
    let closure = Closure::wrap(Box::new(move |event: KeyboardEvent| {
        key_down(&state, &event);
    }) as Box<dyn FnMut(KeyboardEvent)>);
    document
        .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())
        .ok();
    closure
}
