//! System clipboard access for copy (Ctrl+C) and paste (Ctrl+V).

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsValue;

use super::SharedState;

pub(crate) fn copy_to_clipboard(text: &str) {
    if let Some(window) = web_sys::window() {
        let clipboard = window.navigator().clipboard();
        let _ = clipboard.write_text(text);
    }
}

/// Read the clipboard and paste its text at the selection focus once the
/// browser resolves the read.
pub(crate) fn paste_from_clipboard(state: &Rc<RefCell<SharedState>>) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let promise = window.navigator().clipboard().read_text();
    let mut s = state.borrow_mut();
    if s.paste_closure.is_none() {
        let weak_state = Rc::downgrade(state);
        s.paste_closure = Some(Closure::wrap(Box::new(move |value: JsValue| {
            let Some(state) = weak_state.upgrade() else {
                return;
            };
            let Some(text) = value.as_string() else {
                return;
            };
            let mut s = state.borrow_mut();
            if s.grid.paste_text(&text) {
                log::debug!("pasted {} bytes", text.len());
            }
            s.sync_dom();
        }) as Box<dyn FnMut(JsValue)>));
    }
    if let Some(callback) = s.paste_closure.as_ref() {
        let _ = promise.then(callback);
    }
}
