//! Scrolling, resizing and the auto-scroll frame loop.
//!
//! Native scrolling moves the tile canvases immediately; the grid only
//! materializes new tiles once scrolling settles. Window resizes settle the
//! same way. While a drag is active an animation-frame loop drives
//! [`crate::grid::Grid::auto_scroll_tick`] until it reports the drag ended.

use std::cell::RefCell;
use std::rc::Rc;

use js_sys::Reflect;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use web_sys::HtmlElement;

use super::{now_ms, SharedState};

pub(crate) fn scroll_left(element: &HtmlElement) -> f64 {
    Reflect::get(element.as_ref(), &JsValue::from_str("scrollLeft"))
        .ok()
        .and_then(|value| value.as_f64())
        .unwrap_or_else(|| f64::from(element.scroll_left()))
}

pub(crate) fn scroll_top(element: &HtmlElement) -> f64 {
    Reflect::get(element.as_ref(), &JsValue::from_str("scrollTop"))
        .ok()
        .and_then(|value| value.as_f64())
        .unwrap_or_else(|| f64::from(element.scroll_top()))
}

pub(crate) fn set_scroll_left(element: &HtmlElement, value: f64) {
    let _ = Reflect::set(
        element.as_ref(),
        &JsValue::from_str("scrollLeft"),
        &JsValue::from_f64(value),
    );
}

pub(crate) fn set_scroll_top(element: &HtmlElement, value: f64) {
    let _ = Reflect::set(
        element.as_ref(),
        &JsValue::from_str("scrollTop"),
        &JsValue::from_f64(value),
    );
}

#[derive(Debug, Clone, Copy)]
enum Settle {
    Scroll,
    Resize,
}

/// Listen for container scrolls and window resizes.
pub(crate) fn register(state: &Rc<RefCell<SharedState>>) -> Vec<Closure<dyn FnMut(web_sys::Event)>> {
    let mut closures = Vec::new();

    let container = state.borrow().container.clone();
    {
        let state = state.clone();
        let closure = Closure::wrap(Box::new(move |_event: web_sys::Event| {
            state.borrow_mut().scroll_debounce.trigger(now_ms());
            schedule(&state, Settle::Scroll);
        }) as Box<dyn FnMut(web_sys::Event)>);
        container
            .add_event_listener_with_callback("scroll", closure.as_ref().unchecked_ref())
            .ok();
        closures.push(closure);
    }

    if let Some(window) = web_sys::window() {
        let state = state.clone();
        let closure = Closure::wrap(Box::new(move |_event: web_sys::Event| {
            state.borrow_mut().resize_debounce.trigger(now_ms());
            schedule(&state, Settle::Resize);
        }) as Box<dyn FnMut(web_sys::Event)>);
        window
            .add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref())
            .ok();
        closures.push(closure);
    }

    closures
}

#[allow(clippy::cast_possible_truncation)]
fn schedule(state: &Rc<RefCell<SharedState>>, settle: Settle) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let mut guard = state.borrow_mut();
    let s = &mut *guard;
    let (timer, closure, debounce) = match settle {
        Settle::Scroll => (&mut s.scroll_timer, &mut s.scroll_closure, &s.scroll_debounce),
        Settle::Resize => (&mut s.resize_timer, &mut s.resize_closure, &s.resize_debounce),
    };
    // Cancel any existing timer
    if let Some(timer_id) = timer.take() {
        window.clear_timeout_with_handle(timer_id);
    }
    if closure.is_none() {
        let weak_state = Rc::downgrade(state);
        *closure = Some(Closure::wrap(Box::new(move || {
            if let Some(state) = weak_state.upgrade() {
                handle_settle(&state, settle);
            }
        }) as Box<dyn FnMut()>));
    }
    let Some(callback) = closure.as_ref() else {
        return;
    };
    let delay = debounce.delay_ms().ceil().clamp(0.0, f64::from(i32::MAX)) as i32;
    *timer = window
        .set_timeout_with_callback_and_timeout_and_arguments_0(
            callback.as_ref().unchecked_ref(),
            delay,
        )
        .ok();
}

fn handle_settle(state: &Rc<RefCell<SharedState>>, settle: Settle) {
    let mut s = state.borrow_mut();
    let now = now_ms();
    let ready = match settle {
        Settle::Scroll => {
            s.scroll_timer = None;
            s.scroll_debounce.poll(now)
        }
        Settle::Resize => {
            s.resize_timer = None;
            s.resize_debounce.poll(now)
        }
    };
    if !ready {
        // Events arrived after the timer was set; wait out the rest.
        drop(s);
        schedule(state, settle);
        return;
    }
    match settle {
        Settle::Scroll => {
            s.pull_scroll();
            s.grid.flush();
        }
        Settle::Resize => {
            let (width, height) = s.container_size();
            s.grid.resize_viewport(width, height);
        }
    }
    s.sync_dom();
}

/// Start the auto-scroll loop for the current drag (no-op if running).
pub(crate) fn start_auto_scroll(state: &Rc<RefCell<SharedState>>) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let mut s = state.borrow_mut();
    if s.frame_pending {
        return;
    }
    if s.frame_closure.is_none() {
        let weak_state = Rc::downgrade(state);
        s.frame_closure = Some(Closure::wrap(Box::new(move || {
            if let Some(state) = weak_state.upgrade() {
                handle_frame(&state);
            }
        }) as Box<dyn FnMut()>));
    }
    let Some(callback) = s.frame_closure.as_ref() else {
        return;
    };
    let requested = window
        .request_animation_frame(callback.as_ref().unchecked_ref())
        .is_ok();
    s.frame_pending = requested;
}

fn handle_frame(state: &Rc<RefCell<SharedState>>) {
    let mut s = state.borrow_mut();
    s.frame_pending = false;
    s.pull_scroll();
    if !s.grid.auto_scroll_tick() {
        return;
    }
    s.sync_dom();
    drop(s);
    start_auto_scroll(state);
}
