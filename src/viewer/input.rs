//! DOM input overlay for cell editing.
//!
//! An `<input>` positioned over the edited cell inside the scroll content,
//! so it scrolls with the tiles. Enter/Tab/Escape are routed through the
//! grid's key map; everything else types into the input.

use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, HtmlInputElement};

use crate::layout::Rect;
use crate::render::colors::{palette, CELL_FONT};

pub(crate) struct InputOverlay {
    input: Option<HtmlInputElement>,
    /// Cell the overlay is currently shown over.
    open_at: Option<(u32, u32)>,
}

impl InputOverlay {
    pub(crate) fn new() -> Self {
        InputOverlay {
            input: None,
            open_at: None,
        }
    }

    pub(crate) fn open_at(&self) -> Option<(u32, u32)> {
        self.open_at
    }

    /// Show the overlay over `rect` (content coordinates).
    pub(crate) fn show(
        &mut self,
        cell: (u32, u32),
        rect: Rect,
        value: &str,
        document: &Document,
        parent: &HtmlElement,
    ) {
        let Some(input) = self.get_or_create_input(document, parent) else {
            return;
        };
        let style = input.style();
        let _ = style.set_property("display", "block");
        let _ = style.set_property("left", &format!("{}px", rect.x));
        let _ = style.set_property("top", &format!("{}px", rect.y));
        let _ = style.set_property("width", &format!("{}px", rect.w));
        let _ = style.set_property("height", &format!("{}px", rect.h));
        input.set_value(value);

        let _ = input.focus();
        // Move the caret to the end
        let end = u32::try_from(value.encode_utf16().count()).unwrap_or(u32::MAX);
        let _ = input.set_selection_range(end, end);
        self.open_at = Some(cell);
    }

    /// Hide the input overlay.
    pub(crate) fn hide(&mut self) {
        if let Some(ref input) = self.input {
            let _ = input.style().set_property("display", "none");
            let _ = input.blur();
        }
        self.open_at = None;
    }

    /// Get current input value.
    pub(crate) fn value(&self) -> Option<String> {
        self.input.as_ref().map(|i| i.value())
    }

    fn get_or_create_input(
        &mut self,
        document: &Document,
        parent: &HtmlElement,
    ) -> Option<&HtmlInputElement> {
        if self.input.is_none() {
            let input = document
                .create_element("input")
                .ok()?
                .dyn_into::<HtmlInputElement>()
                .ok()?;
            input.set_type("text");
            let style = input.style();
            let _ = style.set_property("position", "absolute");
            let _ = style.set_property("z-index", "10");
            let _ = style.set_property("box-sizing", "border-box");
            let _ = style.set_property(
                "border",
                &format!("2px solid {}", palette::SELECTION_BORDER),
            );
            let _ = style.set_property("outline", "none");
            let _ = style.set_property("padding", "0 3px");
            let _ = style.set_property("font", CELL_FONT);
            let _ = style.set_property("color", palette::CELL_TEXT);
            let _ = style.set_property("background", "#fff");
            let _ = style.set_property("display", "none");
            let _ = parent.append_child(&input);
            self.input = Some(input);
        }
        self.input.as_ref()
    }
}

impl Drop for InputOverlay {
    fn drop(&mut self) {
        if let Some(ref input) = self.input {
            input.remove();
        }
    }
}
