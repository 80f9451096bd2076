use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, Document, HtmlCanvasElement, HtmlElement};

use crate::error::{GridError, Result};
use crate::layout::Rect;
use crate::render::surface::{Surface, SurfaceFactory, TextAlign, TextStyle};
use crate::tiles::TileKey;

/// A `<canvas>` element plus its 2D context, drawn in logical pixels.
pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    dpr: f64,
    width: f64,
    height: f64,
}

impl CanvasSurface {
    /// Wrap an existing canvas (the header canvases supplied by the page).
    pub fn new(canvas: HtmlCanvasElement, dpr: f64) -> Result<Self> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| GridError::Render("canvas has no 2d context".into()))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| GridError::Render("context is not CanvasRenderingContext2d".into()))?;
        Ok(Self {
            canvas,
            ctx,
            dpr: if dpr > 0.0 { dpr } else { 1.0 },
            width: 0.0,
            height: 0.0,
        })
    }

    pub fn canvas(&self) -> &HtmlCanvasElement {
        &self.canvas
    }

    /// Helper to get crisp pixel position for 1px lines
    fn crisp(x: f64) -> f64 {
        x.floor() + 0.5
    }
}

impl Surface for CanvasSurface {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn resize(&mut self, width: f64, height: f64) {
        self.width = width.max(0.0);
        self.height = height.max(0.0);
        // Setting the backing size also clears the canvas and resets its state.
        self.canvas.set_width((self.width * self.dpr).ceil() as u32);
        self.canvas.set_height((self.height * self.dpr).ceil() as u32);
        let style = self.canvas.style();
        let _ = style.set_property("width", &format!("{}px", self.width));
        let _ = style.set_property("height", &format!("{}px", self.height));
        let _ = self
            .ctx
            .set_transform(self.dpr, 0.0, 0.0, self.dpr, 0.0, 0.0);
    }

    fn set_position(&mut self, x: f64, y: f64) {
        let style = self.canvas.style();
        let _ = style.set_property("left", &format!("{x}px"));
        let _ = style.set_property("top", &format!("{y}px"));
    }

    fn size(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    fn clear_rect(&mut self, rect: Rect) {
        self.ctx.clear_rect(rect.x, rect.y, rect.w, rect.h);
    }

    fn fill_rect(&mut self, rect: Rect, color: &str) {
        self.ctx.set_fill_style_str(color);
        self.ctx.fill_rect(rect.x, rect.y, rect.w, rect.h);
    }

    fn stroke_line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, width: f64, color: &str) {
        self.ctx.begin_path();
        self.ctx.set_stroke_style_str(color);
        self.ctx.set_line_width(width);
        if width <= 1.0 {
            // 1px lines sit on half pixels across their thickness.
            if (y1 - y2).abs() < f64::EPSILON {
                self.ctx.move_to(x1, Self::crisp(y1));
                self.ctx.line_to(x2, Self::crisp(y2));
            } else {
                self.ctx.move_to(Self::crisp(x1), y1);
                self.ctx.line_to(Self::crisp(x2), y2);
            }
        } else {
            self.ctx.move_to(x1, y1);
            self.ctx.line_to(x2, y2);
        }
        self.ctx.stroke();
    }

    fn fill_text(&mut self, text: &str, x: f64, y: f64, clip: Rect, style: TextStyle) {
        self.ctx.save();
        self.ctx.begin_path();
        self.ctx.rect(clip.x, clip.y, clip.w, clip.h);
        self.ctx.clip();
        self.ctx.set_font(style.font);
        self.ctx.set_fill_style_str(style.color);
        self.ctx.set_text_align(match style.align {
            TextAlign::Left => "left",
            TextAlign::Center => "center",
        });
        self.ctx.set_text_baseline("middle");
        let _ = self.ctx.fill_text(text, x, y);
        self.ctx.restore();
    }

    fn push_clip(&mut self, rect: Rect) {
        self.ctx.save();
        self.ctx.begin_path();
        self.ctx.rect(rect.x, rect.y, rect.w, rect.h);
        self.ctx.clip();
    }

    fn pop_clip(&mut self) {
        self.ctx.restore();
    }

    fn release(&mut self) {
        self.canvas.remove();
    }
}

/// Creates tile canvases inside the scroll content element.
pub struct CanvasTileFactory {
    document: Document,
    parent: HtmlElement,
    dpr: f64,
}

impl CanvasTileFactory {
    pub fn new(document: Document, parent: HtmlElement, dpr: f64) -> Self {
        Self {
            document,
            parent,
            dpr,
        }
    }

    fn build(&self, key: TileKey) -> Result<CanvasSurface> {
        let canvas = self
            .document
            .create_element("canvas")?
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| GridError::Render("created element is not a canvas".into()))?;
        let style = canvas.style();
        let _ = style.set_property("position", "absolute");
        let _ = style.set_property("pointer-events", "none");
        let _ = canvas.set_attribute("data-tile", &format!("{},{}", key.row, key.col));
        self.parent.append_child(&canvas)?;
        CanvasSurface::new(canvas, self.dpr)
    }
}

impl SurfaceFactory for CanvasTileFactory {
    type Surface = CanvasSurface;

    fn create_tile(&mut self, key: TileKey) -> Option<CanvasSurface> {
        match self.build(key) {
            Ok(surface) => Some(surface),
            Err(e) => {
                log::warn!("failed to create tile {key:?}: {e}");
                None
            }
        }
    }
}
