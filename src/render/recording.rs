//! Headless surface that records draw calls.
//!
//! Used by the test suite and the CLI to observe what the grid paints
//! without a browser.

use std::cell::RefCell;
use std::rc::Rc;

use super::surface::{Surface, SurfaceFactory, TextStyle};
use crate::layout::Rect;
use crate::tiles::TileKey;

/// One recorded draw call.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    Resize { width: f64, height: f64 },
    Position { x: f64, y: f64 },
    Clear(Rect),
    Fill { rect: Rect, color: String },
    Line {
        from: (f64, f64),
        to: (f64, f64),
        width: f64,
        color: String,
    },
    Text {
        text: String,
        x: f64,
        y: f64,
        clip: Rect,
        color: String,
    },
    PushClip(Rect),
    PopClip,
    Release,
}

/// Surface that appends every call to [`RecordingSurface::ops`].
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    pub ops: Vec<DrawOp>,
    pub width: f64,
    pub height: f64,
    pub x: f64,
    pub y: f64,
    pub released: bool,
    log: Option<Rc<RefCell<FactoryLog>>>,
    key: Option<TileKey>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Texts drawn since the last full clear, in draw order.
    pub fn texts(&self) -> Vec<&str> {
        self.current_frame()
            .iter()
            .filter_map(|op| match op {
                DrawOp::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Ops since the most recent resize (which starts every full redraw).
    pub fn current_frame(&self) -> &[DrawOp] {
        let start = self
            .ops
            .iter()
            .rposition(|op| matches!(op, DrawOp::Resize { .. }))
            .unwrap_or(0);
        self.ops.get(start..).unwrap_or(&[])
    }

    /// Fills of `color` since the last full redraw.
    pub fn fills_of(&self, color: &str) -> Vec<Rect> {
        self.current_frame()
            .iter()
            .filter_map(|op| match op {
                DrawOp::Fill { rect, color: c } if c == color => Some(*rect),
                _ => None,
            })
            .collect()
    }

    /// Lines of `color` since the last full redraw.
    pub fn lines_of(&self, color: &str) -> Vec<((f64, f64), (f64, f64))> {
        self.current_frame()
            .iter()
            .filter_map(|op| match op {
                DrawOp::Line {
                    from, to, color: c, ..
                } if c == color => Some((*from, *to)),
                _ => None,
            })
            .collect()
    }

    /// Number of complete redraws (resizes) seen.
    pub fn redraw_count(&self) -> usize {
        self.ops
            .iter()
            .filter(|op| matches!(op, DrawOp::Resize { .. }))
            .count()
    }

    pub fn clear_ops(&mut self) {
        self.ops.clear();
    }
}

impl Surface for RecordingSurface {
    fn resize(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
        self.ops.push(DrawOp::Resize { width, height });
    }

    fn set_position(&mut self, x: f64, y: f64) {
        self.x = x;
        self.y = y;
        self.ops.push(DrawOp::Position { x, y });
    }

    fn size(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    fn clear_rect(&mut self, rect: Rect) {
        self.ops.push(DrawOp::Clear(rect));
    }

    fn fill_rect(&mut self, rect: Rect, color: &str) {
        self.ops.push(DrawOp::Fill {
            rect,
            color: color.to_string(),
        });
    }

    fn stroke_line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, width: f64, color: &str) {
        self.ops.push(DrawOp::Line {
            from: (x1, y1),
            to: (x2, y2),
            width,
            color: color.to_string(),
        });
    }

    fn fill_text(&mut self, text: &str, x: f64, y: f64, clip: Rect, style: TextStyle) {
        self.ops.push(DrawOp::Text {
            text: text.to_string(),
            x,
            y,
            clip,
            color: style.color.to_string(),
        });
    }

    fn push_clip(&mut self, rect: Rect) {
        self.ops.push(DrawOp::PushClip(rect));
    }

    fn pop_clip(&mut self) {
        self.ops.push(DrawOp::PopClip);
    }

    fn release(&mut self) {
        self.released = true;
        self.ops.push(DrawOp::Release);
        if let (Some(log), Some(key)) = (&self.log, self.key) {
            log.borrow_mut().released.push(key);
        }
    }
}

/// Creation and release history shared by a [`RecordingFactory`] and its surfaces.
#[derive(Debug, Default)]
pub struct FactoryLog {
    pub created: Vec<TileKey>,
    pub released: Vec<TileKey>,
}

/// Factory handing out [`RecordingSurface`]s.
#[derive(Debug, Clone, Default)]
pub struct RecordingFactory {
    pub log: Rc<RefCell<FactoryLog>>,
    /// When set, every creation fails (tiles end up without a surface).
    pub fail: bool,
}

impl RecordingFactory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn created(&self) -> Vec<TileKey> {
        self.log.borrow().created.clone()
    }

    pub fn released(&self) -> Vec<TileKey> {
        self.log.borrow().released.clone()
    }
}

impl SurfaceFactory for RecordingFactory {
    type Surface = RecordingSurface;

    fn create_tile(&mut self, key: TileKey) -> Option<RecordingSurface> {
        if self.fail {
            return None;
        }
        self.log.borrow_mut().created.push(key);
        Some(RecordingSurface {
            log: Some(Rc::clone(&self.log)),
            key: Some(key),
            ..RecordingSurface::default()
        })
    }
}
