//! Contracts with the translation layer and the drawing backend.
//!
//! The pane tree never looks inside a content surface; it only sizes it,
//! forwards input to it, and asks it to draw itself.

pub mod text;

use lattice_common::{Color, DocumentId, KeyEvent, MouseEvent, Rect};
use serde::{Deserialize, Serialize};

use crate::binding::ContentSpan;

/// Reply from a content surface or the router.
///
/// Variants are ordered by precedence so replies from sibling subtrees can
/// be combined with [`ReturnMessage::merge`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ReturnMessage {
    /// Event fell outside this surface or had no effect.
    Ignored,
    /// Event was handled; nothing visible changed.
    Consumed,
    /// Event was handled and the tree must be repainted.
    Redraw,
}

impl ReturnMessage {
    pub fn merge(self, other: ReturnMessage) -> ReturnMessage {
        self.max(other)
    }

    pub fn is_handled(&self) -> bool {
        !matches!(self, ReturnMessage::Ignored)
    }

    pub fn needs_redraw(&self) -> bool {
        matches!(self, ReturnMessage::Redraw)
    }
}

/// Low-level drawing primitives supplied by the windowing backend.
pub trait RenderSurface {
    fn fill_rect(&mut self, rect: Rect, color: Color);
    fn stroke_rect(&mut self, rect: Rect, width: i32, color: Color);
    fn draw_text(&mut self, x: i32, y: i32, text: &str, color: Color);
    /// Restrict subsequent drawing to `clip`; `None` lifts the restriction.
    fn set_clip(&mut self, clip: Option<Rect>);
}

/// Translated visual content owned by exactly one leaf.
pub trait ContentSurface {
    /// Draw into `bounds`, the owning leaf's rectangle in window space.
    fn render(&self, surface: &mut dyn RenderSurface, bounds: Rect);
    fn handle_resize(&mut self, width: i32, height: i32);
    /// `bounds` is the owning leaf's rectangle; the event is unmodified.
    fn handle_mouse(&mut self, event: &MouseEvent, bounds: Rect) -> ReturnMessage;
    fn handle_key(&mut self, event: &KeyEvent) -> ReturnMessage;
    /// Currently visible region in content coordinates.
    fn visible_bounds(&self) -> Rect;
}

/// Turns a document's content into a surface.
pub trait ContentTranslator {
    fn translate(&mut self, document: DocumentId, span: &ContentSpan) -> Box<dyn ContentSurface>;
}
