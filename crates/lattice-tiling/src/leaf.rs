//! Terminal node of the pane tree: one content surface, one document.

use lattice_common::{Color, DocumentId, KeyEvent, MouseEvent, MouseEventKind, Rect};

use crate::content::{ContentSurface, RenderSurface, ReturnMessage};

pub struct LeafPane {
    document: DocumentId,
    content: Box<dyn ContentSurface>,
}

impl LeafPane {
    pub fn new(document: DocumentId, content: Box<dyn ContentSurface>) -> Self {
        Self { document, content }
    }

    pub fn document(&self) -> DocumentId {
        self.document
    }

    pub fn content(&self) -> &dyn ContentSurface {
        self.content.as_ref()
    }

    /// Swap in a new document and surface, returning the previous id.
    pub(crate) fn rebind(&mut self, document: DocumentId, content: Box<dyn ContentSurface>) -> DocumentId {
        self.content = content;
        std::mem::replace(&mut self.document, document)
    }

    pub(crate) fn replace_content(&mut self, content: Box<dyn ContentSurface>) {
        self.content = content;
    }

    pub fn render(&self, surface: &mut dyn RenderSurface, bounds: Rect, focus_border: Option<i32>) {
        surface.set_clip(Some(bounds));
        self.content.render(surface, bounds);
        if let Some(width) = focus_border.filter(|w| *w > 0) {
            surface.stroke_rect(bounds, width, Color::FOCUS);
        }
        surface.set_clip(None);
    }

    pub fn resize(&mut self, width: i32, height: i32) {
        self.content.handle_resize(width, height);
    }

    /// Whether `event` should reach this leaf. Presses and moves need to
    /// land inside `bounds`; drags and releases also follow the focused
    /// leaf so a gesture that started inside keeps its target.
    pub fn accepts(event: &MouseEvent, bounds: Rect, focused: bool) -> bool {
        if bounds.contains(event.x, event.y) {
            return true;
        }
        focused && matches!(event.kind, MouseEventKind::Dragged | MouseEventKind::Released)
    }

    pub fn handle_mouse(&mut self, event: &MouseEvent, bounds: Rect) -> ReturnMessage {
        self.content.handle_mouse(event, bounds)
    }

    pub fn handle_key(&mut self, event: &KeyEvent) -> ReturnMessage {
        self.content.handle_key(event)
    }
}
