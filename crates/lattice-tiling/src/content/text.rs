//! Plain-text content surface.
//!
//! Lays a document out one line per row with its URL as a header. Used by
//! the headless shell and by tests in place of the full markup pipeline.

use lattice_common::{Color, DocumentId, KeyEvent, MouseEvent, MouseEventKind, Point, Rect};

use super::{ContentSurface, ContentTranslator, RenderSurface, ReturnMessage};
use crate::binding::ContentSpan;

#[derive(Debug, Clone)]
pub struct TextSurface {
    url: String,
    lines: Vec<String>,
    width: i32,
    height: i32,
    scroll: i32,
    input: String,
    last_click: Option<Point>,
}

impl TextSurface {
    pub fn new(span: &ContentSpan) -> Self {
        Self {
            url: span.url.clone(),
            lines: span.text.lines().map(str::to_owned).collect(),
            width: 0,
            height: 0,
            scroll: 0,
            input: String::new(),
            last_click: None,
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn size(&self) -> (i32, i32) {
        (self.width, self.height)
    }

    /// Text typed into this surface since it was created.
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Last press position, relative to the surface origin.
    pub fn last_click(&self) -> Option<Point> {
        self.last_click
    }

    /// Rows available for body text below the header.
    fn body_rows(&self) -> i32 {
        (self.height - 2).max(0)
    }

    fn max_scroll(&self) -> i32 {
        (self.lines.len() as i32 - self.body_rows()).max(0)
    }
}

impl ContentSurface for TextSurface {
    fn render(&self, surface: &mut dyn RenderSurface, bounds: Rect) {
        let left = bounds.x.saturating_add(1);
        surface.draw_text(left, bounds.y.saturating_add(1), &self.url, Color::FOCUS);
        let rows = self.body_rows() as usize;
        for (row, line) in self
            .lines
            .iter()
            .skip(self.scroll as usize)
            .take(rows)
            .enumerate()
        {
            let y = bounds.y.saturating_add(2).saturating_add(row as i32);
            surface.draw_text(left, y, line, Color::WHITE);
        }
        if !self.input.is_empty() && bounds.height > 2 {
            let prompt = format!("> {}", self.input);
            surface.draw_text(left, bounds.bottom() - 2, &prompt, Color::WHITE);
        }
    }

    fn handle_resize(&mut self, width: i32, height: i32) {
        self.width = width;
        self.height = height;
        self.scroll = self.scroll.min(self.max_scroll());
    }

    fn handle_mouse(&mut self, event: &MouseEvent, bounds: Rect) -> ReturnMessage {
        if event.kind != MouseEventKind::Pressed || !bounds.contains(event.x, event.y) {
            return ReturnMessage::Ignored;
        }
        let local = event.translated(-bounds.x, -bounds.y);
        self.last_click = Some(Point::new(local.x, local.y));
        ReturnMessage::Consumed
    }

    fn handle_key(&mut self, event: &KeyEvent) -> ReturnMessage {
        if let Some(text) = event.text() {
            self.input.push_str(text);
            return ReturnMessage::Redraw;
        }
        match event.key.as_str() {
            "Backspace" if self.input.pop().is_some() => ReturnMessage::Redraw,
            "Down" if self.scroll < self.max_scroll() => {
                self.scroll += 1;
                ReturnMessage::Redraw
            }
            "Up" if self.scroll > 0 => {
                self.scroll -= 1;
                ReturnMessage::Redraw
            }
            _ => ReturnMessage::Ignored,
        }
    }

    fn visible_bounds(&self) -> Rect {
        Rect::new(0, self.scroll, self.width, self.body_rows())
    }
}

/// Translator producing [`TextSurface`]s.
#[derive(Debug, Default)]
pub struct TextTranslator;

impl ContentTranslator for TextTranslator {
    fn translate(&mut self, _document: DocumentId, span: &ContentSpan) -> Box<dyn ContentSurface> {
        Box::new(TextSurface::new(span))
    }
}
