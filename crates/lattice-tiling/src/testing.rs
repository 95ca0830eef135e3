//! Shared fixtures for unit tests.

use lattice_common::{Color, Rect};

use crate::binding::InMemoryDocuments;
use crate::content::text::TextTranslator;
use crate::content::RenderSurface;
use crate::layout::TilingOptions;
use crate::workspace::Workspace;

pub fn workspace(width: i32, height: i32) -> Workspace<InMemoryDocuments> {
    Workspace::new(
        Rect::new(0, 0, width, height),
        InMemoryDocuments::default(),
        Box::new(TextTranslator),
        TilingOptions::default(),
    )
    .unwrap()
}

/// Render surface that records every call.
#[derive(Debug, Default)]
pub struct Recorder {
    pub fills: Vec<(Rect, Color)>,
    pub strokes: Vec<(Rect, i32, Color)>,
    pub texts: Vec<(i32, i32, String)>,
}

impl RenderSurface for Recorder {
    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.fills.push((rect, color));
    }

    fn stroke_rect(&mut self, rect: Rect, width: i32, color: Color) {
        self.strokes.push((rect, width, color));
    }

    fn draw_text(&mut self, x: i32, y: i32, text: &str, _color: Color) {
        self.texts.push((x, y, text.to_owned()));
    }

    fn set_clip(&mut self, _clip: Option<Rect>) {}
}
