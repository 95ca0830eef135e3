//! Character-cell render surface for the headless shell.

use std::fmt;

use lattice_common::{Color, Rect};
use lattice_tiling::RenderSurface;

const BLANK: char = ' ';
const SEPARATOR: char = '#';
const FILL: char = '.';
const BORDER: char = '*';

/// Largest side the canvas allocates; anything beyond is dropped.
pub const MAX_SIDE: i32 = 1000;

/// One character per cell. Drawing outside the canvas or the current
/// clip rectangle is dropped. Each side is capped at [`MAX_SIDE`].
pub struct AsciiCanvas {
    width: i32,
    height: i32,
    cells: Vec<char>,
    clip: Option<Rect>,
}

impl AsciiCanvas {
    pub fn new(width: i32, height: i32) -> Self {
        let width = width.clamp(0, MAX_SIDE);
        let height = height.clamp(0, MAX_SIDE);
        Self {
            width,
            height,
            cells: vec![BLANK; width as usize * height as usize],
            clip: None,
        }
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    /// Part of `rect` that can receive cells: inside the canvas and the clip.
    fn visible(&self, rect: Rect) -> Option<Rect> {
        let area = rect.intersect(&Rect::new(0, 0, self.width, self.height))?;
        match self.clip {
            Some(clip) => area.intersect(&clip),
            None => Some(area),
        }
    }

    pub fn get(&self, x: i32, y: i32) -> Option<char> {
        self.index(x, y).map(|i| self.cells[i])
    }

    pub fn row(&self, y: i32) -> String {
        (0..self.width).filter_map(|x| self.get(x, y)).collect()
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        (x >= 0 && y >= 0 && x < self.width && y < self.height)
            .then(|| y as usize * self.width as usize + x as usize)
    }

    fn put(&mut self, x: i32, y: i32, ch: char) {
        if self.clip.is_some_and(|clip| !clip.contains(x, y)) {
            return;
        }
        if let Some(i) = self.index(x, y) {
            self.cells[i] = ch;
        }
    }
}

impl RenderSurface for AsciiCanvas {
    fn fill_rect(&mut self, rect: Rect, color: Color) {
        let glyph = if color == Color::SEPARATOR { SEPARATOR } else { FILL };
        let Some(area) = self.visible(rect) else {
            return;
        };
        for y in area.y..area.bottom() {
            for x in area.x..area.right() {
                self.put(x, y, glyph);
            }
        }
    }

    fn stroke_rect(&mut self, rect: Rect, width: i32, _color: Color) {
        let Some(area) = self.visible(rect) else {
            return;
        };
        for inset in 0..width {
            let (left, top) = (rect.x.saturating_add(inset), rect.y.saturating_add(inset));
            let (right, bottom) = (
                rect.right().saturating_sub(1 + inset),
                rect.bottom().saturating_sub(1 + inset),
            );
            if left > right || top > bottom {
                break;
            }
            for x in left.max(area.x)..=right.min(area.right() - 1) {
                self.put(x, top, BORDER);
                self.put(x, bottom, BORDER);
            }
            for y in top.max(area.y)..=bottom.min(area.bottom() - 1) {
                self.put(left, y, BORDER);
                self.put(right, y, BORDER);
            }
        }
    }

    fn draw_text(&mut self, x: i32, y: i32, text: &str, _color: Color) {
        for (i, ch) in text.chars().take(MAX_SIDE as usize).enumerate() {
            self.put(x.saturating_add(i as i32), y, ch);
        }
    }

    fn set_clip(&mut self, clip: Option<Rect>) {
        self.clip = clip;
    }
}

impl fmt::Display for AsciiCanvas {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..self.height {
            writeln!(f, "{}", self.row(y).trim_end())?;
        }
        Ok(())
    }
}
