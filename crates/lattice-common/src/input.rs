//! Toolkit-neutral input events delivered by the native event loop.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MouseButton {
    Left,
    Middle,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MouseEventKind {
    Pressed,
    Dragged,
    Released,
    Moved,
}

/// A pointer event in window coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MouseEvent {
    pub kind: MouseEventKind,
    pub button: MouseButton,
    pub x: i32,
    pub y: i32,
}

impl MouseEvent {
    pub fn new(kind: MouseEventKind, x: i32, y: i32) -> Self {
        Self {
            kind,
            button: MouseButton::Left,
            x,
            y,
        }
    }

    pub fn pressed(x: i32, y: i32) -> Self {
        Self::new(MouseEventKind::Pressed, x, y)
    }

    pub fn dragged(x: i32, y: i32) -> Self {
        Self::new(MouseEventKind::Dragged, x, y)
    }

    pub fn released(x: i32, y: i32) -> Self {
        Self::new(MouseEventKind::Released, x, y)
    }

    pub fn moved(x: i32, y: i32) -> Self {
        Self::new(MouseEventKind::Moved, x, y)
    }

    /// The same event shifted into a child's coordinate space.
    pub fn translated(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..*self
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Modifiers {
    pub ctrl: bool,
    pub alt: bool,
    pub shift: bool,
    pub super_key: bool,
}

impl Modifiers {
    pub const NONE: Modifiers = Modifiers {
        ctrl: false,
        alt: false,
        shift: false,
        super_key: false,
    };

    pub const CTRL: Modifiers = Modifiers {
        ctrl: true,
        alt: false,
        shift: false,
        super_key: false,
    };

    pub fn is_empty(&self) -> bool {
        *self == Self::NONE
    }
}

/// A key press with a normalized key name (e.g. "H", "Enter", "F1").
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct KeyEvent {
    pub key: String,
    pub modifiers: Modifiers,
}

impl KeyEvent {
    pub fn new(key: impl Into<String>, modifiers: Modifiers) -> Self {
        Self {
            key: key.into(),
            modifiers,
        }
    }

    pub fn plain(key: impl Into<String>) -> Self {
        Self::new(key, Modifiers::NONE)
    }

    /// Printable text carried by this key, if any.
    pub fn text(&self) -> Option<&str> {
        if self.modifiers.ctrl || self.modifiers.alt || self.modifiers.super_key {
            return None;
        }
        match self.key.as_str() {
            "Space" => Some(" "),
            k if k.chars().count() == 1 => Some(k),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mouse_constructors_use_left_button() {
        let ev = MouseEvent::pressed(3, 4);
        assert_eq!(ev.kind, MouseEventKind::Pressed);
        assert_eq!(ev.button, MouseButton::Left);
        assert_eq!((ev.x, ev.y), (3, 4));
    }

    #[test]
    fn translated_keeps_kind() {
        let ev = MouseEvent::dragged(10, 10).translated(-4, 6);
        assert_eq!(ev.kind, MouseEventKind::Dragged);
        assert_eq!((ev.x, ev.y), (6, 16));
    }

    #[test]
    fn key_text() {
        assert_eq!(KeyEvent::plain("a").text(), Some("a"));
        assert_eq!(KeyEvent::plain("Space").text(), Some(" "));
        assert_eq!(KeyEvent::plain("Enter").text(), None);
        assert_eq!(KeyEvent::new("h", Modifiers::CTRL).text(), None);
    }

    #[test]
    fn modifiers_empty() {
        assert!(Modifiers::default().is_empty());
        assert!(!Modifiers::CTRL.is_empty());
    }
}
