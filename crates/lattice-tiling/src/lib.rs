//! Recursive split-pane tiling: a binary tree of leaves and splits, with
//! geometry propagation, separator dragging and single-leaf focus.

pub mod binding;
pub mod commands;
pub mod content;
pub mod layout;
pub mod leaf;
pub mod split;
pub mod tree;
pub mod viewport;
pub mod workspace;

#[cfg(test)]
mod testing;

pub use binding::{ContentSpan, DocumentBinding, InMemoryDocuments};
pub use commands::TilingCommand;
pub use content::text::{TextSurface, TextTranslator};
pub use content::{ContentSurface, ContentTranslator, RenderSurface, ReturnMessage};
pub use layout::{CursorZone, LayoutSnapshot, SeparatorBand, SnapshotNode, TilingOptions};
pub use tree::{Direction, PaneArena, PaneKind, PaneNode};
pub use viewport::Viewport;
pub use workspace::Workspace;
