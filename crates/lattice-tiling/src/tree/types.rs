//! Core types for the pane arena: Direction, PaneNode and its kinds.

use serde::{Deserialize, Serialize};

use lattice_common::{PaneId, TilingError};

use crate::leaf::LeafPane;
use crate::split::SplitPane;
use crate::viewport::Viewport;

/// Orientation of a split, named after its separator.
///
/// A `Horizontal` split has a horizontal separator: its children are
/// stacked, `first` below `second`. A `Vertical` split has a vertical
/// separator: `first` on the left, `second` on the right.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Horizontal,
    Vertical,
}

pub enum PaneKind {
    Leaf(LeafPane),
    Split(SplitPane),
}

/// One slot of the arena.
pub struct PaneNode {
    pub(crate) viewport: Viewport,
    pub(crate) parent: Option<PaneId>,
    pub(crate) kind: PaneKind,
}

impl PaneNode {
    pub fn leaf(viewport: Viewport, leaf: LeafPane) -> Self {
        Self {
            viewport,
            parent: None,
            kind: PaneKind::Leaf(leaf),
        }
    }

    pub fn split(viewport: Viewport, split: SplitPane) -> Self {
        Self {
            viewport,
            parent: None,
            kind: PaneKind::Split(split),
        }
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn parent(&self) -> Option<PaneId> {
        self.parent
    }

    pub fn kind(&self) -> &PaneKind {
        &self.kind
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self.kind, PaneKind::Leaf(_))
    }

    pub fn as_leaf(&self) -> Option<&LeafPane> {
        match &self.kind {
            PaneKind::Leaf(leaf) => Some(leaf),
            PaneKind::Split(_) => None,
        }
    }

    pub fn as_leaf_mut(&mut self) -> Option<&mut LeafPane> {
        match &mut self.kind {
            PaneKind::Leaf(leaf) => Some(leaf),
            PaneKind::Split(_) => None,
        }
    }

    pub fn as_split(&self) -> Option<&SplitPane> {
        match &self.kind {
            PaneKind::Split(split) => Some(split),
            PaneKind::Leaf(_) => None,
        }
    }

    pub fn as_split_mut(&mut self) -> Option<&mut SplitPane> {
        match &mut self.kind {
            PaneKind::Split(split) => Some(split),
            PaneKind::Leaf(_) => None,
        }
    }

    /// `(first, second)` of a split node.
    pub(crate) fn children(&self, id: PaneId) -> Result<(PaneId, PaneId), TilingError> {
        match &self.kind {
            PaneKind::Split(split) => Ok((split.first(), split.second())),
            PaneKind::Leaf(_) => Err(TilingError::unsupported("children", id)),
        }
    }
}
