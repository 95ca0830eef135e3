//! Serializable picture of the whole tree for diagnostics.

use serde::{Deserialize, Serialize};

use lattice_common::{DocumentId, PaneId, Rect, TilingError};

use crate::tree::{Direction, PaneArena, PaneKind};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SnapshotNode {
    Leaf {
        id: PaneId,
        document: DocumentId,
        bounds: Rect,
        focused: bool,
    },
    Split {
        id: PaneId,
        direction: Direction,
        fraction: f64,
        bounds: Rect,
        first: Box<SnapshotNode>,
        second: Box<SnapshotNode>,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutSnapshot {
    pub focused: PaneId,
    pub root: SnapshotNode,
}

impl LayoutSnapshot {
    pub(crate) fn capture(
        arena: &PaneArena,
        root: PaneId,
        focused: PaneId,
    ) -> Result<Self, TilingError> {
        Ok(Self {
            focused,
            root: capture_node(arena, root, focused)?,
        })
    }

    pub fn leaf_count(&self) -> usize {
        count_leaves(&self.root)
    }
}

fn capture_node(
    arena: &PaneArena,
    id: PaneId,
    focused: PaneId,
) -> Result<SnapshotNode, TilingError> {
    let node = arena.get(id)?;
    let bounds = node.viewport().bounds();
    Ok(match node.kind() {
        PaneKind::Leaf(leaf) => SnapshotNode::Leaf {
            id,
            document: leaf.document(),
            bounds,
            focused: id == focused,
        },
        PaneKind::Split(split) => SnapshotNode::Split {
            id,
            direction: split.direction(),
            fraction: split.fraction(),
            bounds,
            first: Box::new(capture_node(arena, split.first(), focused)?),
            second: Box::new(capture_node(arena, split.second(), focused)?),
        },
    })
}

fn count_leaves(node: &SnapshotNode) -> usize {
    match node {
        SnapshotNode::Leaf { .. } => 1,
        SnapshotNode::Split { first, second, .. } => count_leaves(first) + count_leaves(second),
    }
}
