//! Structural self-check of the pane tree.

use std::collections::HashSet;

use lattice_common::{PaneId, TilingError};

use crate::binding::DocumentBinding;
use crate::tree::PaneKind;

use super::Workspace;

impl<B: DocumentBinding> Workspace<B> {
    /// Verify the tree is well formed:
    ///
    /// * the root has no parent and every child points back at its split;
    /// * every live pane is reachable from the root exactly once;
    /// * the focused pane is a reachable leaf and is the only focused leaf;
    /// * no two leaves share a document;
    /// * each split's children tile its bounds;
    /// * an active drag refers to a split that is dragging.
    pub fn check_invariants(&self) -> Result<(), TilingError> {
        if self.arena.parent(self.root)?.is_some() {
            return Err(TilingError::Corrupted(format!("root {} has a parent", self.root)));
        }

        let mut seen = HashSet::new();
        let mut documents = HashSet::new();
        let mut stack = vec![self.root];
        while let Some(id) = stack.pop() {
            if !seen.insert(id) {
                return Err(TilingError::Corrupted(format!("{id} reachable twice")));
            }
            let node = self.arena.get(id)?;
            match node.kind() {
                PaneKind::Leaf(leaf) => {
                    if !documents.insert(leaf.document()) {
                        return Err(TilingError::Corrupted(format!(
                            "{} bound to more than one leaf",
                            leaf.document()
                        )));
                    }
                }
                PaneKind::Split(split) => {
                    for child in [split.first(), split.second()] {
                        if self.arena.parent(child)? != Some(id) {
                            return Err(TilingError::Corrupted(format!(
                                "{child} does not point back at {id}"
                            )));
                        }
                        stack.push(child);
                    }
                    let bounds = node.viewport().bounds();
                    let (first, second) = split.child_bounds(bounds);
                    if self.bounds(split.first())? != first || self.bounds(split.second())? != second {
                        return Err(TilingError::Corrupted(format!(
                            "children of {id} do not tile {bounds:?}"
                        )));
                    }
                }
            }
        }

        if seen.len() != self.arena.len() {
            return Err(TilingError::Corrupted(format!(
                "{} panes allocated, {} reachable",
                self.arena.len(),
                seen.len()
            )));
        }

        if !seen.contains(&self.focused) || !self.arena.get(self.focused)?.is_leaf() {
            return Err(TilingError::Corrupted(format!(
                "focus {} is not a reachable leaf",
                self.focused
            )));
        }
        let focused_leaves = self
            .leaves()
            .into_iter()
            .filter(|&id| self.has_focus(id))
            .count();
        if focused_leaves != 1 {
            return Err(TilingError::Corrupted(format!("{focused_leaves} leaves hold focus")));
        }

        if let Some(id) = self.active_drag {
            let dragging = self
                .arena
                .get(id)?
                .as_split()
                .is_some_and(|split| split.is_dragging());
            if !dragging {
                return Err(TilingError::Corrupted(format!("{id} is not dragging")));
            }
        }
        Ok(())
    }

    /// Ids of every pane reachable from the root.
    pub fn reachable(&self) -> Vec<PaneId> {
        let mut out = Vec::new();
        let mut stack = vec![self.root];
        while let Some(id) = stack.pop() {
            out.push(id);
            if let Ok((first, second)) = self.arena.children(id) {
                stack.push(second);
                stack.push(first);
            }
        }
        out
    }
}
