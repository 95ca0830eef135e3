//! Read-only walks over the arena.

use lattice_common::{DocumentId, PaneId};

use super::{PaneArena, PaneKind};

impl PaneArena {
    /// Leaves under `root` in depth-first order, `first` before `second`.
    pub fn leaves(&self, root: PaneId) -> Vec<PaneId> {
        let mut out = Vec::new();
        self.collect_leaves(root, &mut out);
        out
    }

    fn collect_leaves(&self, id: PaneId, out: &mut Vec<PaneId>) {
        match self.get(id).map(|n| n.kind()) {
            Ok(PaneKind::Leaf(_)) => out.push(id),
            Ok(PaneKind::Split(split)) => {
                self.collect_leaves(split.first(), out);
                self.collect_leaves(split.second(), out);
            }
            Err(_) => {}
        }
    }

    /// First leaf reached by always descending into `first`.
    pub fn first_leaf(&self, id: PaneId) -> PaneId {
        let mut current = id;
        while let Ok(first) = self.first(current) {
            current = first;
        }
        current
    }

    /// Next leaf after `current` under `root`, wrapping around.
    pub fn next_leaf(&self, root: PaneId, current: PaneId) -> Option<PaneId> {
        let ids = self.leaves(root);
        if ids.len() <= 1 {
            return None;
        }
        let idx = ids.iter().position(|&id| id == current)?;
        Some(ids[(idx + 1) % ids.len()])
    }

    /// Previous leaf before `current` under `root`, wrapping around.
    pub fn prev_leaf(&self, root: PaneId, current: PaneId) -> Option<PaneId> {
        let ids = self.leaves(root);
        if ids.len() <= 1 {
            return None;
        }
        let idx = ids.iter().position(|&id| id == current)?;
        Some(ids[(idx + ids.len() - 1) % ids.len()])
    }

    /// Whether `ancestor` is `id` or lies on the parent chain above it.
    pub fn is_ancestor_or_self(&self, ancestor: PaneId, id: PaneId) -> bool {
        let mut current = Some(id);
        while let Some(c) = current {
            if c == ancestor {
                return true;
            }
            current = self.parent(c).ok().flatten();
        }
        false
    }

    /// Number of parent links between `id` and the root.
    pub fn depth(&self, id: PaneId) -> usize {
        let mut depth = 0;
        let mut current = self.parent(id).ok().flatten();
        while let Some(c) = current {
            depth += 1;
            current = self.parent(c).ok().flatten();
        }
        depth
    }

    /// The leaf under `root` bound to `document`.
    pub fn find_document(&self, root: PaneId, document: DocumentId) -> Option<PaneId> {
        self.leaves(root).into_iter().find(|&id| {
            self.get(id)
                .ok()
                .and_then(|n| n.as_leaf())
                .is_some_and(|leaf| leaf.document() == document)
        })
    }
}
