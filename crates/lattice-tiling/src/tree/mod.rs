//! Arena of pane nodes addressed by [`PaneId`] handles.
//!
//! Parent and child links are handles into the same table, so splicing a
//! subtree is a handful of index writes. Slots are never recycled: a stale
//! handle resolves to `UnknownPane` instead of aliasing a newer pane.

mod axis;
mod operations;
mod traversal;
mod types;

pub use axis::Axis;
pub use types::*;

use lattice_common::{PaneId, TilingError};

#[derive(Default)]
pub struct PaneArena {
    slots: Vec<Option<PaneNode>>,
    live: usize,
}

impl PaneArena {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, node: PaneNode) -> PaneId {
        let id = PaneId(self.slots.len() as u32);
        self.slots.push(Some(node));
        self.live += 1;
        id
    }

    pub fn remove(&mut self, id: PaneId) -> Option<PaneNode> {
        let node = self.slots.get_mut(id.0 as usize)?.take();
        if node.is_some() {
            self.live -= 1;
        }
        node
    }

    pub fn contains(&self, id: PaneId) -> bool {
        matches!(self.slots.get(id.0 as usize), Some(Some(_)))
    }

    pub fn get(&self, id: PaneId) -> Result<&PaneNode, TilingError> {
        self.slots
            .get(id.0 as usize)
            .and_then(Option::as_ref)
            .ok_or(TilingError::UnknownPane(id))
    }

    pub fn get_mut(&mut self, id: PaneId) -> Result<&mut PaneNode, TilingError> {
        self.slots
            .get_mut(id.0 as usize)
            .and_then(Option::as_mut)
            .ok_or(TilingError::UnknownPane(id))
    }

    /// Number of live nodes, leaves and splits together.
    pub fn len(&self) -> usize {
        self.live
    }

    pub fn is_empty(&self) -> bool {
        self.live == 0
    }

    pub fn iter(&self) -> impl Iterator<Item = (PaneId, &PaneNode)> {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(i, slot)| slot.as_ref().map(|node| (PaneId(i as u32), node)))
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (PaneId, &mut PaneNode)> {
        self.slots
            .iter_mut()
            .enumerate()
            .filter_map(|(i, slot)| slot.as_mut().map(|node| (PaneId(i as u32), node)))
    }

    pub fn parent(&self, id: PaneId) -> Result<Option<PaneId>, TilingError> {
        Ok(self.get(id)?.parent)
    }

    /// `(first, second)` children. Fails on a leaf.
    pub fn children(&self, id: PaneId) -> Result<(PaneId, PaneId), TilingError> {
        self.get(id)?.children(id)
    }

    pub fn first(&self, id: PaneId) -> Result<PaneId, TilingError> {
        self.get(id)?
            .as_split()
            .map(|s| s.first())
            .ok_or(TilingError::unsupported("first", id))
    }

    pub fn second(&self, id: PaneId) -> Result<PaneId, TilingError> {
        self.get(id)?
            .as_split()
            .map(|s| s.second())
            .ok_or(TilingError::unsupported("second", id))
    }

    pub fn is_leaf(&self, id: PaneId) -> Result<bool, TilingError> {
        Ok(self.get(id)?.is_leaf())
    }
}
