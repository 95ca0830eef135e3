//! Link rewiring on the arena: parent assignment and child replacement.

use lattice_common::{PaneId, TilingError};

use super::PaneArena;

impl PaneArena {
    pub(crate) fn set_parent(
        &mut self,
        child: PaneId,
        parent: Option<PaneId>,
    ) -> Result<(), TilingError> {
        self.get_mut(child)?.parent = parent;
        Ok(())
    }

    /// Swap `old` for `new` in `parent`'s child slots and point `new` back
    /// at `parent`. `old` keeps its stale parent link; callers either
    /// re-home or drop it.
    pub(crate) fn replace_child(
        &mut self,
        parent: PaneId,
        old: PaneId,
        new: PaneId,
    ) -> Result<(), TilingError> {
        if !self.contains(new) {
            return Err(TilingError::UnknownPane(new));
        }
        let split = self
            .get_mut(parent)?
            .as_split_mut()
            .ok_or(TilingError::unsupported("replace_child", parent))?;
        if !split.replace_child(old, new) {
            return Err(TilingError::Corrupted(format!(
                "{old} is not a child of {parent}"
            )));
        }
        self.set_parent(new, Some(parent))
    }
}
