//! Document rebinding: turning document content into surfaces.

use lattice_common::{DocumentId, PaneId, TilingError, WorkspaceEvent};

use crate::binding::DocumentBinding;
use crate::content::ContentSurface;

use super::Workspace;

impl<B: DocumentBinding> Workspace<B> {
    /// Translate a document's current content into a fresh surface.
    pub(super) fn open_surface(
        &mut self,
        document: DocumentId,
    ) -> Result<Box<dyn ContentSurface>, TilingError> {
        let span = self
            .bindings
            .content(document)
            .ok_or(TilingError::UnknownDocument(document))?;
        Ok(self.translator.translate(document, &span))
    }

    /// Rebuild the surface of the leaf showing `document`. Returns that leaf.
    pub fn content_changed(&mut self, document: DocumentId) -> Result<PaneId, TilingError> {
        let leaf = self
            .arena
            .find_document(self.root, document)
            .ok_or(TilingError::UnknownDocument(document))?;
        let bounds = self.bounds(leaf)?;
        let mut content = self.open_surface(document)?;
        content.handle_resize(bounds.width, bounds.height);
        if let Some(pane) = self.arena.get_mut(leaf)?.as_leaf_mut() {
            pane.replace_content(content);
        }
        tracing::debug!(pane = %leaf, %document, "content rebuilt");
        self.emit(WorkspaceEvent::ContentChanged(document));
        Ok(leaf)
    }

    /// Apply every change the binding queued since the last call. Returns
    /// the leaves that were rebuilt.
    pub fn sync_documents(&mut self) -> Vec<PaneId> {
        let changed = self.bindings.drain_changes();
        let mut rebuilt = Vec::with_capacity(changed.len());
        for document in changed {
            match self.content_changed(document) {
                Ok(pane) => rebuilt.push(pane),
                Err(err) => tracing::debug!(%document, error = %err, "skipping change"),
            }
        }
        rebuilt
    }
}
