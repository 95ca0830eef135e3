//! Core types and constructors for Workspace.

use lattice_common::{DocumentId, EventBus, PaneId, Rect, TilingError, WorkspaceEvent};
use tokio::sync::broadcast;

use crate::binding::DocumentBinding;
use crate::content::ContentTranslator;
use crate::layout::TilingOptions;
use crate::leaf::LeafPane;
use crate::tree::{PaneArena, PaneNode};
use crate::viewport::Viewport;

/// Manages the whole pane tree: the arena of nodes, the root handle, the
/// focused leaf, the active separator drag, and the collaborators that
/// supply documents and content surfaces.
pub struct Workspace<B: DocumentBinding> {
    /// Every live pane, leaves and splits.
    pub(super) arena: PaneArena,
    /// Root of the tree. Changes identity when the root leaf is split or
    /// when a close collapses the last split under it.
    pub(super) root: PaneId,
    /// The single focused leaf. Only written through `set_focused`.
    pub(super) focused: PaneId,
    /// Split whose separator is being dragged, if any.
    pub(super) active_drag: Option<PaneId>,
    pub(super) bindings: B,
    pub(super) translator: Box<dyn ContentTranslator>,
    pub(super) options: TilingOptions,
    pub(super) events: Option<EventBus>,
}

impl<B: DocumentBinding> Workspace<B> {
    /// Create a workspace with one leaf covering `bounds`, bound to a
    /// freshly created document.
    pub fn new(
        bounds: Rect,
        mut bindings: B,
        mut translator: Box<dyn ContentTranslator>,
        options: TilingOptions,
    ) -> Result<Self, TilingError> {
        let viewport = Viewport::from_rect(bounds)?;
        let document = bindings.create();
        let Some(span) = bindings.content(document) else {
            bindings.release(document);
            return Err(TilingError::UnknownDocument(document));
        };
        let mut content = translator.translate(document, &span);
        content.handle_resize(bounds.width, bounds.height);

        let mut arena = PaneArena::new();
        let root = arena.insert(PaneNode::leaf(viewport, LeafPane::new(document, content)));
        bindings.set_current(document);
        tracing::debug!(%root, %document, ?bounds, "workspace created");

        Ok(Self {
            arena,
            root,
            focused: root,
            active_drag: None,
            bindings,
            translator,
            options,
            events: None,
        })
    }

    /// Publish structural and focus changes on `bus`.
    pub fn with_event_bus(mut self, bus: EventBus) -> Self {
        self.events = Some(bus);
        self
    }

    pub fn subscribe(&self) -> Option<broadcast::Receiver<WorkspaceEvent>> {
        self.events.as_ref().map(EventBus::subscribe)
    }

    pub(super) fn emit(&self, event: WorkspaceEvent) {
        if let Some(bus) = &self.events {
            bus.publish(event);
        }
    }

    // -- Accessors --

    pub fn root(&self) -> PaneId {
        self.root
    }

    pub fn focused(&self) -> PaneId {
        self.focused
    }

    pub fn options(&self) -> &TilingOptions {
        &self.options
    }

    pub fn bindings(&self) -> &B {
        &self.bindings
    }

    pub fn bindings_mut(&mut self) -> &mut B {
        &mut self.bindings
    }

    pub fn arena(&self) -> &PaneArena {
        &self.arena
    }

    pub fn pane(&self, id: PaneId) -> Result<&PaneNode, TilingError> {
        self.arena.get(id)
    }

    pub fn viewport(&self, id: PaneId) -> Result<&Viewport, TilingError> {
        Ok(self.arena.get(id)?.viewport())
    }

    pub fn bounds(&self, id: PaneId) -> Result<Rect, TilingError> {
        Ok(self.viewport(id)?.bounds())
    }

    pub fn is_leaf(&self, id: PaneId) -> Result<bool, TilingError> {
        self.arena.is_leaf(id)
    }

    pub fn parent(&self, id: PaneId) -> Result<Option<PaneId>, TilingError> {
        self.arena.parent(id)
    }

    /// `first` child of a split. Fails on a leaf.
    pub fn first_child(&self, id: PaneId) -> Result<PaneId, TilingError> {
        self.arena.first(id)
    }

    /// `second` child of a split. Fails on a leaf.
    pub fn second_child(&self, id: PaneId) -> Result<PaneId, TilingError> {
        self.arena.second(id)
    }

    /// Leaves in depth-first order, `first` before `second`.
    pub fn leaves(&self) -> Vec<PaneId> {
        self.arena.leaves(self.root)
    }

    pub fn leaf_count(&self) -> usize {
        self.leaves().len()
    }

    /// Document bound to a leaf. Fails on a split.
    pub fn document_of(&self, id: PaneId) -> Result<DocumentId, TilingError> {
        self.arena
            .get(id)?
            .as_leaf()
            .map(LeafPane::document)
            .ok_or(TilingError::unsupported("document_of", id))
    }

    pub fn focused_document(&self) -> Result<DocumentId, TilingError> {
        self.document_of(self.focused)
    }

    pub fn is_dragging(&self) -> bool {
        self.active_drag.is_some()
    }
}
