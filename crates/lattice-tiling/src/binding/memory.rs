use std::collections::HashMap;

use lattice_common::{DocumentId, TilingError};

use super::{ContentSpan, DocumentBinding};

/// A [`DocumentBinding`] backed by a map, with a queue of edited ids.
#[derive(Debug)]
pub struct InMemoryDocuments {
    documents: HashMap<DocumentId, ContentSpan>,
    welcome: ContentSpan,
    current: Option<DocumentId>,
    changed: Vec<DocumentId>,
    next_id: u32,
}

impl InMemoryDocuments {
    pub fn new(welcome: ContentSpan) -> Self {
        Self {
            documents: HashMap::new(),
            welcome,
            current: None,
            changed: Vec::new(),
            next_id: 1,
        }
    }

    pub fn current(&self) -> Option<DocumentId> {
        self.current
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    pub fn contains(&self, id: DocumentId) -> bool {
        self.documents.contains_key(&id)
    }

    /// Replace the text of `id` and queue a change notification.
    pub fn edit(&mut self, id: DocumentId, text: impl Into<String>) -> Result<(), TilingError> {
        let doc = self
            .documents
            .get_mut(&id)
            .ok_or(TilingError::UnknownDocument(id))?;
        doc.text = text.into();
        self.changed.push(id);
        Ok(())
    }

    /// Point `id` at a new URL and content and queue a change notification.
    pub fn load(&mut self, id: DocumentId, span: ContentSpan) -> Result<(), TilingError> {
        let doc = self
            .documents
            .get_mut(&id)
            .ok_or(TilingError::UnknownDocument(id))?;
        *doc = span;
        self.changed.push(id);
        Ok(())
    }

    fn allocate(&mut self, span: ContentSpan) -> DocumentId {
        let id = DocumentId(self.next_id);
        self.next_id += 1;
        self.documents.insert(id, span);
        id
    }
}

impl Default for InMemoryDocuments {
    fn default() -> Self {
        Self::new(ContentSpan::new("about:welcome", "Welcome"))
    }
}

impl DocumentBinding for InMemoryDocuments {
    fn create(&mut self) -> DocumentId {
        let welcome = self.welcome.clone();
        self.allocate(welcome)
    }

    fn duplicate(&mut self, id: DocumentId) -> Result<DocumentId, TilingError> {
        let span = self
            .documents
            .get(&id)
            .cloned()
            .ok_or(TilingError::UnknownDocument(id))?;
        Ok(self.allocate(span))
    }

    fn release(&mut self, id: DocumentId) {
        self.documents.remove(&id);
        self.changed.retain(|c| *c != id);
        if self.current == Some(id) {
            self.current = None;
        }
    }

    fn set_current(&mut self, id: DocumentId) {
        self.current = Some(id);
    }

    fn content(&self, id: DocumentId) -> Option<ContentSpan> {
        self.documents.get(&id).cloned()
    }

    fn drain_changes(&mut self) -> Vec<DocumentId> {
        let mut changed = std::mem::take(&mut self.changed);
        changed.dedup();
        changed
    }
}
