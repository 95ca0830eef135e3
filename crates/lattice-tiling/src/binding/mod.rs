//! Contract with the per-leaf document service.

mod memory;

pub use memory::InMemoryDocuments;

use lattice_common::{DocumentId, TilingError};
use serde::{Deserialize, Serialize};

/// Content of one document as handed to the translation layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentSpan {
    pub url: String,
    pub text: String,
}

impl ContentSpan {
    pub fn new(url: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            text: text.into(),
        }
    }
}

/// Per-leaf document identity and content store.
///
/// Every live leaf owns exactly one id. Duplicates are independent copies:
/// editing one never shows through in the other.
pub trait DocumentBinding {
    /// Allocate a fresh document holding the default (welcome) content.
    fn create(&mut self) -> DocumentId;
    /// Copy the URL and content of `id` into a new document.
    fn duplicate(&mut self, id: DocumentId) -> Result<DocumentId, TilingError>;
    fn release(&mut self, id: DocumentId);
    /// Mark `id` as the document behind the focused leaf.
    fn set_current(&mut self, id: DocumentId);
    fn content(&self, id: DocumentId) -> Option<ContentSpan>;
    /// Ids whose content changed since the last call.
    fn drain_changes(&mut self) -> Vec<DocumentId> {
        Vec::new()
    }
}
