use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

use crate::types::{DocumentId, PaneId};

/// Structural and focus changes published by the workspace so the shell
/// can update chrome (title bar, address bar) without polling the tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum WorkspaceEvent {
    PaneSplit {
        split: PaneId,
        original: PaneId,
        created: PaneId,
    },
    PaneClosed {
        closed: PaneId,
        survivor: PaneId,
    },
    PaneFocused(PaneId),
    DocumentRebound {
        pane: PaneId,
        released: DocumentId,
        bound: DocumentId,
    },
    ContentChanged(DocumentId),
    #[serde(other)]
    Unknown,
}

pub struct EventBus {
    sender: broadcast::Sender<WorkspaceEvent>,
}

impl EventBus {
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<WorkspaceEvent> {
        self.sender.subscribe()
    }

    /// Publish to every live subscriber. Returns the number reached; an
    /// event with no listeners is dropped.
    pub fn publish(&self, event: WorkspaceEvent) -> usize {
        match self.sender.send(event) {
            Ok(n) => n,
            Err(broadcast::error::SendError(event)) => {
                tracing::trace!(?event, "workspace event dropped, no subscribers");
                0
            }
        }
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new(64)
    }
}
