use std::path::PathBuf;

use crate::types::{DocumentId, PaneId};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),
}

/// Faults raised by the pane tree. None of these are recoverable by the
/// tree itself; the caller aborts the requested action and the tree is
/// left exactly as it was.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TilingError {
    #[error("unsupported operation '{operation}' on {pane}")]
    UnsupportedOperation {
        operation: &'static str,
        pane: PaneId,
    },

    #[error("invalid dimensions: position ({x}, {y}), size {width}x{height}")]
    Dimension {
        x: i32,
        y: i32,
        width: i32,
        height: i32,
    },

    #[error("unknown pane: {0}")]
    UnknownPane(PaneId),

    #[error("unknown document: {0}")]
    UnknownDocument(DocumentId),

    #[error("pane tree corrupted: {0}")]
    Corrupted(String),
}

impl TilingError {
    pub fn unsupported(operation: &'static str, pane: PaneId) -> Self {
        TilingError::UnsupportedOperation { operation, pane }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum LatticeError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Tiling(#[from] TilingError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("input error: {0}")]
    Input(String),

    #[error("{0}")]
    Other(String),
}
