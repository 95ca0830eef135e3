pub mod actions;
pub mod errors;
pub mod events;
pub mod input;
pub mod types;

pub use actions::Action;
pub use errors::{ConfigError, LatticeError, TilingError};
pub use events::{EventBus, WorkspaceEvent};
pub use input::{KeyEvent, Modifiers, MouseButton, MouseEvent, MouseEventKind};
pub use types::{Color, DocumentId, PaneId, Point, Rect};

pub type Result<T> = std::result::Result<T, LatticeError>;
