//! Drag-to-move directive.
//!
//! A handle element, when dragged with the mouse, repositions a separate
//! target element through fixed-position offsets, optionally clamped to the
//! viewport. The UI framework hosting the directive is abstracted behind
//! [`Host`]; [`MemoryHost`] is a headless implementation.

pub mod constants;
pub mod controller;
pub mod error;
pub mod host;
pub mod input;
pub mod logging;
pub mod memory_host;
pub mod options;
pub mod perf;
pub mod replay;

pub use controller::{DragController, TargetResolver};
pub use error::{MoveError, MoveResult};
pub use host::{EventKind, EventResponse, Host, ListenerTarget, NodeId, PointerEvent, StyleProperty};
pub use input::DragPhase;
pub use memory_host::MemoryHost;
pub use options::MoveOptions;
