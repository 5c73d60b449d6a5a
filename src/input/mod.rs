//! Mouse input handling for draggable handles.
//!
//! ## Architecture
//!
//! Each handle runs a two-state machine (`DragPhase`). Arming and disarming
//! the document-level move/up listeners are side effects of its transitions,
//! so a handle is `Dragging` exactly while those listeners are registered.
//!
//! ## Modules
//!
//! - `state` - Drag phase enum and its transition table
//! - `mouse_down` - Drag start (move-disabled guard, origin capture)
//! - `drag` - Mouse move handling (offset computation, clamping, style writes)
//! - `mouse_up` - Drag end
//! - `coords` - Pointer-to-offset conversion and viewport clamping

pub mod coords;
mod state;
mod mouse_down;
mod drag;
mod mouse_up;

pub use state::{DragPhase, ListenerOp, PhaseInput, Transition};
