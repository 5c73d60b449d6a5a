//! Drag state machine.
//!
//! ## State Transitions
//!
//! ```text
//! Idle     -> Dragging   (mouse down; arm document move/up)
//! Dragging -> Dragging   (mouse down; already armed)
//! Dragging -> Idle       (mouse up or detach; disarm document move/up)
//! Idle     -> Idle       (mouse up or detach; nothing armed)
//! ```
//!
//! Listener changes are the side effects of a transition, so the phase is
//! `Dragging` exactly while the document listeners are registered.

use crate::host::EventKind;

/// Whether a handle is currently moving its target
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DragPhase {
    /// Waiting for mouse down on the handle
    #[default]
    Idle,
    /// Between mouse down and mouse up
    Dragging,
}

/// Inputs that drive the state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhaseInput {
    MouseDown,
    MouseUp,
    Detach,
}

/// A document-level listener change requested by a transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListenerOp {
    Add(EventKind),
    Remove(EventKind),
}

const ARM: &[ListenerOp] = &[
    ListenerOp::Add(EventKind::MouseMove),
    ListenerOp::Add(EventKind::MouseUp),
];

const NONE: &[ListenerOp] = &[];

const DISARM: &[ListenerOp] = &[
    ListenerOp::Remove(EventKind::MouseMove),
    ListenerOp::Remove(EventKind::MouseUp),
];

/// Result of feeding an input to a phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub next: DragPhase,
    pub listeners: &'static [ListenerOp],
}

impl DragPhase {
    pub fn transition(self, input: PhaseInput) -> Transition {
        let (next, listeners) = match (self, input) {
            (Self::Idle, PhaseInput::MouseDown) => (Self::Dragging, ARM),
            (Self::Dragging, PhaseInput::MouseDown) => (Self::Dragging, NONE),
            (Self::Dragging, PhaseInput::MouseUp | PhaseInput::Detach) => (Self::Idle, DISARM),
            (Self::Idle, PhaseInput::MouseUp | PhaseInput::Detach) => (Self::Idle, NONE),
        };
        Transition { next, listeners }
    }

    pub fn is_moving(self) -> bool {
        matches!(self, Self::Dragging)
    }

    pub fn is_idle(self) -> bool {
        matches!(self, Self::Idle)
    }
}
