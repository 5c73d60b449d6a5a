//! The drag controller - per-handle state and lifecycle.
//!
//! A handle goes through three lifecycle calls from its host:
//!
//! - `attach` when the directive is bound: options are read and state is
//!   recorded, but nothing is armed yet because the target may not exist.
//! - `mount` once the target is in the tree and measurable: the target is
//!   resolved, switched to fixed positioning, and mouse-down is armed.
//! - `detach` when the directive is unbound.
//!
//! Event handlers live in `crate::input`.

use crate::constants::{POSITION_FIXED, STYLE_UNSET};
use crate::error::{MoveError, MoveResult};
use crate::host::{EventKind, EventResponse, Host, ListenerTarget, NodeId, PointerEvent, StyleProperty};
use crate::input::{DragPhase, ListenerOp, PhaseInput};
use crate::options::MoveOptions;
use gpui::{Pixels, Point};
use std::collections::HashMap;
use std::fmt;
use tracing::{debug, warn};

/// Deferred lookup of the node a handle moves
pub type TargetResolver = Box<dyn FnOnce() -> Option<NodeId>>;

/// Drag bookkeeping for one handle
pub(crate) struct DragState {
    pub(crate) options: MoveOptions,
    pub(crate) phase: DragPhase,
    /// Pointer offset from the target's left/top, captured on mouse down
    pub(crate) origin: Option<Point<Pixels>>,
    pub(crate) target: Option<NodeId>,
    resolver: Option<TargetResolver>,
}

impl DragState {
    fn new(options: MoveOptions, resolver: TargetResolver) -> Self {
        Self {
            options,
            phase: DragPhase::Idle,
            origin: None,
            target: None,
            resolver: Some(resolver),
        }
    }
}

impl fmt::Debug for DragState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DragState")
            .field("options", &self.options)
            .field("phase", &self.phase)
            .field("origin", &self.origin)
            .field("target", &self.target)
            .field("pending", &self.resolver.is_some())
            .finish()
    }
}

/// Makes handles drag their targets around the viewport.
#[derive(Debug, Default)]
pub struct DragController {
    pub(crate) states: HashMap<NodeId, DragState>,
}

impl DragController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind the directive to `handle`, reading options from its attributes.
    ///
    /// Without a target expression this is a no-op.
    pub fn attach(&mut self, host: &mut impl Host, handle: NodeId, resolver: Option<TargetResolver>) {
        let Some(resolver) = resolver else {
            debug!(?handle, "move directive without target expression, ignoring");
            return;
        };
        let options = MoveOptions::from_attributes(&*host, handle);
        self.attach_with_options(host, handle, resolver, options);
    }

    /// Bind the directive to `handle` with explicit options.
    pub fn attach_with_options(
        &mut self,
        host: &mut impl Host,
        handle: NodeId,
        resolver: TargetResolver,
        options: MoveOptions,
    ) {
        if self.states.contains_key(&handle) {
            self.detach(host, handle);
        }
        debug!(?handle, ?options, "attached move directive");
        self.states.insert(handle, DragState::new(options, resolver));
    }

    /// Resolve the target and arm mouse-down on the handle.
    ///
    /// Called by the host once the target is present and measurable.
    /// Mounting an already mounted handle does nothing.
    pub fn mount(&mut self, host: &mut impl Host, handle: NodeId) -> MoveResult<()> {
        let state = self
            .states
            .get_mut(&handle)
            .ok_or(MoveError::UnknownHandle(handle))?;

        if state.target.is_some() {
            return Ok(());
        }

        let target = state.resolver.take().and_then(|resolve| resolve());
        let Some(target) = target else {
            warn!(?handle, "move target could not be resolved");
            return Err(MoveError::TargetMissing(handle));
        };

        state.target = Some(target);
        host.set_style(target, StyleProperty::Position, POSITION_FIXED);
        host.add_listener(ListenerTarget::Element(handle), EventKind::MouseDown, handle);
        debug!(?handle, ?target, "mounted move directive");
        Ok(())
    }

    /// Unbind the directive from `handle`.
    ///
    /// A drag in flight is ended: document listeners are disarmed and the
    /// target's cursor is reset.
    pub fn detach(&mut self, host: &mut impl Host, handle: NodeId) {
        let Some(state) = self.states.remove(&handle) else {
            return;
        };

        host.remove_listener(ListenerTarget::Element(handle), EventKind::MouseDown, handle);

        if state.phase.is_moving() {
            if let Some(target) = state.target {
                host.set_style(target, StyleProperty::Cursor, STYLE_UNSET);
            }
        }
        let transition = state.phase.transition(PhaseInput::Detach);
        apply_listener_ops(host, handle, transition.listeners);
        debug!(?handle, "detached move directive");
    }

    /// Route an event delivered through one of `handle`'s listeners
    pub fn dispatch(
        &mut self,
        host: &mut impl Host,
        handle: NodeId,
        kind: EventKind,
        event: &PointerEvent,
    ) -> EventResponse {
        match kind {
            EventKind::MouseDown => {
                self.handle_mouse_down(host, handle, event);
                EventResponse::PASS
            }
            EventKind::MouseMove => self.handle_mouse_move(host, handle, event),
            EventKind::MouseUp => {
                self.handle_mouse_up(host, handle, event);
                EventResponse::PASS
            }
        }
    }

    pub fn is_attached(&self, handle: NodeId) -> bool {
        self.states.contains_key(&handle)
    }

    pub fn is_mounted(&self, handle: NodeId) -> bool {
        self.target_of(handle).is_some()
    }

    pub fn is_moving(&self, handle: NodeId) -> bool {
        self.states
            .get(&handle)
            .is_some_and(|state| state.phase.is_moving())
    }

    pub fn drag_origin(&self, handle: NodeId) -> Option<Point<Pixels>> {
        self.states.get(&handle).and_then(|state| state.origin)
    }

    pub fn target_of(&self, handle: NodeId) -> Option<NodeId> {
        self.states.get(&handle).and_then(|state| state.target)
    }

    pub fn options_of(&self, handle: NodeId) -> Option<&MoveOptions> {
        self.states.get(&handle).map(|state| &state.options)
    }

    pub fn attached_count(&self) -> usize {
        self.states.len()
    }
}

/// Apply the document listener changes of a transition
pub(crate) fn apply_listener_ops(host: &mut impl Host, handle: NodeId, ops: &[ListenerOp]) {
    for op in ops {
        match *op {
            ListenerOp::Add(kind) => host.add_listener(ListenerTarget::Document, kind, handle),
            ListenerOp::Remove(kind) => host.remove_listener(ListenerTarget::Document, kind, handle),
        }
    }
}
