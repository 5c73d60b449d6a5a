//! Mouse down event handling - start a drag.

use crate::constants::ATTR_MOVE_DISABLED;
use crate::controller::{DragController, apply_listener_ops};
use crate::host::{Host, NodeId, PointerEvent};
use crate::input::coords::OffsetConverter;
use crate::input::PhaseInput;
use tracing::{debug, trace};

impl DragController {
    pub fn handle_mouse_down(&mut self, host: &mut impl Host, handle: NodeId, event: &PointerEvent) {
        // Nested controls opt out of dragging
        if host.has_attribute(event.target, ATTR_MOVE_DISABLED) {
            trace!(?handle, target = ?event.target, "mouse down on move-disabled element");
            return;
        }

        let Some(state) = self.states.get_mut(&handle) else {
            return;
        };
        let Some(target) = state.target else {
            return;
        };

        let transition = state.phase.transition(PhaseInput::MouseDown);
        let origin = OffsetConverter::drag_origin(event.position, host.offset(target));
        state.origin = Some(origin);
        state.phase = transition.next;
        apply_listener_ops(host, handle, transition.listeners);

        debug!(?handle, ?origin, "drag started");
    }
}
