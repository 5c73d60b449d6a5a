//! Mouse up event handling - end a drag.

use crate::constants::STYLE_UNSET;
use crate::controller::{DragController, apply_listener_ops};
use crate::host::{Host, NodeId, PointerEvent, StyleProperty};
use crate::input::PhaseInput;
use tracing::debug;

impl DragController {
    pub fn handle_mouse_up(&mut self, host: &mut impl Host, handle: NodeId, _event: &PointerEvent) {
        let Some(state) = self.states.get_mut(&handle) else {
            return;
        };

        let was_moving = state.phase.is_moving();
        let transition = state.phase.transition(PhaseInput::MouseUp);
        state.phase = transition.next;

        if let Some(target) = state.target {
            host.set_style(target, StyleProperty::Cursor, STYLE_UNSET);
        }
        apply_listener_ops(host, handle, transition.listeners);

        if was_moving {
            debug!(?handle, "drag ended");
        }
    }
}
