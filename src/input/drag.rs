//! Mouse move handling - reposition the target.
//!
//! Called for every pointer move while the document listener is armed, so
//! the idle path exits before touching layout.
//!
//! Enable profiling with `cargo build --features profiling` to see timing.

use crate::constants::MOVE_SLOW_THRESHOLD_MS;
use crate::controller::DragController;
use crate::host::{EventResponse, Host, NodeId, PointerEvent, StyleProperty};
use crate::input::coords::{Anchor, OffsetConverter, ViewportContext, css_px};
use crate::profile_scope;
use tracing::trace;

impl DragController {
    /// Move the target so the grabbed point follows the pointer.
    ///
    /// The event is always captured (default suppressed, propagation
    /// stopped) so the drag never selects text or scrolls, even when the
    /// handle is idle or no longer attached.
    pub fn handle_mouse_move(
        &mut self,
        host: &mut impl Host,
        handle: NodeId,
        event: &PointerEvent,
    ) -> EventResponse {
        let Some(state) = self.states.get(&handle).filter(|state| state.phase.is_moving()) else {
            return EventResponse::CAPTURE;
        };
        let (Some(target), Some(origin)) = (state.target, state.origin) else {
            return EventResponse::CAPTURE;
        };

        profile_scope!("drag_move", MOVE_SLOW_THRESHOLD_MS);

        let options = &state.options;
        let ctx = ViewportContext::new(host.viewport_size(), host.client_size(target));
        let mut offset = OffsetConverter::pointer_to_offset(event.position, origin, Anchor::from(options), &ctx);
        if !options.move_out {
            offset = OffsetConverter::clamp_to_viewport(offset, &ctx);
        }

        let x_property = if options.x_by_right {
            StyleProperty::Right
        } else {
            StyleProperty::Left
        };
        let y_property = if options.y_by_bottom {
            StyleProperty::Bottom
        } else {
            StyleProperty::Top
        };

        host.set_style(target, x_property, &css_px(offset.x));
        host.set_style(target, y_property, &css_px(offset.y));
        host.set_style(target, StyleProperty::Cursor, &options.cursor);

        trace!(?handle, ?offset, "target moved");
        EventResponse::CAPTURE
    }
}
