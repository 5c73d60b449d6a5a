//! Replay recorded drag traces against the headless host.
//!
//! A trace describes a viewport, the target's starting layout, the handle's
//! options and a sequence of pointer events. Replaying it yields the target's
//! final inline styles, which makes drag behavior easy to reproduce outside a
//! real UI.

use crate::controller::DragController;
use crate::constants::ATTR_MOVE_DISABLED;
use crate::error::{MoveError, MoveResult};
use crate::host::NodeId;
use crate::memory_host::MemoryHost;
use crate::options::MoveOptions;
use gpui::{point, px, size};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use tracing::debug;

/// Starting layout of the target, in pixels
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TargetLayout {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TraceEventKind {
    Down,
    Move,
    Up,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TraceEvent {
    pub kind: TraceEventKind,
    pub x: f32,
    pub y: f32,
    /// Event lands on a `move-disabled` control inside the handle
    #[serde(default)]
    pub disabled: bool,
}

/// A recorded drag session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trace {
    pub viewport: [f32; 2],
    pub target: TargetLayout,
    #[serde(default)]
    pub options: MoveOptions,
    pub events: Vec<TraceEvent>,
}

impl Trace {
    pub fn from_json(json: &str) -> MoveResult<Self> {
        let trace: Self = serde_json::from_str(json)?;
        trace.validate()?;
        Ok(trace)
    }

    pub fn from_path(path: impl AsRef<Path>) -> MoveResult<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    fn validate(&self) -> MoveResult<()> {
        let [width, height] = self.viewport;
        if !(width > 0.0 && height > 0.0) {
            return Err(MoveError::InvalidTrace(format!(
                "viewport must be positive, got {width}x{height}"
            )));
        }
        if !(self.target.width >= 0.0 && self.target.height >= 0.0) {
            return Err(MoveError::InvalidTrace(format!(
                "target size must not be negative, got {}x{}",
                self.target.width, self.target.height
            )));
        }
        Ok(())
    }
}

/// Final state after replaying a trace
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReplayOutcome {
    /// Target inline styles keyed by CSS name
    pub styles: BTreeMap<String, String>,
    /// Whether the trace ended mid-drag
    pub moving: bool,
}

/// Replay `trace` and report the target's final styles.
pub fn replay(trace: &Trace) -> MoveResult<ReplayOutcome> {
    trace.validate()?;

    let [width, height] = trace.viewport;
    let mut host = MemoryHost::new(size(px(width), px(height)));

    let target = host.create_element();
    host.set_layout(
        target,
        point(px(trace.target.left), px(trace.target.top)),
        size(px(trace.target.width), px(trace.target.height)),
    );
    let handle = host.append_child(target);
    let disabled_control = host.append_child(handle);
    host.set_attribute(disabled_control, ATTR_MOVE_DISABLED, "");

    let mut controller = DragController::new();
    controller.attach_with_options(&mut host, handle, resolve_to(target), trace.options.clone());
    controller.mount(&mut host, handle)?;

    for event in &trace.events {
        let under_pointer = if event.disabled { disabled_control } else { handle };
        let position = point(px(event.x), px(event.y));
        match event.kind {
            TraceEventKind::Down => host.pointer_down(&mut controller, under_pointer, position),
            TraceEventKind::Move => host.pointer_move(&mut controller, under_pointer, position),
            TraceEventKind::Up => host.pointer_up(&mut controller, under_pointer, position),
        };
    }
    debug!(events = trace.events.len(), "replayed trace");

    Ok(ReplayOutcome {
        styles: host
            .styles(target)
            .into_iter()
            .map(|(name, value)| (name.to_string(), value))
            .collect(),
        moving: controller.is_moving(handle),
    })
}

fn resolve_to(target: NodeId) -> crate::controller::TargetResolver {
    Box::new(move || Some(target))
}
