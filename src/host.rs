//! The host environment the directive runs inside.
//!
//! The controller never owns elements. It refers to them by [`NodeId`] and
//! asks the host for attributes, layout measurements and style writes, and
//! tells the host which listeners it wants armed.

use gpui::{Pixels, Point, Size};

/// Identity of an element in the host's render tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub u64);

/// Mouse events the directive listens for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    MouseDown,
    MouseMove,
    MouseUp,
}

/// Where a listener is registered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListenerTarget {
    /// A specific element (the handle)
    Element(NodeId),
    /// The document, receiving events regardless of the element under the pointer
    Document,
}

/// Style properties the directive writes on the target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum StyleProperty {
    Position,
    Left,
    Right,
    Top,
    Bottom,
    Cursor,
}

impl StyleProperty {
    /// CSS name of the property
    pub fn css_name(self) -> &'static str {
        match self {
            Self::Position => "position",
            Self::Left => "left",
            Self::Right => "right",
            Self::Top => "top",
            Self::Bottom => "bottom",
            Self::Cursor => "cursor",
        }
    }
}

/// A mouse event as delivered by the host
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    /// Pointer position relative to the viewport (clientX/clientY)
    pub position: Point<Pixels>,
    /// Element directly under the pointer
    pub target: NodeId,
}

impl PointerEvent {
    pub fn new(position: Point<Pixels>, target: NodeId) -> Self {
        Self { position, target }
    }
}

/// What the host should do with an event after a handler ran
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EventResponse {
    pub prevent_default: bool,
    pub stop_propagation: bool,
}

impl EventResponse {
    /// Let the event continue untouched
    pub const PASS: Self = Self {
        prevent_default: false,
        stop_propagation: false,
    };

    /// Suppress the default action and stop propagation
    pub const CAPTURE: Self = Self {
        prevent_default: true,
        stop_propagation: true,
    };
}

/// Services the directive needs from its host.
///
/// Listener registration follows DOM semantics: adding an already registered
/// listener and removing an unregistered one are both no-ops.
pub trait Host {
    /// Whether `node` carries the attribute at all
    fn has_attribute(&self, node: NodeId, name: &str) -> bool;

    /// Attribute value, if present
    fn attribute(&self, node: NodeId, name: &str) -> Option<String>;

    /// Write an inline style property. An empty value resets it.
    fn set_style(&mut self, node: NodeId, property: StyleProperty, value: &str);

    /// The node's current left/top offset relative to its positioning container
    fn offset(&self, node: NodeId) -> Point<Pixels>;

    /// The node's inner (client) width and height
    fn client_size(&self, node: NodeId) -> Size<Pixels>;

    /// The viewport's client width and height
    fn viewport_size(&self) -> Size<Pixels>;

    /// Arm a listener for `kind` on `target` on behalf of `handle`
    fn add_listener(&mut self, target: ListenerTarget, kind: EventKind, handle: NodeId);

    /// Disarm a listener previously armed for `handle`
    fn remove_listener(&mut self, target: ListenerTarget, kind: EventKind, handle: NodeId);
}
