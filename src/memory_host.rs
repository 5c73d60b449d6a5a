//! A headless, in-memory host.
//!
//! Models just enough of a render tree for the directive: element
//! attributes, parent links for bubbling, inline styles, a fixed-position
//! layout and a listener registry. Pointer events are routed to the
//! controller only through armed listeners, the way a browser would.

use crate::controller::DragController;
use crate::host::{EventKind, EventResponse, Host, ListenerTarget, NodeId, PointerEvent, StyleProperty};
use gpui::{Pixels, Point, Size, point, px, size};
use std::collections::{BTreeMap, HashMap, HashSet};

#[derive(Debug, Clone)]
struct MemoryElement {
    parent: Option<NodeId>,
    attributes: HashMap<String, String>,
    /// Layout offset used when no left/top (or right/bottom) style is set
    offset: Point<Pixels>,
    size: Size<Pixels>,
    styles: BTreeMap<StyleProperty, String>,
}

impl MemoryElement {
    fn new(parent: Option<NodeId>) -> Self {
        Self {
            parent,
            attributes: HashMap::new(),
            offset: point(px(0.0), px(0.0)),
            size: size(px(0.0), px(0.0)),
            styles: BTreeMap::new(),
        }
    }

    fn style_px(&self, property: StyleProperty) -> Option<f32> {
        self.styles
            .get(&property)
            .and_then(|value| value.strip_suffix("px"))
            .and_then(|value| value.parse().ok())
    }
}

type Listener = (ListenerTarget, EventKind, NodeId);

/// In-memory [`Host`] implementation.
#[derive(Debug, Clone)]
pub struct MemoryHost {
    viewport: Size<Pixels>,
    elements: HashMap<NodeId, MemoryElement>,
    listeners: HashSet<Listener>,
    next_id: u64,
}

impl MemoryHost {
    pub fn new(viewport: Size<Pixels>) -> Self {
        Self {
            viewport,
            elements: HashMap::new(),
            listeners: HashSet::new(),
            next_id: 1,
        }
    }

    /// Add a root element
    pub fn create_element(&mut self) -> NodeId {
        self.insert(None)
    }

    /// Add an element nested inside `parent`
    pub fn append_child(&mut self, parent: NodeId) -> NodeId {
        self.insert(Some(parent))
    }

    fn insert(&mut self, parent: Option<NodeId>) -> NodeId {
        let id = NodeId(self.next_id);
        self.next_id += 1;
        self.elements.insert(id, MemoryElement::new(parent));
        id
    }

    pub fn set_attribute(&mut self, node: NodeId, name: impl Into<String>, value: impl Into<String>) {
        if let Some(element) = self.elements.get_mut(&node) {
            element.attributes.insert(name.into(), value.into());
        }
    }

    /// Place `node` at `offset` with the given client size
    pub fn set_layout(&mut self, node: NodeId, offset: Point<Pixels>, client_size: Size<Pixels>) {
        if let Some(element) = self.elements.get_mut(&node) {
            element.offset = offset;
            element.size = client_size;
        }
    }

    pub fn set_viewport(&mut self, viewport: Size<Pixels>) {
        self.viewport = viewport;
    }

    pub fn style(&self, node: NodeId, property: StyleProperty) -> Option<&str> {
        self.elements
            .get(&node)
            .and_then(|element| element.styles.get(&property))
            .map(String::as_str)
    }

    /// Inline styles of `node` keyed by CSS name
    pub fn styles(&self, node: NodeId) -> BTreeMap<&'static str, String> {
        self.elements
            .get(&node)
            .map(|element| {
                element
                    .styles
                    .iter()
                    .map(|(property, value)| (property.css_name(), value.clone()))
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn has_listener(&self, target: ListenerTarget, kind: EventKind, handle: NodeId) -> bool {
        self.listeners.contains(&(target, kind, handle))
    }

    /// Number of document-level listeners armed for `handle`
    pub fn document_listener_count(&self, handle: NodeId) -> usize {
        self.listeners
            .iter()
            .filter(|(target, _, h)| *target == ListenerTarget::Document && *h == handle)
            .count()
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Press the button over `target`; bubbles to every ancestor with an
    /// armed mouse-down listener.
    pub fn pointer_down(&mut self, controller: &mut DragController, target: NodeId, position: Point<Pixels>) -> EventResponse {
        let event = PointerEvent::new(position, target);
        let mut response = EventResponse::PASS;
        for handle in self.ancestors(target) {
            let listener = (ListenerTarget::Element(handle), EventKind::MouseDown, handle);
            if self.listeners.contains(&listener) {
                response = merge(response, controller.dispatch(self, handle, EventKind::MouseDown, &event));
            }
        }
        response
    }

    /// Move the pointer over `target`; delivered to document listeners
    pub fn pointer_move(&mut self, controller: &mut DragController, target: NodeId, position: Point<Pixels>) -> EventResponse {
        self.dispatch_document(controller, EventKind::MouseMove, PointerEvent::new(position, target))
    }

    /// Release the button over `target`; delivered to document listeners
    pub fn pointer_up(&mut self, controller: &mut DragController, target: NodeId, position: Point<Pixels>) -> EventResponse {
        self.dispatch_document(controller, EventKind::MouseUp, PointerEvent::new(position, target))
    }

    fn dispatch_document(&mut self, controller: &mut DragController, kind: EventKind, event: PointerEvent) -> EventResponse {
        let mut handles: Vec<NodeId> = self
            .listeners
            .iter()
            .filter(|(target, k, _)| *target == ListenerTarget::Document && *k == kind)
            .map(|(_, _, handle)| *handle)
            .collect();
        handles.sort();

        let mut response = EventResponse::PASS;
        for handle in handles {
            // An earlier handler may have disarmed this one
            if self.has_listener(ListenerTarget::Document, kind, handle) {
                response = merge(response, controller.dispatch(self, handle, kind, &event));
            }
        }
        response
    }

    fn ancestors(&self, node: NodeId) -> Vec<NodeId> {
        let mut chain = Vec::new();
        let mut current = Some(node);
        while let Some(id) = current {
            let Some(element) = self.elements.get(&id) else {
                break;
            };
            chain.push(id);
            current = element.parent;
        }
        chain
    }
}

fn merge(a: EventResponse, b: EventResponse) -> EventResponse {
    EventResponse {
        prevent_default: a.prevent_default || b.prevent_default,
        stop_propagation: a.stop_propagation || b.stop_propagation,
    }
}

impl Host for MemoryHost {
    fn has_attribute(&self, node: NodeId, name: &str) -> bool {
        self.elements
            .get(&node)
            .is_some_and(|element| element.attributes.contains_key(name))
    }

    fn attribute(&self, node: NodeId, name: &str) -> Option<String> {
        self.elements
            .get(&node)
            .and_then(|element| element.attributes.get(name).cloned())
    }

    fn set_style(&mut self, node: NodeId, property: StyleProperty, value: &str) {
        let Some(element) = self.elements.get_mut(&node) else {
            return;
        };
        if value.is_empty() {
            element.styles.remove(&property);
        } else {
            element.styles.insert(property, value.to_string());
        }
    }

    /// Fixed-position layout: explicit left/top win, then right/bottom
    /// measured against the viewport, then the stored layout offset.
    fn offset(&self, node: NodeId) -> Point<Pixels> {
        let Some(element) = self.elements.get(&node) else {
            return point(px(0.0), px(0.0));
        };
        let width = f32::from(element.size.width);
        let height = f32::from(element.size.height);

        let x = element
            .style_px(StyleProperty::Left)
            .or_else(|| {
                element
                    .style_px(StyleProperty::Right)
                    .map(|right| f32::from(self.viewport.width) - right - width)
            })
            .unwrap_or_else(|| f32::from(element.offset.x));
        let y = element
            .style_px(StyleProperty::Top)
            .or_else(|| {
                element
                    .style_px(StyleProperty::Bottom)
                    .map(|bottom| f32::from(self.viewport.height) - bottom - height)
            })
            .unwrap_or_else(|| f32::from(element.offset.y));

        point(px(x), px(y))
    }

    fn client_size(&self, node: NodeId) -> Size<Pixels> {
        self.elements
            .get(&node)
            .map(|element| element.size)
            .unwrap_or_else(|| size(px(0.0), px(0.0)))
    }

    fn viewport_size(&self) -> Size<Pixels> {
        self.viewport
    }

    fn add_listener(&mut self, target: ListenerTarget, kind: EventKind, handle: NodeId) {
        self.listeners.insert((target, kind, handle));
    }

    fn remove_listener(&mut self, target: ListenerTarget, kind: EventKind, handle: NodeId) {
        self.listeners.remove(&(target, kind, handle));
    }
}
