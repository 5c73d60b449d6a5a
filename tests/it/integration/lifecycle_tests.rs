//! Attach, mount and detach.

use crate::helpers::TestSceneBuilder;
use gpui::{point, px, size};
use movable::{
    DragController, EventKind, ListenerTarget, MemoryHost, MoveError, MoveOptions, NodeId, PointerEvent,
    StyleProperty,
};

#[test]
fn test_missing_expression_is_noop() {
    let mut scene = TestSceneBuilder::new().without_expression().build_unmounted();
    assert!(!scene.controller.is_attached(scene.handle));
    assert_eq!(scene.host.listener_count(), 0);

    let err = scene.controller.mount(&mut scene.host, scene.handle).unwrap_err();
    assert!(matches!(err, MoveError::UnknownHandle(h) if h == scene.handle));
}

#[test]
fn test_attach_defers_until_mount() {
    let mut scene = TestSceneBuilder::new().build_unmounted();
    assert!(scene.controller.is_attached(scene.handle));
    assert!(!scene.controller.is_mounted(scene.handle));
    assert_eq!(scene.style(StyleProperty::Position), None);
    assert_eq!(scene.host.listener_count(), 0);

    // Not armed yet, so pressing does nothing
    scene.down(150.0, 80.0);
    assert!(!scene.is_moving());

    scene.controller.mount(&mut scene.host, scene.handle).unwrap();
    assert!(scene.controller.is_mounted(scene.handle));
    assert_eq!(scene.controller.target_of(scene.handle), Some(scene.target));
    assert_eq!(scene.style(StyleProperty::Position), Some("fixed"));
    assert!(scene.host.has_listener(
        ListenerTarget::Element(scene.handle),
        EventKind::MouseDown,
        scene.handle
    ));
}

#[test]
fn test_mount_twice_is_noop() {
    let mut scene = TestSceneBuilder::new().build();
    scene.controller.mount(&mut scene.host, scene.handle).unwrap();
    assert_eq!(scene.host.listener_count(), 1);
}

#[test]
fn test_unresolved_target_installs_nothing() {
    let mut scene = TestSceneBuilder::new().with_missing_target().build_unmounted();
    let err = scene.controller.mount(&mut scene.host, scene.handle).unwrap_err();
    assert!(matches!(err, MoveError::TargetMissing(h) if h == scene.handle));
    assert_eq!(scene.host.listener_count(), 0);
    assert_eq!(scene.style(StyleProperty::Position), None);

    // The accessor is consumed; retrying reports the same failure
    let err = scene.controller.mount(&mut scene.host, scene.handle).unwrap_err();
    assert!(matches!(err, MoveError::TargetMissing(_)));
}

#[test]
fn test_detach_removes_mouse_down() {
    let mut scene = TestSceneBuilder::new().build();
    scene.controller.detach(&mut scene.host, scene.handle);

    assert!(!scene.controller.is_attached(scene.handle));
    assert_eq!(scene.host.listener_count(), 0);

    scene.down(150.0, 80.0);
    assert!(!scene.is_moving());
    assert_eq!(scene.document_listeners(), 0);
}

#[test]
fn test_detach_mid_drag_disarms_document_listeners() {
    let mut scene = TestSceneBuilder::new().with_attribute("move-cursor", "move").build();
    scene.down(150.0, 80.0);
    scene.move_to(160.0, 90.0);
    assert_eq!(scene.document_listeners(), 2);

    scene.controller.detach(&mut scene.host, scene.handle);
    assert_eq!(scene.host.listener_count(), 0);
    assert_eq!(scene.style(StyleProperty::Cursor), None);

    scene.move_to(300.0, 300.0);
    assert_eq!(scene.style(StyleProperty::Left), Some("110px"));
}

#[test]
fn test_detach_unknown_handle_is_noop() {
    let mut scene = TestSceneBuilder::new().build();
    scene.controller.detach(&mut scene.host, NodeId(999));
    assert_eq!(scene.controller.attached_count(), 1);
    assert_eq!(scene.host.listener_count(), 1);
}

#[test]
fn test_events_for_unknown_handle_are_ignored() {
    let mut scene = TestSceneBuilder::new().build();
    let event = PointerEvent::new(point(px(10.0), px(10.0)), NodeId(999));
    scene.controller.handle_mouse_down(&mut scene.host, NodeId(999), &event);
    scene.controller.handle_mouse_up(&mut scene.host, NodeId(999), &event);
    assert_eq!(scene.host.listener_count(), 1);
}

#[test]
fn test_reattach_replaces_state() {
    let mut scene = TestSceneBuilder::new().build();
    scene.down(150.0, 80.0);

    let target = scene.target;
    scene.controller.attach_with_options(
        &mut scene.host,
        scene.handle,
        Box::new(move || Some(target)),
        MoveOptions::default().with_move_out(true),
    );
    assert!(!scene.is_moving());
    assert_eq!(scene.host.listener_count(), 0);
    assert!(scene.controller.options_of(scene.handle).unwrap().move_out);

    scene.controller.mount(&mut scene.host, scene.handle).unwrap();
    scene.down(150.0, 80.0);
    scene.move_to(-50.0, -50.0);
    assert_eq!(scene.style(StyleProperty::Left), Some("-100px"));
}

#[test]
fn test_independent_handles() {
    let mut host = MemoryHost::new(size(px(800.0), px(600.0)));
    let mut controller = DragController::new();

    let first_target = host.create_element();
    host.set_layout(first_target, point(px(0.0), px(0.0)), size(px(100.0), px(100.0)));
    let first = host.append_child(first_target);

    let second_target = host.create_element();
    host.set_layout(second_target, point(px(400.0), px(400.0)), size(px(100.0), px(100.0)));
    let second = host.append_child(second_target);

    controller.attach(&mut host, first, Some(Box::new(move || Some(first_target))));
    controller.attach(&mut host, second, Some(Box::new(move || Some(second_target))));
    controller.mount(&mut host, first).unwrap();
    controller.mount(&mut host, second).unwrap();
    assert_eq!(controller.attached_count(), 2);

    host.pointer_down(&mut controller, first, point(px(10.0), px(10.0)));
    assert!(controller.is_moving(first));
    assert!(!controller.is_moving(second));

    host.pointer_move(&mut controller, first, point(px(60.0), px(60.0)));
    host.pointer_up(&mut controller, first, point(px(60.0), px(60.0)));

    assert_eq!(host.style(first_target, StyleProperty::Left), Some("50px"));
    assert_eq!(host.style(second_target, StyleProperty::Left), None);
    assert_eq!(host.document_listener_count(first), 0);
}
