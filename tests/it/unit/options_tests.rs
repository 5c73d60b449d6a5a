//! Options read from handle attributes and JSON.

use crate::helpers::TestSceneBuilder;
use movable::MoveOptions;

#[test]
fn test_no_attributes_gives_defaults() {
    let scene = TestSceneBuilder::new().build();
    let options = scene.controller.options_of(scene.handle).unwrap();
    assert_eq!(options, &MoveOptions::default());
}

#[test]
fn test_presence_flags() {
    let scene = TestSceneBuilder::new()
        .with_flag("move-out")
        .with_flag("move-x-right")
        .with_flag("move-y-bottom")
        .build();
    let options = scene.controller.options_of(scene.handle).unwrap();
    assert!(options.move_out);
    assert!(options.x_by_right);
    assert!(options.y_by_bottom);
}

#[test]
fn test_cursor_attribute() {
    let scene = TestSceneBuilder::new().with_attribute("move-cursor", "grabbing").build();
    assert_eq!(scene.controller.options_of(scene.handle).unwrap().cursor, "grabbing");
}

#[test]
fn test_empty_cursor_attribute_falls_back() {
    let scene = TestSceneBuilder::new().with_attribute("move-cursor", "").build();
    assert_eq!(scene.controller.options_of(scene.handle).unwrap().cursor, "cursor");
}

#[test]
fn test_builder_methods() {
    let options = MoveOptions::default()
        .with_move_out(true)
        .with_x_by_right(true)
        .with_cursor("move");
    assert!(options.move_out);
    assert!(options.x_by_right);
    assert!(!options.y_by_bottom);
    assert_eq!(options.cursor, "move");
}

#[test]
fn snapshot_options_json() {
    let options = MoveOptions::default().with_move_out(true).with_cursor("move");
    insta::assert_json_snapshot!(options, @r###"
    {
      "move_out": true,
      "x_by_right": false,
      "y_by_bottom": false,
      "cursor": "move"
    }
    "###);
}
