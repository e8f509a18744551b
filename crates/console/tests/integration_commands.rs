//! Integration tests for the command pipeline: text line -> parse ->
//! execute -> record-and-persist cycle.

use scene_console_lib::error::{CommandError, SceneError};
use scene_console_lib::harness::EditorHarness;
use shared::ShapeKind;

#[test]
fn add_cube_creates_defaulted_object() {
    let mut h = EditorHarness::new();
    h.run("add cube 1 2 3").unwrap();

    assert_eq!(h.object_count(), 1);
    let obj = h.object(0).unwrap();
    assert_eq!(obj.shape, ShapeKind::Cube);
    assert_eq!(obj.position, [1.0, 2.0, 3.0]);
    assert_eq!(obj.scale, [1.0, 1.0, 1.0]);
    assert_eq!(obj.angle, 0.0);
    assert_eq!(obj.color, "redCube");
}

#[test]
fn shape_names_are_case_insensitive() {
    let mut h = EditorHarness::new();
    h.run("add SPHERE 0 1 0").unwrap();
    assert_eq!(h.object(0).unwrap().shape, ShapeKind::Sphere);
}

#[test]
fn unknown_shape_is_rejected_without_mutation() {
    let mut h = EditorHarness::new();
    let depth = h.history_depth();

    let err = h.run("add teapot 0 0 0").unwrap_err();
    assert!(matches!(
        err,
        CommandError::Scene(SceneError::UnknownShape(_))
    ));
    assert_eq!(h.object_count(), 0);
    assert_eq!(h.history_depth(), depth);
}

#[test]
fn move_applies_delta() {
    let mut h = EditorHarness::new();
    h.run_all(&["add cone 1 1 1", "move 0 0.5 -1 2"]).unwrap();
    assert_eq!(h.object(0).unwrap().position, [1.5, 0.0, 3.0]);
}

#[test]
fn rotate_and_scale_are_absolute() {
    let mut h = EditorHarness::new();
    h.run_all(&["add cube 0 0 0", "rotate 0 45", "rotate 0 30"])
        .unwrap();
    assert_eq!(h.object(0).unwrap().angle, 30.0);

    h.run_all(&["scale 0 2 3 4", "scale 0 5 5 5"]).unwrap();
    assert_eq!(h.object(0).unwrap().scale, [5.0, 5.0, 5.0]);
}

#[test]
fn uscale_broadcasts_one_factor() {
    let mut h = EditorHarness::new();
    h.run_all(&["add torus 0 0 0", "uscale 0 2.5"]).unwrap();
    assert_eq!(h.object(0).unwrap().scale, [2.5, 2.5, 2.5]);
}

#[test]
fn delete_renumbers_later_objects() {
    let mut h = EditorHarness::new();
    h.run_all(&[
        "add cube 0 0 0",
        "add cone 1 0 0",
        "add sphere 2 0 0",
        "delete 1",
    ])
    .unwrap();

    assert_eq!(h.object_count(), 2);
    assert_eq!(h.object(0).unwrap().shape, ShapeKind::Cube);
    // The sphere moved from index 2 to index 1.
    assert_eq!(h.object(1).unwrap().shape, ShapeKind::Sphere);

    h.run("delete 2").unwrap_err();
    assert_eq!(h.object_count(), 2);
}

#[test]
fn color_command_validates_against_registry() {
    let mut h = EditorHarness::new();
    h.run("add cube 0 0 0").unwrap();

    let outcome = h.run("color 0 blueCube").unwrap();
    assert!(outcome.message.unwrap().contains("blueCube"));
    assert_eq!(h.object(0).unwrap().color, "blueCube");

    let err = h.run("color 0 tealCube").unwrap_err();
    assert!(matches!(
        err,
        CommandError::Scene(SceneError::UnknownColor(_))
    ));
    assert_eq!(h.object(0).unwrap().color, "blueCube");
}

#[test]
fn background_accepts_unknown_names_and_renders_white() {
    let mut h = EditorHarness::new();
    h.run("background teal").unwrap();
    assert_eq!(h.background(), "teal");
    assert_eq!(h.frame().background, [1.0, 1.0, 1.0]);
}

#[test]
fn invalid_command_leaves_everything_untouched() {
    let mut h = EditorHarness::new();
    h.run("add cube 0 0 0").unwrap();
    let depth = h.history_depth();

    for line in ["frobnicate", "add cube 1 2", "move zero 1 2 3", "delete -1"] {
        let err = h.run(line).unwrap_err();
        assert!(matches!(err, CommandError::InvalidCommand(_)), "{line}");
    }
    assert_eq!(h.object_count(), 1);
    assert_eq!(h.history_depth(), depth);
}

#[test]
fn clear_canvas_empties_the_scene() {
    let mut h = EditorHarness::new();
    h.run_all(&["add cube 0 0 0", "add cone 1 0 0", "clear_canvas"])
        .unwrap();
    assert_eq!(h.object_count(), 0);
}

#[test]
fn load_without_configured_save_file_is_a_noop() {
    let mut h = EditorHarness::new();
    h.run("add cube 0 0 0").unwrap();
    let outcome = h.run("load").unwrap();
    assert!(outcome.message.unwrap().contains("No save file"));
    assert_eq!(h.object_count(), 1);
}
