//! Factory functions for test data.

use shared::{Scene, SceneObject, ShapeKind};

use crate::state::SceneState;

/// An object at a position with the per-shape defaults
pub fn object_at(shape: ShapeKind, position: [f32; 3]) -> SceneObject {
    SceneObject::new(shape, position)
}

/// A scene exercising a mix of shapes, transforms, and colors
pub fn sample_scene() -> Scene {
    let mut cube = object_at(ShapeKind::Cube, [1.0, 2.0, 3.0]);
    cube.angle = 45.0;

    let mut sphere = object_at(ShapeKind::Sphere, [-0.5, 0.0, 2.0]);
    sphere.scale = [2.0, 2.0, 2.0];
    sphere.color = "blueSphere".to_string();

    let mut torus = object_at(ShapeKind::Torus, [0.0, -1.25, 0.0]);
    torus.color = "magentaTorus".to_string();

    Scene {
        objects: vec![cube, sphere, torus],
        background: "black".to_string(),
    }
}

/// A `SceneState` holding cube/cone/sphere at distinct positions
pub fn three_object_state() -> SceneState {
    let mut state = SceneState::default();
    state.scene.objects = vec![
        object_at(ShapeKind::Cube, [0.0, 0.0, 0.0]),
        object_at(ShapeKind::Cone, [1.0, 0.0, 0.0]),
        object_at(ShapeKind::Sphere, [2.0, 0.0, 0.0]),
    ];
    state
}
