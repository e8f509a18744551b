//! Render-ready frame data
//!
//! The boundary toward the renderer: a `RenderFrame` is a self-contained
//! description of one frame — resolved colors, model transforms, camera
//! pose. It is built under the state lock, so a frame always reflects a
//! whole mutation or none of it.

use glam::Mat4;
use shared::{resolve_background, resolve_color, Scene, ShapeKind};

use crate::camera::{CameraPose, OrbitCamera};
use crate::state::EditorState;

/// One drawable object with its color already resolved
#[derive(Debug, Clone, PartialEq)]
pub struct RenderObject {
    pub shape: ShapeKind,
    pub position: [f32; 3],
    pub scale: [f32; 3],
    /// Rotation about Y, degrees
    pub angle: f32,
    pub color: [f32; 3],
}

impl RenderObject {
    /// Model matrix: translate * rotate_y * scale, matching draw order
    pub fn model_matrix(&self) -> Mat4 {
        Mat4::from_translation(self.position.into())
            * Mat4::from_rotation_y(self.angle.to_radians())
            * Mat4::from_scale(self.scale.into())
    }
}

/// Everything a renderer needs for one frame
#[derive(Debug, Clone, PartialEq)]
pub struct RenderFrame {
    pub background: [f32; 3],
    pub objects: Vec<RenderObject>,
    pub camera: CameraPose,
    /// Scene version the frame was built from; unchanged version means an
    /// identical frame
    pub version: u64,
}

pub fn build_frame(scene: &Scene, camera: &OrbitCamera, version: u64) -> RenderFrame {
    RenderFrame {
        background: resolve_background(&scene.background),
        objects: scene
            .objects
            .iter()
            .map(|obj| RenderObject {
                shape: obj.shape,
                position: obj.position,
                scale: obj.scale,
                angle: obj.angle,
                color: resolve_color(&obj.color),
            })
            .collect(),
        camera: camera.pose(),
        version,
    }
}

pub fn frame_of(state: &EditorState) -> RenderFrame {
    build_frame(&state.scene.scene, &state.camera, state.scene.version())
}
