use serde::{Deserialize, Serialize};

pub mod color;

pub use color::{
    base_color, canonical_color_key, color_key, resolve_background, resolve_color, BASE_COLORS,
    WHITE,
};

/// Primitive shape category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    Cube,
    Cone,
    Torus,
    Cylinder,
    Sphere,
}

impl ShapeKind {
    pub const ALL: [ShapeKind; 5] = [
        ShapeKind::Cube,
        ShapeKind::Cone,
        ShapeKind::Torus,
        ShapeKind::Cylinder,
        ShapeKind::Sphere,
    ];

    /// Lowercase token used in commands and save files
    pub fn name(&self) -> &'static str {
        match self {
            ShapeKind::Cube => "cube",
            ShapeKind::Cone => "cone",
            ShapeKind::Torus => "torus",
            ShapeKind::Cylinder => "cylinder",
            ShapeKind::Sphere => "sphere",
        }
    }

    /// Capitalized suffix used in composite color registry keys ("redCube")
    pub fn key_suffix(&self) -> &'static str {
        match self {
            ShapeKind::Cube => "Cube",
            ShapeKind::Cone => "Cone",
            ShapeKind::Torus => "Torus",
            ShapeKind::Cylinder => "Cylinder",
            ShapeKind::Sphere => "Sphere",
        }
    }

    /// Parse a shape name, case-insensitively. `None` for unrecognized names.
    pub fn parse(name: &str) -> Option<ShapeKind> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(name))
    }
}

impl std::fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// One placed shape instance. Identity is the object's position in the
/// scene's ordered sequence; there is no stable id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneObject {
    pub shape: ShapeKind,
    pub position: [f32; 3],
    pub scale: [f32; 3],
    /// Rotation about the Y axis, degrees
    pub angle: f32,
    /// Composite color registry key, e.g. "redCube"
    pub color: String,
}

impl SceneObject {
    /// New object with unit scale, no rotation, and the per-shape default
    /// color ("red" + shape).
    pub fn new(shape: ShapeKind, position: [f32; 3]) -> Self {
        Self {
            shape,
            position,
            scale: [1.0, 1.0, 1.0],
            angle: 0.0,
            color: color_key("red", shape),
        }
    }
}

pub const DEFAULT_BACKGROUND: &str = "gray";

/// The ordered scene: insertion order is render order and the user-visible
/// index. Background is a free-form color name; unknown names resolve to
/// white at render time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    pub objects: Vec<SceneObject>,
    pub background: String,
}

impl Default for Scene {
    fn default() -> Self {
        Self {
            objects: Vec::new(),
            background: DEFAULT_BACKGROUND.to_string(),
        }
    }
}
