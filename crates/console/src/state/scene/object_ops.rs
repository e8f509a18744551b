//! Object mutation operations
//!
//! All operations are bounds-checked and fail without mutating. History is
//! not touched here: the command driver records a snapshot after each
//! accepted command (see `command::run_line`).

use shared::{canonical_color_key, SceneObject, ShapeKind};

use super::SceneState;
use crate::error::SceneError;

impl SceneState {
    /// Append a new object. The shape name is matched case-insensitively
    /// against the five recognized kinds.
    pub fn add(&mut self, shape_name: &str, position: [f32; 3]) -> Result<(), SceneError> {
        let shape = ShapeKind::parse(shape_name)
            .ok_or_else(|| SceneError::UnknownShape(shape_name.to_string()))?;
        self.scene.objects.push(SceneObject::new(shape, position));
        self.version += 1;
        Ok(())
    }

    /// Move an object by a delta
    pub fn translate(&mut self, index: usize, delta: [f32; 3]) -> Result<(), SceneError> {
        let obj = self.object_mut(index)?;
        obj.position[0] += delta[0];
        obj.position[1] += delta[1];
        obj.position[2] += delta[2];
        self.version += 1;
        Ok(())
    }

    /// Remove an object, shifting every later index down by one
    pub fn delete(&mut self, index: usize) -> Result<(), SceneError> {
        self.object(index)?;
        self.scene.objects.remove(index);
        self.version += 1;
        Ok(())
    }

    /// Set the rotation angle absolutely (degrees, about Y)
    pub fn rotate(&mut self, index: usize, angle: f32) -> Result<(), SceneError> {
        self.object_mut(index)?.angle = angle;
        self.version += 1;
        Ok(())
    }

    /// Set the scale absolutely
    pub fn scale(&mut self, index: usize, scale: [f32; 3]) -> Result<(), SceneError> {
        self.object_mut(index)?.scale = scale;
        self.version += 1;
        Ok(())
    }

    /// Uniform scale: one factor broadcast to all three axes
    pub fn scale_uniform(&mut self, index: usize, factor: f32) -> Result<(), SceneError> {
        self.scale(index, [factor, factor, factor])
    }

    /// Assign a color registry key to an object. The key is matched
    /// case-insensitively and stored in canonical form; unknown keys leave
    /// the object unchanged.
    pub fn recolor(&mut self, index: usize, key: &str) -> Result<(), SceneError> {
        self.object(index)?;
        let canonical =
            canonical_color_key(key).ok_or_else(|| SceneError::UnknownColor(key.to_string()))?;
        self.object_mut(index)?.color = canonical;
        self.version += 1;
        Ok(())
    }

    /// Remove every object
    pub fn clear(&mut self) {
        self.scene.objects.clear();
        self.version += 1;
    }

    /// Replace the background color name. Accepted unconditionally — there
    /// is no validation against the color table; unknown names render white.
    pub fn set_background(&mut self, name: &str) {
        self.scene.background = name.to_lowercase();
        self.version += 1;
    }
}
