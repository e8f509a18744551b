//! Orbit camera for the 3D viewport
//!
//! Spherical coordinates around the origin, in degrees. The pose is part
//! of the shared editor state; every `RenderFrame` embeds it for the
//! renderer.

use glam::{Mat4, Vec3};

pub const MIN_RADIUS: f32 = 2.0;
pub const MAX_RADIUS: f32 = 6.0;
pub const MIN_ELEVATION: f32 = 1.0;
pub const MAX_ELEVATION: f32 = 179.0;

/// Orbit camera state: azimuth/elevation/radius about a fixed origin target
#[derive(Debug, Clone, Copy)]
pub struct OrbitCamera {
    /// Horizontal angle, degrees, wraps to [0, 360)
    pub azimuth: f32,
    /// Vertical angle from the +Y pole, degrees, clamped to [1, 179]
    pub elevation: f32,
    /// Distance from the origin, clamped to [2, 6]
    pub radius: f32,
}

impl OrbitCamera {
    pub fn new() -> Self {
        Self {
            azimuth: 0.0,
            elevation: 90.0,
            radius: 3.0,
        }
    }

    pub fn orbit(&mut self, delta_deg: f32) {
        self.azimuth = (self.azimuth + delta_deg).rem_euclid(360.0);
    }

    pub fn elevate(&mut self, delta_deg: f32) {
        self.elevation = (self.elevation + delta_deg).clamp(MIN_ELEVATION, MAX_ELEVATION);
    }

    pub fn zoom(&mut self, delta: f32) {
        self.radius = (self.radius + delta).clamp(MIN_RADIUS, MAX_RADIUS);
    }

    /// Camera position in world space
    pub fn eye_position(&self) -> Vec3 {
        let az = self.azimuth.to_radians();
        let el = self.elevation.to_radians();
        Vec3::new(
            self.radius * az.sin() * el.sin(),
            self.radius * el.cos(),
            self.radius * az.cos() * el.sin(),
        )
    }

    pub fn pose(&self) -> CameraPose {
        CameraPose {
            eye: self.eye_position(),
            target: Vec3::ZERO,
            up: Vec3::Y,
        }
    }
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self::new()
    }
}

/// Render-ready camera pose
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraPose {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
}

impl CameraPose {
    /// View matrix (world -> camera)
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    /// Orthographic projection in a ±5 box, widened along the larger
    /// viewport axis so the scene never stretches.
    pub fn projection_matrix(&self, width: f32, height: f32) -> Mat4 {
        let (mut xratio, mut yratio) = (1.0, 1.0);
        if width <= height {
            yratio = height / width;
        } else {
            xratio = width / height;
        }
        Mat4::orthographic_rh_gl(
            -5.0 * xratio,
            5.0 * xratio,
            -5.0 * yratio,
            5.0 * yratio,
            -20.0,
            20.0,
        )
    }
}
