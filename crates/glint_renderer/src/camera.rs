//! Pinhole camera for ray generation.

use glint_math::{Ray, Vec3};

/// Pinhole camera with a fixed orthonormal basis and no depth of field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    position: Vec3,
    right: Vec3,
    up: Vec3,
    /// Points backwards, out of the screen; rays travel along `-forward`.
    forward: Vec3,
    focal_length: f32,
}

impl Camera {
    /// Create a new camera from its position, basis and focal length.
    pub fn new(position: Vec3, right: Vec3, up: Vec3, forward: Vec3, focal_length: f32) -> Self {
        Self {
            position,
            right,
            up,
            forward,
            focal_length,
        }
    }

    /// Camera position.
    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Generate the ray through device coordinates `(x, y)`, roughly in `[-1, 1]`.
    ///
    /// `+y` is up on screen.
    pub fn ray(&self, x: f32, y: f32) -> Ray {
        let direction = self.right * x + self.up * y - self.forward * self.focal_length;
        Ray::new(self.position, direction.normalize())
    }
}

impl Default for Camera {
    /// Stock camera at `(0, -5, 1)` looking down `+Y` with `+Z` up.
    fn default() -> Self {
        Self::new(
            Vec3::new(0.0, -5.0, 1.0),
            Vec3::X,
            Vec3::Z,
            Vec3::NEG_Y,
            2.0,
        )
    }
}
