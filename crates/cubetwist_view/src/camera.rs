//! Orbit camera controlled by mouse drag.

use cgmath::{Deg, Matrix4};

/// Camera orientation as a pitch/yaw pair, in degrees.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct OrbitCamera {
    /// Rotation about the screen-horizontal axis.
    pub pitch: f32,
    /// Rotation about the screen-vertical axis.
    pub yaw: f32,
}

impl Default for OrbitCamera {
    fn default() -> Self {
        OrbitCamera {
            pitch: 30.0,
            yaw: 20.0,
        }
    }
}

impl OrbitCamera {
    /// Applies a mouse drag of `(dx, dy)` screen units. Angles are unclamped.
    pub fn drag(&mut self, dx: f32, dy: f32) {
        self.pitch -= dy;
        self.yaw += dx;
    }

    /// Returns the view matrix for the current orientation.
    pub fn view_matrix(self) -> Matrix4<f32> {
        Matrix4::from_angle_x(Deg(self.pitch)) * Matrix4::from_angle_y(Deg(self.yaw))
    }
}
