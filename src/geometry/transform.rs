//! Position, rotation and scale composed into a single matrix

use crate::math::{Mat4, Vec3};
use serde::{Deserialize, Serialize};

/// Placement of an object: position, axis rotation angles (radians, applied
/// X then Y then Z) and per-axis scale. Pure value type; the matrix is
/// derived on demand.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    pub position: Vec3,
    pub rotation: Vec3,
    pub scaling: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Vec3::ZERO,
            scaling: Vec3::ONE,
        }
    }
}

impl Transform {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_position(position: Vec3) -> Self {
        Self {
            position,
            ..Self::default()
        }
    }

    /// Compose into one matrix. The order is load-bearing: scale and
    /// rotation pivot about the local origin, then the result is translated.
    pub fn matrix(&self) -> Mat4 {
        Mat4::scale(self.scaling.x, self.scaling.y, self.scaling.z)
            * Mat4::rotate_x(self.rotation.x)
            * Mat4::rotate_y(self.rotation.y)
            * Mat4::rotate_z(self.rotation.z)
            * Mat4::translate(self.position.x, self.position.y, self.position.z)
    }
}
