//! Perspective camera

use super::Transform;
use crate::math::{Mat4, MathError, Vec3};
use serde::{Deserialize, Serialize};

/// A camera is a transform plus projection parameters. `fov` is the full
/// field of view in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Camera {
    pub fov: f32,
    pub near: f32,
    pub far: f32,
    pub transform: Transform,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            fov: 90.0,
            near: 0.1,
            far: 100.0,
            transform: Transform::default(),
        }
    }
}

impl Camera {
    /// World-to-clip matrix: the inverse of the camera's transform maps
    /// world points into camera-local space, the projection maps
    /// camera-local space to clip space. Fails with
    /// [`MathError::SingularMatrix`] only for a degenerate transform
    /// (zero scale on some axis).
    pub fn view_projection(&self) -> Result<Mat4, MathError> {
        Ok(self.transform.matrix().inverse()? * Mat4::perspective(self.fov, self.near, self.far))
    }
}

/// Map an NDC coordinate to integer screen coordinates: x right, y down,
/// the NDC square [-1,1]^2 stretched over the full buffer.
pub fn ndc_to_screen(ndc: Vec3, width: usize, height: usize) -> (i32, i32) {
    let half_w = width as f32 * 0.5;
    let half_h = height as f32 * 0.5;
    ((ndc.x * half_w + half_w) as i32, (-ndc.y * half_h + half_h) as i32)
}
