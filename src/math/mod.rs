//! Geometry math: 3-component vectors and 4x4 matrices

mod mat4;
mod vec3;

pub use mat4::*;
pub use vec3::*;
