//! Scene-side geometry: transforms and the camera

mod camera;
mod transform;

pub use camera::*;
pub use transform::*;
