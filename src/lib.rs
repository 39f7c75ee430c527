//! Minimal software 3D rasterizer
//!
//! A software 3D-to-2D pipeline:
//! - Hand-rolled vector and 4x4 matrix math (incl. Gauss-Jordan inversion)
//! - Position/rotation/scale transforms and a perspective camera
//! - Line and filled-triangle rasterization into a caller-owned RGBA buffer
//!
//! The pixel buffer is owned by the windowing layer; every rasterizer call
//! takes the buffer plus its current dimensions. See `src/main.rs` for a
//! demo that drives the whole pipeline.

pub mod geometry;
pub mod math;
pub mod raster;
pub mod scene;

pub use geometry::{Camera, Transform};
pub use math::{Mat4, MathError, Vec3};
pub use raster::Color;
