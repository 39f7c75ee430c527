//! Demo scene description
//!
//! A RON file describing what the demo draws: camera parameters, the model
//! transform and the palette. A missing or malformed file falls back to the
//! built-in scene.

use crate::geometry::{Camera, Transform};
use crate::math::Vec3;
use crate::raster::Color;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Error type for scene loading
#[derive(Debug)]
pub enum SceneError {
    IoError(std::io::Error),
    ParseError(ron::error::SpannedError),
}

impl From<std::io::Error> for SceneError {
    fn from(e: std::io::Error) -> Self {
        SceneError::IoError(e)
    }
}

impl From<ron::error::SpannedError> for SceneError {
    fn from(e: ron::error::SpannedError) -> Self {
        SceneError::ParseError(e)
    }
}

impl std::fmt::Display for SceneError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SceneError::IoError(e) => write!(f, "IO error: {}", e),
            SceneError::ParseError(e) => write!(f, "Parse error: {}", e),
        }
    }
}

impl std::error::Error for SceneError {}

/// Everything the demo needs to draw a frame
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scene {
    pub camera: Camera,
    pub model: Transform,
    pub background: Color,
    pub grid_color: Color,
    pub wire_color: Color,
    pub fill_color: Color,
    /// Spin around y, radians per second
    pub spin_speed: f32,
}

impl Default for Scene {
    fn default() -> Self {
        Self {
            camera: Camera::default(),
            model: Transform::with_position(Vec3::new(0.0, 0.0, -6.0)),
            background: Color::new(24, 24, 28),
            grid_color: Color::new(38, 38, 44),
            wire_color: Color::WHITE,
            fill_color: Color::new(90, 120, 200),
            spin_speed: 0.9,
        }
    }
}

impl Scene {
    /// Load a scene from a RON file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Scene, SceneError> {
        let contents = fs::read_to_string(path)?;
        Ok(ron::from_str(&contents)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ron_round_trip() {
        let scene = Scene::default();
        let text = ron::to_string(&scene).unwrap();
        let parsed: Scene = ron::from_str(&text).unwrap();
        assert_eq!(parsed.background, scene.background);
        assert_eq!(parsed.camera.fov, scene.camera.fov);
        assert_eq!(parsed.model.position, scene.model.position);
    }

    #[test]
    fn test_parse_literal_scene() {
        let text = r#"(
            camera: (fov: 75.0, near: 0.1, far: 50.0, transform: (
                position: (x: 0.0, y: 1.0, z: 0.0),
                rotation: (x: 0.0, y: 0.0, z: 0.0),
                scaling: (x: 1.0, y: 1.0, z: 1.0),
            )),
            model: (
                position: (x: 0.0, y: 0.0, z: -4.0),
                rotation: (x: 0.0, y: 0.0, z: 0.0),
                scaling: (x: 1.0, y: 1.0, z: 1.0),
            ),
            background: (r: 0, g: 0, b: 0, a: 255),
            grid_color: (r: 30, g: 30, b: 30, a: 255),
            wire_color: (r: 255, g: 255, b: 255, a: 255),
            fill_color: (r: 200, g: 60, b: 60, a: 255),
            spin_speed: 1.5,
        )"#;
        let scene: Scene = ron::from_str(text).unwrap();
        assert_eq!(scene.camera.fov, 75.0);
        assert_eq!(scene.model.position.z, -4.0);
    }

    #[test]
    fn test_missing_file_is_an_error() {
        assert!(matches!(
            Scene::load("does-not-exist.ron"),
            Err(SceneError::IoError(_))
        ));
    }
}
