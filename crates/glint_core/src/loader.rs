//! Scene description loading.
//!
//! Scenes are described in JSON mirroring the [`Scene`] fields, with
//! vectors and colors written as three-element arrays:
//!
//! ```json
//! {
//!   "camera": [0.0, 0.0, -10.0],
//!   "background": [0.05, 0.06, 0.08],
//!   "ambient": [0.15, 0.15, 0.15],
//!   "scale": 0.01,
//!   "spheres": [
//!     { "center": [0, 0, 0], "radius": 1.0,
//!       "diffuse": [0.8, 0.15, 0.1], "specular": [1, 1, 1] }
//!   ],
//!   "lights": [
//!     { "position": [4, 5, -6], "color": [0.9, 0.9, 0.9] }
//!   ]
//! }
//! ```
//!
//! Every loaded scene is validated before it is returned, so the render
//! pass never sees a sphere with a non-positive radius or a camera that
//! would produce a degenerate primary ray.

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::scene::{Scene, ValidationError};

/// Errors that can occur while loading a scene description.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid scene: {0}")]
    Invalid(#[from] ValidationError),
}

/// Load a scene description from a JSON file.
pub fn load_scene(path: impl AsRef<Path>) -> Result<Scene, LoadError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path)?;
    let scene = load_scene_from_str(&text)?;

    log::info!(
        "loaded scene from {}: {} spheres, {} lights",
        path.display(),
        scene.sphere_count(),
        scene.light_count()
    );

    Ok(scene)
}

/// Parse and validate a scene description from a JSON string.
pub fn load_scene_from_str(text: &str) -> Result<Scene, LoadError> {
    let scene: Scene = serde_json::from_str(text)?;
    scene.validate()?;
    Ok(scene)
}

#[cfg(test)]
mod tests {
    use super::*;
    use glint_math::Vec3;

    const MINIMAL: &str = r#"{
        "camera": [0.0, 0.0, -10.0],
        "background": [0.0, 0.0, 0.0],
        "ambient": [0.2, 0.2, 0.2],
        "scale": 0.01,
        "spheres": [
            { "center": [0, 0, 0], "radius": 1.0,
              "diffuse": [0.8, 0.1, 0.1], "specular": [1, 1, 1] }
        ],
        "lights": [
            { "position": [0, 5, -5], "color": [1, 1, 1] }
        ]
    }"#;

    #[test]
    fn test_load_minimal_scene() {
        let scene = load_scene_from_str(MINIMAL).unwrap();

        assert_eq!(scene.camera, Vec3::new(0.0, 0.0, -10.0));
        assert_eq!(scene.scale, 0.01);
        assert_eq!(scene.sphere_count(), 1);
        assert_eq!(scene.light_count(), 1);
        assert_eq!(scene.spheres[0].radius, 1.0);
        assert_eq!(scene.lights[0].position, Vec3::new(0.0, 5.0, -5.0));
    }

    #[test]
    fn test_load_rejects_invalid_radius() {
        let text = MINIMAL.replace("\"radius\": 1.0", "\"radius\": 0.0");
        let err = load_scene_from_str(&text).unwrap_err();

        assert!(matches!(
            err,
            LoadError::Invalid(ValidationError::InvalidRadius { index: 0, .. })
        ));
    }

    #[test]
    fn test_load_rejects_malformed_json() {
        assert!(matches!(
            load_scene_from_str("{ not json").unwrap_err(),
            LoadError::Json(_)
        ));
    }

    #[test]
    fn test_scene_roundtrip() {
        let scene = Scene::demo();
        let text = serde_json::to_string(&scene).unwrap();
        let loaded = load_scene_from_str(&text).unwrap();

        assert_eq!(loaded.sphere_count(), scene.sphere_count());
        assert_eq!(loaded.light_count(), scene.light_count());
        assert_eq!(loaded.spheres[0].center, scene.spheres[0].center);
        assert_eq!(loaded.background, scene.background);
    }
}
