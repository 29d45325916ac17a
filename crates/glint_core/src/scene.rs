//! Scene types for the ray tracer.
//!
//! A scene is a camera position, background and ambient colors, a screen
//! scale, and flat lists of spheres and point lights. It is built once,
//! validated, and treated as read-only for the duration of a render pass.

use glint_math::Vec3;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Color type alias (linear RGB, values typically 0-1).
///
/// Channels are unconstrained while shading accumulates light; clamping
/// to [0, 1] happens only when a pixel is written.
pub type Color = Vec3;

/// Errors produced by scene validation.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("sphere {index} has invalid radius {radius} (must be positive and finite)")]
    InvalidRadius { index: usize, radius: f32 },

    #[error("camera lies on the image plane (z = 0), primary rays would degenerate")]
    CameraOnImagePlane,

    #[error("non-finite value in {0}")]
    NonFinite(&'static str),
}

/// A sphere with Phong material colors.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct Sphere {
    pub center: Vec3,
    pub radius: f32,
    pub diffuse: Color,
    pub specular: Color,
}

impl Sphere {
    /// Create a new sphere.
    pub fn new(center: Vec3, radius: f32, diffuse: Color, specular: Color) -> Self {
        Self {
            center,
            radius,
            diffuse,
            specular,
        }
    }
}

/// A point light source.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct PointLight {
    pub position: Vec3,
    pub color: Color,
}

impl PointLight {
    /// Create a new point light.
    pub fn new(position: Vec3, color: Color) -> Self {
        Self { position, color }
    }
}

/// A complete renderable scene.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Scene {
    /// Camera position in scene space
    pub camera: Vec3,

    /// Color for pixels whose primary ray escapes the scene
    pub background: Color,

    /// Ambient light term applied to every hit point
    pub ambient: Color,

    /// Screen scale: maps integer pixel coordinates to scene-space units
    pub scale: f32,

    /// Spheres, scanned in order by the intersection engine
    pub spheres: Vec<Sphere>,

    /// Point lights, accumulated in order by the shading engine
    pub lights: Vec<PointLight>,
}

impl Scene {
    /// Create an empty scene with no spheres or lights.
    pub fn new(camera: Vec3, background: Color, ambient: Color, scale: f32) -> Self {
        Self {
            camera,
            background,
            ambient,
            scale,
            spheres: Vec::new(),
            lights: Vec::new(),
        }
    }

    /// Add a sphere to the scene.
    pub fn add_sphere(&mut self, sphere: Sphere) {
        self.spheres.push(sphere);
    }

    /// Add a point light to the scene.
    pub fn add_light(&mut self, light: PointLight) {
        self.lights.push(light);
    }

    /// Get sphere count.
    pub fn sphere_count(&self) -> usize {
        self.spheres.len()
    }

    /// Get light count.
    pub fn light_count(&self) -> usize {
        self.lights.len()
    }

    /// Check the scene's geometric preconditions.
    ///
    /// Rejects non-positive or non-finite sphere radii, non-finite
    /// placements, and a camera sitting on the z = 0 pixel plane. The
    /// render pass itself performs no runtime checks, so invalid scenes
    /// must be caught here rather than mid-frame.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !self.camera.is_finite() {
            return Err(ValidationError::NonFinite("camera position"));
        }
        if !self.background.is_finite() || !self.ambient.is_finite() {
            return Err(ValidationError::NonFinite("background or ambient color"));
        }
        if !self.scale.is_finite() {
            return Err(ValidationError::NonFinite("screen scale"));
        }
        if self.camera.z == 0.0 {
            return Err(ValidationError::CameraOnImagePlane);
        }

        for (index, sphere) in self.spheres.iter().enumerate() {
            if !sphere.center.is_finite()
                || !sphere.diffuse.is_finite()
                || !sphere.specular.is_finite()
            {
                return Err(ValidationError::NonFinite("sphere"));
            }
            if !sphere.radius.is_finite() || sphere.radius <= 0.0 {
                return Err(ValidationError::InvalidRadius {
                    index,
                    radius: sphere.radius,
                });
            }
        }

        for light in &self.lights {
            if !light.position.is_finite() || !light.color.is_finite() {
                return Err(ValidationError::NonFinite("light"));
            }
        }

        Ok(())
    }

    /// Built-in demo scene: three spheres, two lights.
    ///
    /// Lets the renderer run without a scene description file.
    pub fn demo() -> Self {
        let mut scene = Scene::new(
            Vec3::new(0.0, 0.0, -10.0),
            Color::new(0.05, 0.06, 0.08),
            Color::new(0.15, 0.15, 0.15),
            0.01,
        );

        scene.add_sphere(Sphere::new(
            Vec3::new(0.0, 0.0, 0.0),
            1.0,
            Color::new(0.8, 0.15, 0.1),
            Color::new(1.0, 1.0, 1.0),
        ));
        scene.add_sphere(Sphere::new(
            Vec3::new(-1.8, -0.4, 1.5),
            0.9,
            Color::new(0.1, 0.45, 0.8),
            Color::new(0.9, 0.9, 0.9),
        ));
        scene.add_sphere(Sphere::new(
            Vec3::new(1.7, 0.6, 2.0),
            1.1,
            Color::new(0.15, 0.7, 0.25),
            Color::new(0.8, 0.8, 0.8),
        ));

        scene.add_light(PointLight::new(
            Vec3::new(4.0, 5.0, -6.0),
            Color::new(0.9, 0.9, 0.9),
        ));
        scene.add_light(PointLight::new(
            Vec3::new(-5.0, 3.0, -4.0),
            Color::new(0.35, 0.35, 0.4),
        ));

        scene
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scene_construction() {
        let mut scene = Scene::new(
            Vec3::new(0.0, 0.0, -10.0),
            Color::ZERO,
            Color::splat(0.1),
            0.01,
        );

        scene.add_sphere(Sphere::new(Vec3::ZERO, 1.0, Color::ONE, Color::ONE));
        scene.add_light(PointLight::new(Vec3::new(0.0, 5.0, -5.0), Color::ONE));

        assert_eq!(scene.sphere_count(), 1);
        assert_eq!(scene.light_count(), 1);
        assert!(scene.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_radius() {
        let mut scene = Scene::demo();
        scene.spheres[1].radius = -2.0;

        let err = scene.validate().unwrap_err();
        assert!(matches!(
            err,
            ValidationError::InvalidRadius { index: 1, .. }
        ));
    }

    #[test]
    fn test_validate_rejects_flat_camera() {
        let mut scene = Scene::demo();
        scene.camera.z = 0.0;

        assert!(matches!(
            scene.validate().unwrap_err(),
            ValidationError::CameraOnImagePlane
        ));
    }

    #[test]
    fn test_validate_rejects_non_finite() {
        let mut scene = Scene::demo();
        scene.lights[0].position.y = f32::NAN;

        assert!(matches!(
            scene.validate().unwrap_err(),
            ValidationError::NonFinite("light")
        ));
    }

    #[test]
    fn test_demo_scene_is_valid() {
        assert!(Scene::demo().validate().is_ok());
    }
}
