//! Phong shading with shadow-ray occlusion.

use glint_core::{Color, Scene};
use glint_math::{Ray, Vec3};

use crate::intersect::{hit_scene, SurfaceHit};

/// Fixed Phong specular exponent.
pub const SHININESS: f32 = 100.0;

/// True when any sphere lies along the ray from `point` toward the
/// light. The distance to the light is ignored: an occluder beyond the
/// light still blocks it.
fn occluded(point: Vec3, toward_light: Vec3, scene: &Scene) -> bool {
    hit_scene(&Ray::new(point, toward_light), scene).is_some()
}

/// Evaluate the Phong illumination model at an intersection.
///
/// Starts from the ambient term, then for each light in list order adds
/// a diffuse and a specular contribution unless a shadow ray reports the
/// light occluded. Accumulation is additive and unbounded; clamping to
/// [0, 1] is deferred to the pixel write.
pub fn shade(hit: &SurfaceHit, scene: &Scene) -> Color {
    let view = (scene.camera - hit.point).normalize();
    let mut color = hit.diffuse * scene.ambient;

    for light in &scene.lights {
        let toward_light = (light.position - hit.point).normalize();
        if occluded(hit.point, toward_light, scene) {
            continue;
        }

        // Diffuse: Lambertian falloff against the surface normal.
        let n_dot_l = hit.normal.dot(toward_light);
        color += hit.diffuse * light.color * n_dot_l.max(0.0);

        // Specular: mirror the light direction about the normal and
        // raise its alignment with the view direction to the shininess.
        let reflected = (2.0 * n_dot_l * hit.normal - toward_light).normalize();
        let highlight = view.dot(reflected).max(0.0).powf(SHININESS);
        color += hit.specular * light.color * highlight;
    }

    color
}
