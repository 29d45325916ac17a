//! Ray-sphere and ray-scene intersection.

use glint_core::{Color, Scene, Sphere};
use glint_math::{Ray, Vec3};

/// Everything the shading engine needs to know about an intersection.
///
/// Returned by [`hit_scene`]; a miss is simply `None`, so no field ever
/// carries leftover data from a previous query.
#[derive(Debug, Clone, Copy)]
pub struct SurfaceHit {
    /// World-space intersection point
    pub point: Vec3,
    /// Unit surface normal at the intersection
    pub normal: Vec3,
    /// Diffuse color of the intersected sphere
    pub diffuse: Color,
    /// Specular color of the intersected sphere
    pub specular: Color,
}

/// Test a ray against a single sphere.
///
/// Solves the ray/sphere quadratic and evaluates the near root only.
/// Returns the distance along the ray to the intersection, or `None`
/// when the discriminant is negative or the near root lies behind the
/// ray origin. Because the far root is never tried, a ray starting
/// inside a sphere reports a miss on the way out.
pub fn hit_sphere(ray: &Ray, sphere: &Sphere) -> Option<f32> {
    let u = ray.origin() - sphere.center;
    let ud = u.dot(ray.direction());
    let c = u.length();

    let discriminant = ud * ud - c * c + sphere.radius * sphere.radius;
    if discriminant < 0.0 {
        return None;
    }

    let t = -ud - discriminant.sqrt();
    if t >= 0.0 {
        Some(t)
    } else {
        None
    }
}

/// Find the nearest sphere intersection along a ray.
///
/// Linearly scans every sphere in the scene; strict `<` on the distance
/// keeps the first sphere encountered when two intersections tie. Cost
/// is O(spheres) per call.
pub fn hit_scene(ray: &Ray, scene: &Scene) -> Option<SurfaceHit> {
    let mut nearest = f32::INFINITY;
    let mut winner: Option<&Sphere> = None;

    for sphere in &scene.spheres {
        if let Some(t) = hit_sphere(ray, sphere) {
            if t < nearest {
                nearest = t;
                winner = Some(sphere);
            }
        }
    }

    winner.map(|sphere| {
        let point = ray.at(nearest);
        SurfaceHit {
            point,
            normal: (point - sphere.center) / sphere.radius,
            diffuse: sphere.diffuse,
            specular: sphere.specular,
        }
    })
}
