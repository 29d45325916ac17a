//! Glint Renderer - Whitted-style CPU ray tracing
//!
//! Casts one primary ray per pixel against the scene's spheres and
//! shades hit points with a multi-light Phong model gated by shadow
//! rays. Pixels are independent, so the frame is rendered as parallel
//! row bands via rayon.

mod intersect;
mod renderer;
mod shade;

pub use intersect::{hit_scene, hit_sphere, SurfaceHit};
pub use renderer::{clamp_color, primary_ray, render, render_raster, trace, Raster};
pub use shade::{shade, SHININESS};

/// Re-export scene and math types used at the API surface
pub use glint_core::{Color, PointLight, Scene, Sphere};
pub use glint_math::{Ray, Vec3};
