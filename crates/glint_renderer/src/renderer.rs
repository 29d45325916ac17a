//! Frame renderer: raster allocation, primary rays, byte packing.

use glint_core::{Color, Scene};
use glint_math::{Ray, Vec3};
use rayon::prelude::*;

use crate::intersect::hit_scene;
use crate::shade::shade;

/// Float raster for storing render output.
///
/// A single owned, contiguous, row-major buffer; indexing is derived
/// from the width, so there are no per-row allocations to pair up.
pub struct Raster {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<Color>,
}

impl Raster {
    /// Create a new raster with every pixel set to `fill`.
    pub fn new(width: u32, height: u32, fill: Color) -> Self {
        Self {
            width,
            height,
            pixels: vec![fill; (width * height) as usize],
        }
    }

    /// Get the pixel at (x, y).
    pub fn get(&self, x: u32, y: u32) -> Color {
        self.pixels[(y * self.width + x) as usize]
    }

    /// Set the pixel at (x, y).
    pub fn set(&mut self, x: u32, y: u32, color: Color) {
        self.pixels[(y * self.width + x) as usize] = color;
    }

    /// Pack into RGB bytes, 3 per pixel in row-major order.
    ///
    /// Each channel maps by truncation: `byte = (channel * 255) as u8`,
    /// so 0.5 packs to 127, not 128. No rounding, no dithering.
    pub fn to_rgb(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.pixels.len() * 3);
        for color in &self.pixels {
            bytes.push((color.x * 255.0) as u8);
            bytes.push((color.y * 255.0) as u8);
            bytes.push((color.z * 255.0) as u8);
        }
        bytes
    }
}

/// Clamp a color to [0, 1] per channel.
#[inline]
pub fn clamp_color(color: Color) -> Color {
    color.clamp(Vec3::ZERO, Vec3::ONE)
}

/// Build the primary ray for pixel (x, y) of a width x height raster.
///
/// Pixel coordinates map to scene space through the scene's screen
/// scale, centered on the image: the ray leaves the camera toward the
/// pixel's position on the z = 0 plane. This is a scale-uniform,
/// orthographic-like projection, not a perspective frustum.
pub fn primary_ray(scene: &Scene, x: u32, y: u32, width: u32, height: u32) -> Ray {
    let sx = scene.scale * x as f32 - 0.5 * scene.scale * width as f32;
    let sy = scene.scale * y as f32 - 0.5 * scene.scale * height as f32;

    let direction = Vec3::new(sx - scene.camera.x, sy - scene.camera.y, -scene.camera.z);
    Ray::new(scene.camera, direction.normalize())
}

/// Trace one ray into the scene.
///
/// Returns the shaded color at the nearest intersection, or `None` when
/// the ray escapes to the background.
pub fn trace(ray: &Ray, scene: &Scene) -> Option<Color> {
    hit_scene(ray, scene).map(|hit| shade(&hit, scene))
}

/// Render the scene into a float raster.
///
/// Every pixel starts as the background color and is overwritten only
/// on a hit, after clamping. Pixels are mutually independent, so rows
/// are rendered as parallel bands; the scene is shared read-only and
/// each band owns its slice of the raster.
pub fn render_raster(scene: &Scene, width: u32, height: u32) -> Raster {
    let mut raster = Raster::new(width, height, scene.background);
    if raster.pixels.is_empty() {
        return raster;
    }

    log::debug!("rendering {}x{} ({} pixels)", width, height, width * height);

    raster
        .pixels
        .par_chunks_mut(width as usize)
        .enumerate()
        .for_each(|(y, row)| {
            for (x, pixel) in row.iter_mut().enumerate() {
                let ray = primary_ray(scene, x as u32, y as u32, width, height);
                if let Some(color) = trace(&ray, scene) {
                    *pixel = clamp_color(color);
                }
            }
        });

    raster
}

/// Render the scene and pack the result into RGB bytes.
///
/// The returned buffer has length `3 * width * height` and is suitable
/// for direct upload to a texture or encoding as an image.
pub fn render(scene: &Scene, width: u32, height: u32) -> Vec<u8> {
    render_raster(scene, width, height).to_rgb()
}
