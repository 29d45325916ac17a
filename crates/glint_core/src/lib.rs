//! Glint Core - scene model and scene description loading.
//!
//! This crate provides:
//!
//! - **Scene types**: `Scene`, `Sphere`, `PointLight`, the `Color` alias
//! - **Loading**: JSON scene descriptions with validation
//!
//! # Example
//!
//! ```ignore
//! use glint_core::load_scene;
//!
//! // Load and validate a scene description
//! let scene = load_scene("scenes/spheres.json")?;
//! println!("Loaded {} spheres, {} lights",
//!     scene.sphere_count(),
//!     scene.light_count());
//! ```

pub mod loader;
pub mod scene;

// Re-export commonly used types
pub use loader::{load_scene, load_scene_from_str, LoadError};
pub use scene::{Color, PointLight, Scene, Sphere, ValidationError};
