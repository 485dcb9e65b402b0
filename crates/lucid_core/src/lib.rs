//! Lucid Core - Scene data for the Whitted ray tracer.
//!
//! This crate provides:
//!
//! - **Scene types**: `Material`, `Sphere`, `Light`, `Checkerboard`, `Scene`
//! - **Presets**: the built-in demo scene
//! - **Scene descriptions**: JSON scene file loading
//!
//! Scenes are built once and only read afterwards; the renderer takes
//! them by shared reference.
//!
//! # Example
//!
//! ```ignore
//! use lucid_core::{load_scene, presets};
//!
//! let scene = match path {
//!     Some(path) => load_scene(path)?,
//!     None => presets::classic(),
//! };
//! println!("{} spheres, {} lights", scene.sphere_count(), scene.light_count());
//! ```

pub mod description;
pub mod material;
pub mod presets;
pub mod scene;

// Re-export commonly used types
pub use description::{load_scene, load_scene_from_str, SceneDescription, SceneError, SceneResult};
pub use material::{Color, Material};
pub use scene::{Checkerboard, Light, Scene, Sphere};
