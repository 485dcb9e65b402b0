//! Lucid Renderer - Whitted-style recursive ray tracing.
//!
//! Shades each primary ray with local Phong illumination and hard
//! shadows, then blends in recursively traced reflection and refraction.
//!
//! Data flows one way: driver (`render`, `render_parallel`) -> shader
//! (`cast_ray`) -> scene intersection (`Hittable`) -> primitives.

mod bucket;
mod camera;
mod checkerboard;
mod hittable;
mod optics;
mod output;
mod renderer;
mod sphere;

pub use bucket::{generate_buckets, render_bucket, render_parallel, Bucket, BucketResult, DEFAULT_BUCKET_SIZE};
pub use camera::Camera;
pub use hittable::{HitRecord, Hittable, FAR_PLANE};
pub use optics::{offset_origin, reflect, refract, SURFACE_BIAS};
pub use output::{color_to_rgb, save_image, tone_map, write_ppm, OutputError, OutputResult};
pub use renderer::{cast_ray, render, render_pixel, ImageBuffer, RenderConfig, BACKGROUND};
pub use sphere::intersect_sphere;

/// Re-export scene and math types so callers need only this crate
pub use lucid_core::{Checkerboard, Color, Light, Material, Scene, Sphere};
pub use lucid_math::{Interval, Ray, Vec3, Vec4};
