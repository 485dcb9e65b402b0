//! Pinhole camera for primary ray generation.

use lucid_math::{Ray, Vec3};

/// A pinhole camera at `origin` looking down -Z with +Y up.
///
/// Pixel (0, 0) is the top-left corner of the image.
#[derive(Debug, Clone, Copy)]
pub struct Camera {
    pub image_width: u32,
    pub image_height: u32,
    /// Vertical field of view in radians
    pub fov: f32,
    pub origin: Vec3,
}

impl Camera {
    /// Create a camera at the world origin.
    pub fn new(image_width: u32, image_height: u32, fov: f32) -> Self {
        Self {
            image_width,
            image_height,
            fov,
            origin: Vec3::ZERO,
        }
    }

    /// Distance from the eye to the image plane, in pixels.
    fn focal_distance(&self) -> f32 {
        self.image_height as f32 / (2.0 * (self.fov / 2.0).tan())
    }

    /// Primary ray through the center of pixel (i, j).
    pub fn primary_ray(&self, i: u32, j: u32) -> Ray {
        let x = (i as f32 + 0.5) - self.image_width as f32 / 2.0;
        // Flip so that row 0 is at the top
        let y = -(j as f32 + 0.5) + self.image_height as f32 / 2.0;
        let z = -self.focal_distance();

        Ray::new(self.origin, Vec3::new(x, y, z).normalize())
    }
}
