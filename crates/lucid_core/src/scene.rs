//! Scene types for Lucid.
//!
//! A scene is an ordered list of spheres, an ordered list of point lights
//! and an optional checkerboard floor tile. It is built once and never
//! mutated while rendering.

use lucid_math::{Interval, Vec3};

use crate::material::{Color, Material};

/// A sphere primitive. Owns its material by value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sphere {
    pub center: Vec3,
    pub radius: f32,
    pub material: Material,
}

impl Sphere {
    /// Create a new sphere. Negative radii are clamped to zero.
    pub fn new(center: Vec3, radius: f32, material: Material) -> Self {
        Self {
            center,
            radius: radius.max(0.0),
            material,
        }
    }
}

/// A point light.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Light {
    pub position: Vec3,
    pub intensity: f32,
}

impl Light {
    pub fn new(position: Vec3, intensity: f32) -> Self {
        Self { position, intensity }
    }
}

/// A horizontal checkerboard floor, bounded to a rectangular tile.
///
/// Rays hit the plane `y = height` only inside `x_range` x `z_range`
/// (both exclusive). Cells are `1 / cell_scale` units wide; odd cells get
/// `odd_color`, even cells `even_color`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Checkerboard {
    pub height: f32,
    pub x_range: Interval,
    pub z_range: Interval,
    pub cell_scale: f32,
    pub odd_color: Color,
    pub even_color: Color,
}

impl Checkerboard {
    /// The floor tile of the classic scene: y = -5, |x| < 10, -30 < z < -10.
    pub fn standard() -> Self {
        Self {
            height: -5.0,
            x_range: Interval::new(-10.0, 10.0),
            z_range: Interval::new(-30.0, -10.0),
            cell_scale: 0.5,
            odd_color: Color::splat(0.3),
            even_color: Color::splat(0.1),
        }
    }

    /// Surface normal of the floor (always +Y).
    #[inline]
    pub fn normal(&self) -> Vec3 {
        Vec3::Y
    }

    /// Returns true if the point's x/z lie strictly inside the tile.
    pub fn covers(&self, point: Vec3) -> bool {
        self.x_range.surrounds(point.x) && self.z_range.surrounds(point.z)
    }

    /// Cell parity (0 or 1) at the given x/z: `(floor(s*x) + floor(s*z)) mod 2`.
    ///
    /// Uses a floor-based euclidean modulus, so negative coordinates
    /// alternate the same way positive ones do.
    pub fn parity(&self, x: f32, z: f32) -> i64 {
        let cx = (self.cell_scale * x).floor() as i64;
        let cz = (self.cell_scale * z).floor() as i64;
        (cx + cz).rem_euclid(2)
    }

    /// The material synthesized for a point on the floor.
    pub fn material_at(&self, point: Vec3) -> Material {
        let color = if self.parity(point.x, point.z) == 1 {
            self.odd_color
        } else {
            self.even_color
        };
        Material::default().with_diffuse_color(color)
    }
}

impl Default for Checkerboard {
    fn default() -> Self {
        Self::standard()
    }
}

/// A renderable scene.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    /// Spheres, tested in order (earlier wins ties)
    pub spheres: Vec<Sphere>,

    /// Point lights
    pub lights: Vec<Light>,

    /// Optional checkerboard floor
    pub floor: Option<Checkerboard>,
}

impl Scene {
    /// Create an empty scene with the standard floor.
    pub fn new() -> Self {
        Self {
            spheres: Vec::new(),
            lights: Vec::new(),
            floor: Some(Checkerboard::standard()),
        }
    }

    /// Replace (or remove) the floor.
    pub fn with_floor(mut self, floor: Option<Checkerboard>) -> Self {
        self.floor = floor;
        self
    }

    /// Add a sphere.
    pub fn with_sphere(mut self, sphere: Sphere) -> Self {
        self.spheres.push(sphere);
        self
    }

    /// Add a light.
    pub fn with_light(mut self, light: Light) -> Self {
        self.lights.push(light);
        self
    }

    pub fn add_sphere(&mut self, sphere: Sphere) {
        self.spheres.push(sphere);
    }

    pub fn add_light(&mut self, light: Light) {
        self.lights.push(light);
    }

    /// Get the number of spheres.
    pub fn sphere_count(&self) -> usize {
        self.spheres.len()
    }

    /// Get the number of lights.
    pub fn light_count(&self) -> usize {
        self.lights.len()
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}
