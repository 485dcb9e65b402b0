//! Surface material for the Whitted shading model.

use lucid_math::{Vec3, Vec4};

/// Color type alias (linear RGB, unbounded before tone mapping)
pub type Color = Vec3;

/// A surface material.
///
/// `albedo` is not a physical reflectance. Its four components weight the
/// final shading terms positionally:
///
/// | component | term |
/// |---|---|
/// | `x` | diffuse |
/// | `y` | specular highlight |
/// | `z` | reflected color |
/// | `w` | refracted color |
///
/// The weights are not normalized and need not sum to 1.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Material {
    /// Index of refraction (1.0 = vacuum, no bending)
    pub refractive_index: f32,

    /// Diffuse / specular / reflect / refract weights
    pub albedo: Vec4,

    /// Diffuse color (linear RGB)
    pub diffuse_color: Color,

    /// Phong shininess exponent
    pub specular_exponent: f32,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            refractive_index: 1.0,
            albedo: Vec4::new(1.0, 0.0, 0.0, 0.0),
            diffuse_color: Color::ZERO,
            specular_exponent: 0.0,
        }
    }
}

impl Material {
    /// Create a new material.
    pub fn new(refractive_index: f32, albedo: Vec4, diffuse_color: Color, specular_exponent: f32) -> Self {
        Self {
            refractive_index,
            albedo,
            diffuse_color,
            specular_exponent,
        }
    }

    /// A purely diffuse material of the given color.
    pub fn diffuse(diffuse_color: Color) -> Self {
        Self {
            diffuse_color,
            ..Default::default()
        }
    }

    /// Replace the diffuse color, keeping everything else.
    pub fn with_diffuse_color(mut self, diffuse_color: Color) -> Self {
        self.diffuse_color = diffuse_color;
        self
    }

    #[inline]
    pub fn diffuse_weight(&self) -> f32 {
        self.albedo.x
    }

    #[inline]
    pub fn specular_weight(&self) -> f32 {
        self.albedo.y
    }

    #[inline]
    pub fn reflect_weight(&self) -> f32 {
        self.albedo.z
    }

    #[inline]
    pub fn refract_weight(&self) -> f32 {
        self.albedo.w
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_material() {
        let m = Material::default();
        assert_eq!(m.refractive_index, 1.0);
        assert_eq!(m.albedo, Vec4::new(1.0, 0.0, 0.0, 0.0));
        assert_eq!(m.diffuse_color, Color::ZERO);
        assert_eq!(m.specular_exponent, 0.0);
    }

    #[test]
    fn test_albedo_weights_are_positional() {
        let m = Material::new(1.5, Vec4::new(0.1, 0.2, 0.3, 0.4), Color::ONE, 50.0);
        assert_eq!(m.diffuse_weight(), 0.1);
        assert_eq!(m.specular_weight(), 0.2);
        assert_eq!(m.reflect_weight(), 0.3);
        assert_eq!(m.refract_weight(), 0.4);
    }

    #[test]
    fn test_with_diffuse_color_keeps_other_fields() {
        let glass = Material::new(1.5, Vec4::new(0.0, 0.5, 0.1, 0.8), Color::ONE, 125.0);
        let tinted = glass.with_diffuse_color(Color::new(0.3, 0.3, 0.3));

        assert_eq!(tinted.diffuse_color, Color::splat(0.3));
        assert_eq!(tinted.refractive_index, glass.refractive_index);
        assert_eq!(tinted.albedo, glass.albedo);
        assert_eq!(tinted.specular_exponent, glass.specular_exponent);
    }
}
