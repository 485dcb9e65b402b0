//! Built-in scenes.

use lucid_math::{Vec3, Vec4};

use crate::material::{Color, Material};
use crate::scene::{Checkerboard, Light, Scene, Sphere};

/// Slightly refractive, mostly transparent glass.
pub fn glass() -> Material {
    Material::new(1.01, Vec4::new(0.0, 0.5, 0.1, 0.8), Color::new(0.6, 0.8, 0.7), 125.0)
}

/// Matte purple rubber.
pub fn rubber() -> Material {
    Material::new(1.0, Vec4::new(0.9, 0.1, 0.0, 0.0), Color::new(0.4, 0.1, 0.3), 10.0)
}

/// Rubber with a faint reflection.
pub fn glossy_rubber() -> Material {
    Material::new(1.0, Vec4::new(0.9, 0.1, 0.4, 0.0), Color::new(0.3, 0.1, 0.4), 10.0)
}

/// Mirror with a very tight, very bright highlight.
pub fn mirror() -> Material {
    Material::new(1.0, Vec4::new(0.0, 10.0, 0.8, 0.0), Color::ONE, 1425.0)
}

/// The classic four-sphere, five-light scene over the checkerboard floor.
pub fn classic() -> Scene {
    Scene::new()
        .with_floor(Some(Checkerboard::standard()))
        .with_sphere(Sphere::new(Vec3::new(1.0, -1.5, -12.0), 3.0, glass()))
        .with_sphere(Sphere::new(Vec3::new(-3.5, 1.5, -18.0), 2.0, rubber()))
        .with_sphere(Sphere::new(Vec3::new(3.5, -1.5, -24.0), 2.0, glossy_rubber()))
        .with_sphere(Sphere::new(Vec3::new(7.0, 5.0, -18.0), 4.0, mirror()))
        .with_light(Light::new(Vec3::new(-10.0, 10.0, 20.0), 1.4))
        .with_light(Light::new(Vec3::new(-30.0, -30.0, 20.0), 1.2))
        .with_light(Light::new(Vec3::new(-20.0, 20.0, 20.0), 1.5))
        .with_light(Light::new(Vec3::new(30.0, 50.0, -25.0), 0.8))
        .with_light(Light::new(Vec3::new(30.0, 20.0, 30.0), 3.0))
}
