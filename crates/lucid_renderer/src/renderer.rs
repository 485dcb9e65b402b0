//! Core Whitted ray caster.
//!
//! Implements recursive ray tracing with:
//! - Phong diffuse + specular from point lights, with hard shadows
//! - Mirror reflection and Snell refraction, traced recursively
//! - A fixed background for escaping rays and exhausted depth

use crate::hittable::{HitRecord, Hittable};
use crate::optics::{offset_origin, reflect, refract};
use crate::Camera;
use lucid_core::{Color, Scene};
use lucid_math::{Ray, Vec3};

/// Color returned for rays that escape the scene or exceed the depth limit.
pub const BACKGROUND: Color = Color::new(0.3, 0.2, 0.3);

/// Render configuration.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Output width in pixels
    pub width: u32,
    /// Output height in pixels
    pub height: u32,
    /// Vertical field of view in radians
    pub fov: f32,
    /// Deepest recursion level that is still shaded (primary rays are depth 0)
    pub max_depth: u32,
    /// Color for escaping rays
    pub background: Color,
    /// Edge length of parallel render buckets, in pixels
    pub bucket_size: u32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 1024,
            height: 768,
            fov: std::f32::consts::PI / 3.0,
            max_depth: 10,
            background: BACKGROUND,
            bucket_size: crate::bucket::DEFAULT_BUCKET_SIZE,
        }
    }
}

impl RenderConfig {
    /// Camera matching this configuration's resolution and field of view.
    pub fn camera(&self) -> Camera {
        Camera::new(self.width, self.height, self.fov)
    }
}

/// Compute the color seen along a ray.
///
/// `ray.direction()` must be unit length. Returns linear, unclamped RGB.
/// Reflection and refraction rays are traced at `depth + 1`; once `depth`
/// exceeds `config.max_depth` the background is returned without looking
/// at the scene.
pub fn cast_ray(ray: &Ray, scene: &Scene, depth: u32, config: &RenderConfig) -> Color {
    if depth > config.max_depth {
        return config.background;
    }

    let Some(rec) = scene.hit(ray) else {
        return config.background;
    };

    let dir = ray.direction();
    let n = rec.normal;
    let material = rec.material;

    let reflect_dir = reflect(dir, n).normalize();
    let reflect_ray = Ray::new(offset_origin(rec.point, reflect_dir, n), reflect_dir);
    let reflect_color = cast_ray(&reflect_ray, scene, depth + 1, config);

    // Total internal reflection leaves nothing to refract
    let refract_color = match refract(dir, n, material.refractive_index, 1.0) {
        Some(refract_dir) => {
            let refract_dir = refract_dir.normalize();
            let refract_ray = Ray::new(offset_origin(rec.point, refract_dir, n), refract_dir);
            cast_ray(&refract_ray, scene, depth + 1, config)
        }
        None => Color::ZERO,
    };

    let (diffuse, specular) = direct_light(scene, &rec, dir);

    material.diffuse_color * diffuse * material.diffuse_weight()
        + Color::ONE * specular * material.specular_weight()
        + reflect_color * material.reflect_weight()
        + refract_color * material.refract_weight()
}

/// Sum of diffuse and specular intensity from every light that can see the hit.
fn direct_light(scene: &Scene, rec: &HitRecord, view_dir: Vec3) -> (f32, f32) {
    let n = rec.normal;
    let mut diffuse = 0.0;
    let mut specular = 0.0;

    for light in &scene.lights {
        let to_light = light.position - rec.point;
        let light_distance = to_light.length();
        let light_dir = to_light.normalize();

        let shadow_ray = Ray::new(offset_origin(rec.point, light_dir, n), light_dir);
        if scene.hit(&shadow_ray).is_some_and(|blocker| blocker.t < light_distance) {
            continue;
        }

        diffuse += light.intensity * light_dir.dot(n).max(0.0);
        specular += (-reflect(-light_dir, n)).dot(view_dir).max(0.0).powf(rec.material.specular_exponent)
            * light.intensity;
    }

    (diffuse, specular)
}

/// Render a single pixel.
pub fn render_pixel(camera: &Camera, scene: &Scene, x: u32, y: u32, config: &RenderConfig) -> Color {
    cast_ray(&camera.primary_ray(x, y), scene, 0, config)
}

/// Simple image buffer for storing render output.
///
/// Pixels are row-major, top row first.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageBuffer {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<Color>,
}

impl ImageBuffer {
    /// Create a new image buffer filled with black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Color::ZERO; width as usize * height as usize],
        }
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    /// Get the pixel at (x, y).
    pub fn get(&self, x: u32, y: u32) -> Color {
        self.pixels[self.index(x, y)]
    }

    /// Set the pixel at (x, y).
    pub fn set(&mut self, x: u32, y: u32, color: Color) {
        let i = self.index(x, y);
        self.pixels[i] = color;
    }
}

/// Render the entire scene to an image buffer.
///
/// This is a simple single-threaded renderer; see
/// [`render_parallel`](crate::render_parallel) for the bucketed one.
pub fn render(scene: &Scene, config: &RenderConfig) -> ImageBuffer {
    let camera = config.camera();
    let mut image = ImageBuffer::new(config.width, config.height);

    for y in 0..config.height {
        for x in 0..config.width {
            let color = render_pixel(&camera, scene, x, y, config);
            image.set(x, y, color);
        }
    }

    image
}

#[cfg(test)]
mod tests {
    use super::*;
    use lucid_core::{presets, Light, Material, Sphere};
    use lucid_math::Vec4;

    fn approx(a: Color, b: Color) -> bool {
        (a - b).length() < 1e-4
    }

    fn diffuse_white() -> Material {
        Material::new(1.0, Vec4::new(1.0, 0.0, 0.0, 0.0), Color::ONE, 0.0)
    }

    /// Unit sphere at (0, 0, -5) seen head-on from the origin.
    fn target() -> Sphere {
        Sphere::new(Vec3::new(0.0, 0.0, -5.0), 1.0, diffuse_white())
    }

    fn forward() -> Ray {
        Ray::new(Vec3::ZERO, Vec3::NEG_Z)
    }

    #[test]
    fn test_miss_returns_background() {
        let config = RenderConfig::default();
        let scene = presets::classic();

        // Straight up escapes every primitive
        let ray = Ray::new(Vec3::ZERO, Vec3::Y);
        assert_eq!(cast_ray(&ray, &scene, 0, &config), BACKGROUND);

        let empty = Scene::new().with_floor(None).with_light(Light::new(Vec3::ZERO, 1.0));
        assert_eq!(cast_ray(&forward(), &empty, 0, &config), BACKGROUND);
    }

    #[test]
    fn test_custom_background() {
        let config = RenderConfig {
            background: Color::new(0.0, 0.0, 1.0),
            ..Default::default()
        };
        let scene = Scene::new().with_floor(None);
        assert_eq!(cast_ray(&forward(), &scene, 0, &config), Color::new(0.0, 0.0, 1.0));
    }

    #[test]
    fn test_depth_limit_returns_background_even_on_hit() {
        let config = RenderConfig::default();
        let scene = Scene::new()
            .with_floor(None)
            .with_sphere(target())
            .with_light(Light::new(Vec3::ZERO, 1.0));

        // Depth 10 is still shaded
        assert!(!approx(cast_ray(&forward(), &scene, 10, &config), BACKGROUND));
        // Depth 11 never is
        assert_eq!(cast_ray(&forward(), &scene, 11, &config), BACKGROUND);
        assert_eq!(cast_ray(&forward(), &presets::classic(), 11, &config), BACKGROUND);
    }

    #[test]
    fn test_red_sphere_scenario() {
        let red = Material::new(1.0, Vec4::new(1.0, 0.0, 0.0, 0.0), Color::new(1.0, 0.0, 0.0), 0.0);
        let scene = Scene::new()
            .with_floor(None)
            .with_sphere(Sphere::new(Vec3::new(0.0, 0.0, -5.0), 1.0, red))
            .with_light(Light::new(Vec3::ZERO, 1.0));

        let rec = scene.hit(&forward()).unwrap();
        assert!((rec.t - 4.0).abs() < 1e-6);
        assert!(approx(rec.normal, Vec3::Z));

        // Light straight along the normal: full diffuse, nothing else weighted
        let color = cast_ray(&forward(), &scene, 0, &RenderConfig::default());
        assert!(approx(color, Color::new(1.0, 0.0, 0.0)), "color={:?}", color);
    }

    #[test]
    fn test_occluded_light_contributes_nothing() {
        let config = RenderConfig::default();
        let blocked = Light::new(Vec3::new(0.0, 0.0, 10.0), 1.0);
        let open = Light::new(Vec3::new(0.0, 10.0, 0.0), 1.0);
        // Sits between the lit point (0, 0, -4) and the blocked light, behind the camera
        let occluder = Sphere::new(Vec3::new(0.0, 0.0, 3.0), 1.0, diffuse_white());

        let base = Scene::new().with_floor(None).with_sphere(target());

        let shadowed = base.clone().with_sphere(occluder).with_light(blocked).with_light(open);
        let open_only = base.clone().with_light(open);
        let unshadowed = base.clone().with_light(blocked).with_light(open);

        let c_shadowed = cast_ray(&forward(), &shadowed, 0, &config);
        let c_open_only = cast_ray(&forward(), &open_only, 0, &config);
        let c_unshadowed = cast_ray(&forward(), &unshadowed, 0, &config);

        // The open light still reaches the point
        let expected_open = 4.0 / 116.0f32.sqrt();
        assert!(approx(c_open_only, Color::splat(expected_open)), "open={:?}", c_open_only);
        assert!(approx(c_shadowed, c_open_only), "shadowed={:?}", c_shadowed);
        assert!(approx(c_unshadowed, Color::splat(1.0 + expected_open)));
    }

    #[test]
    fn test_light_behind_surface_adds_nothing() {
        let scene = Scene::new()
            .with_floor(None)
            .with_sphere(target())
            .with_light(Light::new(Vec3::new(0.0, 0.0, -20.0), 5.0));

        let color = cast_ray(&forward(), &scene, 0, &RenderConfig::default());
        assert!(approx(color, Color::ZERO), "color={:?}", color);
    }

    #[test]
    fn test_specular_highlight() {
        let shiny = Material::new(1.0, Vec4::new(0.0, 1.0, 0.0, 0.0), Color::ZERO, 50.0);
        let scene = Scene::new()
            .with_floor(None)
            .with_sphere(Sphere::new(Vec3::new(0.0, 0.0, -5.0), 1.0, shiny))
            .with_light(Light::new(Vec3::ZERO, 2.0));

        // Light at the eye: mirror direction points straight back, full highlight
        let color = cast_ray(&forward(), &scene, 0, &RenderConfig::default());
        assert!(approx(color, Color::splat(2.0)), "color={:?}", color);
    }

    #[test]
    fn test_mirror_sphere_stays_finite() {
        let mirror = Material::new(1.0, Vec4::new(0.0, 0.0, 1.0, 0.0), Color::ONE, 0.0);
        let scene = Scene::new()
            .with_floor(None)
            .with_sphere(Sphere::new(Vec3::new(0.0, 0.0, -5.0), 1.0, mirror))
            .with_light(Light::new(Vec3::new(5.0, 5.0, 0.0), 1.0));

        // A single convex mirror reflects straight back out to the background
        let color = cast_ray(&forward(), &scene, 0, &RenderConfig::default());
        assert!(color.is_finite());
        assert!(approx(color, BACKGROUND), "color={:?}", color);

        // Off-axis too
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.1, 0.05, -1.0).normalize());
        assert!(cast_ray(&ray, &scene, 0, &RenderConfig::default()).is_finite());
    }

    #[test]
    fn test_transparent_sphere_shows_background() {
        // Index 1: the ray passes through unbent and leaves to the background
        let clear = Material::new(1.0, Vec4::new(0.0, 0.0, 0.0, 1.0), Color::ZERO, 0.0);
        let scene = Scene::new()
            .with_floor(None)
            .with_sphere(Sphere::new(Vec3::new(0.0, 0.0, -5.0), 1.0, clear));

        let color = cast_ray(&forward(), &scene, 0, &RenderConfig::default());
        assert!(approx(color, BACKGROUND), "color={:?}", color);
    }

    #[test]
    fn test_classic_scene_pixels_are_finite() {
        let config = RenderConfig {
            width: 16,
            height: 12,
            ..Default::default()
        };
        let image = render(&presets::classic(), &config);

        assert_eq!(image.pixels.len(), 16 * 12);
        assert!(image.pixels.iter().all(|c| c.is_finite()));
        // Something other than the background is visible
        assert!(image.pixels.iter().any(|&c| !approx(c, BACKGROUND)));
    }

    #[test]
    fn test_image_buffer_get_set() {
        let mut image = ImageBuffer::new(4, 3);
        assert_eq!(image.get(3, 2), Color::ZERO);

        image.set(3, 2, Color::ONE);
        assert_eq!(image.get(3, 2), Color::ONE);
        assert_eq!(image.pixels[11], Color::ONE);
    }

    #[test]
    fn test_image_buffer_wide_row_indexing() {
        // Row stride is computed in usize, not u32
        let mut image = ImageBuffer::new(70_000, 2);
        assert_eq!(image.pixels.len(), 140_000);

        image.set(69_999, 1, Color::ONE);
        assert_eq!(image.get(69_999, 1), Color::ONE);
        assert_eq!(image.pixels[139_999], Color::ONE);
        assert_eq!(image.get(69_999, 0), Color::ZERO);
    }

    #[test]
    fn test_total_internal_reflection_contributes_black() {
        // Purely refractive, dense glass: only the refraction term is weighted
        let dense = Material::new(2.0, Vec4::new(0.0, 0.0, 0.0, 1.0), Color::ZERO, 0.0);
        let scene = Scene::new()
            .with_floor(None)
            .with_sphere(Sphere::new(Vec3::new(0.0, 0.0, -5.0), 1.0, dense));

        // From inside, exiting near the top at a grazing angle cannot refract
        let ray = Ray::new(Vec3::new(0.0, 0.95, -5.0), Vec3::X);
        let rec = scene.hit(&ray).unwrap();
        assert!(crate::refract(ray.direction(), rec.normal, 2.0, 1.0).is_none());

        let color = cast_ray(&ray, &scene, 0, &RenderConfig::default());
        assert_eq!(color, Color::ZERO);
        assert_ne!(color, BACKGROUND);
    }
}
