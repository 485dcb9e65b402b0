//! Hittable trait and HitRecord for ray-object intersection.

use lucid_core::{Material, Scene};
use lucid_math::{Ray, Vec3};

/// Hits at or beyond this distance count as escaping the world.
pub const FAR_PLANE: f32 = 1000.0;

/// Record of a ray-object intersection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HitRecord {
    /// Distance along the (unit) ray direction
    pub t: f32,
    /// Point of intersection
    pub point: Vec3,
    /// Outward surface normal, unit length
    pub normal: Vec3,
    /// Material at the intersection point (copied, so the floor can synthesize one)
    pub material: Material,
}

/// Trait for objects that can be hit by rays.
pub trait Hittable: Send + Sync {
    /// Nearest intersection in front of the ray origin, if any.
    fn hit(&self, ray: &Ray) -> Option<HitRecord>;
}

fn nearer(current: Option<HitRecord>, candidate: Option<HitRecord>) -> Option<HitRecord> {
    match (current, candidate) {
        (Some(c), Some(n)) if n.t < c.t => Some(n),
        (None, n) => n,
        (c, _) => c,
    }
}

impl Hittable for Scene {
    /// Closest sphere (earlier spheres win ties), then the floor if it is
    /// strictly nearer. Nothing at or beyond [`FAR_PLANE`] counts.
    fn hit(&self, ray: &Ray) -> Option<HitRecord> {
        let mut closest = None;

        for sphere in &self.spheres {
            closest = nearer(closest, sphere.hit(ray));
        }

        if let Some(floor) = &self.floor {
            closest = nearer(closest, floor.hit(ray));
        }

        closest.filter(|rec| rec.t < FAR_PLANE)
    }
}
