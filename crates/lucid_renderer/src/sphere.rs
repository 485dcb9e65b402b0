//! Ray-sphere intersection.

use crate::hittable::{HitRecord, Hittable};
use lucid_core::Sphere;
use lucid_math::{Ray, Vec3};

/// Distance to the nearest intersection of a unit-direction ray with a sphere.
///
/// Geometric form: project the origin-to-center vector onto the ray, then
/// step back by the half chord. When the origin is inside the sphere (or the
/// near hit is behind it) the far hit is used. No epsilon is applied here;
/// callers bias secondary ray origins instead.
pub fn intersect_sphere(center: Vec3, radius: f32, ray: &Ray) -> Option<f32> {
    let oc = center - ray.origin();
    let tca = oc.dot(ray.direction());
    let d2 = oc.length_squared() - tca * tca;
    let r2 = radius * radius;
    if d2 > r2 {
        return None;
    }

    let thc = (r2 - d2).sqrt();
    let mut t0 = tca - thc;
    let t1 = tca + thc;
    if t0 < 0.0 {
        t0 = t1;
    }

    (t0 >= 0.0).then_some(t0)
}

impl Hittable for Sphere {
    fn hit(&self, ray: &Ray) -> Option<HitRecord> {
        let t = intersect_sphere(self.center, self.radius, ray)?;
        let point = ray.at(t);

        Some(HitRecord {
            t,
            point,
            normal: (point - self.center).normalize(),
            material: self.material,
        })
    }
}
