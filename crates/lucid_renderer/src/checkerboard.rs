//! Ray intersection with the checkerboard floor.

use crate::hittable::{HitRecord, Hittable};
use lucid_core::Checkerboard;
use lucid_math::Ray;

/// Rays flatter than this (|dir.y|) are treated as missing the floor.
const GRAZING_LIMIT: f32 = 1e-3;

impl Hittable for Checkerboard {
    fn hit(&self, ray: &Ray) -> Option<HitRecord> {
        let direction = ray.direction();
        if direction.y.abs() <= GRAZING_LIMIT {
            return None;
        }

        let t = -(ray.origin().y - self.height) / direction.y;
        if t <= 0.0 {
            return None;
        }

        let point = ray.at(t);
        if !self.covers(point) {
            return None;
        }

        Some(HitRecord {
            t,
            point,
            normal: self.normal(),
            material: self.material_at(point),
        })
    }
}
