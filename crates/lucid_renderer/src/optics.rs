//! Reflection, refraction and secondary-ray origin biasing.

use lucid_math::Vec3;

/// Distance secondary ray origins are pushed off the surface.
pub const SURFACE_BIAS: f32 = 1e-3;

/// Reflect `i` about the normal `n`: `i - 2(i·n)n`.
#[inline]
pub fn reflect(i: Vec3, n: Vec3) -> Vec3 {
    i - n * 2.0 * i.dot(n)
}

/// Refract `i` through a surface with normal `n` (Snell's law).
///
/// `eta_t` is the index on the far side of the surface, `eta_i` the index
/// the ray travels in. If `i` leaves through the back of the surface
/// (`i·n > 0`) the ray is inside the medium: the normal is flipped and the
/// indices swapped.
///
/// Returns `None` on total internal reflection.
pub fn refract(i: Vec3, n: Vec3, eta_t: f32, eta_i: f32) -> Option<Vec3> {
    let cosi = -i.dot(n).clamp(-1.0, 1.0);
    if cosi < 0.0 {
        return refract(i, -n, eta_i, eta_t);
    }

    let eta = eta_i / eta_t;
    let k = 1.0 - eta * eta * (1.0 - cosi * cosi);
    if k < 0.0 {
        return None;
    }

    Some(i * eta + n * (eta * cosi - k.sqrt()))
}

/// Push `point` off the surface to the side `direction` leaves towards.
///
/// Applied to reflection, refraction and shadow rays alike so they do not
/// immediately re-hit the surface they start on.
#[inline]
pub fn offset_origin(point: Vec3, direction: Vec3, n: Vec3) -> Vec3 {
    if direction.dot(n) < 0.0 {
        point - n * SURFACE_BIAS
    } else {
        point + n * SURFACE_BIAS
    }
}
