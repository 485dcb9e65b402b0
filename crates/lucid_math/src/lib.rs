// Re-export glam for convenience
pub use glam::*;

// Lucid math types
mod interval;
mod ray;
pub use interval::Interval;
pub use ray::Ray;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vec3_operations() {
        let a = Vec3::new(1.0, 2.0, 3.0);
        let b = Vec3::new(4.0, 5.0, 6.0);

        assert_eq!(a + b, Vec3::new(5.0, 7.0, 9.0));
        assert_eq!(b - a, Vec3::new(3.0, 3.0, 3.0));
        assert_eq!(a * 2.0, Vec3::new(2.0, 4.0, 6.0));
        assert_eq!(a.dot(b), 32.0);
    }

    #[test]
    fn test_vec3_length_and_normalize() {
        let v = Vec3::new(3.0, 0.0, 4.0);
        assert_eq!(v.length_squared(), 25.0);
        assert_eq!(v.length(), 5.0);

        let n = v.normalize();
        assert!((n.length() - 1.0).abs() < 1e-6);
        assert!((n - Vec3::new(0.6, 0.0, 0.8)).length() < 1e-6);
    }

    #[test]
    fn test_normalize_zero_is_not_finite() {
        // Zero-length inputs are a caller error; the result is NaN, not a panic.
        let n = Vec3::ZERO.normalize();
        assert!(!n.is_finite());
    }

    #[test]
    fn test_vec4_positional_components() {
        let albedo = Vec4::new(0.9, 0.1, 0.4, 0.0);
        assert_eq!(albedo[0], albedo.x);
        assert_eq!(albedo[3], albedo.w);
    }
}
