//! Lumen math types.
//!
//! Everything is double precision: the self-intersection epsilons used by the
//! tracer sit far below what `f32` can resolve at scene scale.

pub use glam::DVec3;

mod interval;
mod optics;
mod ray;

pub use interval::Interval;
pub use optics::{reflect, refract, Refraction};
pub use ray::Ray;

/// 3-component vector used for points, directions and normals.
pub type Vec3 = DVec3;

/// Unit vector in the direction of `v`, or zero when `v` has no length.
///
/// The zero result propagates as "no hit" through every intersection test
/// instead of spreading NaNs through the shading math.
#[inline]
pub fn normalize(v: Vec3) -> Vec3 {
    v.normalize_or_zero()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vec3_operations() {
        let a = Vec3::new(1.0, 2.0, 3.0);
        let b = Vec3::new(4.0, 5.0, 6.0);
        assert_eq!(a + b, Vec3::new(5.0, 7.0, 9.0));
        assert_eq!(a * b, Vec3::new(4.0, 10.0, 18.0));
        assert_eq!(a.dot(b), 32.0);
        assert_eq!(Vec3::X.cross(Vec3::Y), Vec3::Z);
    }

    #[test]
    fn test_normalize_zero_vector() {
        assert_eq!(normalize(Vec3::ZERO), Vec3::ZERO);
    }

    #[test]
    fn test_normalize_unit_length() {
        let n = normalize(Vec3::new(3.0, 0.0, 4.0));
        assert!((n.length() - 1.0).abs() < 1e-12);
        assert!((n - Vec3::new(0.6, 0.0, 0.8)).length() < 1e-12);
    }
}
