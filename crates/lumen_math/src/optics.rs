//! Mirror reflection and Snell's-law refraction of unit directions.

use crate::Vec3;

/// Outcome of refracting a direction through an interface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Refraction {
    /// The transmitted direction.
    Transmitted(Vec3),
    /// Snell's law has no solution; the caller reflects instead.
    TotalInternalReflection,
}

/// Reflect `v` about the normal `n`.
#[inline]
pub fn reflect(v: Vec3, n: Vec3) -> Vec3 {
    v - 2.0 * v.dot(n) * n
}

/// Refract the unit direction `d` through a surface with unit normal `n`.
///
/// `n` must face the incoming direction (`d . n <= 0`) and `eta` is the ratio
/// n1 / n2 of the refractive indices on the incident and transmitted sides.
#[inline]
pub fn refract(d: Vec3, n: Vec3, eta: f64) -> Refraction {
    let cos_i = -d.dot(n);
    let k = 1.0 - eta * eta * (1.0 - cos_i * cos_i);
    if k < 0.0 {
        return Refraction::TotalInternalReflection;
    }

    let cos_t = k.sqrt();
    Refraction::Transmitted(eta * d + (eta * cos_i - cos_t) * n)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reflect_off_floor() {
        let d = Vec3::new(1.0, -1.0, 0.0).normalize();
        let r = reflect(d, Vec3::Y);
        assert!((r - Vec3::new(1.0, 1.0, 0.0).normalize()).length() < 1e-12);
    }

    #[test]
    fn test_refract_normal_incidence_passes_straight() {
        match refract(-Vec3::Z, Vec3::Z, 1.0 / 1.5) {
            Refraction::Transmitted(t) => assert!((t + Vec3::Z).length() < 1e-12),
            Refraction::TotalInternalReflection => panic!("unexpected TIR"),
        }
    }

    #[test]
    fn test_refract_obeys_snell() {
        let eta = 1.0 / 1.5;
        let d = Vec3::new(0.5, 0.0, -(0.75f64).sqrt());
        let Refraction::Transmitted(t) = refract(d, Vec3::Z, eta) else {
            panic!("unexpected TIR");
        };

        // sin(theta_t) = eta * sin(theta_i)
        assert!((t.length() - 1.0).abs() < 1e-12);
        assert!((t.x - eta * d.x).abs() < 1e-12);
        assert!(t.z < 0.0);
    }

    #[test]
    fn test_refract_total_internal_reflection() {
        // Leaving glass at 60 degrees exceeds the ~41.8 degree critical angle.
        let d = Vec3::new((0.75f64).sqrt(), 0.0, -0.5);
        assert_eq!(
            refract(d, Vec3::Z, 1.5),
            Refraction::TotalInternalReflection
        );
    }
}
