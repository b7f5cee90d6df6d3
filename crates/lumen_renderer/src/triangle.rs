//! Triangle primitive for ray tracing.
//!
//! Uses the Möller-Trumbore algorithm for ray-triangle intersection.

use std::sync::Arc;

use lumen_core::Material;
use lumen_math::{normalize, Interval, Ray, Vec3};

use crate::{Hittable, RayHit, HIT_EPSILON, PARALLEL_EPSILON};

/// A single-sided-geometry, double-sided-shading triangle.
#[derive(Clone, Debug)]
pub struct Triangle {
    /// Vertices
    v0: Vec3,
    v1: Vec3,
    v2: Vec3,
    /// Pre-computed edges from v0
    edge1: Vec3,
    edge2: Vec3,
    /// Pre-computed face normal (unit length, zero if degenerate)
    normal: Vec3,
    /// Material
    material: Arc<Material>,
}

impl Triangle {
    /// Create a new triangle from three vertices.
    ///
    /// The geometric normal follows the right-hand rule over v0, v1, v2.
    pub fn new(v0: Vec3, v1: Vec3, v2: Vec3, material: Arc<Material>) -> Self {
        let edge1 = v1 - v0;
        let edge2 = v2 - v0;

        Self {
            v0,
            v1,
            v2,
            edge1,
            edge2,
            normal: normalize(edge1.cross(edge2)),
            material,
        }
    }

    pub fn vertices(&self) -> [Vec3; 3] {
        [self.v0, self.v1, self.v2]
    }

    pub fn normal(&self) -> Vec3 {
        self.normal
    }
}

impl Hittable for Triangle {
    /// Möller-Trumbore ray-triangle intersection algorithm.
    fn intersect(&self, ray: &Ray) -> Option<RayHit<'_>> {
        let h = ray.direction().cross(self.edge2);
        let a = self.edge1.dot(h);

        // Ray is parallel to triangle
        if a.abs() < PARALLEL_EPSILON {
            return None;
        }

        let f = 1.0 / a;
        let s = ray.origin() - self.v0;
        let u = f * s.dot(h);

        if !Interval::UNIT.contains(u) {
            return None;
        }

        let q = s.cross(self.edge1);
        let v = f * ray.direction().dot(q);

        if v < 0.0 || u + v > 1.0 {
            return None;
        }

        let t = f * self.edge2.dot(q);
        if t <= HIT_EPSILON {
            return None;
        }

        Some(RayHit::new(ray, t, self.normal, &self.material))
    }

    fn material(&self) -> &Arc<Material> {
        &self.material
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_triangle() -> Triangle {
        Triangle::new(
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(0.0, 1.0, 0.0),
            Arc::new(Material::default()),
        )
    }

    #[test]
    fn test_triangle_hit() {
        let ray = Ray::new(Vec3::new(0.2, 0.2, 1.0), Vec3::new(0.0, 0.0, -1.0));
        let triangle = unit_triangle();
        let hit = triangle.intersect(&ray).expect("ray should hit triangle");

        assert!((hit.t - 1.0).abs() < 1e-12);
        assert!((hit.position - Vec3::new(0.2, 0.2, 0.0)).length() < 1e-12);
        assert!((hit.normal - Vec3::Z).length() < 1e-12);
        assert!(hit.normal.dot(ray.direction()) < 0.0);
    }

    #[test]
    fn test_triangle_hit_from_behind_flips_normal() {
        let ray = Ray::new(Vec3::new(0.2, 0.2, -1.0), Vec3::Z);
        let triangle = unit_triangle();
        let hit = triangle.intersect(&ray).expect("ray should hit back face");

        assert!(!hit.front_face);
        assert!((hit.normal + Vec3::Z).length() < 1e-12);
    }

    #[test]
    fn test_triangle_outside_barycentric_range() {
        // u + v > 1
        let ray = Ray::new(Vec3::new(0.8, 0.8, 1.0), -Vec3::Z);
        assert!(unit_triangle().intersect(&ray).is_none());

        // v < 0
        let ray = Ray::new(Vec3::new(0.5, -0.1, 1.0), -Vec3::Z);
        assert!(unit_triangle().intersect(&ray).is_none());

        // u < 0
        let ray = Ray::new(Vec3::new(-0.1, 0.5, 1.0), -Vec3::Z);
        assert!(unit_triangle().intersect(&ray).is_none());
    }

    #[test]
    fn test_triangle_parallel_ray_misses() {
        let ray = Ray::new(Vec3::new(0.2, 0.2, 0.0), Vec3::X);
        assert!(unit_triangle().intersect(&ray).is_none());
    }

    #[test]
    fn test_triangle_behind_ray_misses() {
        let ray = Ray::new(Vec3::new(0.2, 0.2, 1.0), Vec3::Z);
        assert!(unit_triangle().intersect(&ray).is_none());
    }

    #[test]
    fn test_degenerate_triangle_never_hits() {
        let tri = Triangle::new(
            Vec3::ZERO,
            Vec3::X,
            Vec3::new(2.0, 0.0, 0.0),
            Arc::new(Material::default()),
        );
        assert_eq!(tri.normal(), Vec3::ZERO);

        let ray = Ray::new(Vec3::new(0.5, 0.0, 1.0), -Vec3::Z);
        assert!(tri.intersect(&ray).is_none());
    }
}
