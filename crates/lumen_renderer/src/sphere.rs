//! Sphere primitive for ray tracing.

use std::sync::Arc;

use lumen_core::Material;
use lumen_math::{Interval, Ray, Vec3};

use crate::{Hittable, RayHit, HIT_EPSILON};

/// A sphere primitive.
#[derive(Clone, Debug)]
pub struct Sphere {
    center: Vec3,
    radius: f64,
    material: Arc<Material>,
}

impl Sphere {
    /// Create a new sphere.
    pub fn new(center: Vec3, radius: f64, material: Arc<Material>) -> Self {
        Self {
            center,
            radius,
            material,
        }
    }

    pub fn center(&self) -> Vec3 {
        self.center
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }
}

impl Hittable for Sphere {
    fn intersect(&self, ray: &Ray) -> Option<RayHit<'_>> {
        let oc = self.center - ray.origin();
        let a = ray.direction().length_squared();
        let h = ray.direction().dot(oc);
        let c = oc.length_squared() - self.radius * self.radius;

        let discriminant = h * h - a * c;
        if discriminant < 0.0 {
            return None;
        }

        let sqrtd = discriminant.sqrt();
        let ray_t = Interval::after(HIT_EPSILON);

        // Find the nearest root in the acceptable range
        let mut root = (h - sqrtd) / a;
        if !ray_t.surrounds(root) {
            root = (h + sqrtd) / a;
            if !ray_t.surrounds(root) {
                return None;
            }
        }

        let outward_normal = ray.at(root) - self.center;
        Some(RayHit::new(ray, root, outward_normal, &self.material))
    }

    fn material(&self) -> &Arc<Material> {
        &self.material
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_sphere_at(center: Vec3) -> Sphere {
        Sphere::new(center, 1.0, Arc::new(Material::default()))
    }

    #[test]
    fn test_sphere_hit() {
        let sphere = unit_sphere_at(Vec3::new(0.0, 0.0, 5.0));
        let ray = Ray::new(Vec3::ZERO, Vec3::Z);

        let hit = sphere.intersect(&ray).expect("ray should hit sphere");
        assert!((hit.t - 4.0).abs() < 1e-12);
        assert!((hit.position - Vec3::new(0.0, 0.0, 4.0)).length() < 1e-12);
        assert!((hit.normal - Vec3::new(0.0, 0.0, -1.0)).length() < 1e-12);
        assert!(hit.front_face);
    }

    #[test]
    fn test_sphere_miss() {
        let sphere = unit_sphere_at(Vec3::new(0.0, 0.0, 5.0));

        // Passes beside the sphere: negative discriminant
        let ray = Ray::new(Vec3::new(2.0, 0.0, 0.0), Vec3::Z);
        assert!(sphere.intersect(&ray).is_none());
    }

    #[test]
    fn test_sphere_behind_ray() {
        let sphere = unit_sphere_at(Vec3::new(0.0, 0.0, -5.0));
        let ray = Ray::new(Vec3::ZERO, Vec3::Z);
        assert!(sphere.intersect(&ray).is_none());
    }

    #[test]
    fn test_sphere_from_inside() {
        let sphere = unit_sphere_at(Vec3::ZERO);
        let ray = Ray::new(Vec3::ZERO, Vec3::X);

        let hit = sphere.intersect(&ray).expect("ray from center should hit shell");
        assert!((hit.t - 1.0).abs() < 1e-12);
        assert!(!hit.front_face);
        // Normal faces back toward the center, against the ray
        assert!((hit.normal + Vec3::X).length() < 1e-12);
    }

    #[test]
    fn test_sphere_ignores_root_at_origin() {
        let sphere = unit_sphere_at(Vec3::ZERO);
        // Starting on the surface, heading inward: the t=0 root is rejected
        let ray = Ray::new(Vec3::new(-1.0, 0.0, 0.0), Vec3::X);

        let hit = sphere.intersect(&ray).expect("far side should be hit");
        assert!((hit.t - 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_zero_direction_never_hits() {
        let sphere = unit_sphere_at(Vec3::new(0.0, 0.0, 5.0));
        let ray = Ray::new(Vec3::ZERO, Vec3::ZERO);
        assert!(sphere.intersect(&ray).is_none());
    }
}
