//! Infinite plane primitive.

use std::sync::Arc;

use lumen_core::Material;
use lumen_math::{normalize, Ray, Vec3};

use crate::{Hittable, RayHit, HIT_EPSILON, PARALLEL_EPSILON};

/// An infinite plane through `center` with unit `normal`.
///
/// The plane is two-sided: hits from behind report the flipped normal.
#[derive(Clone, Debug)]
pub struct Plane {
    center: Vec3,
    normal: Vec3,
    material: Arc<Material>,
}

impl Plane {
    /// Create a new plane. The normal is normalized here.
    pub fn new(center: Vec3, normal: Vec3, material: Arc<Material>) -> Self {
        Self {
            center,
            normal: normalize(normal),
            material,
        }
    }

    pub fn normal(&self) -> Vec3 {
        self.normal
    }
}

impl Hittable for Plane {
    fn intersect(&self, ray: &Ray) -> Option<RayHit<'_>> {
        let denom = ray.direction().dot(self.normal);

        // Ray is parallel to the plane
        if denom.abs() < PARALLEL_EPSILON {
            return None;
        }

        let t = (self.center - ray.origin()).dot(self.normal) / denom;
        if t <= HIT_EPSILON {
            return None;
        }

        Some(RayHit::new(ray, t, self.normal, &self.material))
    }

    fn material(&self) -> &Arc<Material> {
        &self.material
    }
}
