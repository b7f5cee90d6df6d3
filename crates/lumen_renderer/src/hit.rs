//! Hittable trait and RayHit for ray-object intersection.

use std::sync::Arc;

use lumen_core::Material;
use lumen_math::{normalize, Ray, Vec3};

/// Record of a ray-object intersection.
#[derive(Clone, Debug)]
pub struct RayHit<'a> {
    /// Point of intersection
    pub position: Vec3,
    /// Parameter t where the intersection occurs
    pub t: f64,
    /// Unit surface normal at intersection (always points against the ray)
    pub normal: Vec3,
    /// Direction of the incoming ray
    pub direction: Vec3,
    /// Whether the ray struck the side the geometric normal points to
    pub front_face: bool,
    /// Material at the intersection point
    pub material: &'a Material,
}

impl<'a> RayHit<'a> {
    /// Build a hit from the geometric normal of the struck surface.
    ///
    /// The stored normal is flipped if needed so that it opposes the ray,
    /// and `front_face` records whether a flip happened.
    pub fn new(ray: &Ray, t: f64, geometric_normal: Vec3, material: &'a Material) -> Self {
        let geometric_normal = normalize(geometric_normal);
        let front_face = ray.direction().dot(geometric_normal) <= 0.0;

        Self {
            position: ray.at(t),
            t,
            normal: if front_face {
                geometric_normal
            } else {
                -geometric_normal
            },
            direction: ray.direction(),
            front_face,
            material,
        }
    }
}

/// Trait for primitives that can be hit by rays.
pub trait Hittable: Send + Sync {
    /// Nearest intersection with a ray parameter greater than
    /// [`HIT_EPSILON`](crate::HIT_EPSILON), if any.
    fn intersect(&self, ray: &Ray) -> Option<RayHit<'_>>;

    /// The material shading this primitive.
    fn material(&self) -> &Arc<Material>;
}
