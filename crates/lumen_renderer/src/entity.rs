//! The closed set of intersectable scene entities.

use std::collections::HashMap;
use std::sync::Arc;

use lumen_core::{EntityDescription, Material, SceneError, SceneResult};
use lumen_math::Ray;

use crate::{Hittable, Plane, RayHit, Sphere, Triangle};

/// Any primitive that can appear in a scene.
#[derive(Clone, Debug)]
pub enum SceneEntity {
    Sphere(Sphere),
    Plane(Plane),
    Triangle(Triangle),
}

impl SceneEntity {
    /// Build an entity from its scene-file description, resolving the
    /// material name against `materials`.
    pub fn from_description(
        description: &EntityDescription,
        materials: &HashMap<String, Arc<Material>>,
    ) -> SceneResult<Self> {
        let name = description.material();
        let material = materials
            .get(name)
            .cloned()
            .ok_or_else(|| SceneError::UnknownMaterial(name.to_string()))?;

        Ok(match *description {
            EntityDescription::Sphere { center, radius, .. } => {
                SceneEntity::Sphere(Sphere::new(center, radius, material))
            }
            EntityDescription::Plane { center, normal, .. } => {
                SceneEntity::Plane(Plane::new(center, normal, material))
            }
            EntityDescription::Triangle { v0, v1, v2, .. } => {
                SceneEntity::Triangle(Triangle::new(v0, v1, v2, material))
            }
        })
    }
}

impl Hittable for SceneEntity {
    #[inline]
    fn intersect(&self, ray: &Ray) -> Option<RayHit<'_>> {
        match self {
            SceneEntity::Sphere(sphere) => sphere.intersect(ray),
            SceneEntity::Plane(plane) => plane.intersect(ray),
            SceneEntity::Triangle(triangle) => triangle.intersect(ray),
        }
    }

    fn material(&self) -> &Arc<Material> {
        match self {
            SceneEntity::Sphere(sphere) => sphere.material(),
            SceneEntity::Plane(plane) => plane.material(),
            SceneEntity::Triangle(triangle) => triangle.material(),
        }
    }
}

impl From<Sphere> for SceneEntity {
    fn from(sphere: Sphere) -> Self {
        SceneEntity::Sphere(sphere)
    }
}

impl From<Plane> for SceneEntity {
    fn from(plane: Plane) -> Self {
        SceneEntity::Plane(plane)
    }
}

impl From<Triangle> for SceneEntity {
    fn from(triangle: Triangle) -> Self {
        SceneEntity::Triangle(triangle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lumen_math::Vec3;

    fn materials() -> HashMap<String, Arc<Material>> {
        let mut map = HashMap::new();
        map.insert("grey".to_string(), Arc::new(Material::matte(Vec3::splat(0.5))));
        map
    }

    #[test]
    fn test_from_description_shares_material() {
        let materials = materials();
        let description = EntityDescription::Sphere {
            center: Vec3::new(0.0, 0.0, 5.0),
            radius: 1.0,
            material: "grey".to_string(),
        };

        let entity = SceneEntity::from_description(&description, &materials).unwrap();
        assert!(matches!(entity, SceneEntity::Sphere(_)));
        assert!(Arc::ptr_eq(entity.material(), &materials["grey"]));

        let hit = entity.intersect(&Ray::new(Vec3::ZERO, Vec3::Z)).unwrap();
        assert!((hit.t - 4.0).abs() < 1e-12);
    }

    #[test]
    fn test_from_description_unknown_material() {
        let description = EntityDescription::Plane {
            center: Vec3::ZERO,
            normal: Vec3::Y,
            material: "chrome".to_string(),
        };

        let result = SceneEntity::from_description(&description, &materials());
        assert!(matches!(result, Err(SceneError::UnknownMaterial(name)) if name == "chrome"));
    }

    #[test]
    fn test_dispatch_triangle() {
        let entity: SceneEntity = Triangle::new(
            Vec3::ZERO,
            Vec3::X,
            Vec3::Y,
            Arc::new(Material::default()),
        )
        .into();

        let ray = Ray::new(Vec3::new(0.2, 0.2, 1.0), -Vec3::Z);
        assert!(entity.intersect(&ray).is_some());
    }
}
