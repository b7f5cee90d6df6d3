//! The renderable world: entities, lights and ambient light.
//!
//! A `World` is built once and only read while rendering, so it can be
//! shared across worker threads by reference.

use std::collections::HashMap;
use std::sync::Arc;

use lumen_core::{Color, PointLight, SceneDescription, SceneResult};
use lumen_math::{normalize, Ray, Vec3};

use crate::{Hittable, RayHit, SceneEntity, HIT_EPSILON, SHADOW_BIAS, SHADOW_SLACK};

/// Scene geometry and lighting as seen by the tracer.
#[derive(Clone, Debug, Default)]
pub struct World {
    entities: Vec<SceneEntity>,
    lights: Vec<PointLight>,
    ambient: Color,
}

impl World {
    /// Create an empty world lit only by `ambient`.
    pub fn new(ambient: Color) -> Self {
        Self {
            entities: Vec::new(),
            lights: Vec::new(),
            ambient,
        }
    }

    /// Build a world from a loaded scene description.
    pub fn from_description(scene: &SceneDescription) -> SceneResult<Self> {
        let materials: HashMap<String, Arc<_>> = scene
            .materials
            .iter()
            .map(|(name, material)| (name.clone(), Arc::new(material.clone())))
            .collect();

        let entities = scene
            .entities
            .iter()
            .map(|description| SceneEntity::from_description(description, &materials))
            .collect::<SceneResult<Vec<_>>>()?;

        log::info!(
            "Built world: {} entities, {} lights",
            entities.len(),
            scene.lights.len()
        );

        Ok(Self {
            entities,
            lights: scene.lights.clone(),
            ambient: scene.ambient,
        })
    }

    /// Add an entity.
    pub fn add(&mut self, entity: impl Into<SceneEntity>) {
        self.entities.push(entity.into());
    }

    /// Add a point light.
    pub fn add_light(&mut self, light: PointLight) {
        self.lights.push(light);
    }

    pub fn entities(&self) -> &[SceneEntity] {
        &self.entities
    }

    pub fn lights(&self) -> &[PointLight] {
        &self.lights
    }

    pub fn ambient(&self) -> Color {
        self.ambient
    }

    /// Get the number of entities.
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    /// Check if the world has no entities.
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Closest hit along `ray` over all entities.
    ///
    /// Hits closer to the ray origin than [`HIT_EPSILON`] are discarded.
    /// On equal distances the first entity wins.
    pub fn find_closest_intersection(&self, ray: &Ray) -> Option<RayHit<'_>> {
        let mut closest: Option<(f64, RayHit<'_>)> = None;

        for entity in &self.entities {
            let Some(hit) = entity.intersect(ray) else {
                continue;
            };

            let distance = (hit.position - ray.origin()).length();
            if distance <= HIT_EPSILON {
                continue;
            }

            match &closest {
                Some((best, _)) if *best <= distance => {}
                _ => closest = Some((distance, hit)),
            }
        }

        closest.map(|(_, hit)| hit)
    }

    /// Whether `light_position` is hidden from `hit_point`.
    ///
    /// Surfaces facing away from the light are in shadow without casting a
    /// ray. Otherwise a shadow ray leaves the surface along `normal` and any
    /// entity hit before the light occludes it.
    pub fn is_in_shadow(
        &self,
        hit_point: Vec3,
        light_position: Vec3,
        light_distance: f64,
        normal: Vec3,
    ) -> bool {
        let light_dir = normalize(light_position - hit_point);
        if normal.dot(light_dir) <= 0.0 {
            return true;
        }

        let shadow_ray = Ray::new(hit_point + normal * SHADOW_BIAS, light_dir);
        let max_distance = light_distance - SHADOW_BIAS * SHADOW_SLACK;

        self.entities.iter().any(|entity| {
            entity
                .intersect(&shadow_ray)
                .is_some_and(|hit| (hit.position - shadow_ray.origin()).length() < max_distance)
        })
    }
}
