//! Recursive Whitted-style ray tracing.
//!
//! Every ray that hits a surface collects:
//! - Local illumination: ambient plus Phong diffuse/specular per visible light
//! - A mirror-reflected ray, if the material is reflective
//! - A refracted ray (or its total-internal-reflection fallback), if the
//!   material is transmissive
//!
//! Secondary rays recurse with `depth + 1` until `config.max_depth`.
//! Colors are accumulated unclamped; clamping happens once per pixel.

use lumen_core::Color;
use lumen_math::{normalize, reflect, refract, Ray, Refraction};

use crate::{RayHit, RenderConfig, World, SURFACE_BIAS};

/// Compute the color seen along a ray.
pub fn trace_ray(world: &World, ray: &Ray, depth: u32, config: &RenderConfig) -> Color {
    // Past the depth limit rays carry no light
    if depth >= config.max_depth {
        return Color::ZERO;
    }

    let Some(hit) = world.find_closest_intersection(ray) else {
        return config.background;
    };

    let mut color = local_illumination(world, &hit);

    if hit.material.is_reflective() {
        color += reflection_contribution(world, &hit, depth, config);
    }
    if hit.material.is_transmissive() {
        color += refraction_contribution(world, &hit, depth, config);
    }

    color
}

/// Ambient plus diffuse and specular from every light not in shadow.
pub fn local_illumination(world: &World, hit: &RayHit) -> Color {
    let material = hit.material;
    let n = hit.normal;
    let v = -hit.direction;

    let mut color = material.ambient * world.ambient();

    for light in world.lights() {
        let to_light = light.position - hit.position;
        let light_distance = to_light.length();

        if world.is_in_shadow(hit.position, light.position, light_distance, n) {
            continue;
        }

        let l = normalize(to_light);
        let n_dot_l = n.dot(l);

        color += material.diffuse * light.color * n_dot_l.max(0.0);

        if n_dot_l > 0.0 {
            let r = 2.0 * n_dot_l * n - l;
            let highlight = r.dot(v).max(0.0).powf(material.shininess);
            color += material.specular * light.color * highlight;
        }
    }

    color
}

/// Color arriving along the mirror direction, scaled by reflectivity.
pub fn reflection_contribution(
    world: &World,
    hit: &RayHit,
    depth: u32,
    config: &RenderConfig,
) -> Color {
    let d = hit.direction;
    let n = if hit.normal.dot(d) > 0.0 {
        -hit.normal
    } else {
        hit.normal
    };

    let r = reflect(d, n);
    if r.dot(n) < 0.0 {
        return Color::ZERO;
    }

    let reflected = Ray::new(hit.position + n * SURFACE_BIAS, r);
    trace_ray(world, &reflected, depth + 1, config) * hit.material.reflectivity
}

/// Color arriving through the surface, scaled by transmissivity.
///
/// Entering a front face goes from air into the material; hitting a back
/// face leaves the material into air. The hit normal always faces the
/// incoming ray, so it is the normal Snell's law needs on both sides.
/// When no transmitted direction exists the mirror direction is traced
/// instead.
pub fn refraction_contribution(
    world: &World,
    hit: &RayHit,
    depth: u32,
    config: &RenderConfig,
) -> Color {
    let material = hit.material;
    let d = hit.direction;
    let n = hit.normal;

    let (n1, n2) = if hit.front_face {
        (1.0, material.refractive_index)
    } else {
        (material.refractive_index, 1.0)
    };

    let secondary = match refract(d, n, n1 / n2) {
        Refraction::Transmitted(t) => Ray::new(hit.position - n * SURFACE_BIAS, t),
        Refraction::TotalInternalReflection => {
            Ray::new(hit.position + n * SURFACE_BIAS, reflect(d, n))
        }
    };

    trace_ray(world, &secondary, depth + 1, config) * material.transmissivity
}
