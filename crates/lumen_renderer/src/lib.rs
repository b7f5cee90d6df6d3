//! Lumen Renderer - CPU Whitted-style ray tracing
//!
//! Recursive ray tracer with Phong local illumination, hard shadows,
//! mirror reflection and dielectric refraction, bounded by a fixed
//! recursion depth. Geometry is scanned linearly; there is no
//! acceleration structure.

mod bucket;
mod camera;
mod entity;
mod hit;
mod plane;
mod renderer;
mod sphere;
mod tracer;
mod triangle;
mod world;

pub use bucket::{generate_buckets, render_bucket, Bucket, BucketResult, DEFAULT_BUCKET_SIZE};
pub use camera::{Camera, DEFAULT_FOV};
pub use entity::SceneEntity;
pub use hit::{Hittable, RayHit};
pub use plane::Plane;
pub use renderer::{
    clamp_color, color_to_rgba, render, render_pixel, render_with_cancel, ImageBuffer, RenderConfig,
    RenderError,
};
pub use sphere::Sphere;
pub use tracer::{local_illumination, reflection_contribution, refraction_contribution, trace_ray};
pub use triangle::Triangle;
pub use world::World;

pub use lumen_core::{Color, Material, PointLight};
pub use lumen_math::{Interval, Ray, Vec3};

/// Intersections at or below this ray parameter are ignored.
pub const HIT_EPSILON: f64 = 1e-9;

/// Rays whose direction is this close to perpendicular with a surface
/// normal are treated as parallel to the surface.
pub const PARALLEL_EPSILON: f64 = 1e-8;

/// Offset along the normal for reflected and refracted ray origins.
pub const SURFACE_BIAS: f64 = 1e-6;

/// Offset along the normal for shadow ray origins.
pub const SHADOW_BIAS: f64 = 1e-6;

/// Occluders within `SHADOW_BIAS * SHADOW_SLACK` of the light are ignored.
pub const SHADOW_SLACK: f64 = 10.0;

/// Recursion depth at which rays stop contributing.
pub use lumen_core::MAX_DEPTH;
