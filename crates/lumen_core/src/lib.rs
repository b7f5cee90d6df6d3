//! Lumen Core - scene data for the Whitted ray tracer.
//!
//! This crate provides:
//!
//! - **Shading data**: `Material`, `PointLight`, `Color`
//! - **Scene files**: JSON scene descriptions and their loader
//!
//! # Example
//!
//! ```ignore
//! use lumen_core::load_scene;
//!
//! let scene = load_scene("scenes/whitted.json")?;
//! println!("Loaded {} entities, {} lights",
//!     scene.entities.len(),
//!     scene.lights.len());
//! ```

pub mod light;
pub mod material;
pub mod scene;

pub use light::PointLight;
pub use material::{Color, Material};
pub use scene::{
    load_scene, load_scene_from_str, CameraSettings, EntityDescription, ImageSettings,
    RenderSettings, SceneDescription, SceneError, SceneResult, MAX_DEPTH,
};
