//! JSON scene descriptions.
//!
//! A scene file names its materials once and lets entities refer to them
//! by name. Loading parses and validates the file; turning the description
//! into intersectable geometry is the renderer's job.

use std::collections::BTreeMap;
use std::path::Path;

use lumen_math::Vec3;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{Color, Material, PointLight};

/// Errors that can occur while loading a scene file.
#[derive(Error, Debug)]
pub enum SceneError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unknown material: {0}")]
    UnknownMaterial(String),

    #[error("Invalid material {name}: {reason}")]
    InvalidMaterial { name: String, reason: String },

    #[error("Invalid image size {width}x{height}")]
    InvalidImageSize { width: u32, height: u32 },

    #[error("Invalid field of view {0} degrees, expected (0, 180)")]
    InvalidFov(f64),

    #[error("Max depth {0} exceeds the limit of {}", MAX_DEPTH)]
    InvalidMaxDepth(u32),
}

/// Upper bound on the recursion depth a scene may request.
pub const MAX_DEPTH: u32 = 8;

/// Result type for scene loading.
pub type SceneResult<T> = Result<T, SceneError>;

/// Pinhole camera settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraSettings {
    /// Horizontal field of view in degrees
    pub fov: f64,
}

impl Default for CameraSettings {
    fn default() -> Self {
        Self { fov: 60.0 }
    }
}

/// Output image dimensions.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImageSettings {
    pub width: u32,
    pub height: u32,
}

impl Default for ImageSettings {
    fn default() -> Self {
        Self {
            width: 640,
            height: 480,
        }
    }
}

/// Tracer settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderSettings {
    /// Rays at this recursion depth return black
    pub max_depth: u32,

    /// Edge length of the square tiles rendered in parallel
    pub bucket_size: u32,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            max_depth: MAX_DEPTH,
            bucket_size: 64,
        }
    }
}

/// A geometric entity as written in a scene file.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum EntityDescription {
    Sphere {
        center: Vec3,
        radius: f64,
        material: String,
    },
    Plane {
        center: Vec3,
        normal: Vec3,
        material: String,
    },
    Triangle {
        v0: Vec3,
        v1: Vec3,
        v2: Vec3,
        material: String,
    },
}

impl EntityDescription {
    /// Name of the material this entity refers to.
    pub fn material(&self) -> &str {
        match self {
            EntityDescription::Sphere { material, .. }
            | EntityDescription::Plane { material, .. }
            | EntityDescription::Triangle { material, .. } => material,
        }
    }
}

/// A complete scene: geometry, lights, ambient light, camera and output.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneDescription {
    /// Ambient light color
    pub ambient: Color,

    pub camera: CameraSettings,

    pub image: ImageSettings,

    pub render: RenderSettings,

    /// Named materials referenced by entities
    pub materials: BTreeMap<String, Material>,

    pub entities: Vec<EntityDescription>,

    pub lights: Vec<PointLight>,
}

impl SceneDescription {
    /// Check every reference and parameter range in the description.
    pub fn validate(&self) -> SceneResult<()> {
        let ImageSettings { width, height } = self.image;
        if width == 0 || height == 0 {
            return Err(SceneError::InvalidImageSize { width, height });
        }

        let fov = self.camera.fov;
        if !(fov > 0.0 && fov < 180.0) {
            return Err(SceneError::InvalidFov(fov));
        }

        if self.render.max_depth > MAX_DEPTH {
            return Err(SceneError::InvalidMaxDepth(self.render.max_depth));
        }

        for (name, material) in &self.materials {
            if let Some(reason) = material.check() {
                return Err(SceneError::InvalidMaterial {
                    name: name.clone(),
                    reason,
                });
            }
        }

        for entity in &self.entities {
            let name = entity.material();
            if !self.materials.contains_key(name) {
                return Err(SceneError::UnknownMaterial(name.to_string()));
            }

            // Degenerate geometry is accepted; it simply never gets hit.
            match entity {
                EntityDescription::Sphere { radius, .. } if *radius <= 0.0 => {
                    log::warn!("Sphere with non-positive radius {}", radius);
                }
                EntityDescription::Plane { normal, .. } if normal.length_squared() == 0.0 => {
                    log::warn!("Plane with zero-length normal");
                }
                EntityDescription::Triangle { v0, v1, v2, .. }
                    if (*v1 - *v0).cross(*v2 - *v0).length_squared() == 0.0 =>
                {
                    log::warn!("Degenerate triangle {} {} {}", v0, v1, v2);
                }
                _ => {}
            }
        }

        if self.lights.is_empty() {
            log::warn!("Scene has no lights; only ambient and reflected light will show");
        }

        Ok(())
    }
}

/// Load and validate a scene file.
pub fn load_scene<P: AsRef<Path>>(path: P) -> SceneResult<SceneDescription> {
    let path = path.as_ref();
    let contents = std::fs::read_to_string(path)?;
    let scene = load_scene_from_str(&contents)?;

    log::info!(
        "Loaded {}: {} entities, {} lights, {} materials",
        path.display(),
        scene.entities.len(),
        scene.lights.len(),
        scene.materials.len()
    );

    Ok(scene)
}

/// Parse and validate a scene from a JSON string.
pub fn load_scene_from_str(json: &str) -> SceneResult<SceneDescription> {
    let scene: SceneDescription = serde_json::from_str(json)?;
    scene.validate()?;
    Ok(scene)
}
