//! Phong-style surface materials.

use lumen_math::{Interval, Vec3};
use serde::{Deserialize, Serialize};

/// Color type alias (RGB values typically 0-1, unclamped while accumulating)
pub type Color = Vec3;

/// Reflectivity or transmissivity at or below this is treated as absent.
pub const CONTRIBUTION_THRESHOLD: f64 = 0.01;

/// Surface material for local and global illumination.
///
/// Shared between surfaces through `Arc` and never mutated during a render.
/// Reflectivity and transmissivity are independent weights; they are not
/// required to sum to at most one.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Material {
    /// Color multiplied with the scene ambient light
    pub ambient: Color,

    /// Lambertian color, scaled by N.L per light
    pub diffuse: Color,

    /// Highlight color, scaled by (R.V)^shininess per light
    pub specular: Color,

    /// Phong exponent (>= 0)
    pub shininess: f64,

    /// Weight of the mirror-reflected ray (0-1)
    pub reflectivity: f64,

    /// Weight of the refracted ray (0-1)
    pub transmissivity: f64,

    /// Index of refraction (1.0 = air, 1.5 = glass, 2.4 = diamond)
    pub refractive_index: f64,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            ambient: Color::ZERO,
            diffuse: Color::ZERO,
            specular: Color::ZERO,
            shininess: 0.0,
            reflectivity: 0.0,
            transmissivity: 0.0,
            refractive_index: 1.0,
        }
    }
}

impl Material {
    /// A matte material with the same color for its ambient and diffuse terms.
    pub fn matte(color: Color) -> Self {
        Self {
            ambient: color,
            diffuse: color,
            ..Default::default()
        }
    }

    /// A perfect mirror with no local shading.
    pub fn mirror() -> Self {
        Self {
            reflectivity: 1.0,
            ..Default::default()
        }
    }

    /// A clear dielectric with no local shading.
    pub fn glass(refractive_index: f64) -> Self {
        Self {
            transmissivity: 1.0,
            refractive_index,
            ..Default::default()
        }
    }

    /// Set the specular color and exponent.
    pub fn with_specular(mut self, specular: Color, shininess: f64) -> Self {
        self.specular = specular;
        self.shininess = shininess;
        self
    }

    /// Set the reflectivity.
    pub fn with_reflectivity(mut self, reflectivity: f64) -> Self {
        self.reflectivity = reflectivity;
        self
    }

    /// Set the transmissivity and refractive index.
    pub fn with_transmission(mut self, transmissivity: f64, refractive_index: f64) -> Self {
        self.transmissivity = transmissivity;
        self.refractive_index = refractive_index;
        self
    }

    /// Whether a reflected ray should be traced for this material.
    #[inline]
    pub fn is_reflective(&self) -> bool {
        self.reflectivity > CONTRIBUTION_THRESHOLD
    }

    /// Whether a refracted ray should be traced for this material.
    #[inline]
    pub fn is_transmissive(&self) -> bool {
        self.transmissivity > CONTRIBUTION_THRESHOLD
    }

    /// Describe the first out-of-range parameter, if any.
    pub fn check(&self) -> Option<String> {
        if !Interval::UNIT.contains(self.reflectivity) {
            return Some(format!("reflectivity {} outside [0, 1]", self.reflectivity));
        }
        if !Interval::UNIT.contains(self.transmissivity) {
            return Some(format!(
                "transmissivity {} outside [0, 1]",
                self.transmissivity
            ));
        }
        if !(self.refractive_index > 0.0) {
            return Some(format!(
                "refractive index {} must be positive",
                self.refractive_index
            ));
        }
        if !(self.shininess >= 0.0) {
            return Some(format!("shininess {} must be >= 0", self.shininess));
        }
        None
    }
}
