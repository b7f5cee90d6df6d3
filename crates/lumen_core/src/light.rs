//! Point light sources.

use lumen_math::Vec3;
use serde::{Deserialize, Serialize};

use crate::Color;

/// An omnidirectional light at a point.
///
/// Light is not attenuated with distance.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PointLight {
    /// World-space position
    pub position: Vec3,

    /// Emitted color (RGB, may exceed 1)
    pub color: Color,
}

impl PointLight {
    pub fn new(position: Vec3, color: Color) -> Self {
        Self { position, color }
    }
}

impl Default for PointLight {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            color: Color::ONE,
        }
    }
}
