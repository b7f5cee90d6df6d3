//! Pinhole camera for primary ray generation.
//!
//! The eye sits at the origin looking down +Z with +Y up. The image plane
//! is at `focal_distance` and spans the horizontal field of view.

use lumen_math::{Ray, Vec3};

/// Default horizontal field of view in degrees.
pub const DEFAULT_FOV: f64 = 60.0;

/// Camera for generating primary rays, one per pixel center.
#[derive(Debug, Clone)]
pub struct Camera {
    // Image settings
    pub image_width: u32,
    pub image_height: u32,

    /// Horizontal field of view in degrees
    fov: f64,

    // Derived projection values
    focal_distance: f64,
    half_width: f64,
    half_height: f64,
}

impl Camera {
    /// Create a camera for an image of the given size.
    pub fn new(image_width: u32, image_height: u32) -> Self {
        let mut camera = Self {
            image_width,
            image_height,
            fov: DEFAULT_FOV,
            focal_distance: 1.0,
            half_width: 0.0,
            half_height: 0.0,
        };
        camera.update_projection();
        camera
    }

    /// Set image resolution.
    pub fn with_resolution(mut self, width: u32, height: u32) -> Self {
        self.image_width = width;
        self.image_height = height;
        self.update_projection();
        self
    }

    /// Set the horizontal field of view in degrees.
    pub fn with_fov(mut self, fov: f64) -> Self {
        self.fov = fov;
        self.update_projection();
        self
    }

    pub fn fov(&self) -> f64 {
        self.fov
    }

    /// Half extents of the image plane at the focal distance.
    pub fn half_extents(&self) -> (f64, f64) {
        (self.half_width, self.half_height)
    }

    fn update_projection(&mut self) {
        self.half_width = self.focal_distance * (self.fov.to_radians() / 2.0).tan();
        let aspect = self.image_height as f64 / self.image_width.max(1) as f64;
        self.half_height = self.half_width * aspect;
    }

    /// Generate the primary ray through the center of pixel (x, y).
    ///
    /// Row 0 is the top of the image.
    pub fn get_ray(&self, x: u32, y: u32) -> Ray {
        let u = (x as f64 + 0.5) / self.image_width as f64;
        let v = (y as f64 + 0.5) / self.image_height as f64;

        let sx = (2.0 * u - 1.0) * self.half_width;
        let sy = (1.0 - 2.0 * v) * self.half_height;

        Ray::new(Vec3::ZERO, Vec3::new(sx, sy, self.focal_distance))
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(640, 480)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_center_ray_points_forward() {
        let camera = Camera::new(3, 3);
        let ray = camera.get_ray(1, 1);

        assert_eq!(ray.origin(), Vec3::ZERO);
        assert!((ray.direction() - Vec3::Z).length() < 1e-12);
    }

    #[test]
    fn test_half_extents_follow_aspect() {
        let camera = Camera::new(200, 100);
        let (half_width, half_height) = camera.half_extents();

        assert!((half_width - (30.0f64).to_radians().tan()).abs() < 1e-12);
        assert!((half_height - half_width / 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_corner_rays() {
        let camera = Camera::new(2, 2);

        // Top-left pixel looks up and left, bottom-right down and right
        let top_left = camera.get_ray(0, 0).direction();
        assert!(top_left.x < 0.0 && top_left.y > 0.0 && top_left.z > 0.0);

        let bottom_right = camera.get_ray(1, 1).direction();
        assert!(bottom_right.x > 0.0 && bottom_right.y < 0.0);
        assert!((top_left.x + bottom_right.x).abs() < 1e-12);
    }

    #[test]
    fn test_horizontal_fov() {
        let camera = Camera::new(10_000, 10).with_fov(90.0);

        // The outermost pixel center sits almost at the 45 degree edge
        let edge = camera.get_ray(9_999, 5).direction();
        let angle = edge.x.atan2(edge.z).to_degrees();
        assert!((angle - 45.0).abs() < 0.01);
        assert_eq!(camera.fov(), 90.0);
    }

    #[test]
    fn test_primary_rays_are_unit_length() {
        let camera = Camera::new(16, 9);
        for (x, y) in [(0, 0), (15, 0), (7, 4), (15, 8)] {
            assert!((camera.get_ray(x, y).direction().length() - 1.0).abs() < 1e-12);
        }
    }
}
