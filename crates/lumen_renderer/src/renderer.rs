//! Image rendering.
//!
//! One primary ray per pixel center, traced with [`trace_ray`] and clamped
//! to [0, 1] before it is stored. Buckets are rendered in parallel with
//! rayon; the world is only read, so no locking is needed.

use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Instant;

use lumen_core::{Color, RenderSettings};
use lumen_math::Interval;
use rayon::prelude::*;
use thiserror::Error;

use crate::bucket::{generate_buckets, render_bucket, BucketResult, DEFAULT_BUCKET_SIZE};
use crate::{trace_ray, Camera, World, MAX_DEPTH};

/// Errors reported by the renderer.
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Render cancelled")]
    Cancelled,

    #[error("Image buffer size does not match {width}x{height}")]
    ImageSize { width: u32, height: u32 },
}

/// Render configuration.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Rays at this recursion depth return black. Tracing recurses once per
    /// level, so keep this at or below [`MAX_DEPTH`].
    pub max_depth: u32,
    /// Background color when ray doesn't hit anything
    pub background: Color,
    /// Bucket edge length in pixels
    pub bucket_size: u32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            max_depth: MAX_DEPTH,
            background: Color::ZERO,
            bucket_size: DEFAULT_BUCKET_SIZE,
        }
    }
}

impl From<&RenderSettings> for RenderConfig {
    fn from(settings: &RenderSettings) -> Self {
        Self {
            max_depth: settings.max_depth.min(MAX_DEPTH),
            bucket_size: settings.bucket_size.max(1),
            ..Default::default()
        }
    }
}

/// Clamp every channel of a color to [0, 1].
#[inline]
pub fn clamp_color(color: Color) -> Color {
    Color::new(
        Interval::UNIT.clamp(color.x),
        Interval::UNIT.clamp(color.y),
        Interval::UNIT.clamp(color.z),
    )
}

/// Convert a color to 8-bit RGBA.
pub fn color_to_rgba(color: Color) -> [u8; 4] {
    let c = clamp_color(color);
    let r = (255.0 * c.x).round() as u8;
    let g = (255.0 * c.y).round() as u8;
    let b = (255.0 * c.z).round() as u8;
    [r, g, b, 255]
}

/// Render a single pixel. The result is clamped to [0, 1].
pub fn render_pixel(camera: &Camera, world: &World, x: u32, y: u32, config: &RenderConfig) -> Color {
    let ray = camera.get_ray(x, y);
    clamp_color(trace_ray(world, &ray, 0, config))
}

/// Image buffer for storing render output.
#[derive(Debug, Clone)]
pub struct ImageBuffer {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<Color>,
}

impl ImageBuffer {
    /// Create a new image buffer filled with black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Color::ZERO; (width as usize) * (height as usize)],
        }
    }

    /// Get the pixel at (x, y).
    pub fn get(&self, x: u32, y: u32) -> Color {
        self.pixels[self.index(x, y)]
    }

    /// Set the pixel at (x, y).
    pub fn set(&mut self, x: u32, y: u32, color: Color) {
        let index = self.index(x, y);
        self.pixels[index] = color;
    }

    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    /// Copy a rendered bucket into place.
    pub fn write_bucket(&mut self, result: &BucketResult) {
        let bucket = &result.bucket;
        for (i, color) in result.pixels.iter().enumerate() {
            let local_x = i as u32 % bucket.width;
            let local_y = i as u32 / bucket.width;
            self.set(bucket.x + local_x, bucket.y + local_y, *color);
        }
    }

    /// Convert to RGBA bytes (for display or saving).
    pub fn to_rgba(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.pixels.len() * 4);
        for color in &self.pixels {
            bytes.extend_from_slice(&color_to_rgba(*color));
        }
        bytes
    }

    /// Convert to an `image` crate buffer for encoding.
    pub fn to_image(&self) -> Result<image::RgbaImage, RenderError> {
        image::RgbaImage::from_raw(self.width, self.height, self.to_rgba()).ok_or(
            RenderError::ImageSize {
                width: self.width,
                height: self.height,
            },
        )
    }
}

/// Render the entire image, buckets in parallel.
pub fn render(camera: &Camera, world: &World, config: &RenderConfig) -> ImageBuffer {
    render_buckets(camera, world, config, None)
        .unwrap_or_else(|| ImageBuffer::new(camera.image_width, camera.image_height))
}

/// Render the entire image, stopping early once `cancel` is set.
///
/// The flag is checked before each bucket starts; buckets already in
/// flight finish before the render returns [`RenderError::Cancelled`].
/// The `lumen` binary always renders to completion; this entry point is
/// for embedders that need to abort a render.
pub fn render_with_cancel(
    camera: &Camera,
    world: &World,
    config: &RenderConfig,
    cancel: &AtomicBool,
) -> Result<ImageBuffer, RenderError> {
    render_buckets(camera, world, config, Some(cancel)).ok_or(RenderError::Cancelled)
}

/// Shared bucket loop. Returns `None` only when `cancel` was set.
fn render_buckets(
    camera: &Camera,
    world: &World,
    config: &RenderConfig,
    cancel: Option<&AtomicBool>,
) -> Option<ImageBuffer> {
    let start = Instant::now();
    let buckets = generate_buckets(camera.image_width, camera.image_height, config.bucket_size);

    let results: Option<Vec<BucketResult>> = buckets
        .par_iter()
        .map(|bucket| {
            if cancel.is_some_and(|flag| flag.load(Ordering::Relaxed)) {
                return None;
            }
            Some(BucketResult::new(
                *bucket,
                render_bucket(bucket, camera, world, config),
            ))
        })
        .collect();

    let Some(results) = results else {
        log::info!("Render cancelled after {:?}", start.elapsed());
        return None;
    };

    log::info!(
        "Rendered {}x{} in {} buckets, {:?}",
        camera.image_width,
        camera.image_height,
        results.len(),
        start.elapsed()
    );
    Some(assemble(camera, &results))
}

fn assemble(camera: &Camera, results: &[BucketResult]) -> ImageBuffer {
    let mut image = ImageBuffer::new(camera.image_width, camera.image_height);
    for result in results {
        image.write_bucket(result);
    }
    image
}
