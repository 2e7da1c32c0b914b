//! Bucket-based tile rendering.
//!
//! Divides the image into tiles (buckets) that are rendered independently
//! and in parallel using rayon. Each bucket owns a generator seeded from the
//! render seed and the bucket origin, so the result does not depend on
//! which thread picks up which bucket.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Instant;

use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use rayon::prelude::*;

use crate::renderer::render_pixel;
use crate::{Camera, Color, ImageBuffer, Surface};

/// A rectangular region of the image to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bucket {
    /// X coordinate of bucket's top-left corner
    pub x: u32,
    /// Y coordinate of bucket's top-left corner
    pub y: u32,
    /// Width of the bucket in pixels
    pub width: u32,
    /// Height of the bucket in pixels
    pub height: u32,
    /// Index of this bucket in the render order
    pub index: usize,
}

impl Bucket {
    /// Create a new bucket.
    pub fn new(x: u32, y: u32, width: u32, height: u32, index: usize) -> Self {
        Self {
            x,
            y,
            width,
            height,
            index,
        }
    }

    /// Get the total number of pixels in this bucket.
    pub fn pixel_count(&self) -> u32 {
        self.width * self.height
    }

    /// Generator seed for this bucket, stable across bucket orderings.
    fn seed(&self, render_seed: u64, image_width: u32) -> u64 {
        let origin = self.y as u64 * image_width as u64 + self.x as u64;
        render_seed ^ origin.wrapping_mul(0x9E37_79B9_7F4A_7C15)
    }
}

/// Default bucket size in pixels.
pub const DEFAULT_BUCKET_SIZE: u32 = 64;

/// Generate buckets for an image, sorted center-out.
///
/// Buckets nearest the image center come first, so progress logs and any
/// partial output cover the middle of the frame early.
pub fn generate_buckets(width: u32, height: u32, bucket_size: u32) -> Vec<Bucket> {
    let bucket_size = bucket_size.max(1);
    let mut buckets = Vec::new();
    let mut index = 0;

    let mut y = 0;
    while y < height {
        let mut x = 0;
        while x < width {
            let bw = bucket_size.min(width - x);
            let bh = bucket_size.min(height - y);
            buckets.push(Bucket::new(x, y, bw, bh, index));
            index += 1;
            x += bucket_size;
        }
        y += bucket_size;
    }

    sort_center_out(&mut buckets, width, height);

    // Update indices after sorting
    for (i, bucket) in buckets.iter_mut().enumerate() {
        bucket.index = i;
    }

    buckets
}

/// Sort buckets by distance from image center.
fn sort_center_out(buckets: &mut [Bucket], width: u32, height: u32) {
    let center_x = width as f32 / 2.0;
    let center_y = height as f32 / 2.0;

    let distance = |b: &Bucket| {
        let bx = b.x as f32 + b.width as f32 / 2.0;
        let by = b.y as f32 + b.height as f32 / 2.0;
        (bx - center_x).powi(2) + (by - center_y).powi(2)
    };

    // Stable sort keeps row-major order among equidistant buckets
    buckets.sort_by(|a, b| distance(a).total_cmp(&distance(b)));
}

/// Render a single bucket to a vector of colors.
///
/// Returns linear pixels in row-major order within the bucket.
pub fn render_bucket(
    bucket: &Bucket,
    camera: &Camera,
    world: &dyn Surface,
    rng: &mut dyn RngCore,
) -> Vec<Color> {
    let mut pixels = Vec::with_capacity(bucket.pixel_count() as usize);

    for local_y in 0..bucket.height {
        for local_x in 0..bucket.width {
            let global_x = bucket.x + local_x;
            let global_y = bucket.y + local_y;
            pixels.push(render_pixel(camera, world, global_x, global_y, rng));
        }
    }

    pixels
}

/// Result of rendering a bucket.
#[derive(Debug, Clone)]
pub struct BucketResult {
    /// The bucket that was rendered
    pub bucket: Bucket,
    /// Pixel colors in row-major order
    pub pixels: Vec<Color>,
}

impl BucketResult {
    /// Create a new bucket result.
    pub fn new(bucket: Bucket, pixels: Vec<Color>) -> Self {
        Self { bucket, pixels }
    }

    /// Copy the bucket's pixels into their place in the full image.
    pub fn write_into(&self, image: &mut ImageBuffer) {
        let mut pixels = self.pixels.iter();
        for local_y in 0..self.bucket.height {
            for local_x in 0..self.bucket.width {
                if let Some(color) = pixels.next() {
                    image.set(self.bucket.x + local_x, self.bucket.y + local_y, *color);
                }
            }
        }
    }
}

/// Render the entire scene on the rayon pool.
///
/// Output is deterministic for a given `seed` and `bucket_size`.
pub fn render_parallel(
    camera: &Camera,
    world: &dyn Surface,
    seed: u64,
    bucket_size: u32,
) -> ImageBuffer {
    let width = camera.image_width();
    let height = camera.image_height();
    let buckets = generate_buckets(width, height, bucket_size);
    let total = buckets.len();
    let completed = AtomicUsize::new(0);
    let start = Instant::now();

    log::info!(
        "Rendering {}x{} @ {} spp, depth {} in {} buckets on {} threads",
        width,
        height,
        camera.alias_samples(),
        camera.max_depth(),
        total,
        rayon::current_num_threads()
    );

    let results: Vec<BucketResult> = buckets
        .par_iter()
        .map(|bucket| {
            let mut rng = StdRng::seed_from_u64(bucket.seed(seed, width));
            let pixels = render_bucket(bucket, camera, world, &mut rng);

            let done = completed.fetch_add(1, Ordering::Relaxed) + 1;
            log::debug!(
                "Bucket {} at ({}, {}) finished, {}/{}",
                bucket.index,
                bucket.x,
                bucket.y,
                done,
                total
            );

            BucketResult::new(*bucket, pixels)
        })
        .collect();

    let mut image = ImageBuffer::new(width, height);
    for result in &results {
        result.write_into(&mut image);
    }

    log::info!("Rendered in {:?}", start.elapsed());
    image
}
