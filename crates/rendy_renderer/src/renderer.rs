//! Core ray tracing renderer.
//!
//! Implements the diffuse bounce model with:
//! - Recursive ray tracing with a bounded depth budget
//! - A sky gradient as the only light source
//! - Anti-aliasing via box-filtered multi-sampling
//! - Gamma correction on output

use crate::color::color_to_rgb;
use crate::random::random_in_unit_sphere;
use crate::{Camera, Color, ParamError, PixelSink, Surface};
use rand::RngCore;
use rendy_math::{unit, Interval, Ray, Vec3};

/// Fraction of incoming light every surface reflects per bounce.
pub const REFLECTANCE: f32 = 0.5;

/// Lower bound for accepted hits, keeps scattered rays off their own surface.
const SCENE_T_MIN: f32 = 0.001;

/// Parameters describing one render.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderParams {
    /// Output width in pixels; the height follows from the aspect ratio
    pub image_width: u32,
    /// Width over height
    pub aspect_ratio: f32,
    /// Distance from the eye to the viewport plane
    pub focal_length: f32,
    /// Height of the viewport in scene units
    pub viewport_height: f32,
    /// Eye position
    pub camera_center: Vec3,
    /// Samples per pixel for anti-aliasing
    pub alias_samples: u32,
    /// Maximum ray bounce depth
    pub max_depth: u32,
}

impl Default for RenderParams {
    fn default() -> Self {
        Self {
            image_width: 1920,
            aspect_ratio: 16.0 / 9.0,
            focal_length: 1.0,
            viewport_height: 2.0,
            camera_center: Vec3::ZERO,
            alias_samples: 100,
            max_depth: 50,
        }
    }
}

impl RenderParams {
    /// Check the parameters describe a renderable image.
    pub fn validate(&self) -> Result<(), ParamError> {
        if self.image_width == 0 {
            return Err(ParamError::ZeroWidth);
        }
        if self.alias_samples == 0 {
            return Err(ParamError::ZeroSamples);
        }

        let positives = [
            ("aspect_ratio", self.aspect_ratio),
            ("focal_length", self.focal_length),
            ("viewport_height", self.viewport_height),
        ];
        for (name, value) in positives {
            if !(value.is_finite() && value > 0.0) {
                return Err(ParamError::NonPositive { name, value });
            }
        }

        Ok(())
    }
}

/// Compute the color seen by a ray.
///
/// Hits scatter diffusely around the surface normal and recurse with one
/// less unit of depth; misses see the sky. Running out of depth returns
/// black.
pub fn ray_color(ray: &Ray, world: &dyn Surface, depth: u32, rng: &mut dyn RngCore) -> Color {
    if depth == 0 {
        return Color::ZERO;
    }

    match world.intersect(ray, Interval::new(SCENE_T_MIN, f32::INFINITY)) {
        Some(rec) => {
            let direction = rec.normal + random_in_unit_sphere(rng);
            let scattered = Ray::new(rec.point, direction);
            ray_color(&scattered, world, depth - 1, rng) * REFLECTANCE
        }
        None => sky_gradient(ray),
    }
}

/// Blend from white at the horizon-down to sky blue overhead.
pub fn sky_gradient(ray: &Ray) -> Color {
    let unit_direction = unit(ray.direction());
    let a = 0.5 * (unit_direction.y + 1.0);
    let white = Color::new(1.0, 1.0, 1.0);
    let blue = Color::new(0.5, 0.7, 1.0);
    white * (1.0 - a) + blue * a
}

/// Render a single pixel with multi-sampling.
///
/// Returns the averaged linear color, before gamma correction.
pub fn render_pixel(
    camera: &Camera,
    world: &dyn Surface,
    i: u32,
    j: u32,
    rng: &mut dyn RngCore,
) -> Color {
    let mut pixel_color = Color::ZERO;

    for _ in 0..camera.alias_samples() {
        let ray = camera.get_ray(i, j, rng);
        pixel_color += ray_color(&ray, world, camera.max_depth(), rng);
    }

    // Average the samples
    pixel_color / camera.alias_samples() as f32
}

/// Simple image buffer of linear colors, row-major.
#[derive(Debug, Clone, PartialEq)]
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
            pixels: vec![Color::ZERO; width as usize * height as usize],
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

    /// Emit every pixel, gamma-corrected, to `sink` in row-major order.
    pub fn resolve_into<S: PixelSink + ?Sized>(&self, sink: &mut S) {
        for y in 0..self.height {
            for x in 0..self.width {
                sink.put_pixel(x, y, color_to_rgb(self.get(x, y)));
            }
        }
    }

    /// Convert to packed RGB bytes (for display or saving).
    pub fn to_rgb8(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.pixels.len() * 3);
        for color in &self.pixels {
            bytes.extend_from_slice(&color_to_rgb(*color));
        }
        bytes
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }
}

/// Render the entire scene to an image buffer.
///
/// Single-threaded, row-major, with one generator for the whole image. See
/// [`crate::render_parallel`] for the bucketed multi-threaded path.
pub fn render(camera: &Camera, world: &dyn Surface, rng: &mut dyn RngCore) -> ImageBuffer {
    let mut image = ImageBuffer::new(camera.image_width(), camera.image_height());

    log::info!(
        "Rendering {}x{} @ {} spp, depth {}",
        image.width,
        image.height,
        camera.alias_samples(),
        camera.max_depth()
    );

    for y in 0..camera.image_height() {
        for x in 0..camera.image_width() {
            let color = render_pixel(camera, world, x, y, rng);
            image.set(x, y, color);
        }
    }

    image
}

/// Render the scene straight into a pixel sink, one resolved pixel at a time.
pub fn render_into<S: PixelSink + ?Sized>(
    camera: &Camera,
    world: &dyn Surface,
    rng: &mut dyn RngCore,
    sink: &mut S,
) {
    for y in 0..camera.image_height() {
        for x in 0..camera.image_width() {
            let color = render_pixel(camera, world, x, y, rng);
            sink.put_pixel(x, y, color_to_rgb(color));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Sphere, SurfaceList};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn default_scene() -> SurfaceList {
        let mut world = SurfaceList::new();
        world.add(Box::new(Sphere::new(Vec3::new(0.0, 0.0, -1.0), 0.5)));
        world.add(Box::new(Sphere::new(Vec3::new(0.0, -100.5, -1.0), 100.0)));
        world
    }

    fn small_camera(samples: u32, max_depth: u32) -> Camera {
        Camera::new(&RenderParams {
            image_width: 16,
            alias_samples: samples,
            max_depth,
            ..RenderParams::default()
        })
        .unwrap()
    }

    struct Recorder {
        pixels: Vec<(u32, u32, [u8; 3])>,
    }

    impl PixelSink for Recorder {
        fn put_pixel(&mut self, i: u32, j: u32, rgb: [u8; 3]) {
            self.pixels.push((i, j, rgb));
        }
    }

    #[test]
    fn test_sky_gradient() {
        let up_color = sky_gradient(&Ray::new(Vec3::ZERO, Vec3::new(0.0, 1.0, 0.0)));
        let down_color = sky_gradient(&Ray::new(Vec3::ZERO, Vec3::new(0.0, -3.0, 0.0)));

        assert!((up_color - Color::new(0.5, 0.7, 1.0)).length() < 1e-6);
        assert!((down_color - Color::ONE).length() < 1e-6);
    }

    #[test]
    fn test_horizon_sky_display_value() {
        // Miss ray with direction.y = 0 blends white and sky blue evenly
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0));
        let color = ray_color(&ray, &SurfaceList::new(), 1, &mut StdRng::seed_from_u64(0));

        let expected = Color::ONE * 0.5 + Color::new(0.5, 0.7, 1.0) * 0.5;
        let by_formula = [
            (255.999 * expected.x.sqrt()).floor() as u8,
            (255.999 * expected.y.sqrt()).floor() as u8,
            (255.999 * expected.z.sqrt()).floor() as u8,
        ];

        assert_eq!(color_to_rgb(color), by_formula);
        assert_eq!(color_to_rgb(color), [221, 236, 255]);
    }

    #[test]
    fn test_zero_depth_is_black() {
        let world = default_scene();
        let mut rng = StdRng::seed_from_u64(1);

        let hit = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0));
        let miss = Ray::new(Vec3::ZERO, Vec3::new(0.0, 1.0, 0.0));
        assert!(world.intersect(&hit, Interval::UNIVERSE).is_some());

        assert_eq!(ray_color(&hit, &world, 0, &mut rng), Color::ZERO);
        assert_eq!(ray_color(&miss, &world, 0, &mut rng), Color::ZERO);
    }

    #[test]
    fn test_zero_depth_render_is_black() {
        let camera = small_camera(2, 0);
        let image = render(&camera, &default_scene(), &mut StdRng::seed_from_u64(5));

        assert!(image.pixels.iter().all(|c| *c == Color::ZERO));
        assert!(image.to_rgb8().iter().all(|b| *b == 0));
    }

    #[test]
    fn test_single_bounce_attenuates() {
        let world = default_scene();
        let mut rng = StdRng::seed_from_u64(11);
        let hit = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0));

        // One bounce then depth runs out: absorbed
        assert_eq!(ray_color(&hit, &world, 1, &mut rng), Color::ZERO);

        // Any radiance that gets through is scaled by the reflectance
        for _ in 0..32 {
            let color = ray_color(&hit, &world, 2, &mut rng);
            assert!(color.max_element() <= REFLECTANCE + 1e-6);
        }
    }

    #[test]
    fn test_single_sample_matches_centered_ray() {
        let camera = small_camera(1, 10);
        let world = default_scene();

        for (i, j) in [(0, 0), (8, 4), (15, 8), (7, 6)] {
            let mut a = StdRng::seed_from_u64(77);
            let mut b = StdRng::seed_from_u64(77);

            let sampled = render_pixel(&camera, &world, i, j, &mut a);
            let centered = ray_color(&camera.primary_ray(i, j), &world, 10, &mut b);
            assert_eq!(sampled, centered);
        }
    }

    #[test]
    fn test_render_dimensions_and_content() {
        let camera = small_camera(4, 5);
        let image = render(&camera, &default_scene(), &mut StdRng::seed_from_u64(42));

        assert_eq!(image.width, 16);
        assert_eq!(image.height, 9);
        assert_eq!(image.pixels.len(), 16 * 9);
        assert_eq!(image.to_rgb8().len(), 16 * 9 * 3);

        // Top row sees open sky, never darker than the zenith blue
        let top = image.get(8, 0);
        assert!(top.x >= 0.5 && top.z > 0.99);

        // Center pixel lands on the small sphere and gets attenuated
        let center = image.get(8, 4);
        assert!(center.length() > 0.0);
        assert!(center.max_element() < 0.5 + 1e-6);
    }

    #[test]
    fn test_render_is_reproducible() {
        let camera = small_camera(3, 6);
        let world = default_scene();

        let a = render(&camera, &world, &mut StdRng::seed_from_u64(123));
        let b = render(&camera, &world, &mut StdRng::seed_from_u64(123));
        assert_eq!(a, b);
    }

    #[test]
    fn test_render_into_matches_resolved_buffer() {
        let camera = small_camera(2, 4);
        let world = default_scene();

        let image = render(&camera, &world, &mut StdRng::seed_from_u64(8));
        let mut resolved = Recorder { pixels: Vec::new() };
        image.resolve_into(&mut resolved);

        let mut streamed = Recorder { pixels: Vec::new() };
        render_into(&camera, &world, &mut StdRng::seed_from_u64(8), &mut streamed);

        assert_eq!(resolved.pixels.len(), 16 * 9);
        assert_eq!(resolved.pixels, streamed.pixels);
        assert_eq!(resolved.pixels[0].0, 0);
        assert_eq!(resolved.pixels[16].1, 1);
    }

    #[test]
    fn test_validate_params() {
        assert!(RenderParams::default().validate().is_ok());

        let bad_aspect = RenderParams {
            aspect_ratio: 0.0,
            ..RenderParams::default()
        };
        assert_eq!(
            bad_aspect.validate(),
            Err(ParamError::NonPositive {
                name: "aspect_ratio",
                value: 0.0
            })
        );

        let bad_focal = RenderParams {
            focal_length: f32::NAN,
            ..RenderParams::default()
        };
        assert!(matches!(
            bad_focal.validate(),
            Err(ParamError::NonPositive { name: "focal_length", .. })
        ));
    }
}
