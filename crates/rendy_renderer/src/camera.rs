//! Camera for ray generation.

use crate::random::sample_square;
use crate::{ParamError, RenderParams, Viewport};
use rand::RngCore;
use rendy_math::{Ray, Vec3};

/// Camera for generating rays into the scene.
///
/// Holds the cached viewport geometry plus the per-render quality settings.
#[derive(Debug, Clone)]
pub struct Camera {
    viewport: Viewport,
    alias_samples: u32,
    max_depth: u32,
}

impl Camera {
    /// Validate `params` and precompute the pixel grid.
    pub fn new(params: &RenderParams) -> Result<Self, ParamError> {
        params.validate()?;

        let viewport = Viewport::new(
            params.image_width,
            params.aspect_ratio,
            params.focal_length,
            params.viewport_height,
            params.camera_center,
        );

        Ok(Self {
            viewport,
            alias_samples: params.alias_samples,
            max_depth: params.max_depth,
        })
    }

    pub fn image_width(&self) -> u32 {
        self.viewport.image_width()
    }

    pub fn image_height(&self) -> u32 {
        self.viewport.image_height()
    }

    pub fn alias_samples(&self) -> u32 {
        self.alias_samples
    }

    pub fn max_depth(&self) -> u32 {
        self.max_depth
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn center(&self) -> Vec3 {
        self.viewport.camera_center()
    }

    /// Ray from the eye through the exact center of pixel (i, j).
    pub fn primary_ray(&self, i: u32, j: u32) -> Ray {
        self.ray_to(self.viewport.pixel_center(i, j))
    }

    /// Generate a ray for pixel (i, j), jittered within the pixel footprint.
    ///
    /// With a single sample per pixel there is nothing to average, so the
    /// centered ray is returned and `rng` is left untouched.
    pub fn get_ray(&self, i: u32, j: u32, rng: &mut dyn RngCore) -> Ray {
        if self.alias_samples <= 1 {
            return self.primary_ray(i, j);
        }

        let (px, py) = sample_square(rng);
        let pixel_sample = self.viewport.pixel_center(i, j)
            + self.viewport.pixel_delta_u() * px
            + self.viewport.pixel_delta_v() * py;

        self.ray_to(pixel_sample)
    }

    fn ray_to(&self, target: Vec3) -> Ray {
        let origin = self.viewport.camera_center();
        Ray::new(origin, target - origin)
    }
}
