//! Pixel-grid geometry for a pinhole eye looking down -Z.
//!
//! The viewport is the virtual rectangle, `focal_length` in front of the
//! camera center, that the image's pixel grid is laid over. Pixel centers are
//! inset half a pixel from the viewport edges.

use rendy_math::Vec3;

/// Cached pixel-grid geometry. Immutable once computed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    image_width: u32,
    image_height: u32,
    pixel_delta_u: Vec3,
    pixel_delta_v: Vec3,
    first_pixel_center: Vec3,
    camera_center: Vec3,
}

impl Viewport {
    /// Compute the grid for an image `image_width` pixels wide.
    ///
    /// The height is derived from the aspect ratio and never drops below one
    /// pixel. The viewport width is then recomputed from the integer height so
    /// that pixels stay square after rounding.
    pub fn new(
        image_width: u32,
        aspect_ratio: f32,
        focal_length: f32,
        viewport_height: f32,
        camera_center: Vec3,
    ) -> Self {
        let image_height = ((image_width as f32 / aspect_ratio) as u32).max(1);
        let viewport_width = viewport_height * (image_width as f32 / image_height as f32);

        // V points down so row index grows top to bottom
        let viewport_u = Vec3::new(viewport_width, 0.0, 0.0);
        let viewport_v = Vec3::new(0.0, -viewport_height, 0.0);

        let pixel_delta_u = viewport_u / image_width as f32;
        let pixel_delta_v = viewport_v / image_height as f32;

        let viewport_upper_left = camera_center
            - Vec3::new(0.0, 0.0, focal_length)
            - viewport_u / 2.0
            - viewport_v / 2.0;
        let first_pixel_center = viewport_upper_left + (pixel_delta_u + pixel_delta_v) * 0.5;

        Self {
            image_width,
            image_height,
            pixel_delta_u,
            pixel_delta_v,
            first_pixel_center,
            camera_center,
        }
    }

    pub fn image_width(&self) -> u32 {
        self.image_width
    }

    pub fn image_height(&self) -> u32 {
        self.image_height
    }

    /// Offset from one pixel center to the next along a row.
    pub fn pixel_delta_u(&self) -> Vec3 {
        self.pixel_delta_u
    }

    /// Offset from one pixel center to the next down a column.
    pub fn pixel_delta_v(&self) -> Vec3 {
        self.pixel_delta_v
    }

    /// Center of pixel (0, 0), the top-left of the image.
    pub fn first_pixel_center(&self) -> Vec3 {
        self.first_pixel_center
    }

    pub fn camera_center(&self) -> Vec3 {
        self.camera_center
    }

    /// Center of pixel (i, j), column `i` and row `j`.
    #[inline]
    pub fn pixel_center(&self, i: u32, j: u32) -> Vec3 {
        self.first_pixel_center + self.pixel_delta_u * i as f32 + self.pixel_delta_v * j as f32
    }
}
