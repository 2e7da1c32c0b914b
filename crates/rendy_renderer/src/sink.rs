//! Destinations for resolved pixels.

/// Receives one gamma-corrected 8-bit triplet per pixel.
///
/// `i` is the column and `j` the row, both counted from the top-left.
pub trait PixelSink {
    fn put_pixel(&mut self, i: u32, j: u32, rgb: [u8; 3]);
}

impl PixelSink for image::RgbImage {
    fn put_pixel(&mut self, i: u32, j: u32, rgb: [u8; 3]) {
        image::ImageBuffer::put_pixel(self, i, j, image::Rgb(rgb));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Color, ImageBuffer};

    #[test]
    fn test_rgb_image_sink() {
        let mut linear = ImageBuffer::new(2, 2);
        linear.set(0, 0, Color::ONE);
        linear.set(1, 1, Color::new(0.25, 0.0, 1.0));

        let mut rgb = image::RgbImage::new(2, 2);
        linear.resolve_into(&mut rgb);

        assert_eq!(rgb.get_pixel(0, 0).0, [255, 255, 255]);
        assert_eq!(rgb.get_pixel(1, 0).0, [0, 0, 0]);
        assert_eq!(rgb.get_pixel(1, 1).0, [127, 0, 255]);
        assert_eq!(rgb.as_raw(), &linear.to_rgb8());
    }
}
