//! Linear radiance to display conversion.

use rendy_math::{Interval, Vec3};

/// Color type alias (linear RGB, nominally 0-1)
pub type Color = Vec3;

/// Displayable range of a gamma-encoded channel.
const INTENSITY: Interval = Interval::new(0.0, 1.0);

/// Apply gamma correction (gamma = 2.0).
#[inline]
pub fn linear_to_gamma(linear: f32) -> f32 {
    if linear > 0.0 {
        linear.sqrt()
    } else {
        0.0
    }
}

/// Gamma-encode one linear channel and quantize it to 8 bits.
#[inline]
pub fn to_display_channel(linear: f32) -> u8 {
    (255.999 * INTENSITY.clamp(linear_to_gamma(linear))).floor() as u8
}

/// Convert an averaged linear color to a displayable 8-bit triplet.
pub fn color_to_rgb(color: Color) -> [u8; 3] {
    [
        to_display_channel(color.x),
        to_display_channel(color.y),
        to_display_channel(color.z),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linear_to_gamma() {
        assert_eq!(linear_to_gamma(0.0), 0.0);
        assert_eq!(linear_to_gamma(-0.5), 0.0);
        assert!((linear_to_gamma(1.0) - 1.0).abs() < 0.0001);
        assert!((linear_to_gamma(0.25) - 0.5).abs() < 0.0001);
    }

    #[test]
    fn test_display_channel_range() {
        assert_eq!(to_display_channel(0.0), 0);
        assert_eq!(to_display_channel(1.0), 255);
        assert_eq!(to_display_channel(4.0), 255);
        assert_eq!(to_display_channel(f32::NAN), 0);
        // sqrt(0.25) = 0.5 -> floor(127.9995)
        assert_eq!(to_display_channel(0.25), 127);
    }

    #[test]
    fn test_color_to_rgb() {
        assert_eq!(color_to_rgb(Color::ZERO), [0, 0, 0]);
        assert_eq!(color_to_rgb(Color::ONE), [255, 255, 255]);
        assert_eq!(color_to_rgb(Color::new(0.25, 1.0, 0.0)), [127, 255, 0]);
    }
}
