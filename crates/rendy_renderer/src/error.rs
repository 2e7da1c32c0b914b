//! Render parameter validation errors.

use thiserror::Error;

/// Errors raised when render parameters cannot describe a valid image.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParamError {
    #[error("image width must be at least 1 pixel")]
    ZeroWidth,

    #[error("{name} must be a positive finite number, got {value}")]
    NonPositive { name: &'static str, value: f32 },

    #[error("at least one anti-aliasing sample per pixel is required")]
    ZeroSamples,
}
