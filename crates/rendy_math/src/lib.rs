//! Rendy math types.
//!
//! Vector arithmetic comes from glam; this crate adds the ray and interval
//! types the tracer is built on.

// Re-export glam for convenience
pub use glam::*;

mod interval;
mod ray;

pub use interval::Interval;
pub use ray::Ray;

/// Scale `v` to unit length.
///
/// Unlike `Vec3::normalize`, this never asserts: a zero-length input yields
/// NaN components, which callers are expected to avoid.
#[inline]
pub fn unit(v: Vec3) -> Vec3 {
    v / v.length()
}
