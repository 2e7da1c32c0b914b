//! Sampling helpers.
//!
//! Every function takes the generator explicitly so renders are reproducible
//! from a seed and each worker can own its own stream.

use rand::{Rng, RngCore};
use rendy_math::Vec3;

/// Uniform `f32` in `[0, 1)`.
#[inline]
pub fn gen_f32(rng: &mut dyn RngCore) -> f32 {
    rng.gen::<f32>()
}

/// Sample a random point in the unit square [-0.5, 0.5) x [-0.5, 0.5).
pub fn sample_square(rng: &mut dyn RngCore) -> (f32, f32) {
    (gen_f32(rng) - 0.5, gen_f32(rng) - 0.5)
}

/// Sample a random point strictly inside the unit sphere (rejection sampling).
pub fn random_in_unit_sphere(rng: &mut dyn RngCore) -> Vec3 {
    loop {
        let p = Vec3::new(
            gen_f32(rng) * 2.0 - 1.0,
            gen_f32(rng) * 2.0 - 1.0,
            gen_f32(rng) * 2.0 - 1.0,
        );
        if p.length_squared() < 1.0 {
            return p;
        }
    }
}
