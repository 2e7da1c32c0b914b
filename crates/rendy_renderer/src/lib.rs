//! Rendy renderer - CPU ray tracing core.
//!
//! Casts rays from a pinhole eye through a pixel grid into a scene of
//! spheres, bouncing diffusely until the sky gradient is reached or the
//! depth budget runs out.
//!
//! # Example
//!
//! ```
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//! use rendy_renderer::{render, Camera, RenderParams, Sphere, SurfaceList, Vec3};
//!
//! let mut world = SurfaceList::new();
//! world.add(Box::new(Sphere::new(Vec3::new(0.0, 0.0, -1.0), 0.5)));
//!
//! let params = RenderParams {
//!     image_width: 32,
//!     alias_samples: 4,
//!     max_depth: 8,
//!     ..RenderParams::default()
//! };
//! let camera = Camera::new(&params).unwrap();
//! let image = render(&camera, &world, &mut StdRng::seed_from_u64(1));
//! assert_eq!(image.height, 18);
//! ```

mod bucket;
mod camera;
mod color;
mod error;
mod random;
mod renderer;
mod sink;
mod sphere;
mod surface;
mod viewport;

pub use bucket::{
    generate_buckets, render_bucket, render_parallel, Bucket, BucketResult, DEFAULT_BUCKET_SIZE,
};
pub use camera::Camera;
pub use color::{color_to_rgb, linear_to_gamma, to_display_channel, Color};
pub use error::ParamError;
pub use random::{gen_f32, random_in_unit_sphere, sample_square};
pub use renderer::{
    ray_color, render, render_into, render_pixel, sky_gradient, ImageBuffer, RenderParams,
    REFLECTANCE,
};
pub use sink::PixelSink;
pub use sphere::Sphere;
pub use surface::{Intersection, Surface, SurfaceList};
pub use viewport::Viewport;

/// Re-export Vec3 and common math types from rendy_math
pub use rendy_math::{unit, Interval, Ray, Vec3};
