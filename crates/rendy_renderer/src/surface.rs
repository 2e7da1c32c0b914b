//! Surface trait and Intersection record for ray-object intersection.

use rendy_math::{Interval, Ray, Vec3};

/// Record of a ray-surface intersection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Intersection {
    /// Point of intersection
    pub point: Vec3,
    /// Unit surface normal, always pointing against the incoming ray
    pub normal: Vec3,
    /// Parameter t where the intersection occurs
    pub t: f32,
    /// Whether the ray hit the front face (outside) of the surface
    pub front_face: bool,
}

impl Intersection {
    /// Build a record from the geometric outward normal.
    ///
    /// The stored normal is flipped when the ray arrives from inside, so
    /// shading never has to special-case interior hits.
    pub fn new(ray: &Ray, point: Vec3, t: f32, outward_normal: Vec3) -> Self {
        let front_face = ray.direction().dot(outward_normal) < 0.0;
        let normal = if front_face {
            outward_normal
        } else {
            -outward_normal
        };

        Self {
            point,
            normal,
            t,
            front_face,
        }
    }
}

/// Trait for objects that can be hit by rays.
pub trait Surface: Send + Sync {
    /// Test if a ray hits this object strictly inside `ray_t`.
    ///
    /// Returns the nearest accepted intersection, or `None` on a miss.
    fn intersect(&self, ray: &Ray, ray_t: Interval) -> Option<Intersection>;
}

/// A list of surfaces resolved by nearest hit.
#[derive(Default)]
pub struct SurfaceList {
    objects: Vec<Box<dyn Surface>>,
}

impl SurfaceList {
    /// Create a new empty surface list.
    pub fn new() -> Self {
        Self {
            objects: Vec::new(),
        }
    }

    /// Add an object to the list.
    pub fn add(&mut self, object: Box<dyn Surface>) {
        self.objects.push(object);
    }

    /// Clear all objects from the list.
    pub fn clear(&mut self) {
        self.objects.clear();
    }

    /// Get the number of objects.
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// Check if the list is empty.
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }
}

impl FromIterator<Box<dyn Surface>> for SurfaceList {
    fn from_iter<I: IntoIterator<Item = Box<dyn Surface>>>(iter: I) -> Self {
        Self {
            objects: iter.into_iter().collect(),
        }
    }
}

impl Surface for SurfaceList {
    fn intersect(&self, ray: &Ray, ray_t: Interval) -> Option<Intersection> {
        let mut closest: Option<Intersection> = None;

        for object in &self.objects {
            // Each accepted hit shrinks the window for the remaining members
            let window = ray_t.with_max(closest.map_or(ray_t.max, |hit| hit.t));
            if let Some(hit) = object.intersect(ray, window) {
                closest = Some(hit);
            }
        }

        closest
    }
}
