//! Sphere primitive and analytic ray-sphere intersection.
//!
//! The intersection solves the full quadratic and picks the first root in
//! front of the ray origin. Root preference (near root first, far root as a
//! fallback when the origin is inside the sphere) is part of the engine's
//! behavioral contract and is covered by tests.

use glam::Vec3A;

use crate::error::{Result, SceneError};
use crate::ray::Ray;

/// Presentation color hint attached to scene objects.
///
/// Carried through to emitted draw primitives untouched; geometry never
/// consults it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorTag(pub &'static str);

/// Intersection between a ray and a sphere.
#[derive(Debug, Clone, Copy)]
pub struct Hit {
    /// Ray parameter at the intersection.
    pub t: f32,
    /// World-space intersection point, origin + t * direction.
    pub point: Vec3A,
}

/// Spherical mirror defined by center, radius, and presentation hints.
#[derive(Debug, Clone, Copy)]
pub struct Sphere {
    /// Center point of the sphere in world coordinates.
    pub center: Vec3A,
    /// Radius of the sphere, strictly positive.
    pub radius: f32,
    /// Display color for the renderer.
    pub color: ColorTag,
    /// Mirror quality in [0, 1]. A presentation hint only; every sphere
    /// reflects specularly regardless of this value.
    pub reflectivity: f32,
}

impl Sphere {
    /// Create a new sphere, rejecting degenerate geometry.
    pub fn new(center: Vec3A, radius: f32, color: ColorTag, reflectivity: f32) -> Result<Self> {
        if radius <= 0.0 {
            return Err(SceneError::InvalidRadius(radius));
        }
        if !(0.0..=1.0).contains(&reflectivity) {
            return Err(SceneError::InvalidReflectivity(reflectivity));
        }
        Ok(Self {
            center,
            radius,
            color,
            reflectivity,
        })
    }

    /// Test the ray against this sphere.
    ///
    /// Solves a*t^2 + b*t + c = 0 with a = d.d, b = 2(oc.d),
    /// c = oc.oc - r^2 where oc = origin - center. Prefers the near root
    /// t1 when it lies in front of the origin, falls back to the far root
    /// t2, and returns `None` when both are behind the ray.
    pub fn intersect(&self, ray: &Ray) -> Option<Hit> {
        let oc = ray.origin - self.center;

        let a = ray.direction.length_squared();
        let b = 2.0 * oc.dot(ray.direction);
        let c = oc.length_squared() - self.radius * self.radius;

        let discriminant = b * b - 4.0 * a * c;
        if discriminant < 0.0 {
            return None;
        }

        let sqrtd = discriminant.sqrt();
        let t1 = (-b - sqrtd) / (2.0 * a);
        let t2 = (-b + sqrtd) / (2.0 * a);

        let t = if t1 > 0.0 {
            t1
        } else if t2 > 0.0 {
            t2
        } else {
            return None;
        };

        Some(Hit {
            t,
            point: ray.at(t),
        })
    }
}
