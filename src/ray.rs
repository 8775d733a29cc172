//! Ray representation for 3D reflection tracing.
//!
//! A ray is defined as r(t) = origin + t * direction, representing a
//! semi-infinite line in 3D space used for intersection testing.

use glam::Vec3A;

/// Ray in 3D space defined by origin and direction.
///
/// Mathematical representation: r(t) = origin + t * direction
#[derive(Debug, Clone, Copy)]
pub struct Ray {
    /// Starting point of the ray in world coordinates.
    ///
    /// The light source position for primary rays, or the previous hit point
    /// for bounced rays.
    pub origin: Vec3A,

    /// Direction vector of the ray.
    ///
    /// Intersection and reflection routines expect a unit vector; callers
    /// normalize before constructing a ray.
    pub direction: Vec3A,
}

impl Ray {
    /// Create a new ray with origin and direction.
    pub fn new(origin: Vec3A, direction: Vec3A) -> Self {
        Self { origin, direction }
    }

    /// Compute a point at parameter t along the ray.
    ///
    /// Returns r(t) = origin + t * direction.
    pub fn at(&self, t: f32) -> Vec3A {
        self.origin + t * self.direction
    }
}

/// Reflect a vector off a surface using the mirror law.
///
/// Returns v - 2(v.n)n for incoming direction `v` and unit surface normal
/// `n`. A unit `v` stays unit length under this map.
pub fn reflect(v: Vec3A, n: Vec3A) -> Vec3A {
    v - 2.0 * v.dot(n) * n
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn at_walks_along_direction() {
        let r = Ray::new(Vec3A::new(1.0, 2.0, 3.0), Vec3A::new(0.0, 1.0, 0.0));
        assert_eq!(r.at(0.0), r.origin);
        assert_eq!(r.at(2.5), Vec3A::new(1.0, 4.5, 3.0));
    }

    #[test]
    fn head_on_reflection_reverses_direction() {
        let reflected = reflect(Vec3A::new(1.0, 0.0, 0.0), Vec3A::new(-1.0, 0.0, 0.0));
        assert!((reflected - Vec3A::new(-1.0, 0.0, 0.0)).length() < 1e-6);
    }

    #[test]
    fn reflection_preserves_unit_length() {
        let dirs = [
            Vec3A::new(1.0, 0.0, 0.0),
            Vec3A::new(0.3, -0.8, 0.5).normalize(),
            Vec3A::new(-0.2, 0.1, 0.9).normalize(),
        ];
        let normals = [
            Vec3A::new(0.0, 1.0, 0.0),
            Vec3A::new(-0.6, 0.6, 0.4).normalize(),
            Vec3A::new(0.0, 0.0, -1.0),
        ];
        for d in dirs {
            for n in normals {
                assert!((reflect(d, n).length() - 1.0).abs() < 1e-5);
            }
        }
    }

    #[test]
    fn grazing_reflection_is_unchanged() {
        // Direction perpendicular to the normal has zero normal component
        let d = Vec3A::new(1.0, 0.0, 0.0);
        let n = Vec3A::new(0.0, 1.0, 0.0);
        assert_eq!(reflect(d, n), d);
    }
}
