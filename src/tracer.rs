//! Recursive specular bounce engine.
//!
//! Traces rays from the light source through the sphere field, emitting one
//! segment per bounce to a caller-supplied sink. The engine holds no state
//! between calls; everything it needs arrives in the scene snapshot.

use glam::Vec3A;
use rand::Rng;

use crate::random;
use crate::ray::{reflect, Ray};
use crate::scene::{Scene3D, TraceConfig};
use crate::sphere::{Hit, Sphere};

/// Minimum ray parameter for a hit to count.
///
/// Bounced rays start exactly on a sphere surface; without this floor they
/// would immediately re-hit their own origin.
pub const HIT_EPSILON: f32 = 0.01;

/// One traced ray segment, from a bounce origin to the next hit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RaySegment {
    /// Segment start in world space.
    pub start: Vec3A,
    /// Segment end (the hit point) in world space.
    pub end: Vec3A,
    /// Bounce depth; 0 for the primary segment.
    pub depth: u32,
}

/// Events emitted while tracing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TraceEvent {
    /// A ray segment ending at a mirror hit.
    Bounce(RaySegment),
    /// Unit-length surface-normal marker at a hit point. Emitted only when
    /// the scene asks for normal overlays; not a ray.
    Normal {
        /// The hit point.
        origin: Vec3A,
        /// Hit point displaced one unit along the surface normal.
        tip: Vec3A,
    },
}

/// Intensity of a ray segment at the given bounce depth.
///
/// The falloff `intensity * (1 - 0.3 * depth)` is the numeric contract the
/// renderer maps to color and width. It can reach zero or below at deep
/// bounces; clamping is the renderer's concern.
pub fn intensity_at(config: &TraceConfig, depth: u32) -> f32 {
    config.intensity * (1.0 - depth as f32 * 0.3)
}

/// Find the nearest sphere hit along the ray, if any.
///
/// Scans spheres in scene order keeping the smallest parameter above
/// [`HIT_EPSILON`]; the strict comparison makes the first sphere win ties.
/// Returns the sphere index together with the hit.
pub fn closest_hit(spheres: &[Sphere], ray: &Ray) -> Option<(usize, Hit)> {
    let mut closest: Option<(usize, Hit)> = None;
    for (index, sphere) in spheres.iter().enumerate() {
        if let Some(hit) = sphere.intersect(ray) {
            if hit.t > HIT_EPSILON && closest.map_or(true, |(_, best)| hit.t < best.t) {
                closest = Some((index, hit));
            }
        }
    }
    closest
}

/// Trace one ray through the scene, emitting segments to `sink`.
///
/// Recursion stops when `depth` exceeds the configured maximum or the ray
/// escapes the sphere field, so a single primary ray emits at most
/// `max_depth + 1` bounce segments.
pub fn trace<F>(scene: &Scene3D, ray: &Ray, depth: u32, sink: &mut F)
where
    F: FnMut(TraceEvent),
{
    if depth > scene.config.max_depth {
        return;
    }

    let Some((index, hit)) = closest_hit(&scene.spheres, ray) else {
        // Ray escapes to infinity
        return;
    };

    sink(TraceEvent::Bounce(RaySegment {
        start: ray.origin,
        end: hit.point,
        depth,
    }));

    let normal = (hit.point - scene.spheres[index].center).normalize();
    if scene.config.show_normals {
        sink(TraceEvent::Normal {
            origin: hit.point,
            tip: hit.point + normal,
        });
    }

    let reflected = reflect(ray.direction, normal);
    trace(scene, &Ray::new(hit.point, reflected), depth + 1, sink);
}

/// Emit all primary rays for a frame.
///
/// Draws `num_rays` cone-sampled directions from the source and traces each
/// one. A degenerate zero-length sample skips that ray rather than aborting
/// the frame.
pub fn shoot<R, F>(scene: &Scene3D, rng: &mut R, sink: &mut F)
where
    R: Rng + ?Sized,
    F: FnMut(TraceEvent),
{
    for _ in 0..scene.config.num_rays {
        let Some(direction) = random::cone_direction(rng) else {
            continue;
        };
        trace(scene, &Ray::new(scene.source, direction), 0, sink);
    }
}
