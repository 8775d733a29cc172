//! Planar reflection schematic.
//!
//! Works on the 2D scene: a direct sight-line check between source and
//! receiver, and a per-mirror search for a boundary point visible from
//! both. The search walks candidate angles in 10-degree steps and accepts
//! the first mutually visible point; it checks visibility only, not the law
//! of reflection, which keeps the schematic cheap and deterministic.

use glam::Vec2;

use crate::scene::Scene2D;

/// Angular step of the boundary search, in degrees.
const ANGLE_STEP: u32 = 10;

/// A reflection path bounced off one mirror.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReflectionPath {
    /// The accepted boundary point on the mirror.
    pub point: Vec2,
    /// Boundary angle of the accepted point, in degrees from the mirror
    /// center. Always the lowest satisfying angle, so repeated runs on the
    /// same scene agree.
    pub angle_deg: u32,
}

/// Test whether the segment p1-p2 crosses the circle.
///
/// Parametrizes the segment as p1 + t(p2 - p1) and solves the quadratic for
/// boundary crossings; the segment is blocked when a root lies in [0, 1].
/// Symmetric in p1/p2.
pub fn segment_hits_circle(p1: Vec2, p2: Vec2, center: Vec2, radius: f32) -> bool {
    let d = p2 - p1;
    let f = p1 - center;

    let a = d.dot(d);
    let b = 2.0 * f.dot(d);
    let c = f.dot(f) - radius * radius;

    let discriminant = b * b - 4.0 * a * c;
    if discriminant <= 0.0 {
        return false;
    }

    let sqrtd = discriminant.sqrt();
    let t1 = (-b - sqrtd) / (2.0 * a);
    let t2 = (-b + sqrtd) / (2.0 * a);

    (0.0..=1.0).contains(&t1) || (0.0..=1.0).contains(&t2)
}

/// The unobstructed source-to-receiver segment, if no mirror blocks it.
pub fn direct_path(scene: &Scene2D) -> Option<(Vec2, Vec2)> {
    let blocked = scene
        .mirrors
        .iter()
        .any(|m| segment_hits_circle(scene.source, scene.target, m.center, m.radius));
    (!blocked).then_some((scene.source, scene.target))
}

/// Search the mirror at `mirror_idx` for a reflection path.
///
/// Walks the boundary at 0, 10, ..., 350 degrees and returns the first
/// candidate point visible from the source and from which the receiver is
/// visible, where visibility means no *other* mirror occludes the leg (the
/// mirror under test never occludes its own candidates). `None` when all 36
/// candidates fail, or the index is out of range.
pub fn reflection_path(scene: &Scene2D, mirror_idx: usize) -> Option<ReflectionPath> {
    let mirror = scene.mirrors.get(mirror_idx)?;

    let occluded = |from: Vec2, to: Vec2| {
        scene
            .mirrors
            .iter()
            .enumerate()
            .any(|(i, other)| {
                i != mirror_idx && segment_hits_circle(from, to, other.center, other.radius)
            })
    };

    for angle_deg in (0..360).step_by(ANGLE_STEP as usize) {
        let rad = (angle_deg as f32).to_radians();
        let point = mirror.center + mirror.radius * Vec2::new(rad.cos(), rad.sin());

        if occluded(scene.source, point) {
            continue;
        }
        if occluded(point, scene.target) {
            continue;
        }
        return Some(ReflectionPath { point, angle_deg });
    }
    None
}
