//! Direction sampling for primary rays.
//!
//! Samples are drawn from a caller-supplied [`Rng`] so a seeded generator
//! reproduces the exact ray set, frame after frame.

use std::f32::consts::{FRAC_PI_4, TAU};

use glam::Vec3A;
use rand::Rng;

/// Sample a unit direction in a 90-degree cone around the horizontal plane.
///
/// Azimuth theta is uniform over [0, 2pi); elevation phi is uniform over
/// [-pi/4, pi/4). The spherical construction
/// (cos phi cos theta, sin phi, cos phi sin theta) already has unit length;
/// the explicit normalization guards the degenerate zero-length case by
/// skipping the sample (`None`) instead of dividing by zero.
pub fn cone_direction<R: Rng + ?Sized>(rng: &mut R) -> Option<Vec3A> {
    let theta = rng.random_range(0.0..TAU);
    let phi = rng.random_range(-FRAC_PI_4..FRAC_PI_4);

    let v = Vec3A::new(
        phi.cos() * theta.cos(),
        phi.sin(),
        phi.cos() * theta.sin(),
    );

    let length = v.length();
    if length == 0.0 {
        return None;
    }
    Some(v / length)
}
