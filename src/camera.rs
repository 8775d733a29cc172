//! Camera state and perspective projection.
//!
//! The camera owns the world-to-screen mapping: translate into
//! camera-relative coordinates, rotate by the yaw angle in the X/Z plane,
//! then divide by depth with a fixed field-of-view constant. Points at or
//! behind the camera plane do not project and are simply skipped by callers.

use glam::Vec3A;

/// Field-of-view constant for the perspective division, in screen units.
pub const FOV: f32 = 500.0;

/// Minimum camera-space depth for a point to be projectable.
const NEAR_PLANE: f32 = 0.1;

/// Screen dimensions the projection maps into.
#[derive(Debug, Clone, Copy)]
pub struct Viewport {
    /// Canvas width in pixels.
    pub width: f32,
    /// Canvas height in pixels.
    pub height: f32,
}

impl Viewport {
    /// Create a viewport with the given pixel dimensions.
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(1000.0, 700.0)
    }
}

/// A 3D point mapped onto the screen.
#[derive(Debug, Clone, Copy)]
pub struct Projection {
    /// Horizontal screen coordinate.
    pub x: f32,
    /// Vertical screen coordinate; grows downward.
    pub y: f32,
    /// Apparent-depth factor, 1 + z/10 in camera space.
    ///
    /// Monotonically increasing with distance. Callers divide sizes by it
    /// and fade brightness with it; it is a presentation hint, not a
    /// physical unit.
    pub depth: f32,
}

/// Viewing state for the 3D scene.
///
/// Mutated only by explicit move commands from the input side; the engine
/// reads it as part of an immutable snapshot.
#[derive(Debug, Clone, Copy)]
pub struct Camera {
    /// Camera position in world space.
    pub position: Vec3A,
    /// Look-at point. Informational state only; projection does not use it.
    pub target: Vec3A,
    /// Yaw angle in degrees, rotation about the vertical axis.
    pub angle: f32,
    /// Elevation angle in degrees. Retained state, unused by projection.
    pub elevation: f32,
}

impl Camera {
    /// Create a camera at `position` looking toward `target` with no yaw.
    pub fn new(position: Vec3A, target: Vec3A) -> Self {
        Self {
            position,
            target,
            angle: 0.0,
            elevation: 30.0,
        }
    }

    /// Apply a move command, shifting the camera by `delta` in world space.
    pub fn translate(&mut self, delta: Vec3A) {
        self.position += delta;
    }

    /// Project a world point onto the screen.
    ///
    /// Returns `None` when the rotated camera-space depth is at or below
    /// 0.1 (point behind or grazing the camera plane). That is a normal
    /// "not visible this frame" outcome; callers skip drawing and continue.
    pub fn project(&self, point: Vec3A, viewport: Viewport) -> Option<Projection> {
        let d = point - self.position;

        let angle_rad = self.angle.to_radians();
        let (sin_a, cos_a) = angle_rad.sin_cos();

        let x_rot = d.x * cos_a - d.z * sin_a;
        let z_rot = d.x * sin_a + d.z * cos_a;
        let y_rot = d.y;

        if z_rot <= NEAR_PLANE {
            return None;
        }

        let scale = FOV / z_rot;
        Some(Projection {
            x: viewport.width / 2.0 + x_rot * scale,
            y: viewport.height / 2.0 - y_rot * scale,
            depth: 1.0 + z_rot / 10.0,
        })
    }
}
