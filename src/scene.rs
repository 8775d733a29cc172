//! Immutable per-frame scene snapshots.
//!
//! A scene is assembled once (or rebuilt by the input side between frames)
//! and handed to the engine by shared reference. The engine never mutates
//! it; every trace is a pure function of the snapshot.

use glam::{Vec2, Vec3A};

use crate::camera::Camera;
use crate::error::{Result, SceneError};
use crate::sphere::{ColorTag, Sphere};

/// Tracing parameters for the 3D scene.
#[derive(Debug, Clone, Copy)]
pub struct TraceConfig {
    /// Number of primary rays emitted from the source per frame.
    pub num_rays: u32,
    /// Maximum bounce depth; recursion stops once depth exceeds this.
    pub max_depth: u32,
    /// Base ray intensity in (0, 1], scaled down 0.3 per bounce.
    pub intensity: f32,
    /// Emit unit surface-normal overlays at every hit.
    pub show_normals: bool,
    /// Emit the projected floor grid.
    pub show_grid: bool,
}

impl TraceConfig {
    /// Create a validated configuration.
    pub fn new(
        num_rays: u32,
        max_depth: u32,
        intensity: f32,
        show_normals: bool,
        show_grid: bool,
    ) -> Result<Self> {
        if num_rays == 0 {
            return Err(SceneError::InvalidRayCount);
        }
        if !(intensity > 0.0 && intensity <= 1.0) {
            return Err(SceneError::InvalidIntensity(intensity));
        }
        Ok(Self {
            num_rays,
            max_depth,
            intensity,
            show_normals,
            show_grid,
        })
    }
}

impl Default for TraceConfig {
    fn default() -> Self {
        Self {
            num_rays: 36,
            max_depth: 3,
            intensity: 0.8,
            show_normals: true,
            show_grid: true,
        }
    }
}

/// Snapshot of the 3D scene: camera, mirrors, endpoints, and parameters.
#[derive(Debug, Clone)]
pub struct Scene3D {
    /// Viewing state.
    pub camera: Camera,
    /// Spherical mirrors in iteration order.
    ///
    /// Order is the deterministic tie-break when two spheres are hit at the
    /// same ray parameter.
    pub spheres: Vec<Sphere>,
    /// Light source position.
    pub source: Vec3A,
    /// Receiver position.
    pub target: Vec3A,
    /// Tracing parameters.
    pub config: TraceConfig,
}

impl Scene3D {
    /// Assemble a scene from already-validated parts.
    pub fn new(
        camera: Camera,
        spheres: Vec<Sphere>,
        source: Vec3A,
        target: Vec3A,
        config: TraceConfig,
    ) -> Self {
        Self {
            camera,
            spheres,
            source,
            target,
            config,
        }
    }

    /// Build the stock demo scene: five mirrors around the origin, source
    /// and receiver on opposite sides, camera pulled back and raised.
    pub fn demo() -> Result<Self> {
        let spheres = vec![
            Sphere::new(Vec3A::new(-2.0, 0.0, 0.0), 1.2, ColorTag("#4169E1"), 0.9)?,
            Sphere::new(Vec3A::new(2.0, 1.0, -1.0), 1.0, ColorTag("#32CD32"), 0.8)?,
            Sphere::new(Vec3A::new(0.0, -1.0, 2.0), 0.9, ColorTag("#9370DB"), 0.85)?,
            Sphere::new(Vec3A::new(-1.0, 1.5, -2.0), 0.8, ColorTag("#FF6346"), 0.7)?,
            Sphere::new(Vec3A::new(1.5, -0.5, 1.0), 0.7, ColorTag("#FFD700"), 0.95)?,
        ];
        Ok(Self::new(
            Camera::new(Vec3A::new(5.0, 3.0, 10.0), Vec3A::ZERO),
            spheres,
            Vec3A::new(-3.0, 1.0, 2.0),
            Vec3A::new(3.0, -1.0, -2.0),
            TraceConfig::default(),
        ))
    }
}

/// Animation step: orbit the source and receiver around the vertical axis.
///
/// The source circles at radius 3 and height 1; the receiver sits
/// diametrically opposite at height -1. The 50 ms driver lives outside the
/// engine; it applies this to the snapshot and re-renders.
pub fn orbit(angle_deg: f32) -> (Vec3A, Vec3A) {
    let a = angle_deg.to_radians();
    let b = (angle_deg + 180.0).to_radians();
    (
        Vec3A::new(3.0 * a.cos(), 1.0, 3.0 * a.sin()),
        Vec3A::new(3.0 * b.cos(), -1.0, 3.0 * b.sin()),
    )
}

/// Circular mirror in the planar schematic.
#[derive(Debug, Clone, Copy)]
pub struct Circle {
    /// Center in canvas coordinates.
    pub center: Vec2,
    /// Radius in canvas units, strictly positive.
    pub radius: f32,
    /// Display color for the renderer.
    pub color: ColorTag,
}

impl Circle {
    /// Create a new circle, rejecting degenerate radii.
    pub fn new(center: Vec2, radius: f32, color: ColorTag) -> Result<Self> {
        if radius <= 0.0 {
            return Err(SceneError::InvalidRadius(radius));
        }
        Ok(Self {
            center,
            radius,
            color,
        })
    }
}

/// Snapshot of the planar schematic scene.
#[derive(Debug, Clone)]
pub struct Scene2D {
    /// Circular mirrors in iteration order.
    pub mirrors: Vec<Circle>,
    /// Source point in canvas coordinates.
    pub source: Vec2,
    /// Receiver point in canvas coordinates.
    pub target: Vec2,
}

impl Scene2D {
    /// Assemble a schematic scene.
    pub fn new(mirrors: Vec<Circle>, source: Vec2, target: Vec2) -> Self {
        Self {
            mirrors,
            source,
            target,
        }
    }

    /// Build the stock schematic: four mirrors between the source in the
    /// lower-left corner and the receiver in the upper-right.
    pub fn demo() -> Result<Self> {
        let mirrors = vec![
            Circle::new(Vec2::new(300.0, 300.0), 80.0, ColorTag("blue"))?,
            Circle::new(Vec2::new(600.0, 400.0), 60.0, ColorTag("green"))?,
            Circle::new(Vec2::new(450.0, 200.0), 50.0, ColorTag("purple"))?,
            Circle::new(Vec2::new(750.0, 500.0), 70.0, ColorTag("orange"))?,
        ];
        Ok(Self::new(
            mirrors,
            Vec2::new(100.0, 600.0),
            Vec2::new(900.0, 100.0),
        ))
    }
}
