//! Frame composition: scene snapshot in, ordered draw primitives out.
//!
//! This is the engine's entire output surface. Primitives are screen-space
//! and carry the numeric hints (depth factor, per-bounce intensity, fade)
//! the renderer needs; color mapping, dashes, gradients, and the starfield
//! backdrop are the renderer's business and never appear here.
//!
//! Emission order follows paint order: backdrop geometry first, traced rays
//! last.

use glam::Vec3A;
use log::debug;
use rand::Rng;

use crate::camera::Viewport;
use crate::scene::{Scene2D, Scene3D};
use crate::schema;
use crate::sphere::ColorTag;
use crate::tracer::{self, TraceEvent};

/// Extent of the floor lattice in cells from the origin, each direction.
const GRID_CELLS: i32 = 10;
/// Floor lattice spacing in world units.
const GRID_SPACING: f32 = 1.0;
/// Height of the floor lattice.
const GRID_HEIGHT: f32 = -1.0;
/// World radius of the source and receiver markers.
const ENDPOINT_RADIUS: f32 = 0.3;
/// Screen-size factor for projected spheres.
const SPHERE_SCREEN_SCALE: f32 = 200.0;

/// Rendering hint attached to a segment primitive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SegmentStyle {
    /// Traced ray segment with its bounce depth and depth-falloff
    /// intensity. The renderer maps these to a palette color and width.
    Ray {
        /// Bounce depth, 0 for primary segments.
        depth: u32,
        /// Intensity after depth falloff; may be zero or below at deep
        /// bounces, clamped by the renderer.
        intensity: f32,
    },
    /// Unit surface-normal overlay marker.
    Normal,
    /// Floor lattice line, faded by the projected depth factor of its
    /// starting endpoint.
    Grid {
        /// Depth factor at the first endpoint.
        fade: f32,
    },
    /// Unobstructed source-to-receiver sight line in the schematic.
    Direct,
    /// Leg of a mirror reflection path in the schematic.
    Reflection,
}

/// One screen-space draw command.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Primitive {
    /// Line segment between two screen points.
    Segment {
        /// Start x.
        x1: f32,
        /// Start y.
        y1: f32,
        /// End x.
        x2: f32,
        /// End y.
        y2: f32,
        /// Rendering hint.
        style: SegmentStyle,
    },
    /// Disc or outline circle.
    Circle {
        /// Center x.
        x: f32,
        /// Center y.
        y: f32,
        /// Screen radius.
        radius: f32,
        /// Display color.
        color: ColorTag,
        /// Self-luminous marker (source/receiver) rather than a mirror.
        emissive: bool,
    },
}

/// Render the 3D scene into an ordered primitive list.
///
/// Points that fail projection simply drop the primitive that needed them;
/// a partially visible frame is a normal outcome, never an error.
pub fn render_3d<R: Rng + ?Sized>(scene: &Scene3D, viewport: Viewport, rng: &mut R) -> Vec<Primitive> {
    let camera = scene.camera;
    let mut prims = Vec::new();

    if scene.config.show_grid {
        for i in -GRID_CELLS..=GRID_CELLS {
            for j in -GRID_CELLS..=GRID_CELLS {
                let base = Vec3A::new(i as f32 * GRID_SPACING, GRID_HEIGHT, j as f32 * GRID_SPACING);
                let along_z = Vec3A::new(base.x, GRID_HEIGHT, (j + 1) as f32 * GRID_SPACING);
                let along_x = Vec3A::new((i + 1) as f32 * GRID_SPACING, GRID_HEIGHT, base.z);
                for end in [along_z, along_x] {
                    if let (Some(p1), Some(p2)) =
                        (camera.project(base, viewport), camera.project(end, viewport))
                    {
                        prims.push(Primitive::Segment {
                            x1: p1.x,
                            y1: p1.y,
                            x2: p2.x,
                            y2: p2.y,
                            style: SegmentStyle::Grid { fade: p1.depth },
                        });
                    }
                }
            }
        }
    }

    for sphere in &scene.spheres {
        if let Some(p) = camera.project(sphere.center, viewport) {
            prims.push(Primitive::Circle {
                x: p.x,
                y: p.y,
                radius: sphere.radius * SPHERE_SCREEN_SCALE / p.depth,
                color: sphere.color,
                emissive: false,
            });
        }
    }

    for (point, color) in [
        (scene.source, ColorTag("#ff4444")),
        (scene.target, ColorTag("#ffff44")),
    ] {
        if let Some(p) = camera.project(point, viewport) {
            prims.push(Primitive::Circle {
                x: p.x,
                y: p.y,
                radius: ENDPOINT_RADIUS * SPHERE_SCREEN_SCALE / p.depth,
                color,
                emissive: true,
            });
        }
    }

    let config = scene.config;
    let mut sink = |event: TraceEvent| {
        let (start, end, style) = match event {
            TraceEvent::Bounce(seg) => (
                seg.start,
                seg.end,
                SegmentStyle::Ray {
                    depth: seg.depth,
                    intensity: tracer::intensity_at(&config, seg.depth),
                },
            ),
            TraceEvent::Normal { origin, tip } => (origin, tip, SegmentStyle::Normal),
        };
        if let (Some(p1), Some(p2)) = (
            camera.project(start, viewport),
            camera.project(end, viewport),
        ) {
            prims.push(Primitive::Segment {
                x1: p1.x,
                y1: p1.y,
                x2: p2.x,
                y2: p2.y,
                style,
            });
        }
    };
    tracer::shoot(scene, rng, &mut sink);

    debug!("3d frame: {} primitives", prims.len());
    prims
}

/// Render the planar schematic into an ordered primitive list.
///
/// The schematic is already in canvas coordinates, so no projection is
/// involved and nothing here can fail.
pub fn render_2d(scene: &Scene2D) -> Vec<Primitive> {
    let mut prims = Vec::new();

    for mirror in &scene.mirrors {
        prims.push(Primitive::Circle {
            x: mirror.center.x,
            y: mirror.center.y,
            radius: mirror.radius,
            color: mirror.color,
            emissive: false,
        });
        // Center dot
        prims.push(Primitive::Circle {
            x: mirror.center.x,
            y: mirror.center.y,
            radius: 3.0,
            color: mirror.color,
            emissive: false,
        });
    }

    prims.push(Primitive::Circle {
        x: scene.source.x,
        y: scene.source.y,
        radius: 8.0,
        color: ColorTag("red"),
        emissive: true,
    });
    prims.push(Primitive::Circle {
        x: scene.target.x,
        y: scene.target.y,
        radius: 8.0,
        color: ColorTag("yellow"),
        emissive: true,
    });

    if let Some((a, b)) = schema::direct_path(scene) {
        prims.push(Primitive::Segment {
            x1: a.x,
            y1: a.y,
            x2: b.x,
            y2: b.y,
            style: SegmentStyle::Direct,
        });
    }

    for idx in 0..scene.mirrors.len() {
        if let Some(path) = schema::reflection_path(scene, idx) {
            for (a, b) in [(scene.source, path.point), (path.point, scene.target)] {
                prims.push(Primitive::Segment {
                    x1: a.x,
                    y1: a.y,
                    x2: b.x,
                    y2: b.y,
                    style: SegmentStyle::Reflection,
                });
            }
            prims.push(Primitive::Circle {
                x: path.point.x,
                y: path.point.y,
                radius: 4.0,
                color: ColorTag("white"),
                emissive: false,
            });
        }
    }

    debug!("schematic frame: {} primitives", prims.len());
    prims
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::Camera;
    use crate::scene::{Scene3D, TraceConfig};
    use crate::sphere::Sphere;
    use glam::Vec2;
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    fn facing_scene() -> Scene3D {
        // Camera behind the origin on -Z so +Z content is in front of it
        let mut camera = Camera::new(Vec3A::new(0.0, 0.0, -10.0), Vec3A::ZERO);
        camera.angle = 0.0;
        Scene3D::new(
            camera,
            vec![Sphere::new(Vec3A::new(0.0, 0.0, 2.0), 1.0, ColorTag("#4169E1"), 0.9).unwrap()],
            Vec3A::new(-3.0, 0.0, 0.0),
            Vec3A::new(3.0, 0.0, 0.0),
            TraceConfig::new(8, 2, 0.8, false, false).unwrap(),
        )
    }

    #[test]
    fn visible_objects_become_circles() {
        let scene = facing_scene();
        let mut rng = ChaCha20Rng::seed_from_u64(5);
        let prims = render_3d(&scene, Viewport::default(), &mut rng);
        let circles: Vec<_> = prims
            .iter()
            .filter(|p| matches!(p, Primitive::Circle { .. }))
            .collect();
        // One mirror plus the two emissive endpoints
        assert_eq!(circles.len(), 3);
        let emissive = circles
            .iter()
            .filter(|p| matches!(p, Primitive::Circle { emissive: true, .. }))
            .count();
        assert_eq!(emissive, 2);
    }

    #[test]
    fn sphere_screen_radius_scales_with_depth() {
        let scene = facing_scene();
        let mut rng = ChaCha20Rng::seed_from_u64(5);
        let prims = render_3d(&scene, Viewport::default(), &mut rng);
        let Some(Primitive::Circle { radius, .. }) = prims
            .iter()
            .find(|p| matches!(p, Primitive::Circle { emissive: false, .. }))
        else {
            panic!("mirror circle missing");
        };
        // Sphere center at camera-space z = 12: depth factor 2.2
        assert!((radius - 200.0 / 2.2).abs() < 1e-3);
    }

    #[test]
    fn hidden_scene_emits_no_circles() {
        let mut scene = facing_scene();
        // Turn the camera around; everything lands behind the near plane
        scene.camera.angle = 180.0;
        let mut rng = ChaCha20Rng::seed_from_u64(5);
        let prims = render_3d(&scene, Viewport::default(), &mut rng);
        assert!(prims.is_empty());
    }

    #[test]
    fn grid_obeys_toggle() {
        let mut scene = facing_scene();
        scene.config.show_grid = true;
        let mut rng = ChaCha20Rng::seed_from_u64(5);
        let with_grid = render_3d(&scene, Viewport::default(), &mut rng)
            .iter()
            .filter(|p| matches!(p, Primitive::Segment { style: SegmentStyle::Grid { .. }, .. }))
            .count();
        assert!(with_grid > 0);

        scene.config.show_grid = false;
        let mut rng = ChaCha20Rng::seed_from_u64(5);
        let without_grid = render_3d(&scene, Viewport::default(), &mut rng)
            .iter()
            .filter(|p| matches!(p, Primitive::Segment { style: SegmentStyle::Grid { .. }, .. }))
            .count();
        assert_eq!(without_grid, 0);
    }

    #[test]
    fn seeded_frames_are_identical() {
        let scene = facing_scene();
        let render = || {
            let mut rng = ChaCha20Rng::seed_from_u64(77);
            render_3d(&scene, Viewport::default(), &mut rng)
        };
        assert_eq!(render(), render());
    }

    #[test]
    fn demo_schematic_has_direct_path_and_markers() {
        let scene = crate::scene::Scene2D::demo().unwrap();
        let prims = render_2d(&scene);

        let direct = prims
            .iter()
            .filter(|p| matches!(p, Primitive::Segment { style: SegmentStyle::Direct, .. }))
            .count();
        // Demo geometry leaves the sight line clear
        assert_eq!(direct, 1);

        let circles = prims
            .iter()
            .filter(|p| matches!(p, Primitive::Circle { .. }))
            .count();
        // Outline + center dot per mirror, two endpoints, plus one marker
        // per mirror that found a reflection path
        let paths = (0..scene.mirrors.len())
            .filter(|&i| schema::reflection_path(&scene, i).is_some())
            .count();
        assert_eq!(circles, scene.mirrors.len() * 2 + 2 + paths);
    }

    #[test]
    fn reflection_legs_share_the_accepted_point() {
        let scene = Scene2D::new(
            vec![crate::scene::Circle::new(Vec2::new(0.0, 0.0), 10.0, ColorTag("blue")).unwrap()],
            Vec2::new(50.0, 10.0),
            Vec2::new(50.0, -10.0),
        );
        let prims = render_2d(&scene);
        let legs: Vec<_> = prims
            .iter()
            .filter_map(|p| match p {
                Primitive::Segment {
                    x1,
                    y1,
                    x2,
                    y2,
                    style: SegmentStyle::Reflection,
                } => Some(((*x1, *y1), (*x2, *y2))),
                _ => None,
            })
            .collect();
        assert_eq!(legs.len(), 2);
        // source -> point, then point -> target
        assert_eq!(legs[0].1, legs[1].0);
        assert_eq!(legs[0].0, (50.0, 10.0));
        assert_eq!(legs[1].1, (50.0, -10.0));
    }
}
