//! Whole-frame checks against the stock demo scenes.

use lumipath::camera::Viewport;
use lumipath::frame::{self, Primitive, SegmentStyle};
use lumipath::scene::{Scene2D, Scene3D};
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

#[test]
fn seeded_demo_frame_is_reproducible() {
    let mut scene = Scene3D::demo().unwrap();
    // Face the sphere field so the frame has content
    scene.camera.angle = 180.0;

    let render = || {
        let mut rng = ChaCha20Rng::seed_from_u64(42);
        frame::render_3d(&scene, Viewport::default(), &mut rng)
    };

    let first = render();
    assert_eq!(first, render());
    assert!(!first.is_empty());
}

#[test]
fn demo_frame_respects_bounce_depth_in_styles() {
    let mut scene = Scene3D::demo().unwrap();
    scene.camera.angle = 180.0;
    let mut rng = ChaCha20Rng::seed_from_u64(42);

    for prim in frame::render_3d(&scene, Viewport::default(), &mut rng) {
        if let Primitive::Segment {
            style: SegmentStyle::Ray { depth, intensity },
            ..
        } = prim
        {
            assert!(depth <= scene.config.max_depth);
            let expected = scene.config.intensity * (1.0 - depth as f32 * 0.3);
            assert!((intensity - expected).abs() < 1e-6);
        }
    }
}

#[test]
fn engine_leaves_the_snapshot_untouched() {
    let mut scene = Scene3D::demo().unwrap();
    scene.camera.angle = 180.0;
    let spheres_before: Vec<_> = scene.spheres.iter().map(|s| (s.center, s.radius)).collect();
    let source_before = scene.source;

    let mut rng = ChaCha20Rng::seed_from_u64(1);
    let _ = frame::render_3d(&scene, Viewport::default(), &mut rng);

    let spheres_after: Vec<_> = scene.spheres.iter().map(|s| (s.center, s.radius)).collect();
    assert_eq!(spheres_before, spheres_after);
    assert_eq!(source_before, scene.source);
}

#[test]
fn demo_schematic_is_stable_across_runs() {
    let scene = Scene2D::demo().unwrap();
    let first = frame::render_2d(&scene);
    // The 2D search has no hidden randomness
    for _ in 0..5 {
        assert_eq!(first, frame::render_2d(&scene));
    }
}
