use std::time::Instant;

use clap::Parser;
use log::{error, info};
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

mod cli;
mod logger;

use cli::Args;
use logger::init_logger;
use lumipath::camera::Viewport;
use lumipath::error::SceneError;
use lumipath::scene::{self, Scene2D, Scene3D, TraceConfig};
use lumipath::frame;

/// Orbit step per animation frame, in degrees.
const FRAME_ANGLE_STEP: f32 = 2.0;

fn main() {
    let args = Args::parse();

    init_logger(args.debug_level.clone().into());

    // Log application startup with version information
    info!("LumiPath - Git Version {} ({})", env!("GIT_HASH"), env!("GIT_DATE"));

    match run(&args) {
        Ok(()) => {}
        Err(e) => {
            error!("scene construction failed: {e}");
            std::process::exit(1);
        }
    }
}

fn run(args: &Args) -> Result<(), SceneError> {
    let config = TraceConfig::new(
        args.rays,
        args.depth,
        args.intensity,
        !args.no_normals,
        !args.no_grid,
    )?;

    let mut scene = Scene3D::demo()?;
    scene.config = config;
    scene.camera.angle = args.angle;

    let viewport = Viewport::new(args.width as f32, args.height as f32);
    let mut rng = ChaCha20Rng::seed_from_u64(args.seed);

    info!(
        "Viewport {}x{}, {} rays, depth {}, seed {}",
        args.width, args.height, config.num_rays, config.max_depth, args.seed
    );

    for frame_idx in 0..args.frames {
        if args.frames > 1 {
            // Animated run: orbit the endpoints the way the 50 ms driver does
            let (source, target) = scene::orbit(frame_idx as f32 * FRAME_ANGLE_STEP);
            scene.source = source;
            scene.target = target;
        }

        let start = Instant::now();
        let prims = frame::render_3d(&scene, viewport, &mut rng);
        info!(
            "frame {}: {} primitives in {:.2?}",
            frame_idx,
            prims.len(),
            start.elapsed()
        );

        if args.dump {
            for prim in &prims {
                println!("{prim:?}");
            }
        }
    }

    let schematic = Scene2D::demo()?;
    let start = Instant::now();
    let prims = frame::render_2d(&schematic);
    info!(
        "schematic: {} primitives in {:.2?}",
        prims.len(),
        start.elapsed()
    );

    if args.dump {
        for prim in &prims {
            println!("{prim:?}");
        }
    }

    Ok(())
}
