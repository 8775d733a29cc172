use clap::{Parser, ValueEnum};
use log::LevelFilter;

/// Custom enum for log levels that can be used with clap's ValueEnum
#[derive(Debug, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convert our custom LogLevel enum to log crate's LevelFilter
impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

/// Command line arguments structure using clap derive macros
#[derive(Parser)]
#[command(name = "lumipath")]
#[command(about = "Specular reflection path engine demo")]
pub struct Args {
    /// Set the logging level (defaults to "info")
    #[arg(long, default_value = "info", help = "Set the logging level")]
    pub debug_level: LogLevel,

    /// Number of primary rays per frame
    #[arg(long, short = 'n', default_value = "36", help = "Number of primary rays per frame")]
    pub rays: u32,

    /// Maximum reflection bounce depth
    #[arg(long, short = 'd', default_value = "3", help = "Maximum reflection bounce depth")]
    pub depth: u32,

    /// Base ray intensity in (0, 1]
    #[arg(long, default_value = "0.8", help = "Base ray intensity in (0, 1]")]
    pub intensity: f32,

    /// RNG seed for reproducible ray sets
    #[arg(long, default_value = "42", help = "RNG seed for reproducible ray sets")]
    pub seed: u64,

    /// Viewport width in pixels
    #[arg(long, default_value = "1000", help = "Viewport width in pixels")]
    pub width: u32,

    /// Viewport height in pixels
    #[arg(long, default_value = "700", help = "Viewport height in pixels")]
    pub height: u32,

    /// Camera yaw in degrees (180 faces the demo scene)
    #[arg(long, default_value = "180", help = "Camera yaw in degrees (180 faces the demo scene)")]
    pub angle: f32,

    /// Number of animation frames to render (source and receiver orbit)
    #[arg(long, short = 'f', default_value = "1", help = "Number of animation frames to render")]
    pub frames: u32,

    /// Disable surface-normal overlays
    #[arg(long, help = "Disable surface-normal overlays")]
    pub no_normals: bool,

    /// Disable the floor grid
    #[arg(long, help = "Disable the floor grid")]
    pub no_grid: bool,

    /// Print every emitted draw primitive
    #[arg(long, help = "Print every emitted draw primitive")]
    pub dump: bool,
}
