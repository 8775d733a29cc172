//! Error types for scene construction.
//!
//! Degenerate geometry and out-of-range trace parameters are rejected when a
//! scene is assembled, so the tracing code never has to re-check them.

use thiserror::Error;

/// Errors raised while assembling a scene snapshot.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SceneError {
    /// Sphere or circle radius was zero or negative.
    #[error("radius must be positive, got {0}")]
    InvalidRadius(f32),

    /// Sphere reflectivity outside the [0, 1] range.
    #[error("reflectivity must lie in [0, 1], got {0}")]
    InvalidReflectivity(f32),

    /// Primary ray count of zero.
    #[error("ray count must be at least 1")]
    InvalidRayCount,

    /// Ray intensity outside the (0, 1] range.
    #[error("ray intensity must lie in (0, 1], got {0}")]
    InvalidIntensity(f32),
}

/// Crate-wide result alias for scene construction.
pub type Result<T> = std::result::Result<T, SceneError>;
