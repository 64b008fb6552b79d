//! Fill error types

use gradfill_core::SurfaceError;
use thiserror::Error;

/// Errors that can occur while drawing a gradient fill
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FillError {
    /// The drawing surface rejected an operation
    #[error("drawing surface error: {0}")]
    Surface(#[from] SurfaceError),

    /// The curve has no points, so its extent is undefined
    #[error("cannot fill an empty curve")]
    EmptyCurve,

    /// The level lies on a curve whose values never change, which would
    /// divide zero by zero when splitting the ramp
    #[error("curve is flat at the reference level {level}")]
    FlatCurve { level: f64 },
}
