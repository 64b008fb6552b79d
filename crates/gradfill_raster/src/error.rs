//! Raster error types

use gradfill_core::SurfaceError;
use thiserror::Error;

/// Errors that can occur when rasterizing a surface
#[derive(Error, Debug)]
pub enum RasterError {
    /// Output dimensions are zero or too large to allocate
    #[error("invalid dimensions {width}x{height}: width and height must be > 0")]
    InvalidDimensions { width: u32, height: u32 },

    /// An artist references something the surface doesn't hold
    #[error("surface error: {0}")]
    Surface(#[from] SurfaceError),

    /// PNG encoding failed
    #[error("PNG encoding error: {0}")]
    Encode(String),
}
