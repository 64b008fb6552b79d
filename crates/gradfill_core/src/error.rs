//! Error types for drawing surfaces and color parsing

use thiserror::Error;

/// Errors raised by a drawing surface
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SurfaceError {
    /// The x and y sequences of a curve differ in length
    #[error("x and y must have the same length, got {x} and {y}")]
    LengthMismatch { x: usize, y: usize },

    /// A line handle does not belong to this surface
    #[error("unknown line handle")]
    UnknownLine,

    /// An image handle does not belong to this surface
    #[error("unknown image handle")]
    UnknownImage,

    /// A clip handle does not belong to this surface
    #[error("unknown clip handle")]
    UnknownClip,

    /// Texture dimensions don't match its texel count
    #[error("invalid texture: {0}")]
    InvalidTexture(String),
}

/// A color specifier that could not be understood
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid color specifier: {0:?}")]
pub struct ColorParseError(pub String);
