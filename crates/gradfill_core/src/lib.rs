//! Gradfill Core
//!
//! Foundational types shared by the gradient fill operations and the
//! raster backend:
//!
//! - **Geometry**: data-space points and axis-aligned extents
//! - **Colors**: straight-alpha RGBA with color specifier parsing
//! - **Line styles**: the recognized options for plotting a curve
//! - **Textures**: small RGBA images stretched over a data extent
//! - **Clip polygons**: closed shapes restricting where an image is visible
//! - **Drawing surface**: the `DrawSurface` trait and the in-memory `Axes`
//!
//! # Example
//!
//! ```rust
//! use gradfill_core::{Axes, DrawSurface, LineStyle};
//!
//! let mut axes = Axes::new();
//! let id = axes
//!     .plot_line(&[0.0, 1.0, 2.0], &[1.0, 3.0, 2.0], &LineStyle::new(2.0))
//!     .unwrap();
//!
//! let line = axes.line(id).unwrap();
//! assert_eq!(line.points().len(), 3);
//! assert_eq!(line.z_order(), 2.0);
//! ```

pub mod axes;
pub mod clip;
pub mod color;
pub mod error;
pub mod geometry;
pub mod style;
pub mod surface;
pub mod texture;

pub use axes::{Artist, Axes};
pub use clip::ClipPolygon;
pub use color::{Color, DEFAULT_CYCLE};
pub use error::{ColorParseError, SurfaceError};
pub use geometry::{Extent, Point};
pub use style::{LineCap, LineJoin, LineStyle, DEFAULT_LINE_Z_ORDER};
pub use surface::{Clip, ClipId, DrawSurface, Image, ImageId, Line, LineId};
pub use texture::{ImageOptions, Origin, Texture};
