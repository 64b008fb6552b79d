//! Raster output for gradfill
//!
//! Renders the artists recorded by an [`Axes`](gradfill_core::Axes) into an
//! RGBA pixmap with tiny-skia: lines are stroked, gradient images are filled
//! through a pattern shader and masked by their clip polygon.
//!
//! # Example
//!
//! ```ignore
//! use gradfill_raster::{RasterRenderer, RenderOptions};
//!
//! let plot = RasterRenderer::new(RenderOptions::new(640, 480)).render(&axes)?;
//! std::fs::write("fill.png", plot.to_png()?)?;
//! ```

mod error;
mod render;
mod viewport;

pub use error::RasterError;
pub use render::{RasterRenderer, RasterizedPlot, RenderOptions};
pub use viewport::Viewport;
