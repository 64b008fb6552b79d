//! Gradient fills for line plots
//!
//! Draws a curve together with a gradient-opacity fill beneath it or around a
//! reference level. The fill is an alpha ramp stretched over the curve's
//! bounding box and clipped to a polygon that follows the curve, all drawn
//! through an injected [`DrawSurface`](gradfill_core::DrawSurface).
//!
//! # Example
//!
//! ```rust
//! use gradfill::{gradient_fill_about_level, FillOptions};
//! use gradfill_core::{Axes, Color, DrawSurface, LineStyle};
//!
//! let x = [0.0, 1.0, 2.0, 3.0];
//! let y = [1.0, -2.0, 0.5, 3.0];
//!
//! let mut axes = Axes::new();
//! let style = LineStyle::new(2.0).with_color(Color::BLUE);
//! let fill = gradient_fill_about_level(&mut axes, &x, &y, 0.0, &style, &FillOptions::default())
//!     .unwrap();
//!
//! assert_eq!(axes.line(fill.line).unwrap().points().len(), 4);
//! ```

pub mod error;
pub mod fill;
pub mod options;
pub mod ramp;

pub use error::FillError;
pub use fill::{gradient_fill, gradient_fill_about_level, GradientFill};
pub use options::{FillOptions, LevelClip};
pub use ramp::{linspace, AlphaRamp, LevelPosition, RAMP_SAMPLES};
