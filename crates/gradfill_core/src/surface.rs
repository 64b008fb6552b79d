//! Drawing Surface - the boundary the fill operations draw through
//!
//! A `DrawSurface` plots lines, composites images over a data extent, holds
//! clip shapes and clips images to them. Every mutation returns a handle the
//! caller can use to query the artist back, which is how the fill operations
//! learn the color, alpha and z-order a surface resolved for a line.
//!
//! # Example
//!
//! ```ignore
//! fn draw(surface: &mut dyn DrawSurface) -> Result<(), SurfaceError> {
//!     let line = surface.plot_line(&x, &y, &LineStyle::default())?;
//!     let z = surface.line(line).map(|l| l.z_order()).unwrap_or_default();
//!
//!     let image = surface.show_image(texture, ImageOptions::new(extent).with_z_order(z))?;
//!     let clip = surface.add_clip(ClipPolygon::from_curve(&x, &y));
//!     surface.set_image_clip(image, clip)
//! }
//! ```

use slotmap::new_key_type;

use crate::clip::ClipPolygon;
use crate::color::Color;
use crate::error::SurfaceError;
use crate::geometry::{Extent, Point};
use crate::style::LineStyle;
use crate::texture::{ImageOptions, Texture};

new_key_type! {
    /// Handle to a plotted line
    pub struct LineId;
    /// Handle to a composited image
    pub struct ImageId;
    /// Handle to a clip shape
    pub struct ClipId;
}

/// A plotted line with its style resolved
#[derive(Clone, Debug)]
pub struct Line {
    points: Vec<Point>,
    color: Color,
    alpha: Option<f32>,
    z_order: f32,
    style: LineStyle,
}

impl Line {
    /// A line whose style has already been resolved by a surface
    pub fn new(points: Vec<Point>, color: Color, z_order: f32, style: LineStyle) -> Self {
        Self {
            points,
            color,
            alpha: style.alpha,
            z_order,
            style,
        }
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// The resolved line color
    pub fn color(&self) -> Color {
        self.color
    }

    /// Line opacity, `None` when the style left it unset
    pub fn alpha(&self) -> Option<f32> {
        self.alpha
    }

    pub fn z_order(&self) -> f32 {
        self.z_order
    }

    pub fn style(&self) -> &LineStyle {
        &self.style
    }

    pub fn extent(&self) -> Option<Extent> {
        Extent::of_points(&self.points)
    }
}

/// A texture composited over a data extent
#[derive(Clone, Debug)]
pub struct Image {
    texture: Texture,
    options: ImageOptions,
    clip: Option<ClipId>,
}

impl Image {
    pub fn new(texture: Texture, options: ImageOptions) -> Self {
        Self {
            texture,
            options,
            clip: None,
        }
    }

    /// Restrict the image to a clip shape
    pub fn set_clip(&mut self, clip: ClipId) {
        self.clip = Some(clip);
    }

    pub fn texture(&self) -> &Texture {
        &self.texture
    }

    pub fn options(&self) -> &ImageOptions {
        &self.options
    }

    pub fn extent(&self) -> Extent {
        self.options.extent
    }

    pub fn z_order(&self) -> f32 {
        self.options.z_order
    }

    /// The clip shape this image is restricted to, if any
    pub fn clip(&self) -> Option<ClipId> {
        self.clip
    }
}

/// A clip shape held by the surface
///
/// Clip shapes are never painted.
#[derive(Clone, Debug)]
pub struct Clip {
    polygon: ClipPolygon,
}

impl Clip {
    pub fn new(polygon: ClipPolygon) -> Self {
        Self { polygon }
    }

    pub fn polygon(&self) -> &ClipPolygon {
        &self.polygon
    }
}

/// The drawing operations the fill helpers rely on
pub trait DrawSurface {
    /// Plot `(x, y)` as a polyline
    ///
    /// Fails with [`SurfaceError::LengthMismatch`] when the slices differ in
    /// length.
    fn plot_line(&mut self, x: &[f64], y: &[f64], style: &LineStyle)
        -> Result<LineId, SurfaceError>;

    /// Look up a plotted line
    fn line(&self, id: LineId) -> Option<&Line>;

    /// Composite a texture over `options.extent`
    fn show_image(&mut self, texture: Texture, options: ImageOptions)
        -> Result<ImageId, SurfaceError>;

    /// Look up a composited image
    fn image(&self, id: ImageId) -> Option<&Image>;

    /// Add an invisible clip shape
    fn add_clip(&mut self, polygon: ClipPolygon) -> ClipId;

    /// Look up a clip shape
    fn clip(&self, id: ClipId) -> Option<&Clip>;

    /// Restrict an image to a clip shape, replacing any previous clip
    fn set_image_clip(&mut self, image: ImageId, clip: ClipId) -> Result<(), SurfaceError>;
}
