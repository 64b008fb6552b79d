//! Surface rasterization using tiny-skia
//!
//! Produces anti-aliased RGBA output for everything an `Axes` holds. Artists
//! are painted in draw order; clip shapes only act as masks for the images
//! that reference them.

use gradfill_core::{
    Artist, Axes, ClipPolygon, Color, DrawSurface, Extent, Image, Line, LineCap, LineJoin, Origin,
    Point, SurfaceError,
};
use tiny_skia as sk;

use crate::error::RasterError;
use crate::viewport::Viewport;

/// Output configuration for the raster renderer
#[derive(Clone, Debug, PartialEq)]
pub struct RenderOptions {
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
    /// Color painted before any artist
    pub background: Color,
    /// Padding around the data limits as a fraction of their span
    pub margin: f64,
    /// Anti-alias strokes and clip masks
    pub anti_alias: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: 640,
            height: 480,
            background: Color::WHITE,
            margin: 0.05,
            anti_alias: true,
        }
    }
}

impl RenderOptions {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            ..Default::default()
        }
    }

    pub fn with_background(mut self, background: Color) -> Self {
        self.background = background;
        self
    }

    pub fn with_margin(mut self, margin: f64) -> Self {
        self.margin = margin;
        self
    }

    pub fn with_anti_alias(mut self, anti_alias: bool) -> Self {
        self.anti_alias = anti_alias;
        self
    }
}

/// Rasterized plot image
pub struct RasterizedPlot {
    pixmap: sk::Pixmap,
}

impl RasterizedPlot {
    /// RGBA pixel data with straight alpha
    pub fn pixels(&self) -> Vec<u8> {
        unpremultiply_alpha(self.pixmap.data())
    }

    /// Straight-alpha RGBA of a single pixel
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        let c = self.pixmap.pixel(x, y)?.demultiply();
        Some([c.red(), c.green(), c.blue(), c.alpha()])
    }

    /// Get the dimensions
    pub fn dimensions(&self) -> (u32, u32) {
        (self.pixmap.width(), self.pixmap.height())
    }

    /// Encode as PNG
    pub fn to_png(&self) -> Result<Vec<u8>, RasterError> {
        self.pixmap
            .encode_png()
            .map_err(|e| RasterError::Encode(e.to_string()))
    }
}

/// Renders an `Axes` into a pixmap
#[derive(Clone, Debug, Default)]
pub struct RasterRenderer {
    options: RenderOptions,
}

impl RasterRenderer {
    pub fn new(options: RenderOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    pub fn render(&self, axes: &Axes) -> Result<RasterizedPlot, RasterError> {
        let (width, height) = (self.options.width, self.options.height);
        let mut pixmap =
            sk::Pixmap::new(width, height).ok_or(RasterError::InvalidDimensions { width, height })?;
        pixmap.fill(to_sk_color(self.options.background));

        let limits = axes
            .data_limits()
            .unwrap_or(Extent::new(0.0, 1.0, 0.0, 1.0));
        let viewport = Viewport::fit(limits, self.options.margin, width, height);

        let order = axes.draw_order();
        tracing::debug!(artists = order.len(), width, height, "rasterizing axes");

        for artist in order {
            match artist {
                Artist::Line(id) => {
                    if let Some(line) = axes.line(id) {
                        self.draw_line(&mut pixmap, &viewport, line);
                    }
                }
                Artist::Image(id) => {
                    if let Some(image) = axes.image(id) {
                        self.draw_image(&mut pixmap, &viewport, axes, image)?;
                    }
                }
                Artist::Clip(_) => {}
            }
        }

        Ok(RasterizedPlot { pixmap })
    }

    fn draw_line(&self, pixmap: &mut sk::Pixmap, viewport: &Viewport, line: &Line) {
        let Some(path) = polyline_path(viewport, line.points().iter().copied(), false) else {
            tracing::trace!("skipping line with fewer than two points");
            return;
        };

        let style = line.style();
        let color = line.color();
        let alpha = color.a * line.alpha().unwrap_or(1.0);

        let mut paint = sk::Paint::default();
        paint.set_color(to_sk_color(color.with_alpha(alpha)));
        paint.anti_alias = self.options.anti_alias;

        let stroke = sk::Stroke {
            width: style.width,
            line_cap: match style.cap {
                LineCap::Butt => sk::LineCap::Butt,
                LineCap::Round => sk::LineCap::Round,
                LineCap::Square => sk::LineCap::Square,
            },
            line_join: match style.join {
                LineJoin::Miter => sk::LineJoin::Miter,
                LineJoin::Round => sk::LineJoin::Round,
                LineJoin::Bevel => sk::LineJoin::Bevel,
            },
            dash: if style.is_dashed() {
                sk::StrokeDash::new(style.dash.to_vec(), style.dash_offset)
            } else {
                None
            },
            ..Default::default()
        };

        pixmap.stroke_path(&path, &paint, &stroke, sk::Transform::identity(), None);
    }

    fn draw_image(
        &self,
        pixmap: &mut sk::Pixmap,
        viewport: &Viewport,
        axes: &Axes,
        image: &Image,
    ) -> Result<(), RasterError> {
        let extent = image.extent();
        let (left, bottom) = viewport.to_device((extent.xmin, extent.ymin).into());
        let (right, top) = viewport.to_device((extent.xmax, extent.ymax).into());
        let Some(rect) = sk::Rect::from_ltrb(left, top, right, bottom) else {
            tracing::trace!(extent = ?extent.to_array(), "skipping image with empty extent");
            return Ok(());
        };

        let mask = match image.clip() {
            Some(id) => {
                let clip = axes.clip(id).ok_or(SurfaceError::UnknownClip)?;
                let Some(mask) = self.clip_mask(pixmap, viewport, clip.polygon()) else {
                    // nothing survives an empty clip
                    return Ok(());
                };
                Some(mask)
            }
            None => None,
        };

        let texture = texture_pixmap(image)?;
        let (tw, th) = (texture.width() as f32, texture.height() as f32);
        let pattern_transform =
            sk::Transform::from_row(rect.width() / tw, 0.0, 0.0, rect.height() / th, left, top);

        let mut paint = sk::Paint::default();
        paint.anti_alias = self.options.anti_alias;
        paint.shader = sk::Pattern::new(
            texture.as_ref(),
            sk::SpreadMode::Pad,
            sk::FilterQuality::Bilinear,
            image.options().opacity,
            pattern_transform,
        );

        pixmap.fill_rect(rect, &paint, sk::Transform::identity(), mask.as_ref());
        Ok(())
    }

    fn clip_mask(
        &self,
        pixmap: &sk::Pixmap,
        viewport: &Viewport,
        polygon: &ClipPolygon,
    ) -> Option<sk::Mask> {
        let path = polyline_path(viewport, polygon.vertices().iter().copied(), true)?;
        let mut mask = sk::Mask::new(pixmap.width(), pixmap.height())?;
        mask.fill_path(
            &path,
            sk::FillRule::Winding,
            self.options.anti_alias,
            sk::Transform::identity(),
        );
        Some(mask)
    }
}

fn polyline_path(
    viewport: &Viewport,
    points: impl Iterator<Item = Point>,
    close: bool,
) -> Option<sk::Path> {
    let mut pb = sk::PathBuilder::new();
    for (i, p) in points.enumerate() {
        let (x, y) = viewport.to_device(p);
        if i == 0 {
            pb.move_to(x, y);
        } else {
            pb.line_to(x, y);
        }
    }
    if close {
        pb.close();
    }
    pb.finish()
}

/// Build a premultiplied pixmap from a texture, honoring its origin
fn texture_pixmap(image: &Image) -> Result<sk::Pixmap, RasterError> {
    let texture = image.texture();
    let (width, height) = (texture.width() as u32, texture.height() as u32);
    let mut pixmap =
        sk::Pixmap::new(width, height).ok_or(RasterError::InvalidDimensions { width, height })?;

    let rows = texture.height();
    let cols = texture.width();
    let pixels = pixmap.pixels_mut();
    for row in 0..rows {
        let source_row = match image.options().origin {
            Origin::Upper => row,
            Origin::Lower => rows - 1 - row,
        };
        for col in 0..cols {
            let [r, g, b, a] = texture
                .texel(col, source_row)
                .unwrap_or(Color::TRANSPARENT)
                .to_rgba8();
            pixels[row * cols + col] = sk::ColorU8::from_rgba(r, g, b, a).premultiply();
        }
    }
    Ok(pixmap)
}

fn to_sk_color(color: Color) -> sk::Color {
    let [r, g, b, a] = color.to_rgba8();
    sk::Color::from_rgba8(r, g, b, a)
}

/// Convert premultiplied alpha to straight alpha
///
/// tiny-skia stores premultiplied alpha, but PNG consumers and pixel
/// assertions expect straight alpha.
fn unpremultiply_alpha(data: &[u8]) -> Vec<u8> {
    let mut result = Vec::with_capacity(data.len());

    for chunk in data.chunks_exact(4) {
        let a = chunk[3] as f32 / 255.0;
        if a > 0.0 {
            // Unpremultiply: RGB = RGB_premul / A
            let r = ((chunk[0] as f32 / a).min(255.0)) as u8;
            let g = ((chunk[1] as f32 / a).min(255.0)) as u8;
            let b = ((chunk[2] as f32 / a).min(255.0)) as u8;
            result.extend_from_slice(&[r, g, b, chunk[3]]);
        } else {
            result.extend_from_slice(&[0, 0, 0, 0]);
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use gradfill_core::{ImageId, ImageOptions, LineStyle, Texture};

    const X: [f64; 3] = [0.0, 1.0, 2.0];
    const Y: [f64; 3] = [1.0, 3.0, 2.0];
    const WHITE: [u8; 4] = [255, 255, 255, 255];

    fn render(axes: &Axes) -> RasterizedPlot {
        RasterRenderer::new(RenderOptions::new(100, 100).with_margin(0.0))
            .render(axes)
            .unwrap()
    }

    fn gradient_image(axes: &mut Axes) -> ImageId {
        let alphas: Vec<f32> = (0..100).map(|i| i as f32 / 99.0).collect();
        let texture = Texture::column(Color::BLUE, &alphas).unwrap();
        let extent = Extent::new(0.0, 2.0, 1.0, 3.0);
        axes.show_image(texture, ImageOptions::new(extent).with_origin(Origin::Lower))
            .unwrap()
    }

    #[test]
    fn test_empty_axes_is_background() {
        let plot = render(&Axes::new());
        assert_eq!(plot.dimensions(), (100, 100));
        assert_eq!(plot.pixels().len(), 100 * 100 * 4);
        assert_eq!(plot.pixel(10, 10), Some(WHITE));
    }

    #[test]
    fn test_zero_dimensions_error() {
        let axes = Axes::new();
        assert!(RasterRenderer::new(RenderOptions::new(0, 10))
            .render(&axes)
            .is_err());
        assert!(RasterRenderer::new(RenderOptions::new(10, 0))
            .render(&axes)
            .is_err());
    }

    #[test]
    fn test_lower_origin_puts_row_zero_at_bottom() {
        let mut axes = Axes::new();
        gradient_image(&mut axes);
        let plot = render(&axes);

        // blue over white: the red channel drops as opacity grows
        let near_top = plot.pixel(50, 2).unwrap();
        let near_bottom = plot.pixel(50, 97).unwrap();
        assert!(near_top[0] < 20, "top {near_top:?}");
        assert!(near_bottom[0] > 235, "bottom {near_bottom:?}");
    }

    #[test]
    fn test_clip_hides_image_outside_polygon() {
        let mut axes = Axes::new();
        let image = gradient_image(&mut axes);
        let extent = Extent::new(0.0, 2.0, 1.0, 3.0);
        let clip = axes.add_clip(ClipPolygon::closed_at(&X, &Y, &extent, 1.0));
        axes.set_image_clip(image, clip).unwrap();
        let plot = render(&axes);

        // (1.0, 2.5) sits under the peak, (1.9, 2.5) above the right segment
        let inside = plot.pixel(50, 25).unwrap();
        let outside = plot.pixel(95, 25).unwrap();
        assert!(inside[0] < 128, "inside {inside:?}");
        assert_eq!(outside, WHITE);
    }

    #[test]
    fn test_line_is_stroked() {
        let mut axes = Axes::new();
        axes.plot_line(
            &[0.0, 2.0],
            &[2.0, 2.0],
            &LineStyle::new(4.0).with_color(Color::RED),
        )
        .unwrap();
        let plot = RasterRenderer::new(RenderOptions::new(100, 100))
            .render(&axes)
            .unwrap();

        // flat data is centered vertically
        assert_eq!(plot.pixel(50, 50), Some([255, 0, 0, 255]));
        assert_eq!(plot.pixel(50, 10), Some(WHITE));
    }

    #[test]
    fn test_png_encoding() {
        let png = render(&Axes::new()).to_png().unwrap();
        assert_eq!(&png[..4], &[0x89, b'P', b'N', b'G']);
    }

    #[test]
    fn test_unpremultiply() {
        let straight = unpremultiply_alpha(&[64, 0, 0, 128, 10, 10, 10, 0]);
        assert_eq!(straight, vec![127, 0, 0, 128, 0, 0, 0, 0]);
    }
}
