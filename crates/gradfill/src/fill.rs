//! Gradient fill operations
//!
//! Both operations plot the curve, build an alpha ramp, stretch it over the
//! curve's bounding box at the line's z-order, and clip it to a polygon that
//! follows the curve.

use gradfill_core::{
    ClipId, ClipPolygon, DrawSurface, Extent, ImageId, ImageOptions, LineId, LineStyle, Origin,
    SurfaceError, Texture,
};

use crate::error::FillError;
use crate::options::{FillOptions, LevelClip};
use crate::ramp::{AlphaRamp, LevelPosition};

/// Handles to the artists a fill added to its surface
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GradientFill {
    /// The plotted curve
    pub line: LineId,
    /// The gradient image, clipped to `clip`
    pub image: ImageId,
    /// The clip shape
    pub clip: ClipId,
}

/// Plot a line with a linear alpha gradient filled beneath it
///
/// Opacity runs from `min_alpha * fill_alpha * line_alpha` at the curve's
/// minimum to `fill_alpha * line_alpha` at its maximum, and the gradient is
/// clipped to the area between the curve and its minimum.
///
/// # Example
///
/// ```rust
/// use gradfill::{gradient_fill, FillOptions};
/// use gradfill_core::{Axes, DrawSurface, LineStyle};
///
/// let mut axes = Axes::new();
/// let fill = gradient_fill(
///     &mut axes,
///     &[0.0, 1.0, 2.0],
///     &[1.0, 3.0, 2.0],
///     &LineStyle::default(),
///     &FillOptions::default(),
/// )
/// .unwrap();
///
/// let image = axes.image(fill.image).unwrap();
/// assert_eq!(image.extent().to_array(), [0.0, 2.0, 1.0, 3.0]);
/// ```
pub fn gradient_fill<S>(
    surface: &mut S,
    x: &[f64],
    y: &[f64],
    style: &LineStyle,
    options: &FillOptions,
) -> Result<GradientFill, FillError>
where
    S: DrawSurface + ?Sized,
{
    let line = surface.plot_line(x, y, style)?;
    let extent = Extent::of_curve(x, y).ok_or(FillError::EmptyCurve)?;
    let (min_alpha, fill_alpha) = effective_alphas(&*surface, line, options)?;

    let ramp = AlphaRamp::below_curve(min_alpha, fill_alpha);
    tracing::debug!(
        min_alpha,
        fill_alpha,
        extent = ?extent.to_array(),
        "gradient fill below curve"
    );

    let clip = ClipPolygon::closed_at(x, y, &extent, extent.ymin);
    composite(surface, line, extent, &ramp, clip, options)
}

/// Plot a line with an alpha gradient measured against a reference level
///
/// The fill is most opaque far from `level` and fades towards it. When the
/// level cuts through the curve's value range, the ramp splits at the level
/// and the gradient is clipped to the band between the curve and the level.
/// Outside the range the clip follows `options.level_clip`.
pub fn gradient_fill_about_level<S>(
    surface: &mut S,
    x: &[f64],
    y: &[f64],
    level: f64,
    style: &LineStyle,
    options: &FillOptions,
) -> Result<GradientFill, FillError>
where
    S: DrawSurface + ?Sized,
{
    let line = surface.plot_line(x, y, style)?;
    let extent = Extent::of_curve(x, y).ok_or(FillError::EmptyCurve)?;
    let (min_alpha, fill_alpha) = effective_alphas(&*surface, line, options)?;

    let (ramp, position) = AlphaRamp::about_level(&extent, level, min_alpha, fill_alpha)?;
    tracing::debug!(
        level,
        ?position,
        min_alpha,
        fill_alpha,
        "gradient fill about level"
    );

    let clip = match (position, options.level_clip) {
        (LevelPosition::Within { .. }, _) | (_, LevelClip::CloseAtLevel) => {
            ClipPolygon::closed_at(x, y, &extent, level)
        }
        (_, LevelClip::CurveOnly) => ClipPolygon::from_curve(x, y),
    };
    composite(surface, line, extent, &ramp, clip, options)
}

fn effective_alphas<S>(
    surface: &S,
    line: LineId,
    options: &FillOptions,
) -> Result<(f64, f64), FillError>
where
    S: DrawSurface + ?Sized,
{
    let line = surface.line(line).ok_or(SurfaceError::UnknownLine)?;
    Ok(options.effective_alphas(line.alpha()))
}

fn composite<S>(
    surface: &mut S,
    line: LineId,
    extent: Extent,
    ramp: &AlphaRamp,
    clip: ClipPolygon,
    options: &FillOptions,
) -> Result<GradientFill, FillError>
where
    S: DrawSurface + ?Sized,
{
    let (line_color, z_order) = {
        let plotted = surface.line(line).ok_or(SurfaceError::UnknownLine)?;
        (plotted.color(), plotted.z_order())
    };
    let fill_color = options.fill_color.unwrap_or(line_color);

    let texture = Texture::column(fill_color, &ramp.to_alphas())?;
    let image_options = ImageOptions::new(extent)
        .with_origin(Origin::Lower)
        .with_z_order(z_order);
    let image = surface.show_image(texture, image_options)?;

    let clip = surface.add_clip(clip);
    surface.set_image_clip(image, clip)?;

    tracing::debug!("gradient fill added {:?}, {:?}, {:?}", line, image, clip);
    Ok(GradientFill { line, image, clip })
}

#[cfg(test)]
mod tests {
    use super::*;
    use gradfill_core::{Artist, Axes, Color, Point};

    const X: [f64; 3] = [0.0, 1.0, 2.0];
    const Y: [f64; 3] = [1.0, 3.0, 2.0];

    fn ramp_of(axes: &Axes, fill: &GradientFill) -> Vec<f32> {
        axes.image(fill.image).unwrap().texture().column_alphas()
    }

    #[test]
    fn test_gradient_fill_adds_three_artists() {
        let mut axes = Axes::new();
        let fill = gradient_fill(
            &mut axes,
            &X,
            &Y,
            &LineStyle::default(),
            &FillOptions::default(),
        )
        .unwrap();

        assert_eq!(
            axes.artists(),
            &[
                Artist::Line(fill.line),
                Artist::Image(fill.image),
                Artist::Clip(fill.clip)
            ]
        );
        assert_eq!(axes.image(fill.image).unwrap().clip(), Some(fill.clip));
    }

    #[test]
    fn test_gradient_fill_inherits_line_color_and_z_order() {
        let mut axes = Axes::new();
        let style = LineStyle::default()
            .with_color(Color::RED)
            .with_z_order(3.0);
        let fill = gradient_fill(&mut axes, &X, &Y, &style, &FillOptions::default()).unwrap();

        let image = axes.image(fill.image).unwrap();
        assert_eq!(image.z_order(), 3.0);
        assert_eq!(image.options().origin, Origin::Lower);
        let texel = image.texture().texel(0, 99).unwrap();
        assert_eq!((texel.r, texel.g, texel.b), (1.0, 0.0, 0.0));
    }

    #[test]
    fn test_explicit_fill_color_wins() {
        let mut axes = Axes::new();
        let opts = FillOptions::new().with_fill_color(Color::BLUE);
        let fill = gradient_fill(&mut axes, &X, &Y, &LineStyle::default(), &opts).unwrap();

        let texel = axes.image(fill.image).unwrap().texture().texel(0, 0).unwrap();
        assert_eq!((texel.r, texel.g, texel.b), (0.0, 0.0, 1.0));
    }

    #[test]
    fn test_gradient_fill_ramp_scales_with_line_alpha() {
        let mut axes = Axes::new();
        let style = LineStyle::default().with_alpha(0.5);
        let opts = FillOptions::new().with_min_alpha(0.2).with_fill_alpha(0.8);
        let fill = gradient_fill(&mut axes, &X, &Y, &style, &opts).unwrap();

        let alphas = ramp_of(&axes, &fill);
        assert_eq!(alphas.len(), 100);
        assert!((alphas[0] - 0.08).abs() < 1e-6);
        assert!((alphas[99] - 0.4).abs() < 1e-6);
    }

    #[test]
    fn test_gradient_fill_clip_closes_at_minimum() {
        let mut axes = Axes::new();
        let fill = gradient_fill(
            &mut axes,
            &X,
            &Y,
            &LineStyle::default(),
            &FillOptions::default(),
        )
        .unwrap();

        let polygon = axes.clip(fill.clip).unwrap().polygon();
        assert_eq!(
            polygon.vertices(),
            &[
                Point::new(0.0, 1.0),
                Point::new(0.0, 1.0),
                Point::new(1.0, 3.0),
                Point::new(2.0, 2.0),
                Point::new(2.0, 1.0),
                Point::new(0.0, 1.0),
            ]
        );
    }

    #[test]
    fn test_about_level_within_closes_at_level() {
        let mut axes = Axes::new();
        let fill = gradient_fill_about_level(
            &mut axes,
            &X,
            &Y,
            2.0,
            &LineStyle::default(),
            &FillOptions::default(),
        )
        .unwrap();

        let v = axes.clip(fill.clip).unwrap().polygon().vertices().to_vec();
        assert_eq!(v.first(), Some(&Point::new(0.0, 2.0)));
        assert_eq!(v[v.len() - 2], Point::new(2.0, 2.0));

        let alphas = ramp_of(&axes, &fill);
        assert!(alphas[49].abs() < 1e-6);
        assert!(alphas[50].abs() < 1e-6);
    }

    #[test]
    fn test_about_level_outside_close_at_level_policy() {
        let mut axes = Axes::new();
        let opts = FillOptions::new().with_level_clip(LevelClip::CloseAtLevel);
        let fill =
            gradient_fill_about_level(&mut axes, &X, &Y, 5.0, &LineStyle::default(), &opts)
                .unwrap();

        let v = axes.clip(fill.clip).unwrap().polygon().vertices().to_vec();
        assert_eq!(v.len(), 6);
        assert_eq!(v[0], Point::new(0.0, 5.0));
        assert_eq!(v[4], Point::new(2.0, 5.0));
    }

    #[test]
    fn test_surface_errors_propagate() {
        let mut axes = Axes::new();
        let err = gradient_fill(
            &mut axes,
            &[0.0, 1.0],
            &[1.0],
            &LineStyle::default(),
            &FillOptions::default(),
        )
        .unwrap_err();
        assert_eq!(
            err,
            FillError::Surface(SurfaceError::LengthMismatch { x: 2, y: 1 })
        );
    }

    #[test]
    fn test_empty_curve() {
        let mut axes = Axes::new();
        let err = gradient_fill_about_level(
            &mut axes,
            &[],
            &[],
            0.0,
            &LineStyle::default(),
            &FillOptions::default(),
        )
        .unwrap_err();
        assert_eq!(err, FillError::EmptyCurve);
    }

    #[test]
    fn test_works_through_trait_object() {
        let mut axes = Axes::new();
        let surface: &mut dyn DrawSurface = &mut axes;
        let fill = gradient_fill(
            surface,
            &X,
            &Y,
            &LineStyle::default(),
            &FillOptions::default(),
        )
        .unwrap();
        assert!(axes.line(fill.line).is_some());
    }
}
