//! Fill configuration

use gradfill_core::Color;

/// How the clip polygon is closed when the reference level lies outside the
/// curve's value range
///
/// Inside the range the polygon always closes at the level.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LevelClip {
    /// Clip to the curve's own vertices, joined last point to first
    #[default]
    CurveOnly,
    /// Close the curve along the level, as the in-range case does
    CloseAtLevel,
}

/// Options for a gradient fill
#[derive(Clone, Debug, PartialEq)]
pub struct FillOptions {
    /// Fill color, `None` to reuse the line's color
    pub fill_color: Option<Color>,
    /// Opacity floor as a fraction of the fill opacity
    pub min_alpha: f64,
    /// Fill opacity as a fraction of the line's alpha
    pub fill_alpha: f64,
    /// Clip closure for levels outside the value range
    pub level_clip: LevelClip,
}

impl Default for FillOptions {
    fn default() -> Self {
        Self {
            fill_color: None,
            min_alpha: 0.0,
            fill_alpha: 1.0,
            level_clip: LevelClip::default(),
        }
    }
}

impl FillOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_fill_color(mut self, color: Color) -> Self {
        self.fill_color = Some(color);
        self
    }

    pub fn with_min_alpha(mut self, min_alpha: f64) -> Self {
        self.min_alpha = min_alpha;
        self
    }

    pub fn with_fill_alpha(mut self, fill_alpha: f64) -> Self {
        self.fill_alpha = fill_alpha;
        self
    }

    pub fn with_level_clip(mut self, level_clip: LevelClip) -> Self {
        self.level_clip = level_clip;
        self
    }

    /// Effective `(min_alpha, fill_alpha)` for a line of the given opacity
    ///
    /// An unset line alpha counts as fully opaque.
    pub(crate) fn effective_alphas(&self, line_alpha: Option<f32>) -> (f64, f64) {
        let line_alpha = line_alpha.map_or(1.0, f64::from);
        let fill_alpha = self.fill_alpha * line_alpha;
        (self.min_alpha * fill_alpha, fill_alpha)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let opts = FillOptions::default();
        assert_eq!(opts.fill_color, None);
        assert_eq!(opts.min_alpha, 0.0);
        assert_eq!(opts.fill_alpha, 1.0);
        assert_eq!(opts.level_clip, LevelClip::CurveOnly);
    }

    #[test]
    fn test_effective_alphas_scale_with_line_alpha() {
        let opts = FillOptions::new().with_min_alpha(0.5).with_fill_alpha(0.8);
        assert_eq!(opts.effective_alphas(None), (0.4, 0.8));

        let (min, fill) = opts.effective_alphas(Some(0.5));
        assert!((fill - 0.4).abs() < 1e-12);
        assert!((min - 0.2).abs() < 1e-12);
    }
}
