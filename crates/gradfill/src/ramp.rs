//! Alpha ramps
//!
//! A ramp is [`RAMP_SAMPLES`] opacity values ordered from the bottom of the
//! curve's extent (`ymin`) to the top (`ymax`). Stretched over the extent as a
//! one-texel-wide image, it fakes a vertical gradient.

use gradfill_core::Extent;

use crate::error::FillError;

/// Number of samples in every ramp
pub const RAMP_SAMPLES: usize = 100;

/// Where a reference level sits relative to a curve's value range
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LevelPosition {
    /// `level > ymax`
    Above,
    /// `level < ymin`
    Below,
    /// `ymin <= level <= ymax`, with the ramp split at `num_low`
    Within { num_low: usize, num_high: usize },
}

impl LevelPosition {
    pub fn is_within(&self) -> bool {
        matches!(self, LevelPosition::Within { .. })
    }
}

/// Opacity samples from `ymin` to `ymax`
#[derive(Clone, Debug, PartialEq)]
pub struct AlphaRamp {
    samples: Vec<f64>,
}

impl AlphaRamp {
    /// A single linear ramp from `start` to `end`
    pub fn linear(start: f64, end: f64) -> Self {
        Self {
            samples: linspace(start, end, RAMP_SAMPLES).collect(),
        }
    }

    /// Ramp for a fill beneath the curve
    ///
    /// `min_alpha` and `fill_alpha` are the effective opacities at `ymin` and
    /// `ymax`.
    pub fn below_curve(min_alpha: f64, fill_alpha: f64) -> Self {
        Self::linear(min_alpha, fill_alpha)
    }

    /// Ramp for a fill measured against a reference level
    ///
    /// Opacity grows with distance from `level`. Outside the value range the
    /// ramp is a single run from the far edge (full `fill_alpha`) towards the
    /// near edge. Inside, it splits into a falling run below the level and a
    /// rising run above it, both touching `min_alpha` at the level and scaled
    /// so the longer side reaches `fill_alpha`.
    pub fn about_level(
        extent: &Extent,
        level: f64,
        min_alpha: f64,
        fill_alpha: f64,
    ) -> Result<(Self, LevelPosition), FillError> {
        let (ymin, ymax) = (extent.ymin, extent.ymax);

        if level > ymax {
            let near = fill_alpha * ((level - ymax) / (level - ymin));
            return Ok((Self::linear(fill_alpha, near), LevelPosition::Above));
        }
        if level < ymin {
            let near = fill_alpha * ((ymin - level) / (ymax - level));
            return Ok((Self::linear(near, fill_alpha), LevelPosition::Below));
        }

        let width = ymax - ymin;
        if width == 0.0 {
            return Err(FillError::FlatCurve { level });
        }
        let up_width = ymax - level;
        let low_width = level - ymin;
        let max_width = up_width.max(low_width);

        let num_low = ((RAMP_SAMPLES as f64 * (low_width / width)) as usize).min(RAMP_SAMPLES);
        let num_high = RAMP_SAMPLES - num_low;

        let samples = linspace(fill_alpha * (low_width / max_width), min_alpha, num_low)
            .chain(linspace(
                min_alpha,
                fill_alpha * (up_width / max_width),
                num_high,
            ))
            .collect();

        Ok((
            Self { samples },
            LevelPosition::Within { num_low, num_high },
        ))
    }

    pub fn samples(&self) -> &[f64] {
        &self.samples
    }

    pub fn first(&self) -> Option<f64> {
        self.samples.first().copied()
    }

    pub fn last(&self) -> Option<f64> {
        self.samples.last().copied()
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Samples narrowed to texel precision
    pub fn to_alphas(&self) -> Vec<f32> {
        self.samples.iter().map(|&a| a as f32).collect()
    }
}

/// `n` evenly spaced values from `start` to `end` inclusive
///
/// Yields nothing for `n == 0` and just `start` for `n == 1`. The last value
/// is exactly `end`.
pub fn linspace(start: f64, end: f64, n: usize) -> impl Iterator<Item = f64> {
    let step = if n > 1 {
        (end - start) / (n - 1) as f64
    } else {
        0.0
    };
    (0..n).map(move |i| {
        if n > 1 && i == n - 1 {
            end
        } else {
            start + step * i as f64
        }
    })
}
