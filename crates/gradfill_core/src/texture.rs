//! Textures composited over a data extent

use crate::color::Color;
use crate::error::SurfaceError;
use crate::geometry::Extent;

/// Placement of texel row 0
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Origin {
    /// Row 0 sits at the top of the extent
    #[default]
    Upper,
    /// Row 0 sits at the bottom of the extent
    Lower,
}

/// A small straight-alpha RGBA image, stored row-major
#[derive(Clone, Debug, PartialEq)]
pub struct Texture {
    width: usize,
    height: usize,
    texels: Vec<Color>,
}

impl Texture {
    pub fn new(width: usize, height: usize, texels: Vec<Color>) -> Result<Self, SurfaceError> {
        if width == 0 || height == 0 {
            return Err(SurfaceError::InvalidTexture(format!(
                "dimensions must be > 0, got {width}x{height}"
            )));
        }
        if texels.len() != width * height {
            return Err(SurfaceError::InvalidTexture(format!(
                "{}x{} texture needs {} texels, got {}",
                width,
                height,
                width * height,
                texels.len()
            )));
        }
        Ok(Self {
            width,
            height,
            texels,
        })
    }

    /// A single-column texture of `color` whose rows take the given alphas
    ///
    /// The alpha of `color` itself is ignored.
    pub fn column(color: Color, alphas: &[f32]) -> Result<Self, SurfaceError> {
        let texels = alphas.iter().map(|&a| color.with_alpha(a)).collect();
        Self::new(1, alphas.len(), texels)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn texels(&self) -> &[Color] {
        &self.texels
    }

    pub fn texel(&self, col: usize, row: usize) -> Option<Color> {
        if col >= self.width {
            return None;
        }
        self.texels.get(row * self.width + col).copied()
    }

    /// Alpha channel of the first column, row by row
    pub fn column_alphas(&self) -> Vec<f32> {
        self.texels.iter().step_by(self.width).map(|c| c.a).collect()
    }
}

/// Placement options for a composited image
#[derive(Clone, Debug, PartialEq)]
pub struct ImageOptions {
    /// Data extent the texture is stretched over
    pub extent: Extent,
    /// Where texel row 0 goes
    pub origin: Origin,
    /// Draw order
    pub z_order: f32,
    /// Opacity multiplier (0.0 - 1.0)
    pub opacity: f32,
}

impl ImageOptions {
    pub fn new(extent: Extent) -> Self {
        Self {
            extent,
            origin: Origin::default(),
            z_order: 0.0,
            opacity: 1.0,
        }
    }

    pub fn with_origin(mut self, origin: Origin) -> Self {
        self.origin = origin;
        self
    }

    pub fn with_z_order(mut self, z_order: f32) -> Self {
        self.z_order = z_order;
        self
    }

    pub fn with_opacity(mut self, opacity: f32) -> Self {
        self.opacity = opacity.clamp(0.0, 1.0);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_texture() {
        let tex = Texture::column(Color::RED, &[0.0, 0.5, 1.0]).unwrap();
        assert_eq!(tex.width(), 1);
        assert_eq!(tex.height(), 3);
        assert_eq!(tex.texel(0, 1), Some(Color::RED.with_alpha(0.5)));
        assert_eq!(tex.column_alphas(), vec![0.0, 0.5, 1.0]);
        assert!(tex.texel(1, 0).is_none());
    }

    #[test]
    fn test_texture_validation() {
        assert!(Texture::column(Color::RED, &[]).is_err());
        assert!(Texture::new(2, 2, vec![Color::RED; 3]).is_err());
        assert!(Texture::new(2, 2, vec![Color::RED; 4]).is_ok());
    }

    #[test]
    fn test_image_options_builder() {
        let opts = ImageOptions::new(Extent::new(0.0, 2.0, 1.0, 3.0))
            .with_origin(Origin::Lower)
            .with_z_order(2.0)
            .with_opacity(1.5);
        assert_eq!(opts.origin, Origin::Lower);
        assert_eq!(opts.z_order, 2.0);
        assert_eq!(opts.opacity, 1.0);
    }
}
