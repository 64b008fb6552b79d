//! Line style configuration
//!
//! `LineStyle` enumerates the options a surface recognizes when plotting a
//! curve. Unset options are resolved by the surface: the color comes from its
//! property cycle and the z-order defaults to [`DEFAULT_LINE_Z_ORDER`].

use smallvec::SmallVec;

use crate::color::Color;

/// Z-order given to lines that don't override it
pub const DEFAULT_LINE_Z_ORDER: f32 = 2.0;

/// Line cap style
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LineCap {
    /// Flat cap at the endpoint
    Butt,
    /// Rounded cap extending past the endpoint
    Round,
    /// Square cap extending past the endpoint
    #[default]
    Square,
}

/// Line join style
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LineJoin {
    /// Miter join (sharp corner)
    Miter,
    /// Round join
    #[default]
    Round,
    /// Bevel join (flat corner)
    Bevel,
}

/// Style options for plotting a curve
#[derive(Clone, Debug, PartialEq)]
pub struct LineStyle {
    /// Line color, `None` to take the next cycle color
    pub color: Option<Color>,
    /// Line width in pixels
    pub width: f32,
    /// Line opacity, `None` to leave it unset
    pub alpha: Option<f32>,
    /// Draw order override
    pub z_order: Option<f32>,
    /// Line cap style
    pub cap: LineCap,
    /// Line join style
    pub join: LineJoin,
    /// Dash pattern in pixels (empty for solid line)
    pub dash: SmallVec<[f32; 4]>,
    /// Dash offset
    pub dash_offset: f32,
    /// Label for the line
    pub label: Option<String>,
}

impl Default for LineStyle {
    fn default() -> Self {
        Self {
            color: None,
            width: 1.5,
            alpha: None,
            z_order: None,
            cap: LineCap::default(),
            join: LineJoin::default(),
            dash: SmallVec::new(),
            dash_offset: 0.0,
            label: None,
        }
    }
}

impl LineStyle {
    /// Create a style with the given width
    pub fn new(width: f32) -> Self {
        Self {
            width,
            ..Default::default()
        }
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    pub fn with_alpha(mut self, alpha: f32) -> Self {
        self.alpha = Some(alpha);
        self
    }

    pub fn with_z_order(mut self, z_order: f32) -> Self {
        self.z_order = Some(z_order);
        self
    }

    pub fn with_cap(mut self, cap: LineCap) -> Self {
        self.cap = cap;
        self
    }

    pub fn with_join(mut self, join: LineJoin) -> Self {
        self.join = join;
        self
    }

    pub fn with_dash(mut self, pattern: &[f32], offset: f32) -> Self {
        self.dash = SmallVec::from_slice(pattern);
        self.dash_offset = offset;
        self
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn is_dashed(&self) -> bool {
        !self.dash.is_empty()
    }
}
