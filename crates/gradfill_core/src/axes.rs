//! In-memory drawing surface
//!
//! `Axes` stores artists in slot maps and tracks the data limits they cover
//! and the order they were added in. It performs no rasterization; hand it to
//! a renderer to produce pixels.

use slotmap::SlotMap;

use crate::clip::ClipPolygon;
use crate::color::Color;
use crate::error::SurfaceError;
use crate::geometry::{Extent, Point};
use crate::style::{LineStyle, DEFAULT_LINE_Z_ORDER};
use crate::surface::{Clip, ClipId, DrawSurface, Image, ImageId, Line, LineId};
use crate::texture::{ImageOptions, Texture};

/// Any artist held by an `Axes`
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Artist {
    Line(LineId),
    Image(ImageId),
    Clip(ClipId),
}

/// A drawing surface that records artists for later rendering
#[derive(Debug, Default)]
pub struct Axes {
    lines: SlotMap<LineId, Line>,
    images: SlotMap<ImageId, Image>,
    clips: SlotMap<ClipId, Clip>,
    /// Insertion order across all artist kinds
    artists: Vec<Artist>,
    data_limits: Option<Extent>,
    cycle_index: usize,
}

impl Axes {
    pub fn new() -> Self {
        Self::default()
    }

    /// All artists in insertion order
    pub fn artists(&self) -> &[Artist] {
        &self.artists
    }

    pub fn lines(&self) -> impl Iterator<Item = (LineId, &Line)> {
        self.lines.iter()
    }

    pub fn images(&self) -> impl Iterator<Item = (ImageId, &Image)> {
        self.images.iter()
    }

    /// Union of the extents of every line and image
    pub fn data_limits(&self) -> Option<Extent> {
        self.data_limits
    }

    /// Paintable artists sorted by z-order, ties kept in insertion order
    ///
    /// Clip shapes are excluded since they are never painted.
    pub fn draw_order(&self) -> Vec<Artist> {
        let mut order: Vec<(f32, Artist)> = self
            .artists
            .iter()
            .filter_map(|&artist| match artist {
                Artist::Line(id) => self.lines.get(id).map(|l| (l.z_order(), artist)),
                Artist::Image(id) => self.images.get(id).map(|i| (i.z_order(), artist)),
                Artist::Clip(_) => None,
            })
            .collect();
        // sort_by is stable
        order.sort_by(|a, b| a.0.total_cmp(&b.0));
        order.into_iter().map(|(_, artist)| artist).collect()
    }

    /// Remove every artist and restart the color cycle
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    fn next_cycle_color(&mut self) -> Color {
        let color = Color::cycle(self.cycle_index);
        self.cycle_index += 1;
        color
    }

    fn update_limits(&mut self, extent: Option<Extent>) {
        if let Some(extent) = extent {
            self.data_limits = Some(match self.data_limits {
                Some(limits) => limits.union(extent),
                None => extent,
            });
        }
    }
}

impl DrawSurface for Axes {
    fn plot_line(
        &mut self,
        x: &[f64],
        y: &[f64],
        style: &LineStyle,
    ) -> Result<LineId, SurfaceError> {
        if x.len() != y.len() {
            return Err(SurfaceError::LengthMismatch {
                x: x.len(),
                y: y.len(),
            });
        }

        let color = match style.color {
            Some(color) => color,
            None => self.next_cycle_color(),
        };
        let points: Vec<Point> = x.iter().zip(y).map(|(&x, &y)| Point::new(x, y)).collect();

        let z_order = style.z_order.unwrap_or(DEFAULT_LINE_Z_ORDER);
        let line = Line::new(points, color, z_order, style.clone());
        self.update_limits(line.extent());

        let id = self.lines.insert(line);
        self.artists.push(Artist::Line(id));
        tracing::trace!(points = x.len(), "plotted line {:?}", id);
        Ok(id)
    }

    fn line(&self, id: LineId) -> Option<&Line> {
        self.lines.get(id)
    }

    fn show_image(
        &mut self,
        texture: Texture,
        options: ImageOptions,
    ) -> Result<ImageId, SurfaceError> {
        self.update_limits(Some(options.extent));

        let id = self.images.insert(Image::new(texture, options));
        self.artists.push(Artist::Image(id));
        tracing::trace!("composited image {:?}", id);
        Ok(id)
    }

    fn image(&self, id: ImageId) -> Option<&Image> {
        self.images.get(id)
    }

    fn add_clip(&mut self, polygon: ClipPolygon) -> ClipId {
        let id = self.clips.insert(Clip::new(polygon));
        self.artists.push(Artist::Clip(id));
        tracing::trace!("added clip shape {:?}", id);
        id
    }

    fn clip(&self, id: ClipId) -> Option<&Clip> {
        self.clips.get(id)
    }

    fn set_image_clip(&mut self, image: ImageId, clip: ClipId) -> Result<(), SurfaceError> {
        if !self.clips.contains_key(clip) {
            return Err(SurfaceError::UnknownClip);
        }
        let image = self.images.get_mut(image).ok_or(SurfaceError::UnknownImage)?;
        image.set_clip(clip);
        Ok(())
    }
}
