//! Data-to-pixel mapping

use gradfill_core::{Extent, Point};

/// Maps data coordinates onto a pixmap, y pointing up
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    limits: Extent,
    width: f32,
    height: f32,
}

impl Viewport {
    /// Fit `limits`, padded by `margin` of their span on every side
    ///
    /// Zero-width spans are widened by 0.5 on each side so degenerate data
    /// still lands in the middle of the pixmap.
    pub fn fit(limits: Extent, margin: f64, width: u32, height: u32) -> Self {
        let (xmin, xmax) = pad(limits.xmin, limits.xmax, margin);
        let (ymin, ymax) = pad(limits.ymin, limits.ymax, margin);
        Self {
            limits: Extent::new(xmin, xmax, ymin, ymax),
            width: width as f32,
            height: height as f32,
        }
    }

    /// The padded data limits
    pub fn limits(&self) -> Extent {
        self.limits
    }

    pub fn to_device(&self, p: Point) -> (f32, f32) {
        let fx = (p.x - self.limits.xmin) / self.limits.width();
        let fy = (p.y - self.limits.ymin) / self.limits.height();
        (
            (fx * self.width as f64) as f32,
            self.height - (fy * self.height as f64) as f32,
        )
    }
}

fn pad(lo: f64, hi: f64, margin: f64) -> (f64, f64) {
    let span = hi - lo;
    if span == 0.0 {
        (lo - 0.5, hi + 0.5)
    } else {
        (lo - span * margin, hi + span * margin)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_device_flips_y() {
        let vp = Viewport::fit(Extent::new(0.0, 2.0, 1.0, 3.0), 0.0, 100, 100);
        assert_eq!(vp.to_device(Point::new(0.0, 1.0)), (0.0, 100.0));
        assert_eq!(vp.to_device(Point::new(2.0, 3.0)), (100.0, 0.0));
        assert_eq!(vp.to_device(Point::new(1.0, 2.5)), (50.0, 25.0));
    }

    #[test]
    fn test_margin_and_degenerate_span() {
        let vp = Viewport::fit(Extent::new(0.0, 10.0, 2.0, 2.0), 0.1, 100, 100);
        assert_eq!(vp.limits().to_array(), [-1.0, 11.0, 1.5, 2.5]);
    }
}
