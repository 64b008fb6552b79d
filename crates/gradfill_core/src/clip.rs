//! Clip polygons

use crate::geometry::{Extent, Point};

/// A polygon restricting where an image is visible
///
/// The vertex list is implicitly closed: the last vertex joins the first.
/// Membership follows the nonzero winding rule.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ClipPolygon {
    vertices: Vec<Point>,
}

impl ClipPolygon {
    pub fn new(vertices: Vec<Point>) -> Self {
        Self { vertices }
    }

    /// The curve itself, closed by joining its last point to its first
    pub fn from_curve(x: &[f64], y: &[f64]) -> Self {
        Self::new(zip_points(x, y).collect())
    }

    /// The curve closed along a horizontal baseline
    ///
    /// Vertices are `(xmin, baseline)`, the curve, `(xmax, baseline)` and
    /// `(xmin, baseline)` again.
    pub fn closed_at(x: &[f64], y: &[f64], extent: &Extent, baseline: f64) -> Self {
        let start = Point::new(extent.xmin, baseline);
        let end = Point::new(extent.xmax, baseline);

        let mut vertices = Vec::with_capacity(x.len().min(y.len()) + 3);
        vertices.push(start);
        vertices.extend(zip_points(x, y));
        vertices.push(end);
        vertices.push(start);
        Self { vertices }
    }

    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn bounds(&self) -> Option<Extent> {
        Extent::of_points(&self.vertices)
    }

    /// Nonzero winding test
    pub fn contains(&self, p: Point) -> bool {
        self.winding_number(p) != 0
    }

    fn winding_number(&self, p: Point) -> i32 {
        let n = self.vertices.len();
        if n < 3 {
            return 0;
        }

        let mut winding = 0;
        for i in 0..n {
            let a = self.vertices[i];
            let b = self.vertices[(i + 1) % n];
            // > 0 when p is left of a->b
            let side = (b.x - a.x) * (p.y - a.y) - (p.x - a.x) * (b.y - a.y);
            if a.y <= p.y {
                if b.y > p.y && side > 0.0 {
                    winding += 1;
                }
            } else if b.y <= p.y && side < 0.0 {
                winding -= 1;
            }
        }
        winding
    }
}

fn zip_points<'a>(x: &'a [f64], y: &'a [f64]) -> impl Iterator<Item = Point> + 'a {
    x.iter().zip(y).map(|(&x, &y)| Point::new(x, y))
}

#[cfg(test)]
mod tests {
    use super::*;

    const X: [f64; 3] = [0.0, 1.0, 2.0];
    const Y: [f64; 3] = [1.0, 3.0, 2.0];

    #[test]
    fn test_from_curve_keeps_curve_vertices() {
        let clip = ClipPolygon::from_curve(&X, &Y);
        assert_eq!(
            clip.vertices(),
            &[
                Point::new(0.0, 1.0),
                Point::new(1.0, 3.0),
                Point::new(2.0, 2.0)
            ]
        );
    }

    #[test]
    fn test_closed_at_baseline() {
        let extent = Extent::of_curve(&X, &Y).unwrap();
        let clip = ClipPolygon::closed_at(&X, &Y, &extent, 1.0);
        let v = clip.vertices();
        assert_eq!(v.len(), 6);
        assert_eq!(v[0], Point::new(0.0, 1.0));
        assert_eq!(v[4], Point::new(2.0, 1.0));
        assert_eq!(v[5], v[0]);
        assert_eq!(clip.bounds().unwrap().to_array(), [0.0, 2.0, 1.0, 3.0]);
    }

    #[test]
    fn test_contains_below_curve_only() {
        let extent = Extent::of_curve(&X, &Y).unwrap();
        let clip = ClipPolygon::closed_at(&X, &Y, &extent, 1.0);

        // under the peak
        assert!(clip.contains(Point::new(1.0, 2.5)));
        // above the right segment
        assert!(!clip.contains(Point::new(1.9, 2.5)));
        // outside the extent
        assert!(!clip.contains(Point::new(3.0, 1.5)));
    }

    #[test]
    fn test_degenerate_polygon_contains_nothing() {
        let clip = ClipPolygon::new(vec![Point::ZERO, Point::new(1.0, 1.0)]);
        assert!(!clip.contains(Point::new(0.5, 0.5)));
        assert!(ClipPolygon::default().is_empty());
    }
}
