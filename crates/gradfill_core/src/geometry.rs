//! Data-space geometry

/// A point in data coordinates
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned data extent, stored as `[xmin, xmax, ymin, ymax]`
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Extent {
    pub xmin: f64,
    pub xmax: f64,
    pub ymin: f64,
    pub ymax: f64,
}

impl Extent {
    pub const fn new(xmin: f64, xmax: f64, ymin: f64, ymax: f64) -> Self {
        Self {
            xmin,
            xmax,
            ymin,
            ymax,
        }
    }

    /// Bounding box of a curve given as separate coordinate slices
    ///
    /// Returns `None` when either slice is empty. NaN values are skipped by
    /// the min/max folds rather than poisoning the result.
    pub fn of_curve(x: &[f64], y: &[f64]) -> Option<Self> {
        let (xmin, xmax) = min_max(x)?;
        let (ymin, ymax) = min_max(y)?;
        Some(Self::new(xmin, xmax, ymin, ymax))
    }

    /// Bounding box of a set of points
    pub fn of_points(points: &[Point]) -> Option<Self> {
        let first = points.first()?;
        let mut extent = Self::new(first.x, first.x, first.y, first.y);
        for p in &points[1..] {
            extent = extent.include(*p);
        }
        Some(extent)
    }

    pub fn width(&self) -> f64 {
        self.xmax - self.xmin
    }

    pub fn height(&self) -> f64 {
        self.ymax - self.ymin
    }

    /// Grow the extent to cover a point
    pub fn include(self, p: Point) -> Self {
        Self {
            xmin: self.xmin.min(p.x),
            xmax: self.xmax.max(p.x),
            ymin: self.ymin.min(p.y),
            ymax: self.ymax.max(p.y),
        }
    }

    /// Smallest extent covering both
    pub fn union(self, other: Extent) -> Self {
        Self {
            xmin: self.xmin.min(other.xmin),
            xmax: self.xmax.max(other.xmax),
            ymin: self.ymin.min(other.ymin),
            ymax: self.ymax.max(other.ymax),
        }
    }

    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.xmin && p.x <= self.xmax && p.y >= self.ymin && p.y <= self.ymax
    }

    pub fn to_array(&self) -> [f64; 4] {
        [self.xmin, self.xmax, self.ymin, self.ymax]
    }
}

fn min_max(values: &[f64]) -> Option<(f64, f64)> {
    let first = *values.first()?;
    Some(
        values[1..]
            .iter()
            .fold((first, first), |(lo, hi), &v| (lo.min(v), hi.max(v))),
    )
}
