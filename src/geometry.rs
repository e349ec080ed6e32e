//! Geometric primitives for rasterization.
//!
//! Integer pixel coordinates and the defining parameters of the shapes the
//! rasterizers understand.

use std::fmt;

/// Largest radius (per axis) the circle and ellipse rasterizers accept.
///
/// Integer decision terms are accumulated in `i64`, so `2 * r^3` must fit.
/// The `rx^2 * ry^2` term of the ellipse is evaluated in `f64`.
pub const MAX_RADIUS: u32 = 1 << 20;

/// A pixel coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub struct Point {
    /// X coordinate.
    pub x: i32,
    /// Y coordinate.
    pub y: i32,
}

impl Point {
    /// Origin point (0, 0).
    pub const ORIGIN: Self = Self::new(0, 0);

    /// Create a new point.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point.
    #[must_use]
    pub fn distance(self, other: Self) -> f64 {
        let dx = f64::from(other.x) - f64::from(self.x);
        let dy = f64::from(other.y) - f64::from(self.y);
        dx.hypot(dy)
    }

    /// Offset this point by `(dx, dy)`, saturating at the `i32` bounds.
    #[must_use]
    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self::new(self.x.saturating_add(dx), self.y.saturating_add(dy))
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// A line segment between two points. Either ordering is valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Segment {
    /// Start point.
    pub start: Point,
    /// End point.
    pub end: Point,
}

impl Segment {
    /// Create a new segment.
    #[must_use]
    pub const fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    /// True when start and end coincide.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.start == self.end
    }

    /// Horizontal and vertical extents `(dx, dy)`, widened so they never overflow.
    #[must_use]
    pub fn deltas(&self) -> (i64, i64) {
        (
            i64::from(self.end.x) - i64::from(self.start.x),
            i64::from(self.end.y) - i64::from(self.start.y),
        )
    }
}

/// A circle given by its center and integer radius.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CircleSpec {
    /// Center pixel.
    pub center: Point,
    /// Radius in pixels.
    pub radius: u32,
}

impl CircleSpec {
    /// Create a circle from an explicit radius.
    #[must_use]
    pub const fn new(center: Point, radius: u32) -> Self {
        Self { center, radius }
    }

    /// Create a circle whose radius is the rounded distance from `center` to
    /// `edge`.
    ///
    /// Rounding is half away from zero, so a distance of exactly 2.5 gives 3.
    #[must_use]
    pub fn through(center: Point, edge: Point) -> Self {
        let radius = center.distance(edge).round() as u32;
        Self { center, radius }
    }
}

/// An axis-aligned ellipse given by its center and per-axis radii.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EllipseSpec {
    /// Center pixel.
    pub center: Point,
    /// Horizontal radius.
    pub rx: u32,
    /// Vertical radius.
    pub ry: u32,
}

impl EllipseSpec {
    /// Create an ellipse from explicit radii.
    #[must_use]
    pub const fn new(center: Point, rx: u32, ry: u32) -> Self {
        Self { center, rx, ry }
    }

    /// Create an ellipse whose radii are the absolute coordinate differences
    /// between `center` and the bounding corner `bound`.
    #[must_use]
    pub fn bounded_by(center: Point, bound: Point) -> Self {
        Self {
            center,
            rx: center.x.abs_diff(bound.x),
            ry: center.y.abs_diff(bound.y),
        }
    }
}
