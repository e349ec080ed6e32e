//! Shape selection and dispatch to the rasterizers.
//!
//! A drawing gesture produces two points: where the pointer was pressed and
//! where it is now. What those points mean depends on the selected
//! [`ShapeKind`]: line endpoints, a circle center and a point on its rim, or an
//! ellipse center and a corner of its bounding box.

use std::fmt;
use std::iter::FusedIterator;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::geometry::{CircleSpec, EllipseSpec, Point, MAX_RADIUS};
use crate::raster::{
    bresenham_line, circle_midpoint, dda_line, ellipse_midpoint, BresenhamLine, DdaLine,
    MidpointCircle, MidpointEllipse,
};
use crate::transform::Transform;

/// The four rasterization algorithms a drawing surface can select.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ShapeKind {
    /// Line via digital differential analyzer.
    #[default]
    DdaLine,
    /// Line via Bresenham's integer algorithm.
    BresenhamLine,
    /// Circle via the midpoint algorithm.
    CircleMidpoint,
    /// Axis-aligned ellipse via the midpoint algorithm.
    EllipseMidpoint,
}

impl ShapeKind {
    /// All shape kinds, in toolbar order.
    pub const ALL: [Self; 4] =
        [Self::DdaLine, Self::BresenhamLine, Self::CircleMidpoint, Self::EllipseMidpoint];

    /// Human-readable toolbar label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::DdaLine => "DDA Line",
            Self::BresenhamLine => "Bresenham Line",
            Self::CircleMidpoint => "Circle Midpoint",
            Self::EllipseMidpoint => "Ellipse Midpoint",
        }
    }

    /// Short name used on the command line and in config files.
    #[must_use]
    pub const fn short_name(self) -> &'static str {
        match self {
            Self::DdaLine => "dda",
            Self::BresenhamLine => "bresenham",
            Self::CircleMidpoint => "circle",
            Self::EllipseMidpoint => "ellipse",
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ShapeKind {
    type Err = Error;

    /// Accepts toolbar labels and short names, ignoring case, surrounding
    /// whitespace and `-`/`_` separators. "Ellips Midpoint" is accepted too.
    fn from_str(s: &str) -> Result<Self> {
        let key: String = s
            .trim()
            .chars()
            .filter(|c| !matches!(c, ' ' | '-' | '_'))
            .flat_map(char::to_lowercase)
            .collect();

        match key.as_str() {
            "dda" | "ddaline" => Ok(Self::DdaLine),
            "bresenham" | "bresenhamline" => Ok(Self::BresenhamLine),
            "circle" | "circlemidpoint" | "midpointcircle" => Ok(Self::CircleMidpoint),
            "ellipse" | "ellipsemidpoint" | "ellipsmidpoint" | "midpointellipse" => {
                Ok(Self::EllipseMidpoint)
            }
            _ => Err(Error::UnknownShape(s.to_string())),
        }
    }
}

/// A shape defined by a kind and the two points of a drawing gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shape {
    /// Which algorithm rasterizes this shape.
    pub kind: ShapeKind,
    /// Press point: line start, or circle/ellipse center.
    pub start: Point,
    /// Current/release point: line end, circle rim, or ellipse bounding corner.
    pub end: Point,
}

impl Shape {
    /// Create a new shape.
    #[must_use]
    pub const fn new(kind: ShapeKind, start: Point, end: Point) -> Self {
        Self { kind, start, end }
    }

    /// The shape's pixel sequence.
    #[must_use]
    pub fn pixels(&self) -> Pixels {
        match self.kind {
            ShapeKind::DdaLine => Pixels::Dda(dda_line(self.start, self.end)),
            ShapeKind::BresenhamLine => Pixels::Bresenham(bresenham_line(self.start, self.end)),
            ShapeKind::CircleMidpoint => Pixels::Circle(circle_midpoint(self.start, self.end)),
            ShapeKind::EllipseMidpoint => Pixels::Ellipse(ellipse_midpoint(self.start, self.end)),
        }
    }

    /// Checks that a circle or ellipse stays within [`MAX_RADIUS`], so that
    /// [`Shape::pixels`] will not panic.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidShape`] for an oversized radius.
    pub fn validate(&self) -> Result<()> {
        let radius = match self.kind {
            ShapeKind::DdaLine | ShapeKind::BresenhamLine => return Ok(()),
            ShapeKind::CircleMidpoint => CircleSpec::through(self.start, self.end).radius,
            ShapeKind::EllipseMidpoint => {
                let spec = EllipseSpec::bounded_by(self.start, self.end);
                spec.rx.max(spec.ry)
            }
        };
        if radius > MAX_RADIUS {
            return Err(Error::InvalidShape {
                input: self.to_string(),
                message: format!("radius {radius} exceeds {MAX_RADIUS}"),
            });
        }
        Ok(())
    }

    /// This shape with both defining points mapped through `transform`.
    #[must_use]
    pub fn transformed(&self, transform: &Transform) -> Self {
        Self::new(self.kind, transform.apply(self.start), transform.apply(self.end))
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{},{}:{},{}",
            self.kind.short_name(),
            self.start.x,
            self.start.y,
            self.end.x,
            self.end.y
        )
    }
}

impl FromStr for Shape {
    type Err = Error;

    /// Parses `kind:x1,y1:x2,y2`, e.g. `bresenham:0,0:5,2`.
    fn from_str(s: &str) -> Result<Self> {
        let invalid = |message: &str| Error::InvalidShape {
            input: s.to_string(),
            message: message.to_string(),
        };

        let mut parts = s.split(':');
        let (Some(kind), Some(start), Some(end), None) =
            (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            return Err(invalid("expected kind:x1,y1:x2,y2"));
        };

        let kind = kind.parse::<ShapeKind>()?;
        let start = parse_point(start).ok_or_else(|| invalid("bad start point"))?;
        let end = parse_point(end).ok_or_else(|| invalid("bad end point"))?;
        let shape = Self::new(kind, start, end);
        shape.validate()?;
        Ok(shape)
    }
}

/// Parse `x,y` into a point.
pub(crate) fn parse_point(s: &str) -> Option<Point> {
    let (x, y) = s.split_once(',')?;
    Some(Point::new(x.trim().parse().ok()?, y.trim().parse().ok()?))
}

/// Pixel sequence of any [`Shape`], without boxing.
#[derive(Debug, Clone)]
pub enum Pixels {
    /// DDA line points.
    Dda(DdaLine),
    /// Bresenham line points.
    Bresenham(BresenhamLine),
    /// Midpoint circle points.
    Circle(MidpointCircle),
    /// Midpoint ellipse points.
    Ellipse(MidpointEllipse),
}

impl Iterator for Pixels {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        match self {
            Self::Dda(it) => it.next(),
            Self::Bresenham(it) => it.next(),
            Self::Circle(it) => it.next(),
            Self::Ellipse(it) => it.next(),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self {
            Self::Dda(it) => it.size_hint(),
            Self::Bresenham(it) => it.size_hint(),
            Self::Circle(it) => it.size_hint(),
            Self::Ellipse(it) => it.size_hint(),
        }
    }
}

impl FusedIterator for Pixels {}
