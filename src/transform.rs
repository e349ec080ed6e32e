//! Geometric transforms applied to a shape's defining points.
//!
//! Transforms run before rasterization, so a transformed line is still a
//! gap-free line. Circles keep their radius under rotation, reflection and
//! translation. Ellipses stay axis-aligned: their bounding corner is moved,
//! not their outline.
//!
//! Coordinates are y-down, so positive rotation angles turn clockwise on
//! screen. Results are rounded to the nearest pixel, ties away from zero.

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::geometry::Point;
use crate::shape::parse_point;

/// Mirror axis for [`Transform::Reflect`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// Mirror across the horizontal line `y = at` (flips y).
    Horizontal,
    /// Mirror across the vertical line `x = at` (flips x).
    Vertical,
}

/// A point-to-point transform.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Transform {
    /// Leave points unchanged.
    #[default]
    Identity,
    /// Shift by a fixed offset.
    Translate {
        /// Horizontal shift.
        dx: i32,
        /// Vertical shift.
        dy: i32,
    },
    /// Rotate about a pivot.
    Rotate {
        /// Center of rotation.
        pivot: Point,
        /// Angle in degrees, clockwise on a y-down surface.
        degrees: f64,
    },
    /// Scale relative to a pivot.
    Scale {
        /// Fixed point of the scaling.
        pivot: Point,
        /// Horizontal factor.
        sx: f64,
        /// Vertical factor.
        sy: f64,
    },
    /// Mirror across an axis-parallel line.
    Reflect {
        /// Which way to mirror.
        axis: Axis,
        /// Coordinate of the mirror line.
        at: i32,
    },
}

impl Transform {
    /// Map a single point.
    #[must_use]
    pub fn apply(&self, p: Point) -> Point {
        match *self {
            Self::Identity => p,
            Self::Translate { dx, dy } => p.offset(dx, dy),
            Self::Rotate { pivot, degrees } => {
                let (sin, cos) = degrees.to_radians().sin_cos();
                let x = f64::from(p.x) - f64::from(pivot.x);
                let y = f64::from(p.y) - f64::from(pivot.y);
                to_pixel(
                    f64::from(pivot.x) + x * cos - y * sin,
                    f64::from(pivot.y) + x * sin + y * cos,
                )
            }
            Self::Scale { pivot, sx, sy } => to_pixel(
                f64::from(pivot.x) + (f64::from(p.x) - f64::from(pivot.x)) * sx,
                f64::from(pivot.y) + (f64::from(p.y) - f64::from(pivot.y)) * sy,
            ),
            Self::Reflect { axis: Axis::Horizontal, at } => Point::new(p.x, 2 * at - p.y),
            Self::Reflect { axis: Axis::Vertical, at } => Point::new(2 * at - p.x, p.y),
        }
    }
}

fn to_pixel(x: f64, y: f64) -> Point {
    Point::new(x.round() as i32, y.round() as i32)
}

impl fmt::Display for Transform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Identity => f.write_str("none"),
            Self::Translate { dx, dy } => write!(f, "translate:{dx},{dy}"),
            Self::Rotate { pivot, degrees } => write!(f, "rotate:{degrees}@{},{}", pivot.x, pivot.y),
            Self::Scale { pivot, sx, sy } => write!(f, "scale:{sx},{sy}@{},{}", pivot.x, pivot.y),
            Self::Reflect { axis, at } => {
                let axis = match axis {
                    Axis::Horizontal => 'h',
                    Axis::Vertical => 'v',
                };
                write!(f, "reflect:{axis}@{at}")
            }
        }
    }
}

impl FromStr for Transform {
    type Err = Error;

    /// Parses `none`, `translate:dx,dy`, `rotate:deg[@x,y]`,
    /// `scale:s[,sy][@x,y]` or `reflect:h|v[@c]`. Pivots default to the origin.
    fn from_str(s: &str) -> Result<Self> {
        let invalid = |message: &str| Error::InvalidTransform {
            input: s.to_string(),
            message: message.to_string(),
        };

        let s_trim = s.trim();
        let (name, args) = s_trim.split_once(':').unwrap_or((s_trim, ""));
        let (args, pivot) = match args.split_once('@') {
            Some((args, pivot)) => (args, Some(pivot)),
            None => (args, None),
        };
        let pivot_point = || match pivot {
            Some(text) => parse_point(text).ok_or_else(|| invalid("bad pivot, expected x,y")),
            None => Ok(Point::ORIGIN),
        };

        match name.to_ascii_lowercase().as_str() {
            "none" | "identity" => Ok(Self::Identity),
            "translate" => {
                let p = parse_point(args).ok_or_else(|| invalid("expected translate:dx,dy"))?;
                Ok(Self::Translate { dx: p.x, dy: p.y })
            }
            "rotate" => {
                let degrees = args
                    .trim()
                    .parse::<f64>()
                    .map_err(|_| invalid("expected rotate:degrees"))?;
                Ok(Self::Rotate { pivot: pivot_point()?, degrees })
            }
            "scale" => {
                let factor = |text: &str| text.trim().parse::<f64>().ok();
                let (sx, sy) = match args.split_once(',') {
                    Some((sx, sy)) => (factor(sx), factor(sy)),
                    None => (factor(args), factor(args)),
                };
                let (Some(sx), Some(sy)) = (sx, sy) else {
                    return Err(invalid("expected scale:s or scale:sx,sy"));
                };
                Ok(Self::Scale { pivot: pivot_point()?, sx, sy })
            }
            "reflect" => {
                let axis = match args.trim().to_ascii_lowercase().as_str() {
                    "h" | "horizontal" | "x" => Axis::Horizontal,
                    "v" | "vertical" | "y" => Axis::Vertical,
                    _ => return Err(invalid("expected reflect:h or reflect:v")),
                };
                let at = match pivot {
                    Some(text) => {
                        text.trim().parse::<i32>().map_err(|_| invalid("bad mirror coordinate"))?
                    }
                    None => 0,
                };
                Ok(Self::Reflect { axis, at })
            }
            _ => Err(invalid("unknown transform")),
        }
    }
}
