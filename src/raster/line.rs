//! Line rasterizers: DDA and Bresenham.

use std::iter::FusedIterator;

use crate::geometry::{Point, Segment};

// ============================================================================
// DDA
// ============================================================================

/// Digital differential analyzer line.
///
/// Steps `max(|dx|, |dy|)` times from the start point, adding a fractional
/// increment per axis and rounding each accumulated position (ties away from
/// zero). The step count excludes the end point, and floating accumulation may
/// land next to it; both are characteristic of DDA. A zero-length segment
/// yields its single point.
#[derive(Debug, Clone)]
pub struct DdaLine {
    x: f64,
    y: f64,
    x_inc: f64,
    y_inc: f64,
    remaining: u64,
}

impl DdaLine {
    /// Rasterize `segment`.
    #[must_use]
    pub fn new(segment: Segment) -> Self {
        let (dx, dy) = segment.deltas();
        let steps = dx.unsigned_abs().max(dy.unsigned_abs());
        let start = segment.start;

        if segment.is_degenerate() {
            return Self {
                x: f64::from(start.x),
                y: f64::from(start.y),
                x_inc: 0.0,
                y_inc: 0.0,
                remaining: 1,
            };
        }

        Self {
            x: f64::from(start.x),
            y: f64::from(start.y),
            x_inc: dx as f64 / steps as f64,
            y_inc: dy as f64 / steps as f64,
            remaining: steps,
        }
    }
}

impl Iterator for DdaLine {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        if self.remaining == 0 {
            return None;
        }
        let point = Point::new(self.x.round() as i32, self.y.round() as i32);
        self.x += self.x_inc;
        self.y += self.y_inc;
        self.remaining -= 1;
        Some(point)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = usize::try_from(self.remaining).unwrap_or(usize::MAX);
        (n, Some(n))
    }
}

impl ExactSizeIterator for DdaLine {}
impl FusedIterator for DdaLine {}

/// DDA line from `p1` towards `p2`.
#[must_use]
pub fn dda_line(p1: Point, p2: Point) -> DdaLine {
    DdaLine::new(Segment::new(p1, p2))
}

// ============================================================================
// Bresenham
// ============================================================================

/// Bresenham's line, integer-only and inclusive of both endpoints.
///
/// Works in every octant: the error term `dx - dy` decides per step whether
/// to advance x, y, or both (a diagonal move).
#[derive(Debug, Clone)]
pub struct BresenhamLine {
    x: i32,
    y: i32,
    end: Point,
    dx: i64,
    dy: i64,
    sx: i32,
    sy: i32,
    err: i64,
    done: bool,
}

impl BresenhamLine {
    /// Rasterize `segment`.
    #[must_use]
    pub fn new(segment: Segment) -> Self {
        let (dx, dy) = segment.deltas();
        let (dx, dy) = (dx.abs(), dy.abs());
        let start = segment.start;
        let end = segment.end;

        Self {
            x: start.x,
            y: start.y,
            end,
            dx,
            dy,
            sx: if start.x < end.x { 1 } else { -1 },
            sy: if start.y < end.y { 1 } else { -1 },
            err: dx - dy,
            done: false,
        }
    }
}

impl Iterator for BresenhamLine {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        if self.done {
            return None;
        }

        let current = Point::new(self.x, self.y);
        if current == self.end {
            self.done = true;
            return Some(current);
        }

        let e2 = 2 * self.err;
        if e2 > -self.dy {
            self.err -= self.dy;
            self.x += self.sx;
        }
        if e2 < self.dx {
            self.err += self.dx;
            self.y += self.sy;
        }

        Some(current)
    }
}

impl FusedIterator for BresenhamLine {}

/// Bresenham line from `p1` to `p2`, both included.
#[must_use]
pub fn bresenham_line(p1: Point, p2: Point) -> BresenhamLine {
    BresenhamLine::new(Segment::new(p1, p2))
}

// ============================================================================
// Tests
// ============================================================================
