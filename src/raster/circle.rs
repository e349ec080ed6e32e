//! Midpoint circle rasterizer.

use std::iter::FusedIterator;

use super::Reflections;
use crate::geometry::{CircleSpec, Point, MAX_RADIUS};

/// Midpoint circle outline.
///
/// Walks the first octant from `(0, r)` with the decision variable
/// `d = 1 - r` and emits all eight reflections of every step about the
/// center. Points on the axes and the diagonal are emitted more than once.
/// A zero radius yields the center exactly once.
#[derive(Debug, Clone)]
pub struct MidpointCircle {
    center: Point,
    x: i32,
    y: i32,
    d: i64,
    started: bool,
    finished: bool,
    pending: Reflections,
}

impl MidpointCircle {
    /// Rasterize `spec`.
    ///
    /// # Panics
    ///
    /// Panics if the radius exceeds [`MAX_RADIUS`].
    #[must_use]
    pub fn new(spec: CircleSpec) -> Self {
        assert!(spec.radius <= MAX_RADIUS, "circle radius {} exceeds {MAX_RADIUS}", spec.radius);

        let r = spec.radius as i32;
        if r == 0 {
            return Self {
                center: spec.center,
                x: 0,
                y: 0,
                d: 0,
                started: true,
                finished: true,
                pending: Reflections::single(spec.center),
            };
        }

        Self {
            center: spec.center,
            x: 0,
            y: r,
            d: 1 - i64::from(r),
            started: false,
            finished: false,
            pending: Reflections::empty(),
        }
    }

    /// Advance the decision variable and return the next first-octant offset.
    fn advance(&mut self) -> Option<(i32, i32)> {
        if !self.started {
            self.started = true;
            return Some((self.x, self.y));
        }
        if self.finished || self.y <= self.x {
            self.finished = true;
            return None;
        }

        let (x, y) = (i64::from(self.x), i64::from(self.y));
        if self.d < 0 {
            self.d += 2 * x + 3;
        } else {
            self.d += 2 * (x - y) + 5;
            self.y -= 1;
        }
        self.x += 1;
        Some((self.x, self.y))
    }
}

impl Iterator for MidpointCircle {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        loop {
            if let Some(point) = self.pending.pop() {
                return Some(point);
            }
            let (x, y) = self.advance()?;
            self.pending.load_octants(self.center, x, y);
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let pending = self.pending.remaining();
        if self.finished {
            (pending, Some(pending))
        } else {
            (pending, None)
        }
    }
}

impl FusedIterator for MidpointCircle {}

/// Midpoint circle centered on `center` passing (to the nearest pixel)
/// through `radius_point`.
#[must_use]
pub fn circle_midpoint(center: Point, radius_point: Point) -> MidpointCircle {
    MidpointCircle::new(CircleSpec::through(center, radius_point))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_zero_radius_single_center() {
        let c = Point::new(12, -4);
        let got: Vec<Point> = circle_midpoint(c, c).collect();
        assert_eq!(got, vec![c]);
    }

    #[test]
    fn test_radius_five_first_octant() {
        let got: Vec<Point> = circle_midpoint(Point::ORIGIN, Point::new(5, 0)).collect();
        // Every eighth point is the first-octant offset itself.
        let octant: Vec<Point> = got.iter().step_by(8).copied().collect();
        assert_eq!(
            octant,
            vec![
                Point::new(0, 5),
                Point::new(1, 5),
                Point::new(2, 5),
                Point::new(3, 4),
                Point::new(4, 3),
            ]
        );
        assert_eq!(got.len(), 40);
    }

    #[test]
    fn test_radius_five_contains_axis_extremes() {
        let set: HashSet<Point> = circle_midpoint(Point::ORIGIN, Point::new(5, 0)).collect();
        for p in [(5, 0), (0, 5), (-5, 0), (0, -5)] {
            assert!(set.contains(&Point::from(p)), "missing {p:?}");
        }
    }

    #[test]
    fn test_first_emission_order() {
        let got: Vec<Point> = circle_midpoint(Point::new(10, 10), Point::new(10, 12)).take(8).collect();
        assert_eq!(
            got,
            vec![
                Point::new(10, 12),
                Point::new(10, 12),
                Point::new(10, 8),
                Point::new(10, 8),
                Point::new(12, 10),
                Point::new(8, 10),
                Point::new(12, 10),
                Point::new(8, 10),
            ]
        );
    }

    #[test]
    fn test_radius_one() {
        let set: HashSet<Point> = circle_midpoint(Point::ORIGIN, Point::new(0, 1)).collect();
        // (0, 1) steps straight to (1, 0); no diagonal pixels.
        let expected: HashSet<Point> =
            [(0, 1), (0, -1), (1, 0), (-1, 0)].into_iter().map(Point::from).collect();
        assert_eq!(set, expected);
    }

    #[test]
    fn test_offset_center() {
        let set: HashSet<Point> = circle_midpoint(Point::new(100, 50), Point::new(103, 54)).collect();
        assert!(set.contains(&Point::new(105, 50)));
        assert!(set.contains(&Point::new(100, 45)));
    }

    #[test]
    #[should_panic(expected = "exceeds")]
    fn test_oversize_radius_fails_fast() {
        let _ = MidpointCircle::new(CircleSpec::new(Point::ORIGIN, MAX_RADIUS + 1));
    }

    #[test]
    fn test_center_near_coordinate_limit() {
        let center = Point::new(i32::MAX - 1, 0);
        let set: HashSet<Point> = circle_midpoint(center, center.offset(0, 5)).collect();
        assert!(set.contains(&Point::new(i32::MAX - 6, 0)));
        assert!(set.contains(&Point::new(i32::MAX, 0)));
    }
}
