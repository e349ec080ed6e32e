//! Midpoint ellipse rasterizer.

use std::iter::FusedIterator;

use super::Reflections;
use crate::geometry::{EllipseSpec, Point, MAX_RADIUS};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Region {
    Start,
    /// Slope magnitude below 1: step x, sometimes y.
    One,
    /// Steep arc: step y down to the axis, sometimes x.
    Two,
    /// `ry == 0`: walk x outward along the horizontal axis.
    Flat,
    Done,
}

/// Midpoint ellipse outline, axis-aligned.
///
/// Region one starts at `(0, ry)` and runs while `px < py`, where
/// `px = 2·ry²·x` and `py = 2·rx²·y`; region two re-seeds the decision
/// variable at the boundary it reached and walks `y` down to zero. Each step
/// emits the four quadrant reflections about the center.
///
/// Degenerate radii: both zero yields the center once; `rx == 0` walks a
/// vertical segment through region two; `ry == 0` walks a horizontal segment
/// out to `±rx`.
#[derive(Debug, Clone)]
pub struct MidpointEllipse {
    center: Point,
    rx: i32,
    rx2: i64,
    ry2: i64,
    x: i32,
    y: i32,
    px: i64,
    py: i64,
    p: f64,
    region: Region,
    pending: Reflections,
}

impl MidpointEllipse {
    /// Rasterize `spec`.
    ///
    /// # Panics
    ///
    /// Panics if either radius exceeds [`MAX_RADIUS`].
    #[must_use]
    pub fn new(spec: EllipseSpec) -> Self {
        assert!(
            spec.rx <= MAX_RADIUS && spec.ry <= MAX_RADIUS,
            "ellipse radii {}x{} exceed {MAX_RADIUS}",
            spec.rx,
            spec.ry
        );

        let rx = spec.rx as i32;
        let ry = spec.ry as i32;
        let rx2 = i64::from(rx) * i64::from(rx);
        let ry2 = i64::from(ry) * i64::from(ry);

        let (region, pending) = if rx == 0 && ry == 0 {
            (Region::Done, Reflections::single(spec.center))
        } else {
            (Region::Start, Reflections::empty())
        };

        Self {
            center: spec.center,
            rx,
            rx2,
            ry2,
            x: 0,
            y: ry,
            px: 0,
            py: 2 * rx2 * i64::from(ry),
            p: ry2 as f64 - (rx2 * i64::from(ry)) as f64 + 0.25 * rx2 as f64,
            region,
            pending,
        }
    }

    /// Advance the decision variable and return the next first-quadrant offset.
    fn advance(&mut self) -> Option<(i32, i32)> {
        loop {
            match self.region {
                Region::Start => {
                    self.region = if self.ry2 == 0 { Region::Flat } else { Region::One };
                    return Some((self.x, self.y));
                }
                Region::One => {
                    if self.px >= self.py {
                        let x = f64::from(self.x) + 0.5;
                        let y = f64::from(self.y - 1);
                        self.p = self.ry2 as f64 * x * x + self.rx2 as f64 * y * y
                            - self.rx2 as f64 * self.ry2 as f64;
                        self.region = Region::Two;
                        continue;
                    }
                    self.x += 1;
                    self.px += 2 * self.ry2;
                    if self.p < 0.0 {
                        self.p += (self.ry2 + self.px) as f64;
                    } else {
                        self.y -= 1;
                        self.py -= 2 * self.rx2;
                        self.p += (self.ry2 + self.px - self.py) as f64;
                    }
                    return Some((self.x, self.y));
                }
                Region::Two => {
                    if self.y <= 0 {
                        self.region = Region::Done;
                        return None;
                    }
                    self.y -= 1;
                    self.py -= 2 * self.rx2;
                    if self.p > 0.0 {
                        self.p += (self.rx2 - self.py) as f64;
                    } else {
                        self.x += 1;
                        self.px += 2 * self.ry2;
                        self.p += (self.rx2 - self.py + self.px) as f64;
                    }
                    return Some((self.x, self.y));
                }
                Region::Flat => {
                    if self.x >= self.rx {
                        self.region = Region::Done;
                        return None;
                    }
                    self.x += 1;
                    return Some((self.x, 0));
                }
                Region::Done => return None,
            }
        }
    }
}

impl Iterator for MidpointEllipse {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        loop {
            if let Some(point) = self.pending.pop() {
                return Some(point);
            }
            let (x, y) = self.advance()?;
            self.pending.load_quadrants(self.center, x, y);
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let pending = self.pending.remaining();
        if self.region == Region::Done {
            (pending, Some(pending))
        } else {
            (pending, None)
        }
    }
}

impl FusedIterator for MidpointEllipse {}

/// Midpoint ellipse centered on `center` whose bounding box has a corner at
/// `bound_point`.
#[must_use]
pub fn ellipse_midpoint(center: Point, bound_point: Point) -> MidpointEllipse {
    MidpointEllipse::new(EllipseSpec::bounded_by(center, bound_point))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    /// The first-quadrant offsets, i.e. every fourth emitted point minus center.
    fn quadrant(center: Point, bound: Point) -> Vec<(i32, i32)> {
        ellipse_midpoint(center, bound)
            .step_by(4)
            .map(|p| (p.x - center.x, p.y - center.y))
            .collect()
    }

    #[test]
    fn test_both_radii_zero_single_center() {
        let c = Point::new(3, 3);
        let got: Vec<Point> = ellipse_midpoint(c, c).collect();
        assert_eq!(got, vec![c]);
    }

    #[test]
    fn test_small_ellipse_offsets() {
        assert_eq!(quadrant(Point::ORIGIN, Point::new(2, 1)), vec![(0, 1), (1, 1), (2, 0)]);
    }

    #[test]
    fn test_zero_rx_is_vertical_segment() {
        assert_eq!(
            quadrant(Point::ORIGIN, Point::new(0, 3)),
            vec![(0, 3), (0, 2), (0, 1), (0, 0)]
        );
        let set: HashSet<Point> = ellipse_midpoint(Point::ORIGIN, Point::new(0, 3)).collect();
        assert!(set.contains(&Point::new(0, -3)));
        assert!(set.iter().all(|p| p.x == 0));
    }

    #[test]
    fn test_zero_ry_is_horizontal_segment() {
        assert_eq!(
            quadrant(Point::ORIGIN, Point::new(3, 0)),
            vec![(0, 0), (1, 0), (2, 0), (3, 0)]
        );
        let set: HashSet<Point> = ellipse_midpoint(Point::ORIGIN, Point::new(-3, 0)).collect();
        assert!(set.contains(&Point::new(3, 0)));
        assert!(set.contains(&Point::new(-3, 0)));
        assert!(set.contains(&Point::ORIGIN));
        assert!(set.iter().all(|p| p.y == 0));
    }

    #[test]
    fn test_equal_radii_touch_axes() {
        let set: HashSet<Point> = ellipse_midpoint(Point::new(50, 50), Point::new(60, 60)).collect();
        for p in [(60, 50), (40, 50), (50, 60), (50, 40)] {
            assert!(set.contains(&Point::from(p)), "missing {p:?}");
        }
    }

    #[test]
    fn test_quadrant_reflection_order() {
        let got: Vec<Point> = ellipse_midpoint(Point::new(5, 5), Point::new(7, 6)).take(4).collect();
        assert_eq!(
            got,
            vec![Point::new(5, 6), Point::new(5, 6), Point::new(5, 4), Point::new(5, 4)]
        );
    }

    #[test]
    fn test_large_radii_reach_both_axes() {
        let rx = MAX_RADIUS as i32;
        let ry = rx / 2;
        let last = quadrant(Point::ORIGIN, Point::new(rx, ry)).last().copied();
        assert_eq!(last, Some((rx, 0)));
    }

    #[test]
    fn test_y_stays_within_radius() {
        for (x, y) in quadrant(Point::ORIGIN, Point::new(17, 9)) {
            assert!((0..=9).contains(&y));
            assert!(x >= 0);
        }
    }
}
