//! Scan-conversion of lines, circles and ellipses into pixel coordinates.
//!
//! Every rasterizer is a lazy iterator of [`Point`]s. Collect it for the whole
//! pixel sequence, or stream it into a [`PointSink`] one pixel at a time.
//! Emission order is deterministic; symmetric algorithms may emit the same
//! pixel more than once.
//!
//! # Algorithms
//!
//! - **DDA Line**: floating-point incremental stepping along the major axis
//! - **Bresenham's Line**: integer error accumulation, all octants
//! - **Midpoint Circle**: first-octant decision variable with 8-way symmetry
//! - **Midpoint Ellipse**: two-region decision variable with 4-way symmetry
//!
//! # References
//!
//! - Bresenham, J. E. (1965). "Algorithm for computer control of a digital plotter."
//! - Van Aken, J. R. (1984). "An Efficient Ellipse-Drawing Algorithm." IEEE CG&A.

mod circle;
mod ellipse;
mod line;

pub use circle::{circle_midpoint, MidpointCircle};
pub use ellipse::{ellipse_midpoint, MidpointEllipse};
pub use line::{bresenham_line, dda_line, BresenhamLine, DdaLine};

use crate::geometry::Point;

/// Anything that accepts pixels one at a time.
pub trait PointSink {
    /// Plot a single pixel. Plotting the same pixel twice must be harmless.
    fn plot(&mut self, point: Point);
}

impl PointSink for Vec<Point> {
    fn plot(&mut self, point: Point) {
        self.push(point);
    }
}

/// Stream a pixel sequence into a sink, returning how many points were plotted.
pub fn rasterize_into<I, S>(pixels: I, sink: &mut S) -> usize
where
    I: IntoIterator<Item = Point>,
    S: PointSink + ?Sized,
{
    let mut count = 0;
    for point in pixels {
        sink.plot(point);
        count += 1;
    }
    count
}

/// Pending symmetric reflections of one computed offset.
#[derive(Debug, Clone, Copy)]
struct Reflections {
    points: [Point; 8],
    len: u8,
    next: u8,
}

impl Reflections {
    const fn empty() -> Self {
        Self { points: [Point::ORIGIN; 8], len: 0, next: 0 }
    }

    fn load(&mut self, points: &[Point]) {
        self.points[..points.len()].copy_from_slice(points);
        self.len = points.len() as u8;
        self.next = 0;
    }

    fn single(point: Point) -> Self {
        let mut reflections = Self::empty();
        reflections.load(&[point]);
        reflections
    }

    /// The eight octant reflections of `(x, y)` about `c`.
    fn load_octants(&mut self, c: Point, x: i32, y: i32) {
        self.load(&[
            c.offset(x, y),
            c.offset(-x, y),
            c.offset(x, -y),
            c.offset(-x, -y),
            c.offset(y, x),
            c.offset(-y, x),
            c.offset(y, -x),
            c.offset(-y, -x),
        ]);
    }

    /// The four quadrant reflections of `(x, y)` about `c`.
    fn load_quadrants(&mut self, c: Point, x: i32, y: i32) {
        self.load(&[c.offset(x, y), c.offset(-x, y), c.offset(x, -y), c.offset(-x, -y)]);
    }

    fn pop(&mut self) -> Option<Point> {
        if self.next < self.len {
            let point = self.points[self.next as usize];
            self.next += 1;
            Some(point)
        } else {
            None
        }
    }

    fn remaining(&self) -> usize {
        usize::from(self.len - self.next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vec_sink_collects_in_order() {
        let mut sink = Vec::new();
        let n = rasterize_into(bresenham_line(Point::new(0, 0), Point::new(2, 0)), &mut sink);
        assert_eq!(n, 3);
        assert_eq!(sink, vec![Point::new(0, 0), Point::new(1, 0), Point::new(2, 0)]);
    }

    #[test]
    fn test_sink_through_trait_object() {
        let mut sink: Vec<Point> = Vec::new();
        let dyn_sink: &mut dyn PointSink = &mut sink;
        let n = rasterize_into(dda_line(Point::new(0, 0), Point::new(0, 3)), dyn_sink);
        assert_eq!(n, 3);
        assert_eq!(sink.len(), 3);
    }

    #[test]
    fn test_reflections_octants_order() {
        let mut r = Reflections::empty();
        r.load_octants(Point::new(10, 10), 1, 2);
        let got: Vec<Point> = std::iter::from_fn(|| r.pop()).collect();
        assert_eq!(
            got,
            vec![
                Point::new(11, 12),
                Point::new(9, 12),
                Point::new(11, 8),
                Point::new(9, 8),
                Point::new(12, 11),
                Point::new(8, 11),
                Point::new(12, 9),
                Point::new(8, 9),
            ]
        );
        assert_eq!(r.remaining(), 0);
    }

    #[test]
    fn test_reflections_single() {
        let mut r = Reflections::single(Point::new(4, 5));
        assert_eq!(r.remaining(), 1);
        assert_eq!(r.pop(), Some(Point::new(4, 5)));
        assert_eq!(r.pop(), None);
    }
}
