//! Core framebuffer for pixel rendering.
//!
//! A row-major RGBA pixel buffer. It is the default [`PointSink`]: every
//! plotted point becomes one opaque pixel in the current ink color, and points
//! that fall outside the surface are dropped.

use crate::color::Rgba;
use crate::error::{Error, Result};
use crate::geometry::Point;
use crate::raster::PointSink;

/// RGBA pixel buffer.
#[derive(Debug, Clone)]
pub struct Framebuffer {
    /// Width in pixels.
    width: u32,
    /// Height in pixels.
    height: u32,
    /// RGBA pixels in row-major order, 4 bytes each: [R, G, B, A].
    pixels: Vec<u8>,
    /// Color used by [`PointSink::plot`].
    ink: Rgba,
}

impl Framebuffer {
    /// Create a new framebuffer with the given dimensions, cleared to
    /// transparent black, with black ink.
    ///
    /// # Errors
    ///
    /// Returns an error if width or height is zero.
    ///
    /// # Example
    ///
    /// ```
    /// use scanpaint::framebuffer::Framebuffer;
    ///
    /// let fb = Framebuffer::new(800, 600).unwrap();
    /// assert_eq!(fb.width(), 800);
    /// assert_eq!(fb.height(), 600);
    /// ```
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimensions { width, height });
        }

        let size = (width as usize) * (height as usize) * 4;
        Ok(Self { width, height, pixels: vec![0; size], ink: Rgba::BLACK })
    }

    /// Get the width in pixels.
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Get the height in pixels.
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Get the raw pixel data as a slice (RGBA8, no row padding).
    #[must_use]
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Current ink color.
    #[must_use]
    pub const fn ink(&self) -> Rgba {
        self.ink
    }

    /// Set the ink color used for plotted points.
    pub fn set_ink(&mut self, ink: Rgba) {
        self.ink = ink;
    }

    /// Builder-style variant of [`Framebuffer::set_ink`].
    #[must_use]
    pub fn with_ink(mut self, ink: Rgba) -> Self {
        self.ink = ink;
        self
    }

    /// Clear the framebuffer to a solid color.
    pub fn clear(&mut self, color: Rgba) {
        let rgba = color.to_array();
        for chunk in self.pixels.chunks_exact_mut(4) {
            chunk.copy_from_slice(&rgba);
        }
    }

    /// True if `point` lies on the surface.
    #[must_use]
    pub fn contains(&self, point: Point) -> bool {
        point.x >= 0
            && point.y >= 0
            && (point.x as u32) < self.width
            && (point.y as u32) < self.height
    }

    /// Get the color at a specific pixel coordinate.
    ///
    /// Returns `None` if the coordinates are out of bounds.
    #[must_use]
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<Rgba> {
        if x >= self.width || y >= self.height {
            return None;
        }

        let idx = self.pixel_index(x, y);
        Some(Rgba::from_array([
            self.pixels[idx],
            self.pixels[idx + 1],
            self.pixels[idx + 2],
            self.pixels[idx + 3],
        ]))
    }

    /// Set the color at a specific pixel coordinate.
    ///
    /// Does nothing if the coordinates are out of bounds.
    pub fn set_pixel(&mut self, x: u32, y: u32, color: Rgba) {
        if x >= self.width || y >= self.height {
            return;
        }

        let idx = self.pixel_index(x, y);
        self.pixels[idx..idx + 4].copy_from_slice(&color.to_array());
    }

    /// Count pixels exactly equal to `color`.
    #[must_use]
    pub fn count_pixels(&self, color: Rgba) -> usize {
        let rgba = color.to_array();
        self.pixels.chunks_exact(4).filter(|chunk| *chunk == rgba).count()
    }

    #[inline]
    fn pixel_index(&self, x: u32, y: u32) -> usize {
        ((y as usize) * (self.width as usize) + (x as usize)) * 4
    }
}

impl PointSink for Framebuffer {
    fn plot(&mut self, point: Point) {
        if self.contains(point) {
            self.set_pixel(point.x as u32, point.y as u32, self.ink);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::raster::{bresenham_line, circle_midpoint, rasterize_into};

    #[test]
    fn test_new_rejects_zero_dimensions() {
        assert!(matches!(
            Framebuffer::new(0, 10),
            Err(Error::InvalidDimensions { width: 0, height: 10 })
        ));
        assert!(Framebuffer::new(10, 0).is_err());
    }

    #[test]
    fn test_clear_and_get() {
        let mut fb = Framebuffer::new(4, 3).unwrap();
        fb.clear(Rgba::WHITE);
        assert_eq!(fb.get_pixel(3, 2), Some(Rgba::WHITE));
        assert_eq!(fb.get_pixel(4, 0), None);
        assert_eq!(fb.count_pixels(Rgba::WHITE), 12);
    }

    #[test]
    fn test_set_pixel_out_of_bounds_is_ignored() {
        let mut fb = Framebuffer::new(2, 2).unwrap();
        fb.set_pixel(5, 5, Rgba::RED);
        assert_eq!(fb.count_pixels(Rgba::RED), 0);
    }

    #[test]
    fn test_plot_uses_ink_and_clips() {
        let mut fb = Framebuffer::new(10, 10).unwrap().with_ink(Rgba::RED);
        fb.clear(Rgba::WHITE);

        fb.plot(Point::new(-1, 3));
        fb.plot(Point::new(3, 10));
        fb.plot(Point::new(3, 3));

        assert_eq!(fb.get_pixel(3, 3), Some(Rgba::RED));
        assert_eq!(fb.count_pixels(Rgba::RED), 1);
    }

    #[test]
    fn test_line_off_surface_does_not_panic() {
        let mut fb = Framebuffer::new(100, 100).unwrap();
        fb.clear(Rgba::WHITE);

        rasterize_into(bresenham_line(Point::new(-10, -10), Point::new(110, 110)), &mut fb);

        assert_eq!(fb.get_pixel(50, 50), Some(Rgba::BLACK));
        assert_eq!(fb.count_pixels(Rgba::BLACK), 100);
    }

    #[test]
    fn test_duplicate_points_are_idempotent() {
        let mut fb = Framebuffer::new(20, 20).unwrap();
        fb.clear(Rgba::WHITE);

        let plotted = rasterize_into(circle_midpoint(Point::new(10, 10), Point::new(10, 15)), &mut fb);
        let drawn = fb.count_pixels(Rgba::BLACK);

        assert_eq!(plotted, 40);
        assert!(drawn < plotted);
        assert_eq!(fb.get_pixel(10, 10), Some(Rgba::WHITE));
        assert_eq!(fb.get_pixel(15, 10), Some(Rgba::BLACK));
    }
}
