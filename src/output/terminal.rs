//! Terminal output encoder (ASCII/Unicode).
//!
//! Renders a framebuffer as text so drawings can be previewed without a
//! window. Strokes are one pixel wide, so downscaling keeps the *darkest*
//! pixel of every block instead of sampling its center; a single inked pixel
//! is enough to mark its cell.
//!
//! - ASCII: grayscale ramp ` .:-=+*#%@`, dark ink maps to dense characters
//! - Unicode: half-block characters (▀ ▄ █) at twice the vertical resolution

use crate::framebuffer::Framebuffer;

/// Terminal rendering mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TerminalMode {
    /// ASCII grayscale characters (widest compatibility)
    #[default]
    Ascii,
    /// Unicode half-block characters (2x vertical resolution)
    UnicodeHalfBlock,
}

/// Terminal encoder configuration.
#[derive(Debug, Clone)]
pub struct TerminalEncoder {
    mode: TerminalMode,
    width: Option<u32>,
    invert: bool,
}

impl Default for TerminalEncoder {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalEncoder {
    /// ASCII ramp from light (background) to dark (ink).
    const ASCII_RAMP: &'static [char] = &[' ', '.', ':', '-', '=', '+', '*', '#', '%', '@'];

    /// Luma below which a half-block counts as inked.
    const INK_THRESHOLD: f32 = 0.5;

    /// Create a new terminal encoder with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self { mode: TerminalMode::default(), width: None, invert: false }
    }

    /// Set the rendering mode.
    #[must_use]
    pub fn mode(mut self, mode: TerminalMode) -> Self {
        self.mode = mode;
        self
    }

    /// Set the target width in characters.
    /// If not set, uses the framebuffer width capped at 80 columns.
    #[must_use]
    pub fn width(mut self, width: u32) -> Self {
        self.width = Some(width.max(1));
        self
    }

    /// Treat light pixels as ink (for light-on-dark drawings).
    #[must_use]
    pub fn invert(mut self, invert: bool) -> Self {
        self.invert = invert;
        self
    }

    /// Render a framebuffer to a string, one line per text row.
    #[must_use]
    pub fn render(&self, fb: &Framebuffer) -> String {
        match self.mode {
            TerminalMode::Ascii => self.render_ascii(fb),
            TerminalMode::UnicodeHalfBlock => self.render_half_block(fb),
        }
    }

    fn render_ascii(&self, fb: &Framebuffer) -> String {
        // Characters are about twice as tall as they are wide.
        let (cols, rows) = self.grid(fb, 2.0);
        let mut output = String::with_capacity((cols as usize + 1) * rows as usize);

        for row in 0..rows {
            for col in 0..cols {
                let darkness = 1.0 - self.block_luma(fb, col, row, cols, rows);
                output.push(Self::ASCII_RAMP[Self::ramp_index(darkness)]);
            }
            output.push('\n');
        }

        output
    }

    fn render_half_block(&self, fb: &Framebuffer) -> String {
        let (cols, rows) = self.grid(fb, 1.0);
        // Two vertical samples per character.
        let rows = (rows + 1) & !1;
        let mut output = String::with_capacity((cols as usize * 3 + 1) * (rows / 2) as usize);

        for row in (0..rows).step_by(2) {
            for col in 0..cols {
                let top = self.block_luma(fb, col, row, cols, rows) < Self::INK_THRESHOLD;
                let bottom = self.block_luma(fb, col, row + 1, cols, rows) < Self::INK_THRESHOLD;
                output.push(match (top, bottom) {
                    (true, true) => '█',
                    (true, false) => '▀',
                    (false, true) => '▄',
                    (false, false) => ' ',
                });
            }
            output.push('\n');
        }

        output
    }

    /// Text grid dimensions preserving aspect ratio.
    fn grid(&self, fb: &Framebuffer, char_aspect: f32) -> (u32, u32) {
        let cols = self.width.unwrap_or_else(|| fb.width().min(80));
        let fb_aspect = fb.width() as f32 / fb.height() as f32;
        let rows = (cols as f32 / fb_aspect / char_aspect).round() as u32;
        (cols, rows.max(1))
    }

    /// Lowest luma (after inversion) among the pixels covered by one cell.
    fn block_luma(&self, fb: &Framebuffer, col: u32, row: u32, cols: u32, rows: u32) -> f32 {
        let span = |i: u32, n: u32, len: u32| {
            let start = (u64::from(i) * u64::from(len) / u64::from(n)) as u32;
            let end = (u64::from(i + 1) * u64::from(len) / u64::from(n)) as u32;
            (start.min(len - 1), end.clamp(start + 1, len))
        };
        let (x0, x1) = span(col, cols, fb.width());
        let (y0, y1) = span(row, rows, fb.height());

        let mut lowest: f32 = 1.0;
        for y in y0..y1 {
            for x in x0..x1 {
                if let Some(pixel) = fb.get_pixel(x, y) {
                    let luma = pixel.luma();
                    lowest = lowest.min(if self.invert { 1.0 - luma } else { luma });
                }
            }
        }
        lowest
    }

    fn ramp_index(darkness: f32) -> usize {
        let idx = (darkness * (Self::ASCII_RAMP.len() - 1) as f32).round() as usize;
        idx.min(Self::ASCII_RAMP.len() - 1)
    }

    /// Write output directly to stdout.
    pub fn print(&self, fb: &Framebuffer) {
        print!("{}", self.render(fb));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Rgba;
    use crate::geometry::Point;
    use crate::raster::{bresenham_line, rasterize_into};

    fn white(width: u32, height: u32) -> Framebuffer {
        let mut fb = Framebuffer::new(width, height).expect("framebuffer creation should succeed");
        fb.clear(Rgba::WHITE);
        fb
    }

    #[test]
    fn test_ascii_blank_canvas_is_spaces() {
        let fb = white(10, 10);
        let output = TerminalEncoder::new().width(5).render(&fb);
        assert!(output.chars().all(|ch| ch == ' ' || ch == '\n'));
    }

    #[test]
    fn test_ascii_single_pixel_stroke_survives_downscale() {
        let mut fb = white(100, 100);
        rasterize_into(bresenham_line(Point::new(0, 50), Point::new(99, 50)), &mut fb);

        let output = TerminalEncoder::new().width(10).render(&fb);
        let inked_rows = output.lines().filter(|line| line.contains('@')).count();
        assert_eq!(inked_rows, 1);
        assert!(output.lines().any(|line| line == "@@@@@@@@@@"));
    }

    #[test]
    fn test_invert_mode() {
        let fb = white(10, 10);
        let output = TerminalEncoder::new().width(5).invert(true).render(&fb);
        assert!(output.contains('@'));
        assert!(!output.contains(' '));
    }

    #[test]
    fn test_half_block_marks_top_and_bottom() {
        let mut fb = white(4, 2);
        fb.set_pixel(0, 0, Rgba::BLACK);
        fb.set_pixel(1, 1, Rgba::BLACK);
        fb.set_pixel(2, 0, Rgba::BLACK);
        fb.set_pixel(2, 1, Rgba::BLACK);

        let output = TerminalEncoder::new().mode(TerminalMode::UnicodeHalfBlock).width(4).render(&fb);
        assert_eq!(output, "▀▄█ \n");
    }

    #[test]
    fn test_aspect_ratio_preservation() {
        let fb = white(200, 100);
        let output = TerminalEncoder::new().width(40).render(&fb);
        // 2:1 image, 2:1 characters: 40 columns give 10 rows.
        assert_eq!(output.lines().count(), 10);
    }

    #[test]
    fn test_default_width_capped_at_80() {
        let fb = white(1000, 100);
        let output = TerminalEncoder::new().render(&fb);
        let first_line = output.lines().next().expect("iterator should have next element");
        assert_eq!(first_line.chars().count(), 80);
    }

    #[test]
    fn test_upscaling_small_framebuffer() {
        let mut fb = white(2, 2);
        fb.set_pixel(0, 0, Rgba::BLACK);
        let output = TerminalEncoder::new().width(4).render(&fb);
        // Width 4 over 2 pixels: each pixel spans two columns.
        assert!(output.starts_with("@@"));
    }
}
