//! # scanpaint
//!
//! Classic scan-conversion algorithms that turn lines, circles and ellipses
//! into integer pixel coordinates, plus the headless paint surface around them.
//!
//! ## Features
//!
//! - **Lazy pixel sequences**: every rasterizer is an allocation-free iterator
//! - **Four algorithms**: DDA and Bresenham lines, midpoint circles and ellipses
//! - **Rubber-band canvas**: press/drag/release gestures with a live preview
//! - **Outputs**: PNG export and ASCII/Unicode terminal preview
//!
//! ## Quick Start
//!
//! ```rust
//! use scanpaint::prelude::*;
//!
//! let pixels: Vec<Point> = bresenham_line(Point::new(0, 0), Point::new(5, 2)).collect();
//! assert_eq!(pixels.len(), 6);
//!
//! let mut canvas = Canvas::new(64, 64)?;
//! canvas.select_shape(ShapeKind::CircleMidpoint);
//! canvas.press(Point::new(32, 32));
//! canvas.drag(Point::new(40, 32));
//! canvas.release(Point::new(42, 32));
//! let png = PngEncoder::to_bytes(&canvas.render()?)?;
//! assert!(!png.is_empty());
//! # Ok::<(), scanpaint::Error>(())
//! ```
//!
//! ## References
//!
//! - Bresenham, J. E. (1965). "Algorithm for computer control of a digital plotter."
//!   *IBM Systems Journal*, 4(1), 25-30.
//! - Van Aken, J. R. (1984). "An Efficient Ellipse-Drawing Algorithm." *IEEE CG&A*, 4(9).

#![warn(missing_docs)]
// Allow unwrap() in tests only
#![cfg_attr(test, allow(clippy::unwrap_used))]
// Allow common patterns in graphics code
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::similar_names)]

// ============================================================================
// Core Modules
// ============================================================================

/// Integer pixel geometry.
pub mod geometry;

/// Line, circle and ellipse rasterizers.
pub mod raster;

/// Shape kinds and dispatch.
pub mod shape;

/// Point transforms (translate, rotate, scale, reflect).
pub mod transform;

// ============================================================================
// Surface Modules
// ============================================================================

/// Color types.
pub mod color;

/// Pixel buffer and default point sink.
pub mod framebuffer;

/// Headless drawing surface with rubber-band preview.
pub mod canvas;

/// Output encoders (PNG, terminal).
pub mod output;

/// YAML configuration.
pub mod config;

// ============================================================================
// Error Types
// ============================================================================

/// Error types for scanpaint operations.
pub mod error;

pub use error::{Error, Result};

// ============================================================================
// Prelude
// ============================================================================

/// Commonly used types and traits for convenient imports.
///
/// ```rust
/// use scanpaint::prelude::*;
/// ```
pub mod prelude {
    pub use crate::canvas::Canvas;
    pub use crate::color::Rgba;
    pub use crate::config::Config;
    pub use crate::error::{Error, Result};
    pub use crate::framebuffer::Framebuffer;
    pub use crate::geometry::{CircleSpec, EllipseSpec, Point, Segment};
    pub use crate::output::{PngEncoder, TerminalEncoder, TerminalMode};
    pub use crate::raster::{
        bresenham_line, circle_midpoint, dda_line, ellipse_midpoint, rasterize_into, PointSink,
    };
    pub use crate::shape::{Shape, ShapeKind};
    pub use crate::transform::{Axis, Transform};
}
