//! Headless drawing surface.
//!
//! A [`Canvas`] receives the pointer gestures of an interactive surface
//! (press, drag, release) and keeps the shapes they produce. While dragging,
//! a single *preview* shape follows the pointer and is replaced on every
//! move (rubber-band preview); releasing commits the final shape. Rendering
//! rasterizes everything into a [`Framebuffer`] that can be shown or exported.

use crate::color::Rgba;
use crate::error::{Error, Result};
use crate::framebuffer::Framebuffer;
use crate::geometry::Point;
use crate::raster::rasterize_into;
use crate::shape::{Shape, ShapeKind};
use crate::transform::Transform;

/// Interactive drawing state.
#[derive(Debug, Clone)]
pub struct Canvas {
    width: u32,
    height: u32,
    background: Rgba,
    ink: Rgba,
    kind: ShapeKind,
    transform: Transform,
    anchor: Option<Point>,
    preview: Option<Shape>,
    committed: Vec<Shape>,
}

impl Canvas {
    /// Create an empty canvas: white background, black ink, DDA lines.
    ///
    /// # Errors
    ///
    /// Returns an error if width or height is zero.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimensions { width, height });
        }
        Ok(Self {
            width,
            height,
            background: Rgba::WHITE,
            ink: Rgba::BLACK,
            kind: ShapeKind::default(),
            transform: Transform::Identity,
            anchor: None,
            preview: None,
            committed: Vec::new(),
        })
    }

    /// Set the background color.
    #[must_use]
    pub fn with_background(mut self, background: Rgba) -> Self {
        self.background = background;
        self
    }

    /// Set the ink color.
    #[must_use]
    pub fn with_ink(mut self, ink: Rgba) -> Self {
        self.ink = ink;
        self
    }

    /// Width in pixels.
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// The shape kind new gestures will draw.
    #[must_use]
    pub const fn shape_kind(&self) -> ShapeKind {
        self.kind
    }

    /// Select the shape kind for subsequent gestures.
    pub fn select_shape(&mut self, kind: ShapeKind) {
        log::debug!("canvas: shape kind {kind}");
        self.kind = kind;
    }

    /// The transform applied when rendering.
    #[must_use]
    pub const fn transform(&self) -> &Transform {
        &self.transform
    }

    /// Select the transform applied to every shape at render time.
    pub fn select_transform(&mut self, transform: Transform) {
        log::debug!("canvas: transform {transform}");
        self.transform = transform;
    }

    /// Pointer pressed: start a gesture at `point`.
    pub fn press(&mut self, point: Point) {
        self.anchor = Some(point);
        self.preview = None;
    }

    /// Pointer moved while pressed: replace the preview.
    pub fn drag(&mut self, point: Point) {
        let Some(anchor) = self.anchor else {
            log::debug!("canvas: drag to {point} without press ignored");
            return;
        };
        self.preview = Some(Shape::new(self.kind, anchor, point));
    }

    /// Pointer released: drop the preview and commit the final shape.
    ///
    /// Returns the committed shape, or `None` if no gesture was in progress.
    pub fn release(&mut self, point: Point) -> Option<Shape> {
        self.preview = None;
        let Some(anchor) = self.anchor.take() else {
            log::debug!("canvas: release at {point} without press ignored");
            return None;
        };
        let shape = Shape::new(self.kind, anchor, point);
        log::debug!("canvas: commit {shape}");
        self.committed.push(shape);
        Some(shape)
    }

    /// Commit a shape directly, bypassing the gesture flow.
    pub fn add(&mut self, shape: Shape) {
        self.committed.push(shape);
    }

    /// The current rubber-band preview, if a drag is in progress.
    #[must_use]
    pub const fn preview(&self) -> Option<&Shape> {
        self.preview.as_ref()
    }

    /// Committed shapes in drawing order.
    #[must_use]
    pub fn committed(&self) -> &[Shape] {
        &self.committed
    }

    /// Drop every shape and any gesture in progress.
    pub fn clear(&mut self) {
        self.anchor = None;
        self.preview = None;
        self.committed.clear();
    }

    /// Rasterize committed shapes, then the preview, into a new framebuffer.
    ///
    /// # Errors
    ///
    /// Propagates framebuffer allocation errors. Returns
    /// [`Error::InvalidShape`] when a transformed circle or ellipse grows past
    /// [`MAX_RADIUS`](crate::geometry::MAX_RADIUS).
    pub fn render(&self) -> Result<Framebuffer> {
        let mut fb = Framebuffer::new(self.width, self.height)?.with_ink(self.ink);
        fb.clear(self.background);

        let mut plotted = 0;
        for shape in self.committed.iter().chain(self.preview.iter()) {
            let shape = shape.transformed(&self.transform);
            shape.validate()?;
            plotted += rasterize_into(shape.pixels(), &mut fb);
        }
        log::debug!(
            "canvas: rendered {} shapes ({plotted} points) at {}x{}",
            self.committed.len() + usize::from(self.preview.is_some()),
            self.width,
            self.height
        );
        Ok(fb)
    }
}
