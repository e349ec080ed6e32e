//! Error types for scanpaint operations.
//!
//! The rasterizers themselves never fail; errors come from the layers around
//! them (parsing shape specs, building canvases, loading configuration and
//! writing images).

use std::io;
use thiserror::Error;

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in scanpaint operations.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error (file operations, etc.).
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// PNG encoding error.
    #[error("PNG encoding error: {0}")]
    PngEncoding(#[from] png::EncodingError),

    /// Invalid dimensions for a canvas or framebuffer.
    #[error("Invalid dimensions: {width}x{height}")]
    InvalidDimensions {
        /// Width value.
        width: u32,
        /// Height value.
        height: u32,
    },

    /// Shape kind name not recognised.
    #[error("Unknown shape kind: {0}")]
    UnknownShape(String),

    /// Malformed `kind:x1,y1:x2,y2` shape description.
    #[error("Invalid shape '{input}': {message}")]
    InvalidShape {
        /// The text that failed to parse.
        input: String,
        /// What was wrong with it.
        message: String,
    },

    /// Malformed transform description.
    #[error("Invalid transform '{input}': {message}")]
    InvalidTransform {
        /// The text that failed to parse.
        input: String,
        /// What was wrong with it.
        message: String,
    },

    /// Color parsing error.
    #[error("Invalid color: {0}")]
    InvalidColor(String),

    /// Configuration parsing error with line number.
    #[error("configuration error at line {line}: {message}")]
    ConfigParse {
        /// Line number where the error occurred (1-indexed).
        line: usize,
        /// Error message describing the issue.
        message: String,
    },

    /// Configuration file not found.
    #[error("configuration file not found: {0}")]
    ConfigNotFound(String),

    /// Invalid configuration value.
    #[error("invalid configuration value for '{key}': {message}")]
    ConfigInvalid {
        /// The configuration key with invalid value.
        key: String,
        /// Error message describing why the value is invalid.
        message: String,
    },
}
