//! Error types for halation-pixmap.

use thiserror::Error;

/// Errors from buffer construction and the codec boundary.
#[derive(Debug, Error)]
pub enum PixmapError {
    /// Width or height is zero.
    #[error("invalid dimensions: {width}x{height}")]
    InvalidDimensions {
        /// Requested width.
        width: u32,
        /// Requested height.
        height: u32,
    },

    /// Raw pixel data does not cover width * height.
    #[error("pixel data length mismatch: expected {expected}, got {actual}")]
    LengthMismatch {
        /// width * height.
        expected: usize,
        /// Length of the supplied data.
        actual: usize,
    },

    /// Decoding or encoding through the image crate failed.
    #[error("codec error: {0}")]
    Image(#[from] image::ImageError),
}
