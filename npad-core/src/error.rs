//! Errors raised by noise generation.

use thiserror::Error;

/// An error that can occur while creating or generating a noise grid.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoiseError {
    /// Width or height is not a positive multiple of 4.
    #[error("invalid dimensions {width}x{height}: width and/or height is not divisible by 4")]
    InvalidDimensions {
        /// Requested width.
        width: usize,
        /// Requested height.
        height: usize,
    },
    /// A buffer handed to a grid does not hold `width * height` samples.
    #[error("buffer holds {actual} samples, expected {expected}")]
    BufferLength {
        /// `width * height`.
        expected: usize,
        /// Length of the supplied buffer.
        actual: usize,
    },
}
