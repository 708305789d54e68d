//! Dense row-major noise grid.

use std::ops::{Index, IndexMut};
use std::slice::ChunksExact;

use npad_utils::Sample;

use crate::block::{BLOCK_SIZE, BlockLayout};
use crate::error::NoiseError;

/// Checks that `width` and `height` are positive multiples of [`BLOCK_SIZE`] and
/// returns the cell count.
pub fn validate_dimensions(width: usize, height: usize) -> Result<usize, NoiseError> {
    let invalid = NoiseError::InvalidDimensions { width, height };
    if width == 0 || height == 0 || width % BLOCK_SIZE != 0 || height % BLOCK_SIZE != 0 {
        return Err(invalid);
    }
    width.checked_mul(height).ok_or(invalid)
}

/// A `width` x `height` field of noise samples stored row by row.
///
/// Both dimensions are always positive multiples of 4, so the grid splits
/// exactly into 4x4 blocks.
#[derive(Debug, Clone, PartialEq)]
pub struct NoiseGrid<T> {
    width: usize,
    height: usize,
    data: Vec<T>,
}

impl<T: Sample> NoiseGrid<T> {
    /// Creates a zero-filled grid.
    ///
    /// Dimensions whose buffer cannot be allocated are reported as
    /// [`NoiseError::InvalidDimensions`].
    pub fn new(width: usize, height: usize) -> Result<Self, NoiseError> {
        let len = validate_dimensions(width, height)?;
        let mut data = Vec::new();
        data.try_reserve_exact(len)
            .map_err(|_| NoiseError::InvalidDimensions { width, height })?;
        data.resize(len, T::zero());
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Adopts an existing row-major buffer of `width * height` samples.
    pub fn from_vec(width: usize, height: usize, data: Vec<T>) -> Result<Self, NoiseError> {
        let len = validate_dimensions(width, height)?;
        if data.len() != len {
            return Err(NoiseError::BufferLength {
                expected: len,
                actual: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Returns the sample at `(x, y)`, or `None` when out of bounds.
    #[must_use]
    pub fn get(&self, x: usize, y: usize) -> Option<T> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.data.get(y * self.width + x).copied()
    }
}

impl<T> NoiseGrid<T> {
    /// Grid width in cells.
    #[must_use]
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Grid height in cells.
    #[must_use]
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Total number of cells.
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Always `false`: a valid grid holds at least one 4x4 block.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Block decomposition of this grid.
    #[must_use]
    pub const fn layout(&self) -> BlockLayout {
        BlockLayout::new(self.width / BLOCK_SIZE, self.height / BLOCK_SIZE)
    }

    /// Row-major view of all samples.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Mutable row-major view of all samples.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Iterates over the grid one row at a time.
    pub fn rows(&self) -> ChunksExact<'_, T> {
        self.data.chunks_exact(self.width)
    }

    /// Consumes the grid and returns its row-major buffer.
    #[must_use]
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }
}

impl<T> Index<(usize, usize)> for NoiseGrid<T> {
    type Output = T;

    #[inline]
    fn index(&self, (x, y): (usize, usize)) -> &T {
        debug_assert!(x < self.width && y < self.height, "({x}, {y}) out of bounds");
        &self.data[y * self.width + x]
    }
}

impl<T> IndexMut<(usize, usize)> for NoiseGrid<T> {
    #[inline]
    fn index_mut(&mut self, (x, y): (usize, usize)) -> &mut T {
        debug_assert!(x < self.width && y < self.height, "({x}, {y}) out of bounds");
        &mut self.data[y * self.width + x]
    }
}
