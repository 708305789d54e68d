//! 4x4 block decomposition of a grid.
//!
//! ```text
//! a  .  .  b
//! .  m  n  .
//! .  o  p  .
//! c  .  .  d
//! ```
//!
//! The corners `a b c d` and the interior midpoints `m n o p` are the block's
//! knots. The remaining 8 cells are edge cells filled by the stitching pass.

use npad_utils::{Sample, wrap};

use crate::grid::NoiseGrid;

/// Side length of a block in cells.
pub const BLOCK_SIZE: usize = 4;

/// Number of blocks along each axis of a grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockLayout {
    blocks_x: usize,
    blocks_y: usize,
}

impl BlockLayout {
    /// Creates a layout of `blocks_x` by `blocks_y` blocks.
    #[must_use]
    pub const fn new(blocks_x: usize, blocks_y: usize) -> Self {
        Self { blocks_x, blocks_y }
    }

    /// Blocks per row.
    #[must_use]
    pub const fn blocks_x(&self) -> usize {
        self.blocks_x
    }

    /// Blocks per column.
    #[must_use]
    pub const fn blocks_y(&self) -> usize {
        self.blocks_y
    }

    /// Total number of blocks.
    #[must_use]
    pub const fn count(&self) -> usize {
        self.blocks_x * self.blocks_y
    }

    /// Row-major index of block `(bx, by)`.
    #[must_use]
    pub const fn index(&self, bx: usize, by: usize) -> usize {
        by * self.blocks_x + bx
    }

    /// Index of the block offset by `(dx, dy)` from `(bx, by)`, wrapping around
    /// the grid edges.
    #[must_use]
    pub const fn neighbor(&self, bx: usize, by: usize, dx: isize, dy: isize) -> usize {
        let nx = wrap(bx as isize + dx, self.blocks_x);
        let ny = wrap(by as isize + dy, self.blocks_y);
        self.index(nx, ny)
    }
}

/// The 8 values of a block written by the filling pass.
///
/// Stitching only ever reads these, never another block's edge cells.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Knots<T> {
    /// Top-left corner.
    pub a: T,
    /// Top-right corner.
    pub b: T,
    /// Bottom-left corner.
    pub c: T,
    /// Bottom-right corner.
    pub d: T,
    /// Upper-left midpoint, `(1, 1)`.
    pub m: T,
    /// Upper-right midpoint, `(2, 1)`.
    pub n: T,
    /// Lower-left midpoint, `(1, 2)`.
    pub o: T,
    /// Lower-right midpoint, `(2, 2)`.
    pub p: T,
}

impl<T: Sample> Knots<T> {
    /// Reads the knots of block `(bx, by)` from `grid`.
    #[must_use]
    pub fn read(grid: &NoiseGrid<T>, bx: usize, by: usize) -> Self {
        let x = bx * BLOCK_SIZE;
        let y = by * BLOCK_SIZE;
        Self {
            a: grid[(x, y)],
            b: grid[(x + 3, y)],
            c: grid[(x, y + 3)],
            d: grid[(x + 3, y + 3)],
            m: grid[(x + 1, y + 1)],
            n: grid[(x + 2, y + 1)],
            o: grid[(x + 1, y + 2)],
            p: grid[(x + 2, y + 2)],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn neighbors_wrap_on_both_axes() {
        let layout = BlockLayout::new(3, 2);
        assert_eq!(layout.count(), 6);
        assert_eq!(layout.neighbor(0, 0, -1, 0), layout.index(2, 0));
        assert_eq!(layout.neighbor(2, 1, 1, 0), layout.index(0, 1));
        assert_eq!(layout.neighbor(1, 0, 0, -1), layout.index(1, 1));
        assert_eq!(layout.neighbor(1, 1, 0, 1), layout.index(1, 0));
    }

    #[test]
    fn single_block_is_its_own_neighbor() {
        let layout = BlockLayout::new(1, 1);
        for (dx, dy) in [(-1, 0), (1, 0), (0, -1), (0, 1)] {
            assert_eq!(layout.neighbor(0, 0, dx, dy), 0);
        }
    }

    #[test]
    #[allow(clippy::float_cmp, reason = "knots are copied, not computed")]
    fn knots_read_block_positions() {
        let data: Vec<f64> = (0..64).map(f64::from).collect();
        let grid = NoiseGrid::from_vec(8, 8, data).unwrap();
        let knots = Knots::read(&grid, 1, 1);
        assert_eq!(knots.a, 36.0);
        assert_eq!(knots.b, 39.0);
        assert_eq!(knots.c, 60.0);
        assert_eq!(knots.d, 63.0);
        assert_eq!(knots.m, 45.0);
        assert_eq!(knots.n, 46.0);
        assert_eq!(knots.o, 53.0);
        assert_eq!(knots.p, 54.0);
    }
}
