//! Phase 2: toroidal edge stitching.
//!
//! Edge cells are derived from the knots of the block itself and of its four
//! neighbours, wrapping across the grid boundary. Each value is the clamped
//! square root of the mean of four knot products.
//!
//! Must only run once [`BlockFiller`](crate::fill::BlockFiller) has finished the
//! whole grid: the knots of every block are snapshotted before any edge cell is
//! written.

use npad_utils::Sample;
use npad_utils::math::clamp01;
use rayon::prelude::*;

use crate::block::{BLOCK_SIZE, BlockLayout, Knots};
use crate::grid::NoiseGrid;

/// Edge cell values of one block.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edges<T> {
    /// `(3, 1)`
    pub right_upper: T,
    /// `(3, 2)`
    pub right_lower: T,
    /// `(0, 1)`
    pub left_upper: T,
    /// `(0, 2)`
    pub left_lower: T,
    /// `(1, 0)`
    pub top_left: T,
    /// `(2, 0)`
    pub top_right: T,
    /// `(1, 3)`
    pub bottom_left: T,
    /// `(2, 3)`
    pub bottom_right: T,
}

impl<T: Sample> Edges<T> {
    /// Computes the edge cells of block `(bx, by)` from the knots of every block.
    #[must_use]
    pub fn compute(knots: &[Knots<T>], layout: BlockLayout, bx: usize, by: usize) -> Self {
        let k = &knots[layout.index(bx, by)];
        let next = &knots[layout.neighbor(bx, by, 1, 0)];
        let prev = &knots[layout.neighbor(bx, by, -1, 0)];
        let vnext = &knots[layout.neighbor(bx, by, 0, 1)];
        let vprev = &knots[layout.neighbor(bx, by, 0, -1)];

        let four = T::constant(4.0);
        let seam = |sum: T| clamp01((sum / four).sqrt());

        Self {
            right_upper: seam(next.m * next.n + k.m * k.n + k.b * k.d + next.a * next.c),
            right_lower: seam(next.m * next.n + k.o * k.p + k.b * k.d + next.a * next.c),
            left_upper: seam(prev.m * prev.n + k.m * k.n + k.a * k.c + next.a * next.c),
            left_lower: seam(prev.m * prev.n + k.o * k.p + k.a * k.c + next.a * next.c),
            top_left: seam(vprev.m * vprev.o + k.m * k.o + k.a * k.b + vprev.c * vprev.d),
            top_right: seam(vprev.n * vprev.p + k.n * k.p + k.a * k.b + vprev.c * vprev.d),
            bottom_left: seam(vnext.m * vnext.o + k.m * k.o + k.c * k.d + vnext.a * vnext.b),
            bottom_right: seam(vnext.n * vnext.p + k.n * k.p + k.c * k.d + vnext.a * vnext.b),
        }
    }

    /// Writes the edge cells into a band of 4 rows. `x` is the block's first column.
    fn write(&self, band: &mut [T], width: usize, x: usize) {
        let mut set = |dx: usize, dy: usize, v: T| band[dy * width + x + dx] = v;
        set(1, 0, self.top_left);
        set(2, 0, self.top_right);
        set(1, 3, self.bottom_left);
        set(2, 3, self.bottom_right);
        set(3, 1, self.right_upper);
        set(3, 2, self.right_lower);
        set(0, 1, self.left_upper);
        set(0, 2, self.left_lower);
    }
}

/// Fills the 8 edge cells of every block in `grid`.
pub fn stitch_edges<T: Sample>(grid: &mut NoiseGrid<T>) {
    let layout = grid.layout();
    let filled = &*grid;
    let knots: Vec<Knots<T>> = (0..layout.count())
        .into_par_iter()
        .map(|i| Knots::read(filled, i % layout.blocks_x(), i / layout.blocks_x()))
        .collect();

    let width = grid.width();
    grid.as_mut_slice()
        .par_chunks_mut(width * BLOCK_SIZE)
        .enumerate()
        .for_each(|(by, band)| {
            for bx in 0..layout.blocks_x() {
                Edges::compute(&knots, layout, bx, by).write(band, width, bx * BLOCK_SIZE);
            }
        });
}

#[cfg(test)]
mod tests {
    use super::*;
    use npad_utils::random::Mt19937;

    use crate::fill::BlockFiller;

    fn seam(sum: f64) -> f64 {
        (sum / 4.0).sqrt().clamp(0.0, 1.0)
    }

    #[test]
    fn knots_are_left_alone() {
        let mut grid = NoiseGrid::<f64>::new(8, 8).unwrap();
        BlockFiller::new(0.5).fill(&mut grid, &mut Mt19937::new(11));
        let before = grid.clone();
        stitch_edges(&mut grid);

        for (bx, by) in [(0, 0), (1, 0), (0, 1), (1, 1)] {
            assert_eq!(Knots::read(&before, bx, by), Knots::read(&grid, bx, by));
        }
    }

    #[test]
    #[allow(clippy::float_cmp, reason = "same formula on the same inputs")]
    fn horizontal_edges_read_wrapped_neighbors() {
        let mut grid = NoiseGrid::<f64>::new(8, 4).unwrap();
        BlockFiller::new(0.5).fill(&mut grid, &mut Mt19937::new(5));
        stitch_edges(&mut grid);

        let left = Knots::read(&grid, 0, 0);
        let right = Knots::read(&grid, 1, 0);

        // block 1 wraps rightwards onto block 0
        let expected =
            seam(left.m * left.n + right.m * right.n + right.b * right.d + left.a * left.c);
        assert_eq!(grid[(7, 1)], expected);

        let expected =
            seam(left.m * left.n + right.o * right.p + right.b * right.d + left.a * left.c);
        assert_eq!(grid[(7, 2)], expected);

        // block 0 wraps leftwards onto block 1, its next block is block 1 as well
        let expected =
            seam(right.m * right.n + left.m * left.n + left.a * left.c + right.a * right.c);
        assert_eq!(grid[(0, 1)], expected);

        let expected =
            seam(right.m * right.n + left.o * left.p + left.a * left.c + right.a * right.c);
        assert_eq!(grid[(0, 2)], expected);
    }

    #[test]
    #[allow(clippy::float_cmp, reason = "same formula on the same inputs")]
    fn top_and_bottom_edges_read_wrapped_neighbors() {
        let mut grid = NoiseGrid::<f64>::new(4, 12).unwrap();
        BlockFiller::new(0.3).fill(&mut grid, &mut Mt19937::new(8));
        stitch_edges(&mut grid);

        let top = Knots::read(&grid, 0, 0);
        let middle = Knots::read(&grid, 0, 1);
        let bottom = Knots::read(&grid, 0, 2);

        // block 0 wraps upwards onto block 2
        let expected =
            seam(bottom.m * bottom.o + top.m * top.o + top.a * top.b + bottom.c * bottom.d);
        assert_eq!(grid[(1, 0)], expected);

        // block 2 wraps downwards onto block 0
        let expected =
            seam(top.n * top.p + bottom.n * bottom.p + bottom.c * bottom.d + top.a * top.b);
        assert_eq!(grid[(2, 11)], expected);

        let expected =
            seam(top.n * top.p + middle.n * middle.p + middle.a * middle.b + top.c * top.d);
        assert_eq!(grid[(2, 4)], expected);
    }

    #[test]
    fn edges_stay_in_unit_range() {
        let mut grid = NoiseGrid::<f32>::new(16, 8).unwrap();
        BlockFiller::new(1.0).fill(&mut grid, &mut Mt19937::new(21));
        stitch_edges(&mut grid);
        assert!(grid.as_slice().iter().all(|v| (0.0..=1.0).contains(v)));
    }
}
