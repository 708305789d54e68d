//! Phase 1: corner seeding and jittered midpoints.
//!
//! Every block draws its four corners straight from the random source and
//! derives each interior midpoint from the three corners nearest to it:
//!
//! ```text
//! c1 ---- c2        m = (c1 + c2 + c3) / 3 + jitter
//! |  m  n |         n = (c1 + c2 + c4) / 3 + jitter
//! |  o  p |         o = (c1 + c3 + c4) / 3 + jitter
//! c3 ---- c4        p = (c2 + c3 + c4) / 3 + jitter
//! ```
//!
//! with `jitter = (2 * r - 1) * roughness` drawn fresh for every midpoint.
//! Corners are stored raw, midpoints are clamped to `[0, 1]`.

use std::array;

use npad_utils::RandomSource;
use npad_utils::Sample;
use npad_utils::math::clamp01;
use rayon::prelude::*;

use crate::block::BLOCK_SIZE;
use crate::grid::NoiseGrid;

/// Samples drawn for one block, in draw order: `c1 c2 c3 c4` followed by the
/// jitter samples for `m n o p`.
type BlockDraws<T> = [T; 8];

/// Fills the corners and interior midpoints of every block.
#[derive(Debug, Clone, Copy)]
pub struct BlockFiller<T> {
    roughness: T,
}

impl<T: Sample> BlockFiller<T> {
    /// Creates a filler with the given jitter scale.
    #[must_use]
    pub const fn new(roughness: T) -> Self {
        Self { roughness }
    }

    /// Writes the 8 knot cells of every block in `grid`. Edge cells are left
    /// untouched.
    ///
    /// All samples are drawn up front in row-major block order, 8 per block, so
    /// the result only depends on the sample sequence and never on how the
    /// blocks are scheduled afterwards.
    pub fn fill<R>(&self, grid: &mut NoiseGrid<T>, rng: &mut R)
    where
        R: RandomSource<T> + ?Sized,
    {
        let layout = grid.layout();
        let draws: Vec<BlockDraws<T>> = (0..layout.count())
            .map(|_| Self::draw_block(&mut *rng))
            .collect();

        let width = grid.width();
        grid.as_mut_slice()
            .par_chunks_mut(width * BLOCK_SIZE)
            .zip(draws.par_chunks(layout.blocks_x()))
            .for_each(|(band, row)| {
                for (bx, block) in row.iter().enumerate() {
                    self.write_block(band, width, bx * BLOCK_SIZE, block);
                }
            });
    }

    fn draw_block<R>(rng: &mut R) -> BlockDraws<T>
    where
        R: RandomSource<T> + ?Sized,
    {
        array::from_fn(|_| {
            let sample: T = rng.next_sample();
            debug_assert!(sample.is_finite(), "random source yielded {sample:?}");
            sample
        })
    }

    /// Writes one block into a band of 4 rows. `x` is the block's first column.
    fn write_block(&self, band: &mut [T], width: usize, x: usize, draws: &BlockDraws<T>) {
        let [c1, c2, c3, c4, jm, jn, jo, jp] = *draws;
        let three = T::constant(3.0);

        let mut set = |dx: usize, dy: usize, v: T| band[dy * width + x + dx] = v;
        set(1, 1, clamp01((c1 + c2 + c3) / three + self.jitter(jm)));
        set(2, 1, clamp01((c1 + c2 + c4) / three + self.jitter(jn)));
        set(1, 2, clamp01((c1 + c3 + c4) / three + self.jitter(jo)));
        set(2, 2, clamp01((c2 + c3 + c4) / three + self.jitter(jp)));
        set(0, 0, c1);
        set(3, 0, c2);
        set(0, 3, c3);
        set(3, 3, c4);
    }

    #[inline]
    fn jitter(&self, r: T) -> T {
        (r * T::constant(2.0) - T::one()) * self.roughness
    }
}
