//! Single resolution noise generation.

use std::time::Instant;

use npad_utils::random::Mt19937;
use npad_utils::{RandomSource, Sample};

use crate::error::NoiseError;
use crate::fill::BlockFiller;
use crate::grid::NoiseGrid;
use crate::stitch::stitch_edges;

/// Roughness used when the caller does not pick one.
pub const DEFAULT_ROUGHNESS: f64 = 0.5;

/// Fills a caller-owned grid with tileable noise.
///
/// Runs the block filler over the whole grid, then stitches the edges. Every
/// cell of `grid` is overwritten.
pub fn fill<T, R>(grid: &mut NoiseGrid<T>, roughness: T, rng: &mut R)
where
    T: Sample,
    R: RandomSource<T> + ?Sized,
{
    let start = Instant::now();
    BlockFiller::new(roughness).fill(grid, rng);
    stitch_edges(grid);
    log::trace!(
        "Filled {}x{} noise grid in {:?}",
        grid.width(),
        grid.height(),
        start.elapsed()
    );
}

/// Generates a `width` x `height` grid drawing samples from `rng`.
pub fn generate_with<T, R>(
    width: usize,
    height: usize,
    roughness: T,
    rng: &mut R,
) -> Result<NoiseGrid<T>, NoiseError>
where
    T: Sample,
    R: RandomSource<T> + ?Sized,
{
    let mut grid = NoiseGrid::new(width, height)?;
    fill(&mut grid, roughness, rng);
    Ok(grid)
}

/// Generates a `width` x `height` grid from a clock-seeded [`Mt19937`].
pub fn generate<T: Sample>(
    width: usize,
    height: usize,
    roughness: T,
) -> Result<NoiseGrid<T>, NoiseError> {
    generate_with(width, height, roughness, &mut Mt19937::from_clock())
}
