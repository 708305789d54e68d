//! Multi-octave composition.
//!
//! The base grid is blended with independently generated grids at half, quarter,
//! ... resolution. Octave `i` is stretched over the base grid with toroidal
//! bicosine sampling and mixed in with weight `2^-i`:
//!
//! ```text
//! acc = (acc + sample * w) / (1 + w)
//! ```
//!
//! The accumulator is renormalized after every octave, so later octaves also
//! scale down the contribution of earlier ones.

use std::time::Instant;

use npad_utils::math::cos_bilerp;
use npad_utils::random::Mt19937;
use npad_utils::{RandomSource, Sample, wrap};
use rayon::prelude::*;

use crate::block::BLOCK_SIZE;
use crate::error::NoiseError;
use crate::generator::generate_with;
use crate::grid::NoiseGrid;

/// Resolutions blended on top of a `width` x `height` base grid, as
/// `(octave, width, height)` starting at octave 1.
///
/// Stops once either halved dimension drops below 4, or is no longer a multiple
/// of 4.
pub fn octave_dimensions(width: usize, height: usize) -> impl Iterator<Item = (u32, usize, usize)> {
    (1..usize::BITS)
        .map(move |octave| (octave, width >> octave, height >> octave))
        .take_while(|&(_, w, h)| {
            w >= BLOCK_SIZE && h >= BLOCK_SIZE && w % BLOCK_SIZE == 0 && h % BLOCK_SIZE == 0
        })
}

/// Weight of octave `octave`: `2^-octave`.
#[must_use]
pub fn octave_weight<T: Sample>(octave: u32) -> T {
    T::constant(2.0_f64.powi(-(octave as i32)))
}

/// Samples `grid` at a fractional position, wrapping on both axes.
///
/// Interpolates between the floor cell and the rounded cell on each axis, so
/// for fractions below one half both taps land on the same cell.
#[must_use]
pub fn sample_wrapped<T: Sample>(grid: &NoiseGrid<T>, x: T, y: T) -> T {
    let (w, h) = (grid.width(), grid.height());
    let half = T::constant(0.5);

    let fx = x % T::one();
    let fy = y % T::one();
    let cx = wrap(x.floor_index(), w);
    let cy = wrap(y.floor_index(), h);
    let nx = wrap((x + half).floor_index(), w);
    let ny = wrap((y + half).floor_index(), h);

    cos_bilerp(
        grid[(cx, cy)],
        grid[(nx, cy)],
        grid[(cx, ny)],
        grid[(nx, ny)],
        fx,
        fy,
    )
}

/// Blends `halved` into `acc` as octave `octave`.
pub fn blend_octave<T: Sample>(acc: &mut NoiseGrid<T>, halved: &NoiseGrid<T>, octave: u32) {
    let weight: T = octave_weight(octave);
    let width = acc.width();

    acc.as_mut_slice()
        .par_iter_mut()
        .enumerate()
        .for_each(|(i, cell)| {
            let x = T::constant((i % width) as f64) * weight;
            let y = T::constant((i / width) as f64) * weight;
            *cell = (*cell + sample_wrapped(halved, x, y) * weight) / (T::one() + weight);
        });
}

/// Generates multi-octave noise drawing samples from `rng`.
///
/// The base grid is drawn first, followed by one freshly generated grid per
/// octave. Grids smaller than 8 cells on either axis get no octaves at all.
pub fn generate_octaves_with<T, R>(
    width: usize,
    height: usize,
    roughness: T,
    rng: &mut R,
) -> Result<NoiseGrid<T>, NoiseError>
where
    T: Sample,
    R: RandomSource<T> + ?Sized,
{
    let start = Instant::now();
    let mut acc = generate_with(width, height, roughness, rng)?;

    let mut passes = 0;
    for (octave, hw, hh) in octave_dimensions(width, height) {
        let halved = generate_with(hw, hh, roughness, rng)?;
        blend_octave(&mut acc, &halved, octave);
        passes += 1;
    }

    log::debug!(
        "Generated {width}x{height} noise with {passes} octave passes in {:?}",
        start.elapsed()
    );
    Ok(acc)
}

/// Generates multi-octave noise from a clock-seeded [`Mt19937`].
pub fn generate_octaves<T: Sample>(
    width: usize,
    height: usize,
    roughness: T,
) -> Result<NoiseGrid<T>, NoiseError> {
    generate_octaves_with(width, height, roughness, &mut Mt19937::from_clock())
}
