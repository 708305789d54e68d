//! Uniform random sample sources.
//!
//! The generators only ever ask for "the next sample in `[0, 1)`". Everything that
//! can answer that question implements [`RandomSource`]:
//!
//! - [`Mt19937`] - 32-bit Mersenne Twister, seeded explicitly or from the clock
//! - [`ScriptedSource`] - replays a fixed list of samples
//! - [`RngSource`] - adapter over any [`rand::RngCore`] generator
//! - any `FnMut() -> T` closure

pub mod mt19937;
pub mod scripted;

pub use mt19937::Mt19937;
pub use scripted::ScriptedSource;

use rand::RngCore;

use crate::math::Sample;

/// A capability producing uniformly distributed samples in `[0, 1)`.
///
/// Every call advances the underlying generator. The exact upper bound is not
/// load-bearing, generated values are clamped downstream.
pub trait RandomSource<T> {
    /// Draws the next sample.
    fn next_sample(&mut self) -> T;
}

impl<T, F> RandomSource<T> for F
where
    F: FnMut() -> T,
{
    #[inline]
    fn next_sample(&mut self) -> T {
        self()
    }
}

/// Adapts a [`rand`] generator into a [`RandomSource`].
#[derive(Debug, Clone)]
pub struct RngSource<R> {
    rng: R,
}

impl<R: RngCore> RngSource<R> {
    /// Wraps `rng`.
    #[must_use]
    pub const fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Returns the wrapped generator.
    #[must_use]
    pub fn into_inner(self) -> R {
        self.rng
    }
}

impl<T: Sample, R: RngCore> RandomSource<T> for RngSource<R> {
    #[inline]
    fn next_sample(&mut self) -> T {
        T::from_u32_unit(self.rng.next_u32())
    }
}
