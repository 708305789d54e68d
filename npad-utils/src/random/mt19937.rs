//! 32-bit Mersenne Twister (MT19937).
//!
//! Produces the same sequence as the standard `mt19937` engine for a given seed,
//! so seeded runs are reproducible across implementations.

use std::fmt;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::math::Sample;
use crate::random::RandomSource;

const N: usize = 624;
const M: usize = 397;
const MATRIX_A: u32 = 0x9908_B0DF;
const UPPER_MASK: u32 = 0x8000_0000;
const LOWER_MASK: u32 = 0x7FFF_FFFF;

/// Seed used by [`Mt19937::default`].
pub const DEFAULT_SEED: u32 = 5489;

/// Mersenne Twister generator with a 624-word state.
#[derive(Clone)]
pub struct Mt19937 {
    state: Box<[u32; N]>,
    index: usize,
}

impl Mt19937 {
    /// Creates a generator from a 32-bit seed.
    #[must_use]
    pub fn new(seed: u32) -> Self {
        let mut state = Box::new([0u32; N]);
        state[0] = seed;
        for i in 1..N {
            let prev = state[i - 1];
            state[i] = 1_812_433_253u32
                .wrapping_mul(prev ^ (prev >> 30))
                .wrapping_add(i as u32);
        }
        Self { state, index: N }
    }

    /// Creates a generator seeded from the wall clock.
    ///
    /// The nanosecond count since the Unix epoch is truncated to 32 bits.
    #[must_use]
    pub fn from_clock() -> Self {
        let seed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_or(DEFAULT_SEED, |elapsed| elapsed.as_nanos() as u32);
        Self::new(seed)
    }

    /// Returns the next raw 32-bit output.
    pub fn next_u32(&mut self) -> u32 {
        if self.index >= N {
            self.twist();
        }

        let mut y = self.state[self.index];
        self.index += 1;

        // Tempering
        y ^= y >> 11;
        y ^= (y << 7) & 0x9D2C_5680;
        y ^= (y << 15) & 0xEFC6_0000;
        y ^ (y >> 18)
    }

    /// Discards `count` outputs.
    pub fn discard(&mut self, count: usize) {
        for _ in 0..count {
            self.next_u32();
        }
    }

    fn twist(&mut self) {
        for i in 0..N {
            let y = (self.state[i] & UPPER_MASK) | (self.state[(i + 1) % N] & LOWER_MASK);
            let mut next = self.state[(i + M) % N] ^ (y >> 1);
            if y & 1 != 0 {
                next ^= MATRIX_A;
            }
            self.state[i] = next;
        }
        self.index = 0;
    }
}

impl Default for Mt19937 {
    fn default() -> Self {
        Self::new(DEFAULT_SEED)
    }
}

impl fmt::Debug for Mt19937 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Mt19937")
            .field("index", &self.index)
            .finish_non_exhaustive()
    }
}

impl<T: Sample> RandomSource<T> for Mt19937 {
    #[inline]
    fn next_sample(&mut self) -> T {
        T::from_u32_unit(self.next_u32())
    }
}
