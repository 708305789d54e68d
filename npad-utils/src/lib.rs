//! Numeric building blocks shared by the NPad noise crates.
//!
//! - [`math`] - the [`Sample`](math::Sample) precision abstraction, toroidal
//!   index wrapping, clamping and cosine interpolation
//! - [`random`] - the [`RandomSource`](random::RandomSource) capability and its
//!   implementations

pub mod math;
pub mod random;

pub use math::{Sample, wrap};
pub use random::RandomSource;
