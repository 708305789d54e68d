//! Math utilities for noise generation.

use std::fmt::Debug;

use num_traits::{Float, FloatConst};

/// Floating point precision a noise grid can be generated in.
///
/// Implemented for `f32` and `f64`. All generation code is written once against
/// this trait so both precisions follow the exact same formulas.
pub trait Sample: Float + FloatConst + Default + Debug + Send + Sync + 'static {
    /// Converts an `f64` literal into this precision.
    fn constant(v: f64) -> Self;

    /// Floors the value and converts it to a signed index.
    fn floor_index(self) -> isize;

    /// Maps a raw 32-bit generator output onto `[0, 1]`.
    ///
    /// `f32` keeps only the upper 16 bits so the quotient stays exact in single
    /// precision.
    fn from_u32_unit(bits: u32) -> Self;
}

impl Sample for f32 {
    #[inline]
    fn constant(v: f64) -> Self {
        v as f32
    }

    #[inline]
    fn floor_index(self) -> isize {
        self.floor() as isize
    }

    #[inline]
    fn from_u32_unit(bits: u32) -> Self {
        f32::from((bits >> 16) as u16) / f32::from(u16::MAX)
    }
}

impl Sample for f64 {
    #[inline]
    fn constant(v: f64) -> Self {
        v
    }

    #[inline]
    fn floor_index(self) -> isize {
        self.floor() as isize
    }

    #[inline]
    fn from_u32_unit(bits: u32) -> Self {
        f64::from(bits) / f64::from(u32::MAX)
    }
}

/// Wraps `index` onto a torus of size `extent`.
///
/// Used for block neighbours as well as for sample coordinates, so `-1` maps to
/// `extent - 1` and `extent` maps back to `0`.
#[inline]
#[must_use]
pub const fn wrap(index: isize, extent: usize) -> usize {
    index.rem_euclid(extent as isize) as usize
}

/// Clamps `v` into `[0, 1]`.
///
/// NaN is passed through untouched.
#[inline]
#[must_use]
pub fn clamp01<T: Sample>(v: T) -> T {
    if v < T::zero() {
        T::zero()
    } else if v > T::one() {
        T::one()
    } else {
        v
    }
}

/// Cosine easing curve.
///
/// Formula: (1 - cos(t * pi)) / 2
#[inline]
#[must_use]
pub fn cos_ease<T: Sample>(t: T) -> T {
    (T::one() - (t * T::PI()).cos()) * T::constant(0.5)
}

/// Cosine interpolation between `a` and `b`.
#[inline]
#[must_use]
pub fn cos_lerp<T: Sample>(a: T, b: T, t: T) -> T {
    let x = cos_ease(t);
    a * (T::one() - x) + b * x
}

/// Bicosine interpolation between 4 values laid out as
///
/// ```text
/// c00 c01
/// c10 c11
/// ```
///
/// Interpolates along x first, then along y.
#[inline]
#[must_use]
pub fn cos_bilerp<T: Sample>(c00: T, c01: T, c10: T, c11: T, x: T, y: T) -> T {
    cos_lerp(cos_lerp(c00, c01, x), cos_lerp(c10, c11, x), y)
}
