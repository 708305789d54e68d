//! Plain (ASCII) PGM output.

use std::io::{self, Write};

use npad_core::NoiseGrid;
use npad_utils::Sample;

/// Maximum gray value written to the header.
pub const MAX_GRAY: u8 = 255;

/// Quantizes a `[0, 1]` sample to 8 bits, rounding half up.
#[must_use]
pub fn to_gray(v: f64) -> u8 {
    (v * f64::from(MAX_GRAY) + 0.5)
        .floor()
        .clamp(0.0, f64::from(MAX_GRAY)) as u8
}

/// Writes `grid` as a P2 image.
///
/// Every row starts on a new line and every sample is followed by a single
/// space. No newline is written after the last row.
pub fn write_pgm<T: Sample, W: Write>(out: &mut W, grid: &NoiseGrid<T>) -> io::Result<()> {
    write!(out, "P2\n{} {}\n{MAX_GRAY}", grid.width(), grid.height())?;
    for row in grid.rows() {
        writeln!(out)?;
        for v in row {
            write!(out, "{} ", to_gray(v.to_f64().unwrap_or_default()))?;
        }
    }
    Ok(())
}
