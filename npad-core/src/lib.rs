//! Tileable block noise.
//!
//! Grids are built from 4x4 blocks in two passes:
//!
//! 1. [`BlockFiller`] draws the four corners of every block and derives the four
//!    interior midpoints from them plus random jitter.
//! 2. [`stitch_edges`] fills the remaining perimeter cells from the knots of the
//!    block and its neighbours, wrapping around the grid edges, so opposite
//!    edges of the result line up without seams.
//!
//! [`generate_octaves`] layers grids of decreasing resolution on top of each
//! other with cosine interpolation.

pub mod block;
pub mod error;
pub mod fill;
pub mod generator;
pub mod grid;
pub mod octave;
pub mod stitch;

pub use block::{BLOCK_SIZE, BlockLayout, Knots};
pub use error::NoiseError;
pub use fill::BlockFiller;
pub use generator::{DEFAULT_ROUGHNESS, fill, generate, generate_with};
pub use grid::NoiseGrid;
pub use octave::{generate_octaves, generate_octaves_with};
pub use stitch::{Edges, stitch_edges};
