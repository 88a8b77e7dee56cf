//! Constrained-palette error diffusion over the tile grid.
//!
//! [`ErrorDiffusingQuantizer`] walks tiles in raster order. For each tile it
//! quantizes the six cells in the order given by [`SCHEDULE`], asking the
//! catalog for the nearest swatch available in the cell's shape, and spreads
//! each residual through [`DiffusionState`] to later cells of the same tile,
//! the tile to the right, and the row below.
//!
//! The schedule is data; the propagation code in [`DiffusionState`] knows
//! nothing about individual cells and can be tested on its own.

mod error;
mod kernel;
mod quantizer;
mod state;

pub use error::QuantizeError;
pub use kernel::{Destination, Step, DIVISOR, SCHEDULE};
pub use quantizer::ErrorDiffusingQuantizer;
pub use state::DiffusionState;
