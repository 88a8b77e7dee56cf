//! The fixed tile template: which pixel of a tile belongs to which cell,
//! and which physical shape each cell is built from.
//!
//! ```text
//! +---------+---------+
//! |  0  .---+---.  1  |
//! |    /   .-.   \    |
//! +---+   ( 5 )   +---+
//! |    \   '-'   /    |
//! |  2  '---+---'  3  |
//! +---------+---------+
//!   4 = the ring between the two circles
//! ```

mod error;
mod stencil;

pub use error::TemplateError;
pub use stencil::{TileTemplate, CELL_COUNT, CELL_SHAPES};
