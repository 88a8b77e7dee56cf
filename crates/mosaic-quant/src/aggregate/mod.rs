//! Per-tile, per-cell color averaging.

mod aggregator;
mod grid;

pub use aggregator::{CellAverages, TileAggregator};
pub use grid::TileGrid;
