use std::fmt;

use crate::catalog::CatalogError;

/// Error type for a quantization pass.
#[derive(Debug, Clone, PartialEq)]
pub enum QuantizeError {
    /// The catalog could not supply a color for a cell.
    Catalog {
        /// Tile row
        row: usize,
        /// Tile column
        col: usize,
        /// Cell inside the tile
        cell: usize,
        /// The failed lookup
        source: CatalogError,
    },
}

impl fmt::Display for QuantizeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuantizeError::Catalog {
                row,
                col,
                cell,
                source,
            } => write!(f, "tile ({}, {}) cell {}: {}", row, col, cell, source),
        }
    }
}

impl std::error::Error for QuantizeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            QuantizeError::Catalog { source, .. } => Some(source),
        }
    }
}
