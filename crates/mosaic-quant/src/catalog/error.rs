//! Error type for catalog construction and lookup.

use std::fmt;

use super::shape::ShapeCategory;

/// Error type for catalog operations.
///
/// Both variants are configuration errors: a pass cannot produce a
/// buildable mosaic from such a catalog, so they are never papered over
/// with a fallback color.
#[derive(Debug, Clone, PartialEq)]
pub enum CatalogError {
    /// No swatches at all.
    EmptyCatalog,
    /// No swatch is available in the requested shape.
    NoEligibleSwatch {
        /// The shape that was asked for
        shape: ShapeCategory,
    },
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::EmptyCatalog => write!(f, "color catalog cannot be empty"),
            CatalogError::NoEligibleSwatch { shape } => {
                write!(f, "no catalog color is available as {}", shape)
            }
        }
    }
}

impl std::error::Error for CatalogError {}
