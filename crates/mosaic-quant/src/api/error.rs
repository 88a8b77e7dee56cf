//! Unified error type for the mosaic-quant public API.
//!
//! [`MosaicError`] wraps every error type of the crate into a single enum
//! for convenient `?` propagation in application code.

use std::fmt;

use crate::catalog::CatalogError;
use crate::quantize::QuantizeError;
use crate::template::TemplateError;

/// Unified error type for the mosaic-quant public API.
///
/// # Example
///
/// ```
/// use mosaic_quant::{ColorCatalog, MosaicError};
///
/// fn empty() -> Result<ColorCatalog, MosaicError> {
///     Ok(ColorCatalog::new(Vec::new())?)
/// }
/// assert!(matches!(empty(), Err(MosaicError::Catalog(_))));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum MosaicError {
    /// Catalog is empty or lacks a shape the template needs
    Catalog(CatalogError),
    /// Tile count does not fit the image
    Template(TemplateError),
    /// A quantization pass was aborted
    Quantize(QuantizeError),
}

impl fmt::Display for MosaicError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MosaicError::Catalog(err) => write!(f, "catalog error: {}", err),
            MosaicError::Template(err) => write!(f, "template error: {}", err),
            MosaicError::Quantize(err) => write!(f, "quantization error: {}", err),
        }
    }
}

impl std::error::Error for MosaicError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            MosaicError::Catalog(err) => Some(err),
            MosaicError::Template(err) => Some(err),
            MosaicError::Quantize(err) => Some(err),
        }
    }
}

impl From<CatalogError> for MosaicError {
    fn from(err: CatalogError) -> Self {
        MosaicError::Catalog(err)
    }
}

impl From<TemplateError> for MosaicError {
    fn from(err: TemplateError) -> Self {
        MosaicError::Template(err)
    }
}

impl From<QuantizeError> for MosaicError {
    fn from(err: QuantizeError) -> Self {
        MosaicError::Quantize(err)
    }
}
