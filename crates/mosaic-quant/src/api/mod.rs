//! Public API for the mosaic-quant crate.
//!
//! This module provides the high-level API: the [`Mosaicker`] builder and
//! the [`MosaicError`] unified error type.

mod builder;
mod error;

pub use builder::Mosaicker;
pub use error::MosaicError;
