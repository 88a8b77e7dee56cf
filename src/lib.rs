//! Brickmosaic - turn photographs into buildable tile mosaics
//!
//! File handling, configuration and exports around the `mosaic-quant`
//! quantizer. This library exposes modules for integration testing.

pub mod error;
pub mod export;
pub mod models;
pub mod rendering;
pub mod services;
