//! Output of a quantization pass.
//!
//! [`QuantizedMosaic`] is the canonical result: one catalog index per cell
//! per tile. Pixel output is produced by painting it back over a
//! [`LabImage`](crate::LabImage); build files and part lists are derived
//! from the indices by the caller.

mod quantized_mosaic;

pub use quantized_mosaic::QuantizedMosaic;
