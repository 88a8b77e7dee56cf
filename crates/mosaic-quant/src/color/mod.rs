//! Color types and the conversion into the perceptual space.
//!
//! Swatches and image pixels enter as 8-bit [`Srgb`], are gamma-decoded to
//! [`LinearRgb`] and end up in [`Oklab`], where nearest-color matching and
//! all error diffusion happen. Writing a mosaic back out reverses the chain.
//!
//! ```
//! use mosaic_quant::Oklab;
//!
//! let white = Oklab::from_srgb_bytes([255, 255, 255]);
//! assert!((white.l - 1.0).abs() < 1e-3);
//! assert_eq!(white.to_srgb_bytes(), [255, 255, 255]);
//! ```

mod gamma;
mod oklab;
mod rgb;

pub use oklab::Oklab;
pub use rgb::{LinearRgb, Srgb};
