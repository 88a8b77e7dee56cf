#![allow(
    clippy::excessive_precision,
    clippy::needless_range_loop,
    clippy::module_inception
)]

//! mosaic-quant: constrained-palette error diffusion for tile mosaics
//!
//! This library turns an image into a grid of tiles, each built from six
//! physical pieces of different shapes, choosing every piece's color from a
//! catalog in which not every color exists in every shape.
//!
//! # Quick Start
//!
//! The [`Mosaicker`] builder is the primary entry point:
//!
//! ```
//! use mosaic_quant::{Availability, ColorCatalog, LabImage, Mosaicker, ShapeCategory, Swatch};
//!
//! let catalog = ColorCatalog::new(vec![
//!     Swatch::new("26", "Black", [5, 19, 29], Availability::ALL),
//!     Swatch::new("1", "White", [242, 243, 242], Availability::ALL),
//!     Swatch::new("21", "Red", [201, 26, 9], Availability::only(ShapeCategory::Tile)),
//! ])
//! .unwrap();
//!
//! let mut image = LabImage::from_srgb_bytes(20, 10, &[180; 20 * 10 * 3]).unwrap();
//! let mosaic = Mosaicker::new(catalog)
//!     .tiles_long_side(2)
//!     .mosaic(&mut image)
//!     .unwrap();
//!
//! assert_eq!((mosaic.rows(), mosaic.cols()), (1, 2));
//! ```
//!
//! # The Tile
//!
//! Every tile is split by a fixed [`TileTemplate`] into four quadrants, a
//! ring and a center:
//!
//! | Cell | Region | Shape |
//! |------|--------|-------|
//! | 0 | top-left quadrant | [`ShapeCategory::Tile`] |
//! | 1 | top-right quadrant | [`ShapeCategory::Tile`] |
//! | 2 | bottom-left quadrant | [`ShapeCategory::Tile`] |
//! | 3 | bottom-right quadrant | [`ShapeCategory::Tile`] |
//! | 4 | inscribed circle | [`ShapeCategory::RoundLarge`] |
//! | 5 | small center circle | [`ShapeCategory::RoundSmall`] |
//!
//! Each cell is matched against swatches available in its shape only. A
//! swatch that does not exist in a shape is never a candidate, however
//! close its color is.
//!
//! # Color Science
//!
//! Matching and error both live in Oklab. Swatch colors and image pixels go
//! through the same conversion:
//!
//! ```text
//! sRGB bytes
//!     |
//!     v
//! LinearRgb     (gamma decode via LUT)
//!     |
//!     v
//! Oklab         (matching, averaging, error diffusion)
//!     |
//!     v
//! sRGB bytes    (clamped on the way out)
//! ```
//!
//! The distance between two colors is
//!
//! ```text
//! d = w * dL^2 + da^2 + db^2
//! ```
//!
//! where `w` is the luminance weight. `w = 1` is plain squared Euclidean
//! distance; larger values make the search hold on to lightness at the
//! expense of hue, smaller ones the reverse.
//!
//! # Error Diffusion
//!
//! Tiles are visited in raster order. Within a tile the six cells are
//! quantized in the fixed order of [`SCHEDULE`]; each residual is split in
//! sixteenths between later cells of the same tile, the tile to the right
//! and three tiles of the row below. Error addressed left of the first
//! column or right of the last one is dropped.
//!
//! ```text
//!   row r      [ col-1 ][  col  ][ col+1 ]
//!                        own  -->  right
//!                        |  \
//!   row r+1    [ b-left ][ below ][ b-right ]
//! ```

pub mod aggregate;
pub mod api;
pub mod catalog;
pub mod color;
pub mod output;
pub mod quantize;
pub mod raster;
pub mod template;


pub use aggregate::{CellAverages, TileAggregator, TileGrid};
pub use api::{MosaicError, Mosaicker};
pub use catalog::{Availability, CatalogError, ColorCatalog, ShapeCategory, Swatch};
pub use color::{LinearRgb, Oklab, Srgb};
pub use output::QuantizedMosaic;
pub use quantize::{DiffusionState, ErrorDiffusingQuantizer, QuantizeError, SCHEDULE};
pub use raster::LabImage;
pub use template::{TemplateError, TileTemplate, CELL_COUNT, CELL_SHAPES};
