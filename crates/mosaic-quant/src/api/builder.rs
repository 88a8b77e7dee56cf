//! Mosaicker builder -- the primary entry point for the crate.
//!
//! [`Mosaicker`] wraps template generation, the availability check and the
//! quantization pass behind a small fluent API.

use crate::catalog::ColorCatalog;
use crate::output::QuantizedMosaic;
use crate::quantize::ErrorDiffusingQuantizer;
use crate::raster::LabImage;
use crate::template::TileTemplate;

use super::MosaicError;

/// High-level mosaic builder.
///
/// - Constructor requires a [`ColorCatalog`] (no invalid states)
/// - Configuration methods consume and return `self`
/// - [`mosaic()`](Self::mosaic) takes `&self`, so one builder serves any
///   number of passes
///
/// # Example
///
/// ```
/// use mosaic_quant::{Availability, ColorCatalog, LabImage, Mosaicker, Swatch};
///
/// let catalog = ColorCatalog::new(vec![
///     Swatch::new("26", "Black", [5, 19, 29], Availability::ALL),
///     Swatch::new("1", "White", [242, 243, 242], Availability::ALL),
/// ])
/// .unwrap();
///
/// let mosaicker = Mosaicker::new(catalog).tiles_long_side(4);
/// let mut image = LabImage::from_srgb_bytes(8, 4, &[200; 8 * 4 * 3]).unwrap();
/// let mosaic = mosaicker.mosaic(&mut image).unwrap();
///
/// assert_eq!((mosaic.rows(), mosaic.cols()), (2, 4));
/// ```
#[derive(Debug, Clone)]
pub struct Mosaicker {
    catalog: ColorCatalog,
    tiles_long_side: u32,
    luminance_weight: f32,
}

impl Mosaicker {
    /// Tiles along the long side unless configured.
    pub const DEFAULT_TILES: u32 = 48;

    /// Create a builder with 48 tiles on the long side and a luminance
    /// weight of 1.0.
    pub fn new(catalog: ColorCatalog) -> Self {
        Self {
            catalog,
            tiles_long_side: Self::DEFAULT_TILES,
            luminance_weight: 1.0,
        }
    }

    /// Set the number of tiles along the image's long side.
    #[inline]
    pub fn tiles_long_side(mut self, tiles: u32) -> Self {
        self.tiles_long_side = tiles;
        self
    }

    /// Set the weight of the lightness term in color matching.
    #[inline]
    pub fn luminance_weight(mut self, weight: f32) -> Self {
        self.luminance_weight = weight;
        self
    }

    pub fn catalog(&self) -> &ColorCatalog {
        &self.catalog
    }

    /// The template a pass over an image with this long side would use.
    pub fn template(&self, long_side: u32) -> Result<TileTemplate, MosaicError> {
        Ok(TileTemplate::new(self.tiles_long_side, long_side)?)
    }

    /// Quantize `image` in place and return the chosen swatches.
    ///
    /// Pipeline:
    /// 1. Build the template for the image's long side
    /// 2. Check that the catalog covers every shape the template uses
    /// 3. Run one full error-diffusion pass
    ///
    /// `image` is only modified if every step succeeds.
    pub fn mosaic(&self, image: &mut LabImage) -> Result<QuantizedMosaic, MosaicError> {
        let template = self.template(image.long_side())?;
        self.catalog
            .ensure_available(&TileTemplate::required_shapes())?;

        let quantizer =
            ErrorDiffusingQuantizer::new(&self.catalog, &template, self.luminance_weight);
        Ok(quantizer.quantize(image)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Availability, CatalogError, ShapeCategory, Swatch};
    use crate::color::Oklab;
    use crate::template::TemplateError;

    fn catalog() -> ColorCatalog {
        ColorCatalog::new(vec![
            Swatch::new("0", "Black", [0, 0, 0], Availability::ALL),
            Swatch::new("1", "White", [255, 255, 255], Availability::ALL),
        ])
        .unwrap()
    }

    #[test]
    fn test_builder_reusable() {
        let m = Mosaicker::new(catalog()).tiles_long_side(5);
        let mut a = LabImage::filled(50, 30, Oklab::new(0.4, 0.0, 0.0));
        let mut b = LabImage::filled(30, 50, Oklab::new(0.4, 0.0, 0.0));
        let ma = m.mosaic(&mut a).unwrap();
        let mb = m.mosaic(&mut b).unwrap();
        assert_eq!((ma.rows(), ma.cols()), (3, 5));
        assert_eq!((mb.rows(), mb.cols()), (5, 3));
    }

    #[test]
    fn test_too_many_tiles() {
        let m = Mosaicker::new(catalog()).tiles_long_side(100);
        let mut image = LabImage::filled(40, 20, Oklab::ZERO);
        assert_eq!(
            m.mosaic(&mut image).unwrap_err(),
            MosaicError::Template(TemplateError::TileTooSmall {
                tiles: 100,
                long_side: 40
            })
        );
    }

    #[test]
    fn test_missing_shape_is_reported_before_the_pass() {
        let catalog = ColorCatalog::new(vec![Swatch::new(
            "0",
            "Black",
            [0, 0, 0],
            Availability::new([true, true, false, true]),
        )])
        .unwrap();
        let mut image = LabImage::filled(40, 40, Oklab::ZERO);
        let err = Mosaicker::new(catalog)
            .tiles_long_side(4)
            .mosaic(&mut image)
            .unwrap_err();
        assert_eq!(
            err,
            MosaicError::Catalog(CatalogError::NoEligibleSwatch {
                shape: ShapeCategory::RoundSmall
            })
        );
    }
}
