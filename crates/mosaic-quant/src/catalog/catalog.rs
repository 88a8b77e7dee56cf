//! Swatches and the shape-constrained nearest-color search.

use super::error::CatalogError;
use super::shape::{Availability, ShapeCategory};
use crate::color::Oklab;

/// One buildable color.
///
/// The perceptual representation is derived from the source color when the
/// swatch is created and cannot be set independently, so every swatch in a
/// catalog is ready for matching as soon as it exists.
#[derive(Debug, Clone, PartialEq)]
pub struct Swatch {
    id: String,
    name: String,
    rgb: [u8; 3],
    oklab: Oklab,
    availability: Availability,
}

impl Swatch {
    /// Create a swatch from its source sRGB color.
    ///
    /// ```
    /// use mosaic_quant::{Availability, ShapeCategory, Swatch};
    ///
    /// let white = Swatch::new("1", "White", [242, 243, 242], Availability::ALL);
    /// assert!(white.oklab().l > 0.9);
    /// assert!(white.is_available(ShapeCategory::RoundLarge));
    /// ```
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        rgb: [u8; 3],
        availability: Availability,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            rgb,
            oklab: Oklab::from_srgb_bytes(rgb),
            availability,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Source color as 8-bit sRGB.
    pub fn rgb(&self) -> [u8; 3] {
        self.rgb
    }

    /// Perceptual color used for matching and write-back.
    pub fn oklab(&self) -> Oklab {
        self.oklab
    }

    pub fn availability(&self) -> Availability {
        self.availability
    }

    #[inline]
    pub fn is_available(&self, shape: ShapeCategory) -> bool {
        self.availability.allows(shape)
    }
}

/// An ordered, non-empty, read-only set of swatches.
///
/// Lookups hand out indices into the catalog; [`swatch()`](Self::swatch)
/// resolves them. The catalog is never mutated after construction, so a
/// shared reference can serve any number of concurrent queries.
#[derive(Debug, Clone)]
pub struct ColorCatalog {
    swatches: Vec<Swatch>,
}

impl ColorCatalog {
    /// # Errors
    ///
    /// [`CatalogError::EmptyCatalog`] if `swatches` is empty.
    pub fn new(swatches: Vec<Swatch>) -> Result<Self, CatalogError> {
        if swatches.is_empty() {
            return Err(CatalogError::EmptyCatalog);
        }
        Ok(Self { swatches })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.swatches.len()
    }

    /// Always `false`; empty catalogs are rejected by [`new()`](Self::new).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.swatches.is_empty()
    }

    /// # Panics
    ///
    /// Panics if `idx` did not come from this catalog.
    #[inline]
    pub fn swatch(&self, idx: usize) -> &Swatch {
        &self.swatches[idx]
    }

    pub fn swatches(&self) -> &[Swatch] {
        &self.swatches
    }

    /// Number of swatches available in `shape`.
    pub fn eligible_count(&self, shape: ShapeCategory) -> usize {
        self.swatches
            .iter()
            .filter(|s| s.is_available(shape))
            .count()
    }

    /// Fail with the first shape in `shapes` that no swatch is available in.
    pub fn ensure_available(&self, shapes: &[ShapeCategory]) -> Result<(), CatalogError> {
        match shapes.iter().find(|&&s| self.eligible_count(s) == 0) {
            Some(&shape) => Err(CatalogError::NoEligibleSwatch { shape }),
            None => Ok(()),
        }
    }

    /// Find the swatch closest to `target` among those available in `shape`.
    ///
    /// Distance is `w * dL² + da² + db²` with `w = luminance_weight`.
    /// Swatches not available in `shape` are skipped entirely; on a tie the
    /// earlier catalog entry wins.
    ///
    /// Returns `(index, distance)`.
    ///
    /// # Errors
    ///
    /// [`CatalogError::NoEligibleSwatch`] when nothing is available in
    /// `shape`.
    ///
    /// # Example
    ///
    /// ```
    /// use mosaic_quant::{Availability, ColorCatalog, Oklab, ShapeCategory, Swatch};
    ///
    /// let catalog = ColorCatalog::new(vec![
    ///     Swatch::new("26", "Black", [5, 19, 29], Availability::ALL),
    ///     Swatch::new("1", "White", [242, 243, 242], Availability::only(ShapeCategory::Tile)),
    /// ])
    /// .unwrap();
    ///
    /// let light = Oklab::from_srgb_bytes([230, 230, 230]);
    /// // White wins for tiles ...
    /// assert_eq!(catalog.nearest_match(light, ShapeCategory::Tile, 1.0).unwrap().0, 1);
    /// // ... but is not sold as a 2x2 round, so black is the only candidate.
    /// assert_eq!(catalog.nearest_match(light, ShapeCategory::RoundLarge, 1.0).unwrap().0, 0);
    /// ```
    pub fn nearest_match(
        &self,
        target: Oklab,
        shape: ShapeCategory,
        luminance_weight: f32,
    ) -> Result<(usize, f32), CatalogError> {
        let mut best: Option<(usize, f32)> = None;

        for (i, swatch) in self.swatches.iter().enumerate() {
            if !swatch.is_available(shape) {
                continue;
            }
            let dist = target.weighted_distance(swatch.oklab, luminance_weight);
            match best {
                Some((_, d)) if d <= dist => {}
                _ => best = Some((i, dist)),
            }
        }

        best.ok_or(CatalogError::NoEligibleSwatch { shape })
    }
}
