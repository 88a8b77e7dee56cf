use super::error::TemplateError;
use crate::catalog::ShapeCategory;

/// Number of cells in one tile.
pub const CELL_COUNT: usize = 6;

/// Physical shape of each cell, indexed by cell id.
///
/// The four quadrants are flat 1x1 tiles, the ring is a 2x2 round plate
/// and the center is a 1x1 round plate sitting on top of it.
pub const CELL_SHAPES: [ShapeCategory; CELL_COUNT] = [
    ShapeCategory::Tile,
    ShapeCategory::Tile,
    ShapeCategory::Tile,
    ShapeCategory::Tile,
    ShapeCategory::RoundLarge,
    ShapeCategory::RoundSmall,
];

/// A square raster assigning every pixel of one tile to a cell.
///
/// The same stencil is laid over every tile of the image; a clipped tile at
/// the right or bottom edge simply uses its top-left part.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileTemplate {
    side: u32,
    cells: Vec<u8>,
}

impl TileTemplate {
    /// Build the stencil for `tiles_long_side` tiles along an image whose
    /// long side is `image_long_side` pixels.
    ///
    /// The side length is `image_long_side / tiles_long_side`.
    ///
    /// # Errors
    ///
    /// [`TemplateError::ZeroTiles`] for a tile count of zero,
    /// [`TemplateError::TileTooSmall`] when the side length would be zero.
    ///
    /// ```
    /// use mosaic_quant::TileTemplate;
    ///
    /// let t = TileTemplate::new(48, 960).unwrap();
    /// assert_eq!(t.side(), 20);
    /// assert_eq!(t.cell_at(0, 0), 0);
    /// assert_eq!(t.cell_at(10, 10), 5);
    /// ```
    pub fn new(tiles_long_side: u32, image_long_side: u32) -> Result<Self, TemplateError> {
        if tiles_long_side == 0 {
            return Err(TemplateError::ZeroTiles);
        }
        let side = image_long_side / tiles_long_side;
        if side == 0 {
            return Err(TemplateError::TileTooSmall {
                tiles: tiles_long_side,
                long_side: image_long_side,
            });
        }
        Ok(Self::with_side(side))
    }

    /// Build the stencil for a given side length directly.
    ///
    /// Draw order matters, later shapes overwrite earlier ones: the four
    /// quadrants, then the inscribed circle, then the small center circle.
    pub fn with_side(side: u32) -> Self {
        let s = side as i64;
        let half = s / 2;
        let r_large = half * half;
        let r_small = (s / 5) * (s / 5);

        let mut cells = Vec::with_capacity((s * s) as usize);
        for y in 0..s {
            for x in 0..s {
                // The shared edge belongs to the rectangle drawn later.
                let mut cell = ((y >= half) as u8) * 2 + (x >= half) as u8;

                let d2 = (x - half) * (x - half) + (y - half) * (y - half);
                if d2 <= r_large {
                    cell = 4;
                }
                if d2 <= r_small {
                    cell = 5;
                }
                cells.push(cell);
            }
        }

        Self { side, cells }
    }

    /// Side length in pixels.
    #[inline]
    pub fn side(&self) -> u32 {
        self.side
    }

    /// Cell id of stencil pixel `(x, y)`, both below [`side()`](Self::side).
    #[inline]
    pub fn cell_at(&self, x: u32, y: u32) -> usize {
        self.cells[(y * self.side + x) as usize] as usize
    }

    /// Shape category the cell is built from.
    #[inline]
    pub fn shape_of(cell: usize) -> ShapeCategory {
        CELL_SHAPES[cell]
    }

    /// Distinct shapes the template needs, in flag order.
    pub fn required_shapes() -> Vec<ShapeCategory> {
        let mut shapes = CELL_SHAPES.to_vec();
        shapes.sort();
        shapes.dedup();
        shapes
    }

    /// How many stencil pixels each cell covers.
    pub fn coverage(&self) -> [usize; CELL_COUNT] {
        let mut counts = [0; CELL_COUNT];
        for &c in &self.cells {
            counts[c as usize] += 1;
        }
        counts
    }
}
