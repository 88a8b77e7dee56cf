//! QuantizedMosaic: the swatch chosen for every cell of every tile.

use crate::aggregate::TileGrid;
use crate::catalog::{ColorCatalog, ShapeCategory};
use crate::raster::LabImage;
use crate::template::{TileTemplate, CELL_COUNT, CELL_SHAPES};

/// The result of one quantization pass.
///
/// Holds one catalog index per cell, tiles in raster order. Indices refer
/// to the catalog the pass ran against.
///
/// # Example
///
/// ```
/// use mosaic_quant::QuantizedMosaic;
///
/// let mosaic = QuantizedMosaic::new(1, 2, vec![[0; 6], [1, 1, 1, 1, 0, 0]]);
/// assert_eq!(mosaic.tile(0, 1), &[1, 1, 1, 1, 0, 0]);
/// assert_eq!(mosaic.len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuantizedMosaic {
    rows: usize,
    cols: usize,
    tiles: Vec<[usize; CELL_COUNT]>,
}

impl QuantizedMosaic {
    /// # Panics (debug only)
    ///
    /// Debug-asserts that `tiles.len() == rows * cols`.
    pub fn new(rows: usize, cols: usize, tiles: Vec<[usize; CELL_COUNT]>) -> Self {
        debug_assert_eq!(
            tiles.len(),
            rows * cols,
            "tile count ({}) must match rows * cols ({}x{})",
            tiles.len(),
            rows,
            cols,
        );
        Self { rows, cols, tiles }
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Number of tiles.
    #[inline]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Catalog indices of tile `(row, col)`, by cell id.
    #[inline]
    pub fn tile(&self, row: usize, col: usize) -> &[usize; CELL_COUNT] {
        &self.tiles[row * self.cols + col]
    }

    pub fn tiles(&self) -> &[[usize; CELL_COUNT]] {
        &self.tiles
    }

    /// `(row, col, cells)` for every tile in raster order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, &[usize; CELL_COUNT])> + '_ {
        let cols = self.cols.max(1);
        self.tiles
            .iter()
            .enumerate()
            .map(move |(i, cells)| (i / cols, i % cols, cells))
    }

    /// Pieces used per catalog index and shape category.
    ///
    /// `counts[idx][shape.index()]` is the number of cells built from
    /// swatch `idx` in that shape.
    pub fn shape_counts(&self, catalog_len: usize) -> Vec<[usize; ShapeCategory::COUNT]> {
        let mut counts = vec![[0; ShapeCategory::COUNT]; catalog_len];
        for cells in &self.tiles {
            for (cell, &idx) in cells.iter().enumerate() {
                counts[idx][CELL_SHAPES[cell].index()] += 1;
            }
        }
        counts
    }

    /// Overwrite every tile pixel of `image` with its cell's swatch color.
    pub fn paint(&self, image: &mut LabImage, template: &TileTemplate, catalog: &ColorCatalog) {
        let grid = TileGrid::new(template.side(), image.width(), image.height());
        for (row, col, cells) in self.iter() {
            let (x0, y0, x1, y1) = grid.bounds(row, col);

            let colors = cells.map(|idx| catalog.swatch(idx).oklab());
            for y in y0..y1 {
                for x in x0..x1 {
                    image.set(x, y, colors[template.cell_at(x - x0, y - y0)]);
                }
            }
        }
    }
}
