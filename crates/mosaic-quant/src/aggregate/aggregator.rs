use super::grid::TileGrid;
use crate::color::Oklab;
use crate::raster::LabImage;
use crate::template::{TileTemplate, CELL_COUNT};

/// Mean Oklab color of each cell of one tile.
///
/// A cell that covers no pixels (tiny or clipped tiles) averages to
/// [`Oklab::ZERO`].
pub type CellAverages = [Oklab; CELL_COUNT];

/// Computes per-cell averages by laying the template over every tile.
///
/// Read-only on the image; the same stencil is reused at every tile
/// position.
#[derive(Debug, Clone, Copy)]
pub struct TileAggregator<'a> {
    template: &'a TileTemplate,
}

impl<'a> TileAggregator<'a> {
    pub fn new(template: &'a TileTemplate) -> Self {
        Self { template }
    }

    /// The tile grid this aggregator walks for `image`.
    pub fn grid(&self, image: &LabImage) -> TileGrid {
        TileGrid::new(self.template.side(), image.width(), image.height())
    }

    /// Averages for the tile at `(row, col)` of `grid`.
    pub fn average(&self, image: &LabImage, grid: &TileGrid, row: usize, col: usize) -> CellAverages {
        let (x0, y0, x1, y1) = grid.bounds(row, col);
        let mut sums = [Oklab::ZERO; CELL_COUNT];
        let mut counts = [0u32; CELL_COUNT];

        for y in y0..y1 {
            for x in x0..x1 {
                let cell = self.template.cell_at(x - x0, y - y0);
                sums[cell] += image.get(x, y);
                counts[cell] += 1;
            }
        }

        let mut out = [Oklab::ZERO; CELL_COUNT];
        for cell in 0..CELL_COUNT {
            out[cell] = sums[cell] * (1.0 / counts[cell].max(1) as f32);
        }
        out
    }

    /// Averages for every tile in raster order.
    ///
    /// ```
    /// use mosaic_quant::{LabImage, Oklab, TileAggregator, TileTemplate};
    ///
    /// let template = TileTemplate::with_side(10);
    /// let grey = Oklab::new(0.6, 0.0, 0.0);
    /// let image = LabImage::filled(20, 10, grey);
    ///
    /// let averages = TileAggregator::new(&template).averages(&image);
    /// assert_eq!(averages.len(), 2);
    /// assert!((averages[1][4].l - 0.6).abs() < 1e-6);
    /// ```
    pub fn averages(&self, image: &LabImage) -> Vec<CellAverages> {
        let grid = self.grid(image);
        let mut out = Vec::with_capacity(grid.len());
        for row in 0..grid.rows() {
            for col in 0..grid.cols() {
                out.push(self.average(image, &grid, row, col));
            }
        }
        out
    }
}
