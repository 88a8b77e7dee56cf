use super::error::QuantizeError;
use super::kernel::{DIVISOR, SCHEDULE};
use super::state::DiffusionState;
use crate::aggregate::{CellAverages, TileAggregator};
use crate::catalog::ColorCatalog;
use crate::output::QuantizedMosaic;
use crate::raster::LabImage;
use crate::template::{TileTemplate, CELL_COUNT, CELL_SHAPES};

/// Quantizes an image tile by tile against a shape-constrained catalog.
///
/// One [`quantize()`](Self::quantize) call is one complete pass with fresh
/// diffusion buffers; nothing carries over between calls.
#[derive(Debug, Clone, Copy)]
pub struct ErrorDiffusingQuantizer<'a> {
    catalog: &'a ColorCatalog,
    template: &'a TileTemplate,
    luminance_weight: f32,
}

impl<'a> ErrorDiffusingQuantizer<'a> {
    pub fn new(catalog: &'a ColorCatalog, template: &'a TileTemplate, luminance_weight: f32) -> Self {
        Self {
            catalog,
            template,
            luminance_weight,
        }
    }

    /// Run a full pass over `image`.
    ///
    /// On success every tile pixel of `image` has been replaced by its
    /// cell's swatch color. On error `image` is left untouched.
    ///
    /// # Errors
    ///
    /// [`QuantizeError::Catalog`] for the first cell whose shape has no
    /// eligible swatch.
    pub fn quantize(&self, image: &mut LabImage) -> Result<QuantizedMosaic, QuantizeError> {
        let mosaic = self.choose(image)?;
        mosaic.paint(image, self.template, self.catalog);
        Ok(mosaic)
    }

    /// The selection half of [`quantize()`](Self::quantize), read-only on
    /// `image`.
    pub fn choose(&self, image: &LabImage) -> Result<QuantizedMosaic, QuantizeError> {
        let aggregator = TileAggregator::new(self.template);
        let grid = aggregator.grid(image);
        let mut state = DiffusionState::new(grid.cols());
        let mut tiles = Vec::with_capacity(grid.len());

        for row in 0..grid.rows() {
            for col in 0..grid.cols() {
                let averages = aggregator.average(image, &grid, row, col);
                let cells = self.quantize_tile(&averages, &mut state, row, col)?;
                tiles.push(cells);
            }
            state.advance_row();
        }

        Ok(QuantizedMosaic::new(grid.rows(), grid.cols(), tiles))
    }

    fn quantize_tile(
        &self,
        averages: &CellAverages,
        state: &mut DiffusionState,
        row: usize,
        col: usize,
    ) -> Result<[usize; CELL_COUNT], QuantizeError> {
        let mut chosen = [0; CELL_COUNT];

        for step in &SCHEDULE {
            let cell = step.cell;
            let target = averages[cell] + state.take_pending(col, cell);
            let (idx, _) = self
                .catalog
                .nearest_match(target, CELL_SHAPES[cell], self.luminance_weight)
                .map_err(|source| QuantizeError::Catalog {
                    row,
                    col,
                    cell,
                    source,
                })?;
            chosen[cell] = idx;

            let residual = target - self.catalog.swatch(idx).oklab();
            state.diffuse(col, residual, step.spread, DIVISOR);
        }

        Ok(chosen)
    }
}
