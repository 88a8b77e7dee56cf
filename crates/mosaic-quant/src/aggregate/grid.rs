/// The tile layout of one image.
///
/// Tiles step by the template side; the last row and column may be clipped
/// by the image edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileGrid {
    side: u32,
    width: u32,
    height: u32,
    cols: usize,
    rows: usize,
}

impl TileGrid {
    /// Lay tiles of `side` pixels over a `width` x `height` image.
    ///
    /// `side` must be non-zero; [`TileTemplate`](crate::TileTemplate) never
    /// produces a zero side.
    ///
    /// ```
    /// use mosaic_quant::TileGrid;
    ///
    /// let grid = TileGrid::new(10, 45, 20);
    /// assert_eq!((grid.rows(), grid.cols()), (2, 5));
    /// assert_eq!(grid.bounds(0, 4), (40, 0, 45, 10));
    /// ```
    pub fn new(side: u32, width: u32, height: u32) -> Self {
        debug_assert!(side > 0);
        Self {
            side,
            width,
            height,
            cols: width.div_ceil(side) as usize,
            rows: height.div_ceil(side) as usize,
        }
    }

    #[inline]
    pub fn side(&self) -> u32 {
        self.side
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Total number of tiles.
    #[inline]
    pub fn len(&self) -> usize {
        self.rows * self.cols
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Pixel bounds `(x0, y0, x1, y1)` of tile `(row, col)`, end-exclusive.
    pub fn bounds(&self, row: usize, col: usize) -> (u32, u32, u32, u32) {
        let x0 = col as u32 * self.side;
        let y0 = row as u32 * self.side;
        let x1 = (x0 + self.side).min(self.width);
        let y1 = (y0 + self.side).min(self.height);
        (x0, y0, x1, y1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_fit() {
        let grid = TileGrid::new(20, 960, 640);
        assert_eq!(grid.cols(), 48);
        assert_eq!(grid.rows(), 32);
        assert_eq!(grid.len(), 48 * 32);
        assert_eq!(grid.bounds(31, 47), (940, 620, 960, 640));
    }

    #[test]
    fn test_clipped_edges() {
        let grid = TileGrid::new(8, 20, 9);
        assert_eq!((grid.rows(), grid.cols()), (2, 3));
        assert_eq!(grid.bounds(0, 2), (16, 0, 20, 8));
        assert_eq!(grid.bounds(1, 0), (0, 8, 8, 9));
    }

    #[test]
    fn test_empty_image() {
        let grid = TileGrid::new(4, 0, 0);
        assert!(grid.is_empty());
    }
}
