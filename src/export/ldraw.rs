//! LDraw build file: one type-1 line per physical piece.
//!
//! Tile `(row, col)` is laid out on a 40 LDU grid; the four 1x1 tiles sit
//! at the quadrant centers, the 2x2 round plate and the 1x1 round plate
//! stack on top of them.

use mosaic_quant::{ColorCatalog, QuantizedMosaic, CELL_COUNT};

/// Placement of one cell's piece inside a tile.
struct Piece {
    cell: usize,
    dx: i64,
    y: i64,
    dz: i64,
    part: &'static str,
}

/// Emission order and placement; independent of the diffusion order.
const PIECES: [Piece; CELL_COUNT] = [
    Piece { cell: 5, dx: 0, y: -16, dz: 10, part: "6141" },
    Piece { cell: 4, dx: 0, y: -8, dz: 10, part: "18674" },
    Piece { cell: 0, dx: -10, y: 0, dz: 0, part: "3024" },
    Piece { cell: 1, dx: -10, y: 0, dz: 20, part: "3024" },
    Piece { cell: 2, dx: 10, y: 0, dz: 0, part: "3024" },
    Piece { cell: 3, dx: 10, y: 0, dz: 20, part: "3024" },
];

const TILE_PITCH: i64 = 40;

/// One type-1 line, newline included.
fn piece_line(rgb: [u8; 3], x: i64, y: i64, z: i64, part: &str) -> String {
    format!(
        "1 0x2{} {x} {y} {z} 1 0 0 0 1 0 -0 0 1 {part}.dat\n",
        hex::encode(rgb)
    )
}

/// Render the whole mosaic as LDraw text.
pub fn render_build_file(mosaic: &QuantizedMosaic, catalog: &ColorCatalog) -> String {
    let mut out = String::with_capacity(mosaic.len() * CELL_COUNT * 48);
    for (row, col, cells) in mosaic.iter() {
        let x = col as i64 * TILE_PITCH;
        let z = -(row as i64) * TILE_PITCH;
        for piece in &PIECES {
            let rgb = catalog.swatch(cells[piece.cell]).rgb();
            out.push_str(&piece_line(
                rgb,
                x + piece.dx,
                piece.y,
                z + piece.dz,
                piece.part,
            ));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use mosaic_quant::{Availability, Swatch};
    use pretty_assertions::assert_eq;

    fn catalog() -> ColorCatalog {
        ColorCatalog::new(vec![
            Swatch::new("1", "White", [242, 243, 242], Availability::ALL),
            Swatch::new("26", "Black", [5, 19, 29], Availability::ALL),
        ])
        .unwrap()
    }

    #[test]
    fn test_single_tile() {
        let mosaic = QuantizedMosaic::new(1, 1, vec![[0, 0, 1, 1, 0, 1]]);
        let text = render_build_file(&mosaic, &catalog());
        assert_eq!(
            text,
            "1 0x205131d 0 -16 10 1 0 0 0 1 0 -0 0 1 6141.dat\n\
             1 0x2f2f3f2 0 -8 10 1 0 0 0 1 0 -0 0 1 18674.dat\n\
             1 0x2f2f3f2 -10 0 0 1 0 0 0 1 0 -0 0 1 3024.dat\n\
             1 0x2f2f3f2 -10 0 20 1 0 0 0 1 0 -0 0 1 3024.dat\n\
             1 0x205131d 10 0 0 1 0 0 0 1 0 -0 0 1 3024.dat\n\
             1 0x205131d 10 0 20 1 0 0 0 1 0 -0 0 1 3024.dat\n"
        );
    }

    #[test]
    fn test_piece_line() {
        assert_eq!(
            piece_line([255, 0, 16], -10, 0, -20, "3024"),
            "1 0x2ff0010 -10 0 -20 1 0 0 0 1 0 -0 0 1 3024.dat\n"
        );
    }

    #[test]
    fn test_tile_offsets() {
        let mosaic = QuantizedMosaic::new(2, 2, vec![[0; CELL_COUNT]; 4]);
        let text = render_build_file(&mosaic, &catalog());
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 4 * CELL_COUNT);

        // Row 1, column 1: first piece is the small round at (40, -16, -30).
        assert_eq!(
            lines[3 * CELL_COUNT],
            "1 0x2f2f3f2 40 -16 -30 1 0 0 0 1 0 -0 0 1 6141.dat"
        );
        // Row 1, column 0: bottom-right tile at (10, 0, -20).
        assert_eq!(
            lines[2 * CELL_COUNT + 5],
            "1 0x2f2f3f2 10 0 -20 1 0 0 0 1 0 -0 0 1 3024.dat"
        );
    }

    #[test]
    fn test_hex_is_zero_padded() {
        let catalog = ColorCatalog::new(vec![Swatch::new("x", "Dark", [1, 2, 3], Availability::ALL)])
            .unwrap();
        let mosaic = QuantizedMosaic::new(1, 1, vec![[0; CELL_COUNT]]);
        let text = render_build_file(&mosaic, &catalog);
        assert!(text.lines().all(|l| l.starts_with("1 0x2010203 ")));
    }
}
