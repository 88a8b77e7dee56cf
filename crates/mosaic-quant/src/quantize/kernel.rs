//! The per-tile diffusion schedule.
//!
//! Each tile quantizes its six cells in a fixed order. The residual of every
//! cell is spread over a few destination slots, either later cells of the
//! same tile or cells of tiles not yet visited, with weights in sixteenths.

/// Where a share of a residual goes, relative to the tile at column `col`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Destination {
    /// This tile, a cell quantized later in the schedule.
    Own,
    /// Current row, `col + 1`.
    Right,
    /// Next row, `col`.
    Below,
    /// Next row, `col - 1`. Dropped in the first column.
    BelowLeft,
    /// Next row, `col + 1`.
    BelowRight,
}

/// One step of the schedule: quantize `cell`, then spread its residual.
///
/// Each spread entry is `(destination, slot, weight)`; the slot is the cell
/// id inside the destination tile and each tile receives
/// `residual * weight / DIVISOR`.
#[derive(Debug, Clone, Copy)]
pub struct Step {
    pub cell: usize,
    pub spread: &'static [(Destination, usize, u8)],
}

/// Denominator of every weight in [`SCHEDULE`].
pub const DIVISOR: u8 = 16;

/// Cell order and error spread for one tile.
///
/// ```text
///   order: 0 -> 4 -> 2 -> 5 -> 1 -> 3
/// ```
///
/// Every step spreads 16/16 of its residual.
pub const SCHEDULE: [Step; 6] = [
    Step {
        cell: 0,
        spread: &[
            (Destination::BelowLeft, 2, 3),
            (Destination::Own, 2, 5),
            (Destination::Own, 5, 3),
            // 5/16 completes this row to 16/16.
            (Destination::Own, 4, 5),
        ],
    },
    Step {
        cell: 4,
        spread: &[
            (Destination::Own, 2, 3),
            (Destination::Below, 4, 4),
            (Destination::Own, 5, 4),
            (Destination::Right, 4, 5),
        ],
    },
    Step {
        cell: 2,
        spread: &[
            (Destination::Right, 0, 7),
            (Destination::Own, 5, 3),
            (Destination::Own, 3, 5),
            (Destination::Right, 4, 1),
        ],
    },
    Step {
        cell: 5,
        spread: &[
            (Destination::Own, 1, 3),
            (Destination::Own, 3, 5),
            (Destination::Right, 0, 7),
            (Destination::Right, 1, 1),
        ],
    },
    Step {
        cell: 1,
        spread: &[
            (Destination::BelowLeft, 2, 3),
            (Destination::Below, 0, 5),
            (Destination::Below, 4, 1),
            (Destination::Own, 3, 7),
        ],
    },
    Step {
        cell: 3,
        spread: &[
            (Destination::Right, 1, 7),
            (Destination::Below, 4, 3),
            (Destination::Below, 2, 5),
            (Destination::BelowRight, 0, 1),
        ],
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::template::CELL_COUNT;

    #[test]
    fn test_every_step_spreads_all_of_its_error() {
        for step in SCHEDULE {
            let total: u32 = step.spread.iter().map(|&(_, _, w)| w as u32).sum();
            assert_eq!(total, DIVISOR as u32, "cell {}", step.cell);
        }
    }

    #[test]
    fn test_schedule_routing() {
        use Destination::*;

        let expected: [(usize, &[(Destination, usize, u8)]); 6] = [
            (0, &[(BelowLeft, 2, 3), (Own, 2, 5), (Own, 5, 3), (Own, 4, 5)]),
            (4, &[(Own, 2, 3), (Below, 4, 4), (Own, 5, 4), (Right, 4, 5)]),
            (2, &[(Right, 0, 7), (Own, 5, 3), (Own, 3, 5), (Right, 4, 1)]),
            (5, &[(Own, 1, 3), (Own, 3, 5), (Right, 0, 7), (Right, 1, 1)]),
            (1, &[(BelowLeft, 2, 3), (Below, 0, 5), (Below, 4, 1), (Own, 3, 7)]),
            (3, &[(Right, 1, 7), (Below, 4, 3), (Below, 2, 5), (BelowRight, 0, 1)]),
        ];
        for (step, (cell, spread)) in SCHEDULE.iter().zip(expected) {
            assert_eq!(step.cell, cell);
            assert_eq!(step.spread, spread, "cell {cell}");
        }
    }

    #[test]
    fn test_every_cell_is_quantized_once() {
        let mut seen = [false; CELL_COUNT];
        for step in SCHEDULE {
            assert!(!seen[step.cell], "cell {} twice", step.cell);
            seen[step.cell] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn test_own_error_only_flows_forward() {
        // Error pushed into this tile must land on a cell that has not been
        // quantized yet, or it would be silently lost.
        for (i, step) in SCHEDULE.iter().enumerate() {
            for &(dest, slot, _) in step.spread {
                assert!(slot < CELL_COUNT);
                if dest == Destination::Own {
                    let later = SCHEDULE[i + 1..].iter().any(|s| s.cell == slot);
                    assert!(later, "cell {} feeds already-quantized {}", step.cell, slot);
                }
            }
        }
    }
}
