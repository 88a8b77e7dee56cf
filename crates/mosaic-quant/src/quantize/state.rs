use std::mem;

use super::kernel::Destination;
use crate::color::Oklab;
use crate::template::CELL_COUNT;

type Slots = [Oklab; CELL_COUNT];

/// The two rolling error buffers of one pass.
///
/// `current[col][cell]` is the error owed to `cell` of the tile at `col` in
/// the row being processed; `next` collects error for the row below. Both
/// are `cols + 2` long, so `col + 1` of the last column is always a valid
/// slot that is simply never read.
#[derive(Debug, Clone)]
pub struct DiffusionState {
    cols: usize,
    current: Vec<Slots>,
    next: Vec<Slots>,
    dropped: Oklab,
}

impl DiffusionState {
    /// Zeroed buffers for a row of `cols` tiles.
    pub fn new(cols: usize) -> Self {
        Self {
            cols,
            current: vec![[Oklab::ZERO; CELL_COUNT]; cols + 2],
            next: vec![[Oklab::ZERO; CELL_COUNT]; cols + 2],
            dropped: Oklab::ZERO,
        }
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Error owed to `cell` of tile `col`, without consuming it.
    #[inline]
    pub fn pending(&self, col: usize, cell: usize) -> Oklab {
        self.current[col][cell]
    }

    /// Remove and return the error owed to `cell` of tile `col`.
    #[inline]
    pub fn take_pending(&mut self, col: usize, cell: usize) -> Oklab {
        mem::take(&mut self.current[col][cell])
    }

    /// Spread `residual` from tile `col` according to `spread`.
    ///
    /// Shares addressed to column -1 are counted in
    /// [`dropped()`](Self::dropped) and go nowhere.
    pub fn diffuse(&mut self, col: usize, residual: Oklab, spread: &[(Destination, usize, u8)], divisor: u8) {
        let scale = 1.0 / divisor as f32;
        for &(dest, slot, weight) in spread {
            let share = residual * (weight as f32 * scale);
            match dest {
                Destination::Own => self.current[col][slot] += share,
                Destination::Right => self.current[col + 1][slot] += share,
                Destination::Below => self.next[col][slot] += share,
                Destination::BelowLeft => match col.checked_sub(1) {
                    Some(left) => self.next[left][slot] += share,
                    None => self.dropped += share,
                },
                Destination::BelowRight => self.next[col + 1][slot] += share,
            }
        }
    }

    /// Finish a row: `next` becomes `current` and a fresh `next` starts.
    ///
    /// Whatever is left in the old row (only the slots past the last
    /// column, once every tile has been visited) is added to
    /// [`dropped()`](Self::dropped).
    pub fn advance_row(&mut self) {
        let fresh = vec![[Oklab::ZERO; CELL_COUNT]; self.cols + 2];
        let finished = mem::replace(&mut self.current, mem::replace(&mut self.next, fresh));
        self.dropped += finished.iter().flatten().copied().sum::<Oklab>();
    }

    /// Error still held in either buffer.
    pub fn outstanding(&self) -> Oklab {
        self.current
            .iter()
            .chain(self.next.iter())
            .flatten()
            .copied()
            .sum()
    }

    /// Error lost off the left edge or past the right edge so far.
    pub fn dropped(&self) -> Oklab {
        self.dropped
    }
}

#[cfg(test)]
mod tests {
    use super::super::kernel::{DIVISOR, SCHEDULE};
    use super::*;

    fn close(a: Oklab, b: Oklab) -> bool {
        (a - b).magnitude() < 1e-4
    }

    /// A deterministic, varied stand-in for a quantization residual.
    fn fresh_error(col: usize, cell: usize) -> Oklab {
        let k = (col * CELL_COUNT + cell) as f32;
        Oklab::new(0.01 * (k % 7.0) - 0.03, 0.002 * k, -0.001 * (k % 5.0))
    }

    /// Run one row through the schedule, re-emitting whatever each cell was
    /// owed plus a new residual. Returns the sum of the new residuals.
    fn run_row(state: &mut DiffusionState) -> Oklab {
        let mut generated = Oklab::ZERO;
        for col in 0..state.cols() {
            for step in SCHEDULE {
                let owed = state.take_pending(col, step.cell);
                let fresh = fresh_error(col, step.cell);
                generated += fresh;
                state.diffuse(col, owed + fresh, step.spread, DIVISOR);
            }
        }
        generated
    }

    #[test]
    fn test_new_state_is_zero() {
        let state = DiffusionState::new(4);
        assert_eq!(state.outstanding(), Oklab::ZERO);
        assert_eq!(state.dropped(), Oklab::ZERO);
        assert_eq!(state.current.len(), 6);
        assert_eq!(state.next.len(), 6);
    }

    #[test]
    fn test_single_step_routing() {
        let mut state = DiffusionState::new(3);
        let e = Oklab::new(1.6, 0.0, 0.0);
        // Cell 3 of the middle tile.
        state.diffuse(1, e, SCHEDULE[5].spread, DIVISOR);

        assert!(close(state.pending(2, 1), e * (7.0 / 16.0)));
        assert!(close(state.next[1][4], e * (3.0 / 16.0)));
        assert!(close(state.next[1][2], e * (5.0 / 16.0)));
        assert!(close(state.next[2][0], e * (1.0 / 16.0)));
        assert!(close(state.outstanding(), e));
    }

    #[test]
    fn test_first_column_drops_below_left() {
        let mut state = DiffusionState::new(3);
        let e = Oklab::new(1.6, 0.32, -0.16);
        // Cell 1 sends 3/16 down and to the left.
        state.diffuse(0, e, SCHEDULE[4].spread, DIVISOR);
        assert!(close(state.dropped(), e * (3.0 / 16.0)));
        assert!(close(state.outstanding() + state.dropped(), e));
    }

    #[test]
    fn test_advance_row_moves_next_to_current() {
        let mut state = DiffusionState::new(2);
        let e = Oklab::new(0.8, 0.0, 0.0);
        // Cell 4 sends 4/16 straight down.
        state.take_pending(0, 4);
        state.diffuse(0, e, SCHEDULE[1].spread, DIVISOR);
        // Consume what stayed in this row.
        for cell in 0..CELL_COUNT {
            state.take_pending(0, cell);
            state.take_pending(1, cell);
        }
        state.advance_row();

        assert!(close(state.pending(0, 4), e * (4.0 / 16.0)));
        assert_eq!(state.next.iter().flatten().copied().sum::<Oklab>(), Oklab::ZERO);
    }

    #[test]
    fn test_row_conserves_error() {
        for cols in [1, 2, 5] {
            let mut state = DiffusionState::new(cols);
            let mut generated = Oklab::ZERO;
            for _ in 0..3 {
                generated += run_row(&mut state);
                state.advance_row();
                assert!(
                    close(state.outstanding() + state.dropped(), generated),
                    "{cols} columns"
                );
            }
        }
    }

    #[test]
    fn test_single_column_keeps_edge_error_out_of_range() {
        let mut state = DiffusionState::new(1);
        run_row(&mut state);
        // Only column 0 can hold anything a later tile will read.
        assert_eq!(state.current[0], [Oklab::ZERO; CELL_COUNT]);
        assert!(state.current[1].iter().any(|e| *e != Oklab::ZERO));
        assert!(state.next[0].iter().any(|e| *e != Oklab::ZERO));
    }
}
