//! The chronological backtracking search engine
//!
//! A single cursor walks the 81 cells in reading order. On an open cell it
//! commits the lowest digit that fits and moves on; when nothing fits it
//! walks back to the most recent non-clue cell, retracts its digit and
//! resumes with the next one. The grid's own cell values double as the
//! choice stack: a retracted cell's old value tells the search where to
//! pick up, so no per-cell candidate lists are kept.
//!
//! Which digits fit is answered from 27 occupancy sets, one per row,
//! column and block, updated on every commit and retraction. That keeps
//! the membership test O(1) and leaves the cursor walk itself as the
//! dominant cost. The stateless [`Grid::fits`] scan answers the same
//! question from scratch; the two must always agree.

use crate::bitset::DigitSet;
use crate::board::{Cell, Grid};
use crate::consts::{N_CELLS, N_HOUSES};
use crate::errors::Unsolvable;

/// Outcome of a bounded solve, see [`Grid::solve_within`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SolveOutcome {
    /// Every cell holds a digit and all constraints are met.
    Solved,
    /// The step budget ran out first. Non-clue cells have been reset.
    StepLimitReached,
}

/// One action taken by the search engine, as passed to a trace callback.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Step {
    /// The cell the cursor was on.
    pub cell: Cell,
    /// What happened there.
    pub kind: StepKind,
}

/// The kind of action taken at a cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum StepKind {
    /// The digit was committed to the cell.
    Place(u8),
    /// The previously committed digit was retracted again.
    Retract(u8),
}

// Digits present per house. Rows occupy indices 0..9, columns 9..18,
// blocks 18..27.
struct Houses([DigitSet; N_HOUSES]);

impl Houses {
    // Accumulates every prefilled cell. Two equal digits in one house mean
    // no completion exists, whatever the search does.
    fn from_grid(grid: &Grid) -> Result<Houses, Unsolvable> {
        let mut houses = Houses([DigitSet::NONE; N_HOUSES]);
        for cell in Cell::all() {
            match grid.value(cell) {
                0 => {}
                digit => {
                    if houses.occupied(cell).contains(digit) {
                        return Err(Unsolvable);
                    }
                    houses.add(cell, digit);
                }
            }
        }
        Ok(houses)
    }

    #[inline]
    fn occupied(&self, cell: Cell) -> DigitSet {
        self.0[cell.row_house()] | self.0[cell.col_house()] | self.0[cell.block_house()]
    }

    #[inline]
    fn add(&mut self, cell: Cell, digit: u8) {
        self.0[cell.row_house()].insert(digit);
        self.0[cell.col_house()].insert(digit);
        self.0[cell.block_house()].insert(digit);
    }

    #[inline]
    fn remove(&mut self, cell: Cell, digit: u8) {
        self.0[cell.row_house()].remove(digit);
        self.0[cell.col_house()].remove(digit);
        self.0[cell.block_house()].remove(digit);
    }
}

pub(crate) fn search(
    grid: &mut Grid,
    max_steps: u64,
    trace: &mut dyn FnMut(Step),
) -> Result<SolveOutcome, Unsolvable> {
    let mut houses = match Houses::from_grid(grid) {
        Ok(houses) => houses,
        Err(unsolvable) => {
            grid.clear_trials();
            return Err(unsolvable);
        }
    };

    let mut steps: u64 = 0;
    let mut cursor: usize = 0;
    // First candidate to try at the cursor. 1 on entering a cell going
    // forward; after a backward step it resumes past the retracted digit.
    let mut start: u8 = 1;

    while cursor < N_CELLS {
        let cell = Cell::new(cursor as u8);

        // Anything filled while moving forward is settled: clues always,
        // prefilled digits on the first pass. Backward steps clear the
        // cell they land on, so they never end up here.
        if grid.value(cell) != 0 {
            cursor += 1;
            continue;
        }

        let occupied = houses.occupied(cell);
        match (start..=9).find(|&digit| !occupied.contains(digit)) {
            Some(digit) => {
                if steps == max_steps {
                    grid.clear_trials();
                    return Ok(SolveOutcome::StepLimitReached);
                }
                steps += 1;
                houses.add(cell, digit);
                grid.place(cell, digit);
                trace(Step {
                    cell,
                    kind: StepKind::Place(digit),
                });
                cursor += 1;
                start = 1;
            }
            None => {
                // Dead end. Undo the most recent decision still on the
                // board; clue cells hold no decision and are skipped.
                match previous_open(grid, cursor) {
                    Some(prev) => {
                        if steps == max_steps {
                            grid.clear_trials();
                            return Ok(SolveOutcome::StepLimitReached);
                        }
                        steps += 1;
                        let digit = grid.value(prev);
                        debug_assert!(digit != 0);
                        houses.remove(prev, digit);
                        grid.clear(prev);
                        trace(Step {
                            cell: prev,
                            kind: StepKind::Retract(digit),
                        });
                        start = digit + 1;
                        cursor = prev.as_index();
                    }
                    None => {
                        // walked off the front of the board: exhausted
                        grid.clear_trials();
                        return Err(Unsolvable);
                    }
                }
            }
        }
    }

    debug_assert!(grid.is_solved());
    Ok(SolveOutcome::Solved)
}

// Nearest non-clue cell before `cursor`.
fn previous_open(grid: &Grid, cursor: usize) -> Option<Cell> {
    (0..cursor)
        .rev()
        .map(|index| Cell::new(index as u8))
        .find(|&cell| !grid.is_clue(cell))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn houses_reject_a_duplicate_in_a_house() {
        // two 7s in the top left block, different row and column
        let mut bytes = [0; 81];
        bytes[0] = 7; // r1c1
        bytes[10] = 7; // r2c2
        let grid = Grid::from_bytes(bytes).unwrap();
        assert!(Houses::from_grid(&grid).is_err());
    }

    #[test]
    fn occupancy_sets_agree_with_the_stateless_scan() {
        let grid = Grid::from_str_line(
            "53..7....6..195....98....6.8...6...34..8.3..17...2...6.6....28....419..5....8..79",
        )
        .unwrap();
        let houses = Houses::from_grid(&grid).unwrap();
        for cell in Cell::all().filter(|&cell| grid.value(cell) == 0) {
            for digit in 1..=9 {
                assert_eq!(
                    grid.fits(cell, digit),
                    !houses.occupied(cell).contains(digit),
                    "disagreement at {} for digit {}",
                    cell,
                    digit
                );
            }
        }
    }

    #[test]
    fn search_retracts_a_bad_first_choice() {
        // r1c8 and r1c9 are open with 8 and 9 left for the row; the 9 in
        // r4c9 forces r1c9 = 8, so the lower guess 8 at r1c8 must be
        // retracted once.
        let mut cells = vec!['.'; 81];
        for (i, ch) in "1234567".chars().enumerate() {
            cells[i] = ch;
        }
        cells[35] = '9'; // r4c9
        let line: String = cells.into_iter().collect();

        let mut grid = Grid::from_str_line(&line).unwrap();
        let mut retractions = Vec::new();
        grid.solve_with_trace(|step| {
            if let StepKind::Retract(digit) = step.kind {
                retractions.push((step.cell, digit));
            }
        })
        .unwrap();

        assert!(retractions.contains(&(Cell::from_coords(0, 7), 8)));
        assert_eq!(grid.value_at(0, 7), 9);
        assert_eq!(grid.value_at(0, 8), 8);
        assert!(grid.is_solved());
    }

    #[test]
    fn zero_budget_still_recognizes_a_solved_grid() {
        let solved = "534678912672195348198342567859761423426853791713924856961537284287419635345286179";
        let mut grid = Grid::from_str_line(solved).unwrap();
        assert_eq!(grid.solve_within(0), Ok(SolveOutcome::Solved));
        // an unsolved grid gets nothing done on a zero budget
        let mut grid = Grid::from_bytes([0; 81]).unwrap();
        assert_eq!(grid.solve_within(0), Ok(SolveOutcome::StepLimitReached));
        assert_eq!(grid.empty_count(), 81);
    }
}
