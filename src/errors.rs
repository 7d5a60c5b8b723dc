//! Errors for grid construction, mutation and solving

use crate::board::Cell;

/// Error for [`Grid::set`](crate::Grid::set).
///
/// The search engine writes through internal setters and never produces
/// this. If external code sees it, that code holds a stale idea of the
/// grid and has a logic bug to fix.
#[derive(Debug, Copy, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidAssignment {
    /// The cell holds a clue and is fixed for the lifetime of the grid.
    #[error("cell {0} holds a clue and cannot be reassigned")]
    Clue(Cell),
    /// Cells store `0` for empty or a digit `1..=9`, nothing else.
    #[error("value {0} is outside the range 0..=9")]
    OutOfRange(u8),
}

/// The puzzle admits no completion.
///
/// A normal result of the search, not a fault: callers are expected to
/// match on it. The grid is left with every non-clue cell empty.
#[derive(Debug, Copy, Clone, PartialEq, Eq, thiserror::Error)]
#[error("sudoku has no solution")]
pub struct Unsolvable;

/// Error for [`Grid::from_bytes`](crate::Grid::from_bytes)
#[derive(Debug, thiserror::Error)]
#[error("byte array contains entries >9")]
pub struct FromBytesError(pub(crate) ());

/// Error for [`Grid::from_bytes_slice`](crate::Grid::from_bytes_slice)
#[derive(Debug, thiserror::Error)]
pub enum FromBytesSliceError {
    /// Slice is not 81 long
    #[error("byte slice should have length 81, found {0}")]
    WrongLength(usize),
    /// Slice contains invalid entries
    #[error(transparent)]
    FromBytesError(FromBytesError),
}
