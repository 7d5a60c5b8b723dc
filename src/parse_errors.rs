//! Errors that may be encountered when reading a grid from a string

use crate::board::positions::{block, col, row};
use std::fmt;

/// A cell entry that could not be parsed.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct InvalidEntry {
    /// Cell number in reading order, 0..=8 for the first row, 9..=17 for the second and so on
    pub cell: u8,
    /// The offending character
    pub ch: char,
}

impl InvalidEntry {
    /// Row index from 0..=8, topmost row is 0
    #[inline]
    pub fn row(self) -> u8 {
        row(self.cell)
    }
    /// Column index from 0..=8, leftmost col is 0
    #[inline]
    pub fn col(self) -> u8 {
        col(self.cell)
    }
    /// Block index from 0..=8, numbering from left to right, top to bottom
    #[inline]
    pub fn block(self) -> u8 {
        block(self.cell)
    }
}

/// A structure representing an error caused when parsing the line format
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub enum LineParseError {
    /// Accepted entries are the digits 1..=9 for clues and '0', '.' or '_' for empty cells
    InvalidEntry(InvalidEntry),
    /// Input ended after this many cells, 81 are required
    NotEnoughCells(u8),
    /// More than 81 cells were supplied
    TooManyCells,
    /// Content after the 81st cell must be set off by a space or tab
    MissingCommentDelimiter,
}

impl fmt::Display for LineParseError {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        use self::LineParseError as Error;

        match *self {
            Error::InvalidEntry(InvalidEntry { cell, ch }) => {
                write!(f, "cell {} contains invalid character '{}'", cell, ch)
            }
            Error::NotEnoughCells(cells) => {
                write!(f, "sudoku contains {} cells instead of required 81", cells)
            }
            Error::TooManyCells => write!(
                f,
                "sudoku contains more than 81 cells or is missing comment delimiter"
            ),
            Error::MissingCommentDelimiter => write!(f, "missing comment delimiter"),
        }
    }
}

impl std::error::Error for LineParseError {}
