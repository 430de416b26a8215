//! This module contains some error and result definitions used in this crate.

use std::fmt::{self, Display, Formatter};
use std::num::ParseIntError;

/// Miscellaneous errors that can occur on some methods in the
/// [root module](../index.html) and its submodules. This does not exclude
/// errors that occur when parsing grid codes, see
/// [SudokuParseError](enum.SudokuParseError.html) for that.
#[derive(Debug, Eq, PartialEq)]
pub enum SudokuError {

    /// Indicates that some digit is invalid for a cell. This is the case if
    /// it is less than 1 or greater than 9.
    InvalidNumber,

    /// Indicates that the specified coordinates (column and row) lie outside
    /// the grid. This is the case if either is greater than or equal to 9.
    OutOfBounds,

    /// Indicates that a game operation attempted to change a clue cell.
    /// Clues are fixed for the lifetime of a game.
    ClueCell,

    /// An error that is raised whenever it is attempted to fill a grid whose
    /// pre-existing digits admit no completion. Filling an empty grid always
    /// succeeds, so this signals a violated precondition in the caller.
    UnfillableGrid
}

/// Syntactic sugar for `Result<V, SudokuError>`.
pub type SudokuResult<V> = Result<V, SudokuError>;

/// An enumeration of the errors that may occur when parsing a `SudokuGrid`
/// code.
#[derive(Debug, Eq, PartialEq)]
pub enum SudokuParseError {

    /// Indicates that the number of cells (which are separated by commas)
    /// does not equal 81.
    WrongNumberOfCells,

    /// Indicates that one of the cell entries could not be parsed as a
    /// number.
    NumberFormatError,

    /// Indicates that a cell is filled with an invalid number (0 or more
    /// than 9).
    InvalidNumber
}

/// Syntactic sugar for `Result<V, SudokuParseError>`.
pub type SudokuParseResult<V> = Result<V, SudokuParseError>;

impl From<ParseIntError> for SudokuParseError {
    fn from(_: ParseIntError) -> Self {
        SudokuParseError::NumberFormatError
    }
}

// Required by the serde conversion on `SudokuGrid`.
impl Display for SudokuParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            SudokuParseError::WrongNumberOfCells =>
                write!(f, "wrong number of cells"),
            SudokuParseError::NumberFormatError =>
                write!(f, "malformed cell number"),
            SudokuParseError::InvalidNumber =>
                write!(f, "cell number out of range")
        }
    }
}
