//! This module contains some error and result definitions used in this crate.

use std::fmt::{self, Display, Formatter};
use std::num::ParseIntError;

/// Miscellaneous errors that can occur on some methods in the
/// [root module](../index.html). This does not exclude errors that occur when
/// parsing boards, see [SudokuParseError](enum.SudokuParseError.html) for
/// that.
#[derive(Debug, Eq, PartialEq)]
pub enum SudokuError {

    /// Indicates that the box size specified for a created board is invalid.
    /// This is the case if it is less than 1.
    InvalidDimensions,

    /// Indicates that some number is invalid for the size of the board in
    /// question. This is the case if it is less than 1 or greater than the
    /// size.
    InvalidNumber,

    /// Indicates that the specified coordinates (column and row) lie outside
    /// the board in question. This is the case if they are greater than or
    /// equal to the size.
    OutOfBounds,

    /// An error that is raised whenever it is attempted to fill a board whose
    /// present digits admit no valid completion.
    UnsatisfiableGrid,

    /// An error that is raised by the puzzle generator when fewer than half
    /// the targeted number of cells could be cleared while keeping the puzzle
    /// uniquely solvable.
    UnderTargetRemoval
}

/// Syntactic sugar for `Result<V, SudokuError>`.
pub type SudokuResult<V> = Result<V, SudokuError>;

/// An enumeration of the errors that may occur when parsing a board code.
#[derive(Debug, Eq, PartialEq)]
pub enum SudokuParseError {

    /// Indicates that the code has the wrong number of parts, which are
    /// separated by semicolons. The code should have two parts: box size and
    /// cells (separated by ';'), so if the code does not contain exactly one
    /// semicolon, this error will be returned.
    WrongNumberOfParts,

    /// Indicates that the number of cells (which are separated by commas)
    /// does not equal the number deduced from the box size.
    WrongNumberOfCells,

    /// Indicates that the provided box size is invalid (i.e. zero).
    InvalidDimensions,

    /// Indicates that one of the numbers (box size or cell content) could not
    /// be parsed.
    NumberFormatError,

    /// Indicates that a cell is filled with an invalid number (0 or more than
    /// the board size).
    InvalidNumber
}

impl Display for SudokuParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            SudokuParseError::WrongNumberOfParts =>
                write!(f, "wrong number of parts"),
            SudokuParseError::WrongNumberOfCells =>
                write!(f, "wrong number of cells"),
            SudokuParseError::InvalidDimensions =>
                write!(f, "invalid dimensions"),
            SudokuParseError::NumberFormatError =>
                write!(f, "number format error"),
            SudokuParseError::InvalidNumber =>
                write!(f, "invalid number")
        }
    }
}

/// Syntactic sugar for `Result<V, SudokuParseError>`.
pub type SudokuParseResult<V> = Result<V, SudokuParseError>;

impl From<ParseIntError> for SudokuParseError {
    fn from(_: ParseIntError) -> Self {
        SudokuParseError::NumberFormatError
    }
}
