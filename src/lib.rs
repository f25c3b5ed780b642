// Code lints

#![warn(trivial_casts)]
#![warn(trivial_numeric_casts)]
#![warn(unreachable_pub)]
#![warn(unused_import_braces)]
#![warn(unused_lifetimes)]
#![warn(unused_qualifications)]

// Doc lints

#![warn(rustdoc::broken_intra_doc_links)]
#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![warn(rustdoc::invalid_codeblock_attributes)]

//! This crate implements an easy-to-understand Sudoku engine for boards of
//! configurable size. It supports the following key features:
//!
//! * Parsing and printing board codes
//! * Checking validity and completeness of boards according to the standard
//! row, column, and box rules
//! * Solving boards using a perfect backtracking algorithm as well as a
//! deductive constraint-propagation solver that explains its moves
//! * Generating puzzles with a unique solution by removing cells from a
//! randomly constructed complete grid
//!
//! A board is parameterized by its box size. A box size of 3 yields the
//! ordinary 9x9 Sudoku board, a box size of 2 a 4x4 board divided into 2x2
//! boxes. In this introduction we will mostly be using 4x4 boards due to
//! their simpler nature.
//!
//! # Parsing boards
//!
//! See [SudokuBoard::parse] for the exact format of a board code.
//!
//! ```
//! use sudoku_engine::SudokuBoard;
//!
//! let board = SudokuBoard::parse("2;2, ,3, , ,1, , ,1, , ,4, ,2, ,3")
//!     .unwrap();
//! assert_eq!(Some(2), board.get_cell(0, 0).unwrap());
//! assert_eq!(None, board.get_cell(1, 0).unwrap());
//! ```
//!
//! # Checking validity
//!
//! A board can be checked as a whole with [SudokuBoard::is_valid], and a
//! potential change to a single cell can be checked without changing the
//! board's state through the [validator] module.
//!
//! ```
//! use sudoku_engine::SudokuBoard;
//! use sudoku_engine::validator;
//!
//! let board = SudokuBoard::parse("2;1, , , , ,1, , , , , , , , , , ")
//!     .unwrap();
//!
//! // Both 1s are in the top-left box.
//! assert!(!board.is_valid());
//!
//! // A 2 in the top-right corner would be fine, another 1 would not.
//! assert!(validator::is_placement_valid(&board, 3, 0, 2));
//! assert!(!validator::is_placement_valid(&board, 3, 0, 1));
//! ```
//!
//! # Solving boards
//!
//! The [BacktrackingSolver](solver::BacktrackingSolver) finds a completion
//! for every solvable board. The
//! [PropagationSolver](solver::strategy::PropagationSolver) only applies
//! human-style deductions and reports the moves it finds, but may stop
//! without progress on hard boards. Both implement the
//! [Solver](solver::Solver) trait.
//!
//! ```
//! use sudoku_engine::SudokuBoard;
//! use sudoku_engine::solver::{BacktrackingSolver, Solver};
//!
//! let mut board = SudokuBoard::parse("2; , , ,4, ,4,3, , ,3, , , , ,1, ")
//!     .unwrap();
//! let mut solver = BacktrackingSolver::new();
//!
//! assert!(solver.solve(&mut board));
//! assert!(board.is_complete());
//! assert!(board.is_valid());
//! ```
//!
//! # Generating puzzles
//!
//! Generation happens in two steps: constructing a random complete grid and
//! then clearing cells in random order as long as the puzzle keeps a unique
//! solution. The number of cells the generator attempts to clear is
//! controlled by a [Difficulty](generator::Difficulty).
//!
//! ```
//! use sudoku_engine::generator::{Difficulty, Generator};
//! use sudoku_engine::solver::count_solutions;
//!
//! let mut generator = Generator::new_default();
//! let mut board = generator.generate(3).unwrap();
//! let removed = generator.generate_puzzle(&mut board, Difficulty::Easy)
//!     .unwrap();
//!
//! assert!(removed >= 15);
//! assert_eq!(1, count_solutions(&board, 2));
//! ```
//!
//! # Note regarding performance
//!
//! Exhaustive search and solution counting are exponential in the worst
//! case. It is strongly recommended to use at least `opt-level = 2`, even in
//! tests that use puzzle generation.

pub mod error;
pub mod generator;
pub mod solver;
pub mod util;
pub mod validator;

use error::{
    SudokuError,
    SudokuParseError,
    SudokuParseResult,
    SudokuResult
};
use util::DigitSet;

use serde::{Deserialize, Serialize};

use std::convert::TryFrom;

/// A single cell of a [SudokuBoard]. It holds the assigned digit, if any, as
/// well as an advisory set of candidate digits.
///
/// The candidate set is *not* kept consistent with the constraint state of
/// the board by every operation. It is recomputed in bulk by
/// [SudokuBoard::refresh_candidates] and consulted by the deduction
/// strategies of the
/// [PropagationSolver](crate::solver::strategy::PropagationSolver); all
/// other code derives candidates on demand through
/// [validator::candidates_for](crate::validator::candidates_for).
#[derive(Clone, Debug)]
pub struct Cell {
    value: Option<usize>,
    candidates: DigitSet
}

impl Cell {

    fn new(size: usize) -> Cell {
        Cell {
            value: None,
            candidates: DigitSet::full(size)
        }
    }

    /// Gets the digit assigned to this cell, or `None` if it is empty.
    pub fn value(&self) -> Option<usize> {
        self.value
    }

    /// Indicates whether this cell is empty.
    pub fn is_empty(&self) -> bool {
        self.value.is_none()
    }

    /// Gets the advisory candidate set of this cell. See the type-level
    /// documentation for its consistency guarantees.
    pub fn candidates(&self) -> &DigitSet {
        &self.candidates
    }
}

pub(crate) fn index(column: usize, row: usize, size: usize) -> usize {
    row * size + column
}

fn to_string(cell: &Cell) -> String {
    if let Some(number) = cell.value() {
        number.to_string()
    }
    else {
        String::from("")
    }
}

/// A Sudoku board composed of square boxes. The board is parameterized by
/// its box size `k`: it consists of `k x k` boxes, each containing `k x k`
/// cells, for a total side length of `k²`. A box size of 3 yields the
/// ordinary 9x9 board.
///
/// A board is *valid* if no row, column, or box contains a duplicate digit,
/// *complete* if every cell is filled, and *solved* if it is both. Boards
/// own their cells exclusively; solvers that need to explore without
/// affecting the caller's board work on a clone.
///
/// Boards serialize to and from their [code](SudokuBoard::to_code) string.
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(into = "String")]
#[serde(try_from = "String")]
pub struct SudokuBoard {
    box_size: usize,
    size: usize,
    cells: Vec<Cell>
}

impl SudokuBoard {

    /// Creates a new, empty board with the given box size. The total width
    /// and height of the board will be the square of `box_size`.
    ///
    /// # Arguments
    ///
    /// * `box_size`: The side length of one box of the board. For an
    /// ordinary Sudoku board, this is 3. Must be greater than 0.
    ///
    /// # Errors
    ///
    /// If `box_size` is invalid (zero). In that case,
    /// `SudokuError::InvalidDimensions` is returned.
    pub fn new(box_size: usize) -> SudokuResult<SudokuBoard> {
        if box_size == 0 {
            return Err(SudokuError::InvalidDimensions);
        }

        let size = box_size * box_size;
        let cells = vec![Cell::new(size); size * size];

        Ok(SudokuBoard {
            box_size,
            size,
            cells
        })
    }

    /// Parses a code encoding a board. The code has to be of the format
    /// `<box_size>;<cells>` where `<cells>` is a comma-separated list of
    /// entries, which are either empty or a number. The entries are assigned
    /// left-to-right, top-to-bottom, where each row is completed before the
    /// next one is started. Whitespace in the entries is ignored to allow
    /// for more intuitive formatting. The number of entries must match the
    /// amount of cells in a board with the given box size, i.e. it must be
    /// `box_size⁴`.
    ///
    /// As an example, the code `2;1, ,2, , ,3, ,4, , , ,3, ,1, ,2` parses to
    /// a 4x4 board whose first row contains a 1 and a 2 in the first and
    /// third cell.
    ///
    /// # Errors
    ///
    /// Any specialization of `SudokuParseError` (see that documentation).
    pub fn parse(code: &str) -> SudokuParseResult<SudokuBoard> {
        let parts: Vec<&str> = code.split(';').collect();

        if parts.len() != 2 {
            return Err(SudokuParseError::WrongNumberOfParts);
        }

        let box_size = parts[0].trim().parse::<usize>()?;

        if box_size == 0 {
            return Err(SudokuParseError::InvalidDimensions);
        }

        let mut board = SudokuBoard::new(box_size).unwrap();
        let size = board.size();
        let numbers: Vec<&str> = parts[1].split(',').collect();

        if numbers.len() != size * size {
            return Err(SudokuParseError::WrongNumberOfCells);
        }

        for (i, number_str) in numbers.iter().enumerate() {
            let number_str = number_str.trim();

            if number_str.is_empty() {
                continue;
            }

            let number = number_str.parse::<usize>()?;

            if number == 0 || number > size {
                return Err(SudokuParseError::InvalidNumber);
            }

            board.cells[i].value = Some(number);
        }

        Ok(board)
    }

    /// Converts the board into a `String` in a way that is consistent with
    /// [SudokuBoard::parse]. That is, a board that is converted to a code
    /// and parsed again will not change.
    ///
    /// ```
    /// use sudoku_engine::SudokuBoard;
    ///
    /// let mut board = SudokuBoard::new(2).unwrap();
    /// board.set_cell(1, 1, 4).unwrap();
    ///
    /// let code = board.to_code();
    /// assert_eq!("2;,,,,,4,,,,,,,,,,", code.as_str());
    /// assert_eq!(board, SudokuBoard::parse(code.as_str()).unwrap());
    /// ```
    pub fn to_code(&self) -> String {
        let mut s = format!("{};", self.box_size);
        let cells = self.cells.iter()
            .map(to_string)
            .collect::<Vec<String>>()
            .join(",");
        s.push_str(cells.as_str());
        s
    }

    /// Gets the side length of one box of the board. This is also the number
    /// of boxes that compose the board horizontally and vertically.
    pub fn box_size(&self) -> usize {
        self.box_size
    }

    /// Gets the total size of the board on one axis (horizontally or
    /// vertically). This is always the square of [SudokuBoard::box_size].
    pub fn size(&self) -> usize {
        self.size
    }

    fn verified_index(&self, column: usize, row: usize)
            -> SudokuResult<usize> {
        let size = self.size();

        if column >= size || row >= size {
            Err(SudokuError::OutOfBounds)
        }
        else {
            Ok(index(column, row, size))
        }
    }

    /// Gets the content of the cell at the specified position.
    ///
    /// # Arguments
    ///
    /// * `column`: The column (x-coordinate) of the desired cell. Must be in
    /// the range `[0, size[`.
    /// * `row`: The row (y-coordinate) of the desired cell. Must be in the
    /// range `[0, size[`.
    ///
    /// # Errors
    ///
    /// If either `column` or `row` are not in the specified range. In that
    /// case, `SudokuError::OutOfBounds` is returned.
    pub fn get_cell(&self, column: usize, row: usize)
            -> SudokuResult<Option<usize>> {
        let index = self.verified_index(column, row)?;
        Ok(self.cells[index].value())
    }

    /// Indicates whether the cell at the specified position has the given
    /// number. This will return `false` if there is a different number in
    /// that cell or it is empty.
    ///
    /// # Arguments
    ///
    /// * `column`: The column (x-coordinate) of the checked cell. Must be in
    /// the range `[0, size[`.
    /// * `row`: The row (y-coordinate) of the checked cell. Must be in the
    /// range `[0, size[`.
    /// * `number`: The number to check whether it is in the specified cell.
    /// If it is *not* in the range `[1, size]`, `false` will always be
    /// returned.
    ///
    /// # Errors
    ///
    /// If either `column` or `row` are not in the specified range. In that
    /// case, `SudokuError::OutOfBounds` is returned.
    pub fn has_number(&self, column: usize, row: usize, number: usize)
            -> SudokuResult<bool> {
        if let Some(content) = self.get_cell(column, row)? {
            Ok(number == content)
        }
        else {
            Ok(false)
        }
    }

    /// Sets the content of the cell at the specified position to the given
    /// number. If the cell was not empty, the old number will be
    /// overwritten. The advisory candidate set of the cell is left
    /// untouched.
    ///
    /// # Arguments
    ///
    /// * `column`: The column (x-coordinate) of the assigned cell. Must be
    /// in the range `[0, size[`.
    /// * `row`: The row (y-coordinate) of the assigned cell. Must be in the
    /// range `[0, size[`.
    /// * `number`: The number to assign to the specified cell. Must be in
    /// the range `[1, size]`.
    ///
    /// # Errors
    ///
    /// * `SudokuError::OutOfBounds` If either `column` or `row` are not in
    /// the specified range.
    /// * `SudokuError::InvalidNumber` If `number` is not in the specified
    /// range.
    pub fn set_cell(&mut self, column: usize, row: usize, number: usize)
            -> SudokuResult<()> {
        let size = self.size();

        if number == 0 || number > size {
            return Err(SudokuError::InvalidNumber);
        }

        let index = self.verified_index(column, row)?;
        self.cells[index].value = Some(number);
        Ok(())
    }

    /// Clears the content of the cell at the specified position, that is, if
    /// it contains a number, that number is removed. If the cell is already
    /// empty, it will be left that way.
    ///
    /// # Arguments
    ///
    /// * `column`: The column (x-coordinate) of the cleared cell. Must be in
    /// the range `[0, size[`.
    /// * `row`: The row (y-coordinate) of the cleared cell. Must be in the
    /// range `[0, size[`.
    ///
    /// # Errors
    ///
    /// If either `column` or `row` are not in the specified range. In that
    /// case, `SudokuError::OutOfBounds` is returned.
    pub fn clear_cell(&mut self, column: usize, row: usize)
            -> SudokuResult<()> {
        let index = self.verified_index(column, row)?;
        self.cells[index].value = None;
        Ok(())
    }

    /// Gets a reference to the [Cell] at the specified position, granting
    /// access to its advisory candidate set.
    ///
    /// # Arguments
    ///
    /// * `column`: The column (x-coordinate) of the desired cell. Must be in
    /// the range `[0, size[`.
    /// * `row`: The row (y-coordinate) of the desired cell. Must be in the
    /// range `[0, size[`.
    ///
    /// # Errors
    ///
    /// If either `column` or `row` are not in the specified range. In that
    /// case, `SudokuError::OutOfBounds` is returned.
    pub fn cell(&self, column: usize, row: usize) -> SudokuResult<&Cell> {
        let index = self.verified_index(column, row)?;
        Ok(&self.cells[index])
    }

    /// Recomputes the advisory candidate set of every cell from the current
    /// constraint state. Empty cells receive all digits that could be placed
    /// without introducing a duplicate in their row, column, or box; filled
    /// cells receive the singleton of their digit.
    pub fn refresh_candidates(&mut self) {
        let size = self.size();

        for row in 0..size {
            for column in 0..size {
                let index = index(column, row, size);
                let candidates = match self.cells[index].value() {
                    Some(number) => DigitSet::singleton(size, number),
                    None => validator::candidates_for(self, column, row)
                };
                self.cells[index].candidates = candidates;
            }
        }
    }

    /// Indicates whether this board is valid, i.e. no row, column, or box
    /// contains a duplicate digit. Empty cells are permitted. This never
    /// mutates the board.
    pub fn is_valid(&self) -> bool {
        validator::is_board_valid(self)
    }

    /// Indicates whether this board is complete, i.e. every cell is filled
    /// with a digit. In this case, [SudokuBoard::count_clues] returns the
    /// square of [SudokuBoard::size]. This never mutates the board.
    pub fn is_complete(&self) -> bool {
        self.cells.iter().all(|c| !c.is_empty())
    }

    /// Indicates whether no cell of this board is filled with a digit. In
    /// this case, [SudokuBoard::count_clues] returns 0.
    pub fn is_board_empty(&self) -> bool {
        self.cells.iter().all(|c| c.is_empty())
    }

    /// Counts the number of clues given by this board. This is the number of
    /// non-empty cells. While on average puzzles with less clues are harder,
    /// this is *not* a reliable measure of difficulty.
    pub fn count_clues(&self) -> usize {
        self.cells.iter().filter(|c| !c.is_empty()).count()
    }

    fn verify_dimensions(&self, other: &SudokuBoard) -> SudokuResult<()> {
        if self.box_size != other.box_size {
            Err(SudokuError::InvalidDimensions)
        }
        else {
            Ok(())
        }
    }

    /// Assigns the content of another board to this one, i.e., changes the
    /// cells in this board to the state in `other`. The other board must
    /// have the same dimensions as this one.
    ///
    /// # Errors
    ///
    /// If the dimensions are not the same. In that case,
    /// `SudokuError::InvalidDimensions` is returned.
    pub fn assign(&mut self, other: &SudokuBoard) -> SudokuResult<()> {
        self.verify_dimensions(other)?;
        self.cells.clone_from_slice(&other.cells);
        Ok(())
    }

    /// Indicates whether this board's digits are a subset of another one's.
    /// That is, all cells filled in this board with some number must be
    /// filled in `other` with the same number. If this condition is met,
    /// `true` is returned, and `false` otherwise.
    ///
    /// # Errors
    ///
    /// If the dimensions of this and the `other` board are not the same. In
    /// that case, `SudokuError::InvalidDimensions` is returned.
    pub fn is_subset(&self, other: &SudokuBoard) -> SudokuResult<bool> {
        self.verify_dimensions(other)?;
        Ok(self.cells.iter()
            .zip(other.cells.iter())
            .all(|(self_cell, other_cell)| {
                match self_cell.value() {
                    Some(self_number) =>
                        other_cell.value() == Some(self_number),
                    None => true
                }
            }))
    }
}

// Equality on boards compares the assigned digits only. The advisory
// candidate sets carry no authoritative state.
impl PartialEq for SudokuBoard {
    fn eq(&self, other: &SudokuBoard) -> bool {
        self.box_size == other.box_size &&
            self.cells.iter()
                .zip(other.cells.iter())
                .all(|(l, r)| l.value() == r.value())
    }
}

impl Eq for SudokuBoard { }

impl From<SudokuBoard> for String {
    fn from(board: SudokuBoard) -> String {
        board.to_code()
    }
}

impl TryFrom<String> for SudokuBoard {
    type Error = SudokuParseError;

    fn try_from(code: String) -> SudokuParseResult<SudokuBoard> {
        SudokuBoard::parse(code.as_str())
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn new_board_is_empty() {
        let board = SudokuBoard::new(3).unwrap();

        assert_eq!(3, board.box_size());
        assert_eq!(9, board.size());
        assert!(board.is_board_empty());
        assert!(!board.is_complete());
        assert_eq!(0, board.count_clues());
    }

    #[test]
    fn zero_box_size_rejected() {
        assert_eq!(Err(SudokuError::InvalidDimensions), SudokuBoard::new(0));
    }

    #[test]
    fn parse_ok() {
        let board_res = SudokuBoard::parse("2; 1,,,2, ,3,,4, ,2,,, 3,,,");

        if let Ok(board) = board_res {
            assert_eq!(2, board.box_size());
            assert_eq!(4, board.size());
            assert_eq!(Some(1), board.get_cell(0, 0).unwrap());
            assert_eq!(None, board.get_cell(1, 0).unwrap());
            assert_eq!(Some(2), board.get_cell(3, 0).unwrap());
            assert_eq!(Some(3), board.get_cell(1, 1).unwrap());
            assert_eq!(Some(4), board.get_cell(3, 1).unwrap());
            assert_eq!(Some(2), board.get_cell(1, 2).unwrap());
            assert_eq!(Some(3), board.get_cell(0, 3).unwrap());
            assert_eq!(None, board.get_cell(3, 3).unwrap());
        }
        else {
            panic!("Parsing valid board failed.");
        }
    }

    #[test]
    fn parse_invalid_dimensions() {
        assert_eq!(Err(SudokuParseError::InvalidDimensions),
            SudokuBoard::parse("0;,"));
    }

    #[test]
    fn parse_wrong_number_of_parts() {
        assert_eq!(Err(SudokuParseError::WrongNumberOfParts),
            SudokuBoard::parse("2;,,,,,,,,,,,,,,,;whatever"));
    }

    #[test]
    fn parse_number_format_error() {
        assert_eq!(Err(SudokuParseError::NumberFormatError),
            SudokuBoard::parse("#;,"));
        assert_eq!(Err(SudokuParseError::NumberFormatError),
            SudokuBoard::parse("2;x,,,,,,,,,,,,,,,"));
    }

    #[test]
    fn parse_invalid_number() {
        assert_eq!(Err(SudokuParseError::InvalidNumber),
            SudokuBoard::parse("2;,,,4,,,5,,,,,,,,,"));
    }

    #[test]
    fn parse_wrong_number_of_cells() {
        assert_eq!(Err(SudokuParseError::WrongNumberOfCells),
            SudokuBoard::parse("2;1,2,3,4,1,2,3,4,1,2,3,4,1,2,3"));
        assert_eq!(Err(SudokuParseError::WrongNumberOfCells),
            SudokuBoard::parse("2;1,2,3,4,1,2,3,4,1,2,3,4,1,2,3,4,1"));
    }

    #[test]
    fn code_round_trip() {
        let mut board = SudokuBoard::new(2).unwrap();

        assert_eq!("2;,,,,,,,,,,,,,,,", board.to_code().as_str());

        board.set_cell(0, 0, 1).unwrap();
        board.set_cell(1, 1, 2).unwrap();
        board.set_cell(2, 2, 3).unwrap();
        board.set_cell(3, 3, 4).unwrap();

        assert_eq!("2;1,,,,,2,,,,,3,,,,,4", board.to_code().as_str());
        assert_eq!(board,
            SudokuBoard::parse(board.to_code().as_str()).unwrap());
    }

    #[test]
    fn cell_access_bounds_checked() {
        let mut board = SudokuBoard::new(2).unwrap();

        assert_eq!(Err(SudokuError::OutOfBounds), board.get_cell(4, 0));
        assert_eq!(Err(SudokuError::OutOfBounds), board.set_cell(0, 4, 1));
        assert_eq!(Err(SudokuError::OutOfBounds), board.clear_cell(17, 2));
    }

    #[test]
    fn set_cell_validates_number() {
        let mut board = SudokuBoard::new(2).unwrap();

        assert_eq!(Err(SudokuError::InvalidNumber), board.set_cell(0, 0, 0));
        assert_eq!(Err(SudokuError::InvalidNumber), board.set_cell(0, 0, 5));
        assert_eq!(Ok(()), board.set_cell(0, 0, 4));
        assert_eq!(Some(4), board.get_cell(0, 0).unwrap());
    }

    #[test]
    fn clear_cell_empties_cell() {
        let mut board = SudokuBoard::new(2).unwrap();
        board.set_cell(2, 1, 3).unwrap();
        board.clear_cell(2, 1).unwrap();

        assert_eq!(None, board.get_cell(2, 1).unwrap());
        assert!(board.is_board_empty());
    }

    #[test]
    fn count_clues_and_empty_and_complete() {
        let empty = SudokuBoard::parse("2;,,,,,,,,,,,,,,,").unwrap();
        let partial = SudokuBoard::parse("2;1,,3,2,4,,,,,,,,,,1,").unwrap();
        let complete =
            SudokuBoard::parse("2;2,3,4,1,1,4,2,3,4,1,3,2,3,2,1,4").unwrap();

        assert_eq!(0, empty.count_clues());
        assert_eq!(5, partial.count_clues());
        assert_eq!(16, complete.count_clues());

        assert!(empty.is_board_empty());
        assert!(!partial.is_board_empty());
        assert!(!complete.is_board_empty());

        assert!(!empty.is_complete());
        assert!(!partial.is_complete());
        assert!(complete.is_complete());
    }

    #[test]
    fn validity_checks_leave_board_unchanged() {
        let board = SudokuBoard::parse("2;1,1,,,2,,,,,,3,,,,,").unwrap();
        let before = board.clone();

        assert!(!board.is_valid());
        assert!(!board.is_complete());
        assert_eq!(before, board);
        assert_eq!(before.to_code(), board.to_code());
    }

    #[test]
    fn subset_relation() {
        let partial = SudokuBoard::parse("2;1,,3,,2,,,,4,,4,3,,,,2").unwrap();
        let larger = SudokuBoard::parse("2;1,2,3,,2,,3,,4,,4,3,,,1,2")
            .unwrap();
        let unrelated = SudokuBoard::parse("2;2,,3,,2,,,,4,,4,3,,,,2")
            .unwrap();

        assert!(partial.is_subset(&larger).unwrap());
        assert!(!larger.is_subset(&partial).unwrap());
        assert!(!partial.is_subset(&unrelated).unwrap());
        assert!(partial.is_subset(&partial).unwrap());
    }

    #[test]
    fn subset_requires_same_dimensions() {
        let small = SudokuBoard::new(2).unwrap();
        let large = SudokuBoard::new(3).unwrap();

        assert_eq!(Err(SudokuError::InvalidDimensions),
            small.is_subset(&large));
    }

    #[test]
    fn assign_copies_cells() {
        let source = SudokuBoard::parse("2;1,,3,2,4,,,,,,,,,,1,").unwrap();
        let mut target = SudokuBoard::new(2).unwrap();

        target.assign(&source).unwrap();
        assert_eq!(source, target);

        let mut wrong_size = SudokuBoard::new(3).unwrap();
        assert_eq!(Err(SudokuError::InvalidDimensions),
            wrong_size.assign(&source));
    }

    #[test]
    fn refresh_candidates_reflects_constraints() {
        let mut board = SudokuBoard::parse("2;1,2,,,3, ,,,,,,,2,,,").unwrap();
        board.refresh_candidates();

        // Top-right cell of the first row: 1, 2 in the row, nothing else in
        // its column or box restricts it.
        let corner = board.cell(3, 0).unwrap().candidates();
        assert_eq!(vec![3, 4], corner.iter().collect::<Vec<_>>());

        // (1, 1): 1 and 2 in the box, 3 in the row, 2 in the column.
        let inner = board.cell(1, 1).unwrap().candidates();
        assert_eq!(vec![4], inner.iter().collect::<Vec<_>>());

        // Filled cells hold the singleton of their digit.
        let filled = board.cell(0, 1).unwrap().candidates();
        assert_eq!(vec![3], filled.iter().collect::<Vec<_>>());
    }

    #[test]
    fn serde_round_trip() {
        let board =
            SudokuBoard::parse("2;2,3,4,1,1,4,2,3,4,1,3,2,3,2,1,4").unwrap();
        let json = serde_json::to_string(&board).unwrap();

        assert_eq!("\"2;2,3,4,1,1,4,2,3,4,1,3,2,3,2,1,4\"", json);

        let parsed: SudokuBoard = serde_json::from_str(&json).unwrap();
        assert_eq!(board, parsed);
    }

    #[test]
    fn serde_rejects_malformed_code() {
        let result: Result<SudokuBoard, _> =
            serde_json::from_str("\"2;1,2,3\"");
        assert!(result.is_err());
    }
}
