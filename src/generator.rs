//! This module contains logic for generating random puzzles.
//!
//! Generation is done in two steps: filling a board completely with a
//! [Generator], which uses randomized backtracking, and then clearing cells
//! in random order with [Generator::generate_puzzle], which keeps a cell
//! cleared only if the remaining puzzle still has exactly one solution. The
//! number of cells the generator attempts to clear is determined by a
//! [Difficulty].
//!
//! Uniqueness is decided by [count_solutions](crate::solver::count_solutions)
//! with an early-exit threshold of 2: puzzles with more than one solution
//! are considered defective, and counting beyond the second completion
//! would only cost time.

use crate::SudokuBoard;
use crate::error::{SudokuError, SudokuResult};
use crate::solver::count_solutions;
use crate::validator;

use rand::Rng;
use rand::rngs::ThreadRng;

use serde::{Deserialize, Serialize};

/// An enumeration of the difficulty levels a puzzle can be generated with.
/// Each level maps to the number of cells [Generator::generate_puzzle]
/// attempts to clear, independent of the board size. More cleared cells
/// make a harder puzzle, though the count is only a proxy for perceived
/// difficulty.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum Difficulty {

    /// Attempts to clear 30 cells.
    Easy,

    /// Attempts to clear 40 cells.
    Medium,

    /// Attempts to clear 50 cells.
    Hard,

    /// Attempts to clear 55 cells.
    Expert
}

impl Difficulty {

    /// Gets the number of cells [Generator::generate_puzzle] attempts to
    /// clear for this difficulty.
    pub fn removal_target(self) -> usize {
        match self {
            Difficulty::Easy => 30,
            Difficulty::Medium => 40,
            Difficulty::Hard => 50,
            Difficulty::Expert => 55
        }
    }
}

pub(crate) fn shuffle<T>(rng: &mut impl Rng, values: impl Iterator<Item = T>)
        -> Vec<T> {
    let mut vec: Vec<T> = values.collect();
    let len = vec.len();

    for i in 0..(len - 1) {
        let j = rng.gen_range(i..len);
        vec.swap(i, j);
    }

    vec
}

/// A generator randomly fills and reduces boards. It uses a random number
/// generator to decide the content; for most cases, sensible defaults are
/// provided by [Generator::new_default].
pub struct Generator<R: Rng> {
    rng: R
}

impl Generator<ThreadRng> {

    /// Creates a new generator that uses a [ThreadRng] to generate the
    /// random digits.
    pub fn new_default() -> Generator<ThreadRng> {
        Generator::new(rand::thread_rng())
    }
}

impl<R: Rng> Generator<R> {

    /// Creates a new generator that uses the given random number generator
    /// to generate random digits.
    pub fn new(rng: R) -> Generator<R> {
        Generator {
            rng
        }
    }

    fn fill_rec(&mut self, board: &mut SudokuBoard, column: usize,
            row: usize) -> bool {
        let size = board.size();

        if row == size {
            return true;
        }

        let next_column = (column + 1) % size;
        let next_row = if next_column == 0 { row + 1 } else { row };

        if board.get_cell(column, row).unwrap().is_some() {
            return self.fill_rec(board, next_column, next_row);
        }

        for number in shuffle(&mut self.rng, 1..=size) {
            if validator::is_placement_valid(board, column, row, number) {
                board.set_cell(column, row, number).unwrap();

                if self.fill_rec(board, next_column, next_row) {
                    return true;
                }

                board.clear_cell(column, row).unwrap();
            }
        }

        false
    }

    /// Fills the given board with random digits that satisfy the row,
    /// column, and box rules and match all already present digits. The
    /// recursion structure is the same as the
    /// [BacktrackingSolver](crate::solver::BacktrackingSolver)'s; only the
    /// order in which digits are tried is randomized, which is what makes
    /// the resulting grids uniformly varied rather than canonical.
    ///
    /// If no error is returned, it is guaranteed that
    /// [SudokuBoard::is_valid] and [SudokuBoard::is_complete] hold on
    /// `board` after this operation. Otherwise, the board remains
    /// unchanged.
    ///
    /// # Errors
    ///
    /// * `SudokuError::UnsatisfiableGrid` If there is no set of digits that
    /// completes the board without changing digits already present.
    pub fn fill(&mut self, board: &mut SudokuBoard) -> SudokuResult<()> {
        if self.fill_rec(board, 0, 0) {
            Ok(())
        }
        else {
            Err(SudokuError::UnsatisfiableGrid)
        }
    }

    /// Generates a new random complete board with the given box size.
    ///
    /// It is guaranteed that [SudokuBoard::is_valid] and
    /// [SudokuBoard::is_complete] hold on the result.
    ///
    /// # Arguments
    ///
    /// * `box_size`: The side length of one box of the generated board. For
    /// an ordinary Sudoku board, this is 3. Must be greater than 0.
    ///
    /// # Errors
    ///
    /// * `SudokuError::InvalidDimensions` If `box_size` is invalid (zero).
    pub fn generate(&mut self, box_size: usize)
            -> SudokuResult<SudokuBoard> {
        let mut board = SudokuBoard::new(box_size)?;
        self.fill(&mut board)?;
        Ok(board)
    }

    /// Turns the given complete board into a puzzle in place by clearing
    /// cells in random order. A cell stays cleared only if the remaining
    /// puzzle has exactly one solution, decided by a solution count bounded
    /// at 2; otherwise its digit is restored. The process stops once the
    /// [removal target](Difficulty::removal_target) of `difficulty` is
    /// reached or every cell has been tried.
    ///
    /// It is expected that the given `board` is complete and valid, as
    /// produced by [Generator::generate].
    ///
    /// Returns the number of cells that were cleared. The generation is
    /// considered successful if at least half the removal target was
    /// cleared, a laxer bar tolerating boards that resist further removal
    /// while staying uniquely solvable.
    ///
    /// # Errors
    ///
    /// * `SudokuError::UnderTargetRemoval` If fewer than half the targeted
    /// cells could be cleared, which is more likely on small or heavily
    /// constrained boards. The board keeps the uniqueness-preserving
    /// removals made so far; the caller decides whether to retry, use a
    /// smaller target, or fall back to a canned puzzle.
    pub fn generate_puzzle(&mut self, board: &mut SudokuBoard,
            difficulty: Difficulty) -> SudokuResult<usize> {
        let size = board.size();
        let target = difficulty.removal_target();
        let positions = shuffle(&mut self.rng, (0..size)
            .flat_map(|row| (0..size).map(move |column| (column, row))));
        let mut removed = 0;

        for (column, row) in positions {
            if removed >= target {
                break;
            }

            let number = match board.get_cell(column, row).unwrap() {
                Some(number) => number,
                None => continue
            };

            board.clear_cell(column, row).unwrap();

            if count_solutions(board, 2) == 1 {
                removed += 1;
            }
            else {
                board.set_cell(column, row, number).unwrap();
            }
        }

        if removed >= target / 2 {
            Ok(removed)
        }
        else {
            Err(SudokuError::UnderTargetRemoval)
        }
    }
}
