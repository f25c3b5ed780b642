//! This module contains the constraint-validity predicate for boards: pure
//! functions that check the standard row, column, and box uniqueness rules.
//!
//! All functions here are total over any well-formed [SudokuBoard] and never
//! mutate their input. Coordinates are expected to be pre-validated by the
//! caller (they come from loops over the board size everywhere in this
//! crate); passing out-of-range coordinates is a contract violation.

use crate::SudokuBoard;
use crate::util::DigitSet;

fn row_blocks(board: &SudokuBoard, column: usize, row: usize, number: usize)
        -> bool {
    let size = board.size();

    for other_column in 0..size {
        if other_column != column &&
                board.has_number(other_column, row, number).unwrap() {
            return true;
        }
    }

    false
}

fn column_blocks(board: &SudokuBoard, column: usize, row: usize,
        number: usize) -> bool {
    let size = board.size();

    for other_row in 0..size {
        if other_row != row &&
                board.has_number(column, other_row, number).unwrap() {
            return true;
        }
    }

    false
}

// The cells sharing the probe's row or column are already covered by the
// row and column scans, so only the (box_size - 1)² remaining box peers are
// checked here.
fn box_blocks(board: &SudokuBoard, column: usize, row: usize, number: usize)
        -> bool {
    let box_size = board.box_size();
    let box_column = (column / box_size) * box_size;
    let box_row = (row / box_size) * box_size;

    for other_row in box_row..(box_row + box_size) {
        for other_column in box_column..(box_column + box_size) {
            if other_row != row && other_column != column {
                if board.has_number(other_column, other_row, number)
                        .unwrap() {
                    return true;
                }
            }
        }
    }

    false
}

/// Indicates whether placing `number` into the cell at the given position
/// would leave the board without duplicates, i.e. no *other* cell in the
/// same row, column, or box currently holds `number`. The content of the
/// checked cell itself is ignored, so the function can also be used to
/// re-check a cell that is already filled.
///
/// # Arguments
///
/// * `board`: The board on which the placement is checked. Not mutated.
/// * `column`: The column (x-coordinate) of the checked cell.
/// * `row`: The row (y-coordinate) of the checked cell.
/// * `number`: The placed number. Numbers outside `[1, size]` are never
/// blocked, since no cell can hold them.
pub fn is_placement_valid(board: &SudokuBoard, column: usize, row: usize,
        number: usize) -> bool {
    !row_blocks(board, column, row, number) &&
        !column_blocks(board, column, row, number) &&
        !box_blocks(board, column, row, number)
}

/// Computes the set of digits that could currently be placed into the cell
/// at the given position without violating the row, column, or box rules.
/// Every digit of the board's range is probed through
/// [is_placement_valid].
pub fn candidates_for(board: &SudokuBoard, column: usize, row: usize)
        -> DigitSet {
    let size = board.size();
    let mut candidates = DigitSet::empty(size);

    for number in 1..=size {
        if is_placement_valid(board, column, row, number) {
            candidates.insert(number);
        }
    }

    candidates
}

fn unit_has_duplicate(board: &SudokuBoard,
        cells: impl Iterator<Item = (usize, usize)>) -> bool {
    let mut seen = DigitSet::empty(board.size());

    for (column, row) in cells {
        if let Some(number) = board.get_cell(column, row).unwrap() {
            if !seen.insert(number) {
                return true;
            }
        }
    }

    false
}

/// Indicates whether the whole board is valid, i.e. no nonzero digit
/// appears twice in any row, column, or box. Empty cells are permitted;
/// completeness is a separate property (see [SudokuBoard::is_complete]).
///
/// Each of the `size` rows, `size` columns, and `size` boxes is scanned
/// once with a seen-set.
pub fn is_board_valid(board: &SudokuBoard) -> bool {
    let size = board.size();
    let box_size = board.box_size();

    for row in 0..size {
        if unit_has_duplicate(board, (0..size).map(|column| (column, row))) {
            return false;
        }
    }

    for column in 0..size {
        if unit_has_duplicate(board, (0..size).map(|row| (column, row))) {
            return false;
        }
    }

    for box_row in 0..box_size {
        for box_column in 0..box_size {
            let cells = (0..size).map(|i| {
                let column = box_column * box_size + i % box_size;
                let row = box_row * box_size + i / box_size;
                (column, row)
            });

            if unit_has_duplicate(board, cells) {
                return false;
            }
        }
    }

    true
}
