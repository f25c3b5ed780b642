//! This module is about deductive solving of boards. In contrast to
//! exhaustive search, the [PropagationSolver] emulates the logical
//! techniques a human solver would use: it maintains a fixed, ordered list
//! of deduction strategies, applied from weakest to strongest inference
//! power, and never guesses by branching. When no strategy can make
//! progress, it stops — which does *not* mean the board is unsolvable, only
//! that it is too hard for pure deduction. The
//! [BacktrackingSolver](crate::solver::BacktrackingSolver) remains the
//! authority on satisfiability.
//!
//! Because every strategy only proposes digits that are currently
//! candidates of their cell, each applied move keeps the board valid.
//!
//! ```
//! use sudoku_engine::SudokuBoard;
//! use sudoku_engine::solver::{MoveRationale, Solver};
//! use sudoku_engine::solver::strategy::PropagationSolver;
//!
//! // The first row misses only its 4.
//! let mut board = SudokuBoard::new(3).unwrap();
//! for (column, number) in [5, 3, 0, 6, 7, 8, 9, 1, 2].iter().enumerate() {
//!     if *number != 0 {
//!         board.set_cell(column, 0, *number).unwrap();
//!     }
//! }
//!
//! let solver = PropagationSolver::new();
//! let best = solver.next_move(&board).unwrap();
//!
//! assert_eq!((2, 0, 4), (best.column, best.row, best.number));
//! assert_eq!(MoveRationale::NakedSingle, best.rationale);
//! assert_eq!(1.0, best.confidence);
//! ```

use crate::SudokuBoard;
use crate::solver::{
    MoveRationale,
    Solver,
    SolverMove,
    sort_by_confidence
};

/// An enumeration of the deduction strategies the [PropagationSolver]
/// applies. The set is fixed and small, so strategies are descriptors
/// rather than an open plugin interface; their execution order is defined
/// by [PropagationSolver]'s strategy table, from weakest to strongest
/// inference power.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum DeductionStrategy {

    /// Finds cells with exactly one remaining candidate. The proposed move
    /// is forced, hence reported at confidence 1.0.
    ///
    /// In the following grid, the cell marked with X cannot be a 1 because
    /// of the 1 in its box, nor a 2 because of the 2 in its row, nor a 3
    /// because of the 3 in its column, leaving only the 4:
    ///
    /// ```text
    /// ╔═══╤═══╦═══╤═══╗
    /// ║ X │   ║   │ 2 ║
    /// ╟───┼───╫───┼───╢
    /// ║   │ 1 ║   │   ║
    /// ╠═══╪═══╬═══╪═══╣
    /// ║   │   ║   │   ║
    /// ╟───┼───╫───┼───╢
    /// ║ 3 │   ║   │   ║
    /// ╚═══╧═══╩═══╧═══╝
    /// ```
    NakedSingle,

    /// Finds values that have exactly one possible cell within some row,
    /// column, or box, even if that cell has other candidates too.
    /// Confidence 0.95.
    HiddenSingle,

    /// Finds cells with exactly two remaining candidates and proposes both
    /// digits as speculative moves at confidence 0.7. The peer elimination
    /// that defines a true naked pair is deliberately not performed; this
    /// strategy is an acknowledged-partial one.
    NakedPair,

    /// Reserved for box/line elimination. This strategy currently scans
    /// nothing and never reports progress.
    // TODO implement box/line elimination: a value confined to one line
    // within a box excludes that value from the rest of the line
    PointingPair
}

impl DeductionStrategy {

    /// Gets the human-readable name of this strategy, which is also the
    /// name of the [MoveRationale] its moves are tagged with.
    pub fn name(self) -> &'static str {
        self.rationale().name()
    }

    fn rationale(self) -> MoveRationale {
        match self {
            DeductionStrategy::NakedSingle => MoveRationale::NakedSingle,
            DeductionStrategy::HiddenSingle => MoveRationale::HiddenSingle,
            DeductionStrategy::NakedPair => MoveRationale::NakedPair,
            DeductionStrategy::PointingPair => MoveRationale::PointingPair
        }
    }

    /// Scans the board and returns all moves this strategy proposes for the
    /// current state. Expects the board's advisory candidate sets to be
    /// refreshed.
    fn scan(self, board: &SudokuBoard) -> Vec<SolverMove> {
        match self {
            DeductionStrategy::NakedSingle => naked_singles(board),
            DeductionStrategy::HiddenSingle => hidden_singles(board),
            DeductionStrategy::NakedPair => naked_pairs(board),
            DeductionStrategy::PointingPair => Vec::new()
        }
    }
}

const STRATEGY_ORDER: [DeductionStrategy; 4] = [
    DeductionStrategy::NakedSingle,
    DeductionStrategy::HiddenSingle,
    DeductionStrategy::NakedPair,
    DeductionStrategy::PointingPair
];

fn proposal(column: usize, row: usize, number: usize,
        strategy: DeductionStrategy, confidence: f64) -> SolverMove {
    SolverMove {
        column,
        row,
        number,
        rationale: strategy.rationale(),
        confidence
    }
}

fn naked_singles(board: &SudokuBoard) -> Vec<SolverMove> {
    let size = board.size();
    let mut moves = Vec::new();

    for row in 0..size {
        for column in 0..size {
            let cell = board.cell(column, row).unwrap();

            if !cell.is_empty() {
                continue;
            }

            let candidates = cell.candidates();

            if candidates.len() == 1 {
                let number = candidates.iter().next().unwrap();
                moves.push(proposal(column, row, number,
                    DeductionStrategy::NakedSingle, 1.0));
            }
        }
    }

    moves
}

#[derive(Clone)]
enum Location {
    None,
    One(usize, usize),
    Multiple
}

impl Location {
    fn union(&self, column: usize, row: usize) -> Location {
        match self {
            Location::None => Location::One(column, row),
            Location::One(_, _) => Location::Multiple,
            Location::Multiple => Location::Multiple
        }
    }
}

fn hidden_single_in_unit(board: &SudokuBoard, number: usize,
        cells: impl Iterator<Item = (usize, usize)>) -> Location {
    let mut location = Location::None;

    for (column, row) in cells {
        let cell = board.cell(column, row).unwrap();

        if cell.is_empty() && cell.candidates().contains(number) {
            location = location.union(column, row);
        }
    }

    location
}

fn propose_hidden_single(location: Location, number: usize,
        moves: &mut Vec<SolverMove>) {
    if let Location::One(column, row) = location {
        moves.push(proposal(column, row, number,
            DeductionStrategy::HiddenSingle, 0.95));
    }
}

fn hidden_singles(board: &SudokuBoard) -> Vec<SolverMove> {
    let size = board.size();
    let box_size = board.box_size();
    let mut moves = Vec::new();

    for number in 1..=size {
        for row in 0..size {
            let location = hidden_single_in_unit(board, number,
                (0..size).map(|column| (column, row)));
            propose_hidden_single(location, number, &mut moves);
        }

        for column in 0..size {
            let location = hidden_single_in_unit(board, number,
                (0..size).map(|row| (column, row)));
            propose_hidden_single(location, number, &mut moves);
        }

        for box_row in 0..box_size {
            for box_column in 0..box_size {
                let cells = (0..size).map(|i| {
                    let column = box_column * box_size + i % box_size;
                    let row = box_row * box_size + i / box_size;
                    (column, row)
                });
                let location = hidden_single_in_unit(board, number, cells);
                propose_hidden_single(location, number, &mut moves);
            }
        }
    }

    moves
}

fn naked_pairs(board: &SudokuBoard) -> Vec<SolverMove> {
    let size = board.size();
    let mut moves = Vec::new();

    for row in 0..size {
        for column in 0..size {
            let cell = board.cell(column, row).unwrap();

            if !cell.is_empty() {
                continue;
            }

            let candidates = cell.candidates();

            if candidates.len() == 2 {
                for number in candidates.iter() {
                    moves.push(proposal(column, row, number,
                        DeductionStrategy::NakedPair, 0.7));
                }
            }
        }
    }

    moves
}

/// A partial [Solver] which applies the [DeductionStrategy] table to find
/// moves without branching search. It is used both as a faster first-pass
/// solver and as a hint engine through
/// [Solver::all_moves](crate::solver::Solver::all_moves).
///
/// Solving repeatedly applies only the *first* proposed move of the first
/// strategy that proposes any, then restarts the strategy scan from the
/// top, so the cheapest deductions are always retried before the more
/// speculative ones. Solving stops when the board is complete or no
/// strategy proposes a move; the latter is a first-class "no progress"
/// outcome, not an error, and callers may fall back to the
/// [BacktrackingSolver](crate::solver::BacktrackingSolver).
#[derive(Clone, Debug)]
pub struct PropagationSolver {
    moves: u64
}

impl PropagationSolver {

    /// Creates a new propagation solver.
    pub fn new() -> PropagationSolver {
        PropagationSolver {
            moves: 0
        }
    }

    /// Gets the number of moves the last call to
    /// [Solver::solve](crate::solver::Solver::solve) applied to the board.
    pub fn moves_count(&self) -> u64 {
        self.moves
    }
}

impl Default for PropagationSolver {
    fn default() -> PropagationSolver {
        PropagationSolver::new()
    }
}

impl Solver for PropagationSolver {

    fn solve(&mut self, board: &mut SudokuBoard) -> bool {
        self.moves = 0;

        loop {
            if board.is_complete() {
                return true;
            }

            board.refresh_candidates();
            let next = STRATEGY_ORDER.iter()
                .find_map(|strategy| strategy.scan(board).into_iter().next());

            match next {
                Some(solver_move) => {
                    board.set_cell(solver_move.column, solver_move.row,
                        solver_move.number).unwrap();
                    self.moves += 1;
                },
                None => return false
            }
        }
    }

    fn next_move(&self, board: &SudokuBoard) -> Option<SolverMove> {
        self.all_moves(board).into_iter().next()
    }

    fn all_moves(&self, board: &SudokuBoard) -> Vec<SolverMove> {
        let mut preview = board.clone();
        preview.refresh_candidates();

        let mut moves = Vec::new();

        for strategy in STRATEGY_ORDER.iter() {
            moves.extend(strategy.scan(&preview));
        }

        sort_by_confidence(&mut moves);
        moves
    }
}
