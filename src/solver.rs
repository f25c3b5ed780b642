//! This module contains the logic for solving boards by exhaustive search.
//!
//! Most importantly, this module contains the definition of the
//! [Solver](trait.Solver.html) trait and the
//! [BacktrackingSolver](struct.BacktrackingSolver.html), which finds a
//! completion for every solvable board. The deductive
//! [PropagationSolver](strategy::PropagationSolver) lives in the [strategy]
//! submodule.
//!
//! Besides solving, this module offers [count_solutions], a bounded variant
//! of the same search which counts the completions of a board up to an
//! early-exit threshold. It backs the uniqueness guarantee of the
//! [generator](crate::generator).

use crate::SudokuBoard;
use crate::validator;

use std::fmt::{self, Display, Formatter};
use std::time::{Duration, Instant};

pub mod strategy;

/// A tag naming the reasoning that produced a [SolverMove]. For deductive
/// strategies this is the strategy's name; for search-derived moves it names
/// the ranking heuristic.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum MoveRationale {

    /// The first valid value for the first empty cell in scan order.
    FirstValid,

    /// A move ranked purely by the number of remaining candidates of its
    /// cell.
    CandidateCount,

    /// The cell has exactly one remaining candidate.
    NakedSingle,

    /// The cell is the only one in some row, column, or box that can take
    /// the value.
    HiddenSingle,

    /// One branch of a cell with exactly two remaining candidates. This is a
    /// speculative move, not a forced one.
    NakedPair,

    /// Reserved for box/line elimination.
    PointingPair
}

impl MoveRationale {

    /// Gets the human-readable name of this rationale.
    pub fn name(self) -> &'static str {
        match self {
            MoveRationale::FirstValid => "first valid",
            MoveRationale::CandidateCount => "candidate count",
            MoveRationale::NakedSingle => "naked single",
            MoveRationale::HiddenSingle => "hidden single",
            MoveRationale::NakedPair => "naked pair",
            MoveRationale::PointingPair => "pointing pair"
        }
    }
}

impl Display for MoveRationale {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A single proposed placement, output of the single-step solver
/// operations. Moves are value objects; they are not part of any persistent
/// state.
#[derive(Clone, Debug, PartialEq)]
pub struct SolverMove {

    /// The column (x-coordinate) of the cell to fill.
    pub column: usize,

    /// The row (y-coordinate) of the cell to fill.
    pub row: usize,

    /// The digit to place.
    pub number: usize,

    /// The reasoning that produced this move.
    pub rationale: MoveRationale,

    /// A plausibility score in `[0, 1]`. For deductive moves this encodes
    /// logical certainty (a forced move is 1.0), not a probability in a
    /// statistical sense.
    pub confidence: f64
}

/// A trait for types which can solve boards, totally or partially, and
/// propose individual moves for interactive use. Not all implementers find
/// a completion for every solvable board; the
/// [PropagationSolver](strategy::PropagationSolver) stops when its
/// deductions run dry, similar to a human solver.
pub trait Solver {

    /// Solves, or attempts to solve, the given board in place. Returns
    /// `true` if the board was completed, and `false` if the solver gave up,
    /// in which case the board is left in a valid but possibly incomplete
    /// state.
    fn solve(&mut self, board: &mut SudokuBoard) -> bool;

    /// Proposes a single move for the given board without mutating it, or
    /// `None` if this solver cannot make progress.
    fn next_move(&self, board: &SudokuBoard) -> Option<SolverMove>;

    /// Enumerates all moves this solver considers for the given board,
    /// sorted by descending confidence. The board is not mutated. Note that
    /// the moves are individually consistent with the current board state,
    /// but not verified against the full search space.
    fn all_moves(&self, board: &SudokuBoard) -> Vec<SolverMove>;
}

pub(crate) fn sort_by_confidence(moves: &mut Vec<SolverMove>) {
    moves.sort_by(|a, b| b.confidence.partial_cmp(&a.confidence).unwrap());
}

/// Finds the first empty cell in row-major scan order and returns its
/// coordinates in the form `(column, row)`.
fn find_first_empty(board: &SudokuBoard) -> Option<(usize, usize)> {
    let size = board.size();

    for row in 0..size {
        for column in 0..size {
            if board.get_cell(column, row).unwrap().is_none() {
                return Some((column, row));
            }
        }
    }

    None
}

enum Search {
    Found,
    Exhausted,
    Aborted
}

/// A perfect [Solver] which solves boards by recursively testing all valid
/// digits for the first empty cell in row-major scan order. This means two
/// things:
///
/// * Its worst-case runtime is exponential, i.e. it may be very slow if the
/// board has many missing digits.
/// * If the board has any completion, it will find one, and it only reports
/// failure if none exists.
///
/// The solver tracks the number of assignments made and the elapsed wall
/// time of the last run as telemetry; neither influences the search.
/// Optionally, a node budget can bound the worst case: when the assignment
/// count of a run exceeds the budget, the search unwinds, the board is
/// restored, `solve` returns `false`, and [BacktrackingSolver::aborted]
/// reports `true` to distinguish the abort from a proven dead end.
#[derive(Clone, Debug)]
pub struct BacktrackingSolver {
    node_budget: Option<u64>,
    moves: u64,
    solve_time: Duration,
    aborted: bool
}

impl BacktrackingSolver {

    /// Creates a new backtracking solver without a node budget: every search
    /// runs to completion.
    pub fn new() -> BacktrackingSolver {
        BacktrackingSolver {
            node_budget: None,
            moves: 0,
            solve_time: Duration::from_secs(0),
            aborted: false
        }
    }

    /// Creates a new backtracking solver whose searches abort after
    /// `node_budget` assignments. See [BacktrackingSolver::aborted] for how
    /// an abort is reported.
    pub fn with_node_budget(node_budget: u64) -> BacktrackingSolver {
        BacktrackingSolver {
            node_budget: Some(node_budget),
            ..BacktrackingSolver::new()
        }
    }

    /// Gets the number of assignments the last call to
    /// [Solver::solve](trait.Solver.html#tymethod.solve) made, including
    /// ones that were later undone.
    pub fn moves_count(&self) -> u64 {
        self.moves
    }

    /// Gets the wall time the last call to
    /// [Solver::solve](trait.Solver.html#tymethod.solve) took.
    pub fn solve_time(&self) -> Duration {
        self.solve_time
    }

    /// Indicates whether the last call to
    /// [Solver::solve](trait.Solver.html#tymethod.solve) was aborted by the
    /// node budget rather than finishing its search.
    pub fn aborted(&self) -> bool {
        self.aborted
    }

    fn reset(&mut self) {
        self.moves = 0;
        self.solve_time = Duration::from_secs(0);
        self.aborted = false;
    }

    fn solve_rec(&mut self, board: &mut SudokuBoard) -> Search {
        let (column, row) = match find_first_empty(board) {
            None => return Search::Found,
            Some(coordinates) => coordinates
        };
        let size = board.size();

        for number in 1..=size {
            if !validator::is_placement_valid(board, column, row, number) {
                continue;
            }

            if let Some(budget) = self.node_budget {
                if self.moves >= budget {
                    return Search::Aborted;
                }
            }

            board.set_cell(column, row, number).unwrap();
            self.moves += 1;

            match self.solve_rec(board) {
                Search::Found => return Search::Found,
                Search::Aborted => {
                    board.clear_cell(column, row).unwrap();
                    return Search::Aborted;
                },
                Search::Exhausted => {
                    board.clear_cell(column, row).unwrap();
                }
            }
        }

        Search::Exhausted
    }
}

impl Default for BacktrackingSolver {
    fn default() -> BacktrackingSolver {
        BacktrackingSolver::new()
    }
}

impl Solver for BacktrackingSolver {

    fn solve(&mut self, board: &mut SudokuBoard) -> bool {
        let start = Instant::now();
        self.reset();

        let result = if board.is_valid() {
            self.solve_rec(board)
        }
        else {
            Search::Exhausted
        };

        self.solve_time = start.elapsed();

        match result {
            Search::Found => true,
            Search::Exhausted => false,
            Search::Aborted => {
                self.aborted = true;
                false
            }
        }
    }

    fn next_move(&self, board: &SudokuBoard) -> Option<SolverMove> {
        let (column, row) = find_first_empty(board)?;
        let size = board.size();

        for number in 1..=size {
            if validator::is_placement_valid(board, column, row, number) {
                return Some(SolverMove {
                    column,
                    row,
                    number,
                    rationale: MoveRationale::FirstValid,
                    confidence: 0.9
                });
            }
        }

        None
    }

    fn all_moves(&self, board: &SudokuBoard) -> Vec<SolverMove> {
        let size = board.size();
        let mut moves = Vec::new();

        for row in 0..size {
            for column in 0..size {
                if board.get_cell(column, row).unwrap().is_some() {
                    continue;
                }

                let candidates = validator::candidates_for(board, column, row);
                let candidate_count = candidates.len();

                for number in candidates.iter() {
                    let (rationale, confidence) = ranked_confidence(board,
                        column, row, number, candidate_count);

                    moves.push(SolverMove {
                        column,
                        row,
                        number,
                        rationale,
                        confidence
                    });
                }
            }
        }

        sort_by_confidence(&mut moves);
        moves
    }
}

fn is_hidden_single_in_row(board: &SudokuBoard, column: usize, row: usize,
        number: usize) -> bool {
    let size = board.size();

    for other_column in 0..size {
        if other_column != column &&
                board.get_cell(other_column, row).unwrap().is_none() &&
                validator::is_placement_valid(board, other_column, row,
                    number) {
            return false;
        }
    }

    true
}

fn is_hidden_single_in_column(board: &SudokuBoard, column: usize, row: usize,
        number: usize) -> bool {
    let size = board.size();

    for other_row in 0..size {
        if other_row != row &&
                board.get_cell(column, other_row).unwrap().is_none() &&
                validator::is_placement_valid(board, column, other_row,
                    number) {
            return false;
        }
    }

    true
}

fn is_hidden_single_in_box(board: &SudokuBoard, column: usize, row: usize,
        number: usize) -> bool {
    let box_size = board.box_size();
    let box_column = (column / box_size) * box_size;
    let box_row = (row / box_size) * box_size;

    for other_row in box_row..(box_row + box_size) {
        for other_column in box_column..(box_column + box_size) {
            if (other_row != row || other_column != column) &&
                    board.get_cell(other_column, other_row).unwrap()
                        .is_none() &&
                    validator::is_placement_valid(board, other_column,
                        other_row, number) {
                return false;
            }
        }
    }

    true
}

pub(crate) fn is_hidden_single(board: &SudokuBoard, column: usize,
        row: usize, number: usize) -> bool {
    is_hidden_single_in_row(board, column, row, number) ||
        is_hidden_single_in_column(board, column, row, number) ||
        is_hidden_single_in_box(board, column, row, number)
}

/// Ranks a locally valid placement. Forced moves score 1.0, hidden singles
/// 0.95, and everything else falls off with the candidate count of the
/// cell.
fn ranked_confidence(board: &SudokuBoard, column: usize, row: usize,
        number: usize, candidate_count: usize) -> (MoveRationale, f64) {
    if candidate_count == 1 {
        return (MoveRationale::NakedSingle, 1.0);
    }

    if is_hidden_single(board, column, row, number) {
        return (MoveRationale::HiddenSingle, 0.95);
    }

    let base = 1.0 / candidate_count as f64;
    let confidence = match candidate_count {
        2 => base * 0.8,
        3 => base * 0.6,
        _ => base * 0.5
    };

    (MoveRationale::CandidateCount, confidence)
}

fn count_solutions_rec(board: &mut SudokuBoard, limit: usize) -> usize {
    let (column, row) = match find_first_empty(board) {
        None => return 1,
        Some(coordinates) => coordinates
    };
    let size = board.size();
    let mut solutions = 0;

    for number in 1..=size {
        if !validator::is_placement_valid(board, column, row, number) {
            continue;
        }

        board.set_cell(column, row, number).unwrap();
        solutions += count_solutions_rec(board, limit - solutions);
        board.clear_cell(column, row).unwrap();

        if solutions >= limit {
            break;
        }
    }

    solutions
}

/// Counts the completions of the given board with the same search as the
/// [BacktrackingSolver], aborting early once `limit` completions have been
/// found. A `limit` of 2 therefore decides uniqueness at a bounded cost,
/// while `usize::MAX` counts all solutions exhaustively.
///
/// The board is not mutated; the search runs on an internal copy. A board
/// that is invalid on entry has 0 completions.
pub fn count_solutions(board: &SudokuBoard, limit: usize) -> usize {
    if limit == 0 || !board.is_valid() {
        return 0;
    }

    let mut search_board = board.clone();
    count_solutions_rec(&mut search_board, limit)
}

#[cfg(test)]
mod tests {

    use super::*;

    // The classic example puzzle; its completion is unique.

    const CLASSIC_PUZZLE: &str = "3;\
        5,3, , ,7, , , , ,\
        6, , ,1,9,5, , , ,\
         ,9,8, , , , ,6, ,\
        8, , , ,6, , , ,3,\
        4, , ,8, ,3, , ,1,\
        7, , , ,2, , , ,6,\
         ,6, , , , ,2,8, ,\
         , , ,4,1,9, , ,5,\
         , , , ,8, , ,7,9";

    const CLASSIC_SOLUTION: &str = "3;\
        5,3,4,6,7,8,9,1,2,\
        6,7,2,1,9,5,3,4,8,\
        1,9,8,3,4,2,5,6,7,\
        8,5,9,7,6,1,4,2,3,\
        4,2,6,8,5,3,7,9,1,\
        7,1,3,9,2,4,8,5,6,\
        9,6,1,5,3,7,2,8,4,\
        2,8,7,4,1,9,6,3,5,\
        3,4,5,2,8,6,1,7,9";

    #[test]
    fn backtracking_solves_classic_puzzle() {
        let mut board = SudokuBoard::parse(CLASSIC_PUZZLE).unwrap();
        let expected = SudokuBoard::parse(CLASSIC_SOLUTION).unwrap();
        let mut solver = BacktrackingSolver::new();

        assert!(solver.solve(&mut board));
        assert_eq!(expected, board);

        let first_row = (0..9)
            .map(|column| board.get_cell(column, 0).unwrap().unwrap())
            .collect::<Vec<_>>();
        assert_eq!(vec![5, 3, 4, 6, 7, 8, 9, 1, 2], first_row);
    }

    #[test]
    fn solution_is_complete_and_valid() {
        let mut board = SudokuBoard::parse(CLASSIC_PUZZLE).unwrap();
        let mut solver = BacktrackingSolver::new();

        assert!(solver.solve(&mut board));
        assert!(board.is_complete());
        assert!(board.is_valid());
    }

    #[test]
    fn empty_boards_are_solvable() {
        for box_size in [2usize, 3usize].iter().cloned() {
            let mut board = SudokuBoard::new(box_size).unwrap();
            let mut solver = BacktrackingSolver::new();

            assert!(solver.solve(&mut board));
            assert!(board.is_complete());
            assert!(board.is_valid());
        }
    }

    #[test]
    fn invalid_board_reported_unsolvable() {
        // Two 1s in the first row.
        let mut board =
            SudokuBoard::parse("2;1,,1,,,,,,,,,,,,,").unwrap();
        let before = board.clone();
        let mut solver = BacktrackingSolver::new();

        assert!(!solver.solve(&mut board));
        assert!(!solver.aborted());
        assert_eq!(before, board);
    }

    #[test]
    fn dead_end_board_reported_unsolvable() {
        // Valid, but the top-right cell has no candidate left: its row
        // holds 1, 2, 3 and its column holds 4.
        let mut board =
            SudokuBoard::parse("2;1,2,3,,,,,4,,,,,,,,").unwrap();
        let before = board.clone();
        let mut solver = BacktrackingSolver::new();

        assert!(board.is_valid());
        assert!(!solver.solve(&mut board));
        assert!(!solver.aborted());
        assert_eq!(before, board);
    }

    #[test]
    fn telemetry_tracks_assignments() {
        let mut board = SudokuBoard::parse(CLASSIC_PUZZLE).unwrap();
        let empty_cells = 81 - board.count_clues();
        let mut solver = BacktrackingSolver::new();

        assert!(solver.solve(&mut board));
        assert!(solver.moves_count() >= empty_cells as u64);
    }

    #[test]
    fn node_budget_aborts_and_restores() {
        let mut board = SudokuBoard::new(3).unwrap();
        let mut solver = BacktrackingSolver::with_node_budget(5);

        assert!(!solver.solve(&mut board));
        assert!(solver.aborted());
        assert!(board.is_board_empty());
    }

    #[test]
    fn node_budget_leaves_easy_searches_alone() {
        let mut board = SudokuBoard::parse(CLASSIC_PUZZLE).unwrap();
        let mut solver = BacktrackingSolver::with_node_budget(1_000_000);

        assert!(solver.solve(&mut board));
        assert!(!solver.aborted());
        assert!(board.is_complete());
    }

    #[test]
    fn next_move_fills_first_empty_cell() {
        let board = SudokuBoard::parse(CLASSIC_PUZZLE).unwrap();
        let solver = BacktrackingSolver::new();
        let solver_move = solver.next_move(&board).unwrap();

        // The first empty cell is (2, 0); 1 is its lowest valid digit.
        assert_eq!(2, solver_move.column);
        assert_eq!(0, solver_move.row);
        assert_eq!(1, solver_move.number);
        assert_eq!(MoveRationale::FirstValid, solver_move.rationale);
    }

    #[test]
    fn next_move_on_complete_board_is_none() {
        let board = SudokuBoard::parse(CLASSIC_SOLUTION).unwrap();
        let solver = BacktrackingSolver::new();

        assert_eq!(None, solver.next_move(&board));
    }

    #[test]
    fn all_moves_are_locally_valid_and_sorted() {
        let board = SudokuBoard::parse(CLASSIC_PUZZLE).unwrap();
        let solver = BacktrackingSolver::new();
        let moves = solver.all_moves(&board);

        assert!(!moves.is_empty());

        for window in moves.windows(2) {
            assert!(window[0].confidence >= window[1].confidence,
                "Moves are not sorted by descending confidence.");
        }

        for solver_move in moves {
            assert!(validator::is_placement_valid(&board, solver_move.column,
                solver_move.row, solver_move.number));
            assert!(solver_move.confidence > 0.0 &&
                solver_move.confidence <= 1.0);
        }
    }

    #[test]
    fn all_moves_rank_forced_moves_highest() {
        // The first row misses only its 4.
        let mut board = SudokuBoard::new(3).unwrap();

        for (column, number) in
                [5, 3, 0, 6, 7, 8, 9, 1, 2].iter().cloned().enumerate() {
            if number != 0 {
                board.set_cell(column, 0, number).unwrap();
            }
        }

        let solver = BacktrackingSolver::new();
        let moves = solver.all_moves(&board);
        let best = &moves[0];

        assert_eq!((2, 0, 4), (best.column, best.row, best.number));
        assert_eq!(MoveRationale::NakedSingle, best.rationale);
        assert_eq!(1.0, best.confidence);
    }

    #[test]
    fn count_solutions_on_unique_puzzle() {
        let board = SudokuBoard::parse(CLASSIC_PUZZLE).unwrap();

        assert_eq!(1, count_solutions(&board, 2));
        assert_eq!(1, count_solutions(&board, usize::MAX));
    }

    #[test]
    fn count_solutions_on_complete_board() {
        let board = SudokuBoard::parse(CLASSIC_SOLUTION).unwrap();
        assert_eq!(1, count_solutions(&board, usize::MAX));
    }

    #[test]
    fn count_solutions_detects_ambiguity() {
        // Clearing an unavoidable rectangle of 1s and 4s yields exactly two
        // completions.
        let board = SudokuBoard::parse("2;\
            2,3,4,1,\
             , ,2,3,\
             , ,3,2,\
            3,2,1,4").unwrap();

        assert_eq!(2, count_solutions(&board, usize::MAX));
        assert_eq!(2, count_solutions(&board, 2));
        assert_eq!(1, count_solutions(&board, 1));
    }

    #[test]
    fn count_solutions_on_invalid_board_is_zero() {
        let board = SudokuBoard::parse("2;1,,1,,,,,,,,,,,,,").unwrap();
        assert_eq!(0, count_solutions(&board, usize::MAX));
    }

    #[test]
    fn count_solutions_does_not_mutate() {
        let board = SudokuBoard::parse(CLASSIC_PUZZLE).unwrap();
        let before = board.clone();

        count_solutions(&board, usize::MAX);
        assert_eq!(before, board);
    }
}
