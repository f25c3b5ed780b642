use criterion::{
    criterion_group,
    criterion_main,
    Criterion,
    SamplingMode
};

use sudoku_engine::SudokuBoard;
use sudoku_engine::generator::{Difficulty, Generator};
use sudoku_engine::solver::{count_solutions, BacktrackingSolver, Solver};
use sudoku_engine::solver::strategy::PropagationSolver;

// Explanation of benchmark classes:
//
// backtracking: exhaustive search on a classic 9x9 puzzle.
// propagation: deductive solving on the same puzzle, running until solved
//              or no strategy makes progress.
// solution counting: the uniqueness check of the generator, run without an
//                    early exit.
// generation: a full generate + reduce cycle for an easy 9x9 puzzle.

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

fn benchmark_backtracking(c: &mut Criterion) {
    let board = SudokuBoard::parse(CLASSIC_PUZZLE).unwrap();

    c.bench_function("backtracking", |b| b.iter(|| {
        let mut board = board.clone();
        let mut solver = BacktrackingSolver::new();
        assert!(solver.solve(&mut board));
        board
    }));
}

fn benchmark_propagation(c: &mut Criterion) {
    let board = SudokuBoard::parse(CLASSIC_PUZZLE).unwrap();

    c.bench_function("propagation", |b| b.iter(|| {
        let mut board = board.clone();
        let mut solver = PropagationSolver::new();
        solver.solve(&mut board);
        board
    }));
}

fn benchmark_solution_counting(c: &mut Criterion) {
    let board = SudokuBoard::parse(CLASSIC_PUZZLE).unwrap();

    c.bench_function("solution counting", |b| b.iter(|| {
        assert_eq!(1, count_solutions(&board, usize::MAX));
    }));
}

fn benchmark_generation(c: &mut Criterion) {
    let mut group = c.benchmark_group("generation");
    group.sampling_mode(SamplingMode::Flat);
    group.sample_size(10);

    group.bench_function("easy 9x9", |b| b.iter(|| {
        let mut generator = Generator::new_default();
        let mut board = generator.generate(3).unwrap();
        generator.generate_puzzle(&mut board, Difficulty::Easy).unwrap();
        board
    }));

    group.finish();
}

criterion_group!(benches,
    benchmark_backtracking,
    benchmark_propagation,
    benchmark_solution_counting,
    benchmark_generation);
criterion_main!(benches);
