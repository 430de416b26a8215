use crate::SudokuGrid;
use crate::game::{Difficulty, Game, GameState};
use crate::generator::{Carver, Generator};
use crate::leaderboard::{Leaderboard, ScoreEntry};
use crate::rules;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

const ITERATIONS_PER_RUN: usize = 30;

/// The removal counts the difficulty presets and the front ends built on
/// them actually request.
const OBSERVED_REMOVE_COUNTS: [usize; 8] = [25, 35, 40, 45, 50, 60, 65, 70];

#[test]
fn generated_solutions_always_valid() {
    let mut generator = Generator::new_default();

    for _ in 0..ITERATIONS_PER_RUN {
        let solution = generator.generate().unwrap();
        assert!(solution.is_full(), "Generated solution is not full.");
        assert!(rules::is_valid_solution(&solution),
            "Generated solution violates the rules.");
    }
}

#[test]
fn carving_preserves_clues_for_all_observed_counts() {
    let mut generator = Generator::new_default();
    let mut carver = Carver::new_default();

    for &remove_count in OBSERVED_REMOVE_COUNTS.iter() {
        let solution = generator.generate().unwrap();
        let puzzle = carver.carve(&solution, remove_count);

        assert_eq!(SudokuGrid::CELL_COUNT - remove_count,
            puzzle.count_clues(),
            "Carving removed the wrong number of cells.");
        assert!(puzzle.is_subset(&solution),
            "Carving changed a clue value.");
    }
}

#[test]
fn full_generation_scenario_with_fixed_seed() {
    let mut rng = ChaCha8Rng::seed_from_u64(2024);
    let solution = Generator::new(&mut rng).generate().unwrap();

    assert!(solution.is_full());
    assert!(rules::is_valid_solution(&solution));

    let puzzle = Carver::new(&mut rng).carve(&solution, 45);
    let empty_cells = puzzle.cells().iter()
        .filter(|c| c.is_none())
        .count();

    assert_eq!(36, puzzle.count_clues());
    assert_eq!(45, empty_cells);

    // The same seed reproduces the exact same puzzle and solution.
    let mut rng = ChaCha8Rng::seed_from_u64(2024);
    let solution_again = Generator::new(&mut rng).generate().unwrap();
    let puzzle_again = Carver::new(&mut rng).carve(&solution_again, 45);

    assert_eq!(solution, solution_again);
    assert_eq!(puzzle, puzzle_again);
}

#[test]
fn conflict_injection_flags_both_duplicates() {
    let mut generator = Generator::new_default();

    for _ in 0..ITERATIONS_PER_RUN {
        let mut grid = generator.generate().unwrap();

        // Copy the neighbor's digit into the first cell of the row.
        let duplicate = grid.get_cell(1, 0).unwrap().unwrap();
        grid.set_cell(0, 0, duplicate).unwrap();

        assert!(rules::has_conflict(&grid, 0, 0).unwrap(),
            "Overwritten cell not reported as conflicting.");
        assert!(rules::has_conflict(&grid, 1, 0).unwrap(),
            "Pre-existing duplicate not reported as conflicting.");
    }
}

#[test]
fn candidates_match_conflict_freedom_on_carved_puzzle() {
    let mut rng = ChaCha8Rng::seed_from_u64(99);
    let solution = Generator::new(&mut rng).generate().unwrap();
    let mut puzzle = Carver::new(&mut rng).carve(&solution, 50);

    for row in 0..SudokuGrid::SIZE {
        for column in 0..SudokuGrid::SIZE {
            if puzzle.get_cell(column, row).unwrap().is_some() {
                continue;
            }

            let candidates = rules::candidates(&puzzle, column, row)
                .unwrap();

            for digit in 1..=SudokuGrid::SIZE {
                puzzle.set_cell(column, row, digit).unwrap();
                let conflicts =
                    rules::has_conflict(&puzzle, column, row).unwrap();
                assert_eq!(candidates.contains(digit), !conflicts);
                puzzle.clear_cell(column, row).unwrap();
            }
        }
    }
}

#[test]
fn filling_every_open_cell_correctly_wins_the_game() {
    let mut game =
        Game::new(Difficulty::Hard, ChaCha8Rng::seed_from_u64(7)).unwrap();
    let mut open_cells = Vec::new();

    for row in 0..SudokuGrid::SIZE {
        for column in 0..SudokuGrid::SIZE {
            if !game.is_clue(column, row).unwrap() {
                open_cells.push((column, row));
            }
        }
    }

    assert_eq!(Difficulty::Hard.remove_count(), open_cells.len());

    let (&last, rest) = open_cells.split_last().unwrap();

    for &(column, row) in rest {
        let digit = game.solution().get_cell(column, row).unwrap().unwrap();
        let placement = game.place(column, row, digit).unwrap();
        assert!(placement.correct);
        assert!(!placement.solved, "Game solved too early.");
    }

    // One cell off the solution is not a win.
    assert_eq!(GameState::InProgress, game.state());

    let (column, row) = last;
    let digit = game.solution().get_cell(column, row).unwrap().unwrap();
    let placement = game.place(column, row, digit).unwrap();

    assert!(placement.solved);
    assert_eq!(GameState::Solved, game.state());
    assert_eq!(0, game.mistakes());
    assert!(game.score() > 0);
}

#[test]
fn solved_game_can_be_logged() {
    let mut game =
        Game::new(Difficulty::Easy, ChaCha8Rng::seed_from_u64(11)).unwrap();

    while game.hint().is_some() { }

    assert!(game.is_solved());

    let path = std::env::temp_dir().join(
        format!("sudoku_classic_flow_{}.txt", std::process::id()));
    let _ = std::fs::remove_file(&path);
    let leaderboard = Leaderboard::new(&path);
    let seconds = game.elapsed().as_secs();

    leaderboard.append(&ScoreEntry {
        nickname: "ada".to_string(),
        score: game.score(),
        time: format!("{:02}:{:02}", seconds / 60, seconds % 60),
        date: "2024-11-02 19:03".to_string(),
        difficulty: game.difficulty().name().to_string()
    }).unwrap();

    let entries = leaderboard.load().unwrap();

    assert_eq!(1, entries.len());
    assert_eq!("Easy", entries[0].difficulty);
    assert_eq!(0, entries[0].score);

    std::fs::remove_file(&path).unwrap();
}
