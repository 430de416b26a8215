//! This module contains logic for generating random Sudoku.
//!
//! Generation of Sudoku puzzles is done by first generating a full solution
//! grid with a [Generator] and then clearing a difficulty-dependent number
//! of cells using a [Carver].

use crate::SudokuGrid;
use crate::error::{SudokuError, SudokuResult};
use crate::rules;

use rand::Rng;
use rand::rngs::ThreadRng;

/// A generator randomly fills a [SudokuGrid] so that every row, column, and
/// block contains each digit exactly once. It uses a random number generator
/// to decide the content. For most cases, sensible defaults are provided by
/// [Generator::new_default].
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

pub(crate) fn shuffle<T>(rng: &mut impl Rng, values: impl Iterator<Item = T>)
        -> Vec<T> {
    let mut vec: Vec<T> = values.collect();
    let len = vec.len();

    for i in 0..len.saturating_sub(1) {
        let j = rng.gen_range(i..len);
        vec.swap(i, j);
    }

    vec
}

impl<R: Rng> Generator<R> {

    /// Creates a new generator that uses the given random number generator
    /// to generate random digits. Seeding it makes generation reproducible.
    pub fn new(rng: R) -> Generator<R> {
        Generator {
            rng
        }
    }

    fn fill_rec(&mut self, grid: &mut SudokuGrid, column: usize, row: usize)
            -> bool {
        let size = SudokuGrid::SIZE;

        if row == size {
            return true;
        }

        let next_column = (column + 1) % size;
        let next_row =
            if next_column == 0 { row + 1 } else { row };

        if grid.get_cell(column, row).unwrap().is_some() {
            return self.fill_rec(grid, next_column, next_row);
        }

        let candidates = rules::candidates(grid, column, row).unwrap();

        if candidates.is_empty() {
            return false;
        }

        for number in shuffle(&mut self.rng, candidates.iter()) {
            grid.set_cell(column, row, number).unwrap();

            if self.fill_rec(grid, next_column, next_row) {
                return true;
            }

            grid.clear_cell(column, row).unwrap();
        }

        false
    }

    /// Fills the given [SudokuGrid] with random digits that satisfy the
    /// classic rules and match all already present digits. The candidate
    /// digits are shuffled anew at every cell, which is what makes generated
    /// solutions vary run-to-run.
    ///
    /// Starting from an empty grid, this always succeeds. If the caller
    /// passes a grid whose pre-existing digits admit no completion, an error
    /// is returned and the grid remains unchanged.
    ///
    /// # Errors
    ///
    /// * `SudokuError::UnfillableGrid` If there are no sets of digits that
    /// can be entered into the grid without violating the rules or changing
    /// digits already present.
    pub fn fill(&mut self, grid: &mut SudokuGrid) -> SudokuResult<()> {
        if self.fill_rec(grid, 0, 0) {
            Ok(())
        }
        else {
            Err(SudokuError::UnfillableGrid)
        }
    }

    /// Generates a new random solution grid. It is guaranteed that
    /// [rules::is_valid_solution] returns `true` on the result.
    ///
    /// # Errors
    ///
    /// None in practice: filling an empty grid always succeeds. The result
    /// type mirrors [Generator::fill], whose error path is unreachable here.
    pub fn generate(&mut self) -> SudokuResult<SudokuGrid> {
        let mut grid = SudokuGrid::new();
        self.fill(&mut grid)?;
        Ok(grid)
    }
}

/// A carver takes the output of a [Generator] and clears a requested number
/// of cells, chosen uniformly at random without replacement, to produce the
/// puzzle a player sees. A random number generator decides which cells are
/// cleared.
///
/// Carving is unconditional: the result is *not* checked for unique
/// solvability. This matches the behavior of the surrounding game, whose win
/// check compares against the one retained solution.
pub struct Carver<R: Rng> {
    rng: R
}

impl Carver<ThreadRng> {

    /// Creates a new carver that uses a [ThreadRng] to decide which cells
    /// are cleared.
    pub fn new_default() -> Carver<ThreadRng> {
        Carver::new(rand::thread_rng())
    }
}

impl<R: Rng> Carver<R> {

    /// Creates a new carver that uses the given random number generator to
    /// decide which cells are cleared.
    pub fn new(rng: R) -> Carver<R> {
        Carver {
            rng
        }
    }

    /// Returns a copy of `solution` in which exactly
    /// `min(remove_count, 81)` distinct cells have been cleared, chosen
    /// uniformly at random without replacement. The input grid is never
    /// mutated.
    ///
    /// Requests above 81 are clamped to 81, the degenerate case in which
    /// every cell is cleared. This is a defined boundary, not an error.
    pub fn carve(&mut self, solution: &SudokuGrid, remove_count: usize)
            -> SudokuGrid {
        let remove_count = remove_count.min(SudokuGrid::CELL_COUNT);
        let mut puzzle = solution.clone();
        let positions = shuffle(&mut self.rng, 0..SudokuGrid::CELL_COUNT);

        for &position in positions.iter().take(remove_count) {
            let column = position % SudokuGrid::SIZE;
            let row = position / SudokuGrid::SIZE;
            puzzle.clear_cell(column, row).unwrap();
        }

        puzzle
    }
}
