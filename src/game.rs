//! This module contains the state of a single game session: the puzzle, the
//! retained solution, and the player's working grid, together with the
//! bookkeeping a front end renders, such as score, mistakes, pencil-mark
//! notes, hints, and the solved state.
//!
//! The session guards clue cells and evaluates the win condition after every
//! edit, but it does not prevent rule violations on the player grid:
//! conflicts are detected, not rejected, so a front end can highlight them.

use crate::{SudokuGrid, index};
use crate::error::{SudokuError, SudokuResult};
use crate::generator::{Carver, Generator};
use crate::rules;
use crate::util::DigitSet;

use rand::Rng;
use rand::rngs::ThreadRng;

use serde::{Deserialize, Serialize};

use std::time::{Duration, Instant};

/// The difficulty presets of the game, each defining how many cells are
/// carved out of the solution and how strongly correct placements are
/// weighted in the score.
///
/// The [Carver](crate::generator::Carver) accepts any removal count; these
/// presets are a convenience, not a protocol.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum Difficulty {

    /// 25 cells removed.
    Easy,

    /// 40 cells removed.
    Hard,

    /// 50 cells removed.
    Expert,

    /// 65 cells removed.
    Torture
}

impl Difficulty {

    /// All difficulty presets, in ascending order, for front ends that list
    /// them in a menu.
    pub const ALL: [Difficulty; 4] = [
        Difficulty::Easy,
        Difficulty::Hard,
        Difficulty::Expert,
        Difficulty::Torture
    ];

    /// The number of cells the carver removes from the solution for this
    /// difficulty.
    pub fn remove_count(self) -> usize {
        match self {
            Difficulty::Easy => 25,
            Difficulty::Hard => 40,
            Difficulty::Expert => 50,
            Difficulty::Torture => 65
        }
    }

    /// The factor by which the score of a correct placement is multiplied.
    pub fn score_multiplier(self) -> usize {
        match self {
            Difficulty::Easy => 1,
            Difficulty::Hard => 2,
            Difficulty::Expert => 3,
            Difficulty::Torture => 4
        }
    }

    /// The display name of this difficulty, as used in leaderboard entries.
    pub fn name(self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Hard => "Hard",
            Difficulty::Expert => "Expert",
            Difficulty::Torture => "Torture"
        }
    }
}

/// The lifecycle state of a [Game]. A session starts in `InProgress`; once
/// the player grid matches the solution it transitions to `Solved`, which is
/// terminal for the session.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum GameState {

    /// The puzzle has been generated and the player is filling cells.
    InProgress,

    /// The player grid matched the solution. Further edits do not leave this
    /// state; the surrounding front end is expected to stop routing them.
    Solved
}

/// The outcome of a single [Game::place] call, for front ends that give
/// immediate feedback on an edit.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Placement {

    /// Whether the placed digit matches the solution at that cell.
    pub correct: bool,

    /// Whether the cell conflicts with another cell after the placement.
    pub conflict: bool,

    /// The points awarded for this placement. Nonzero only for correct
    /// placements into cells that were never revealed by a hint.
    pub points: usize,

    /// Whether the game is solved after this placement.
    pub solved: bool
}

/// A single game session. It owns the three grids of a game - the immutable
/// `puzzle` and `solution` created at generation time and the mutable
/// `player` grid - plus the random number generator used for hints.
///
/// Edits are only accepted on non-clue cells. The player grid is allowed to
/// be transiently invalid; use [Game::has_conflict] to highlight offending
/// cells.
pub struct Game<R: Rng> {
    rng: R,
    difficulty: Difficulty,
    puzzle: SudokuGrid,
    solution: SudokuGrid,
    player: SudokuGrid,
    notes: Vec<DigitSet>,
    hinted: Vec<bool>,
    score: usize,
    mistakes: usize,
    state: GameState,
    started_at: Instant
}

impl Game<ThreadRng> {

    /// Creates a new game of the given difficulty using a [ThreadRng] for
    /// generation, carving, and hints.
    pub fn new_default(difficulty: Difficulty)
            -> SudokuResult<Game<ThreadRng>> {
        Game::new(difficulty, rand::thread_rng())
    }
}

impl<R: Rng> Game<R> {

    /// Creates a new game of the given difficulty. A fresh solution is
    /// generated, the difficulty's number of cells is carved out of a copy
    /// of it, and the player grid starts as a copy of the resulting puzzle.
    /// The given random number generator drives all of it, so a seeded
    /// generator reproduces the same game.
    ///
    /// # Errors
    ///
    /// None in practice; see [Generator::generate].
    pub fn new(difficulty: Difficulty, mut rng: R) -> SudokuResult<Game<R>> {
        let solution = Generator::new(&mut rng).generate()?;
        let puzzle = Carver::new(&mut rng)
            .carve(&solution, difficulty.remove_count());
        let player = puzzle.clone();

        Ok(Game {
            rng,
            difficulty,
            puzzle,
            solution,
            player,
            notes: vec![DigitSet::empty(); SudokuGrid::CELL_COUNT],
            hinted: vec![false; SudokuGrid::CELL_COUNT],
            score: 0,
            mistakes: 0,
            state: GameState::InProgress,
            started_at: Instant::now()
        })
    }

    /// Indicates whether the cell at the given position is a clue, i.e. was
    /// part of the carved puzzle and can never be edited.
    ///
    /// # Errors
    ///
    /// If either `column` or `row` are not in the range `[0, 9[`. In that
    /// case, `SudokuError::OutOfBounds` is returned.
    pub fn is_clue(&self, column: usize, row: usize) -> SudokuResult<bool> {
        Ok(self.puzzle.get_cell(column, row)?.is_some())
    }

    /// Places a digit into a non-clue cell of the player grid and updates
    /// score, mistakes, and the solved state.
    ///
    /// A correct placement into a cell that was never revealed by a hint is
    /// awarded `100 * (10 - c) * multiplier` points, where `c` is the number
    /// of candidate digits the cell offered before the placement - the fewer
    /// options remained, the higher the reward. A placement that introduces
    /// a conflict where there was none increments the mistake counter.
    ///
    /// # Errors
    ///
    /// * `SudokuError::OutOfBounds` If either `column` or `row` are not in
    /// the range `[0, 9[`.
    /// * `SudokuError::InvalidNumber` If `digit` is not in the range
    /// `[1, 9]`.
    /// * `SudokuError::ClueCell` If the cell is a clue.
    pub fn place(&mut self, column: usize, row: usize, digit: usize)
            -> SudokuResult<Placement> {
        if self.is_clue(column, row)? {
            return Err(SudokuError::ClueCell);
        }

        if digit == 0 || digit > SudokuGrid::SIZE {
            return Err(SudokuError::InvalidNumber);
        }

        let old_conflict = rules::has_conflict(&self.player, column, row)?;

        // Candidates are counted on the emptied cell so overwriting a
        // previous entry weighs the same as filling the cell fresh.
        self.player.clear_cell(column, row)?;
        let options = rules::candidates(&self.player, column, row)?.len();
        self.player.set_cell(column, row, digit)?;

        let conflict = rules::has_conflict(&self.player, column, row)?;

        if conflict && !old_conflict {
            self.mistakes += 1;
        }

        let correct = self.solution.has_number(column, row, digit)?;
        let mut points = 0;

        if correct && !self.hinted[index(column, row)] {
            points = 100 * (SudokuGrid::SIZE - options + 1)
                * self.difficulty.score_multiplier();
            self.score += points;
        }

        if rules::is_solved(&self.player, &self.solution) {
            self.state = GameState::Solved;
        }

        Ok(Placement {
            correct,
            conflict,
            points,
            solved: self.state == GameState::Solved
        })
    }

    /// Clears a non-clue cell of the player grid. If the cleared entry was
    /// conflicting, the mistake counter is decremented again (it never drops
    /// below zero).
    ///
    /// # Errors
    ///
    /// * `SudokuError::OutOfBounds` If either `column` or `row` are not in
    /// the range `[0, 9[`.
    /// * `SudokuError::ClueCell` If the cell is a clue.
    pub fn erase(&mut self, column: usize, row: usize) -> SudokuResult<()> {
        if self.is_clue(column, row)? {
            return Err(SudokuError::ClueCell);
        }

        let old_conflict = rules::has_conflict(&self.player, column, row)?;
        self.player.clear_cell(column, row)?;

        if old_conflict {
            self.mistakes = self.mistakes.saturating_sub(1);
        }

        Ok(())
    }

    /// Reveals a uniformly chosen empty cell of the player grid by filling
    /// in its solution digit, and returns `(column, row, digit)` for it.
    /// Hinted cells are remembered and never awarded points, even if the
    /// player later erases and re-enters the digit. Returns `None` if no
    /// empty cell remains.
    pub fn hint(&mut self) -> Option<(usize, usize, usize)> {
        let mut empties = Vec::new();

        for row in 0..SudokuGrid::SIZE {
            for column in 0..SudokuGrid::SIZE {
                if self.player.get_cell(column, row).unwrap().is_none() {
                    empties.push((column, row));
                }
            }
        }

        if empties.is_empty() {
            return None;
        }

        let (column, row) = empties[self.rng.gen_range(0..empties.len())];
        let digit = self.solution.get_cell(column, row).unwrap().unwrap();
        self.player.set_cell(column, row, digit).unwrap();
        self.hinted[index(column, row)] = true;

        if rules::is_solved(&self.player, &self.solution) {
            self.state = GameState::Solved;
        }

        Some((column, row, digit))
    }

    /// Toggles a pencil-mark note on an empty cell: the digit is added if
    /// absent and removed if present. Notes on non-empty cells are not
    /// stored; in that case `Ok(false)` is returned without a change.
    /// Returns whether the note is present afterwards.
    ///
    /// # Errors
    ///
    /// * `SudokuError::OutOfBounds` If either `column` or `row` are not in
    /// the range `[0, 9[`.
    /// * `SudokuError::InvalidNumber` If `digit` is not in the range
    /// `[1, 9]`.
    pub fn toggle_note(&mut self, column: usize, row: usize, digit: usize)
            -> SudokuResult<bool> {
        if self.player.get_cell(column, row)?.is_some() {
            if digit == 0 || digit > SudokuGrid::SIZE {
                return Err(SudokuError::InvalidNumber);
            }

            return Ok(false);
        }

        self.notes[index(column, row)].toggle(digit)
    }

    /// Removes all pencil-mark notes from the given cell.
    ///
    /// # Errors
    ///
    /// If either `column` or `row` are not in the range `[0, 9[`. In that
    /// case, `SudokuError::OutOfBounds` is returned.
    pub fn clear_notes(&mut self, column: usize, row: usize)
            -> SudokuResult<()> {
        self.player.get_cell(column, row)?;
        self.notes[index(column, row)].clear();
        Ok(())
    }

    /// Gets the pencil-mark notes currently stored for the given cell.
    ///
    /// # Errors
    ///
    /// If either `column` or `row` are not in the range `[0, 9[`. In that
    /// case, `SudokuError::OutOfBounds` is returned.
    pub fn notes(&self, column: usize, row: usize) -> SudokuResult<DigitSet> {
        self.player.get_cell(column, row)?;
        Ok(self.notes[index(column, row)])
    }

    /// Indicates whether the given cell of the player grid conflicts with
    /// another cell. See [rules::has_conflict].
    ///
    /// # Errors
    ///
    /// If either `column` or `row` are not in the range `[0, 9[`. In that
    /// case, `SudokuError::OutOfBounds` is returned.
    pub fn has_conflict(&self, column: usize, row: usize)
            -> SudokuResult<bool> {
        rules::has_conflict(&self.player, column, row)
    }

    /// Computes the candidate digits for the given cell of the player grid.
    /// See [rules::candidates].
    ///
    /// # Errors
    ///
    /// If either `column` or `row` are not in the range `[0, 9[`. In that
    /// case, `SudokuError::OutOfBounds` is returned.
    pub fn candidates(&self, column: usize, row: usize)
            -> SudokuResult<DigitSet> {
        rules::candidates(&self.player, column, row)
    }

    /// Computes the set of digits of which all nine occurrences have been
    /// correctly placed on the player grid. Front ends gray these out in
    /// their digit pickers.
    pub fn completed_digits(&self) -> DigitSet {
        let mut completed = DigitSet::empty();

        for digit in 1..=SudokuGrid::SIZE {
            let placed_correct = (0..SudokuGrid::CELL_COUNT)
                .filter(|&i| {
                    let column = i % SudokuGrid::SIZE;
                    let row = i / SudokuGrid::SIZE;
                    self.player.has_number(column, row, digit).unwrap() &&
                        self.solution.has_number(column, row, digit).unwrap()
                })
                .count();

            if placed_correct == SudokuGrid::SIZE {
                completed.insert(digit).unwrap();
            }
        }

        completed
    }

    /// Gets the difficulty this game was generated with.
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Gets the lifecycle state of this game.
    pub fn state(&self) -> GameState {
        self.state
    }

    /// Indicates whether this game has been solved.
    pub fn is_solved(&self) -> bool {
        self.state == GameState::Solved
    }

    /// Gets the current score.
    pub fn score(&self) -> usize {
        self.score
    }

    /// Gets the current number of mistakes, i.e. placements that introduced
    /// a conflict, less the conflicting entries erased again.
    pub fn mistakes(&self) -> usize {
        self.mistakes
    }

    /// Gets the time elapsed since this game was created.
    pub fn elapsed(&self) -> Duration {
        self.started_at.elapsed()
    }

    /// Gets a reference to the carved puzzle. Its non-empty cells are the
    /// clues of this game. This grid never changes.
    pub fn puzzle(&self) -> &SudokuGrid {
        &self.puzzle
    }

    /// Gets a reference to the full solution this game retains for win
    /// checking and hints. This grid never changes.
    pub fn solution(&self) -> &SudokuGrid {
        &self.solution
    }

    /// Gets a reference to the player's working grid.
    pub fn player(&self) -> &SudokuGrid {
        &self.player
    }
}
