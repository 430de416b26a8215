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

//! This crate implements an easy-to-understand classic 9x9 Sudoku engine. It
//! supports the following key features:
//!
//! * Parsing and printing grid codes
//! * Generating complete random solutions with a backtracking filler
//! * Carving puzzles out of solutions by difficulty
//! * Tracking rule conflicts and candidate digits on a live player grid
//! * Running score-keeping game sessions with notes, hints and mistakes
//! * Appending finished games to a plain-text leaderboard log
//!
//! # Parsing and printing grids
//!
//! See [SudokuGrid::parse] for the exact format of a grid code. Codes can be
//! used to exchange grids between programs and tests.
//!
//! ```
//! use sudoku_classic::SudokuGrid;
//!
//! // 80 commas separate 81 empty cells.
//! let mut grid = SudokuGrid::parse(&",".repeat(80)).unwrap();
//! grid.set_cell(4, 0, 7).unwrap();
//!
//! assert_eq!(Some(7), grid.get_cell(4, 0).unwrap());
//! assert_eq!(1, grid.count_clues());
//! ```
//!
//! # Generating puzzles
//!
//! Generation is done in two steps: a [Generator](generator::Generator)
//! fills an empty grid with a complete random solution, then a
//! [Carver](generator::Carver) clears a difficulty-dependent number of cells.
//! Both own their random number generator, for which we use the `Rng` trait
//! from the [rand](https://rust-random.github.io/rand/rand/index.html)
//! crate, so a seeded generator reproduces the same puzzle.
//!
//! ```
//! use sudoku_classic::generator::{Carver, Generator};
//! use sudoku_classic::rules;
//!
//! let mut generator = Generator::new_default();
//! let solution = generator.generate().unwrap();
//! assert!(rules::is_valid_solution(&solution));
//!
//! let mut carver = Carver::new_default();
//! let puzzle = carver.carve(&solution, 45);
//! assert_eq!(36, puzzle.count_clues());
//! ```
//!
//! # Tracking conflicts and candidates
//!
//! The [rules] module evaluates any grid snapshot: a cell conflicts if its
//! digit appears more than once in its row, column or block, and an empty
//! cell offers exactly the digits that would not conflict there. Both
//! duplicates of a digit are reported as conflicting, mirroring how a front
//! end would highlight them.
//!
//! ```
//! use sudoku_classic::SudokuGrid;
//! use sudoku_classic::rules;
//!
//! let mut grid = SudokuGrid::parse(&",".repeat(80)).unwrap();
//! grid.set_cell(0, 0, 5).unwrap();
//! grid.set_cell(3, 0, 5).unwrap();
//!
//! assert!(rules::has_conflict(&grid, 0, 0).unwrap());
//! assert!(rules::has_conflict(&grid, 3, 0).unwrap());
//! assert!(!rules::candidates(&grid, 1, 0).unwrap().contains(5));
//! ```
//!
//! # Playing a game
//!
//! A [Game](game::Game) bundles the puzzle, the retained solution and the
//! player's working grid, guards clue cells, counts mistakes and scores
//! correct placements by how constrained they were.
//!
//! ```
//! use sudoku_classic::game::{Difficulty, Game, GameState};
//!
//! let mut game = Game::new_default(Difficulty::Easy).unwrap();
//! assert_eq!(GameState::InProgress, game.state());
//!
//! // Let the engine reveal a random empty cell for us.
//! let (column, row, digit) = game.hint().unwrap();
//! assert_eq!(Some(digit), game.player().get_cell(column, row).unwrap());
//! ```

pub mod error;
pub mod game;
pub mod generator;
pub mod leaderboard;
pub mod rules;
pub mod util;

#[cfg(test)]
mod random_tests;

use error::{
    SudokuError,
    SudokuParseError,
    SudokuParseResult,
    SudokuResult
};

use serde::{Deserialize, Serialize};

use std::convert::TryFrom;

/// A classic Sudoku grid of 9x9 cells, organized into nine 3x3 blocks. Each
/// cell may or may not be occupied by a digit from 1 to 9. Cells are
/// addressed by `(column, row)` coordinates, both in the range `[0, 8]`,
/// which is the only addressing scheme used throughout this crate.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(into = "Vec<Option<usize>>")]
#[serde(try_from = "Vec<Option<usize>>")]
pub struct SudokuGrid {
    cells: Vec<Option<usize>>
}

pub(crate) fn index(column: usize, row: usize) -> usize {
    row * SudokuGrid::SIZE + column
}

fn to_string(cell: &Option<usize>) -> String {
    if let Some(number) = cell {
        number.to_string()
    }
    else {
        String::from("")
    }
}

impl SudokuGrid {

    /// The number of cells along one axis of the grid.
    pub const SIZE: usize = 9;

    /// The number of cells along one axis of a block.
    pub const BLOCK_SIZE: usize = 3;

    /// The total number of cells in the grid.
    pub const CELL_COUNT: usize = SudokuGrid::SIZE * SudokuGrid::SIZE;

    /// Creates a new, empty Sudoku grid.
    pub fn new() -> SudokuGrid {
        SudokuGrid {
            cells: vec![None; SudokuGrid::CELL_COUNT]
        }
    }

    /// Parses a code encoding a Sudoku grid. The code is a comma-separated
    /// list of 81 entries, which are either empty or a digit from 1 to 9.
    /// The entries are assigned left-to-right, top-to-bottom, where each row
    /// is completed before the next one is started. Whitespace in the
    /// entries is ignored to allow for more intuitive formatting.
    ///
    /// As an example, the code `5, ,3,` followed by 78 further empty entries
    /// parses to a grid holding a 5 and a 3 in its top row.
    ///
    /// # Errors
    ///
    /// Any specialization of `SudokuParseError` (see that documentation).
    pub fn parse(code: &str) -> SudokuParseResult<SudokuGrid> {
        let mut grid = SudokuGrid::new();
        let entries: Vec<&str> = code.split(',').collect();

        if entries.len() != SudokuGrid::CELL_COUNT {
            return Err(SudokuParseError::WrongNumberOfCells);
        }

        for (i, entry) in entries.iter().enumerate() {
            let entry = entry.trim();

            if entry.is_empty() {
                continue;
            }

            let number = entry.parse::<usize>()?;

            if number == 0 || number > SudokuGrid::SIZE {
                return Err(SudokuParseError::InvalidNumber);
            }

            grid.cells[i] = Some(number);
        }

        Ok(grid)
    }

    /// Converts the grid into a `String` in a way that is consistent with
    /// [SudokuGrid::parse]. That is, a grid that is converted to a string
    /// and parsed again will not change, as is illustrated below.
    ///
    /// ```
    /// use sudoku_classic::SudokuGrid;
    ///
    /// let mut grid = SudokuGrid::new();
    ///
    /// // Just some arbitrary changes to create some content.
    /// grid.set_cell(1, 1, 4).unwrap();
    /// grid.set_cell(1, 2, 5).unwrap();
    ///
    /// let grid_str = grid.to_parseable_string();
    /// let grid_parsed = SudokuGrid::parse(grid_str.as_str()).unwrap();
    /// assert_eq!(grid, grid_parsed);
    /// ```
    pub fn to_parseable_string(&self) -> String {
        self.cells.iter()
            .map(to_string)
            .collect::<Vec<String>>()
            .join(",")
    }

    /// Computes the top-left cell of the block containing the cell at the
    /// given position, as a `(column, row)` pair. The coordinates are not
    /// checked against the grid bounds.
    pub fn block_anchor(column: usize, row: usize) -> (usize, usize) {
        let block_size = SudokuGrid::BLOCK_SIZE;
        ((column / block_size) * block_size, (row / block_size) * block_size)
    }

    fn check_bounds(column: usize, row: usize) -> SudokuResult<()> {
        if column >= SudokuGrid::SIZE || row >= SudokuGrid::SIZE {
            Err(SudokuError::OutOfBounds)
        }
        else {
            Ok(())
        }
    }

    /// Gets the content of the cell at the specified position.
    ///
    /// # Arguments
    ///
    /// * `column`: The column (x-coordinate) of the desired cell. Must be in
    /// the range `[0, 9[`.
    /// * `row`: The row (y-coordinate) of the desired cell. Must be in the
    /// range `[0, 9[`.
    ///
    /// # Errors
    ///
    /// If either `column` or `row` are not in the specified range. In that
    /// case, `SudokuError::OutOfBounds` is returned.
    pub fn get_cell(&self, column: usize, row: usize)
            -> SudokuResult<Option<usize>> {
        SudokuGrid::check_bounds(column, row)?;
        Ok(self.cells[index(column, row)])
    }

    /// Indicates whether the cell at the specified position has the given
    /// number. This will return `false` if there is a different number in
    /// that cell or it is empty.
    ///
    /// # Arguments
    ///
    /// * `column`: The column (x-coordinate) of the checked cell. Must be in
    /// the range `[0, 9[`.
    /// * `row`: The row (y-coordinate) of the checked cell. Must be in the
    /// range `[0, 9[`.
    /// * `number`: The number to check whether it is in the specified cell.
    /// If it is *not* in the range `[1, 9]`, `false` will always be
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
    /// overwritten.
    ///
    /// # Arguments
    ///
    /// * `column`: The column (x-coordinate) of the assigned cell. Must be
    /// in the range `[0, 9[`.
    /// * `row`: The row (y-coordinate) of the assigned cell. Must be in the
    /// range `[0, 9[`.
    /// * `number`: The number to assign to the specified cell. Must be in
    /// the range `[1, 9]`.
    ///
    /// # Errors
    ///
    /// * `SudokuError::OutOfBounds` If either `column` or `row` are not in
    /// the specified range.
    /// * `SudokuError::InvalidNumber` If `number` is not in the specified
    /// range.
    pub fn set_cell(&mut self, column: usize, row: usize, number: usize)
            -> SudokuResult<()> {
        SudokuGrid::check_bounds(column, row)?;

        if number == 0 || number > SudokuGrid::SIZE {
            return Err(SudokuError::InvalidNumber);
        }

        self.cells[index(column, row)] = Some(number);
        Ok(())
    }

    /// Clears the content of the cell at the specified position, that is, if
    /// it contains a number, that number is removed. If the cell is already
    /// empty, it will be left that way.
    ///
    /// # Arguments
    ///
    /// * `column`: The column (x-coordinate) of the cleared cell. Must be in
    /// the range `[0, 9[`.
    /// * `row`: The row (y-coordinate) of the cleared cell. Must be in the
    /// range `[0, 9[`.
    ///
    /// # Errors
    ///
    /// If either `column` or `row` are not in the specified range. In that
    /// case, `SudokuError::OutOfBounds` is returned.
    pub fn clear_cell(&mut self, column: usize, row: usize)
            -> SudokuResult<()> {
        SudokuGrid::check_bounds(column, row)?;
        self.cells[index(column, row)] = None;
        Ok(())
    }

    /// Assigns the content of another grid to this one, i.e., changes the
    /// cells in this grid to the state in `other`.
    pub fn assign(&mut self, other: &SudokuGrid) {
        self.cells.copy_from_slice(&other.cells);
    }

    /// Counts the number of clues given by this grid. This is the number of
    /// non-empty cells. While on average Sudoku with less clues are harder,
    /// this is *not* a reliable measure of difficulty.
    pub fn count_clues(&self) -> usize {
        self.cells.iter()
            .filter(|c| c.is_some())
            .count()
    }

    /// Indicates whether this grid is full, i.e. every cell is filled with a
    /// number. In this case, [SudokuGrid::count_clues] returns 81.
    pub fn is_full(&self) -> bool {
        !self.cells.iter().any(|c| c == &None)
    }

    /// Indicates whether this grid is empty, i.e. no cell is filled with a
    /// number. In this case, [SudokuGrid::count_clues] returns 0.
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|c| c == &None)
    }

    /// Indicates whether this grid configuration is a subset of another one.
    /// That is, all cells filled in this grid with some number must be
    /// filled in `other` with the same number. If this condition is met,
    /// `true` is returned, and `false` otherwise.
    pub fn is_subset(&self, other: &SudokuGrid) -> bool {
        self.cells.iter()
            .zip(other.cells.iter())
            .all(|(self_cell, other_cell)| {
                match self_cell {
                    Some(self_number) =>
                        match other_cell {
                            Some(other_number) => self_number == other_number,
                            None => false
                        },
                    None => true
                }
            })
    }

    /// Indicates whether this grid configuration is a superset of another
    /// one. That is, all cells filled in the `other` grid with some number
    /// must be filled in this one with the same number. If this condition is
    /// met, `true` is returned, and `false` otherwise.
    pub fn is_superset(&self, other: &SudokuGrid) -> bool {
        other.is_subset(self)
    }

    /// Gets a reference to the slice which holds the cells. They are in
    /// left-to-right, top-to-bottom order, where rows are together.
    pub fn cells(&self) -> &[Option<usize>] {
        &self.cells
    }
}

impl Default for SudokuGrid {
    fn default() -> SudokuGrid {
        SudokuGrid::new()
    }
}

impl From<SudokuGrid> for Vec<Option<usize>> {
    fn from(grid: SudokuGrid) -> Vec<Option<usize>> {
        grid.cells
    }
}

impl TryFrom<Vec<Option<usize>>> for SudokuGrid {
    type Error = SudokuParseError;

    fn try_from(cells: Vec<Option<usize>>)
            -> SudokuParseResult<SudokuGrid> {
        if cells.len() != SudokuGrid::CELL_COUNT {
            return Err(SudokuParseError::WrongNumberOfCells);
        }

        if cells.iter().flatten().any(|&n| n == 0 || n > SudokuGrid::SIZE) {
            return Err(SudokuParseError::InvalidNumber);
        }

        Ok(SudokuGrid {
            cells
        })
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    /// A complete, rule-valid solution grid used as a fixture by tests
    /// across the crate.
    pub(crate) const SOLUTION_CODE: &str = "\
        1,2,3,4,5,6,7,8,9,\
        4,5,6,7,8,9,1,2,3,\
        7,8,9,1,2,3,4,5,6,\
        2,3,4,5,6,7,8,9,1,\
        5,6,7,8,9,1,2,3,4,\
        8,9,1,2,3,4,5,6,7,\
        3,4,5,6,7,8,9,1,2,\
        6,7,8,9,1,2,3,4,5,\
        9,1,2,3,4,5,6,7,8";

    pub(crate) fn solution_grid() -> SudokuGrid {
        SudokuGrid::parse(SOLUTION_CODE).unwrap()
    }

    fn empty_code() -> String {
        ",".repeat(SudokuGrid::CELL_COUNT - 1)
    }

    #[test]
    fn parse_ok() {
        let mut code = String::from("1,,,2, ,3,,4, ");
        code.push_str(&",".repeat(72));
        let grid = SudokuGrid::parse(&code).unwrap();

        assert_eq!(Some(1), grid.get_cell(0, 0).unwrap());
        assert_eq!(None, grid.get_cell(1, 0).unwrap());
        assert_eq!(None, grid.get_cell(2, 0).unwrap());
        assert_eq!(Some(2), grid.get_cell(3, 0).unwrap());
        assert_eq!(None, grid.get_cell(4, 0).unwrap());
        assert_eq!(Some(3), grid.get_cell(5, 0).unwrap());
        assert_eq!(None, grid.get_cell(6, 0).unwrap());
        assert_eq!(Some(4), grid.get_cell(7, 0).unwrap());
        assert_eq!(None, grid.get_cell(8, 0).unwrap());
        assert_eq!(None, grid.get_cell(0, 1).unwrap());
    }

    #[test]
    fn parse_wrong_number_of_cells() {
        assert_eq!(Err(SudokuParseError::WrongNumberOfCells),
            SudokuGrid::parse(&",".repeat(79)));
        assert_eq!(Err(SudokuParseError::WrongNumberOfCells),
            SudokuGrid::parse(&",".repeat(81)));
    }

    #[test]
    fn parse_number_format_error() {
        let mut code = String::from("#");
        code.push_str(&empty_code());
        assert_eq!(Err(SudokuParseError::NumberFormatError),
            SudokuGrid::parse(&code));
    }

    #[test]
    fn parse_invalid_number() {
        let mut code = String::from("0");
        code.push_str(&empty_code());
        assert_eq!(Err(SudokuParseError::InvalidNumber),
            SudokuGrid::parse(&code));

        let mut code = String::from("10");
        code.push_str(&empty_code());
        assert_eq!(Err(SudokuParseError::InvalidNumber),
            SudokuGrid::parse(&code));
    }

    #[test]
    fn to_parseable_string_round_trip() {
        let mut grid = SudokuGrid::new();

        assert_eq!(empty_code(), grid.to_parseable_string());

        grid.set_cell(0, 0, 1).unwrap();
        grid.set_cell(1, 1, 2).unwrap();
        grid.set_cell(2, 2, 3).unwrap();

        let reparsed =
            SudokuGrid::parse(&grid.to_parseable_string()).unwrap();
        assert_eq!(grid, reparsed);
    }

    #[test]
    fn block_anchors() {
        assert_eq!((0, 0), SudokuGrid::block_anchor(0, 0));
        assert_eq!((0, 0), SudokuGrid::block_anchor(2, 2));
        assert_eq!((3, 0), SudokuGrid::block_anchor(5, 1));
        assert_eq!((6, 6), SudokuGrid::block_anchor(8, 8));
        assert_eq!((0, 6), SudokuGrid::block_anchor(1, 7));
    }

    #[test]
    fn cell_access_out_of_bounds() {
        let mut grid = SudokuGrid::new();
        assert_eq!(Err(SudokuError::OutOfBounds), grid.get_cell(9, 0));
        assert_eq!(Err(SudokuError::OutOfBounds), grid.set_cell(0, 9, 1));
        assert_eq!(Err(SudokuError::OutOfBounds), grid.clear_cell(10, 10));
    }

    #[test]
    fn set_cell_invalid_number() {
        let mut grid = SudokuGrid::new();
        assert_eq!(Err(SudokuError::InvalidNumber), grid.set_cell(0, 0, 0));
        assert_eq!(Err(SudokuError::InvalidNumber), grid.set_cell(0, 0, 10));
    }

    #[test]
    fn count_clues_and_empty_and_full() {
        let empty = SudokuGrid::new();
        let mut partial = SudokuGrid::new();
        partial.set_cell(0, 0, 1).unwrap();
        partial.set_cell(4, 4, 5).unwrap();
        let full = solution_grid();

        assert_eq!(0, empty.count_clues());
        assert_eq!(2, partial.count_clues());
        assert_eq!(SudokuGrid::CELL_COUNT, full.count_clues());

        assert!(empty.is_empty());
        assert!(!partial.is_empty());
        assert!(!full.is_empty());

        assert!(!empty.is_full());
        assert!(!partial.is_full());
        assert!(full.is_full());
    }

    fn assert_subset_relation(a: &SudokuGrid, b: &SudokuGrid,
            a_subset_b: bool, b_subset_a: bool) {
        assert!(a.is_subset(b) == a_subset_b);
        assert!(a.is_superset(b) == b_subset_a);
        assert!(b.is_subset(a) == b_subset_a);
        assert!(b.is_superset(a) == a_subset_b);
    }

    #[test]
    fn empty_is_subset() {
        let empty = SudokuGrid::new();
        let full = solution_grid();

        assert_subset_relation(&empty, &empty, true, true);
        assert_subset_relation(&empty, &full, true, false);
    }

    #[test]
    fn carved_grid_is_subset() {
        let full = solution_grid();
        let mut carved = full.clone();
        carved.clear_cell(3, 4).unwrap();
        carved.clear_cell(8, 0).unwrap();

        assert_subset_relation(&carved, &full, true, false);
    }

    #[test]
    fn differing_grids_not_subsets() {
        let a = solution_grid();
        let mut b = a.clone();
        b.set_cell(0, 0, 2).unwrap();

        assert_subset_relation(&a, &b, false, false);
    }

    #[test]
    fn assign_copies_cells() {
        let source = solution_grid();
        let mut target = SudokuGrid::new();
        target.assign(&source);
        assert_eq!(source, target);
    }

    #[test]
    fn serde_round_trip() {
        let grid = solution_grid();
        let json = serde_json::to_string(&grid).unwrap();
        let deserialized: SudokuGrid = serde_json::from_str(&json).unwrap();
        assert_eq!(grid, deserialized);
    }

    #[test]
    fn serde_rejects_wrong_cell_count() {
        let json = serde_json::to_string(&vec![Some(1usize); 80]).unwrap();
        let result: Result<SudokuGrid, _> = serde_json::from_str(&json);
        assert!(result.is_err());
    }

    #[test]
    fn serde_rejects_invalid_number() {
        let json = serde_json::to_string(&vec![Some(10usize); 81]).unwrap();
        let result: Result<SudokuGrid, _> = serde_json::from_str(&json);
        assert!(result.is_err());
    }
}
