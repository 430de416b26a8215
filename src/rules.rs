//! This module contains the classic-rule evaluation logic: per-cell conflict
//! detection, candidate digit computation, and win checking. All functions
//! are pure with respect to the given grid snapshot, so calling them twice
//! on an unmodified grid returns identical results.

use crate::SudokuGrid;
use crate::error::SudokuResult;
use crate::util::DigitSet;

fn count_in_row(grid: &SudokuGrid, row: usize, number: usize) -> usize {
    (0..SudokuGrid::SIZE)
        .filter(|&column| grid.has_number(column, row, number).unwrap())
        .count()
}

fn count_in_column(grid: &SudokuGrid, column: usize, number: usize)
        -> usize {
    (0..SudokuGrid::SIZE)
        .filter(|&row| grid.has_number(column, row, number).unwrap())
        .count()
}

fn count_in_block(grid: &SudokuGrid, column: usize, row: usize,
        number: usize) -> usize {
    let block_size = SudokuGrid::BLOCK_SIZE;
    let (block_column, block_row) = SudokuGrid::block_anchor(column, row);
    let mut count = 0;

    for other_row in block_row..(block_row + block_size) {
        for other_column in block_column..(block_column + block_size) {
            if grid.has_number(other_column, other_row, number).unwrap() {
                count += 1;
            }
        }
    }

    count
}

/// Indicates whether the cell at the given position conflicts with another
/// cell. An empty cell never conflicts. A cell holding some digit conflicts
/// if that digit occurs more than once in the cell's row, column, or block.
///
/// Note this check is pairwise, not directional: if two cells in a row hold
/// the same digit, *both* are reported as conflicting. There is no
/// designation of which one is "wrong".
///
/// # Arguments
///
/// * `column`: The column (x-coordinate) of the checked cell. Must be in the
/// range `[0, 9[`.
/// * `row`: The row (y-coordinate) of the checked cell. Must be in the range
/// `[0, 9[`.
///
/// # Errors
///
/// If either `column` or `row` are not in the specified range. In that case,
/// `SudokuError::OutOfBounds` is returned.
pub fn has_conflict(grid: &SudokuGrid, column: usize, row: usize)
        -> SudokuResult<bool> {
    let number = match grid.get_cell(column, row)? {
        Some(number) => number,
        None => return Ok(false)
    };

    Ok(count_in_row(grid, row, number) > 1 ||
        count_in_column(grid, column, number) > 1 ||
        count_in_block(grid, column, row, number) > 1)
}

/// Computes the set of digits that can be placed in the cell at the given
/// position without creating a conflict in its row, column, or block. For a
/// non-empty cell, the empty set is returned.
///
/// # Arguments
///
/// * `column`: The column (x-coordinate) of the queried cell. Must be in the
/// range `[0, 9[`.
/// * `row`: The row (y-coordinate) of the queried cell. Must be in the range
/// `[0, 9[`.
///
/// # Errors
///
/// If either `column` or `row` are not in the specified range. In that case,
/// `SudokuError::OutOfBounds` is returned.
pub fn candidates(grid: &SudokuGrid, column: usize, row: usize)
        -> SudokuResult<DigitSet> {
    if grid.get_cell(column, row)?.is_some() {
        return Ok(DigitSet::empty());
    }

    let mut result = DigitSet::all();

    for other_column in 0..SudokuGrid::SIZE {
        if let Some(number) = grid.get_cell(other_column, row).unwrap() {
            result.remove(number).unwrap();
        }
    }

    for other_row in 0..SudokuGrid::SIZE {
        if let Some(number) = grid.get_cell(column, other_row).unwrap() {
            result.remove(number).unwrap();
        }
    }

    let block_size = SudokuGrid::BLOCK_SIZE;
    let (block_column, block_row) = SudokuGrid::block_anchor(column, row);

    for other_row in block_row..(block_row + block_size) {
        for other_column in block_column..(block_column + block_size) {
            if let Some(number) =
                    grid.get_cell(other_column, other_row).unwrap() {
                result.remove(number).unwrap();
            }
        }
    }

    Ok(result)
}

/// Indicates whether the player's grid matches the generated solution
/// cell-for-cell. This deliberately checks equality against the one retained
/// solution, not general Sudoku validity: since carving does not guarantee a
/// unique solution, a player may complete an under-constrained puzzle to a
/// different valid grid, which this check will not recognize.
pub fn is_solved(player: &SudokuGrid, solution: &SudokuGrid) -> bool {
    player == solution
}

/// Indicates whether the given grid is a complete, rule-valid solution, that
/// is, it is full and every row, column, and block contains each digit
/// exactly once.
pub fn is_valid_solution(grid: &SudokuGrid) -> bool {
    if !grid.is_full() {
        return false;
    }

    let size = SudokuGrid::SIZE;
    let block_size = SudokuGrid::BLOCK_SIZE;

    for row in 0..size {
        let mut seen = DigitSet::empty();

        for column in 0..size {
            let number = grid.get_cell(column, row).unwrap().unwrap();

            if !seen.insert(number).unwrap() {
                return false;
            }
        }
    }

    for column in 0..size {
        let mut seen = DigitSet::empty();

        for row in 0..size {
            let number = grid.get_cell(column, row).unwrap().unwrap();

            if !seen.insert(number).unwrap() {
                return false;
            }
        }
    }

    for block_row in (0..size).step_by(block_size) {
        for block_column in (0..size).step_by(block_size) {
            let mut seen = DigitSet::empty();

            for row in block_row..(block_row + block_size) {
                for column in block_column..(block_column + block_size) {
                    let number = grid.get_cell(column, row).unwrap().unwrap();

                    if !seen.insert(number).unwrap() {
                        return false;
                    }
                }
            }
        }
    }

    true
}
