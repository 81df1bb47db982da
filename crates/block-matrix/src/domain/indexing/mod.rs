//! # Grid Indexing
//!
//! Pure bijection between 1-based block numbers and the off-diagonal cells of
//! the square grid.
//!
//! Blocks fill the grid shell by shell. Shell `s` owns the `2s` cells of row
//! `s` left of the diagonal and column `s` above it, numbered
//! `s² − s + 1 ..= s² + s`. Odd numbers walk down column `s`, even numbers
//! walk along row `s`:
//!
//! ```text
//!         c0  c1  c2  c3
//!    r0    .   1   3   7
//!    r1    2   .   5   9
//!    r2    4   6   .  11
//!    r3    8  10  12   .
//! ```
//!
//! Growing the dimension by one only appends the next shell, so a block's
//! position never changes once assigned.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};


/// 1-based sequential block identifier. `0` is never a valid block number.
pub type BlockNumber = u64;

/// A cell of the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct GridPosition {
    pub row: usize,
    pub column: usize,
}

impl GridPosition {
    pub fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }

    /// Diagonal cells are structurally excluded and never hold a block.
    pub fn is_diagonal(&self) -> bool {
        self.row == self.column
    }

    /// Index of the shell this cell belongs to.
    pub fn shell(&self) -> usize {
        self.row.max(self.column)
    }
}

/// Number of block slots in a grid of the given dimension (`d² − d`).
pub fn capacity(dimension: usize) -> u64 {
    let d = dimension as u64;
    d * d.saturating_sub(1)
}

/// Smallest dimension `n ≥ 1` with `n² − n ≥ block_count`.
pub fn smallest_valid_dimension(block_count: u64) -> usize {
    let mut dimension = ((block_count as f64).sqrt() as usize).max(1);
    while capacity(dimension) < block_count {
        dimension += 1;
    }
    while dimension > 1 && capacity(dimension - 1) >= block_count {
        dimension -= 1;
    }
    dimension
}

/// Shell index holding `number`: the smallest `s` with `s² + s ≥ number`.
fn shell_of(number: BlockNumber) -> u64 {
    let mut shell = (number as f64).sqrt() as u64;
    while shell * shell + shell < number {
        shell += 1;
    }
    while shell > 1 && (shell - 1) * (shell - 1) + (shell - 1) >= number {
        shell -= 1;
    }
    shell
}

/// Grid cell of a block number. Returns `None` for `0`.
pub fn locate(number: BlockNumber) -> Option<GridPosition> {
    if number == 0 {
        return None;
    }

    let shell = shell_of(number);
    let offset = number - (shell * shell - shell + 1);
    let shell = shell as usize;

    let position = if offset % 2 == 0 {
        // above the diagonal, walking down column `shell`
        GridPosition::new((offset / 2) as usize, shell)
    } else {
        // below the diagonal, walking along row `shell`
        GridPosition::new(shell, ((offset - 1) / 2) as usize)
    };
    Some(position)
}

/// Block number assigned to a cell. Returns `None` on the diagonal.
pub fn block_number_at(position: GridPosition) -> Option<BlockNumber> {
    let row = position.row as u64;
    let column = position.column as u64;
    match row.cmp(&column) {
        Ordering::Less => Some(column * column - column + 1 + 2 * row),
        Ordering::Greater => Some(row * row - row + 2 + 2 * column),
        Ordering::Equal => None,
    }
}

/// Block numbers of row `row` in a grid of `dimension`.
///
/// The run left of the diagonal comes first, then the run right of it. The
/// order is fixed because row digests are order-sensitive.
pub fn row_block_numbers(row: usize, dimension: usize) -> Vec<BlockNumber> {
    if row >= dimension {
        return Vec::new();
    }
    (0..dimension)
        .filter_map(|column| block_number_at(GridPosition::new(row, column)))
        .collect()
}

/// Block numbers of column `column` in a grid of `dimension`.
///
/// The run above the diagonal comes first, then the run below it.
pub fn column_block_numbers(column: usize, dimension: usize) -> Vec<BlockNumber> {
    if column >= dimension {
        return Vec::new();
    }
    (0..dimension)
        .filter_map(|row| block_number_at(GridPosition::new(row, column)))
        .collect()
}

/// Block numbers added when the grid grows from `from` to `to`.
pub fn shell_block_numbers(from: usize, to: usize) -> std::ops::RangeInclusive<BlockNumber> {
    (capacity(from) + 1)..=capacity(to)
}
