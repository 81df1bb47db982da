//! # Matrix Snapshot
//!
//! Dense `dimension × dimension` view of the grid for presentation and
//! export. Diagonal cells carry no block.

use super::block::Block;
use super::indexing::GridPosition;

/// One grid cell of a snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cell {
    /// Structurally excluded diagonal position.
    Diagonal,
    /// Block stored at this position (the empty sentinel if never written).
    Block(Block),
}

impl Cell {
    pub fn block(&self) -> Option<&Block> {
        match self {
            Cell::Block(block) => Some(block),
            Cell::Diagonal => None,
        }
    }
}

/// Dense copy of the grid taken under one read lock.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatrixSnapshot {
    pub dimension: usize,
    pub block_count: u64,
    /// Row-major cells, `cells.len() == dimension`.
    pub cells: Vec<Vec<Cell>>,
}

impl MatrixSnapshot {
    pub fn cell(&self, position: GridPosition) -> Option<&Cell> {
        self.cells.get(position.row)?.get(position.column)
    }

    /// Iterate rows of the grid.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.iter().map(Vec::as_slice)
    }
}
