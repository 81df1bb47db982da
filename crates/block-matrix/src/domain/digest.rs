//! # Digest Engine
//!
//! Row and column digests: `SHA-256(concat(hash(b) for b in line))`, where
//! the line's blocks are taken in the fixed order of the indexing functions
//! and only assigned blocks (`number <= block_count`) take part.
//!
//! Digests are always recomputed from the member hashes, never patched.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fmt;

use super::indexing::{column_block_numbers, row_block_numbers, BlockNumber};

/// 32-byte SHA-256 output.
pub type Hash = [u8; 32];

/// SHA-256 of the empty byte sequence; the digest of a line with no blocks.
pub const EMPTY_DIGEST: Hash = [
    0xe3, 0xb0, 0xc4, 0x42, 0x98, 0xfc, 0x1c, 0x14, 0x9a, 0xfb, 0xf4, 0xc8, 0x99, 0x6f, 0xb9, 0x24,
    0x27, 0xae, 0x41, 0xe4, 0x64, 0x9b, 0x93, 0x4c, 0xa4, 0x95, 0x99, 0x1b, 0x78, 0x52, 0xb8, 0x55,
];

/// Hash arbitrary bytes with SHA-256.
pub fn hash_bytes(data: &[u8]) -> Hash {
    Sha256::digest(data).into()
}

/// One of the two digest axes of the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    Row,
    Column,
}

impl Axis {
    pub const ALL: [Axis; 2] = [Axis::Row, Axis::Column];

    /// All block numbers on line `index` of this axis, in digest order.
    pub fn block_numbers(self, index: usize, dimension: usize) -> Vec<BlockNumber> {
        match self {
            Axis::Row => row_block_numbers(index, dimension),
            Axis::Column => column_block_numbers(index, dimension),
        }
    }

    /// Block numbers on line `index` that hold an assigned block.
    pub fn digest_members(
        self,
        index: usize,
        dimension: usize,
        block_count: u64,
    ) -> Vec<BlockNumber> {
        self.block_numbers(index, dimension)
            .into_iter()
            .filter(|number| *number <= block_count)
            .collect()
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::Row => f.write_str("row"),
            Axis::Column => f.write_str("column"),
        }
    }
}

/// Compute the digest of one row or column.
///
/// `content_hash` resolves a member block number to the hash that should be
/// folded in. Any error it returns aborts the computation.
pub fn compute_digest<F, E>(
    axis: Axis,
    index: usize,
    dimension: usize,
    block_count: u64,
    mut content_hash: F,
) -> Result<Hash, E>
where
    F: FnMut(BlockNumber) -> Result<Hash, E>,
{
    let mut hasher = Sha256::new();
    for number in axis.digest_members(index, dimension, block_count) {
        hasher.update(content_hash(number)?);
    }
    Ok(hasher.finalize().into())
}
