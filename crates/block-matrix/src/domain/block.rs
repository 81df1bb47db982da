//! # Block
//!
//! The immutable content unit stored in a grid cell.
//!
//! The hash is computed once at creation and persisted next to the data, so
//! row and column digests can be rebuilt from stored hashes alone and
//! `verify` can detect data that no longer matches its hash.

use serde::{Deserialize, Serialize};

use super::digest::{hash_bytes, Hash};
use super::errors::MatrixError;

/// Payload of the empty-block sentinel.
pub const EMPTY_BLOCK_DATA: [u8; 1] = [0];

/// Raw data plus its SHA-256 content hash.
///
/// Persisted as `{"data": "<hex>", "hash": "<hex>"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    #[serde(with = "hex::serde")]
    pub data: Vec<u8>,
    #[serde(with = "hex::serde")]
    pub hash: Hash,
}

impl Block {
    /// Create a block, hashing `data`.
    pub fn new(data: Vec<u8>) -> Self {
        let hash = hash_bytes(&data);
        Self { data, hash }
    }

    /// The sentinel placed in unwritten shell slots and redacted cells.
    pub fn empty() -> Self {
        Self::new(EMPTY_BLOCK_DATA.to_vec())
    }

    /// Re-hash the current data.
    pub fn compute_hash(&self) -> Hash {
        hash_bytes(&self.data)
    }

    /// Whether the stored hash still matches the data.
    pub fn is_intact(&self) -> bool {
        self.compute_hash() == self.hash
    }

    /// Whether this block carries the sentinel payload.
    ///
    /// A caller that inserts the single byte `0` is indistinguishable from
    /// the sentinel.
    pub fn is_empty_sentinel(&self) -> bool {
        self.data == EMPTY_BLOCK_DATA
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>, MatrixError> {
        Ok(serde_json::to_vec(self)?)
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, MatrixError> {
        Ok(serde_json::from_slice(bytes)?)
    }
}
