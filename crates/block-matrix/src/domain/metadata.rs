//! # Matrix Metadata
//!
//! The singleton `"info"` record: dimension, block count and one digest per
//! row and per column.

use serde::{Deserialize, Serialize};

use super::digest::{Axis, Hash, EMPTY_DIGEST};
use super::errors::{IntegrityKind, IntegrityViolation, MatrixError};
use super::indexing::{capacity, smallest_valid_dimension};

/// Persisted matrix metadata.
///
/// Serialized as `{"size", "block_count", "rows", "cols"}` with digests as
/// hex strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatrixInfo {
    /// Grid dimension `n`; always the smallest `n` with `n² − n >= block_count`.
    #[serde(rename = "size")]
    pub dimension: usize,
    /// Number of assigned blocks; the highest assigned block number.
    pub block_count: u64,
    /// Digest of each row, `rows.len() == dimension`.
    #[serde(with = "hex_digests")]
    pub rows: Vec<Hash>,
    /// Digest of each column, `cols.len() == dimension`.
    #[serde(with = "hex_digests")]
    pub cols: Vec<Hash>,
}

impl Default for MatrixInfo {
    fn default() -> Self {
        Self {
            dimension: 1,
            block_count: 0,
            rows: vec![EMPTY_DIGEST],
            cols: vec![EMPTY_DIGEST],
        }
    }
}

impl MatrixInfo {
    /// Metadata of an empty matrix.
    pub fn new() -> Self {
        Self::default()
    }

    /// Block slots available at the current dimension.
    pub fn capacity(&self) -> u64 {
        capacity(self.dimension)
    }

    pub fn digests(&self, axis: Axis) -> &[Hash] {
        match axis {
            Axis::Row => &self.rows,
            Axis::Column => &self.cols,
        }
    }

    pub fn digest(&self, axis: Axis, index: usize) -> Option<&Hash> {
        self.digests(axis).get(index)
    }

    /// Replace the stored digest of one line.
    pub fn set_digest(&mut self, axis: Axis, index: usize, digest: Hash) -> Result<(), MatrixError> {
        let digests = match axis {
            Axis::Row => &mut self.rows,
            Axis::Column => &mut self.cols,
        };
        let slot = digests.get_mut(index).ok_or_else(|| {
            IntegrityViolation::new(IntegrityKind::MalformedMetadata, index as u64)
        })?;
        *slot = digest;
        Ok(())
    }

    /// Grow to `dimension`, giving every new row and column the empty digest.
    pub fn extend_to(&mut self, dimension: usize) {
        if dimension <= self.dimension {
            return;
        }
        self.rows.resize(dimension, EMPTY_DIGEST);
        self.cols.resize(dimension, EMPTY_DIGEST);
        self.dimension = dimension;
    }

    /// Whether dimension, block count and digest vectors agree.
    pub fn is_well_formed(&self) -> bool {
        self.dimension == smallest_valid_dimension(self.block_count)
            && self.rows.len() == self.dimension
            && self.cols.len() == self.dimension
    }

    /// Indices whose digest on `axis` differs between `self` and `other`.
    pub fn changed_lines(&self, other: &MatrixInfo, axis: Axis) -> Vec<usize> {
        let ours = self.digests(axis);
        let theirs = other.digests(axis);
        (0..ours.len().max(theirs.len()))
            .filter(|&i| ours.get(i) != theirs.get(i))
            .collect()
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>, MatrixError> {
        Ok(serde_json::to_vec(self)?)
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, MatrixError> {
        Ok(serde_json::from_slice(bytes)?)
    }
}

/// Serde adapter for `Vec<Hash>` as a list of hex strings.
mod hex_digests {
    use hex::FromHex;
    use serde::{de::Error, Deserialize, Deserializer, Serializer};

    use crate::domain::digest::Hash;

    pub fn serialize<S: Serializer>(digests: &[Hash], serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(digests.iter().map(hex::encode))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<Hash>, D::Error> {
        Vec::<String>::deserialize(deserializer)?
            .iter()
            .map(|s| Hash::from_hex(s).map_err(D::Error::custom))
            .collect()
    }
}
